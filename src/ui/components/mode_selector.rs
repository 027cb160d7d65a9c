use dioxus::prelude::*;

use crate::domain::Mode;
use crate::ui::theme;

#[component]
pub fn ModeSelector(active: Mode, onselect: EventHandler<Mode>) -> Element {
    rsx! {
        div { class: "mode-grid",
            for mode in Mode::ALL {
                button {
                    key: "{mode:?}",
                    class: "{theme::mode_card(mode == active)}",
                    onclick: move |_| onselect.call(mode),
                    span { class: "mode-card__icon", "{mode.icon()}" }
                    span { class: "{theme::mode_card_label(mode == active)}", "{mode.label()}" }
                    span { class: "mode-card__desc", "{mode.description()}" }
                    if mode == active {
                        div { class: "mode-card__dot" }
                    }
                }
            }
        }
    }
}
