use dioxus::prelude::*;

use crate::ui::theme::{self, Tone};

#[component]
pub fn KpiCard(title: String, value: String, tone: Tone) -> Element {
    rsx! {
        div {
            class: "metric",
            p { class: "metric__label", "{title}" }
            p { class: "metric__value {theme::tone_text(tone)}", "{value}" }
        }
    }
}
