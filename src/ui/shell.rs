use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_AUTHOR};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "page",
            div { class: "page__accent" }
            header { class: "header",
                div { class: "container header__row",
                    div {
                        div { class: "badge",
                            div { class: "badge__dot" }
                            span { "Calculadora" }
                        }
                        h1 { class: "title",
                            "Preço de "
                            span { class: "title__highlight", "Venda" }
                        }
                        p { class: "subtitle", "Calcule o preço ideal para lucrar de verdade" }
                    }
                    nav { class: "nav",
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: "Calcular",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Guide {}),
                            onclick: move |_| { nav.push(Route::Guide {}); },
                            label: "Guia",
                        }
                    }
                }
            }
            main { class: "container",
                {children}
                footer { class: "footer",
                    p { class: "footer__text",
                        "Calculadora de Preço © 2026 • Ferramenta informativa • {version_label()} • {APP_AUTHOR}"
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
