use dioxus::prelude::*;

use crate::ui::theme;

/// Free-text numeric input. Parsing happens in the domain layer, so the field
/// keeps whatever the user typed.
#[component]
pub fn NumberField(
    label: &'static str,
    value: String,
    oninput: EventHandler<String>,
    placeholder: Option<&'static str>,
    prefix: Option<&'static str>,
    #[props(default)] emphasized: bool,
) -> Element {
    let input_class = theme::input_class(emphasized, prefix.is_some());

    rsx! {
        div {
            label { class: "{theme::label_class(emphasized)}", "{label}" }
            div { class: "field-wrap",
                if let Some(symbol) = prefix {
                    span { class: "field-prefix", "{symbol}" }
                }
                input {
                    r#type: "text",
                    inputmode: "decimal",
                    class: "{input_class}",
                    value: "{value}",
                    placeholder: placeholder.unwrap_or_default(),
                    oninput: move |evt| oninput.call(evt.value()),
                }
            }
        }
    }
}
