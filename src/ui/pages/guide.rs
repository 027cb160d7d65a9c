use dioxus::prelude::*;

struct GlossaryEntry {
    term: &'static str,
    text: &'static str,
    formula: Option<&'static str>,
}

static GLOSSARY: [GlossaryEntry; 4] = [
    GlossaryEntry {
        term: "Markup",
        text: "Percentual somado ao custo para chegar ao preço de venda.",
        formula: Some("(preço − custo) ÷ custo × 100"),
    },
    GlossaryEntry {
        term: "Margem",
        text: "Percentual do preço de venda que sobra como lucro depois de custo e despesas.",
        formula: Some("lucro ÷ preço × 100"),
    },
    GlossaryEntry {
        term: "Despesas fixas",
        text: "Custos de estrutura, como aluguel e salários, expressos como percentual do preço de venda.",
        formula: None,
    },
    GlossaryEntry {
        term: "Despesas variáveis",
        text: "Impostos e comissões, também expressos como percentual do preço de venda.",
        formula: None,
    },
];

#[component]
pub fn GuidePage() -> Element {
    rsx! {
        div { class: "guide",
            for entry in GLOSSARY.iter() {
                div { key: "{entry.term}", class: "guide__entry",
                    h3 { class: "guide__term", "{entry.term}" }
                    p { class: "guide__text", "{entry.text}" }
                    if let Some(formula) = entry.formula {
                        code { class: "guide__formula", "{formula}" }
                    }
                }
            }
            div { class: "guide__entry",
                h3 { class: "guide__term", "Markup não é margem" }
                p {
                    class: "guide__text",
                    "Um markup de 100% dobra o custo, mas com 25% de despesas sobre o preço a margem fica em 25%. "
                    "Use \"Calcular Preço\" para partir da margem que você quer e \"Aplicar Markup\" para partir do percentual sobre o custo."
                }
            }
        }
    }
}
