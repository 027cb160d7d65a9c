use dioxus::prelude::*;

use crate::{
    domain::PriceBreakdown,
    ui::theme::{self, Tone},
    util::format::{format_brl, format_input_percent},
};

#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownRow {
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

/// Rows of the "Composição do Preço" table, cost first and sale price last.
pub fn breakdown_rows(
    cost: f64,
    fixed_pct: f64,
    variable_pct: f64,
    breakdown: &PriceBreakdown,
) -> Vec<BreakdownRow> {
    vec![
        BreakdownRow {
            label: "Custo do produto".to_string(),
            value: format_brl(cost),
            tone: Tone::Neutral,
        },
        BreakdownRow {
            label: format!("Despesas fixas ({})", format_input_percent(fixed_pct)),
            value: format_brl(breakdown.fixed_expense_amount),
            tone: Tone::Muted,
        },
        BreakdownRow {
            label: format!("Despesas variáveis ({})", format_input_percent(variable_pct)),
            value: format_brl(breakdown.variable_expense_amount),
            tone: Tone::Muted,
        },
        BreakdownRow {
            label: "Lucro líquido".to_string(),
            value: format_brl(breakdown.profit_amount),
            tone: Tone::Profit,
        },
        BreakdownRow {
            label: "PREÇO DE VENDA".to_string(),
            value: format_brl(breakdown.sale_price),
            tone: Tone::Accent,
        },
    ]
}

#[component]
pub fn BreakdownTable(rows: Vec<BreakdownRow>) -> Element {
    rsx! {
        div { class: "breakdown",
            h3 { class: "breakdown__title", "Composição do Preço" }
            div {
                for row in rows {
                    div {
                        key: "{row.label}",
                        class: "{theme::breakdown_row(row.tone)}",
                        span { class: "breakdown-row__label", "{row.label}" }
                        span { class: "breakdown-row__value {theme::tone_text(row.tone)}", "{row.value}" }
                    }
                }
            }
        }
    }
}
