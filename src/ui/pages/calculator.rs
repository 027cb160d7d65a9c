use dioxus::prelude::*;

use crate::{
    domain::{AppState, Evaluation, Mode, PriceBreakdown},
    ui::{
        components::{
            breakdown_table::{breakdown_rows, BreakdownTable},
            kpi_card::KpiCard,
            mode_selector::ModeSelector,
            number_field::NumberField,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme::{self, Tone},
    },
    util::format::{format_brl, format_percent},
};

/// Presentation of the field that changes with the active mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeField {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub prefix: Option<&'static str>,
}

pub fn mode_field(mode: Mode) -> ModeField {
    match mode {
        Mode::DeriveFromCost => ModeField {
            label: "Lucro Desejado (%)",
            placeholder: None,
            prefix: None,
        },
        Mode::AnalyzeExistingPrice => ModeField {
            label: "Preço de Venda Atual (R$)",
            placeholder: Some("0,00"),
            prefix: Some("R$"),
        },
        Mode::ApplyMarkup => ModeField {
            label: "Markup Desejado (%)",
            placeholder: Some("100"),
            prefix: None,
        },
    }
}

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (mode, draft) = state.with(|st| (st.mode, st.draft.clone()));
    let evaluation = state.with(|st| st.evaluation());
    let field = mode_field(mode);
    let mode_value = draft.mode_value(mode).to_string();

    let on_reset = move |_| {
        state.with_mut(|st| st.reset_draft());
        push_toast(toasts.clone(), ToastKind::Info, "Campos restaurados.");
    };

    let outcome = match evaluation {
        Evaluation::Ready(breakdown) => {
            let expenses = draft.expenses();
            rsx! {
                Results {
                    breakdown,
                    cost: draft.cost_value(),
                    fixed_pct: expenses.fixed_pct,
                    variable_pct: expenses.variable_pct,
                }
            }
        }
        Evaluation::Invalid(err) => {
            tracing::trace!(error = %err, "pricing input rejected");
            rsx! {
                div { class: "warning", "⚠️ {err}" }
            }
        }
        Evaluation::Absent => rsx! {
            div { class: "empty",
                div { class: "empty__icon", "💰" }
                p { class: "empty__text", "Digite o custo do produto para calcular" }
            }
        },
    };

    rsx! {
        ModeSelector {
            active: mode,
            onselect: move |next: Mode| {
                tracing::debug!(?next, "mode selected");
                state.with_mut(|st| st.mode = next);
            },
        }

        div { class: "calc-card",
            div { class: "calc-card__body",
                NumberField {
                    label: "Custo do Produto",
                    value: draft.cost.clone(),
                    placeholder: "0,00",
                    prefix: "R$",
                    oninput: move |value: String| state.with_mut(|st| st.draft.cost = value),
                }
                div { class: "calc-card__split",
                    NumberField {
                        label: "Despesas Fixas (%)",
                        value: draft.fixed_expense_pct.clone(),
                        oninput: move |value: String| state.with_mut(|st| st.draft.fixed_expense_pct = value),
                    }
                    NumberField {
                        label: "Despesas Variáveis (%)",
                        value: draft.variable_expense_pct.clone(),
                        oninput: move |value: String| state.with_mut(|st| st.draft.variable_expense_pct = value),
                    }
                }
                div { class: "calc-card__mode",
                    NumberField {
                        key: "{mode:?}",
                        label: field.label,
                        value: mode_value,
                        placeholder: field.placeholder,
                        prefix: field.prefix,
                        emphasized: true,
                        oninput: move |value: String| state.with_mut(|st| *st.draft.mode_value_mut(mode) = value),
                    }
                }
                div { class: "calc-card__actions",
                    button { class: "{theme::btn_ghost()}", onclick: on_reset, "Limpar" }
                }
            }
        }

        {outcome}
    }
}

#[component]
fn Results(breakdown: PriceBreakdown, cost: f64, fixed_pct: f64, variable_pct: f64) -> Element {
    let metrics = [
        ("Markup", format_percent(breakdown.markup_pct, 1), Tone::Neutral),
        ("Margem", format_percent(breakdown.margin_pct, 1), Tone::Neutral),
        ("Lucro", format_brl(breakdown.profit_amount), Tone::Profit),
        (
            "Desp. Total",
            format_brl(breakdown.total_expense_amount()),
            Tone::Expense,
        ),
    ];
    let rows = breakdown_rows(cost, fixed_pct, variable_pct, &breakdown);
    let sale_price = format_brl(breakdown.sale_price);

    rsx! {
        div { class: "hero",
            p { class: "hero__label", "Preço de Venda Ideal" }
            p { class: "hero__value", "{sale_price}" }
        }
        div { class: "metrics",
            for (title, value, tone) in metrics {
                KpiCard { key: "{title}", title: title.to_string(), value, tone }
            }
        }
        BreakdownTable { rows }
    }
}
