//! Closed-form sale price calculations.
//!
//! Every percentage is relative to the *final* sale price, except markup which
//! is relative to cost. All functions are pure: identical inputs always yield
//! bit-identical outputs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which quantity the user is solving for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Sale price from cost and a desired margin.
    #[default]
    DeriveFromCost,
    /// Margin and markup of a price the user already charges.
    AnalyzeExistingPrice,
    /// Sale price from cost and a target markup.
    ApplyMarkup,
}

impl Mode {
    pub const ALL: [Mode; 3] = [
        Mode::DeriveFromCost,
        Mode::AnalyzeExistingPrice,
        Mode::ApplyMarkup,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::DeriveFromCost => "Calcular Preço",
            Mode::AnalyzeExistingPrice => "Analisar Preço",
            Mode::ApplyMarkup => "Aplicar Markup",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Mode::DeriveFromCost => "Quanto devo cobrar?",
            Mode::AnalyzeExistingPrice => "Qual meu lucro atual?",
            Mode::ApplyMarkup => "Definir % de markup",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Mode::DeriveFromCost => "🎯",
            Mode::AnalyzeExistingPrice => "📊",
            Mode::ApplyMarkup => "📈",
        }
    }
}

/// Expense percentages shared by every mode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Expenses {
    pub fixed_pct: f64,
    pub variable_pct: f64,
}

impl Expenses {
    pub fn new(fixed_pct: f64, variable_pct: f64) -> Self {
        Self {
            fixed_pct,
            variable_pct,
        }
    }

    fn fixed_amount(&self, sale_price: f64) -> f64 {
        sale_price * self.fixed_pct / 100.0
    }

    fn variable_amount(&self, sale_price: f64) -> f64 {
        sale_price * self.variable_pct / 100.0
    }
}

/// Engine input. Each variant carries only the value its mode needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PricingInput {
    DeriveFromCost {
        cost: f64,
        expenses: Expenses,
        desired_margin_pct: f64,
    },
    AnalyzeExistingPrice {
        cost: f64,
        expenses: Expenses,
        current_sale_price: f64,
    },
    ApplyMarkup {
        cost: f64,
        expenses: Expenses,
        desired_markup_pct: f64,
    },
}

impl PricingInput {
    /// Builds the input for `mode`, reading `mode_value` as that mode's third parameter.
    pub fn for_mode(mode: Mode, cost: f64, expenses: Expenses, mode_value: f64) -> Self {
        match mode {
            Mode::DeriveFromCost => PricingInput::DeriveFromCost {
                cost,
                expenses,
                desired_margin_pct: mode_value,
            },
            Mode::AnalyzeExistingPrice => PricingInput::AnalyzeExistingPrice {
                cost,
                expenses,
                current_sale_price: mode_value,
            },
            Mode::ApplyMarkup => PricingInput::ApplyMarkup {
                cost,
                expenses,
                desired_markup_pct: mode_value,
            },
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            PricingInput::DeriveFromCost { .. } => Mode::DeriveFromCost,
            PricingInput::AnalyzeExistingPrice { .. } => Mode::AnalyzeExistingPrice,
            PricingInput::ApplyMarkup { .. } => Mode::ApplyMarkup,
        }
    }

    pub fn cost(&self) -> f64 {
        match *self {
            PricingInput::DeriveFromCost { cost, .. }
            | PricingInput::AnalyzeExistingPrice { cost, .. }
            | PricingInput::ApplyMarkup { cost, .. } => cost,
        }
    }

    pub fn expenses(&self) -> Expenses {
        match *self {
            PricingInput::DeriveFromCost { expenses, .. }
            | PricingInput::AnalyzeExistingPrice { expenses, .. }
            | PricingInput::ApplyMarkup { expenses, .. } => expenses,
        }
    }
}

/// Derived figures for one evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceBreakdown {
    pub sale_price: f64,
    pub markup_pct: f64,
    pub margin_pct: f64,
    pub profit_amount: f64,
    pub fixed_expense_amount: f64,
    pub variable_expense_amount: f64,
}

impl PriceBreakdown {
    pub fn total_expense_amount(&self) -> f64 {
        self.fixed_expense_amount + self.variable_expense_amount
    }

    fn is_finite(&self) -> bool {
        all_finite(&[
            self.sale_price,
            self.markup_pct,
            self.margin_pct,
            self.profit_amount,
            self.fixed_expense_amount,
            self.variable_expense_amount,
        ])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Total de despesas + lucro deve ser menor que 100%")]
    InvalidComposition,
    #[error("O preço de venda deve ser maior que o custo")]
    PriceBelowCost,
}

/// Tagged view of one evaluation, as the display consumes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Evaluation {
    Ready(PriceBreakdown),
    Invalid(PricingError),
    /// Not enough input yet.
    Absent,
}

impl From<Result<Option<PriceBreakdown>, PricingError>> for Evaluation {
    fn from(result: Result<Option<PriceBreakdown>, PricingError>) -> Self {
        match result {
            Ok(Some(breakdown)) => Evaluation::Ready(breakdown),
            Ok(None) => Evaluation::Absent,
            Err(err) => Evaluation::Invalid(err),
        }
    }
}

/// Runs the engine. `Ok(None)` means the input is incomplete rather than invalid.
pub fn calculate(input: &PricingInput) -> Result<Option<PriceBreakdown>, PricingError> {
    match *input {
        PricingInput::DeriveFromCost {
            cost,
            expenses,
            desired_margin_pct,
        } => derive_from_cost(cost, expenses, desired_margin_pct),
        PricingInput::AnalyzeExistingPrice {
            cost,
            expenses,
            current_sale_price,
        } => analyze_existing_price(cost, expenses, current_sale_price),
        PricingInput::ApplyMarkup {
            cost,
            expenses,
            desired_markup_pct,
        } => Ok(apply_markup(cost, expenses, desired_markup_pct)),
    }
}

pub fn evaluate(input: &PricingInput) -> Evaluation {
    calculate(input).into()
}

pub fn derive_from_cost(
    cost: f64,
    expenses: Expenses,
    desired_margin_pct: f64,
) -> Result<Option<PriceBreakdown>, PricingError> {
    if !is_positive(cost)
        || !all_finite(&[expenses.fixed_pct, expenses.variable_pct, desired_margin_pct])
    {
        return Ok(None);
    }

    let total_pct = expenses.fixed_pct + expenses.variable_pct + desired_margin_pct;
    if total_pct >= 100.0 {
        return Err(PricingError::InvalidComposition);
    }

    let sale_price = cost / (1.0 - total_pct / 100.0);
    let breakdown = PriceBreakdown {
        sale_price,
        markup_pct: (sale_price - cost) / cost * 100.0,
        margin_pct: desired_margin_pct,
        profit_amount: sale_price * desired_margin_pct / 100.0,
        fixed_expense_amount: expenses.fixed_amount(sale_price),
        variable_expense_amount: expenses.variable_amount(sale_price),
    };
    Ok(finite_or_absent(breakdown))
}

pub fn analyze_existing_price(
    cost: f64,
    expenses: Expenses,
    current_sale_price: f64,
) -> Result<Option<PriceBreakdown>, PricingError> {
    if !is_positive(cost)
        || !is_positive(current_sale_price)
        || !all_finite(&[expenses.fixed_pct, expenses.variable_pct])
    {
        return Ok(None);
    }

    if current_sale_price <= cost {
        return Err(PricingError::PriceBelowCost);
    }

    Ok(finite_or_absent(breakdown_at_price(
        cost,
        expenses,
        current_sale_price,
    )))
}

pub fn apply_markup(cost: f64, expenses: Expenses, desired_markup_pct: f64) -> Option<PriceBreakdown> {
    if !is_positive(cost)
        || !is_positive(desired_markup_pct)
        || !all_finite(&[expenses.fixed_pct, expenses.variable_pct])
    {
        return None;
    }

    let sale_price = cost * (1.0 + desired_markup_pct / 100.0);
    let mut breakdown = breakdown_at_price(cost, expenses, sale_price);
    breakdown.markup_pct = desired_markup_pct;
    finite_or_absent(breakdown)
}

/// Inputs near `f64::MAX` can overflow; such results count as absent.
fn finite_or_absent(breakdown: PriceBreakdown) -> Option<PriceBreakdown> {
    Some(breakdown).filter(PriceBreakdown::is_finite)
}

fn breakdown_at_price(cost: f64, expenses: Expenses, sale_price: f64) -> PriceBreakdown {
    let fixed_expense_amount = expenses.fixed_amount(sale_price);
    let variable_expense_amount = expenses.variable_amount(sale_price);
    let profit_amount = sale_price - cost - fixed_expense_amount - variable_expense_amount;

    PriceBreakdown {
        sale_price,
        markup_pct: (sale_price - cost) / cost * 100.0,
        margin_pct: profit_amount / sale_price * 100.0,
        profit_amount,
        fixed_expense_amount,
        variable_expense_amount,
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn standard_expenses() -> Expenses {
        Expenses::new(15.0, 10.0)
    }

    #[test]
    fn derive_from_cost_matches_worked_example() {
        let breakdown = derive_from_cost(100.0, standard_expenses(), 20.0)
            .unwrap()
            .unwrap();

        assert_close(breakdown.sale_price, 100.0 / 0.55);
        assert_close(breakdown.markup_pct, 81.818_181_818);
        assert_close(breakdown.profit_amount, 36.363_636_363);
        assert_eq!(breakdown.margin_pct, 20.0);
        assert_close(breakdown.fixed_expense_amount, 27.272_727_272);
        assert_close(breakdown.variable_expense_amount, 18.181_818_181);
    }

    #[test]
    fn derive_from_cost_components_sum_to_price() {
        let breakdown = derive_from_cost(42.5, Expenses::new(7.0, 3.5), 12.0)
            .unwrap()
            .unwrap();
        let sum = 42.5
            + breakdown.fixed_expense_amount
            + breakdown.variable_expense_amount
            + breakdown.profit_amount;
        assert!((sum - breakdown.sale_price).abs() < EPS);
    }

    #[test]
    fn derive_from_cost_rejects_full_composition() {
        assert_eq!(
            derive_from_cost(100.0, Expenses::new(50.0, 30.0), 25.0),
            Err(PricingError::InvalidComposition)
        );
        assert_eq!(
            derive_from_cost(100.0, Expenses::new(50.0, 30.0), 20.0),
            Err(PricingError::InvalidComposition)
        );
    }

    #[test]
    fn derive_from_cost_without_cost_is_absent() {
        assert_eq!(derive_from_cost(0.0, standard_expenses(), 20.0), Ok(None));
        // Absent takes precedence over an invalid composition.
        assert_eq!(derive_from_cost(0.0, Expenses::new(60.0, 60.0), 20.0), Ok(None));
    }

    #[test]
    fn analyze_existing_price_matches_worked_example() {
        let breakdown = analyze_existing_price(100.0, standard_expenses(), 200.0)
            .unwrap()
            .unwrap();

        assert_close(breakdown.sale_price, 200.0);
        assert_close(breakdown.profit_amount, 50.0);
        assert_close(breakdown.margin_pct, 25.0);
        assert_close(breakdown.markup_pct, 100.0);
        assert_close(breakdown.fixed_expense_amount, 30.0);
        assert_close(breakdown.variable_expense_amount, 20.0);
        assert_close(breakdown.total_expense_amount(), 50.0);
    }

    #[test]
    fn analyze_existing_price_below_or_at_cost_is_an_error() {
        assert_eq!(
            analyze_existing_price(100.0, standard_expenses(), 100.0),
            Err(PricingError::PriceBelowCost)
        );
        assert_eq!(
            analyze_existing_price(100.0, standard_expenses(), 80.0),
            Err(PricingError::PriceBelowCost)
        );
    }

    #[test]
    fn analyze_existing_price_missing_values_are_absent() {
        assert_eq!(analyze_existing_price(0.0, standard_expenses(), 200.0), Ok(None));
        assert_eq!(analyze_existing_price(100.0, standard_expenses(), 0.0), Ok(None));
    }

    #[test]
    fn analyze_existing_price_can_report_negative_margin() {
        // Price above cost but eaten by expenses.
        let breakdown = analyze_existing_price(100.0, Expenses::new(30.0, 20.0), 150.0)
            .unwrap()
            .unwrap();
        assert_close(breakdown.profit_amount, -25.0);
        assert!(breakdown.margin_pct < 0.0);
    }

    #[test]
    fn apply_markup_matches_worked_example() {
        let breakdown = apply_markup(50.0, standard_expenses(), 100.0).unwrap();

        assert_close(breakdown.sale_price, 100.0);
        assert_close(breakdown.profit_amount, 25.0);
        assert_close(breakdown.margin_pct, 25.0);
        assert_eq!(breakdown.markup_pct, 100.0);
    }

    #[test]
    fn apply_markup_requires_positive_markup() {
        assert_eq!(apply_markup(50.0, standard_expenses(), 0.0), None);
        assert_eq!(apply_markup(50.0, standard_expenses(), -10.0), None);
        assert_eq!(apply_markup(0.0, standard_expenses(), 100.0), None);
    }

    #[test]
    fn zero_cost_is_absent_in_every_mode() {
        for mode in Mode::ALL {
            let input = PricingInput::for_mode(mode, 0.0, standard_expenses(), 120.0);
            assert_eq!(evaluate(&input), Evaluation::Absent, "mode {mode:?}");
        }
    }

    #[test]
    fn non_finite_inputs_are_absent() {
        let nan = f64::NAN;
        assert_eq!(derive_from_cost(nan, standard_expenses(), 20.0), Ok(None));
        assert_eq!(derive_from_cost(100.0, Expenses::new(nan, 10.0), 20.0), Ok(None));
        assert_eq!(
            analyze_existing_price(100.0, standard_expenses(), f64::INFINITY),
            Ok(None)
        );
        assert_eq!(apply_markup(f64::INFINITY, standard_expenses(), 10.0), None);
    }

    #[test]
    fn overflowing_results_are_absent() {
        assert_eq!(derive_from_cost(1e308, standard_expenses(), 20.0), Ok(None));
        assert_eq!(
            analyze_existing_price(100.0, Expenses::new(1e308, 1e308), 200.0),
            Ok(None)
        );
        assert_eq!(apply_markup(1e308, standard_expenses(), 100.0), None);
        assert_eq!(apply_markup(100.0, standard_expenses(), 1e308), None);

        for mode in Mode::ALL {
            let input = PricingInput::for_mode(mode, 1e308, Expenses::new(1e308, 0.0), 1e308);
            match evaluate(&input) {
                Evaluation::Ready(breakdown) => assert!(breakdown.is_finite(), "mode {mode:?}"),
                Evaluation::Invalid(_) | Evaluation::Absent => {}
            }
        }
    }

    #[test]
    fn evaluate_tags_each_outcome() {
        let ready = PricingInput::for_mode(Mode::ApplyMarkup, 50.0, standard_expenses(), 100.0);
        assert!(matches!(evaluate(&ready), Evaluation::Ready(_)));

        let invalid = PricingInput::for_mode(
            Mode::DeriveFromCost,
            100.0,
            Expenses::new(50.0, 30.0),
            25.0,
        );
        assert_eq!(
            evaluate(&invalid),
            Evaluation::Invalid(PricingError::InvalidComposition)
        );
    }

    #[test]
    fn for_mode_round_trips_the_mode_tag() {
        for mode in Mode::ALL {
            let input = PricingInput::for_mode(mode, 10.0, Expenses::new(1.0, 2.0), 5.0);
            assert_eq!(input.mode(), mode);
            assert_eq!(input.cost(), 10.0);
            assert_eq!(input.expenses(), Expenses::new(1.0, 2.0));
        }
    }

    #[test]
    fn errors_render_user_facing_messages() {
        assert_eq!(
            PricingError::InvalidComposition.to_string(),
            "Total de despesas + lucro deve ser menor que 100%"
        );
        assert_eq!(
            PricingError::PriceBelowCost.to_string(),
            "O preço de venda deve ser maior que o custo"
        );
    }
}
