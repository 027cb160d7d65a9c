use serde::{Deserialize, Serialize};

use super::{
    input::parse_or_zero,
    pricing::{evaluate, Evaluation, Expenses, Mode, PricingInput},
};

pub const DEFAULT_FIXED_EXPENSE_PCT: &str = "15";
pub const DEFAULT_VARIABLE_EXPENSE_PCT: &str = "10";
pub const DEFAULT_MARGIN_PCT: &str = "20";

/// Raw text of every calculator field, exactly as typed.
///
/// All fields are kept regardless of the active mode, so switching modes
/// never loses what the user entered for another one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDraft {
    #[serde(default)]
    pub cost: String,
    #[serde(default = "default_fixed")]
    pub fixed_expense_pct: String,
    #[serde(default = "default_variable")]
    pub variable_expense_pct: String,
    #[serde(default = "default_margin")]
    pub desired_margin_pct: String,
    #[serde(default)]
    pub current_sale_price: String,
    #[serde(default)]
    pub desired_markup_pct: String,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            cost: String::new(),
            fixed_expense_pct: default_fixed(),
            variable_expense_pct: default_variable(),
            desired_margin_pct: default_margin(),
            current_sale_price: String::new(),
            desired_markup_pct: String::new(),
        }
    }
}

fn default_fixed() -> String {
    DEFAULT_FIXED_EXPENSE_PCT.to_string()
}

fn default_variable() -> String {
    DEFAULT_VARIABLE_EXPENSE_PCT.to_string()
}

fn default_margin() -> String {
    DEFAULT_MARGIN_PCT.to_string()
}

impl FormDraft {
    pub fn mode_value(&self, mode: Mode) -> &str {
        match mode {
            Mode::DeriveFromCost => &self.desired_margin_pct,
            Mode::AnalyzeExistingPrice => &self.current_sale_price,
            Mode::ApplyMarkup => &self.desired_markup_pct,
        }
    }

    pub fn mode_value_mut(&mut self, mode: Mode) -> &mut String {
        match mode {
            Mode::DeriveFromCost => &mut self.desired_margin_pct,
            Mode::AnalyzeExistingPrice => &mut self.current_sale_price,
            Mode::ApplyMarkup => &mut self.desired_markup_pct,
        }
    }

    pub fn expenses(&self) -> Expenses {
        Expenses::new(
            parse_or_zero(&self.fixed_expense_pct),
            parse_or_zero(&self.variable_expense_pct),
        )
    }

    pub fn cost_value(&self) -> f64 {
        parse_or_zero(&self.cost)
    }

    pub fn to_input(&self, mode: Mode) -> PricingInput {
        PricingInput::for_mode(
            mode,
            self.cost_value(),
            self.expenses(),
            parse_or_zero(self.mode_value(mode)),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub mode: Mode,
    pub draft: FormDraft,
}

impl AppState {
    /// Re-runs the engine over the current draft. Cheap; called on every render.
    pub fn evaluation(&self) -> Evaluation {
        evaluate(&self.draft.to_input(self.mode))
    }

    pub fn reset_draft(&mut self) {
        self.draft = FormDraft::default();
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.mode = persisted.mode;
        self.draft = persisted.draft;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            mode: self.mode,
            draft: self.draft.clone(),
        }
    }
}

/// What survives a restart: the form as the user left it, nothing more.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub draft: FormDraft,
}
