//! Pricing rules and the calculator's form state live here.

pub mod app_state;
pub mod input;
pub mod pricing;

pub use app_state::{AppState, FormDraft, PersistedState};
pub use input::{parse_decimal, parse_or_zero};
pub use pricing::{
    analyze_existing_price, apply_markup, calculate, derive_from_cost, evaluate, Evaluation,
    Expenses, Mode, PriceBreakdown, PricingError, PricingInput,
};
