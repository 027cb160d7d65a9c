pub mod calculator;
pub mod guide;

pub use calculator::CalculatorPage;
pub use guide::GuidePage;
