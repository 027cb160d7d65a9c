pub mod breakdown_table;
pub mod kpi_card;
pub mod mode_selector;
pub mod number_field;
pub mod toast;
