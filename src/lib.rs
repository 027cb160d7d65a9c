pub mod app;
pub mod domain;
pub mod ui;
pub mod util;
