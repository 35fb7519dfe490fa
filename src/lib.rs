pub mod api;
pub mod config;
pub mod shutdown;
pub mod ui;
