pub mod app;
pub mod controls;
pub mod events;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod settle;
pub mod terminal_guard;
pub mod theme;
