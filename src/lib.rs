pub mod actions;
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod state;
pub mod utils;
