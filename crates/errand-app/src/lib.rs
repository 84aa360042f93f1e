//! Application service layer - quoting use cases, config, reports, export

pub mod app;
pub mod config;
pub mod export;
pub mod logging;
pub mod repository;
