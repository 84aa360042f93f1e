//! Infrastructure layer - quote history persistence, pricing and batch loaders

pub mod persistence;
pub mod pricing_table_loader;
pub mod quote_csv;
