//! Export of quote history

mod excel;

pub use excel::export_quotes_to_excel;
