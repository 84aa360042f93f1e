//! Excel export functionality

use errand_domain::model::{Quote, QuoteRecord};
use errand_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Export quote history to an Excel file
pub fn export_quotes_to_excel(records: &[QuoteRecord], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    // Add summary sheet
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, records)?;

    // Add details sheet
    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, records)?;

    // Save workbook
    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, records: &[QuoteRecord]) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Errand Quote Report", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Total Quotes:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(2, 1, records.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let revenue: i64 = records.iter().map(|r| r.final_price()).sum();
    sheet
        .write_string(3, 0, "Total Final Price (KRW):")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 1, revenue as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Count by kind
    sheet
        .write_string_with_format(5, 0, "Quotes by Kind", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let mut kind_counts = std::collections::BTreeMap::new();
    for record in records {
        *kind_counts.entry(record.quote.kind()).or_insert(0) += 1;
    }

    let mut row = 6;
    for (kind, count) in &kind_counts {
        sheet
            .write_string(row, 0, *kind)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, *count as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }

    sheet
        .set_column_width(0, 26)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, records: &[QuoteRecord]) -> Result<()> {
    sheet
        .set_name("Details")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    let headers = [
        "Quoted At",
        "Kind",
        "Distance (km)",
        "Weather",
        "Time",
        "Base",
        "Distance/Range Fee",
        "Surcharges",
        "Total",
        "Tip",
        "Final",
        "Label",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let summary = summarize(&record.quote);

        sheet
            .write_string(row, 0, record.quoted_at.to_rfc3339())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, record.quote.kind())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 2, summary.distance)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 3, summary.weather)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 4, summary.time)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 5, summary.base as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 6, summary.travel as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 7, summary.surcharges as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 8, record.quote.total_price() as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;

        let tip = record.verification.map(|v| v.tip).unwrap_or(0);
        sheet
            .write_number(row, 9, tip as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 10, record.final_price() as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;

        if let Some(ref label) = record.label {
            sheet
                .write_string(row, 11, label)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    sheet
        .set_column_width(0, 28)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(11, 30)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

/// Flattened columns shared by all quote kinds
struct QuoteSummary {
    distance: f64,
    weather: &'static str,
    time: &'static str,
    base: i64,
    travel: i64,
    surcharges: i64,
}

fn summarize(quote: &Quote) -> QuoteSummary {
    match quote {
        Quote::Errand { factors, breakdown } => QuoteSummary {
            distance: factors.distance,
            weather: factors.weather.as_str(),
            time: factors.time_of_day.as_str(),
            base: breakdown.base_price,
            travel: breakdown.distance_price,
            surcharges: breakdown.weather_surcharge
                + breakdown.time_surcharge
                + breakdown.weight_surcharge,
        },
        Quote::MultiStop { factors, breakdown } => QuoteSummary {
            distance: factors.factors.distance,
            weather: factors.factors.weather.as_str(),
            time: factors.factors.time_of_day.as_str(),
            base: breakdown.base_price,
            travel: breakdown.distance_price,
            surcharges: breakdown.weather_surcharge
                + breakdown.time_surcharge
                + breakdown.weight_surcharge
                + breakdown.stop_fee,
        },
        Quote::Shopping { factors, breakdown } => QuoteSummary {
            distance: factors.distance,
            weather: factors.weather.as_str(),
            time: factors.time_of_day.as_str(),
            base: breakdown.base_price,
            travel: breakdown.range_fee,
            surcharges: breakdown.item_fee
                + breakdown.weather_surcharge
                + breakdown.time_surcharge
                + breakdown.heavy_item_surcharge,
        },
    }
}
