//! Plain-text batch quote report

use errand_domain::model::Quote;
use errand_infra::quote_csv::RejectedRow;

use super::quote_service::BatchQuote;

pub fn generate_quote_report(quotes: &[BatchQuote], rejected: &[RejectedRow]) -> String {
    let totals: Vec<i64> = quotes.iter().map(|q| q.quote.total_price()).collect();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("              심부름 요금 일괄 견적                \n");
    report.push_str("              Errand Batch Quote Report            \n");
    report.push_str("==================================================\n\n");
    report.push_str("【요약 / Summary】\n");
    report.push_str(&format!("  견적 수 / Quoted rows:          {}\n", quotes.len()));
    report.push_str(&format!("  오류 행 / Rejected rows:        {}\n", rejected.len()));
    if let (Some(min), Some(max)) = (totals.iter().min(), totals.iter().max()) {
        let sum: i64 = totals.iter().sum();
        let average = sum as f64 / totals.len() as f64;
        report.push_str(&format!("  합계 / Sum:                     {}원\n", format_won(sum)));
        report.push_str(&format!("  최저 / Min:                     {}원\n", format_won(*min)));
        report.push_str(&format!("  최고 / Max:                     {}원\n", format_won(*max)));
        report.push_str(&format!("  평균 / Average:                 {:.0}원\n", average));
    }
    report.push('\n');

    if !quotes.is_empty() {
        report.push_str("【견적 목록 / Quotes】\n");
        report.push_str("-".repeat(78).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:>5} {:>8} {:<8} {:<10} {:<7} {:>5} {:>10} {:<14}\n",
            "Line", "Km", "Weather", "Time", "Weight", "Stops", "Total", "Label"
        ));
        report.push_str("-".repeat(78).as_str());
        report.push('\n');
        for q in quotes {
            let stops = match &q.quote {
                Quote::MultiStop { factors, .. } => factors.total_stops.to_string(),
                _ => "-".to_string(),
            };
            report.push_str(&format!(
                "{:>5} {:>8.2} {:<8} {:<10} {:<7} {:>5} {:>10} {:<14}\n",
                q.row.line,
                q.row.factors.distance,
                q.row.factors.weather.as_str(),
                q.row.factors.time_of_day.as_str(),
                q.row.factors.weight.as_str(),
                stops,
                format_won(q.quote.total_price()),
                truncate_str(q.row.label.as_deref().unwrap_or(""), 14)
            ));
        }
        report.push('\n');
    }

    if !rejected.is_empty() {
        report.push_str("【오류 행 / Rejected Rows】\n");
        report.push_str("-".repeat(50).as_str());
        report.push('\n');
        for r in rejected {
            report.push_str(&format!("{:>5}  {}\n", r.line, r.reason));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

/// Thousands separators, e.g. `12,300`
pub fn format_won(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if amount < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::quote_service::QuoteService;
    use errand_domain::model::PricingTable;
    use errand_infra::quote_csv::load_batch_from_reader;
    use std::io::Cursor;

    fn batch_quotes(csv: &str) -> (Vec<BatchQuote>, Vec<RejectedRow>) {
        let batch = load_batch_from_reader(Cursor::new(csv.to_string())).unwrap();
        let quotes = QuoteService::new(PricingTable::default()).quote_batch(&batch);
        (quotes, batch.rejected)
    }

    #[test]
    fn test_format_won() {
        assert_eq!(format_won(0), "0");
        assert_eq!(format_won(900), "900");
        assert_eq!(format_won(3000), "3,000");
        assert_eq!(format_won(1234567), "1,234,567");
        assert_eq!(format_won(-24000), "-24,000");
    }

    #[test]
    fn test_report_summary() {
        let (quotes, rejected) = batch_quotes("0\n5\n5,RAIN\nbad\n");
        let report = generate_quote_report(&quotes, &rejected);
        assert!(report.contains("Errand Batch Quote Report"));
        assert!(report.contains("Quoted rows:          3"));
        assert!(report.contains("Rejected rows:        1"));
        assert!(report.contains("3,000원"));
        assert!(report.contains("10,800원"));
        assert!(report.contains("Rejected Rows"));
    }

    #[test]
    fn test_report_shows_stops() {
        let (quotes, rejected) = batch_quotes("5,CLEAR,DAY,LIGHT,3,상가\n");
        let report = generate_quote_report(&quotes, &rejected);
        assert!(report.contains("12,000"));
        assert!(report.contains("상가"));
        assert!(!report.contains("Rejected Rows"));
    }

    #[test]
    fn test_empty_report() {
        let report = generate_quote_report(&[], &[]);
        assert!(report.contains("Quoted rows:          0"));
        assert!(!report.contains("Min:"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("abc", 5), "abc");
        assert_eq!(truncate_str("abcdefgh", 5), "abc..");
    }
}
