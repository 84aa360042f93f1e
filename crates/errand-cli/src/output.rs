//! Output formatting module

use chrono::{DateTime, FixedOffset, Utc};

use errand_app::app::format_won;
use errand_domain::model::{
    MultiStopPriceBreakdown, PriceBreakdown, PriceVerification, Quote, QuoteRecord,
    RouteEstimate, ShoppingPriceBreakdown,
};
use errand_domain::service::is_distance_priced;
use errand_domain::service::time_condition::KST_UTC_OFFSET_HOURS;
use errand_types::{OutputFormat, Result, TimeCondition};

pub fn output_record(output_format: OutputFormat, record: &QuoteRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(record)?;
        println!("{}", content);
        return Ok(());
    }

    match record.quote {
        Quote::Errand {
            ref factors,
            ref breakdown,
        } => {
            println!("\n심부름 요금 / Errand Quote");
            println!("=========================");
            println!("거리 / Distance:     {:.2} km", factors.distance);
            println!("날씨 / Weather:      {}", factors.weather.label());
            println!("시간대 / Time:       {}", factors.time_of_day.label());
            println!("무게 / Weight:       {}", factors.weight.label());
            print_breakdown(breakdown);
        }
        Quote::MultiStop {
            ref factors,
            ref breakdown,
        } => {
            println!("\n다중 배달 요금 / Multi-stop Quote");
            println!("================================");
            println!("거리 / Distance:     {:.2} km", factors.factors.distance);
            println!("경유지 / Stops:      {}", factors.total_stops);
            println!("날씨 / Weather:      {}", factors.factors.weather.label());
            println!("시간대 / Time:       {}", factors.factors.time_of_day.label());
            println!("무게 / Weight:       {}", factors.factors.weight.label());
            print_multi_stop_breakdown(breakdown);
        }
        Quote::Shopping {
            ref factors,
            ref breakdown,
        } => {
            println!("\n구매 대행 요금 / Shopping Quote");
            println!("==============================");
            println!("범위 / Range:        {}", factors.range.label());
            if is_distance_priced(factors.range) {
                println!("거리 / Distance:     {:.2} km", factors.distance);
            }
            println!("품목 / Items:        {}", factors.item_count);
            println!("날씨 / Weather:      {}", factors.weather.label());
            println!("시간대 / Time:       {}", factors.time_of_day.label());
            if factors.has_heavy_item {
                println!("무거운 품목 / Heavy: 예");
            }
            print_shopping_breakdown(breakdown);
        }
    }

    if let Some(ref verification) = record.verification {
        print_verification(verification);
    }
    if let Some(ref label) = record.label {
        println!("메모 / Label:        {}", label);
    }
    Ok(())
}

fn print_breakdown(b: &PriceBreakdown) {
    println!("\n--- 요금 내역 / Breakdown ---");
    println!("기본 요금:           {:>10}원", format_won(b.base_price));
    println!("거리 요금:           {:>10}원", format_won(b.distance_price));
    print_nonzero("날씨 할증:", b.weather_surcharge);
    print_nonzero("시간 할증:", b.time_surcharge);
    print_nonzero("무게 할증:", b.weight_surcharge);
    println!("-----------------------------");
    println!("합계 / Total:        {:>10}원", format_won(b.total_price));
}

fn print_multi_stop_breakdown(b: &MultiStopPriceBreakdown) {
    println!("\n--- 요금 내역 / Breakdown ---");
    println!("기본 요금:           {:>10}원", format_won(b.base_price));
    println!("거리 요금:           {:>10}원", format_won(b.distance_price));
    print_nonzero("날씨 할증:", b.weather_surcharge);
    print_nonzero("시간 할증:", b.time_surcharge);
    print_nonzero("무게 할증:", b.weight_surcharge);
    print_nonzero("경유 요금:", b.stop_fee);
    println!("-----------------------------");
    println!("합계 / Total:        {:>10}원", format_won(b.total_price));
}

fn print_shopping_breakdown(b: &ShoppingPriceBreakdown) {
    println!("\n--- 요금 내역 / Breakdown ---");
    println!("기본 요금:           {:>10}원", format_won(b.base_price));
    println!("범위 요금:           {:>10}원", format_won(b.range_fee));
    print_nonzero("품목 추가:", b.item_fee);
    print_nonzero("날씨 할증:", b.weather_surcharge);
    print_nonzero("시간 할증:", b.time_surcharge);
    print_nonzero("무게 할증:", b.heavy_item_surcharge);
    println!("-----------------------------");
    println!("합계 / Total:        {:>10}원", format_won(b.total_price));
}

fn print_nonzero(label: &str, amount: i64) {
    if amount != 0 {
        println!("{:<20} {:>10}원", label, format_won(amount));
    }
}

fn print_verification(v: &PriceVerification) {
    println!("\n--- 가격 검증 / Verification ---");
    println!("고객 제시 / Client:  {:>10}원", format_won(v.client_price));
    println!("서버 계산 / Server:  {:>10}원", format_won(v.server_price));
    println!(
        "적용 요금 / Applied: {:>10}원 ({})",
        format_won(v.accepted_price),
        if v.within_tolerance {
            "허용 범위 내"
        } else {
            "허용 범위 초과, 서버 요금 적용"
        }
    );
    if v.tip != 0 {
        println!("팁 / Tip:            {:>10}원", format_won(v.tip));
    }
    println!("최종 / Final:        {:>10}원", format_won(v.final_price));
}

pub fn output_route(output_format: OutputFormat, route: &RouteEstimate) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(route)?);
    } else {
        println!("\nRoute Estimate");
        println!("==============");
        println!("Straight line:   {:.2} km", route.straight_km);
        println!("Road distance:   {:.1} km", route.distance_km);
        println!("Travel time:     {} min", route.duration_min);
    }
    Ok(())
}

pub fn output_time_condition(
    output_format: OutputFormat,
    hour: u32,
    condition: TimeCondition,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = serde_json::json!({
            "hour": hour,
            "condition": condition,
            "label": condition.label(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{:02}시 (KST): {} ({})", hour, condition.label(), condition);
    }
    Ok(())
}

pub fn output_history(output_format: OutputFormat, records: &[QuoteRecord], total: usize) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    println!("Quote History");
    println!("=============");
    println!("Total entries: {}", total);
    println!();

    if records.is_empty() {
        println!("No entries found.");
        return Ok(());
    }

    println!(
        "{:<8} {:<16} {:<10} {:>10} {:>10} {:<20}",
        "ID", "Quoted (KST)", "Kind", "Total", "Final", "Label"
    );
    println!("{}", "-".repeat(78));

    for record in records {
        println!(
            "{:<8} {:<16} {:<10} {:>10} {:>10} {:<20}",
            short_id(&record.id),
            format_kst(&record.quoted_at),
            record.quote.kind(),
            format_won(record.quote.total_price()),
            format_won(record.final_price()),
            record.label.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn format_kst(instant: &DateTime<Utc>) -> String {
    match FixedOffset::east_opt((KST_UTC_OFFSET_HOURS * 3600) as i32) {
        Some(kst) => instant.with_timezone(&kst).format("%Y-%m-%d %H:%M").to_string(),
        None => instant.format("%Y-%m-%d %H:%M").to_string(),
    }
}
