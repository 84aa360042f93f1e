//! CLI definition using clap

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use errand_domain::model::GeoPoint;
use errand_types::{OutputFormat, ShoppingRange, TimeCondition, WeatherCondition, WeightClass};

/// Largest amount accepted for a client price or tip (KRW)
pub const MAX_WON_AMOUNT: i64 = 100_000_000;

#[derive(Parser)]
#[command(name = "errand-quote")]
#[command(version)]
#[command(about = "Price on-demand errands: distance, weather, time of day and load")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Rate card TOML overriding the configured one
    #[arg(long, global = true)]
    pub pricing: Option<PathBuf>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quote a delivery errand
    Quote {
        /// Road distance in km
        #[arg(long, short = 'd', allow_negative_numbers = true)]
        distance: f64,

        #[arg(long, short = 'w', value_enum, default_value_t = WeatherCondition::Clear)]
        weather: WeatherCondition,

        /// Time band. Detected from the current KST time if not specified.
        #[arg(long, short = 't', value_enum)]
        time: Option<TimeCondition>,

        #[arg(long, value_enum, default_value_t = WeightClass::Light)]
        weight: WeightClass,

        /// Total stops including pickup. More than 1 adds a per-stop fee.
        #[arg(long, short = 's')]
        stops: Option<u32>,

        /// Price the requester saw, checked against the server price
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=MAX_WON_AMOUNT))]
        client_price: Option<i64>,

        /// Tip added on top of the accepted price
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=MAX_WON_AMOUNT))]
        tip: i64,

        /// Free-text label stored with the quote
        #[arg(long, short = 'l')]
        label: Option<String>,
    },

    /// Quote a purchase-on-behalf errand
    Shopping {
        /// Shopping range (local, district, city, specific)
        #[arg(long, short = 'r', value_enum)]
        range: ShoppingRange,

        /// Number of items to buy
        #[arg(long, short = 'i', default_value_t = 1)]
        items: u32,

        /// Store to drop-off distance in km, used with --range specific
        #[arg(long, short = 'd', default_value_t = 0.0, allow_negative_numbers = true)]
        distance: f64,

        #[arg(long, short = 'w', value_enum, default_value_t = WeatherCondition::Clear)]
        weather: WeatherCondition,

        /// Time band. Detected from the current KST time if not specified.
        #[arg(long, short = 't', value_enum)]
        time: Option<TimeCondition>,

        /// Order contains a heavy item
        #[arg(long)]
        heavy: bool,

        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=MAX_WON_AMOUNT))]
        client_price: Option<i64>,

        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=MAX_WON_AMOUNT))]
        tip: i64,

        #[arg(long, short = 'l')]
        label: Option<String>,
    },

    /// Estimate road distance and travel time between two points
    Route {
        /// Origin as "lat,lng"
        #[arg(long, allow_hyphen_values = true)]
        from: GeoPoint,

        /// Destination as "lat,lng"
        #[arg(long, allow_hyphen_values = true)]
        to: GeoPoint,
    },

    /// Show the time band for now, or for a given KST hour
    TimeCondition {
        /// Hour of the KST day (0-23)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },

    /// Quote every row of a CSV file
    Batch {
        /// CSV with distance_km, weather, time_of_day, weight, [stops], [label]
        csv: PathBuf,

        /// Write the report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show recorded quotes
    History {
        /// Limit number of entries shown
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,

        /// Delete all recorded quotes
        #[arg(long)]
        clear: bool,

        /// Relabel a recorded quote by id or unique id prefix. Empty text removes the label.
        #[arg(long, num_args = 2, value_names = ["ID", "TEXT"], conflicts_with = "clear")]
        label: Option<Vec<String>>,
    },

    /// Export recorded quotes to Excel
    Export {
        /// Output Excel file path
        #[arg(long, short = 'o', default_value = "errand-quotes.xlsx")]
        output: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Enable/disable quote history
        #[arg(long)]
        set_history: Option<bool>,

        /// Set history store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set rate card TOML file
        #[arg(long)]
        set_pricing_file: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("errand-quote").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_quote_defaults() {
        let cli = parse(&["quote", "--distance", "5"]);
        assert_eq!(cli.verbose, 0);
        assert!(cli.format.is_none());
        match cli.command {
            Commands::Quote {
                distance,
                weather,
                time,
                weight,
                stops,
                tip,
                ..
            } => {
                assert_eq!(distance, 5.0);
                assert_eq!(weather, WeatherCondition::Clear);
                assert!(time.is_none());
                assert_eq!(weight, WeightClass::Light);
                assert!(stops.is_none());
                assert_eq!(tip, 0);
            }
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn test_quote_with_all_factors() {
        let cli = parse(&[
            "quote",
            "-d",
            "2.5",
            "--weather",
            "extreme",
            "--time",
            "late-night",
            "--weight",
            "heavy",
            "--stops",
            "3",
            "--client-price",
            "30000",
            "--tip",
            "2000",
            "-vv",
            "--format",
            "json",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Quote {
                weather,
                time,
                weight,
                stops,
                client_price,
                tip,
                ..
            } => {
                assert_eq!(weather, WeatherCondition::Extreme);
                assert_eq!(time, Some(TimeCondition::LateNight));
                assert_eq!(weight, WeightClass::Heavy);
                assert_eq!(stops, Some(3));
                assert_eq!(client_price, Some(30000));
                assert_eq!(tip, 2000);
            }
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn test_out_of_range_amounts_rejected() {
        for args in [
            ["quote", "-d", "5", "--tip", "9223372036854775807"],
            ["quote", "-d", "5", "--client-price", "-9223372036854775808"],
            ["quote", "-d", "5", "--tip", "-1"],
            ["shopping", "-r", "local", "--tip", "100000001"],
        ] {
            let parsed = Cli::try_parse_from(std::iter::once("errand-quote").chain(args));
            assert!(parsed.is_err(), "{:?}", args);
        }
        let cli = parse(&["quote", "-d", "5", "--tip", "100000000"]);
        assert!(matches!(cli.command, Commands::Quote { tip: MAX_WON_AMOUNT, .. }));
    }

    #[test]
    fn test_negative_distance_reaches_validation() {
        let cli = parse(&["quote", "--distance", "-1"]);
        assert!(matches!(cli.command, Commands::Quote { distance, .. } if distance == -1.0));
    }

    #[test]
    fn test_quote_requires_distance() {
        assert!(Cli::try_parse_from(["errand-quote", "quote"]).is_err());
    }

    #[test]
    fn test_shopping() {
        let cli = parse(&["shopping", "--range", "district", "--items", "4", "--heavy"]);
        match cli.command {
            Commands::Shopping {
                range, items, heavy, ..
            } => {
                assert_eq!(range, ShoppingRange::District);
                assert_eq!(items, 4);
                assert!(heavy);
            }
            _ => panic!("expected shopping"),
        }
    }

    #[test]
    fn test_route_points() {
        let cli = parse(&[
            "route",
            "--from",
            "37.5665,126.9780",
            "--to",
            "-33.8688,151.2093",
        ]);
        match cli.command {
            Commands::Route { from, to } => {
                assert_eq!(from.lat, 37.5665);
                assert_eq!(to.lat, -33.8688);
            }
            _ => panic!("expected route"),
        }
    }

    #[test]
    fn test_route_rejects_bad_point() {
        assert!(Cli::try_parse_from(["errand-quote", "route", "--from", "91,0", "--to", "0,0"])
            .is_err());
    }

    #[test]
    fn test_time_condition_hour_range() {
        let cli = parse(&["time-condition", "--hour", "23"]);
        assert!(matches!(cli.command, Commands::TimeCondition { hour: Some(23) }));
        assert!(Cli::try_parse_from(["errand-quote", "time-condition", "--hour", "24"]).is_err());
    }

    #[test]
    fn test_global_pricing_after_subcommand() {
        let cli = parse(&["batch", "rows.csv", "--pricing", "rates.toml", "-o", "out.txt"]);
        assert_eq!(cli.pricing, Some(PathBuf::from("rates.toml")));
        assert!(matches!(cli.command, Commands::Batch { output: Some(_), .. }));
    }

    #[test]
    fn test_history_label_takes_id_and_text() {
        let cli = parse(&["history", "--label", "3f2a9c01", "편의점"]);
        match cli.command {
            Commands::History { label, clear, .. } => {
                assert_eq!(label, Some(vec!["3f2a9c01".to_string(), "편의점".to_string()]));
                assert!(!clear);
            }
            _ => panic!("expected history"),
        }
        assert!(Cli::try_parse_from(["errand-quote", "history", "--label", "3f2a9c01"]).is_err());
        assert!(
            Cli::try_parse_from(["errand-quote", "history", "--clear", "--label", "a", "b"])
                .is_err()
        );
    }

    #[test]
    fn test_config_setters() {
        let cli = parse(&["config", "--set-output", "json", "--set-history", "false"]);
        match cli.command {
            Commands::Config {
                set_output,
                set_history,
                reset,
                ..
            } => {
                assert_eq!(set_output, Some(OutputFormat::Json));
                assert_eq!(set_history, Some(false));
                assert!(!reset);
            }
            _ => panic!("expected config"),
        }
    }
}
