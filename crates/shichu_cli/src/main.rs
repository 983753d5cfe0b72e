use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use serde_json::json;
use shichu_rs::{
    CalculationResult, Coordinates, Gender, PlaceInput, ShichuConfig, SolarTermTable,
    calculate_configured, find_city, find_nearest_city, get_timezone_identifier,
    get_timezone_offset, is_dst, list_available_cities, resolve_config, smart_search,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shichu", about = "Four Pillars (四柱推命) chart calculator")]
struct Cli {
    /// Config file (defaults to $SHICHU_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a chart
    Chart {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Wall-clock birth time (HH:MM or decimal hours)
        time: String,
        /// Gender: M or F
        #[arg(long, default_value = "M")]
        gender: Gender,
        /// Birthplace name
        #[arg(long, default_value = "東京")]
        place: String,
        /// Longitude in degrees (used with --lat, overrides --place lookup failures)
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Latitude in degrees
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Use the birthplace's own political time zone
        #[arg(long)]
        international: bool,
        /// Apply modern DST rules
        #[arg(long)]
        dst: bool,
        /// Apply Japanese summer time (1948-1951)
        #[arg(long)]
        historical_dst: bool,
        /// Skip the longitude correction
        #[arg(long)]
        no_local_time: bool,
    },
    /// Look up a city by exact name
    City {
        name: String,
    },
    /// Fuzzy city search
    Search {
        query: String,
    },
    /// Nearest registered city to a coordinate
    Nearest {
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        #[arg(allow_hyphen_values = true)]
        lat: f64,
    },
    /// List every registered city
    Cities,
    /// Time-zone identifier for a coordinate, with offset and DST at an instant
    Tz {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        /// Local wall-clock time (YYYY-MM-DDThh:mm)
        #[arg(long)]
        at: Option<String>,
    },
    /// The 24 solar terms of a year
    SolarTerms {
        year: i32,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{s}': {e}"))
}

/// `HH:MM`, `HH:MM:SS` or a decimal hour.
fn parse_hour(s: &str) -> Result<f64, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let bad = || format!("invalid time '{s}' (expected HH:MM or decimal hours)");
    let nums = parts
        .iter()
        .map(|p| p.trim().parse::<f64>().map_err(|_| bad()))
        .collect::<Result<Vec<_>, _>>()?;
    let hour = match nums.as_slice() {
        [h] => *h,
        [h, m] => h + m / 60.0,
        [h, m, sec] => h + m / 60.0 + sec / 3600.0,
        _ => return Err(bad()),
    };
    if !(0.0..24.0).contains(&hour) {
        return Err(bad());
    }
    Ok(hour)
}

fn parse_wall(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| format!("invalid datetime '{s}': {e}"))
}

fn place_input(place: String, lon: Option<f64>, lat: Option<f64>) -> PlaceInput {
    match (lon, lat) {
        (Some(lon), Some(lat)) => match Coordinates::new(lon, lat) {
            Ok(coordinates) => PlaceInput::NameWithCoordinates {
                name: place,
                coordinates,
            },
            Err(e) => fail(e),
        },
        _ => PlaceInput::Name(place),
    }
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("serialization failed: {e}")),
    }
}

fn print_chart(r: &CalculationResult) {
    let p = &r.processed_date_time;
    println!(
        "{} ({})  {:04}-{:02}-{:02} {:02}:{:02}:{:02}  [{}{}]",
        r.location.name,
        r.location.romaji,
        p.year,
        p.month,
        p.day,
        p.hour,
        p.minute,
        p.second,
        p.political_time_zone,
        if p.is_dst { ", DST" } else { "" },
    );
    for d in &p.adjustment_details {
        println!("  {:?}: {:+} s ({})", d.kind, d.seconds, d.source);
    }
    if let Some(l) = &r.lunar_date {
        println!(
            "Lunar: {}/{}{}/{}",
            l.year,
            if l.is_leap_month { "閏" } else { "" },
            l.month,
            l.day
        );
    }
    println!("Solar term: {} ({})", r.solar_term.term.kanji(), r.solar_term.utc);
    println!();

    let fp = &r.four_pillars;
    let tg = &r.ten_gods;
    println!("       時柱   日柱   月柱   年柱");
    println!(
        "pillar {}   {}   {}   {}",
        fp.hour.label(),
        fp.day.label(),
        fp.month.label(),
        fp.year.label()
    );
    let stem_god = |g: Option<shichu_rs::TenGod>| g.map_or("日主", |g| g.kanji());
    println!(
        "stem   {}   {}   {}   {}",
        stem_god(tg.hour.stem),
        stem_god(tg.day.stem),
        stem_god(tg.month.stem),
        stem_god(tg.year.stem)
    );
    println!(
        "branch {}   {}   {}   {}",
        tg.hour.branch, tg.day.branch, tg.month.branch, tg.year.branch
    );
    let tf = &r.twelve_fortunes;
    println!("十二運 {}   {}   {}   {}", tf.hour, tf.day, tf.month, tf.year);
    let sk = &r.twelve_spirit_killers;
    println!("神殺   {}   {}   {}   {}", sk.hour, sk.day, sk.month, sk.year);
    println!();

    let e = &r.element_profile.percentages;
    println!(
        "木 {:.1}%  火 {:.1}%  土 {:.1}%  金 {:.1}%  水 {:.1}%",
        e.wood, e.fire, e.earth, e.metal, e.water
    );
    println!(
        "Strength: {} (score {:.1})",
        r.strength.strength.kanji(),
        r.strength.score
    );
    println!("格局: {} - {}", r.kakukyoku.name, r.kakukyoku.description);
    println!("用神: {}", r.yojin.description);
    println!(
        "喜神 {} / 忌神 {}",
        r.yojin.kijin.element.kanji(),
        r.yojin.kyujin.element.kanji()
    );
    println!();

    let mf = &r.major_fortunes;
    println!("大運 ({:?}, from age {}):", mf.direction, mf.start_age);
    for c in &mf.cycles {
        println!("  {:>3}-{:<3} {}", c.start_age, c.end_age, c.pillar.label());
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> ShichuConfig {
    resolve_config(path).unwrap_or_else(|e| fail(e))
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            date,
            time,
            gender,
            place,
            lon,
            lat,
            international,
            dst,
            historical_dst,
            no_local_time,
        } => {
            let date = parse_date(&date).unwrap_or_else(|e| fail(e));
            let hour = parse_hour(&time).unwrap_or_else(|e| fail(e));
            let mut config = load_config(cli.config.as_deref());
            let o = &mut config.options;
            o.use_international_mode |= international;
            o.use_dst |= dst;
            o.use_historical_dst |= historical_dst;
            if no_local_time {
                o.use_local_time = false;
            }
            tracing::debug!(options = ?config.options, "chart options");
            let place = place_input(place, lon, lat);
            let result = calculate_configured(date, hour, gender, &place, &config)
                .unwrap_or_else(|e| fail(format!("calculation failed: {e}")));
            if cli.json {
                print_json(&result);
            } else {
                print_chart(&result);
            }
        }

        Commands::City { name } => match find_city(&name) {
            Ok(loc) if cli.json => print_json(loc),
            Ok(loc) => println!(
                "{} ({}) lon {:.4} lat {:.4} {}",
                loc.name,
                loc.romaji,
                loc.coordinates.longitude,
                loc.coordinates.latitude,
                loc.time_zone
            ),
            Err(e) => fail(e),
        },

        Commands::Search { query } => {
            let hits = smart_search(&query);
            if cli.json {
                print_json(&hits);
            } else if hits.is_empty() {
                println!("No matches for '{query}'");
            } else {
                for loc in hits {
                    println!("{} ({})", loc.name, loc.romaji);
                }
            }
        }

        Commands::Nearest { lon, lat } => match find_nearest_city(lon, lat) {
            Ok(loc) if cli.json => print_json(loc),
            Ok(loc) => println!("{} ({}) {}", loc.name, loc.romaji, loc.time_zone),
            Err(e) => fail(e),
        },

        Commands::Cities => {
            let cities = list_available_cities();
            if cli.json {
                print_json(&cities);
            } else {
                for loc in cities {
                    println!("{:<10} {:<16} {}", loc.name, loc.romaji, loc.time_zone);
                }
            }
        }

        Commands::Tz { lat, lon, at } => {
            let zone = get_timezone_identifier(lat, lon).unwrap_or_else(|e| fail(e));
            let Some(at) = at else {
                if cli.json {
                    print_json(&json!({ "timeZone": zone }));
                } else {
                    println!("{zone}");
                }
                return;
            };
            let wall = parse_wall(&at).unwrap_or_else(|e| fail(e));
            let offset = get_timezone_offset(wall, &zone).unwrap_or_else(|e| fail(e));
            let dst = is_dst(wall, &zone).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&json!({
                    "timeZone": zone,
                    "standardOffsetMinutes": offset,
                    "isDST": dst,
                }));
            } else {
                println!(
                    "{zone}  UTC{:+03}:{:02}{}",
                    offset / 60,
                    (offset % 60).abs(),
                    if dst { "  (DST in effect)" } else { "" }
                );
            }
        }

        Commands::SolarTerms { year } => {
            let table = SolarTermTable::for_year(year).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&table);
            } else {
                for t in &table.terms {
                    // JST wall clock
                    println!("{}  {}", t.term.kanji(), t.in_frame(9 * 3600));
                }
            }
        }
    }
}
