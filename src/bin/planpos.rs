//! Geocentric positions of the Sun, Moon and planets
//!
//! Prints right ascension, declination and distance of every body with an
//! analytical theory for one date, either geometric (J2000) or apparent
//! (true equator and equinox of date).
//!
//! Usage:
//!   cargo run --bin planpos -- [--jd 2455200.5 | --date 2010-01-04] [--apparent] [--json]

use std::time::Instant;

use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use skyephem::framelib::LightTimeConfig;
use skyephem::planetlib::{Body, EarthCache};
use skyephem::positions::{apparent_position, geometric_position, SkyPosition};
use skyephem::time::JulianDate;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Solar system position table
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prints geocentric RA/Dec/distance of the Sun, Moon and planets",
    long_about = None
)]
struct Args {
    /// Julian date (TT)
    #[arg(long, default_value_t = 2_455_200.5, conflicts_with = "date")]
    jd: f64,

    /// Calendar date at 0h TT, YYYY-MM-DD
    #[arg(long)]
    date: Option<String>,

    /// Only these bodies (repeatable)
    #[arg(short, long = "body")]
    bodies: Vec<Body>,

    /// Apparent places of date instead of geometric J2000 places
    #[arg(short, long, action = ArgAction::SetTrue)]
    apparent: bool,

    /// Emit JSON instead of a table
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

fn epoch(args: &Args) -> Result<JulianDate> {
    match &args.date {
        Some(text) => {
            let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")?;
            let midnight = date.and_hms_opt(0, 0, 0).ok_or("invalid time of day")?;
            Ok(JulianDate::from_datetime(&midnight)?)
        }
        None => Ok(JulianDate::from_jd(args.jd)),
    }
}

fn compute(args: &Args, tdb: JulianDate) -> Result<Vec<SkyPosition>> {
    let bodies: Vec<Body> = if args.bodies.is_empty() {
        Body::OBSERVABLE.to_vec()
    } else {
        args.bodies.clone()
    };

    let mut cache = EarthCache::new();
    let light_time = LightTimeConfig::default();
    let mut table = Vec::with_capacity(bodies.len());
    for body in bodies {
        let place = if args.apparent {
            apparent_position(body, tdb, &mut cache, &light_time)?
        } else {
            geometric_position(body, tdb, &mut cache)?
        };
        table.push(place);
    }
    Ok(table)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let tdb = epoch(&args)?;

    let start = Instant::now();
    let table = compute(&args, tdb)?;
    let elapsed = start.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    let kind = if args.apparent {
        "apparent, true equator and equinox of date"
    } else {
        "geometric, mean equator and equinox of J2000"
    };
    println!("JD {:.6} TT ({})", tdb.jd(), kind);
    println!("-------------------------------------------------------------------");
    for place in &table {
        println!("{}", place);
    }
    println!("-------------------------------------------------------------------");
    println!("{} bodies in {:.2?}", table.len(), elapsed);
    Ok(())
}
