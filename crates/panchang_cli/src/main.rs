use clap::{Parser, Subcommand};
use log::debug;
use panchang_base::{
    GeoLocation, MuhurtaInfo, RiseSetConfig, SunTimes, TimePeriod, TraditionalPeriods,
    calculate_karana, calculate_muhurtas, calculate_nakshatra, calculate_rashi, calculate_sun_times,
    calculate_tithi, calculate_traditional_periods, calculate_vara, calculate_yoga, deg_to_dms,
    hora_at_time,
};
use panchang_search::{
    ElementSpan, MEAN_MOON_SPEED_DEG_PER_DAY, MEAN_SUN_SPEED_DEG_PER_DAY, MeanMotionEphemeris,
    PanchangConfig, PanchangInfo, panchang_for_date,
};
use panchang_time::{UtcTime, to_julian_day, weekday_from_jd};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "panchang", about = "Hindu panchang calculator")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada from the Moon's sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Tithi from Sun and Moon longitudes
    Tithi {
        /// Sun longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        sun: f64,
        /// Moon longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        moon: f64,
    },
    /// Yoga from Sun and Moon sidereal longitudes
    Yoga {
        /// Sun sidereal longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        sun: f64,
        /// Moon sidereal longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        moon: f64,
    },
    /// Karana from Sun and Moon longitudes
    Karana {
        /// Sun longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        sun: f64,
        /// Moon longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        moon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Julian Day (UT) of a UTC instant
    Jd {
        /// UTC date or datetime (YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: UtcTime,
    },
    /// Sunrise and sunset for a date and place
    SunTimes {
        /// UTC date (YYYY-MM-DD)
        #[arg(long)]
        date: UtcTime,
        /// Latitude in degrees (north positive)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Altitude in meters
        #[arg(long, default_value_t = 0.0)]
        alt: f64,
    },
    /// Rahu Kalam, Yamagandam, Gulika Kalam and Abhijit for a date and place
    Periods {
        /// UTC date (YYYY-MM-DD)
        #[arg(long)]
        date: UtcTime,
        /// Latitude in degrees (north positive)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Altitude in meters
        #[arg(long, default_value_t = 0.0)]
        alt: f64,
        /// Also list the 30 muhurtas
        #[arg(long)]
        muhurtas: bool,
    },
    /// Hora (planetary hour) at a UTC instant and place
    Hora {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        at: UtcTime,
        /// Latitude in degrees (north positive)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Altitude in meters
        #[arg(long, default_value_t = 0.0)]
        alt: f64,
    },
    /// Full panchang for a date from Sun/Moon longitudes at an epoch
    Panchang {
        /// UTC date (YYYY-MM-DD)
        #[arg(long)]
        date: UtcTime,
        /// Latitude in degrees (north positive)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Altitude in meters
        #[arg(long, default_value_t = 0.0)]
        alt: f64,
        /// Sun sidereal longitude at the epoch, degrees
        #[arg(long, allow_negative_numbers = true)]
        sun: f64,
        /// Moon sidereal longitude at the epoch, degrees
        #[arg(long, allow_negative_numbers = true)]
        moon: f64,
        /// Instant the longitudes refer to (defaults to --date)
        #[arg(long)]
        epoch: Option<UtcTime>,
        /// Sun motion in degrees per day
        #[arg(long, default_value_t = MEAN_SUN_SPEED_DEG_PER_DAY)]
        sun_speed: f64,
        /// Moon motion in degrees per day
        #[arg(long, default_value_t = MEAN_MOON_SPEED_DEG_PER_DAY)]
        moon_speed: f64,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("Failed to serialize result: {e}")),
    }
}

#[derive(Serialize)]
struct JdOutput {
    utc: UtcTime,
    jd: f64,
    weekday: u8,
}

#[derive(Serialize)]
struct PeriodsOutput {
    vara: &'static str,
    periods: TraditionalPeriods,
    #[serde(skip_serializing_if = "Option::is_none")]
    muhurtas: Option<[MuhurtaInfo; 30]>,
}

fn print_span<T>(label: &str, name: &str, span: &ElementSpan<T>) {
    let flag = if span.precise { "" } else { "  (may be imprecise)" };
    println!("{label:<10}{name}");
    println!("  Start:  {}  End: {}{flag}", span.start, span.end);
}

fn print_period(p: &TimePeriod) {
    println!("{:<16}{}  -  {}", p.period.name(), p.start, p.end);
}

fn print_periods(p: &TraditionalPeriods) {
    print_period(&p.rahu_kalam);
    print_period(&p.yamagandam);
    print_period(&p.gulika_kalam);
    print_period(&p.abhijit_muhurta);
}

fn print_panchang(info: &PanchangInfo) {
    let loc = &info.location;
    println!(
        "Panchang for {} at {:.4}°N, {:.4}°E",
        info.date, loc.latitude_deg, loc.longitude_deg
    );
    match info.sun_times {
        SunTimes::Regular {
            sunrise, sunset, ..
        } => println!("Sunrise:  {sunrise}  Sunset: {sunset}"),
        SunTimes::PolarDay => println!("Sun does not set (evaluated at local noon)"),
        SunTimes::PolarNight => println!("Sun does not rise (evaluated at local noon)"),
    }
    println!("Evaluated at {}\n", info.evaluated_at);

    println!(
        "Vara:     {} ({}), lord {}",
        info.vara.name,
        info.vara.english_name,
        info.vara.lord.name()
    );
    let t = &info.tithi.info;
    print_span(
        "Tithi:",
        &format!("{} {} ({}, {:.1}% complete)", t.paksha.name(), t.name, t.number, t.percent_complete),
        &info.tithi,
    );
    let n = &info.nakshatra.info;
    print_span(
        "Nakshatra:",
        &format!("{} pada {} ({})", n.name, n.pada, n.number),
        &info.nakshatra,
    );
    let y = &info.yoga.info;
    print_span(
        "Yoga:",
        &format!("{} ({}, {})", y.name, y.number, y.nature.name()),
        &info.yoga,
    );
    let k = &info.karana.info;
    print_span("Karana:", &format!("{} ({})", k.name, k.number), &info.karana);
    println!(
        "Sun in {}  Moon in {}  First hora: {}",
        info.sun_rashi.name,
        info.moon_rashi.name,
        info.hora_lord.name()
    );
    if let Some(periods) = &info.periods {
        println!();
        print_periods(periods);
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    debug!("{cli:?}");
    let json = cli.json;

    match cli.command {
        Commands::Rashi { lon } => {
            let info = calculate_rashi(lon);
            if json {
                return print_json(&info);
            }
            println!(
                "{} ({}) - {} ({:.4} deg in rashi)",
                info.name, info.western_name, info.dms, info.degrees_in_rashi
            );
            println!(
                "  Element: {}  Quality: {}  Ruler: {}",
                info.element.name(),
                info.quality.name(),
                info.ruler.name()
            );
        }

        Commands::Nakshatra { lon } => {
            let info = calculate_nakshatra(lon);
            if json {
                return print_json(&info);
            }
            println!(
                "{} (#{}) - Pada {} ({:.4} deg in nakshatra)",
                info.name, info.number, info.pada, info.degrees_in_nakshatra
            );
            println!(
                "  Deity: {}  Symbol: {}  Lord: {}",
                info.deity,
                info.symbol,
                info.lord.name()
            );
        }

        Commands::Tithi { sun, moon } => {
            let info = calculate_tithi(sun, moon);
            if json {
                return print_json(&info);
            }
            println!(
                "{} {} (#{}) - {:.2}% complete",
                info.paksha.name(),
                info.name,
                info.number,
                info.percent_complete
            );
            println!(
                "  Deity: {}  Category: {}  Elongation: {:.4} deg",
                info.deity,
                info.category.name(),
                info.angle
            );
        }

        Commands::Yoga { sun, moon } => {
            let info = calculate_yoga(sun, moon);
            if json {
                return print_json(&info);
            }
            println!("{} (#{}) - {}", info.name, info.number, info.nature.name());
            println!("  {}", info.meaning);
        }

        Commands::Karana { sun, moon } => {
            let info = calculate_karana(sun, moon);
            if json {
                return print_json(&info);
            }
            println!(
                "{} (#{}) - {:?}, {}",
                info.name, info.number, info.karana_type, info.nature
            );
            if info.is_vishti {
                println!("  Vishti (Bhadra): avoid auspicious work");
            }
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            if json {
                return print_json(&dms);
            }
            println!("{dms}");
        }

        Commands::Jd { date } => {
            if let Err(e) = date.validate() {
                fail(e);
            }
            let jd = to_julian_day(&date);
            if json {
                return print_json(&JdOutput {
                    utc: date,
                    jd,
                    weekday: weekday_from_jd(jd),
                });
            }
            println!("{jd:.6}");
        }

        Commands::SunTimes {
            date,
            lat,
            lon,
            alt,
        } => {
            let location = GeoLocation::new(lat, lon, alt);
            let times = calculate_sun_times(&location, &date, &RiseSetConfig::default())
                .unwrap_or_else(|e| fail(e));
            if json {
                return print_json(&times);
            }
            match times {
                SunTimes::Regular {
                    sunrise,
                    sunset,
                    day_length_minutes,
                } => {
                    println!("Sunrise: {sunrise}");
                    println!("Sunset:  {sunset}");
                    let total = day_length_minutes.round() as i64;
                    println!("Day length: {}h {:02}m", total / 60, total % 60);
                }
                SunTimes::PolarDay => println!("Polar day: the Sun does not set"),
                SunTimes::PolarNight => println!("Polar night: the Sun does not rise"),
            }
        }

        Commands::Periods {
            date,
            lat,
            lon,
            alt,
            muhurtas,
        } => {
            let location = GeoLocation::new(lat, lon, alt);
            let config = RiseSetConfig::default();
            let times = calculate_sun_times(&location, &date, &config).unwrap_or_else(|e| fail(e));
            let (Some(sunrise), Some(sunset)) = (times.sunrise(), times.sunset()) else {
                fail("no sunrise or sunset on this date");
            };
            let vara = calculate_vara(sunrise.to_jd(), lon);
            let periods = calculate_traditional_periods(&sunrise, &sunset, vara.vara)
                .unwrap_or_else(|e| fail(e));
            let list = if muhurtas {
                let next_day = UtcTime::from_jd(date.jd_midnight() + 1.0);
                let next = calculate_sun_times(&location, &next_day, &config)
                    .unwrap_or_else(|e| fail(e))
                    .sunrise()
                    .unwrap_or_else(|| fail("no sunrise on the following date"));
                Some(calculate_muhurtas(&sunrise, &sunset, &next).unwrap_or_else(|e| fail(e)))
            } else {
                None
            };
            if json {
                return print_json(&PeriodsOutput {
                    vara: vara.name,
                    periods,
                    muhurtas: list,
                });
            }
            println!("{} ({})", vara.name, vara.english_name);
            print_periods(&periods);
            for m in list.iter().flatten() {
                println!(
                    "{:>2} {:<12}{}  -  {}  {}",
                    m.number,
                    m.name,
                    m.start,
                    m.end,
                    m.quality.name()
                );
            }
        }

        Commands::Hora { at, lat, lon, alt } => {
            let location = GeoLocation::new(lat, lon, alt);
            let hora = hora_at_time(&location, &at, &RiseSetConfig::default())
                .unwrap_or_else(|e| fail(e))
                .unwrap_or_else(|| fail("no sunrise around this instant"));
            if json {
                return print_json(&hora);
            }
            println!(
                "Hora {} of 24, lord {}  ({} - {})",
                hora.hora_index + 1,
                hora.lord.name(),
                hora.start,
                hora.end
            );
        }

        Commands::Panchang {
            date,
            lat,
            lon,
            alt,
            sun,
            moon,
            epoch,
            sun_speed,
            moon_speed,
        } => {
            let epoch_jd = epoch.unwrap_or(date).to_jd();
            let eph = MeanMotionEphemeris::with_speeds(epoch_jd, sun, moon, sun_speed, moon_speed);
            if let Err(e) = eph.validate() {
                fail(format!("invalid ephemeris: {e}"));
            }
            let location = GeoLocation::new(lat, lon, alt);
            let info = panchang_for_date(&eph, &location, &date, &PanchangConfig::default())
                .unwrap_or_else(|e| fail(e));
            if json {
                return print_json(&info);
            }
            print_panchang(&info);
        }
    }
}
