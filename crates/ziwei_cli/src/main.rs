use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ziwei_core::{BirthDate, Calendar, ChartRequest, create_chart};
use ziwei_engine::ReferenceEngine;
use ziwei_render::{render_chart, render_text, write_json};
use ziwei_time::{TimeBucket, bucket_from_hhmm};

#[derive(Clone, Copy, ValueEnum)]
enum CalendarArg {
    Solar,
    Lunar,
}

impl From<CalendarArg> for Calendar {
    fn from(value: CalendarArg) -> Self {
        match value {
            CalendarArg::Solar => Calendar::Solar,
            CalendarArg::Lunar => Calendar::Lunar,
        }
    }
}

#[derive(Parser)]
#[command(name = "ziwei", about = "Zi Wei Dou Shu natal chart CLI")]
struct Cli {
    /// Run the built-in consistency check and exit
    #[arg(long)]
    selftest: bool,

    /// Calendar of the birth date
    #[arg(long, value_enum, default_value = "solar")]
    calendar: CalendarArg,

    /// Birth date (YYYY-M-D in the chosen calendar)
    #[arg(long)]
    date: Option<String>,

    /// Birth wall-clock time (HH:MM)
    #[arg(long, conflicts_with = "time_index")]
    time: Option<String>,

    /// Double-hour index (0-12) given directly instead of --time
    #[arg(long)]
    time_index: Option<i64>,

    /// Gender (e.g. male/female, 男/女, 남/여)
    #[arg(long)]
    gender: Option<String>,

    /// Output language tag
    #[arg(long, default_value = "ko-KR")]
    language: String,

    /// Lunar only: the birth month is a leap month
    #[arg(long)]
    leap_month: bool,

    /// Apply the engine's leap-month adjustment (default)
    #[arg(long, overrides_with = "no_fix_leap")]
    fix_leap: bool,

    /// Disable the engine's leap-month adjustment
    #[arg(long, overrides_with = "fix_leap")]
    no_fix_leap: bool,

    /// Also write the canonical chart as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Cli {
    /// Effective leap-month adjustment: on by default, the last of
    /// --fix-leap / --no-fix-leap wins.
    fn fix_leap_effective(&self) -> bool {
        self.fix_leap || !self.no_fix_leap
    }
}

fn usage_error(message: &str) -> ! {
    eprintln!("error: {message}");
    std::process::exit(2);
}

fn resolve_bucket(cli: &Cli) -> TimeBucket {
    match (&cli.time, cli.time_index) {
        (Some(clock), None) => match bucket_from_hhmm(clock) {
            Ok(bucket) => bucket,
            Err(e) => {
                eprintln!("Invalid --time: {e}");
                std::process::exit(1);
            }
        },
        (None, Some(index)) => match TimeBucket::new(index) {
            Ok(bucket) => bucket,
            Err(e) => {
                eprintln!("Invalid --time-index: {e}");
                std::process::exit(1);
            }
        },
        _ => usage_error("exactly one of --time or --time-index is required"),
    }
}

fn run_selftest() {
    let engine = ReferenceEngine::new();
    let date = match BirthDate::parse("2000-8-16") {
        Ok(d) => d,
        Err(e) => {
            eprintln!("selftest: {e}");
            std::process::exit(1);
        }
    };
    let bucket = match TimeBucket::new(2) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("selftest: {e}");
            std::process::exit(1);
        }
    };
    let request = ChartRequest::new(Calendar::Solar, date, bucket, "male", "zh-CN");
    let chart = match create_chart(&request, &engine) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("selftest: chart creation failed: {e}");
            std::process::exit(1);
        }
    };
    let data = match chart.to_canonical() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("selftest: {e}");
            std::process::exit(1);
        }
    };

    let checks: [(&str, bool); 3] = [
        (
            "solarDate == 2000-8-16",
            data.get("solarDate").and_then(|v| v.as_str()) == Some("2000-8-16"),
        ),
        (
            "timeRange == 03:00~05:00",
            data.get("timeRange").and_then(|v| v.as_str()) == Some("03:00~05:00"),
        ),
        (
            "12 palaces",
            data.get("palaces").and_then(|v| v.as_array()).map(Vec::len) == Some(12),
        ),
    ];
    for (label, ok) in checks {
        if !ok {
            eprintln!("selftest: check failed: {label}");
            std::process::exit(1);
        }
    }
    println!("SELFTEST OK");
}

fn main() {
    let cli = Cli::parse();

    if cli.selftest {
        run_selftest();
        return;
    }

    let Some(date_arg) = cli.date.as_deref() else {
        usage_error("--date is required");
    };
    let Some(gender) = cli.gender.as_deref() else {
        usage_error("--gender is required");
    };
    let bucket = resolve_bucket(&cli);

    let date = match BirthDate::parse(date_arg) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Invalid --date: {e}");
            std::process::exit(1);
        }
    };

    let request = ChartRequest::new(
        Calendar::from(cli.calendar),
        date,
        bucket,
        gender,
        cli.language.as_str(),
    )
    .with_leap(cli.leap_month, cli.fix_leap_effective());

    let engine = ReferenceEngine::new();
    let chart = match create_chart(&request, &engine) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create chart: {e}");
            std::process::exit(1);
        }
    };
    let data = match chart.to_canonical() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to export chart: {e}");
            std::process::exit(1);
        }
    };

    // Rich localized rendering first; the canonical mapping is the fallback
    // when the structured chart is unusable.
    let rendered = match render_chart(&chart, &cli.language) {
        Ok(text) => text,
        Err(_) => render_text(&data),
    };
    if let Err(e) = std::io::stdout().write_all(rendered.as_bytes()) {
        eprintln!("Failed to write output: {e}");
        std::process::exit(1);
    }

    if let Some(path) = &cli.json {
        if let Err(e) = write_json(&data, path) {
            eprintln!("Failed to write {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}
