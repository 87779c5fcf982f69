use clap::{Parser, Subcommand};
use nila_date::CalendarDate;
use nila_engine::{DayInfo, day_info, month_days, scan_vasthu_days_in_year};

#[derive(Parser)]
#[command(name = "nila", about = "Tamil calendar and panchangam CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tamil date and panchangam for a single day
    Day {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Day-by-day summary of a Gregorian month
    Month {
        /// Gregorian year
        #[arg(long)]
        year: i32,
        /// Gregorian month (1-12)
        #[arg(long)]
        month: u32,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// All Vasthu days in a Gregorian year
    Vasthu {
        /// Gregorian year
        #[arg(long)]
        year: i32,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn require_date(s: &str) -> CalendarDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    let out = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize output: {e}");
        std::process::exit(1);
    });
    println!("{out}");
}

fn print_day(info: &DayInfo) {
    let p = &info.panchangam;
    println!("Date: {} ({})", info.date, info.date.weekday().name());
    println!("Tamil date: {}", info.tamil_date);
    println!("Tithi: {} ({})", p.tithi.name(), p.tithi.tamil_name());
    println!(
        "Nakshatram: {} ({})",
        p.nakshatram.name(),
        p.nakshatram.tamil_name()
    );
    println!("Yogam: {}", p.yogam);
    println!("Karanam: {}", p.karanam);
    println!("Rahu Kalam: {}", p.rahu_kalam);
    println!("Yamagandam: {}", p.yamagandam);
    println!("Gulikai: {}", p.gulikai);
    if !p.festivals.is_empty() {
        let names: Vec<&str> = p.festivals.iter().map(|f| f.name).collect();
        println!("Festivals: {}", names.join(", "));
    }
    if let Some(time) = p.vasthu_time {
        println!("Vasthu day: {time}");
    }
    println!(
        "Auspicious: {}",
        if p.is_auspicious { "yes" } else { "no" }
    );
}

fn print_month_line(info: &DayInfo) {
    let p = &info.panchangam;
    let mut tags = Vec::new();
    for f in &p.festivals {
        tags.push(f.name);
    }
    if p.is_vasthu_day {
        tags.push("Vasthu");
    }
    if p.is_auspicious {
        tags.push("Auspicious");
    }
    let tags = if tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", tags.join(", "))
    };
    println!(
        "{}  {:<3} {:<10} {:<12} {:<17}{}",
        info.date,
        info.tamil_date.day,
        info.tamil_date.month_name(),
        p.tithi.name(),
        p.nakshatram.name(),
        tags
    );
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Day { date, json } => {
            let info = day_info(require_date(&date));
            if json {
                print_json(&info);
            } else {
                print_day(&info);
            }
        }

        Commands::Month { year, month, json } => {
            if !(1..=12).contains(&month) {
                eprintln!("Invalid month: {month} (must be 1-12)");
                std::process::exit(1);
            }
            let days = month_days(year, month);
            if json {
                print_json(&days);
            } else {
                for info in &days {
                    print_month_line(info);
                }
            }
        }

        Commands::Vasthu { year, json } => {
            let found = scan_vasthu_days_in_year(year);
            if json {
                print_json(&found);
            } else {
                for e in &found {
                    println!(
                        "{}  {} {} - {} ({})",
                        e.date,
                        e.month.name(),
                        e.day,
                        e.time,
                        e.tamil_time
                    );
                }
            }
        }
    }
}
