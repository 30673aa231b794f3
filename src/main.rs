//! Lunatone - demo entry point
//!
//! Drives the engine from an interactive prompt: advances the clock an hour
//! at a time, polls a simulated weather source, and prints the control frame
//! plus an ASCII rendering of the phase mask. The real installation replaces
//! this loop with its scheduler, renderer, and synth bindings.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use lunatone::core::calendar::CalendarTime;
use lunatone::core::config::InstallationConfig;
use lunatone::core::error::Result;
use lunatone::mapping::ControlFrame;
use lunatone::weather::source::SimulatedSource;
use lunatone::weather::WeatherResolver;

#[derive(Parser, Debug)]
#[command(name = "lunatone", about = "Moon sonification engine demo")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting local date as YYYY-MM-DD
    #[arg(long, default_value = "2024-05-20")]
    date: String,

    /// Starting local hour (0-23)
    #[arg(long, default_value_t = 22)]
    hour: u32,

    /// Print a single frame as JSON and exit
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lunatone=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => InstallationConfig::load(path)?,
        None => InstallationConfig::default(),
    };
    config.validate()?;

    let mut time = parse_start_time(&args, &config);
    let mut source = SimulatedSource::new(rand::thread_rng());
    let mut now_secs: u64 = 0;
    let mut resolver = WeatherResolver::new(&mut source, config.weather_poll_interval_secs, now_secs);

    tracing::info!(
        "Lunatone starting at {:04}-{:02}-{:02} {:02}:00 (UTC{:+})",
        time.year,
        time.month,
        time.day,
        time.hour,
        config.utc_offset_hours
    );

    if args.json {
        let frame = ControlFrame::compute(&time, &config, &resolver)?;
        println!("{}", serde_json::to_string_pretty(&frame)?);
        return Ok(());
    }

    println!("\n=== LUNATONE ===");
    println!("Moon sonification engine demo");
    println!();
    println!("Commands:");
    println!("  tick / t     - Advance the clock by one hour");
    println!("  run <n>      - Advance n hours");
    println!("  cycle / c    - Cycle the manual weather mode");
    println!("  refresh / r  - Force a weather poll now");
    println!("  mask / m     - Print the phase mask");
    println!("  status / s   - Show the current frame");
    println!("  quit / q     - Exit");
    println!();

    display_status(&time, &config, &resolver)?;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        match input {
            "quit" | "q" => break,
            "tick" | "t" => {
                advance_hours(&mut time, 1, &mut now_secs);
                resolver.update(&mut source, now_secs);
                display_status(&time, &config, &resolver)?;
            }
            "cycle" | "c" => {
                let mode = resolver.cycle_manual();
                println!("Weather mode: {}", mode.label());
                display_status(&time, &config, &resolver)?;
            }
            "refresh" | "r" => {
                resolver.force_update(&mut source, now_secs);
                println!("Polled: {}", resolver.effective_state().label());
            }
            "mask" | "m" => {
                let frame = ControlFrame::compute(&time, &config, &resolver)?;
                print!("{}", frame.mask(&config).to_ascii());
            }
            "status" | "s" => display_status(&time, &config, &resolver)?,
            _ => {
                if let Some(n) = input.strip_prefix("run ").and_then(|s| s.parse::<u32>().ok()) {
                    for _ in 0..n {
                        advance_hours(&mut time, 1, &mut now_secs);
                        resolver.update(&mut source, now_secs);
                    }
                    display_status(&time, &config, &resolver)?;
                } else if !input.is_empty() {
                    println!("Unknown command: {input}");
                }
            }
        }
    }

    tracing::info!("Lunatone shutting down");
    Ok(())
}

fn parse_start_time(args: &Args, config: &InstallationConfig) -> CalendarTime {
    let mut parts = args.date.splitn(3, '-');
    let year = parts.next().and_then(|s| s.parse().ok()).unwrap_or(2024);
    let month = parts.next().and_then(|s| s.parse().ok()).unwrap_or(5);
    let day = parts.next().and_then(|s| s.parse().ok()).unwrap_or(20);
    CalendarTime::new(year, month, day, args.hour % 24, 0, 0)
        .with_utc_offset(config.utc_offset_hours)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
            if leap {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// Demo clock: roll the calendar forward hour by hour
fn advance_hours(time: &mut CalendarTime, hours: u32, now_secs: &mut u64) {
    *now_secs += u64::from(hours) * 3600;
    for _ in 0..hours {
        time.hour += 1;
        if time.hour == 24 {
            time.hour = 0;
            time.day += 1;
            if time.day > days_in_month(time.year, time.month) {
                time.day = 1;
                time.month += 1;
                if time.month > 12 {
                    time.month = 1;
                    time.year += 1;
                }
            }
        }
    }
}

fn display_status(
    time: &CalendarTime,
    config: &InstallationConfig,
    resolver: &WeatherResolver,
) -> Result<()> {
    let frame = ControlFrame::compute(time, config, resolver)?;

    println!(
        "{:04}-{:02}-{:02} {:02}:00  jd {:.5}  phase {:.3}",
        time.year, time.month, time.day, time.hour, frame.julian_date, frame.phase
    );
    println!(
        "  sky: az {:6.2}  alt {:6.2}  screen: ({:6.1}, {:6.1}) {}",
        frame.position.azimuth_deg,
        frame.position.altitude_deg,
        frame.screen.x,
        frame.screen.y,
        if frame.screen.visible { "visible" } else { "hidden" }
    );
    println!(
        "  weather: {} (effective {})  controls: phase {:.1}  altitude {:.1}",
        resolver.display_state(),
        frame.condition.label(),
        frame.phase_control,
        frame.altitude_control
    );
    Ok(())
}
