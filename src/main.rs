//! note-sensor - sensor conditioning for note selection

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use note_sensor::config::{self, EXAMPLE_CONFIG};
use note_sensor::engine::{ChannelReading, Instrument};
use note_sensor::linearize::{Linearize, SensorKind, FULL_SCALE};
use note_sensor::sources::{Capture, ReplaySampler};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

/// One JSON line of replay output
#[derive(Serialize)]
struct ReplayLine<'a> {
    cycle: usize,
    time_s: f64,
    #[serde(flatten)]
    reading: &'a ChannelReading,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check { config: config_path } => {
            println!("Checking configuration at {:?}...", config_path);

            match config::load_config(&config_path) {
                Ok(cfg) => {
                    println!("Configuration is valid!");
                    println!("  Loop rate: {} Hz", cfg.loop_hz);
                    println!("  Channels: {}", cfg.channels.len());
                    for channel in &cfg.channels {
                        println!(
                            "    - {} (pin {}, {}) window {} -> {} states",
                            channel.name, channel.pin, channel.kind, channel.window, channel.states
                        );
                    }
                }
                Err(e) => {
                    println!("Configuration is invalid: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Replay {
            config: config_path,
            capture,
            cycles,
            changes_only,
            json,
        } => {
            let cfg = config::load_config(&config_path)
                .with_context(|| format!("loading configuration {:?}", config_path))?;
            let capture = Capture::load(&capture)
                .with_context(|| format!("loading capture {:?}", capture))?;

            let mut instrument = Instrument::from_config(&cfg);
            let mut sampler = ReplaySampler::new(capture);
            let cycles = cycles.unwrap_or_else(|| sampler.cycles());
            let period = 1.0 / f64::from(cfg.loop_hz);

            if !json {
                println!("{:>6} {:>9}  {:<12} {:>4} {:>6}", "cycle", "time", "channel", "pin", "state");
            }

            for cycle in 0..cycles {
                let time_s = cycle as f64 * period;
                for reading in instrument.poll(&mut sampler) {
                    if changes_only && !reading.changed && reading.state.is_some() {
                        continue;
                    }

                    if json {
                        let line = ReplayLine { cycle, time_s, reading: &reading };
                        println!("{}", serde_json::to_string(&line)?);
                    } else {
                        let state = match reading.state {
                            Some(s) if reading.changed => format!("{}*", s),
                            Some(s) => s.to_string(),
                            None => "mute".to_string(),
                        };
                        println!(
                            "{:>6} {:>8.3}s  {:<12} {:>4} {:>6}",
                            cycle, time_s, reading.name, reading.pin, state
                        );
                    }
                }
            }
        }

        Commands::Curve { kind, step } => {
            let kind = SensorKind::from_name(&kind)
                .ok_or_else(|| anyhow!("unknown sensor kind '{}'", kind))?;
            if step == 0 {
                bail!("step must be at least 1");
            }

            println!("{} curve", kind);
            println!("{:>5} {:>7}", "raw", "linear");
            let mut raws: Vec<u16> = (0..=FULL_SCALE).step_by(usize::from(step)).collect();
            if raws.last() != Some(&FULL_SCALE) {
                raws.push(FULL_SCALE);
            }
            for raw in raws {
                match kind.linearize(raw) {
                    Some(linear) => println!("{:>5} {:>7}", raw, linear),
                    None => println!("{:>5} {:>7}", raw, "-"),
                }
            }
        }

        Commands::Init => {
            let path = "note-sensor.yaml";
            if std::path::Path::new(path).exists() {
                println!("note-sensor.yaml already exists. Not overwriting.");
            } else {
                std::fs::write(path, EXAMPLE_CONFIG)?;
                println!("Created note-sensor.yaml with example configuration.");
            }
        }
    }

    Ok(())
}
