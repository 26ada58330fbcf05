use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use beacon_search::{Search, TieBreak};
use beacon_swarm::{in_range_of_strongest, parse_emitters};
use clap::Parser;

mod config;

use config::{BeaconConfig, load_config};

/// Find the point covered by the most emitter ranges.
#[derive(Parser, Debug)]
#[command(name = "beacon", version)]
struct Args {
    /// Emitter list, one `pos=<x,y,z>, r=<radius>` per line
    input: PathBuf,

    /// TOML file with a `[search]` table
    #[arg(long)]
    config: Option<PathBuf>,

    /// Abort after this many cube expansions
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Score octants on the rayon pool
    #[arg(long)]
    parallel: bool,

    /// Break overlap ties by each cube's nearest point; exact but slow on large swarms
    #[arg(long)]
    nearest: bool,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut cfg = match &args.config {
        Some(path) => load_config(path)?,
        None => BeaconConfig::default(),
    };
    if let Some(limit) = args.max_expansions {
        cfg.search.max_expansions = Some(limit);
    }
    if args.parallel {
        cfg.search.parallel = true;
    }
    if args.nearest {
        cfg.search.tie_break = TieBreak::Nearest;
    }

    let text = std::fs::read_to_string(&args.input)
        .map_err(|e| format!("{}: {}", args.input.display(), e))?;
    let emitters = parse_emitters(&text)?;
    log::info!("loaded {} emitters from {}", emitters.len(), args.input.display());

    println!("in range of strongest: {}", in_range_of_strongest(&emitters));

    let (best, stats) = Search::new(cfg.search).run(&emitters)?;
    log::debug!("search stats: {:?}", stats);
    println!(
        "best point: {} overlap={} distance={}",
        best.point, best.overlap, best.distance
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse() {
        let args = Args::try_parse_from([
            "beacon",
            "input.txt",
            "--config",
            "beacon.toml",
            "--max-expansions",
            "42",
            "--parallel",
            "--nearest",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("input.txt"));
        assert_eq!(args.config, Some(PathBuf::from("beacon.toml")));
        assert_eq!(args.max_expansions, Some(42));
        assert!(args.parallel);
        assert!(args.nearest);
    }

    #[test]
    fn input_is_required() {
        assert!(Args::try_parse_from(["beacon"]).is_err());
    }
}
