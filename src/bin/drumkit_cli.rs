use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use drumkit_bridge::config::BridgeConfig;
use drumkit_bridge::DrumKit;
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(
    name = "drumkit_cli",
    about = "Drive the drum-kit facade from the command line"
)]
struct Cli {
    /// Config file (defaults to DRUMKIT_BRIDGE_CONFIG or assets/bridge_config.json)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log every facade call
    #[arg(long, short)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the engine version
    Version,
    /// List kits found in a data location, one per line
    Kits {
        #[arg(long)]
        data: String,
    },
    /// Call one facade method and print its JSON result
    Call {
        #[arg(long)]
        data: String,
        /// Host method name, e.g. enableMetronome
        method: String,
        /// Arguments as JSON values; anything that is not JSON is passed as a string
        args: Vec<String>,
    },
    /// Run a script of facade calls, one `method [args...]` per line
    Run {
        #[arg(long)]
        data: String,
        script: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => BridgeConfig::load_from_file(path),
        None => BridgeConfig::load(),
    };
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        config.logging.level_filter()
    };
    drumkit_bridge::init_logging(level);

    match cli.command {
        Commands::Version => {
            println!("{}", DrumKit::version());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Kits { data } => run_kits(&config, &data),
        Commands::Call { data, method, args } => run_call(&config, &data, &method, &args),
        Commands::Run { data, script } => run_script(&config, &data, &script),
    }
}

fn open(config: &BridgeConfig, data: &str) -> Result<DrumKit> {
    DrumKit::open(data, &config.engine).with_context(|| format!("opening data location {}", data))
}

fn run_kits(config: &BridgeConfig, data: &str) -> Result<ExitCode> {
    let kit = open(config, data)?;
    for name in kit.get_kits_names()? {
        println!("{}", name);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_call(config: &BridgeConfig, data: &str, method: &str, args: &[String]) -> Result<ExitCode> {
    let mut kit = open(config, data)?;
    let values: Vec<Value> = args.iter().map(String::as_str).map(parse_arg).collect();
    let result = kit
        .invoke(method, &values)
        .with_context(|| format!("calling {}", method))?;
    println!("{}", result);
    Ok(ExitCode::SUCCESS)
}

fn run_script(config: &BridgeConfig, data: &str, script: &Path) -> Result<ExitCode> {
    let source = fs::read_to_string(script)
        .with_context(|| format!("reading script {}", script.display()))?;
    let mut kit = open(config, data)?;
    let mut failures = 0;

    for (line_no, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let Some(method) = parts.next() else {
            continue;
        };
        let values: Vec<Value> = parts.map(parse_arg).collect();

        match kit.invoke(method, &values) {
            Ok(result) => println!("{}", result),
            Err(err) => {
                failures += 1;
                eprintln!("line {}: {}", line_no + 1, err);
            }
        }
    }

    if failures > 0 {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
