mod clock;
mod config;
mod vars;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use epochal_core::{BrokenDownTime, ClockSource, EpochSeconds, decode, parse_datetime};
use epochal_store::{SettingName, Store};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "epochal", about = "UTC calendar conversions and firmware variable listing")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current UTC date and time
    Date {
        /// Print the broken-down time as JSON
        #[arg(long)]
        json: bool,
    },

    /// List firmware variables
    Vars {
        /// Persist the listing under a setting, `name[:type]`
        #[arg(long, value_name = "NAME[:TYPE]")]
        store: Option<String>,
    },

    /// Print a persisted setting
    Show {
        name: String,
    },

    /// Remove a persisted setting
    Unset {
        name: String,
    },

    /// Convert `YYYY-MM-DD[ T]HH:MM:SS` (UTC) to seconds since the epoch
    ToEpoch {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Convert seconds since the epoch to a UTC date and time
    FromEpoch {
        #[arg(allow_hyphen_values = true)]
        seconds: EpochSeconds,
    },
}

fn data_dir() -> PathBuf {
    std::env::var("EPOCHAL_DATA_DIR")
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(epochal_store::default_base_dir)
}

fn open_store() -> Result<Store> {
    Store::open_in(Some(&data_dir())).context("failed to open settings store")
}

fn load_config() -> Result<Config> {
    Config::load(&data_dir())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Date { json } => cmd_date(*json),
        Commands::Vars { store } => cmd_vars(store.as_deref()),
        Commands::Show { name } => cmd_show(name),
        Commands::Unset { name } => cmd_unset(name),
        Commands::ToEpoch { text } => cmd_to_epoch(text),
        Commands::FromEpoch { seconds } => cmd_from_epoch(*seconds),
    }
}

fn log_conversion(seconds: EpochSeconds, tm: &BrokenDownTime) {
    tracing::debug!("{seconds} => {tm} ({}, day {})", tm.wday, tm.yday);
}

fn cmd_date(json: bool) -> Result<()> {
    let config = load_config()?;
    let clock = clock::from_config(&config.clock);
    let seconds = clock.now().context("Unable to get current time")?;

    let tm = decode(seconds);
    log_conversion(seconds, &tm);

    if json {
        let value = serde_json::json!({
            "seconds": seconds,
            "time": tm,
            "iso8601": tm.to_iso8601(),
        });
        let out = serde_json::to_string_pretty(&value).context("failed to serialize time")?;
        println!("{out}");
    } else {
        println!("{tm}");
    }
    Ok(())
}

fn cmd_vars(store_as: Option<&str>) -> Result<()> {
    // Parse the target first so a bad name fails before any enumeration
    let target = store_as
        .map(|s| s.parse::<SettingName>())
        .transpose()
        .context("invalid setting name")?;

    let config = load_config()?;
    let vars = vars::enumerate(&config.vars.dir)?;

    match target {
        Some(setting) => {
            let store = open_store()?;
            store
                .store_setting(&setting, &vars::render_blob(&vars))
                .with_context(|| format!("failed to store {setting}"))?;
            println!("stored {} variables in {setting}", vars.len());
        }
        None => print!("{}", vars::render_listing(&vars)),
    }
    Ok(())
}

fn cmd_show(name: &str) -> Result<()> {
    let store = open_store()?;
    let Some(setting) = store
        .fetch_setting(name)
        .with_context(|| format!("failed to read setting {name}"))?
    else {
        bail!("setting '{name}' is not set");
    };

    println!(
        "{}:{} (updated {})",
        setting.name, setting.kind, setting.updated_at
    );
    if setting.value.ends_with('\n') {
        print!("{}", setting.value);
    } else {
        println!("{}", setting.value);
    }
    Ok(())
}

fn cmd_unset(name: &str) -> Result<()> {
    let store = open_store()?;
    if !store
        .clear_setting(name)
        .with_context(|| format!("failed to remove setting {name}"))?
    {
        bail!("setting '{name}' is not set");
    }
    println!("removed {name}");
    Ok(())
}

fn cmd_to_epoch(text: &str) -> Result<()> {
    let (tm, seconds) =
        parse_datetime(text).with_context(|| format!("invalid date '{text}'"))?;
    log_conversion(seconds, &tm);

    println!("{seconds} ({}, day {})", tm.wday, tm.yday);
    Ok(())
}

fn cmd_from_epoch(seconds: EpochSeconds) -> Result<()> {
    let tm = decode(seconds);
    log_conversion(seconds, &tm);
    println!("{tm}");
    Ok(())
}
