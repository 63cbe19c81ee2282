mod display;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use display::output::{
    display_champion, display_code_tables, display_error, display_info, display_json,
    display_list, display_success,
};
use indicatif::{ProgressBar, ProgressStyle};
use loliglio::{AppError, ChampionLookup, Config, Endpoint, RiotApiClient};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "loliglio")]
#[command(about = "Query the Riot Games API and Data Dragon", long_about = None)]
struct Args {
    /// Print the request URL instead of calling the API
    #[arg(long, global = true)]
    url_only: bool,

    /// Calls allowed per rate window (default: 100)
    #[arg(long, global = true)]
    budget: Option<u32>,

    /// Rate window length in seconds (default: 120)
    #[arg(long, global = true)]
    window: Option<u64>,

    /// Data Dragon locale (default: en_US)
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Api(Endpoint),

    /// Names of every champion
    ChampionNames {
        /// Game version (default: latest)
        #[arg(long)]
        version: Option<String>,
    },

    /// Ids of every champion (Wukong is MonkeyKing)
    ChampionIds {
        #[arg(long)]
        version: Option<String>,
    },

    /// Numeric keys of every champion
    ChampionKeys {
        #[arg(long)]
        version: Option<String>,
    },

    /// Look up a single champion
    Champion {
        query: String,

        /// Field the query is matched against
        #[arg(long, value_enum, default_value = "name")]
        by: LookupField,

        #[arg(long)]
        version: Option<String>,
    },

    /// Latest Data Dragon version
    LastVersion,

    /// Print region, cluster, queue, tier and division tables
    Codes,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LookupField {
    Name,
    Id,
    Key,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        let code = e.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
        std::process::exit(code);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if let Command::Codes = args.command {
        display_code_tables();
        return Ok(());
    }

    let mut config = Config::from_env().context("Loading configuration")?;
    if let Some(budget) = args.budget {
        config.budget = budget;
    }
    if let Some(window) = args.window {
        config.window = Duration::from_secs(window);
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }

    let client = RiotApiClient::new(config);

    match args.command {
        Command::Api(endpoint) => {
            if args.url_only {
                println!("{}", client.url(&endpoint));
                return Ok(());
            }
            let value = with_spinner("Calling Riot API...", || client.fetch(&endpoint))?;
            display_json(&value);
        }
        Command::ChampionNames { version } => {
            let version = resolve_version(&client, version, args.url_only)?;
            if args.url_only {
                println!("{}", client.url(&Endpoint::Champions { version }));
                return Ok(());
            }
            let names = with_spinner("Fetching champions...", || client.champion_names(&version))?;
            display_list(&format!("Champion names ({})", version), &names);
        }
        Command::ChampionIds { version } => {
            let version = resolve_version(&client, version, args.url_only)?;
            if args.url_only {
                println!("{}", client.url(&Endpoint::Champions { version }));
                return Ok(());
            }
            let ids = with_spinner("Fetching champions...", || client.champion_ids(&version))?;
            display_list(&format!("Champion ids ({})", version), &ids);
        }
        Command::ChampionKeys { version } => {
            let version = resolve_version(&client, version, args.url_only)?;
            if args.url_only {
                println!("{}", client.url(&Endpoint::Champions { version }));
                return Ok(());
            }
            let keys = with_spinner("Fetching champions...", || client.champion_keys(&version))?;
            display_list(&format!("Champion keys ({})", version), &keys);
        }
        Command::Champion { query, by, version } => {
            let lookup = match by {
                LookupField::Name => ChampionLookup::Name(query),
                LookupField::Id => ChampionLookup::Id(query),
                LookupField::Key => ChampionLookup::Key(query.parse().with_context(|| {
                    format!("Champion key must be a number, got {:?}", query)
                })?),
            };
            let version = resolve_version(&client, version, args.url_only)?;
            if args.url_only {
                println!("{}", client.url(&Endpoint::Champions { version }));
                return Ok(());
            }
            let found = with_spinner("Fetching champions...", || {
                client.find_champion(&version, &lookup)
            })?;
            match found {
                Some(champion) => display_champion(&champion),
                None => display_info(&format!("No champion matches {:?} in {}", lookup, version)),
            }
        }
        Command::LastVersion => {
            if args.url_only {
                println!("{}", client.url(&Endpoint::Versions));
                return Ok(());
            }
            let version = client.last_version()?;
            display_success(&format!("Latest version: {}", version));
        }
        Command::Codes => unreachable!("handled before loading configuration"),
    }

    Ok(())
}

fn resolve_version(
    client: &RiotApiClient,
    version: Option<String>,
    url_only: bool,
) -> anyhow::Result<String> {
    match version {
        Some(version) => Ok(version),
        None if url_only => bail!("--url-only needs an explicit --version"),
        None => {
            let latest = client.last_version().context("Resolving latest game version")?;
            display_info(&format!("Using latest version {}", latest));
            Ok(latest)
        }
    }
}

/// Run a request behind a spinner; a rate-limit back-off can keep it
/// spinning for up to a full window.
fn with_spinner<T>(
    message: &str,
    call: impl FnOnce() -> Result<T, AppError>,
) -> Result<T, AppError> {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    let result = call();
    pb.finish_and_clear();
    result
}
