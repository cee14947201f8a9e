use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use maury::accounts::{self, AccountChanges};
use maury::client::Params;
use maury::config::Config;
use maury::resource::Listing;
use maury::users::{self, User};
use maury::Driver;
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Command line client for the Engine Yard API
#[derive(Parser, Debug)]
#[command(name = "maury", version, about, long_about = None)]
struct Args {
    /// API root (defaults to MAURY_BASE_URL, then the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// API token (defaults to MAURY_TOKEN, then the config file)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json", global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List accounts
    Accounts {
        /// Only accounts this user belongs to
        #[arg(long)]
        user: Option<String>,
    },
    /// Show one account
    Account { id: String },
    /// Change an account's name, emergency contact, or support plan
    UpdateAccount {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        emergency_contact: Option<String>,
        #[arg(long)]
        support_plan: Option<String>,
    },
    /// List users
    Users,
    /// Show one user
    User { id: String },
    /// Show the user that owns the token
    Whoami,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("maury started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("maury").join("maury.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".maury").join("maury.log");
    }
    PathBuf::from("maury.log")
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value).context("Failed to render JSON")?,
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to render YAML")?,
    };
    Ok(rendered)
}

fn print<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

fn print_listing<T: Serialize>(listing: &Listing<T>, format: OutputFormat) -> Result<()> {
    if !listing.complete {
        eprintln!(
            "warning: listing stopped early after {} entries; results may be incomplete",
            listing.items.len()
        );
    }
    print(&listing.items, format)
}

async fn run(command: Command, driver: &Driver, format: OutputFormat) -> Result<()> {
    match command {
        Command::Accounts { user: Some(user) } => {
            let listing =
                accounts::list_for_user(driver, &User::with_id(&user), Params::new()).await;
            print_listing(&listing, format)
        }
        Command::Accounts { user: None } => {
            let listing = accounts::list(driver, Params::new()).await;
            print_listing(&listing, format)
        }
        Command::Account { id } => {
            let account = accounts::find(driver, &id)
                .await
                .with_context(|| format!("Failed to fetch account {}", id))?;
            print(&account, format)
        }
        Command::UpdateAccount {
            id,
            name,
            emergency_contact,
            support_plan,
        } => {
            let changes = AccountChanges {
                name,
                emergency_contact,
                support_plan,
            };
            if changes.is_empty() {
                anyhow::bail!("Nothing to change. Pass --name, --emergency-contact, or --support-plan");
            }

            let account = accounts::find(driver, &id)
                .await
                .with_context(|| format!("Failed to fetch account {}", id))?;
            let updated = accounts::update(driver, &account, &changes)
                .await
                .with_context(|| format!("Failed to update account {}", id))?;
            print(&updated, format)
        }
        Command::Users => {
            let listing = users::list(driver, Params::new()).await;
            print_listing(&listing, format)
        }
        Command::User { id } => {
            let user = users::find(driver, &id)
                .await
                .with_context(|| format!("Failed to fetch user {}", id))?;
            print(&user, format)
        }
        Command::Whoami => {
            let user = users::current(driver)
                .await
                .context("Failed to fetch the current user")?;
            print(&user, format)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let config = Config::load();
    let base_url = config.effective_base_url(args.base_url.as_deref());
    let token = config.effective_token(args.token.as_deref()).with_context(|| {
        format!(
            "No API token configured. Set {} or use --token",
            maury::config::TOKEN_ENV
        )
    })?;

    tracing::info!("Using API at {}", base_url);

    let driver = maury::new_client(&base_url, &token).context("Failed to create API client")?;

    run(args.command, &driver, args.output).await
}
