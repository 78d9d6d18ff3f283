use std::fmt;
use std::sync::Arc;

use campus_core::model::DEFAULT_AUTO_ADVANCE_SECS;
use chrono::Utc;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    ApiConfig, AppServices, CatalogApi, Clock, DownloadCatalog, HttpCatalogApi, StaticCatalogApi,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, ServicesApp, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://campus.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidAutoAdvance { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidAutoAdvance { raw } => {
                write!(f, "invalid --auto-advance-secs value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    db_url: String,
    api_url: Option<String>,
    api_token: Option<String>,
    auto_advance_secs: i64,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--db <sqlite_url>] [--api-url <url>] [--api-token <token>] [--auto-advance-secs <n>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --auto-advance-secs {DEFAULT_AUTO_ADVANCE_SECS}");
    eprintln!("  without --api-url the built-in demo catalog is served");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CAMPUS_DB_URL, CAMPUS_API_URL, CAMPUS_API_TOKEN, CAMPUS_AUTO_ADVANCE_SECS");
    eprintln!("  CAMPUS_DOWNLOAD_<PLATFORM>_URL, CAMPUS_DOWNLOAD_<PLATFORM>_COMING_SOON");
    eprintln!("  RUST_LOG (or CAMPUS_LOG) for log filtering");
}

fn non_blank_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn parse_auto_advance(raw: &str) -> Result<i64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidAutoAdvance {
            raw: raw.to_string(),
        })
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url =
            non_blank_env("CAMPUS_DB_URL").map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut api_url = non_blank_env("CAMPUS_API_URL");
        let mut api_token = non_blank_env("CAMPUS_API_TOKEN");
        let mut auto_advance_secs = non_blank_env("CAMPUS_AUTO_ADVANCE_SECS")
            .map(|raw| parse_auto_advance(&raw))
            .transpose()?
            .unwrap_or(DEFAULT_AUTO_ADVANCE_SECS);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--api-url" => api_url = Some(require_value(args, "--api-url")?),
                "--api-token" => api_token = Some(require_value(args, "--api-token")?),
                "--auto-advance-secs" => {
                    let value = require_value(args, "--auto-advance-secs")?;
                    auto_advance_secs = parse_auto_advance(&value)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            api_url,
            api_token,
            auto_advance_secs,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    let fallback = non_blank_env("CAMPUS_LOG").unwrap_or_else(|| "info".to_string());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn catalog_api(args: &Args) -> Result<Arc<dyn CatalogApi>, Box<dyn std::error::Error>> {
    match args.api_url.as_deref() {
        Some(url) => {
            let config = ApiConfig::new(url, args.api_token.clone())?;
            info!(base_url = %config.base_url(), "using catalog backend");
            Ok(Arc::new(HttpCatalogApi::new(config)))
        }
        None => {
            info!("no catalog backend configured; serving the demo catalog");
            Ok(Arc::new(StaticCatalogApi::demo(Utc::now())))
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    // Preference storage is best-effort; only a malformed path is fatal here.
    prepare_sqlite_file(&parsed.db_url)?;
    let api = catalog_api(&parsed)?;
    let services =
        AppServices::bootstrap_sqlite(&parsed.db_url, Clock::system(), api, DownloadCatalog::from_env())
            .await
            .with_auto_advance_secs(parsed.auto_advance_secs);
    let initial_profile = services.profile().load().await;

    let app: Arc<dyn UiApp> = Arc::new(ServicesApp::new(services, initial_profile));
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Campus")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
