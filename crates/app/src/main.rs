use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lingo_content::{ContentRepository, DirectoryContent, EmbeddedContent, SiteContent};
use lingo_core::model::SiteSettings;
use lingo_services::Clock;
use lingo_ui::{App, SiteApp, build_app_context};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyPath { flag } => write!(f, "{flag} must not be empty"),
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

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyPath { flag });
    }
    Ok(PathBuf::from(value))
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p lingo -- [--content <dir>] [--settings <file>] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  content   built-in lessons and quizzes");
    eprintln!("  settings  built-in defaults");
    eprintln!("  log       info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LINGO_CONTENT_DIR, LINGO_SETTINGS, LINGO_LOG");
}

#[derive(Debug, Default)]
struct Args {
    content_dir: Option<PathBuf>,
    settings_file: Option<PathBuf>,
    log_filter: Option<String>,
    help: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            content_dir: env_value("LINGO_CONTENT_DIR").map(PathBuf::from),
            settings_file: env_value("LINGO_SETTINGS").map(PathBuf::from),
            log_filter: env_value("LINGO_LOG"),
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--content" => parsed.content_dir = Some(require_path(args, "--content")?),
                "--settings" => parsed.settings_file = Some(require_path(args, "--settings")?),
                "--log" => parsed.log_filter = Some(require_value(args, "--log")?),
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<SiteSettings, Box<dyn std::error::Error>> {
    let settings = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
            serde_json::from_str::<SiteSettings>(&raw)
                .map_err(|err| format!("malformed {}: {err}", path.display()))?
        }
        None => SiteSettings::default(),
    };
    settings.validate()?;
    Ok(settings)
}

fn load_content(dir: Option<&PathBuf>) -> Result<SiteContent, Box<dyn std::error::Error>> {
    let content = match dir {
        Some(dir) => DirectoryContent::new(dir.clone()).load()?,
        None => EmbeddedContent.load()?,
    };
    Ok(content)
}

struct DesktopApp {
    content: SiteContent,
    settings: Arc<SiteSettings>,
    clock: Clock,
}

impl SiteApp for DesktopApp {
    fn content(&self) -> SiteContent {
        self.content.clone()
    }

    fn settings(&self) -> Arc<SiteSettings> {
        Arc::clone(&self.settings)
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).inspect_err(|e| {
        eprintln!("{e}");
        print_usage();
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing(args.log_filter.as_deref());

    let settings = load_settings(args.settings_file.as_ref())?;
    let content = load_content(args.content_dir.as_ref())?;
    tracing::info!(
        lessons = content.lessons().len(),
        quizzes = content.quizzes().banks().len(),
        source = if args.content_dir.is_some() { "directory" } else { "embedded" },
        "content loaded"
    );

    let app: Arc<dyn SiteApp> = Arc::new(DesktopApp {
        content,
        settings: Arc::new(settings),
        clock: Clock::default_clock(),
    });
    let context = build_app_context(&app);

    // tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Lingo")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
