use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use luxe_core::model::SiteContent;
use services::{AppServices, Clock, ContentService, ContentSource, QuizService};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidContentPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidContentPath { raw } => {
                write!(f, "invalid --content value: {raw:?}")
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

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.services.clock()
    }

    fn content(&self) -> Arc<SiteContent> {
        self.services.content()
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--content <path>] [--log-level <level>]");
    eprintln!("  cargo run -p app -- check [--content <path>] [--log-level <level>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --content  built-in Luxe Vision content");
    eprintln!("  --log-level {DEFAULT_LOG_LEVEL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LUXE_CONTENT_PATH, LUXE_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    command: Command,
    content: ContentSource,
    log_level: String,
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

impl Args {
    /// `env` stands in for the process environment so parsing stays testable.
    fn parse(
        argv: Vec<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut argv = argv.into_iter().peekable();

        // No subcommand launches the UI.
        let command = match argv.peek().map(String::as_str) {
            None => Command::Ui,
            Some(first) if first.starts_with('-') => Command::Ui,
            Some(first) => {
                let command = Command::from_arg(first)
                    .ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?;
                argv.next();
                command
            }
        };

        let mut content = env("LUXE_CONTENT_PATH")
            .filter(|value| !value.trim().is_empty())
            .map_or(ContentSource::Builtin, |value| {
                ContentSource::File(PathBuf::from(value))
            });
        let mut log_level = env("LUXE_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        while let Some(arg) = argv.next() {
            match arg.as_str() {
                "--content" => {
                    let value = require_value(&mut argv, "--content")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidContentPath { raw: value });
                    }
                    content = ContentSource::File(PathBuf::from(value));
                }
                "--log-level" => {
                    log_level = require_value(&mut argv, "--log-level")?;
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            command,
            content,
            log_level,
        }))
    }
}

fn init_logging(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(level)?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn check(source: ContentSource) -> Result<(), Box<dyn std::error::Error>> {
    let content = ContentService::new(source.clone()).load()?;
    let tags: Vec<&str> = content
        .packages
        .iter()
        .map(|package| package.tag().as_str())
        .collect();
    println!("content: {source}");
    println!("  packages:    {} ({})", content.packages.len(), tags.join(", "));
    println!("  questions:   {}", content.questions.len());
    println!("  process:     {} steps", content.process.len());
    println!("  event types: {}", content.event_types.len());
    println!("ok");
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = Args::parse(argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_logging(&args.log_level)?;

    match args.command {
        Command::Check => check(args.content),
        Command::Ui => {
            tracing::info!(content = %args.content, "launching desktop ui");
            let services = AppServices::new(Clock::default_clock(), args.content)?;
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Luxe Vision")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
