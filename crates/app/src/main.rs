use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{Locale, OptionKey, QuestionBank, QuizSettings, QuizSettingsDraft};
use services::{ClipboardSink, Clock, QuestionSource, QuizService, SystemClipboard};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimeLimit { raw: String },
    /// Locale or settings rejected by the quiz model.
    Config(quiz_core::Error),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimeLimit { raw } => write!(f, "invalid --time-limit value: {raw}"),
            ArgsError::Config(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<quiz_core::Error> for ArgsError {
    fn from(err: quiz_core::Error) -> Self {
        ArgsError::Config(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_service: Arc<QuizService>,
    clipboard: Arc<dyn ClipboardSink>,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn clipboard(&self) -> Arc<dyn ClipboardSink> {
        Arc::clone(&self.clipboard)
    }
}

struct Args {
    source: QuestionSource,
    settings: QuizSettingsDraft,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--questions <file.json>] [--time-limit <secs>] [--locale <en|hi>]");
    eprintln!("  cargo run -p app -- list [--questions <file.json>] [--locale <en|hi>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in questions, --time-limit 60, --locale en");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_TIME_LIMIT, QUIZ_LOCALE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    List,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

fn parse_time_limit(raw: String) -> Result<u32, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidTimeLimit { raw })
}

fn parse_locale(raw: &str) -> Result<Locale, ArgsError> {
    let locale = raw.parse::<Locale>().map_err(quiz_core::Error::from)?;
    Ok(locale)
}

fn validate_settings(draft: QuizSettingsDraft) -> Result<QuizSettings, ArgsError> {
    let settings = draft.validate().map_err(quiz_core::Error::from)?;
    Ok(settings)
}

impl Args {
    /// Environment first, then flags on top.
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut source = std::env::var("QUIZ_QUESTIONS")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or(QuestionSource::Builtin, |path| {
                QuestionSource::File(PathBuf::from(path))
            });
        let mut settings = QuizSettingsDraft {
            time_limit_secs: std::env::var("QUIZ_TIME_LIMIT")
                .ok()
                .map(parse_time_limit)
                .transpose()?,
            default_locale: std::env::var("QUIZ_LOCALE")
                .ok()
                .map(|raw| parse_locale(&raw))
                .transpose()?,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    source = QuestionSource::File(PathBuf::from(value));
                }
                "--time-limit" => {
                    let value = require_value(args, "--time-limit")?;
                    settings.time_limit_secs = Some(parse_time_limit(value)?);
                }
                "--locale" => {
                    let value = require_value(args, "--locale")?;
                    settings.default_locale = Some(parse_locale(&value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { source, settings })
    }
}

fn print_bank(bank: &QuestionBank, locale: Locale) {
    for (index, question) in bank.iter().enumerate() {
        println!("{}. {}", index + 1, question.text(locale));
        for key in OptionKey::ALL {
            let marker = if question.is_correct(key) { "*" } else { " " };
            println!("  {marker} {key}) {}", question.option(locale, key));
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let settings = validate_settings(parsed.settings)?;
    let bank = Arc::new(parsed.source.load()?);

    match cmd {
        Command::List => {
            print_bank(&bank, settings.default_locale());
            Ok(())
        }
        Command::Ui => {
            let quiz_service = Arc::new(QuizService::new(Clock::default_clock(), bank, settings));
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                quiz_service,
                clipboard: Arc::new(SystemClipboard),
            });
            let context = build_app_context(&app);

            // Some window managers default to always-on-top in dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quiz20")
                    .with_always_on_top(false),
            );

            tracing::info!(
                time_limit_secs = settings.time_limit_secs(),
                locale = %settings.default_locale(),
                "launching quiz window"
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
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run() {
        tracing::error!(error = %err, "quiz exited with an error");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
