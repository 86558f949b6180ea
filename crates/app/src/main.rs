use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::info;
use services::{
    Clock, HttpQuizApi, QuizApi, QuizApiConfig, QuizFlowService, UploadService,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimeout { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout-secs value: {raw}"),
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

struct DesktopQuizApp {
    quiz_flow: Arc<QuizFlowService>,
    uploads: Arc<UploadService>,
}

impl UiApp for DesktopQuizApp {
    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    fn uploads(&self) -> Arc<UploadService> {
        Arc::clone(&self.uploads)
    }
}

struct Args {
    config: QuizApiConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--timeout-secs <secs>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", QuizApiConfig::DEFAULT_BASE_URL);
    eprintln!(
        "  --timeout-secs {}",
        QuizApiConfig::DEFAULT_TIMEOUT.as_secs()
    );
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_API_URL, QUIZ_API_TIMEOUT_SECS");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        // Environment first, flags override.
        let mut config = QuizApiConfig::from_env();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    config.base_url = require_value(args, "--api-url")?;
                }
                "--timeout-secs" => {
                    let value = require_value(args, "--timeout-secs")?;
                    let secs: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidTimeout { raw: value.clone() })?;
                    config.timeout = Duration::from_secs(secs);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { config })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    info!("quiz service at {}", parsed.config.base_url);
    let api: Arc<dyn QuizApi> = Arc::new(HttpQuizApi::new(parsed.config)?);
    let quiz_flow = Arc::new(QuizFlowService::new(
        Clock::default_clock(),
        Arc::clone(&api),
    ));
    let uploads = Arc::new(UploadService::new(api));

    let app: Arc<dyn UiApp> = Arc::new(DesktopQuizApp { quiz_flow, uploads });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("QuizMaker")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
