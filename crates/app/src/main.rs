use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock};
use timeline_core::Catalog;
use timeline_core::model::AppSettingsDraft;
use tracing_subscriber::EnvFilter;
use ui::{App, DialogFilePicker, FilePickerRef, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidRate { raw: String },
    InvalidAssetsDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidRate { raw } => write!(f, "invalid --rate value: {raw}"),
            ArgsError::InvalidAssetsDir { raw } => write!(f, "invalid --assets value: {raw:?}"),
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
    file_picker: FilePickerRef,
}

impl UiApp for DesktopApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn file_picker(&self) -> FilePickerRef {
        Arc::clone(&self.file_picker)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--assets <dir>] [--voice <name>] [--rate <wpm>] [--no-voice]");
    eprintln!();
    eprintln!("Every flag and environment variable is optional; without them the app");
    eprintln!("runs with the built-in defaults below.");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --assets assets");
    eprintln!("  --voice es");
    eprintln!("  --rate 150");
    eprintln!();
    eprintln!("Environment (optional):");
    eprintln!("  TIMELINE_ASSETS_DIR, TIMELINE_VOICE, RUST_LOG");
}

enum Parsed {
    Launch(AppSettingsDraft),
    Help,
}

fn parse_args(args: &mut impl Iterator<Item = String>) -> Result<Parsed, ArgsError> {
    let mut draft = AppSettingsDraft::new();
    draft.assets_dir = std::env::var_os("TIMELINE_ASSETS_DIR").map(PathBuf::from);
    draft.voice = std::env::var("TIMELINE_VOICE").ok();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--assets" => {
                let value = require_value(args, "--assets")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidAssetsDir { raw: value });
                }
                draft.assets_dir = Some(PathBuf::from(value));
            }
            "--voice" => {
                draft.voice = Some(require_value(args, "--voice")?);
            }
            "--rate" => {
                let value = require_value(args, "--rate")?;
                let parsed: u32 = value
                    .parse()
                    .map_err(|_| ArgsError::InvalidRate { raw: value.clone() })?;
                draft.speech_rate_wpm = Some(parsed);
            }
            "--no-voice" => draft.narration_enabled = Some(false),
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Parsed::Launch(draft))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let draft = match parse_args(&mut argv).inspect_err(|_| print_usage())? {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Launch(draft) => draft,
    };

    init_tracing();

    let services = AppServices::new(Catalog::builtin(), draft, Clock::system())?;
    tracing::info!(
        milestones = services.catalog().len(),
        narration = services.narration().is_available(),
        assets = %services.settings().assets_dir().display(),
        "starting timeline"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        file_picker: Arc::new(DialogFilePicker),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("History of Computer Graphics")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
