use anyhow::Context;
use app::command::Command;
use app::main::App;
use clap::{Parser, ValueEnum};
use classifier::impl_fake::GenderClassifierFake;
use classifier::impl_vision::GenderClassifierVision;
use classifier::interface::GenderClassifier;
use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::{DeviceDisplayGui, DisplayWindow};
use device_display::interface::DeviceDisplay;
use library::logger::impl_tracing::LoggerTracing;
use library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use vision_model::impl_gemini::VisionModelGemini;

mod acquisition;
mod app;
mod classifier;
mod config;
mod device_camera;
mod device_display;
mod gender_result;
mod image_data;
mod library;
mod source_file;
mod vision_model;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DisplayKind {
    Console,
    Gui,
}

#[derive(Parser)]
#[command(name = "gender-lens")]
#[command(about = "Classify the perceived gender of the most prominent face in a photo")]
struct Cli {
    /// Where to show status and results
    #[arg(long, value_enum, default_value_t = DisplayKind::Console)]
    display: DisplayKind,

    /// Image to load on startup
    #[arg(long)]
    image: Option<PathBuf>,

    /// Gemini model to call (overrides GEMINI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Answer with random results instead of calling the vision model
    #[arg(long)]
    fake_classifier: bool,

    /// Behave as if camera access was denied
    #[arg(long)]
    no_camera: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = if verbose == 0 && std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::from_env();
    if let Some(model) = cli.model {
        config.gemini.model = model;
    }

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerTracing::new());
    logger.info(&format!("Starting with {:?}", config));

    let device_camera: Arc<DeviceCameraFake> = if cli.no_camera {
        Arc::new(DeviceCameraFake::unavailable(logger.clone()))
    } else {
        Arc::new(DeviceCameraFake::new(logger.clone()))
    };

    let (device_display, window): (Box<dyn DeviceDisplay>, Option<DisplayWindow>) =
        match cli.display {
            DisplayKind::Console => (Box::new(DeviceDisplayConsole::new()) as Box<dyn DeviceDisplay>, None),
            DisplayKind::Gui => {
                let display = DeviceDisplayGui::new();
                let window = display.window();
                (Box::new(display) as Box<dyn DeviceDisplay>, Some(window))
            }
        };

    let classifier: Arc<dyn GenderClassifier + Send + Sync> = if cli.fake_classifier {
        Arc::new(GenderClassifierFake::new(
            logger.clone(),
            Duration::from_millis(800),
        ))
    } else {
        let model = VisionModelGemini::new(&config.gemini, logger.clone())
            .context("failed to build HTTP client")?;
        if config.gemini.api_key.is_none() {
            logger.warn("No API_KEY configured; every classification will fail");
        }
        Arc::new(GenderClassifierVision::new(
            config.gemini.api_key.clone(),
            Arc::new(model),
            logger.clone(),
        ))
    };

    let app = App::new(config, logger, device_camera, device_display, classifier);
    let preload = cli.image.map(Command::Upload);

    println!("Type 'help' for commands.");

    match window {
        None => app.run(preload)?,
        Some(window) => {
            // The window owns the main thread, so the app loop moves to a worker.
            let app_thread = std::thread::spawn(move || app.run(preload));
            window
                .run()
                .map_err(|error| anyhow::anyhow!("display window failed: {}", error))?;

            if app_thread.is_finished() {
                app_thread
                    .join()
                    .map_err(|_| anyhow::anyhow!("app thread panicked"))??;
            }
        }
    }

    Ok(())
}
