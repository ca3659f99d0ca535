use clap::Parser;
use ocr_translate::config::Config;
use ocr_translate::engines::EngineRegistry;
use ocr_translate::error::AppError;
use ocr_translate::flow::{self, SystemBrowser};
use ocr_translate::lang::LanguageTable;
use ocr_translate::ui::ConsoleFrontend;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "ocr-translate")]
#[command(about = "OCR an image and open DeepL with the recognized text")]
#[command(version)]
pub struct Args {
    /// Path to the language table file
    #[arg(long, env = "OCR_LANG_FILE", default_value = "lang.json")]
    pub lang_file: PathBuf,

    /// OCR backend to use
    #[arg(long, env = "OCR_ENGINE", default_value = "tesseract")]
    pub engine: String,

    /// Path to tessdata directory (uses TESSDATA_PREFIX env var if not set)
    #[arg(long, env = "TESSDATA_PREFIX")]
    pub tessdata_path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            lang_file: args.lang_file.clone(),
            engine: args.engine.clone(),
            tessdata_path: args.tessdata_path.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from(&args);

    tracing::info!("Starting ocr-translate v{}", env!("CARGO_PKG_VERSION"));

    let table = LanguageTable::load(&config.lang_file)?;

    // A missing backend is the one failure shown to the user directly:
    // notice on stderr, exit 1.
    let engine = match EngineRegistry::new(&config).and_then(|r| r.select(&config.engine)) {
        Ok(engine) => engine,
        Err(e @ (AppError::BackendUnavailable(_) | AppError::InitializationError(_))) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let mut frontend = ConsoleFrontend::stdio();
    flow::run(&table, engine.as_ref(), &mut frontend, &SystemBrowser)?;

    Ok(())
}
