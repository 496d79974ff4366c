use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use crate::config::LoggerSettings;
use crate::utils::error::{AppError, Result};

/// File sink that reopens the configured path in append mode per write
/// batch, so external log rotation never holds a stale handle.
pub struct AppendingFileWriter {
    path: PathBuf,
}

impl AppendingFileWriter {
    fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for AppendingFileWriter {
    type Writer = BufWriter<File>;

    fn make_writer(&'a self) -> Self::Writer {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .unwrap_or_else(|e| panic!("Failed to open log file {}: {}", self.path.display(), e));

        BufWriter::new(file)
    }
}

pub struct StructuredLogger;

impl StructuredLogger {
    /// Installs the global JSON subscriber: all levels to stdout and the
    /// output file, errors additionally to the error file.
    pub fn init(settings: &LoggerSettings) -> Result<()> {
        let filter = match settings.level.to_lowercase().as_str() {
            "error" => "error",
            "warn" => "warn",
            "info" => "info",
            "debug" => "debug",
            "trace" => "trace",
            _ => "info",
        };

        let output_writer = AppendingFileWriter::new(Path::new(&settings.output_path))?;
        let error_writer =
            AppendingFileWriter::new(Path::new(&settings.error_path))?.with_max_level(Level::ERROR);

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stdout.and(output_writer).and(error_writer))
            .try_init()
            .map_err(|e| AppError::LoggingInit {
                message: e.to_string(),
            })?;

        Ok(())
    }
}
