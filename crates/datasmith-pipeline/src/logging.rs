use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

use crate::errors::PipelineError;

/// Install a JSON file subscriber for one run, writing under
/// `<dir>/logs/`. Returns the log file path.
///
/// Installing a second global subscriber in the same process fails; run
/// this once per process, before the first stage.
pub fn init_run_logging(dir: &Path) -> Result<PathBuf, PipelineError> {
    let logs_dir = dir.join("logs");
    std::fs::create_dir_all(&logs_dir)?;
    let path = logs_dir.join(format!(
        "generation_{}.log",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ));

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let file = Arc::new(Mutex::new(file));

    let make_writer = BoxMakeWriter::new(move || SharedWriter {
        file: Arc::clone(&file),
    });

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(make_writer);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|err| PipelineError::Logging(err.to_string()))?;

    Ok(path)
}

struct SharedWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "failed to lock log file"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "failed to lock log file"))?;
        file.flush()
    }
}
