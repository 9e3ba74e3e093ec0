use log::warn;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared text sink of a session.
///
/// Command output and failure reports are written here; clones share the
/// same writer.
#[derive(Clone)]
pub struct OutputSink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl OutputSink {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        OutputSink {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    pub fn writer(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `text`, adding a trailing newline when it lacks one.
    ///
    /// Write errors are logged, never returned.
    pub fn append(&self, text: &str) {
        let mut writer = self.writer();
        let result = if text.ends_with('\n') {
            writer.write_all(text.as_bytes())
        } else {
            writeln!(writer, "{}", text)
        };

        if let Err(error) = result.and_then(|_| writer.flush()) {
            warn!("Failed to write to output sink: {}", error);
        }
    }
}

impl std::fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputSink").finish_non_exhaustive()
    }
}
