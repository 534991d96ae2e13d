//! Common test utilities for integration tests
//!
//! Scratch build roots and in-memory capture of log output.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// Create a build root holding a `.env` with the given contents.
#[allow(dead_code)]
pub fn build_root_with_env(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_env(dir.path(), contents);
    dir
}

#[allow(dead_code)]
pub fn write_env(root: &Path, contents: &str) {
    fs::write(root.join(".env"), contents).expect("Failed to write .env");
}

/// Shared buffer that collects formatted log lines.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    #[allow(dead_code)]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a thread-local subscriber and return its result with
/// everything it logged at info level and above.
#[allow(dead_code)]
pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture.contents())
}
