use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Directory, relative to the working directory, that holds the MCP log file
pub const LOG_DIR: &str = ".document-mcp";

/// Default MCP log file name, overridden by `DOCUMENT_MCP_LOG_FILE`
pub const DEFAULT_LOG_FILE: &str = "mcp.log";

/// A thread-safe writer that flushes and syncs the MCP log file after every write.
///
/// In MCP mode stdout carries the protocol, so logs go to a file that must be
/// readable while the server is still running.
///
/// ```no_run
/// use std::io::Write;
/// use std::sync::{Arc, Mutex};
/// use std::fs::File;
/// use document_mcp_cli::logging::FileWriterGuard;
///
/// let file = File::create("log.txt").unwrap();
/// let mut guard = FileWriterGuard::new(Arc::new(Mutex::new(file)));
/// guard.write_all(b"Log message\n").unwrap();
/// ```
pub struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl FileWriterGuard {
    /// Creates a new `FileWriterGuard` wrapping the given file.
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }

    fn lock(&self) -> std::io::Result<std::sync::MutexGuard<'_, File>> {
        self.file
            .lock()
            .map_err(|_| std::io::Error::other("log file mutex was poisoned"))
    }
}

impl Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut file = self.lock()?;
        let written = file.write(buf)?;
        file.flush()?;
        file.sync_all()?;
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut file = self.lock()?;
        file.flush()?;
        file.sync_all()
    }
}

/// Pick the log level from the command-line flags, falling back to the configured level
pub fn select_level(quiet: bool, debug: bool, verbose: bool, configured: Level) -> Level {
    if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        configured
    }
}

/// Path of the MCP log file
pub fn mcp_log_path() -> PathBuf {
    let file_name =
        std::env::var("DOCUMENT_MCP_LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    PathBuf::from(LOG_DIR).join(file_name)
}

/// `RUST_LOG` directives win over the selected level
fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy()
}

/// Install the global tracing subscriber.
///
/// In MCP mode logs go to [`mcp_log_path`] and never to stdout. If the file
/// cannot be opened, stderr is used instead.
pub fn init_tracing(level: Level, mcp_mode: bool) {
    if mcp_mode {
        let log_file = mcp_log_path();
        if let Some(dir) = log_file.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                eprintln!("Failed to create log directory {}: {}", dir.display(), e);
            }
        }

        match OpenOptions::new().create(true).append(true).open(&log_file) {
            Ok(file) => {
                let shared = Arc::new(Mutex::new(file));
                tracing_subscriber::fmt()
                    .with_writer(move || FileWriterGuard::new(shared.clone()))
                    .with_env_filter(env_filter(level))
                    .with_ansi(false)
                    .init();
            }
            Err(e) => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(env_filter(level))
                    .init();
                tracing::warn!(
                    "Failed to open log file {}, using stderr: {}",
                    log_file.display(),
                    e
                );
            }
        }
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter(level))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Read;

    #[test]
    fn test_flags_override_configured_level() {
        assert_eq!(select_level(true, true, true, Level::INFO), Level::ERROR);
        assert_eq!(select_level(false, true, false, Level::ERROR), Level::DEBUG);
        assert_eq!(select_level(false, false, true, Level::ERROR), Level::TRACE);
        assert_eq!(select_level(false, false, false, Level::WARN), Level::WARN);
    }

    #[test]
    #[serial]
    fn test_mcp_log_path() {
        std::env::remove_var("DOCUMENT_MCP_LOG_FILE");
        assert_eq!(mcp_log_path(), PathBuf::from(".document-mcp/mcp.log"));

        std::env::set_var("DOCUMENT_MCP_LOG_FILE", "session.log");
        assert_eq!(mcp_log_path(), PathBuf::from(".document-mcp/session.log"));
        std::env::remove_var("DOCUMENT_MCP_LOG_FILE");
    }

    #[test]
    fn test_file_writer_guard_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mcp.log");
        let file = File::create(&path).unwrap();
        let mut guard = FileWriterGuard::new(Arc::new(Mutex::new(file)));

        guard.write_all(b"server started\n").unwrap();

        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "server started\n");
    }
}
