//! Pagination delegated to an external program.

use std::ffi::OsString;
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::Document;

use super::{PageMap, PaginationOracle};

/// Default time the external program gets to answer.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs a program that lays the document out and reports page numbers.
///
/// The program receives the configured arguments followed by the document
/// path. It must print JSON on stdout, either an object mapping paragraph
/// index to page (`{"0": 1, "5": 2}`) or an array indexed by paragraph
/// (`[1, 1, null, 2]`, `null` for paragraphs it could not place).
#[derive(Debug, Clone)]
pub struct CommandPagination {
    program: OsString,
    args: Vec<OsString>,
    timeout: Duration,
}

impl CommandPagination {
    /// Create an oracle for `program`.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Append an argument passed before the document path.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    fn timed_out(&self) -> Error {
        log::warn!("{} did not finish within {:?}", self.program_name(), self.timeout);
        Error::PaginationTimeout(self.timeout)
    }
}

/// Interval between exit checks while waiting for the child.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Owns the child process; kills and reaps it unless it already exited.
struct ChildGuard(Child);

impl ChildGuard {
    /// Wait for the child to exit, giving up at `deadline`.
    fn wait_until(&mut self, deadline: Instant) -> std::io::Result<Option<ExitStatus>> {
        loop {
            if let Some(status) = self.0.try_wait()? {
                return Ok(Some(status));
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(None);
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Ok(None) = self.0.try_wait() {
            let _ = self.0.kill();
        }
        let _ = self.0.wait();
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> Receiver<std::io::Result<Vec<u8>>> {
    let (tx, rx) = bounded(1);
    thread::spawn(move || {
        let mut buf = Vec::new();
        let result = pipe.read_to_end(&mut buf).map(|_| buf);
        let _ = tx.send(result);
    });
    rx
}

impl PaginationOracle for CommandPagination {
    fn resolve(&self, document: &Document) -> Result<PageMap> {
        let path = document.metadata.source.as_ref().ok_or_else(|| {
            Error::PaginationMisconfigured(
                "document was not loaded from a file; the pagination command needs a path".into(),
            )
        })?;

        log::debug!("Running {:?} {:?} {}", self.program, self.args, path.display());
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Error::PaginationMisconfigured(format!("cannot start {}: {}", self.program_name(), e))
            })?;
        // one budget for producing output and exiting
        let deadline = Instant::now() + self.timeout;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let mut guard = ChildGuard(child);

        let (Some(stdout), Some(stderr)) = (stdout, stderr) else {
            return Err(Error::PaginationFailed("child process has no output pipes".into()));
        };
        let stdout = drain(stdout);
        let stderr = drain(stderr);

        let output = match stdout.recv_deadline(deadline) {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(Error::PaginationFailed(format!("cannot read output: {}", e)));
            }
            Err(RecvTimeoutError::Timeout) => return Err(self.timed_out()),
            Err(RecvTimeoutError::Disconnected) => {
                return Err(Error::PaginationFailed("output reader stopped".into()));
            }
        };

        let status = match guard.wait_until(deadline) {
            Ok(Some(status)) => status,
            Ok(None) => return Err(self.timed_out()),
            Err(e) => return Err(Error::PaginationFailed(format!("cannot wait for child: {}", e))),
        };
        if !status.success() {
            let message = stderr
                .recv_timeout(Duration::from_millis(200))
                .ok()
                .and_then(|r| r.ok())
                .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
                .unwrap_or_default();
            return Err(Error::PaginationFailed(format!(
                "{} exited with {}: {}",
                self.program_name(),
                status,
                message
            )));
        }

        let map = parse_page_output(&output)?;
        log::info!(
            "{} placed {} of {} paragraphs",
            self.program_name(),
            map.len(),
            document.paragraph_count()
        );
        Ok(map)
    }

    fn name(&self) -> &str {
        "external command"
    }
}

fn page_value(value: &Value) -> Result<Option<u32>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .filter(|&n| n >= 1)
            .map(Some)
            .ok_or_else(|| Error::PaginationFailed(format!("invalid page number {}", n))),
        other => Err(Error::PaginationFailed(format!(
            "page number must be an integer, got {}",
            other
        ))),
    }
}

/// Parse the JSON page mapping printed by a pagination command.
pub(crate) fn parse_page_output(output: &[u8]) -> Result<PageMap> {
    let value: Value = serde_json::from_slice(output)
        .map_err(|e| Error::PaginationFailed(format!("output is not JSON: {}", e)))?;

    let mut map = PageMap::new();
    match value {
        Value::Object(entries) => {
            for (key, value) in &entries {
                let index: usize = key.trim().parse().map_err(|_| {
                    Error::PaginationFailed(format!("invalid paragraph index {:?}", key))
                })?;
                if let Some(page) = page_value(value)? {
                    map.insert(index, page);
                }
            }
        }
        Value::Array(pages) => {
            for (index, value) in pages.iter().enumerate() {
                if let Some(page) = page_value(value)? {
                    map.insert(index, page);
                }
            }
        }
        _ => {
            return Err(Error::PaginationFailed(
                "output must be a JSON object or array".into(),
            ))
        }
    }
    Ok(map)
}
