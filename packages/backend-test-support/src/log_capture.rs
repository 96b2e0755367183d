//! In-memory JSON log capture for asserting on emitted events.
//!
//! Installs a **global** subscriber, so a binary that uses it must not also
//! call [`crate::logging::init`], and tests sharing the capture should run
//! under `#[serial]`.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;

/// Writer that appends JSON lines to a shared buffer.
#[derive(Clone)]
struct BufWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Handle onto the captured log lines.
#[derive(Clone)]
pub struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

static CAPTURE: OnceCell<CapturedLogs> = OnceCell::new();

/// Install the capturing subscriber (once per process) and return its handle.
pub fn capture() -> CapturedLogs {
    CAPTURE
        .get_or_init(|| {
            let buf = Arc::new(Mutex::new(Vec::new()));
            let make_writer = {
                let buf = buf.clone();
                move || BufWriter(buf.clone())
            };

            let subscriber = Registry::default().with(
                fmt::Layer::default()
                    .json()
                    .with_span_list(true)
                    .with_current_span(true)
                    .with_ansi(false)
                    .with_writer(make_writer),
            );
            tracing::subscriber::set_global_default(subscriber)
                .expect("global subscriber already installed");

            CapturedLogs { buf }
        })
        .clone()
}

impl CapturedLogs {
    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.buf.lock().expect("log buffer poisoned").clear();
    }

    /// All captured events parsed as JSON; non-JSON lines are skipped.
    pub fn events(&self) -> Vec<Value> {
        let bytes = self.buf.lock().expect("log buffer poisoned").clone();
        let data = String::from_utf8(bytes).expect("utf8 log output");
        data.lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| serde_json::from_str::<Value>(line).ok())
            .collect()
    }

    /// Events at `level` (e.g. `"ERROR"`) whose message equals `message`.
    pub fn find(&self, level: &str, message: &str) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter(|v| v.get("level").and_then(Value::as_str) == Some(level))
            .filter(|v| {
                v.get("fields")
                    .and_then(|f| f.get("message"))
                    .and_then(Value::as_str)
                    == Some(message)
            })
            .collect()
    }
}
