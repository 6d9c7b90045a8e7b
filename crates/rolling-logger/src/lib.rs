//! Rolling Logger
//!
//! `tracing` subscriber for the browser. tracing-subscriber formats each
//! record into one line and the line goes to the devtools console method
//! matching its level. Off the browser the lines go to stderr.

use std::io::{self, Write};

use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer;

pub use tracing_subscriber::filter::LevelFilter;

/// Destination of one finished line
type Sink = fn(Level, &str);

/// Local wall-clock timestamps. `SystemTime` is not available in wasm32.
struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Hands the fmt layer one line buffer per record
#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    sink: Sink,
}

impl ConsoleMakeWriter {
    pub fn new() -> Self {
        Self { sink: write_console }
    }

    #[cfg(test)]
    fn with_sink(sink: Sink) -> Self {
        Self { sink }
    }

    fn line(&self, level: Level) -> LineWriter {
        LineWriter {
            level,
            buf: Vec::new(),
            sink: self.sink,
        }
    }
}

impl Default for ConsoleMakeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.line(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.line(*meta.level())
    }
}

/// Collects one formatted record and emits it on flush or drop
pub struct LineWriter {
    level: Level,
    buf: Vec<u8>,
    sink: Sink,
}

impl Write for LineWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buf);
        (self.sink)(self.level, line.trim_end());
        self.buf.clear();
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

fn console_layer<S>(make_writer: ConsoleMakeWriter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(ClockTime)
        .with_target(true)
        .with_writer(make_writer)
}

/// Install the global subscriber. `log` records are bridged into it.
/// Fails if a global subscriber was already set.
pub fn init(level: LevelFilter) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(level)
        .with(console_layer(ConsoleMakeWriter::new()))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
    }

    fn capture(level: Level, line: &str) {
        LINES.with(|lines| lines.borrow_mut().push((level, line.to_string())));
    }

    fn captured() -> Vec<(Level, String)> {
        LINES.with(|lines| lines.take())
    }

    fn run_with_level(level: LevelFilter, f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry()
            .with(level)
            .with(console_layer(ConsoleMakeWriter::with_sink(capture)));
        tracing::subscriber::with_default(subscriber, f);
    }

    #[test]
    fn test_each_event_becomes_one_line() {
        run_with_level(LevelFilter::DEBUG, || {
            tracing::info!(target: "todo", "moved {} -> {}", 1, 3);
            tracing::debug!(target: "todo", "focus -> {:?}", Some(2));
        });
        let lines = captured();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Level::INFO);
        assert!(lines[0].1.ends_with("INFO todo: moved 1 -> 3"));
        assert!(!lines[0].1.contains('\n'));
        assert_eq!(lines[1].0, Level::DEBUG);
    }

    #[test]
    fn test_level_filtering() {
        run_with_level(LevelFilter::WARN, || {
            tracing::info!("hidden");
            tracing::warn!("shown");
            tracing::error!("also shown");
        });
        let levels: Vec<Level> = captured().into_iter().map(|(level, _)| level).collect();
        assert_eq!(levels, vec![Level::WARN, Level::ERROR]);
    }

    #[test]
    fn test_empty_writer_emits_nothing() {
        let writer = ConsoleMakeWriter::with_sink(capture);
        drop(writer.make_writer());
        assert!(captured().is_empty());
    }

    #[test]
    fn test_writer_joins_partial_writes() {
        let writer = ConsoleMakeWriter::with_sink(capture);
        let mut line = writer.line(Level::WARN);
        line.write_all(b"row 3: ").unwrap();
        line.write_all(b"focus failed\n").unwrap();
        drop(line);
        assert_eq!(captured(), vec![(Level::WARN, "row 3: focus failed".to_string())]);
    }
}
