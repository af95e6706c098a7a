//! `tracing` output routed to the browser console.
//!
//! Each formatted event is buffered by a [`ConsoleWriter`] and emitted as a
//! single console call when the writer is dropped. ERROR goes to
//! `console.error`, WARN to `console.warn`, everything else to `console.log`.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Console method an event is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Log,
    Warn,
    Error,
}

impl From<&Level> for ConsoleLevel {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleLevel::Error,
            Level::WARN => ConsoleLevel::Warn,
            _ => ConsoleLevel::Log,
        }
    }
}

/// Buffers one formatted event and forwards it to the console on drop.
pub struct ConsoleWriter {
    level: ConsoleLevel,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(level: ConsoleLevel) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    /// Drains the buffered text, without the trailing newline the
    /// formatter appends.
    pub fn take_message(&mut self) -> String {
        let bytes = std::mem::take(&mut self.buf);
        let text = String::from_utf8_lossy(&bytes);
        text.trim_end_matches(['\n', '\r']).to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let message = self.take_message();
        if !message.is_empty() {
            emit(self.level, &message);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: ConsoleLevel, message: &str) {
    let value = wasm_bindgen::JsValue::from_str(message);
    match level {
        ConsoleLevel::Error => web_sys::console::error_1(&value),
        ConsoleLevel::Warn => web_sys::console::warn_1(&value),
        ConsoleLevel::Log => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: ConsoleLevel, message: &str) {
    eprintln!("{message}");
}

/// [`MakeWriter`] producing a [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::from(meta.level()))
    }
}

/// Installs the global subscriber. Calling it more than once is harmless.
pub fn init_logging(max_level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(MakeConsoleWriter)
        .without_time()
        .with_target(true)
        .with_level(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConsoleLevel::from(&Level::ERROR), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::from(&Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::from(&Level::INFO), ConsoleLevel::Log);
        assert_eq!(ConsoleLevel::from(&Level::TRACE), ConsoleLevel::Log);
    }

    #[test]
    fn writer_joins_partial_writes_into_one_message() {
        let mut w = ConsoleWriter::new(ConsoleLevel::Log);
        write!(w, "shader ").unwrap();
        write!(w, "compilation error").unwrap();
        writeln!(w).unwrap();
        assert_eq!(w.take_message(), "shader compilation error");
        assert_eq!(w.take_message(), "");
    }

    #[test]
    fn writer_keeps_interior_newlines() {
        let mut w = ConsoleWriter::new(ConsoleLevel::Error);
        w.write_all(b"1: void main(\n\nERROR: 0:1\r\n").unwrap();
        assert_eq!(w.take_message(), "1: void main(\n\nERROR: 0:1");
    }

    #[test]
    fn writer_replaces_invalid_utf8() {
        let mut w = ConsoleWriter::new(ConsoleLevel::Warn);
        w.write_all(&[0x66, 0xff, 0x6f]).unwrap();
        assert_eq!(w.take_message(), "f\u{fffd}o");
    }
}
