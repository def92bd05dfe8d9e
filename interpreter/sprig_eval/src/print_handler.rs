//! Print handler for configurable `out` destinations.
//!
//! Output from the `out` builtin goes to stdout by default, to a buffer
//! in tests, or nowhere at all. Enum dispatch keeps this hot path free
//! of trait-object indirection; the buffer variant is `RefCell`-backed
//! because evaluation is single-threaded.

use std::cell::RefCell;
use std::rc::Rc;

/// Destination for `out` output.
pub enum PrintHandler {
    /// Write lines to stdout.
    Stdout,
    /// Capture lines in a buffer for later inspection.
    Buffer(RefCell<String>),
    /// Discard everything.
    Silent,
}

impl PrintHandler {
    /// Shared stdout handler.
    pub fn stdout() -> Rc<Self> {
        Rc::new(PrintHandler::Stdout)
    }

    /// Shared capturing handler.
    pub fn buffer() -> Rc<Self> {
        Rc::new(PrintHandler::Buffer(RefCell::new(String::new())))
    }

    /// Shared discarding handler.
    pub fn silent() -> Rc<Self> {
        Rc::new(PrintHandler::Silent)
    }

    /// Emit one line, with trailing newline.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Buffer(buffer) => {
                let mut buf = buffer.borrow_mut();
                buf.push_str(line);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far. Empty for handlers that don't capture.
    pub fn captured(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.borrow().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Drop captured output. No-op for handlers that don't capture.
    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.borrow_mut().clear();
        }
    }
}
