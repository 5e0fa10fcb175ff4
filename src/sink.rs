use std::cell::{Cell, RefCell};
use std::fmt;
use std::io::{self, Write};

/// Error returned when a sink cannot accept a line.
///
/// # Examples
///
/// ```
/// use page_decor::{SinkError, SinkErrorKind};
///
/// let error = SinkError::new(SinkErrorKind::Closed);
/// assert_eq!(error.kind(), SinkErrorKind::Closed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkError {
    kind: SinkErrorKind,
    message: Option<String>,
}

impl SinkError {
    /// Creates a new sink error with the specified kind.
    pub fn new(kind: SinkErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Creates a new sink error with a custom message.
    pub fn with_message(kind: SinkErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> SinkErrorKind {
        self.kind
    }

    /// Returns the error message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = &self.message {
            write!(f, "sink error ({}): {}", self.kind, msg)
        } else {
            write!(f, "sink error ({})", self.kind)
        }
    }
}

impl std::error::Error for SinkError {}

impl From<io::Error> for SinkError {
    fn from(e: io::Error) -> Self {
        SinkError::with_message(SinkErrorKind::Io, e.to_string())
    }
}

/// Kind of sink error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkErrorKind {
    /// Writing to the underlying stream failed.
    Io,
    /// The sink has been closed and no longer accepts lines.
    Closed,
}

impl fmt::Display for SinkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "I/O error"),
            Self::Closed => write!(f, "sink closed"),
        }
    }
}

/// Line-oriented output target for rendered pages.
///
/// Pages never format directly to stdout; they hand complete lines to a
/// `Sink`. The line text excludes the trailing newline.
pub trait Sink {
    /// Writes one line to the sink.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the line could not be written.
    fn write_line(&self, line: &str) -> Result<(), SinkError>;
}

impl<S: Sink + ?Sized> Sink for &S {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        (**self).write_line(line)
    }
}

/// Sink that writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    /// Creates a stdout sink.
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        Ok(())
    }
}

/// Sink that collects lines into an in-memory vector.
///
/// Uses interior mutability so pages can write through a shared reference.
///
/// # Examples
///
/// ```
/// use page_decor::{Sink, VecSink};
///
/// let sink = VecSink::new();
/// sink.write_line("hello").unwrap();
/// assert_eq!(sink.into_vec(), vec!["hello"]);
/// ```
#[derive(Debug, Default)]
pub struct VecSink {
    lines: RefCell<Vec<String>>,
    closed: Cell<bool>,
}

impl VecSink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of lines written so far.
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Provides borrowed access to the lines via callback.
    pub fn with_lines<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[String]) -> R,
    {
        f(&self.lines.borrow())
    }

    /// Returns a copy of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Removes and returns every line written so far.
    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }

    /// Stops accepting lines; later writes fail with [`SinkErrorKind::Closed`].
    pub fn close(&self) {
        self.closed.set(true);
    }

    /// Consumes the sink and returns the collected lines.
    pub fn into_vec(self) -> Vec<String> {
        self.lines.into_inner()
    }
}

impl Sink for VecSink {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        if self.closed.get() {
            return Err(SinkError::new(SinkErrorKind::Closed));
        }
        self.lines.borrow_mut().push(line.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_error_with_message() {
        let error = SinkError::with_message(SinkErrorKind::Io, "broken pipe");
        assert_eq!(error.kind(), SinkErrorKind::Io);
        assert_eq!(error.message(), Some("broken pipe"));
        assert_eq!(error.to_string(), "sink error (I/O error): broken pipe");
    }

    #[test]
    fn sink_error_kinds_display() {
        assert_eq!(format!("{}", SinkErrorKind::Io), "I/O error");
        assert_eq!(format!("{}", SinkErrorKind::Closed), "sink closed");
        assert_eq!(
            SinkError::new(SinkErrorKind::Closed).to_string(),
            "sink error (sink closed)"
        );
    }

    #[test]
    fn io_error_maps_to_io_kind() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err = SinkError::from(io_err);
        assert_eq!(err.kind(), SinkErrorKind::Io);
        assert_eq!(err.message(), Some("pipe closed"));
    }

    #[test]
    fn vec_sink_keeps_order() {
        let sink = VecSink::new();
        for i in 0..3 {
            sink.write_line(&format!("line-{}", i)).unwrap();
        }

        assert_eq!(sink.len(), 3);
        assert_eq!(sink.into_vec(), vec!["line-0", "line-1", "line-2"]);
    }

    #[test]
    fn vec_sink_take_drains() {
        let sink = VecSink::new();
        sink.write_line("a").unwrap();

        assert_eq!(sink.take(), vec!["a"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn closed_vec_sink_rejects_without_side_effects() {
        let sink = VecSink::new();
        sink.write_line("kept").unwrap();
        sink.close();

        let err = sink.write_line("dropped").unwrap_err();
        assert_eq!(err.kind(), SinkErrorKind::Closed);
        sink.with_lines(|lines| assert_eq!(lines, ["kept"]));
    }

    #[test]
    fn sink_by_reference() {
        let sink = VecSink::new();
        let by_ref = &sink;
        by_ref.write_line("via ref").unwrap();
        assert_eq!(sink.lines(), vec!["via ref"]);
    }
}
