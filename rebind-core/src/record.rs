use std::{
    borrow::Cow,
    cell::RefCell,
    fmt,
    io::{self, Write},
    rc::Rc,
};

use crate::Value;

/// What a single adapted call observed: who handled it, the arguments it
/// received in native order, and the result it produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CallRecord {
    pub origin: String,
    pub arguments: Vec<Value>,
    pub result: Value,
}

impl fmt::Display for CallRecord {
    /// Formats the record as
    /// `<origin> called with arguments: <a>, <b>, <c> result is : <r>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} called with arguments: ", self.origin)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, " result is : {}", self.result)
    }
}

/// A destination for [`CallRecord`]s.
pub trait Sink {
    fn emit(&self, record: &CallRecord);
}

/// Writes each record to standard output as one line.
///
/// A failed write, such as a closed pipe, is logged and otherwise ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Sink for Stdout {
    fn emit(&self, record: &CallRecord) {
        if let Err(error) = write_line(io::stdout().lock(), record) {
            tracing::warn!(origin = %record.origin, %error, "failed to write call record");
        }
    }
}

/// Writes `line` followed by a newline and flushes `out`.
///
/// # Errors
///
/// Returns the underlying I/O error if writing or flushing fails.
pub fn write_line(mut out: impl Write, line: impl fmt::Display) -> io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}

/// Drops every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Sink for Discard {
    fn emit(&self, _record: &CallRecord) {}
}

/// Keeps records in memory, in the order they were emitted.
///
/// Clones share the same underlying list.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    records: Rc<RefCell<Vec<CallRecord>>>,
}

impl Journal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every record emitted so far.
    #[must_use]
    pub fn records(&self) -> Vec<CallRecord> {
        self.records.borrow().clone()
    }

    /// Returns the records formatted as output lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.records.borrow().iter().map(ToString::to_string).collect()
    }

    /// Removes and returns every record emitted so far.
    pub fn take(&self) -> Vec<CallRecord> {
        self.records.take()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl Sink for Journal {
    fn emit(&self, record: &CallRecord) {
        self.records.borrow_mut().push(record.clone());
    }
}

impl<S: Sink + ?Sized> Sink for Rc<S> {
    fn emit(&self, record: &CallRecord) {
        (**self).emit(record);
    }
}

/// An origin label paired with the sink its records go to.
///
/// Every adapter owns one. Cloning is cheap and shares the sink.
#[derive(Clone)]
pub struct Recorder {
    origin: Cow<'static, str>,
    sink: Rc<dyn Sink>,
}

impl Recorder {
    pub fn new(origin: impl Into<Cow<'static, str>>, sink: Rc<dyn Sink>) -> Self {
        Self {
            origin: origin.into(),
            sink,
        }
    }

    /// Creates a recorder whose records are dropped.
    pub fn silent(origin: impl Into<Cow<'static, str>>) -> Self {
        Self::new(origin, Rc::new(Discard))
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Builds a record for one call and sends it to the sink.
    pub fn emit(&self, arguments: Vec<Value>, result: Value) {
        let record = CallRecord {
            origin: self.origin.to_string(),
            arguments,
            result,
        };
        tracing::trace!(origin = %record.origin, result = %record.result, "call recorded");
        self.sink.emit(&record);
    }
}

impl fmt::Debug for Recorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recorder")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
