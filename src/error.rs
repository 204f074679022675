use std::fmt;
use thiserror::Error;

/// Which time notation a [`TimeFormatError`] was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeNotation {
    /// `YYYY-DDDThh:mm:ss.sss`
    Absolute,
    /// `hh:mm:ss.sss`
    Duration,
}

impl fmt::Display for TimeNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeNotation::Absolute => f.write_str("day-of-year timestamp"),
            TimeNotation::Duration => f.write_str("hh:mm:ss duration"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {notation} {input:?}: {reason}")]
pub struct TimeFormatError {
    pub notation: TimeNotation,
    pub input: String,
    pub reason: String,
}

impl TimeFormatError {
    pub(crate) fn new(notation: TimeNotation, input: &str, reason: impl Into<String>) -> Self {
        Self {
            notation,
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// A structurally invalid SeqJSON document.
///
/// `path` locates the offending field (`steps[1].args[0].value`); `seq_id` is
/// the document id when it was readable before the fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.describe())]
pub struct ValidationError {
    pub seq_id: Option<String>,
    pub path: String,
    pub message: String,
    #[source]
    pub source: Option<TimeFormatError>,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            seq_id: None,
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    pub fn time(path: impl Into<String>, err: TimeFormatError) -> Self {
        Self {
            seq_id: None,
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    pub fn with_seq_id(mut self, seq_id: &str) -> Self {
        self.seq_id = Some(seq_id.to_string());
        self
    }

    fn describe(&self) -> String {
        let location = if self.path.is_empty() {
            "<document>"
        } else {
            self.path.as_str()
        };
        match &self.seq_id {
            Some(id) => format!("sequence '{}': {}: {}", id, location, self.message),
            None => format!("{}: {}", location, self.message),
        }
    }
}
