/// A malformed route template, rejected when compiling the table.
#[derive(Debug, thiserror::Error)]
#[error("{msg}: pattern = {pattern:?}")]
pub struct CompileError {
    msg: &'static str,
    pattern: Box<str>,
}

impl CompileError {
    pub(crate) fn new(msg: &'static str, pattern: &str) -> Self {
        Self {
            msg,
            pattern: pattern.into(),
        }
    }

    /// The offending route template.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Failure of a reverse URI lookup or generation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReverseError {
    /// No reverse entry was registered under the requested handler or tag.
    #[error("no reverse entry for the requested target")]
    UnknownTarget,

    /// Required template parameters were absent from the supplied data.
    /// This is a caller bug, not a recoverable runtime condition.
    #[error("missing required parameters: {missing:?}")]
    MissingParams { missing: Vec<Box<str>> },
}
