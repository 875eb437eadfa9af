use thiserror::Error;

/// Failures the resolver and assembler can produce on their own. I/O and
/// container-level failures stay in `anyhow` at the command layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed selection syntax (unterminated bracket, non-integer term).
    #[error("invalid selection in `{reference}`: {reason}")]
    Parse { reference: String, reason: String },

    /// Page references are 1-based; 0 names nothing.
    #[error("page number 0 is invalid")]
    InvalidIndex,

    /// An index or insertion position falls outside the document.
    #[error("`{reference}` is out of range for {page_count} page(s)")]
    OutOfRange {
        reference: String,
        page_count: usize,
    },

    /// Too few arguments for an operation.
    #[error("{operation} needs at least {required} source files, got {given}")]
    Arity {
        operation: &'static str,
        required: usize,
        given: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn parse(reference: &str, reason: impl Into<String>) -> Self {
        Error::Parse {
            reference: reference.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(reference: impl Into<String>, page_count: usize) -> Self {
        Error::OutOfRange {
            reference: reference.into(),
            page_count,
        }
    }
}
