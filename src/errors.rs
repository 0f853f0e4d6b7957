use std::fmt;

/// An error that can occur when decoding a save
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Returns the byte offset in the save where the error occurred
    ///
    /// Offsets are relative to the start of the root buffer, no matter how
    /// deeply nested the region that produced the error was.
    pub fn offset(&self) -> usize {
        self.0.offset()
    }
}

/// Specific type of error
///
/// Every kind is fatal: decoding aborts at the first malformed byte and no
/// partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A read required more bytes than its region had left
    Truncated { offset: usize },

    /// A region's expected byte length disagrees with its actual length
    LengthMismatch {
        expected: usize,
        actual: usize,
        offset: usize,
    },

    /// A region held bytes beyond what its schema consumes
    TrailingData { remaining: usize, offset: usize },
}

impl ErrorKind {
    pub fn offset(&self) -> usize {
        match *self {
            ErrorKind::Truncated { offset } => offset,
            ErrorKind::LengthMismatch { offset, .. } => offset,
            ErrorKind::TrailingData { offset, .. } => offset,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::Truncated { offset } => {
                write!(f, "not enough data to read at offset {}", offset)
            }
            ErrorKind::LengthMismatch {
                expected,
                actual,
                offset,
            } => write!(
                f,
                "region length mismatch, expected {} bytes but found {} (offset: {})",
                expected, actual, offset
            ),
            ErrorKind::TrailingData { remaining, offset } => write!(
                f,
                "{} trailing bytes left unconsumed (offset: {})",
                remaining, offset
            ),
        }
    }
}
