use crate::span::Position;

/// A syntax profile could not be produced from its source.
///
/// Fatal to that profile only; callers are expected to fall back to
/// unstyled output rather than abort.
#[derive(Debug)]
pub struct LoadError {
    /// Identifier of the profile source (file path or label).
    pub source_ref: String,
    pub reason: String,
}

impl LoadError {
    #[must_use]
    pub fn new(source_ref: impl Into<String>, reason: impl Into<String>) -> Self {
        LoadError { source_ref: source_ref.into(), reason: reason.into() }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source_ref, self.reason)
    }
}

impl std::error::Error for LoadError {}

/// A bare word outgrew the scanner's accumulation buffer.
///
/// The pass that hit this is aborted and yields no spans; the input itself
/// is untouched, so the caller may re-render it unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowError {
    /// Coordinate of the character that did not fit.
    pub position: Position,
}

impl std::fmt::Display for OverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "word exceeds buffer capacity at {}", self.position)
    }
}

impl std::error::Error for OverflowError {}
