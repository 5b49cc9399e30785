use std::fmt;

/// Why a single coefficient token could not be read.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralError {
    Empty,
    InvalidReal(String),
    OutOfRange(String),
    /// Both halves (or neither) of a split token carry the imaginary marker.
    AmbiguousMarker(String),
    InvalidPart(String),
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LiteralError::*;
        match self {
            Empty => write!(f, "empty literal"),
            InvalidReal(s) => write!(f, "invalid real literal '{}'", s),
            OutOfRange(s) => write!(f, "literal '{}' is out of range", s),
            AmbiguousMarker(s) => write!(f, "exactly one part of '{}' must carry the imaginary marker", s),
            InvalidPart(s) => write!(f, "invalid complex literal '{}'", s),
        }
    }
}

impl std::error::Error for LiteralError {}

/// Input-level failures. Every variant is reported as `WRONG`.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    Incomplete { found: usize },
    Unparsable { position: usize, token: String, source: LiteralError },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Incomplete { found } => {
                write!(f, "expected 3 coefficients, found {}", found)
            }
            InputError::Unparsable { position, token, source } => {
                write!(f, "coefficient #{} '{}': {}", position + 1, token, source)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Unparsable { source, .. } => Some(source),
            InputError::Incomplete { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn literal_error_display() {
        let err = LiteralError::InvalidReal("abc".into());
        assert_eq!(format!("{}", err), "invalid real literal 'abc'");
    }
    #[test] fn incomplete_display() {
        let err = InputError::Incomplete { found: 2 };
        assert_eq!(format!("{}", err), "expected 3 coefficients, found 2");
    }
    #[test] fn unparsable_exposes_source() {
        use std::error::Error;
        let err = InputError::Unparsable {
            position: 1,
            token: "1+2i+3i".into(),
            source: LiteralError::AmbiguousMarker("1+2i+3i".into()),
        };
        assert!(format!("{}", err).starts_with("coefficient #2 '1+2i+3i'"));
        assert!(err.source().is_some());
    }
}
