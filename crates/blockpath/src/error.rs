use std::fmt;

/// Errors raised while building examiner configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Entity height must be finite and strictly positive.
    InvalidEntityHeight(f32),
    /// A door mode name that [`DoorPathMode`](crate::DoorPathMode) does not know.
    UnknownDoorMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEntityHeight(h) => {
                write!(f, "entity height must be finite and positive, got {h}")
            }
            Self::UnknownDoorMode(s) => write!(
                f,
                "unknown door mode \u{201c}{s}\u{201d} (expected open, ignore-closed or ignore-open)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
