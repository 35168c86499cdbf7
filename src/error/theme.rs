use std::fmt::{ Display, Formatter };

/// Failures of the persisted theme preference.
///
/// Payloads are rendered messages so the error stays `Clone` and can be
/// cached by a hook.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    StorageUnavailable(String),
    Read(String),
    Write(String),
    Io(String),
    Parse(String),
    Encode(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::StorageUnavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            ThemeError::Read(msg) => write!(f, "Storage Read Error: {}", msg),
            ThemeError::Write(msg) => write!(f, "Storage Write Error: {}", msg),
            ThemeError::Io(msg) => write!(f, "I/O Error: {}", msg),
            ThemeError::Parse(msg) => write!(f, "Malformed Theme Preference: {}", msg),
            ThemeError::Encode(msg) => write!(f, "Theme Encode Error: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<std::io::Error> for ThemeError {
    fn from(error: std::io::Error) -> Self {
        ThemeError::Io(error.to_string())
    }
}

// Decoding is the only place `?` meets serde_json; encoding maps explicitly.
impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        ThemeError::Parse(error.to_string())
    }
}
