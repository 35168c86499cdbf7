use serde::{ Deserialize, Serialize };
use serde_json::Value;

/// Where the current theme value came from.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeSource {
    #[default]
    Default,
    UserPreference,
    /// A tag written by something else; kept as-is.
    Other(String),
}

impl ThemeSource {
    pub fn as_str(&self) -> &str {
        match self {
            ThemeSource::Default => "default",
            ThemeSource::UserPreference => "user-preference",
            ThemeSource::Other(tag) => tag,
        }
    }
}

impl From<String> for ThemeSource {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "default" => ThemeSource::Default,
            "user-preference" => ThemeSource::UserPreference,
            _ => ThemeSource::Other(tag),
        }
    }
}

impl From<ThemeSource> for String {
    fn from(source: ThemeSource) -> Self {
        source.as_str().to_string()
    }
}

/// Decoding goes through `TryFrom<Value>`: any JSON document except `null`
/// is accepted, with fields read the loose way a browser script would.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct ThemeState {
    pub is_dark: bool,
    pub source: ThemeSource,
}

impl ThemeState {
    /// Flipped theme, stamped as an explicit user choice.
    pub fn toggled(&self) -> Self {
        Self {
            is_dark: !self.is_dark,
            source: ThemeSource::UserPreference,
        }
    }
}

impl TryFrom<Value> for ThemeState {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let field = |name: &str| value.get(name).filter(|v| !v.is_null());

        match &value {
            Value::Null => Err("stored theme is null".to_string()),
            _ =>
                Ok(Self {
                    is_dark: field("isDark").is_some_and(truthy),
                    source: match field("source") {
                        None => ThemeSource::Default,
                        Some(Value::String(tag)) => ThemeSource::from(tag.clone()),
                        Some(other) => ThemeSource::Other(other.to_string()),
                    },
                }),
        }
    }
}

/// JavaScript truthiness of a stored JSON value.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The only projection consumers read.
pub fn select(state: &ThemeState) -> bool {
    state.is_dark
}
