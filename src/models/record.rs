use std::fmt;

/// A single key/value pair read from a data file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Record {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Record {
    pub fn new(key: Option<String>, value: Option<String>) -> Self {
        Self { key, value }
    }

    /// Record with both fields present
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: Some(key.into()), value: Some(value.into()) }
    }

    /// Key text for output, absent rendered as ""
    pub fn key_text(&self) -> &str {
        self.key.as_deref().unwrap_or_default()
    }

    /// Value text for output, absent rendered as ""
    pub fn value_text(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    /// Case-insensitive prefix match on the key. A record without a key never matches.
    pub fn key_starts_with(&self, prefix: &str) -> bool {
        match self.key.as_deref() {
            Some(key) => starts_with_ignore_case(key, prefix),
            None => false,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key:{} Value:{}", self.key_text(), self.value_text())
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text_chars = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|expected| text_chars.next() == Some(expected))
}
