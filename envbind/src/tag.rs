//! Parsing of `#[env("KEY,option,...")]` tag strings.

/// Option enabling the `{KEY}_FILE` fallback.
pub const FILE_OPTION: &str = "file";

/// Parsed form of a field tag: the environment key plus its options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTag {
    key: String,
    options: Vec<String>,
}

impl FieldTag {
    /// Environment variable name. Empty when the field carries no key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Options following the key, in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }

    /// Exact, case-sensitive option membership.
    pub fn has(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Whether `{KEY}_FILE` may be consulted when `KEY` is unset.
    pub fn file_fallback(&self) -> bool {
        self.has(FILE_OPTION)
    }

    /// A field without a key is never written.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// Parse a raw tag string.
///
/// The first comma-separated token is the key, the remaining tokens are
/// options. Every token is trimmed and empty options are dropped. This never
/// fails: a malformed tag simply yields an empty key.
pub fn parse(tag: &str) -> FieldTag {
    let mut tokens = tag.split(',').map(str::trim);
    let key = tokens.next().unwrap_or_default().to_string();
    let mut options: Vec<String> = Vec::new();
    for token in tokens.filter(|t| !t.is_empty()) {
        if !options.iter().any(|o| o == token) {
            options.push(token.to_string());
        }
    }

    FieldTag { key, options }
}
