/// Display name of a shipping country, as passed in the `name` query
/// parameter. Falls back to [`CountryName::UNKNOWN`] when the parameter is
/// missing or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryName(String);

impl CountryName {
    pub const UNKNOWN: &'static str = "Unknown Country";

    pub fn from_query(name: Option<String>) -> Self {
        match name {
            Some(name) if !name.trim().is_empty() => Self(name),
            _ => Self(Self::UNKNOWN.to_string()),
        }
    }
}

impl AsRef<str> for CountryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
