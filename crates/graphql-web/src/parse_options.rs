/// Options accepted by every parse entry point.
///
/// Deserializable so that callers can load them from JSON configuration
/// (`{"noLocation": true}`); missing fields take their defaults.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// When `true`, no node carries a [`Location`](crate::Location).
    pub no_location: bool,
}

impl ParseOptions {
    /// Options that skip location tracking.
    pub fn without_locations() -> Self {
        Self { no_location: true }
    }
}
