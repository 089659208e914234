use serde::Serialize;

/// Solved-problem counts in one canonical layout, whatever the upstream schema.
///
/// A field is `None` when the source did not report it. Unknown is never
/// collapsed to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: Option<u64>,
    pub easy: Option<u64>,
    pub medium: Option<u64>,
    pub hard: Option<u64>,
}

impl Stats {
    /// Shown in place of a value that is unknown or not loaded yet.
    pub const PLACEHOLDER: &'static str = "—";

    /// Renders one field: the count, or [`Stats::PLACEHOLDER`].
    pub fn display_field(value: Option<u64>) -> String {
        value.map_or_else(|| Self::PLACEHOLDER.to_string(), |v| v.to_string())
    }

    /// `(name, value)` pairs in display order.
    pub fn fields(&self) -> [(&'static str, Option<u64>); 4] {
        [
            ("total", self.total),
            ("easy", self.easy),
            ("medium", self.medium),
            ("hard", self.hard),
        ]
    }
}
