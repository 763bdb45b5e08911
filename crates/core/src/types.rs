/// Catalog identifiers are opaque strings (e.g. `"skill-1"`).
pub type EntityId = String;

/// Percentages are whole numbers in `0..=100`.
pub type Percent = u8;
