use serde::{Deserialize, Serialize};

/// Badge color attached to a status value by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BadgeColor {
    Green,
    Yellow,
    Red,
    Blue,
    #[default]
    Gray,
}

/// Presentation metadata of a status-like enum
///
/// Implemented with an exhaustive match per enum, so adding a variant is a
/// compile error until its label and badge are chosen. Status enums decode
/// unknown string keys to their `Unknown` variant, whose badge is the
/// default `Gray` — an unrecognized stored value degrades to the default
/// presentation instead of failing.
pub trait Presentation {
    /// Human-readable label shown next to the badge
    fn label(&self) -> &'static str;

    /// Badge color for this value
    fn badge(&self) -> BadgeColor;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_badge_is_gray() {
        assert_eq!(BadgeColor::default(), BadgeColor::Gray);
    }
}
