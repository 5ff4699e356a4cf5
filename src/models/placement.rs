//! Placement of an onboarding tip relative to its target element

use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested position of the tip with respect to the target
///
/// Parsing is total: anything that is not one of the five exact names
/// (including `null` and the empty string) becomes [`Placement::Bottom`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum Placement {
    Top,
    Right,
    Left,
    TopLeft,
    #[default]
    Bottom,
}

impl Placement {
    pub const ALL: [Placement; 5] = [
        Placement::Top,
        Placement::Right,
        Placement::Left,
        Placement::TopLeft,
        Placement::Bottom,
    ];

    /// Parse a placement name, mapping unknown names to `Bottom`
    pub fn parse(name: &str) -> Self {
        match name {
            "top" => Placement::Top,
            "right" => Placement::Right,
            "left" => Placement::Left,
            "topleft" => Placement::TopLeft,
            "bottom" => Placement::Bottom,
            other => {
                if !other.is_empty() {
                    log::debug!("Unrecognized placement '{}', using bottom", other);
                }
                Placement::Bottom
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Right => "right",
            Placement::Left => "left",
            Placement::TopLeft => "topleft",
            Placement::Bottom => "bottom",
        }
    }
}

impl From<&str> for Placement {
    fn from(name: &str) -> Self {
        Placement::parse(name)
    }
}

impl From<Option<String>> for Placement {
    fn from(name: Option<String>) -> Self {
        name.as_deref().map(Placement::parse).unwrap_or_default()
    }
}

impl From<Placement> for &'static str {
    fn from(placement: Placement) -> Self {
        placement.as_str()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
