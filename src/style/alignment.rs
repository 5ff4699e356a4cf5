//! Text alignment class for the tip body

use serde::{Deserialize, Serialize};

/// Class prefix; the alignment name is appended (`align-left`)
const ALIGN_CLASS_PREFIX: &str = "align-";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
    #[default]
    Center,
}

impl Alignment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
        }
    }

    /// Class for this alignment; centered text is the stylesheet default
    pub const fn class_name(self) -> &'static str {
        match self {
            Alignment::Left => "align-left",
            Alignment::Right => "align-right",
            Alignment::Center => "",
        }
    }
}

/// Class for a configured alignment name
///
/// `None`, `""` and `"center"` give no class. Any other value is embedded
/// as-is, so unknown names still produce a predictable `align-<name>`.
pub fn resolve_alignment_class(alignment: Option<&str>) -> String {
    match alignment {
        None | Some("") | Some("center") => String::new(),
        Some(name) => format!("{}{}", ALIGN_CLASS_PREFIX, name),
    }
}
