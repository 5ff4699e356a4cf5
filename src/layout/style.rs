//! Inline style for a positioned tip
//!
//! The tip is rendered with `position: absolute`; these three properties are
//! bound straight onto its style attribute.

use serde::{Deserialize, Serialize};

use super::positioner::Position;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ItemStyle {
    pub left: String,
    pub top: String,
    pub transform: String,
}

impl From<Position> for ItemStyle {
    fn from(pos: Position) -> Self {
        Self {
            left: px(pos.x),
            top: px(pos.y),
            transform: pos.transform.as_css().to_string(),
        }
    }
}

impl Position {
    pub fn to_style(&self) -> ItemStyle {
        ItemStyle::from(*self)
    }
}

/// Format a pixel length; whole numbers print without a fraction
fn px(value: f64) -> String {
    format!("{}px", value)
}
