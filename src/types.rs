//! Type definitions for colors and palettes

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `#rrggbb` color value.
///
/// Three-digit input is expanded on parse; digit case is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse `#abc` or `#aabbcc`. Anything else (wrong length, missing `#`,
    /// non-hex digits) yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => Some(HexColor(Self::expand_short(s))),
            6 => Some(HexColor(s.to_string())),
            _ => None,
        }
    }

    /// Expand `#abc` into `#aabbcc`. Values that are not three digits long
    /// come back unchanged.
    pub fn expand_short(s: &str) -> String {
        match s.strip_prefix('#') {
            Some(digits) if digits.len() == 3 => {
                let mut out = String::with_capacity(7);
                out.push('#');
                for c in digits.chars() {
                    out.push(c);
                    out.push(c);
                }
                out
            }
            _ => s.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_lowercase(&self) -> Self {
        HexColor(self.0.to_ascii_lowercase())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        HexColor::parse(&s).ok_or(Error::InvalidColor(s))
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.0
    }
}

impl std::str::FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        HexColor::parse(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

/// Target palette for the restyle transform.
///
/// Eye color and the primary mouth color are not stored: both follow `primary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub cheek: HexColor,
}

/// Style rules rewritten by the restyle transform, in `Palette::rules` order.
pub const RULE_NAMES: [&str; 5] = [
    "gotchi-primary",
    "gotchi-secondary",
    "gotchi-cheek",
    "gotchi-eyeColor",
    "gotchi-primary-mouth",
];

/// Colors of the `collateral-base-amaave` body template.
pub const TEMPLATE_PRIMARY: &str = "#b6509e";
pub const TEMPLATE_SECONDARY: &str = "#cfeef4";
pub const TEMPLATE_CHEEK: &str = "#f696c6";

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: HexColor(TEMPLATE_PRIMARY.to_string()),
            secondary: HexColor(TEMPLATE_SECONDARY.to_string()),
            cheek: HexColor(TEMPLATE_CHEEK.to_string()),
        }
    }
}

impl Palette {
    pub fn new(primary: &str, secondary: &str, cheek: &str) -> Result<Self> {
        Ok(Self {
            primary: primary.parse()?,
            secondary: secondary.parse()?,
            cheek: cheek.parse()?,
        })
    }

    pub fn eye_color(&self) -> &HexColor {
        &self.primary
    }

    pub fn primary_mouth(&self) -> &HexColor {
        &self.primary
    }

    /// The named style rules the restyle transform rewrites, with their target color.
    pub fn rules(&self) -> [(&'static str, &HexColor); 5] {
        [
            (RULE_NAMES[0], &self.primary),
            (RULE_NAMES[1], &self.secondary),
            (RULE_NAMES[2], &self.cheek),
            (RULE_NAMES[3], self.eye_color()),
            (RULE_NAMES[4], self.primary_mouth()),
        ]
    }
}
