//! Palette substitution for gotchi body SVGs.

use crate::markup::{scan_tags, splice};
use crate::types::{HexColor, Palette, RULE_NAMES};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    // Same order as RULE_NAMES / Palette::rules. `;?` also takes `{fill:#rrggbb;}`.
    static ref RE_RULES: Vec<Regex> = RULE_NAMES
        .iter()
        .map(|name| {
            Regex::new(&format!(
                r"(?i)(\.{}\{{fill:)(#[0-9a-f]{{6}})(;?\}})",
                regex::escape(name)
            ))
            .unwrap()
        })
        .collect();
}

const SECONDARY_CLASS: &str = "gotchi-secondary";

/// Rewrite the gotchi palette rules and the inline secondary fills.
///
/// Only existing `.gotchi-*{fill:#rrggbb}` rules are rewritten; none are
/// added. Any tag whose class list holds `gotchi-secondary` gets its
/// six-digit `fill` replaced with the secondary color. Formatting outside the
/// replaced values is kept.
pub fn restyle(svg: &str, palette: &Palette) -> String {
    let mut out = svg.to_string();
    for (re, (_, color)) in RE_RULES.iter().zip(palette.rules()) {
        if re.is_match(&out) {
            out = re
                .replace_all(&out, |caps: &regex::Captures| {
                    format!("{}{}{}", &caps[1], color, &caps[3])
                })
                .into_owned();
        }
    }

    let edits: Vec<_> = scan_tags(&out)
        .iter()
        .filter(|tag| tag.has_class(SECONDARY_CLASS))
        .flat_map(|tag| tag.attrs.iter().filter(|a| a.name.eq_ignore_ascii_case("fill")))
        .filter(|fill| is_six_digit_hex(fill.value) && fill.value != palette.secondary.as_str())
        .map(|fill| (fill.value_span.clone(), palette.secondary.to_string()))
        .collect();

    if edits.is_empty() {
        return out;
    }
    debug!(fills = edits.len(), "replaced secondary fills");
    splice(&out, &edits)
}

fn is_six_digit_hex(value: &str) -> bool {
    value.len() == 7 && HexColor::parse(value).is_some()
}

/// Read the primary, secondary and cheek colors back out of a document's
/// style rules, lowercased. `None` unless all three rules are present.
pub fn palette_from_svg(svg: &str) -> Option<Palette> {
    let color = |i: usize| -> Option<HexColor> {
        let caps = RE_RULES[i].captures(svg)?;
        HexColor::parse(&caps[2]).map(|c| c.to_lowercase())
    };
    Some(Palette {
        primary: color(0)?,
        secondary: color(1)?,
        cheek: color(2)?,
    })
}
