//! `<style>` block helpers and the class to color map.

use crate::types::HexColor;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref RE_STYLE_BLOCK: Regex = Regex::new(r"(?s)<style>(.*?)</style>").unwrap();
    // One rule, with its closing brace already split off
    static ref RE_FILL_RULE: Regex =
        Regex::new(r"^\s*\.([\w-]+)\s*\{fill:\s*(#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3}));$").unwrap();
}

/// Contents of the first `<style>...</style>` block, if any.
pub fn find_style_block(svg: &str) -> Option<&str> {
    RE_STYLE_BLOCK
        .captures(svg)
        .map(|caps| caps.get(1).unwrap().as_str())
}

/// Remove every `<style>...</style>` block from the document.
pub fn strip_style_blocks(svg: &str) -> String {
    RE_STYLE_BLOCK.replace_all(svg, "").into_owned()
}

/// Class name to fill color, built from `.name{fill:#color;}` rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassColors {
    colors: HashMap<String, HexColor>,
}

impl ClassColors {
    /// Read every single-property fill rule from a CSS body. Rules of any
    /// other shape are skipped. Later definitions replace earlier ones.
    pub fn from_css(css: &str) -> Self {
        let mut colors = HashMap::new();
        for rule in css.split('}') {
            let Some(caps) = RE_FILL_RULE.captures(rule) else {
                continue;
            };
            if let Some(color) = HexColor::parse(&caps[2]) {
                colors.insert(caps[1].to_string(), color);
            }
        }
        Self { colors }
    }

    /// Map built from the document's first style block; empty without one.
    pub fn from_svg(svg: &str) -> Self {
        find_style_block(svg).map(Self::from_css).unwrap_or_default()
    }

    pub fn get(&self, class: &str) -> Option<&HexColor> {
        self.colors.get(class)
    }

    /// Color of the first listed class that has one.
    pub fn resolve<'c, I>(&self, classes: I) -> Option<&HexColor>
    where
        I: IntoIterator<Item = &'c str>,
    {
        classes.into_iter().find_map(|class| self.get(class))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
