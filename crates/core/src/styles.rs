//! Box style registry
//!
//! A [`StyleRegistry`] maps style names to [`BorderGlyphSet`]s. It is built
//! once at startup and handed to whoever needs it; there is no global
//! instance.

use crate::errors::StyleError;
use crate::text::boxing::BorderGlyphSet;
use indexmap::IndexMap;
use tracing::debug;

/// Style used when none is requested
pub const DEFAULT_STYLE: &str = "single";

/// Built-in styles in registration order
const BUILTIN_STYLES: &[(&str, [&str; 8])] = &[
    ("single", ["┌", "┐", "└", "┘", "│", "│", "─", "─"]),
    ("double", ["╔", "╗", "╚", "╝", "║", "║", "═", "═"]),
    ("round", ["╭", "╮", "╰", "╯", "│", "│", "─", "─"]),
    ("bold", ["┏", "┓", "┗", "┛", "┃", "┃", "━", "━"]),
    ("shadow", ["┌", "┐", "└", "┘", "│", "│", "─", "─"]),
    ("simple", [".-", "-.", "`-", "-`", "|", "|", "-", "-"]),
    ("triple", ["╓", "╖", "╙", "╜", "║", "║", "═", "═"]),
    ("block", ["█", "█", "█", "█", "█", "█", "█", "█"]),
    ("dotted", ["┈", "┈", "┈", "┈", "┊", "┊", "┈", "┈"]),
    ("dash", ["┄", "┄", "┄", "┄", "┆", "┆", "┄", "┄"]),
];

/// Immutable mapping from style name to glyph set
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: IndexMap<String, BorderGlyphSet>,
}

impl StyleRegistry {
    /// Registry holding the built-in catalog
    ///
    /// # Examples
    /// ```
    /// use boxit_core::styles::{StyleRegistry, DEFAULT_STYLE};
    ///
    /// let registry = StyleRegistry::builtin();
    /// assert!(registry.contains(DEFAULT_STYLE));
    /// assert!(registry.get("round").is_some());
    /// ```
    pub fn builtin() -> Self {
        BUILTIN_STYLES
            .iter()
            .map(|(name, parts)| (name.to_string(), BorderGlyphSet::from_parts(*parts)))
            .collect()
    }

    /// Look up a style by name
    pub fn get(&self, name: &str) -> Option<&BorderGlyphSet> {
        self.styles.get(name)
    }

    /// Look up a style by name, failing with the list of known names
    pub fn resolve(&self, name: &str) -> Result<&BorderGlyphSet, StyleError> {
        match self.styles.get(name) {
            Some(glyphs) => {
                debug!(style = name, "Resolved box style");
                Ok(glyphs)
            }
            None => Err(StyleError::Unknown {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.styles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BorderGlyphSet)> + '_ {
        self.styles.iter().map(|(name, glyphs)| (name.as_str(), glyphs))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl FromIterator<(String, BorderGlyphSet)> for StyleRegistry {
    /// Later entries replace earlier ones with the same name
    fn from_iter<I: IntoIterator<Item = (String, BorderGlyphSet)>>(iter: I) -> Self {
        Self {
            styles: iter.into_iter().collect(),
        }
    }
}
