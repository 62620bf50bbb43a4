// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cyclic series color assignment.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;
use peniko::color::palette::css;

use crate::error::ConfigError;

/// A default categorical palette suitable for bar series.
///
/// Colors are taken from named CSS colors; [`assign`] repeats them if there are more series.
pub const DEFAULT_PALETTE: [Color; 8] = [
    css::CORNFLOWER_BLUE,
    css::ORANGE,
    css::MEDIUM_SEA_GREEN,
    css::CRIMSON,
    css::GOLDENROD,
    css::SLATE_BLUE,
    css::DARK_CYAN,
    css::HOT_PINK,
];

/// Colors assigned to series, in series order.
#[derive(Clone, Debug)]
pub struct SeriesColors {
    entries: Vec<(String, Color)>,
    index: HashMap<String, usize>,
}

impl SeriesColors {
    /// Returns the color assigned to `series_id`.
    pub fn get(&self, series_id: &str) -> Option<Color> {
        self.index.get(series_id).map(|&i| self.entries[i].1)
    }

    /// Returns the color at series position `index`.
    pub fn at(&self, index: usize) -> Option<Color> {
        self.entries.get(index).map(|(_, c)| *c)
    }

    /// Color of a series index known to be in range.
    pub(crate) fn color_at(&self, index: usize) -> Color {
        self.entries[index].1
    }

    /// Iterates `(series_id, color)` pairs in series order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.entries.iter().map(|(id, c)| (id.as_str(), *c))
    }

    /// Returns the number of assigned series.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no series were assigned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Assigns `palette[i % palette.len()]` to the `i`-th series id.
///
/// If an id repeats, lookups by id return the color of its first position.
pub fn assign<S: AsRef<str>>(
    series_ids: &[S],
    palette: &[Color],
) -> Result<SeriesColors, ConfigError> {
    if palette.is_empty() {
        return Err(ConfigError::EmptyPalette);
    }
    let mut entries = Vec::with_capacity(series_ids.len());
    let mut index = HashMap::with_capacity(series_ids.len());
    for (i, id) in series_ids.iter().enumerate() {
        let id = id.as_ref();
        entries.push((String::from(id), palette[i % palette.len()]));
        index.entry(String::from(id)).or_insert(i);
    }
    Ok(SeriesColors { entries, index })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn colors_wrap_cyclically() {
        let palette = [css::RED, css::GREEN, css::BLUE];
        let colors = assign(&["a", "b", "c", "d", "e"], &palette).unwrap();
        assert_eq!(colors.len(), 5);
        assert_eq!(colors.get("d").unwrap().to_rgba8(), css::RED.to_rgba8());
        assert_eq!(colors.get("e").unwrap().to_rgba8(), css::GREEN.to_rgba8());
        assert_eq!(colors.at(2).unwrap().to_rgba8(), css::BLUE.to_rgba8());
        let ids: Vec<&str> = colors.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert_eq!(
            assign(&["a"], &[]).unwrap_err(),
            ConfigError::EmptyPalette
        );
    }

    #[test]
    fn no_series_gives_empty_assignment() {
        let colors = assign::<&str>(&[], &DEFAULT_PALETTE).unwrap();
        assert!(colors.is_empty());
        assert!(colors.get("a").is_none());
    }

    #[test]
    fn repeated_id_keeps_first_color() {
        let colors = assign(&["a", "a"], &[css::RED, css::BLUE]).unwrap();
        assert_eq!(colors.get("a").unwrap().to_rgba8(), css::RED.to_rgba8());
    }
}
