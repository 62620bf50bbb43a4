// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed pairing of bars between two layouts.
//!
//! Animated renderers interpolate between the previous and the next layout. This module only
//! matches bars by [`BarGeometry::key`]; interpolation belongs to the renderer.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::geometry::BarGeometry;

/// A change between two bar lists.
#[derive(Clone, Copy, Debug)]
pub enum BarDiff<'a> {
    /// A bar present only in the new layout.
    Enter {
        /// The new bar.
        new: &'a BarGeometry,
    },
    /// A bar present in both layouts.
    Update {
        /// The previous bar.
        old: &'a BarGeometry,
        /// The new bar.
        new: &'a BarGeometry,
    },
    /// A bar present only in the old layout.
    Exit {
        /// The previous bar.
        old: &'a BarGeometry,
    },
}

impl<'a> BarDiff<'a> {
    /// Returns the key of the bar this change refers to.
    pub fn key(&self) -> &'a str {
        match *self {
            Self::Enter { new } | Self::Update { new, .. } => &new.key,
            Self::Exit { old } => &old.key,
        }
    }
}

/// Matches `old` and `new` bars by key.
///
/// Enters and updates are returned in `new` order, followed by exits in `old` order.
pub fn diff_bars<'a>(old: &'a [BarGeometry], new: &'a [BarGeometry]) -> Vec<BarDiff<'a>> {
    let old_by_key: HashMap<&str, &BarGeometry> =
        old.iter().map(|b| (b.key.as_str(), b)).collect();
    let mut matched: HashSet<&str> = HashSet::with_capacity(new.len());

    let mut out = Vec::with_capacity(new.len().max(old.len()));
    for bar in new {
        match old_by_key.get(bar.key.as_str()) {
            Some(&prev) => out.push(BarDiff::Update { old: prev, new: bar }),
            None => out.push(BarDiff::Enter { new: bar }),
        }
        matched.insert(bar.key.as_str());
    }
    for bar in old {
        if !matched.contains(bar.key.as_str()) {
            out.push(BarDiff::Exit { old: bar });
        }
    }
    out
}
