//! Zone anchors: stable 3D placements for the presentation layer.
//!
//! Every zone resolves to exactly one anchor. Anchor *assignment* (circular
//! arrangement of N players and the like) is a presentation concern; the
//! core only stores what the host registers and falls back to the origin.

use rustc_hash::FxHashMap;

use crate::zones::ZoneRef;

/// A 3D placement the choreographer moves card proxies between.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Anchor {
    pub const ORIGIN: Anchor = Anchor {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Registry mapping zones to their anchors.
#[derive(Clone, Debug, Default)]
pub struct AnchorMap {
    anchors: FxHashMap<ZoneRef, Anchor>,
}

impl AnchorMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or move) a zone's anchor.
    pub fn set(&mut self, zone: ZoneRef, anchor: Anchor) {
        self.anchors.insert(zone, anchor);
    }

    /// Resolve a zone's anchor, defaulting to the origin for zones the host
    /// has not placed.
    #[must_use]
    pub fn get(&self, zone: ZoneRef) -> Anchor {
        self.anchors.get(&zone).copied().unwrap_or(Anchor::ORIGIN)
    }
}
