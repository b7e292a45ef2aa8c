//! Dirty-flagged bead field cache.
//!
//! The field is rebuilt only when the layout-relevant part of the parameters
//! (or the surface center) changes. A cheap FNV fingerprint is compared first,
//! then full equality.

use crate::field::BeadField;
use crate::params::{Color, LayoutParameters, Theme};
use fnv::FnvHasher;
use glam::DVec2;
use std::hash::{Hash, Hasher};

/// Everything a [`BeadField`] depends on. Floats are compared by bit pattern
/// so a NaN input does not force a rebuild every frame.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutKey {
    spacing: u64,
    outer_ring_radius: u64,
    num_rings: u32,
    bead_radius: u64,
    rotation: u64,
    color1: Color,
    color2: Color,
    theme: Theme,
    center: [u64; 2],
}

impl LayoutKey {
    pub fn new(params: &LayoutParameters, center: DVec2) -> Self {
        Self {
            spacing: params.spacing.to_bits(),
            outer_ring_radius: params.outer_ring_radius.to_bits(),
            num_rings: params.num_rings,
            bead_radius: params.bead_radius.to_bits(),
            rotation: params.rotation.to_bits(),
            color1: params.color1.clone(),
            color2: params.color2.clone(),
            theme: params.theme,
            center: [center.x.to_bits(), center.y.to_bits()],
        }
    }

    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FnvHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[derive(Debug)]
struct CacheEntry {
    key: LayoutKey,
    fingerprint: u64,
    field: BeadField,
}

#[derive(Debug, Default)]
pub struct FieldCache {
    entry: Option<CacheEntry>,
    rebuilds: u64,
}

impl FieldCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field for `params`, rebuilding it first if the layout changed.
    pub fn get(&mut self, params: &LayoutParameters, center: DVec2) -> &BeadField {
        let key = LayoutKey::new(params, center);
        let fingerprint = key.fingerprint();
        let stale = match &self.entry {
            Some(e) => e.fingerprint != fingerprint || e.key != key,
            None => true,
        };
        if stale {
            self.entry = None;
            self.rebuilds += 1;
            log::debug!("[cache] layout changed (fingerprint {fingerprint:016x}); rebuilding");
        }
        let entry = self.entry.get_or_insert_with(|| CacheEntry {
            field: BeadField::build(params, center),
            key,
            fingerprint,
        });
        &entry.field
    }

    /// Drop the cached field; the next `get` rebuilds.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of builds performed so far.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    pub fn fingerprint(&self) -> Option<u64> {
        self.entry.as_ref().map(|e| e.fingerprint)
    }
}
