use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Keyed;

/// Highlight participation of one region in the current interaction.
///
/// `NoInteraction` means no hover is in progress at all; it is distinct
/// from `Inactive`, which means another region is being hovered. Stroke
/// computation darkens by a stronger factor only for `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveFlag {
    Active,
    Inactive,
    NoInteraction,
}

impl ActiveFlag {
    #[must_use]
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// Hover-driven highlight state owned by one venn coordinator instance.
///
/// Two states: idle (no hovered key, empty actives) and highlighting.
/// `activate` replaces both fields atomically before the next scene build,
/// and `leave` resets unconditionally, so no partial update is observable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightState {
    hovered: Option<String>,
    actives: IndexSet<String>,
}

impl HighlightState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    #[must_use]
    pub fn active_keys(&self) -> &IndexSet<String> {
        &self.actives
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.hovered.is_none() && self.actives.is_empty()
    }

    /// Enters the highlighting state for `point_key`.
    ///
    /// Rescans the entire region array on every call: intersection keys
    /// contain their member set keys, so hovering a set must activate each
    /// region whose key contains it, including multi-set intersections.
    /// Keyless regions never match.
    pub fn activate<K: Keyed>(&mut self, regions: &[K], point_key: &str) {
        self.hovered = Some(point_key.to_owned());
        self.actives = regions
            .iter()
            .filter_map(|region| region.key())
            .filter(|key| key.contains(point_key))
            .map(str::to_owned)
            .collect();
        trace!(
            hovered = point_key,
            active_count = self.actives.len(),
            "highlight activate"
        );
    }

    /// Returns to idle, from any state.
    pub fn leave(&mut self) {
        trace!("highlight leave");
        self.hovered = None;
        self.actives.clear();
    }

    /// Derives the highlight flag for one region key.
    #[must_use]
    pub fn flag_for(&self, key: Option<&str>) -> ActiveFlag {
        if self.actives.is_empty() {
            ActiveFlag::NoInteraction
        } else if key.is_some_and(|key| self.actives.contains(key)) {
            ActiveFlag::Active
        } else {
            ActiveFlag::Inactive
        }
    }

    #[must_use]
    pub fn is_hovered(&self, key: Option<&str>) -> bool {
        match (self.hovered.as_deref(), key) {
            (Some(hovered), Some(key)) => hovered == key,
            _ => false,
        }
    }
}
