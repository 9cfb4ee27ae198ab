// src/crawl/frontier.rs
// =============================================================================
// Ordered, duplicate-free anchor collection backing both the visited list
// and the crawl frontiers. Append order is the order the sitemap comes out
// in; membership is keyed on the href alone.
// =============================================================================

use crate::anchor::Anchor;

#[derive(Debug, Clone, Default)]
pub struct AnchorSet {
    anchors: Vec<Anchor>,
}

impl AnchorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership by href; the display text never participates.
    pub fn contains(&self, candidate: &Anchor) -> bool {
        self.anchors.iter().any(|a| a.href == candidate.href)
    }

    /// Unconditional append. Callers use this when they already know the
    /// anchor is new, e.g. the visited list fed from a dedup'd frontier.
    pub fn push(&mut self, anchor: Anchor) {
        self.anchors.push(anchor);
    }

    /// Appends `candidate` iff it is not already present and its href sits
    /// inside the domain, where "inside" is a plain string prefix match
    /// against `domain_prefix` (`scheme://host`). Returns whether the
    /// candidate got in.
    pub fn admit(&mut self, candidate: Anchor, domain_prefix: &str) -> bool {
        if self.contains(&candidate) || !candidate.href.starts_with(domain_prefix) {
            return false;
        }

        self.anchors.push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Anchor> {
        self.anchors.iter()
    }

    pub fn into_anchors(self) -> Vec<Anchor> {
        self.anchors
    }
}
