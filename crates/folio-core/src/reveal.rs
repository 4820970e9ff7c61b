//! One-shot "animate in on first sight" latches.

use serde::Serialize;

use crate::navigation::{View, ViewportProbe};

/// Element that fades in the first time it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealTarget {
    About,
    Skills,
    Publications,
}

impl RevealTarget {
    pub const ALL: [Self; 3] = [Self::About, Self::Skills, Self::Publications];

    pub fn element_id(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Publications => "publications",
        }
    }

    /// Visible fraction that trips the latch.
    pub fn threshold(&self) -> f32 {
        match self {
            Self::About => 0.2,
            Self::Skills | Self::Publications => 0.1,
        }
    }

    /// View the element lives in.
    pub fn view(&self) -> View {
        match self {
            Self::About | Self::Skills => View::Main,
            Self::Publications => View::Research,
        }
    }
}

/// A flag that flips once and never resets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealLatch {
    threshold: f32,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed an intersection ratio. Returns true only on the flip.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if self.revealed || ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Latches for every reveal target.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveals {
    about: RevealLatch,
    skills: RevealLatch,
    publications: RevealLatch,
}

impl Default for Reveals {
    fn default() -> Self {
        Self {
            about: RevealLatch::new(RevealTarget::About.threshold()),
            skills: RevealLatch::new(RevealTarget::Skills.threshold()),
            publications: RevealLatch::new(RevealTarget::Publications.threshold()),
        }
    }
}

impl Reveals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self, target: RevealTarget) -> bool {
        self.latch(target).is_revealed()
    }

    /// Check every target of `view` against the probe.
    pub fn observe(&mut self, view: View, probe: &impl ViewportProbe) {
        let viewport = probe.viewport_height();
        for target in RevealTarget::ALL {
            if target.view() != view {
                continue;
            }
            let Some(bounds) = probe.bounds(target.element_id()) else {
                continue;
            };
            if self.latch_mut(target).observe(bounds.intersection_ratio(viewport)) {
                tracing::debug!(?target, "revealed");
            }
        }
    }

    fn latch(&self, target: RevealTarget) -> &RevealLatch {
        match target {
            RevealTarget::About => &self.about,
            RevealTarget::Skills => &self.skills,
            RevealTarget::Publications => &self.publications,
        }
    }

    fn latch_mut(&mut self, target: RevealTarget) -> &mut RevealLatch {
        match target {
            RevealTarget::About => &mut self.about,
            RevealTarget::Skills => &mut self.skills,
            RevealTarget::Publications => &mut self.publications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_flips_once() {
        let mut latch = RevealLatch::new(0.2);
        assert!(!latch.observe(0.19));
        assert!(latch.observe(0.2));
        assert!(!latch.observe(0.9));
        assert!(latch.is_revealed());
    }

    #[test]
    fn latch_never_resets() {
        let mut latch = RevealLatch::new(0.1);
        latch.observe(0.5);
        latch.observe(0.0);
        assert!(latch.is_revealed());
    }
}
