//! One-shot visibility triggers for the page regions
//!
//! The browser side wires an IntersectionObserver to each region; the state
//! it drives lives here so the fire-once rules are testable without a DOM.

/// Fraction of a region that must be inside the viewport to reveal it
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Animated page regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Hero,
    Features,
    Form,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Hero, Region::Features, Region::Form];
}

/// A trigger that fires at most once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the trigger. Returns `true` only on the first call.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Decide whether an intersection report should fire the trigger
pub fn crosses_threshold(is_intersecting: bool, ratio: f64) -> bool {
    is_intersecting && ratio >= REVEAL_THRESHOLD
}

/// Reveal state of the three regions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityFlags {
    hero: OneShot,
    features: OneShot,
    form: OneShot,
}

impl VisibilityFlags {
    pub fn new() -> Self {
        Self::default()
    }

    fn trigger_mut(&mut self, region: Region) -> &mut OneShot {
        match region {
            Region::Hero => &mut self.hero,
            Region::Features => &mut self.features,
            Region::Form => &mut self.form,
        }
    }

    /// Mark a region revealed. Returns `true` if this call flipped the flag.
    pub fn reveal(&mut self, region: Region) -> bool {
        self.trigger_mut(region).fire()
    }

    pub fn is_revealed(&self, region: Region) -> bool {
        match region {
            Region::Hero => self.hero.has_fired(),
            Region::Features => self.features.has_fired(),
            Region::Form => self.form.has_fired(),
        }
    }
}
