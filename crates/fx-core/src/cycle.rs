//! Index state for sequences that cycle through items (image cascade,
//! testimonial carousel). Rendering and transitions live in the host.

use rand::Rng;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cycler {
    len: usize,
    active: usize,
}

impl Cycler {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fewer than two items never cycle; the first one just stays put.
    pub fn can_cycle(&self) -> bool {
        self.len >= 2
    }

    pub fn active(&self) -> Option<usize> {
        (self.len > 0).then_some(self.active)
    }

    /// The item peeking from behind the active one.
    pub fn upcoming(&self) -> Option<usize> {
        self.can_cycle().then(|| (self.active + 1) % self.len)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    pub fn advance(&mut self) -> bool {
        if !self.can_cycle() {
            return false;
        }
        self.active = (self.active + 1) % self.len;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if !self.can_cycle() {
            return false;
        }
        self.active = (self.active + self.len - 1) % self.len;
        true
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.active {
            return false;
        }
        self.active = index;
        true
    }
}

/// Resting tilt for an inactive card, uniform in `[-max_deg, max_deg]`.
pub fn tilt_degrees<R: Rng>(rng: &mut R, max_deg: i32) -> i32 {
    let max = max_deg.abs();
    rng.gen_range(-max..=max)
}
