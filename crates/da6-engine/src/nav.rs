//! Navigation state machines for the three screen shapes: list/detail
//! focus, the bounded event carousel, and the auto-advancing home
//! rotation. All transitions are total; out-of-range input clamps
//! silently.

/// Two-state machine for list/detail screens: browsing a filtered list,
/// or focused on one record shown in full detail.
///
/// Selecting while focused replaces the focused record. Dismissing
/// always returns to browsing with no residual selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus<T> {
    Browsing,
    Focused(T),
}

impl<T> Default for Focus<T> {
    fn default() -> Self {
        Focus::Browsing
    }
}

impl<T> Focus<T> {
    pub fn new() -> Self {
        Focus::Browsing
    }

    /// Focus on a record, retaining it exactly as handed in.
    pub fn select(&mut self, record: T) {
        *self = Focus::Focused(record);
    }

    /// Return to browsing, dropping any focused record.
    pub fn dismiss(&mut self) {
        *self = Focus::Browsing;
    }

    pub fn focused(&self) -> Option<&T> {
        match self {
            Focus::Browsing => None,
            Focus::Focused(record) => Some(record),
        }
    }

    pub fn is_focused(&self) -> bool {
        matches!(self, Focus::Focused(_))
    }
}

/// Bounded index over a fixed-length list, driven by directional scroll
/// gestures. Never wraps: advancing at the last index and retreating at
/// zero are no-ops, and jumps clamp into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One step toward the end, stopping at the last index.
    pub fn advance(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    /// One step toward the start, stopping at zero.
    pub fn retreat(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Direct jump via a position indicator, clamped into range.
    pub fn jump(&mut self, target: usize) {
        self.index = target.min(self.len.saturating_sub(1));
    }
}

/// Auto-advancing index over the home modules.
///
/// Timer ticks advance with wraparound while autoplay is on. The first
/// manual selection jumps to its target and turns autoplay off for the
/// rest of the screen's lifetime; nothing turns it back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
    autoplay: bool,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            autoplay: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Timer tick: advance with wraparound while autoplay is on.
    pub fn tick(&mut self) {
        if self.autoplay && self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Manual selection: jump to the clamped target and stop autoplay.
    pub fn select(&mut self, target: usize) {
        self.index = target.min(self.len.saturating_sub(1));
        self.autoplay = false;
    }

    /// Manual step to the next module, wrapping. Counts as a selection.
    pub fn select_next(&mut self) {
        let target = if self.len == 0 {
            0
        } else {
            (self.index + 1) % self.len
        };
        self.select(target);
    }

    /// Manual step to the previous module, wrapping. Counts as a selection.
    pub fn select_prev(&mut self) {
        let target = if self.len == 0 {
            0
        } else {
            (self.index + self.len - 1) % self.len
        };
        self.select(target);
    }
}
