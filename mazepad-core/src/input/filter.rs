//! Mask change filter
//!
//! The game only acts on a mask that differs from the previous poll and
//! has at least one bit set. A poll that reads all-released is recorded
//! but never handed to the game, so holding a button does not repeat
//! and releasing one does nothing.

use super::buttons::ButtonMask;

/// What the filter decided about a freshly polled mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MaskChange {
    /// Same mask as the previous poll
    Unchanged,
    /// Mask changed to zero (recorded, not acted on)
    Released,
    /// Mask changed to a non-zero value the game should handle
    Pressed(ButtonMask),
}

impl MaskChange {
    /// The mask to hand to the game, if any
    pub fn accepted(self) -> Option<ButtonMask> {
        match self {
            MaskChange::Pressed(mask) => Some(mask),
            MaskChange::Unchanged | MaskChange::Released => None,
        }
    }
}

/// Change detector holding the previous poll's mask
#[derive(Debug, Clone)]
pub struct MaskFilter {
    previous: ButtonMask,
}

impl Default for MaskFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskFilter {
    /// Mask assumed to precede the first poll
    ///
    /// A pad whose DATA line idles low reads as all-pressed forever and
    /// therefore never produces a change.
    pub const INITIAL: ButtonMask = ButtonMask::ALL;

    /// Create a new filter
    pub const fn new() -> Self {
        Self {
            previous: Self::INITIAL,
        }
    }

    /// Mask recorded by the last call to [`MaskFilter::update`]
    pub fn previous(&self) -> ButtonMask {
        self.previous
    }

    /// Record `mask` and classify it against the previous one
    pub fn update(&mut self, mask: ButtonMask) -> MaskChange {
        if mask == self.previous {
            return MaskChange::Unchanged;
        }

        self.previous = mask;

        if mask.is_empty() {
            MaskChange::Released
        } else {
            MaskChange::Pressed(mask)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LogicalButton;

    #[test]
    fn test_first_poll_of_all_pressed_is_unchanged() {
        let mut filter = MaskFilter::new();
        assert_eq!(filter.update(ButtonMask::ALL), MaskChange::Unchanged);
    }

    #[test]
    fn test_new_press_is_accepted_once() {
        let mut filter = MaskFilter::new();
        let start = ButtonMask::only(LogicalButton::Start);

        assert_eq!(filter.update(start), MaskChange::Pressed(start));
        // Held button: no repeat
        assert_eq!(filter.update(start), MaskChange::Unchanged);
        assert_eq!(filter.update(start).accepted(), None);
    }

    #[test]
    fn test_release_is_recorded_but_not_accepted() {
        let mut filter = MaskFilter::new();
        let right = ButtonMask::only(LogicalButton::Right);

        filter.update(right);
        let change = filter.update(ButtonMask::NONE);
        assert_eq!(change, MaskChange::Released);
        assert_eq!(change.accepted(), None);
        assert_eq!(filter.previous(), ButtonMask::NONE);

        // Pressing the same button again is a new change
        assert_eq!(filter.update(right).accepted(), Some(right));
    }

    #[test]
    fn test_partial_release_of_chord_is_accepted() {
        // Releasing one button of a chord yields a changed non-zero mask,
        // so the remaining button is handled again.
        let mut filter = MaskFilter::new();
        let chord = ButtonMask::only(LogicalButton::Up).with(LogicalButton::Right);
        let up = ButtonMask::only(LogicalButton::Up);

        assert_eq!(filter.update(chord).accepted(), Some(chord));
        assert_eq!(filter.update(up).accepted(), Some(up));
    }
}
