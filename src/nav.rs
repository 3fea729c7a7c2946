//! Selection navigators driven by button events.
//!
//! [`Toggle`] picks one of two fixed slots and reports it on Select.
//! [`Cyclic`] walks a wrap-around index; the dice form stacks two of them,
//! one for the field in focus and one per field value.

use crate::input::ButtonId;

/// Two-slot selector (Hit/Sit, Yes/No).
///
/// Any direction button moves the mark to the other slot; Select confirms
/// the marked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Toggle<T> {
    options: [T; 2],
    marked: usize,
}

impl<T: Copy> Toggle<T> {
    /// Creates a toggle with the first slot marked.
    #[must_use]
    pub const fn new(first: T, second: T) -> Self {
        Self {
            options: [first, second],
            marked: 0,
        }
    }

    /// Applies one button event; returns the choice when Select confirms it.
    pub fn handle_event(&mut self, event: ButtonId) -> Option<T> {
        match event {
            ButtonId::Left | ButtonId::Right | ButtonId::Up | ButtonId::Down => {
                self.marked ^= 1;
                None
            }
            ButtonId::Select => Some(self.options[self.marked]),
            ButtonId::None => None,
        }
    }

    /// Index of the marked slot (0 or 1).
    #[must_use]
    pub const fn marked(&self) -> usize {
        self.marked
    }

    /// Currently marked option.
    #[must_use]
    pub const fn current(&self) -> T {
        self.options[self.marked]
    }
}

/// Wrap-around index in `0..=bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cyclic {
    index: u8,
    bound: u8,
}

impl Cyclic {
    /// Creates a selector over `0..=bound`, starting at 0.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero; a one-value selector is a wiring mistake.
    #[must_use]
    pub const fn new(bound: u8) -> Self {
        assert!(bound > 0, "cyclic selector needs at least two values");
        Self { index: 0, bound }
    }

    /// Current index.
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn bound(&self) -> u8 {
        self.bound
    }

    /// Moves to the next value, wrapping to 0.
    pub const fn increment(&mut self) {
        self.index = if self.index >= self.bound {
            0
        } else {
            self.index + 1
        };
    }

    /// Moves to the previous value, wrapping to `bound`.
    pub const fn decrement(&mut self) {
        self.index = if self.index == 0 {
            self.bound
        } else {
            self.index - 1
        };
    }

    /// Applies Up/Select (next) or Down (previous) and returns the new index.
    ///
    /// Left, Right and `None` are left to the caller and return `None`.
    pub const fn handle_event(&mut self, event: ButtonId) -> Option<u8> {
        match event {
            ButtonId::Up | ButtonId::Select => self.increment(),
            ButtonId::Down => self.decrement(),
            ButtonId::Left | ButtonId::Right | ButtonId::None => return None,
        }
        Some(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Answer {
        Yes,
        No,
    }

    #[test]
    fn toggle_flips_on_any_direction() {
        let mut toggle = Toggle::new(Answer::Yes, Answer::No);
        for (event, expected) in [
            (ButtonId::Right, 1),
            (ButtonId::Up, 0),
            (ButtonId::Down, 1),
            (ButtonId::Left, 0),
            (ButtonId::None, 0),
        ] {
            assert_eq!(toggle.handle_event(event), None);
            assert_eq!(toggle.marked(), expected);
        }
    }

    #[test]
    fn toggle_confirms_marked_slot() {
        let mut toggle = Toggle::new(Answer::Yes, Answer::No);
        assert_eq!(toggle.handle_event(ButtonId::Select), Some(Answer::Yes));
        toggle.handle_event(ButtonId::Left);
        assert_eq!(toggle.current(), Answer::No);
        assert_eq!(toggle.handle_event(ButtonId::Select), Some(Answer::No));
    }

    #[test]
    fn cyclic_wraps_both_ways() {
        let mut selector = Cyclic::new(3);
        assert_eq!(selector.handle_event(ButtonId::Down), Some(3));
        assert_eq!(selector.handle_event(ButtonId::Up), Some(0));
        assert_eq!(selector.handle_event(ButtonId::Select), Some(1));
    }

    #[test]
    fn cyclic_full_lap_returns_to_start() {
        let mut selector = Cyclic::new(6);
        for _ in 0..=6 {
            selector.handle_event(ButtonId::Up);
        }
        assert_eq!(selector.index(), 0);
    }

    #[test]
    fn cyclic_leaves_sideways_events_alone() {
        let mut selector = Cyclic::new(2);
        assert_eq!(selector.handle_event(ButtonId::Left), None);
        assert_eq!(selector.handle_event(ButtonId::Right), None);
        assert_eq!(selector.index(), 0);
    }

    #[test]
    #[should_panic(expected = "at least two")]
    fn zero_bound_panics() {
        let _ = Cyclic::new(0);
    }
}
