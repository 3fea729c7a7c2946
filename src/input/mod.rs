//! Keypad input: a five-button resistor ladder read through one analog line.
//!
//! ## Components
//!
//! - **Decoder**: classifies one raw sample into a [`ButtonId`]
//! - **Debouncer**: turns the stream of decoded samples into one event per press

pub mod debounce;
pub mod decoder;

pub use debounce::Debouncer;
pub use decoder::decode;

/// Button identity decoded from the analog ladder.
///
/// `None` doubles as "no event" in the debouncer output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// No button, or a sample outside every window.
    #[default]
    None,
    /// Right button.
    Right,
    /// Up button.
    Up,
    /// Down button.
    Down,
    /// Left button.
    Left,
    /// Select button.
    Select,
}

impl ButtonId {
    /// Whether this is an actual button rather than `None`.
    #[must_use]
    pub const fn is_pressed(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Raw analog sampling collaborator.
pub trait AnalogInput {
    /// Returns one 10-bit sample in `0..=1023`.
    fn read_raw(&mut self) -> u16;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    fn read_raw(&mut self) -> u16 {
        (**self).read_raw()
    }
}
