//! Edge-triggered debouncing of decoded button samples.
//!
//! A new identity has to be read `threshold` times in a row before it
//! replaces the stable one. The commit of a pressed button is the only
//! non-`None` output for that press; holding it, releasing it, and any
//! flicker that never settles all produce `None`.

use embedded_hal::delay::DelayNs;

use super::{AnalogInput, ButtonId, decode};
use crate::options::ControllerOptions;

/// Debounce state for one keypad line.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Last identity that was read `threshold` times in a row.
    stable: ButtonId,
    /// Identity currently being counted.
    candidate: ButtonId,
    /// Consecutive reads of `candidate`, capped at `threshold`.
    run: u8,
    threshold: u8,
    settle_delay_us: u32,
}

impl Debouncer {
    /// Creates a debouncer that commits after `threshold` matching reads.
    ///
    /// # Panics
    ///
    /// Panics if `threshold` is zero.
    #[must_use]
    pub const fn new(threshold: u8, settle_delay_us: u32) -> Self {
        assert!(threshold > 0, "debounce threshold must be non-zero");
        Self {
            stable: ButtonId::None,
            candidate: ButtonId::None,
            run: 0,
            threshold,
            settle_delay_us,
        }
    }

    /// Creates a debouncer from validated options.
    ///
    /// # Panics
    ///
    /// Panics if the options carry a zero threshold; run
    /// [`ControllerOptions::validate`] first.
    #[must_use]
    pub const fn from_options(options: &ControllerOptions) -> Self {
        Self::new(options.debounce_threshold, options.settle_delay_us)
    }

    /// Returns the last committed identity.
    #[must_use]
    pub const fn stable(&self) -> ButtonId {
        self.stable
    }

    /// Reads one sample and returns the press event, if any.
    ///
    /// When the reading disagrees with the stable identity the line is given
    /// the settling delay before the read is counted.
    pub fn poll<A, D>(&mut self, input: &mut A, delay: &mut D) -> ButtonId
    where
        A: AnalogInput,
        D: DelayNs,
    {
        let decoded = decode(input.read_raw());
        if decoded != self.stable && self.settle_delay_us > 0 {
            delay.delay_us(self.settle_delay_us);
        }
        self.feed(decoded)
    }

    /// Counts one decoded identity and returns the press event, if any.
    pub fn feed(&mut self, decoded: ButtonId) -> ButtonId {
        if decoded == self.stable {
            self.candidate = decoded;
            self.run = 0;
            return ButtonId::None;
        }

        if decoded != self.candidate {
            self.candidate = decoded;
            self.run = 0;
        }

        self.run = (self.run + 1).min(self.threshold);
        if self.run < self.threshold {
            return ButtonId::None;
        }

        self.stable = decoded;
        self.run = 0;
        debug!("button committed: {}", decoded);
        decoded
    }
}
