//! Controller configuration options.

use crate::error::OptionsError;

/// Consecutive matching reads needed to commit a button press.
pub const DEFAULT_DEBOUNCE_THRESHOLD: u8 = 6;

/// Largest accepted debounce threshold.
pub const MAX_DEBOUNCE_THRESHOLD: u8 = 32;

/// Settling delay before counting a changed reading, in microseconds.
pub const DEFAULT_SETTLE_DELAY_US: u32 = 1_000;

/// Input timing options for a [`Controller`](crate::Controller).
///
/// Game rules and the decoder windows are fixed; only the input timing is
/// tunable, since it depends on the polling rate of the board.
///
/// ```
/// use cardpad::ControllerOptions;
///
/// let options = ControllerOptions::default()
///     .with_debounce_threshold(8)
///     .with_settle_delay_us(500);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerOptions {
    /// Consecutive matching reads before a press is reported.
    pub debounce_threshold: u8,
    /// Delay before counting a reading that differs from the stable button.
    /// 0 disables it.
    pub settle_delay_us: u32,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            debounce_threshold: DEFAULT_DEBOUNCE_THRESHOLD,
            settle_delay_us: DEFAULT_SETTLE_DELAY_US,
        }
    }
}

impl ControllerOptions {
    /// Sets the debounce threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpad::ControllerOptions;
    ///
    /// let options = ControllerOptions::default().with_debounce_threshold(4);
    /// assert_eq!(options.debounce_threshold, 4);
    /// ```
    #[must_use]
    pub const fn with_debounce_threshold(mut self, threshold: u8) -> Self {
        self.debounce_threshold = threshold;
        self
    }

    /// Sets the settling delay.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpad::ControllerOptions;
    ///
    /// let options = ControllerOptions::default().with_settle_delay_us(0);
    /// assert_eq!(options.settle_delay_us, 0);
    /// ```
    #[must_use]
    pub const fn with_settle_delay_us(mut self, delay_us: u32) -> Self {
        self.settle_delay_us = delay_us;
        self
    }

    /// Checks that the options describe a usable debouncer.
    ///
    /// # Errors
    ///
    /// Returns an error if the debounce threshold is zero or above
    /// [`MAX_DEBOUNCE_THRESHOLD`].
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.debounce_threshold == 0 {
            return Err(OptionsError::ZeroDebounceThreshold);
        }
        if self.debounce_threshold > MAX_DEBOUNCE_THRESHOLD {
            return Err(OptionsError::DebounceThresholdTooHigh {
                max: MAX_DEBOUNCE_THRESHOLD,
            });
        }
        Ok(())
    }
}
