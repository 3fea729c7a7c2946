//! Voltage-window classification.

use super::ButtonId;

/// Half-width of every calibration window, in ADC counts.
pub const TOLERANCE: u16 = 10;

/// Calibration points of the resistor ladder, in ADC counts.
pub const CALIBRATION: [(ButtonId, u16); 5] = [
    (ButtonId::Right, 0),
    (ButtonId::Up, 154),
    (ButtonId::Down, 392),
    (ButtonId::Left, 626),
    (ButtonId::Select, 972),
];

/// Classifies a raw sample.
///
/// Each button owns the open window `point ± TOLERANCE`; Right sits on the
/// rail so its window is just `sample < TOLERANCE`. Anything else is `None`.
///
/// ```
/// use cardpad::{ButtonId, decode};
///
/// assert_eq!(decode(3), ButtonId::Right);
/// assert_eq!(decode(400), ButtonId::Down);
/// assert_eq!(decode(500), ButtonId::None);
/// ```
#[must_use]
pub fn decode(sample: u16) -> ButtonId {
    CALIBRATION
        .iter()
        .find(|&&(_, point)| sample.abs_diff(point) < TOLERANCE)
        .map_or(ButtonId::None, |&(button, _)| button)
}
