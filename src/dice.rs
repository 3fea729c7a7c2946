//! Dice roller mode.
//!
//! The screen has three fields: how many dice, which kind, and a Roll
//! button. Left/Right move the focus between fields (wrapping); Up, Down and
//! Select change the focused value, except on Roll where Select rolls.
//!
//! ```text
//! row 0: >2 >d20  >Roll      marks at cols 0, 3, 10
//! row 1: 13 4 =17            last roll
//! ```

use core::fmt::Write;

use heapless::{String, Vec};

use crate::card::Card;
use crate::display::{COLS, Frame};
use crate::input::ButtonId;
use crate::nav::Cyclic;
use crate::random::RandomSource;

/// Most dice rolled at once.
pub const MAX_DICE: usize = 4;

/// Columns of the focus marks for count, kind and roll.
const FIELD_COLS: [usize; 3] = [0, 3, 10];

/// What gets rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiceKind {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twenty-sided die.
    D20,
    /// A playing card with a suit.
    Card,
}

impl DiceKind {
    /// All kinds in selector order.
    pub const ALL: [Self; 6] = [
        Self::D4,
        Self::D6,
        Self::D8,
        Self::D10,
        Self::D20,
        Self::Card,
    ];

    /// Number of faces, or `None` for cards.
    #[must_use]
    pub const fn sides(self) -> Option<u8> {
        match self {
            Self::D4 => Some(4),
            Self::D6 => Some(6),
            Self::D8 => Some(8),
            Self::D10 => Some(10),
            Self::D20 => Some(20),
            Self::Card => None,
        }
    }

    /// Label shown in the kind field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::D4 => "d4",
            Self::D6 => "d6",
            Self::D8 => "d8",
            Self::D10 => "d10",
            Self::D20 => "d20",
            Self::Card => "Card",
        }
    }
}

/// Field that has focus on the dice screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiceField {
    /// Number of dice.
    Count,
    /// Kind of die.
    Kind,
    /// Roll button.
    Roll,
}

impl DiceField {
    const ALL: [Self; 3] = [Self::Count, Self::Kind, Self::Roll];
}

/// A confirmed roll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiceRequest {
    /// Number of dice, `1..=MAX_DICE`.
    pub count: u8,
    /// What to roll.
    pub kind: DiceKind,
}

impl DiceRequest {
    /// Rolls the request.
    pub fn roll<R: RandomSource>(self, rng: &mut R) -> Roll {
        let mut values = Vec::new();
        for _ in 0..self.count.min(MAX_DICE as u8) {
            let value = match self.kind.sides() {
                Some(sides) => RollValue::Face(rng.random_in_range(1, sides + 1)),
                None => RollValue::Card(Card::random_with_suit(rng)),
            };
            // Bounded by MAX_DICE above.
            let _ = values.push(value);
        }
        Roll { values }
    }
}

/// One rolled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RollValue {
    /// Face of a die.
    Face(u8),
    /// Drawn card.
    Card(Card),
}

/// Result of one roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll {
    values: Vec<RollValue, MAX_DICE>,
}

impl Roll {
    /// Rolled values in order.
    #[must_use]
    pub fn values(&self) -> &[RollValue] {
        &self.values
    }

    /// Sum of the faces, or `None` if cards were drawn.
    #[must_use]
    pub fn total(&self) -> Option<u16> {
        self.values.iter().try_fold(0u16, |sum, value| match value {
            RollValue::Face(face) => Some(sum + u16::from(*face)),
            RollValue::Card(_) => None,
        })
    }

    fn render(&self) -> String<COLS> {
        let mut line: String<COLS> = String::new();
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                let _ = line.push(' ');
            }
            let _ = match value {
                RollValue::Face(face) => write!(line, "{face}"),
                RollValue::Card(card) => {
                    let suit = card.suit.map_or(' ', |suit| suit.letter());
                    write!(line, "{}{suit}", card.label())
                }
            };
        }
        if self.values.len() > 1 {
            if let Some(total) = self.total() {
                let _ = write!(line, " ={total}");
            }
        }
        line
    }
}

/// Focus and values of the dice screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiceForm {
    field: Cyclic,
    count: Cyclic,
    kind: Cyclic,
}

impl Default for DiceForm {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceForm {
    /// One d4, focus on the count field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            field: Cyclic::new(DiceField::ALL.len() as u8 - 1),
            count: Cyclic::new(MAX_DICE as u8 - 1),
            kind: Cyclic::new(DiceKind::ALL.len() as u8 - 1),
        }
    }

    /// Field with focus.
    #[must_use]
    pub const fn field(&self) -> DiceField {
        DiceField::ALL[self.field.index() as usize]
    }

    /// Request described by the current field values.
    #[must_use]
    pub const fn request(&self) -> DiceRequest {
        DiceRequest {
            count: self.count.index() + 1,
            kind: DiceKind::ALL[self.kind.index() as usize],
        }
    }

    /// Applies one event; returns the request when Select hits Roll.
    pub const fn handle_event(&mut self, event: ButtonId) -> Option<DiceRequest> {
        match event {
            ButtonId::Left => self.field.decrement(),
            ButtonId::Right => self.field.increment(),
            ButtonId::None => {}
            ButtonId::Up | ButtonId::Down | ButtonId::Select => match self.field() {
                DiceField::Count => {
                    self.count.handle_event(event);
                }
                DiceField::Kind => {
                    self.kind.handle_event(event);
                }
                DiceField::Roll => {
                    if matches!(event, ButtonId::Select) {
                        return Some(self.request());
                    }
                }
            },
        }
        None
    }

    fn render(&self, frame: &mut Frame) {
        let request = self.request();
        let mut count: String<1> = String::new();
        let _ = write!(count, "{}", request.count);

        frame.put(FIELD_COLS[0] + 1, 0, &count);
        frame.put(FIELD_COLS[1] + 1, 0, request.kind.label());
        frame.put(FIELD_COLS[2] + 1, 0, "Roll");
        frame.put(FIELD_COLS[self.field.index() as usize], 0, ">");
    }
}

/// Dice roller app.
#[derive(Debug, Clone)]
pub struct DiceRoller<R> {
    rng: R,
    form: DiceForm,
    last: Option<Roll>,
}

impl<R: RandomSource> DiceRoller<R> {
    /// Creates a roller with the default form and no roll yet.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self {
            rng,
            form: DiceForm::new(),
            last: None,
        }
    }

    /// Applies one button event; returns the new roll if one was made.
    pub fn handle_event(&mut self, event: ButtonId) -> Option<&Roll> {
        let request = self.form.handle_event(event)?;
        let roll = request.roll(&mut self.rng);
        debug!("rolled {} x {}", request.count, request.kind);
        self.last = Some(roll);
        self.last.as_ref()
    }
}

impl<R> DiceRoller<R> {
    /// Current form state.
    pub const fn form(&self) -> &DiceForm {
        &self.form
    }

    /// Most recent roll.
    pub const fn last_roll(&self) -> Option<&Roll> {
        self.last.as_ref()
    }

    /// Renders the form and the last roll.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let mut frame = Frame::blank();
        self.form.render(&mut frame);
        if let Some(roll) = &self.last {
            frame.put(0, 1, &roll.render());
        }
        frame
    }
}
