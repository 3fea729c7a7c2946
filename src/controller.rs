//! Main-loop wiring: analog keypad in, character display out.
//!
//! One [`Controller::tick`] is one debouncer poll, at most one app
//! transition, and a diffed redraw. Nothing blocks except the debouncer's
//! settling delay, so "press Select to continue" screens are just stages the
//! app sits in while ticks keep polling.

use embedded_hal::delay::DelayNs;

use crate::dice::DiceRoller;
use crate::display::{CharDisplay, Frame, Screen};
use crate::error::OptionsError;
use crate::game::Game;
use crate::input::{AnalogInput, ButtonId, Debouncer};
use crate::options::ControllerOptions;
use crate::random::RandomSource;

/// Whether the active app keeps the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Flow {
    /// Keep ticking.
    Continue,
    /// Hand control back to the menu.
    Exit,
}

/// A mode that reacts to button events and can draw itself.
pub trait App {
    /// Applies one debounced button event.
    fn handle_event(&mut self, event: ButtonId) -> Flow;

    /// Renders the current state.
    fn frame(&self) -> Frame;
}

impl<R: RandomSource> App for Game<R> {
    fn handle_event(&mut self, event: ButtonId) -> Flow {
        Self::handle_event(self, event)
    }

    fn frame(&self) -> Frame {
        Self::frame(self)
    }
}

impl<R: RandomSource> App for DiceRoller<R> {
    fn handle_event(&mut self, event: ButtonId) -> Flow {
        Self::handle_event(self, event);
        Flow::Continue
    }

    fn frame(&self) -> Frame {
        Self::frame(self)
    }
}

/// Polls the keypad, drives one app, and keeps the display in sync.
pub struct Controller<A, T, D, P> {
    input: A,
    delay: T,
    display: D,
    debouncer: Debouncer,
    screen: Screen,
    app: P,
}

impl<A, T, D, P> Controller<A, T, D, P>
where
    A: AnalogInput,
    T: DelayNs,
    D: CharDisplay,
    P: App,
{
    /// Creates a controller around the collaborators and the app.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation.
    pub fn new(
        options: &ControllerOptions,
        input: A,
        delay: T,
        display: D,
        app: P,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            input,
            delay,
            display,
            debouncer: Debouncer::from_options(options),
            screen: Screen::new(),
            app,
        })
    }

    /// Runs one poll-transition-redraw cycle.
    pub fn tick(&mut self) -> Flow {
        let event = self.debouncer.poll(&mut self.input, &mut self.delay);
        let flow = if event.is_pressed() {
            self.app.handle_event(event)
        } else {
            Flow::Continue
        };

        self.screen.present(&self.app.frame(), &mut self.display);
        flow
    }

    /// Ticks until the app exits.
    pub fn run(&mut self) {
        while self.tick() == Flow::Continue {}
    }

    /// Forces the next tick to redraw the whole display.
    pub fn invalidate(&mut self) {
        self.screen.invalidate();
    }
}

impl<A, T, D, P> Controller<A, T, D, P> {
    /// Returns the app.
    pub const fn app(&self) -> &P {
        &self.app
    }

    /// Returns the display.
    pub const fn display(&self) -> &D {
        &self.display
    }

    /// Returns the analog input, e.g. to steer a simulated ladder.
    pub const fn input_mut(&mut self) -> &mut A {
        &mut self.input
    }

    /// Releases the collaborators and the app.
    pub fn into_parts(self) -> (A, T, D, P) {
        (self.input, self.delay, self.display, self.app)
    }
}
