//! Terminal simulation of the keypad shield.
//!
//! Run `cargo run --example terminal` for blackjack or append `-- dice` for
//! the dice roller. Keys: w/a/s/d for Up/Left/Down/Right, e (or an empty
//! line) for Select, q to quit.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardpad::input::decoder::CALIBRATION;
use cardpad::{
    AnalogInput, App, ButtonId, Controller, ControllerOptions, DiceRoller, Flow, Game,
    SeededRandom, TextGrid,
};
use embedded_hal::delay::DelayNs;

/// Idle level of the ladder (no button).
const IDLE: u16 = 1023;

struct Ladder {
    level: u16,
}

impl AnalogInput for Ladder {
    fn read_raw(&mut self) -> u16 {
        self.level
    }
}

struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(core::time::Duration::from_nanos(u64::from(ns)));
    }
}

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let rng = SeededRandom::new(seed);
    let options = ControllerOptions::default();

    if std::env::args().nth(1).as_deref() == Some("dice") {
        run(&options, DiceRoller::new(rng));
    } else {
        run(&options, Game::new(rng));
    }
}

fn run<P: App>(options: &ControllerOptions, app: P) {
    let ladder = Ladder { level: IDLE };
    let Ok(mut controller) = Controller::new(options, ladder, StdDelay, TextGrid::new(), app)
    else {
        println!("Invalid options.");
        return;
    };

    controller.tick();
    loop {
        print_grid(controller.display());

        let Some(button) = prompt_button() else {
            println!("Goodbye.");
            return;
        };

        // Hold long enough to commit, then release so the next press fires.
        let mut flow = Flow::Continue;
        for level in [level_of(button), IDLE] {
            controller.input_mut().level = level;
            for _ in 0..=options.debounce_threshold {
                if controller.tick() == Flow::Exit {
                    flow = Flow::Exit;
                }
            }
        }

        if flow == Flow::Exit {
            print_grid(controller.display());
            println!("Back to the menu.");
            return;
        }
    }
}

fn level_of(button: ButtonId) -> u16 {
    CALIBRATION
        .iter()
        .find(|(id, _)| *id == button)
        .map_or(IDLE, |&(_, level)| level)
}

fn prompt_button() -> Option<ButtonId> {
    loop {
        print!("key (w/a/s/d/e, q): ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).unwrap_or(0) == 0 {
            return None;
        }

        match input.trim().to_lowercase().as_str() {
            "w" => return Some(ButtonId::Up),
            "s" => return Some(ButtonId::Down),
            "a" => return Some(ButtonId::Left),
            "d" => return Some(ButtonId::Right),
            "e" | "" => return Some(ButtonId::Select),
            "q" | "quit" => return None,
            _ => println!("Unknown key."),
        }
    }
}

fn print_grid(grid: &TextGrid) {
    println!("+----------------+");
    println!("|{}|", grid.row(0));
    println!("|{}|", grid.row(1));
    println!("+----------------+");
}
