//! Minimal keypad wiring: maps a string of key characters to button
//! events and prints every display update, the way a UI layer would.
//!
//! ```text
//! cargo run --example keypad -- "12+34="
//! ```

use tenkey::{ButtonEvent, CalculatorEngine, Operator};

fn key_to_event(key: char) -> Option<ButtonEvent> {
    match key {
        '0'..='9' => Some(ButtonEvent::Digit(key)),
        '.' => Some(ButtonEvent::Decimal),
        '+' | '-' | '*' | '/' => Operator::from_symbol(key).map(ButtonEvent::Operator),
        '=' => Some(ButtonEvent::Evaluate),
        'c' | 'C' => Some(ButtonEvent::Clear),
        '~' => Some(ButtonEvent::SignFlip),
        '%' => Some(ButtonEvent::Percent),
        _ => None,
    }
}

fn main() {
    let script = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "1+1*2-1=".to_string());

    let mut engine = CalculatorEngine::new();
    engine.register_display_callback(|display| {
        println!("display: {}", display.unwrap_or("0"));
    });

    for key in script.chars() {
        match key_to_event(key) {
            Some(event) => {
                if let Err(error) = engine.handle(event) {
                    eprintln!("engine error on '{key}': {error}");
                }
            }
            None => eprintln!("ignoring unknown key '{key}'"),
        }
    }

    println!(
        "final: {} ({} operation(s) applied)",
        engine.current_display().unwrap_or("0"),
        engine.history().len()
    );
}
