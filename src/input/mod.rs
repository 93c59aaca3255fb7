//! Input binding between key presses and the calculator.
//!
//! This module provides:
//! - The discrete actions the calculator understands
//! - Mapping of key presses (including operator glyph variants) to actions
//! - Parsing of textual key scripts

mod action;
mod keys;

pub use action::Action;
pub use keys::{Key, KeyPress, KeymapError, action_for, parse_key_sequence};

use crate::calculator::Accumulator;

/// Parse a key script and apply every bound key to the accumulator.
///
/// Returns the actions that were applied, in order. Unbound keys are skipped.
pub fn run_script(acc: &mut Accumulator, script: &str) -> Result<Vec<Action>, KeymapError> {
    let actions: Vec<Action> = parse_key_sequence(script)?
        .into_iter()
        .filter_map(action_for)
        .collect();

    for &action in &actions {
        action.apply(acc);
    }

    Ok(actions)
}
