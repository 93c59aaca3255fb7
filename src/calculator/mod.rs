//! Calculator core.
//!
//! This module provides:
//! - The input state machine that accumulates operands and applies operators
//! - The closed set of binary operators
//! - Pure display formatting with thousand separators
//! - Copying results to the clipboard

mod accumulator;
mod clipboard;
mod display;
mod operand;
mod operator;

pub use accumulator::{Accumulator, DECIMAL_SEPARATOR, Display};
pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use display::format_for_display;
pub use operand::{format_value, parse_operand};
pub use operator::{GlyphStyle, Operator};
