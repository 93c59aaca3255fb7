//! A keyboard-driven four-function calculator.
//!
//! The [`calculator::Accumulator`] is the input state machine; everything
//! else binds keys to it and renders its display.

pub mod calculator;
pub mod config;
pub mod error;
pub mod input;
pub mod session;

pub use error::{Error, Result};
