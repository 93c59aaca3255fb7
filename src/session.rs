//! An interactive calculator session.
//!
//! Owns one accumulator for its whole lifetime and feeds it key scripts line
//! by line, the way a keyboard front-end would feed it key events.

use crate::Result;
use crate::calculator::{Accumulator, Display, copy_to_clipboard};
use crate::config::Config;
use crate::input::{action_for, parse_key_sequence};

const COPY_COMMAND: &str = ":copy";
const QUIT_COMMAND: &str = ":quit";

/// What the front-end should do after a line was handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the display.
    Render {
        display: Display,
        /// The last result produced by `=` on this line, if any.
        result: Option<String>,
    },
    /// The given text was copied to the clipboard.
    Copied(String),
    /// End the session.
    Quit,
}

pub struct Session {
    acc: Accumulator,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            acc: Accumulator::new(),
            config,
        }
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.acc
    }

    pub fn display(&self) -> Display {
        self.acc.display(self.config.display.glyphs)
    }

    /// Handle one line of input: a command or a key script.
    ///
    /// On a script error the accumulator is left unchanged.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        match line.trim() {
            QUIT_COMMAND => return Ok(Outcome::Quit),
            COPY_COMMAND => return self.copy_current(),
            _ => {}
        }

        let result = self.apply_script(line)?;

        if let Some(text) = self.result_to_copy(result.as_deref())
            && let Err(err) = copy_to_clipboard(text)
        {
            tracing::warn!(%err, "could not copy result");
        }

        Ok(Outcome::Render {
            display: self.display(),
            result,
        })
    }

    /// Apply a key script and return the last result produced by `=`.
    ///
    /// Only an `=` that actually resolves an operation counts.
    fn apply_script(&mut self, script: &str) -> Result<Option<String>> {
        let actions = parse_key_sequence(script)?
            .into_iter()
            .filter_map(action_for);

        let mut result = None;
        for action in actions {
            let pending = self.acc.operator().is_some();
            action.apply(&mut self.acc);
            if action.is_equals() && pending && self.acc.operator().is_none() {
                result = Some(self.acc.current_operand().to_string());
            }
        }

        Ok(result)
    }

    /// The text to copy after a line, given the result it produced.
    fn result_to_copy<'a>(&self, result: Option<&'a str>) -> Option<&'a str> {
        result.filter(|_| self.config.clipboard.copy_on_equals)
    }

    fn copy_current(&self) -> Result<Outcome> {
        let text = self.acc.current_operand();
        if text.is_empty() {
            return Ok(Outcome::Render {
                display: self.display(),
                result: None,
            });
        }

        copy_to_clipboard(text)?;
        Ok(Outcome::Copied(text.to_string()))
    }
}

/// Render a display as two text lines.
pub fn render_text(display: &Display) -> String {
    format!("{}\n{}", display.previous, display.current)
}
