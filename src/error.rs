use thiserror::Error;

use crate::calculator::ClipboardError;
use crate::input::KeymapError;

/// Any error the calculator front-end can report.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Keymap(#[from] KeymapError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
