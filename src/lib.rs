//! nbs2doakmp converts note-block-song (NBS) files into DoakMP macros.
//!
//! The core is a pure pipeline over an in-memory buffer: [`decode`] parses
//! the NBS container into a [`Song`], [`encode`] renders it as DoakMP
//! text. File reading and the window live outside the core (see
//! [`ui::ConverterApp`]).

pub mod doakmp;
mod error;
mod nbs;
pub mod ui;

pub use error::ParseError;
pub use nbs::{Note, Song};

/// Decodes an NBS file from memory.
pub fn decode(bytes: &[u8]) -> Result<Song, ParseError> {
    Song::decode(bytes)
}

/// Renders a decoded song as a DoakMP macro string.
pub fn encode(song: &Song, want_comments: bool) -> String {
    doakmp::encode(song, want_comments)
}
