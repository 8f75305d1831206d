mod cursor;
mod note;

use tracing::debug;

use crate::error::ParseError;
use cursor::ByteCursor;
pub use note::Note;
use note::decode_layer_run;

/// A fully decoded NBS song: the header as saved by the editor, plus every
/// note in file-encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub version: i8,
    pub instrument_count: i8,
    pub length: i16,
    pub layer_count: i16,
    pub name: String,
    pub author: String,
    pub original_author: String,
    pub description: String,
    /// Ticks per second, stored as hundredths (e.g. 1000 = 10 t/s).
    pub tempo: i16,
    pub auto_saving: i8,
    pub auto_saving_duration: i8,
    pub time_signature: i8,
    pub minutes_spent: i32,
    pub left_clicks: i32,
    pub right_clicks: i32,
    pub note_blocks_added: i32,
    pub note_blocks_removed: i32,
    pub midi_filename: String,
    pub loop_enabled: bool,
    pub loop_count: i8,
    pub loop_start_tick: i16,
    pub notes: Vec<Note>,
}

impl Song {
    /// Decodes a whole NBS file from memory.
    ///
    /// Validates the zero marker, reads the header fields in their fixed
    /// order, collects every layer run, then runs the wait-shift pass so
    /// each note carries the delay to the note after it (the form the
    /// DoakMP encoder wants) instead of the gap before it.
    pub fn decode(bytes: &[u8]) -> Result<Song, ParseError> {
        let mut cur = ByteCursor::new(bytes);

        // New-format NBS leads with a zero short where the classic format
        // kept the song length.
        if cur.read_i16()? != 0 {
            return Err(ParseError::InvalidHeader);
        }

        let version = cur.read_i8()?;
        let instrument_count = cur.read_i8()?;
        let length = cur.read_i16()?;
        let layer_count = cur.read_i16()?;
        let name = cur.read_string()?;
        let author = cur.read_string()?;
        let original_author = cur.read_string()?;
        let description = cur.read_string()?;
        let tempo = cur.read_i16()?;
        let auto_saving = cur.read_i8()?;
        let auto_saving_duration = cur.read_i8()?;
        let time_signature = cur.read_i8()?;
        let minutes_spent = cur.read_i32()?;
        let left_clicks = cur.read_i32()?;
        let right_clicks = cur.read_i32()?;
        let note_blocks_added = cur.read_i32()?;
        let note_blocks_removed = cur.read_i32()?;
        let midi_filename = cur.read_string()?;
        let loop_enabled = cur.read_bool()?;
        let loop_count = cur.read_i8()?;
        let loop_start_tick = cur.read_i16()?;

        debug!(version, length, layer_count, tempo, "decoded NBS header");

        let mut notes = Vec::new();
        while let Some(run) = decode_layer_run(&mut cur)? {
            notes.extend(run);
        }
        shift_waits(&mut notes);

        debug!(notes = notes.len(), "decoded note stream");

        Ok(Song {
            version,
            instrument_count,
            length,
            layer_count,
            name,
            author,
            original_author,
            description,
            tempo,
            auto_saving,
            auto_saving_duration,
            time_signature,
            minutes_spent,
            left_clicks,
            right_clicks,
            note_blocks_added,
            note_blocks_removed,
            midi_filename,
            loop_enabled,
            loop_count,
            loop_start_tick,
            notes,
        })
    }
}

/// Re-anchors each note's wait to the note after it.
///
/// The wire stores "ticks since the previous event" on each note; DoakMP
/// wants "ticks until the next event" written next to the current note's
/// token. The last note gets 0.
fn shift_waits(notes: &mut [Note]) {
    for i in 0..notes.len() {
        notes[i].wait = match notes.get(i + 1) {
            Some(next) => next.wait,
            None => 0,
        };
    }
}
