use crate::doakmp::INSTRUMENTS;
use crate::error::ParseError;
use crate::nbs::cursor::ByteCursor;

/// One sounded note event.
///
/// After [`Song::decode`](crate::Song::decode) finishes, `wait` holds the
/// tick count until the *next* event fires (the wait-shift pass re-anchors
/// it); during decode it briefly holds the tick gap since the previous
/// event, as stored on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub wait: u16,
    /// Index into the fixed 16-entry instrument table, validated at decode.
    pub instrument: u8,
    /// NBS pitch byte, 0 = F#.
    pub key: i8,
    pub velocity: i8,
    pub panning: u8,
    pub pitch: i16,
}

/// Decodes the note records of a single occupied tick (one "layer run").
///
/// NBS stores notes as a sparse tick-by-layer grid: a 16-bit jump to the
/// next occupied tick, then for each populated layer a 16-bit layer jump
/// followed by the note fields, with a zero layer jump closing the run.
///
/// Returns `Ok(None)` when the leading tick jump is zero, which is the
/// stream's own end marker: no more ticks anywhere in the file. That is
/// the only termination signal — an empty run (`Ok(Some(vec![]))`) is
/// representable but never means end-of-stream.
pub(super) fn decode_layer_run(cur: &mut ByteCursor) -> Result<Option<Vec<Note>>, ParseError> {
    let mut tick_jump = cur.read_i16()?;
    if tick_jump == 0 {
        return Ok(None);
    }

    let mut notes = Vec::new();
    let mut layer = -1i32;
    loop {
        let layer_jump = cur.read_i16()?;
        if layer_jump == 0 {
            break;
        }
        // Only the ordering matters; the layer index itself does not feed
        // into any note field.
        layer += i32::from(layer_jump);

        let instrument = cur.read_u8()?;
        let key = cur.read_i8()?;
        let velocity = cur.read_i8()?;
        let panning = cur.read_u8()?;
        let pitch = cur.read_i16()?;

        if instrument as usize >= INSTRUMENTS.len() {
            return Err(ParseError::InvalidInstrument(instrument));
        }

        notes.push(Note {
            wait: tick_jump as u16,
            instrument,
            key,
            velocity,
            panning,
            pitch,
        });
        // The tick gap belongs to the first note of the run only.
        tick_jump = 0;
    }
    Ok(Some(notes))
}
