//! DoakMP text encoder.
//!
//! Each note becomes one macro token: an instrument letter, a pitch-class
//! letter, an octave digit, and (when the note waits before the next one)
//! a run of duration digits. The whole song ends with a single `#`, the
//! terminator the DoakMP player scans for.

use crate::nbs::{Note, Song};

/// DoakMP symbol per NBS instrument, in table-index order. The index is
/// the wire value, so the order must not change.
pub(crate) const INSTRUMENTS: [char; 16] = [
    'z', 'b', 'd', 's', 'h', '5', 'f', 'g', 'c', 'x', 'i', 'k', 'p', 't', 'j', 'n',
];

/// Pitch-class symbols, chromatic from F# (NBS key 0). Uppercase marks the
/// sharp of the preceding lowercase letter.
const KEYS: [char; 12] = ['a', 'A', 'b', 'c', 'C', 'd', 'D', 'e', 'f', 'F', 'g', 'G'];

/// Encodes a whole song as one DoakMP macro string.
///
/// Notes are emitted in decoded order; `comments` wraps each duration in
/// parentheses and puts a `.` after every token, which the player ignores
/// but makes the macro readable.
///
/// Precondition on key range: `note.key + 12` must be non-negative (true
/// for any file an NBS editor writes). Keys outside the playable range
/// are not rejected and yield a meaningless octave digit, same as the
/// tool this replaces.
pub fn encode(song: &Song, comments: bool) -> String {
    let mut out = String::new();
    for note in &song.notes {
        encode_note(note, song, comments, &mut out);
    }
    out.push('#');
    out
}

fn encode_note(note: &Note, song: &Song, comments: bool, out: &mut String) {
    // Instrument and pitch class are straight table lookups.
    out.push(INSTRUMENTS[note.instrument as usize]);
    let k = i32::from(note.key) + 12;
    out.push(KEYS[(k % 12) as usize]);

    // Octave digit. Truncating division, single digit.
    out.push_str(&(((k - 3) / 12) % 10).to_string());

    // Wait, rescaled from song ticks to the player's fixed tick rate.
    // The duration digit of a token is 0-9, so longer waits become a run
    // of 9s (each 9 also costs 9) with the remainder as the last digit.
    let mut amt = (f64::from(note.wait) * (2000.0 / f64::from(song.tempo))) as i32;
    if amt != 0 {
        if comments {
            out.push('(');
        }
        while amt >= 10 {
            out.push('9');
            amt -= 9;
        }
        out.push_str(&amt.to_string());
        if comments {
            out.push(')');
        }
    }

    if comments {
        out.push('.');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(wait: u16, instrument: u8, key: i8) -> Note {
        Note {
            wait,
            instrument,
            key,
            velocity: 100,
            panning: 100,
            pitch: 0,
        }
    }

    fn song(tempo: i16, notes: Vec<Note>) -> Song {
        Song {
            version: 5,
            instrument_count: 16,
            length: 0,
            layer_count: 0,
            name: String::new(),
            author: String::new(),
            original_author: String::new(),
            description: String::new(),
            tempo,
            auto_saving: 0,
            auto_saving_duration: 1,
            time_signature: 4,
            minutes_spent: 0,
            left_clicks: 0,
            right_clicks: 0,
            note_blocks_added: 0,
            note_blocks_removed: 0,
            midi_filename: String::new(),
            loop_enabled: false,
            loop_count: 0,
            loop_start_tick: 0,
            notes,
        }
    }

    #[test]
    fn empty_song_is_just_the_terminator() {
        assert_eq!(encode(&song(1000, vec![]), false), "#");
        assert_eq!(encode(&song(1000, vec![]), true), "#");
    }

    #[test]
    fn instrument_and_pitch_tables() {
        // Instrument 0 is 'z'; key 33 gives k = 45, 45 % 12 = 9 -> 'F'.
        let s = song(1000, vec![note(0, 0, 33)]);
        assert_eq!(encode(&s, false), "zF3#");

        // k % 12 == 0 maps to 'a' (key 0 is F#, the table's origin).
        let s = song(1000, vec![note(0, 15, 0)]);
        assert_eq!(encode(&s, false), "na0#");
    }

    #[test]
    fn octave_digit_uses_truncating_division() {
        for (key, expected) in [(0i8, "na0#"), (3, "nc1#"), (33, "nF3#"), (57, "nF5#")] {
            let s = song(1000, vec![note(0, 15, key)]);
            assert_eq!(encode(&s, false), expected, "key {key}");
        }
    }

    #[test]
    fn wait_three_ticks_at_tempo_1000() {
        // 3 * 2000 / 1000 = 6, a single digit, no 9-run.
        let s = song(1000, vec![note(3, 0, 33)]);
        assert_eq!(encode(&s, false), "zF36#");
        assert_eq!(encode(&s, true), "zF3(6).#");
    }

    #[test]
    fn long_waits_split_into_runs_of_nines() {
        // amt = 23: two 9s (worth 9 each) then the remainder 5.
        let s = song(2000, vec![note(23, 0, 33)]);
        assert_eq!(encode(&s, false), "zF3995#");
        assert_eq!(encode(&s, true), "zF3(995).#");
    }

    #[test]
    fn zero_wait_emits_no_duration_at_all() {
        let s = song(1000, vec![note(0, 0, 33)]);
        assert_eq!(encode(&s, true), "zF3.#");
    }

    #[test]
    fn tempo_scaling_truncates_toward_zero() {
        // 1 * 2000 / 1500 = 1.33.. -> 1.
        let s = song(1500, vec![note(1, 0, 33)]);
        assert_eq!(encode(&s, false), "zF31#");
    }

    #[test]
    fn notes_concatenate_with_one_terminator() {
        // Tokens: 'z' F 3 | 'c' b 3 wait 6 | 't' b 2.
        let s = song(1000, vec![note(0, 0, 33), note(3, 8, 38), note(0, 13, 26)]);
        let plain = encode(&s, false);
        assert_eq!(plain, "zF3cb36tb2#");
        assert_eq!(plain.matches('#').count(), 1);
        assert_eq!(encode(&s, true), "zF3.cb3(6).tb2.#");
    }
}
