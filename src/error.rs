use thiserror::Error;

/// Everything that can go wrong while decoding an NBS buffer.
///
/// Decoding is all-or-nothing: any of these aborts the whole conversion,
/// there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The leading 2-byte marker was not zero. Classic-format NBS files
    /// (pre-OpenNBS) put the song length here instead.
    #[error("Invalid file! (Try opening it with OpenNBS and saving it again.)")]
    InvalidHeader,

    /// The buffer ran out in the middle of a field.
    #[error("Unexpected EOF.")]
    UnexpectedEndOfInput,

    /// A note referenced an instrument outside the fixed 16-entry table.
    #[error("Custom instruments not allowed (instrument index {0}).")]
    InvalidInstrument(u8),
}
