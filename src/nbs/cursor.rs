use crate::error::ParseError;

/// Sequential little-endian reader over an in-memory byte buffer.
///
/// Every read advances the offset by the exact field width and fails with
/// [`ParseError::UnexpectedEndOfInput`] if the buffer is too short. There
/// is no recovery: the error propagates up to the song decoder.
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], ParseError> {
        let end = self
            .pos
            .checked_add(N)
            .filter(|&end| end <= self.data.len())
            .ok_or(ParseError::UnexpectedEndOfInput)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8, ParseError> {
        Ok(self.take::<1>()?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8, ParseError> {
        Ok(self.take::<1>()?[0] as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16, ParseError> {
        Ok(i16::from_le_bytes(self.take::<2>()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, ParseError> {
        Ok(i32::from_le_bytes(self.take::<4>()?))
    }

    pub fn read_bool(&mut self) -> Result<bool, ParseError> {
        Ok(self.read_u8()? != 0)
    }

    /// Length-prefixed string: a 4-byte signed length, then that many
    /// bytes, each widened `u8 -> char` as-is. NBS strings are not UTF-8;
    /// widening keeps the header text byte-for-byte reproducible. A
    /// non-positive length yields the empty string.
    pub fn read_string(&mut self) -> Result<String, ParseError> {
        let len = self.read_i32()?;
        let mut s = String::new();
        for _ in 0..len.max(0) {
            s.push(self.read_u8()? as char);
        }
        Ok(s)
    }
}
