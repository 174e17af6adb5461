use super::{DecodeError, DecodeResult, CARRY_BIT, MASK};

/// Reads one value from the front of `buf`, returning it along with the
/// number of bytes it occupied.
///
/// Error positions are relative to the start of `buf`. An empty `buf` is an
/// [`DecodeError::IncompleteSequence`], since there is no value to read.
pub fn read_vlq(buf: &[u8]) -> DecodeResult<(u32, usize)> {
    // wide enough that one more group past u32::MAX can't wrap
    let mut value: u64 = 0;

    for (i, b) in buf.iter().enumerate() {
        value = (value << 7) | (b & MASK) as u64;
        if value > u32::MAX as u64 {
            return Err(DecodeError::Overflow { pos: 0 });
        }
        if b & CARRY_BIT == 0 {
            return Ok((value as u32, i + 1));
        }
    }

    Err(DecodeError::IncompleteSequence { pos: 0 })
}

/// Reads consecutive values out of a complete byte slice.
///
/// `source_start` is the offset of `source` within whatever larger buffer it
/// was cut from; it is added to the positions reported in errors.
pub struct VlqReader<'a> {
    source: &'a [u8],
    source_start: usize,
    offset: usize,
}

impl<'a> VlqReader<'a> {
    pub fn new(source: &'a [u8], source_start: usize) -> VlqReader<'a> {
        VlqReader {
            source,
            source_start,
            offset: 0,
        }
    }

    /// Offset of the next unread byte, relative to `source`.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.source[self.offset..]
    }

    pub fn read_all(&mut self) -> DecodeResult<Vec<u32>> {
        // one terminating byte per value
        let count = self
            .remaining()
            .iter()
            .filter(|b| *b & CARRY_BIT == 0)
            .count();

        let mut values = Vec::with_capacity(count);
        while let Some(value) = self.read_next()? {
            values.push(value);
        }
        Ok(values)
    }

    /// Reads the next value, or `None` once the source is exhausted.
    ///
    /// On error the reader does not advance.
    pub fn read_next(&mut self) -> DecodeResult<Option<u32>> {
        if self.offset == self.source.len() {
            return Ok(None);
        }

        let value_start = self.source_start + self.offset;
        let (value, len) =
            read_vlq(&self.source[self.offset..]).map_err(|err| err.at(value_start))?;
        self.offset += len;
        Ok(Some(value))
    }
}

impl Iterator for VlqReader<'_> {
    type Item = DecodeResult<u32>;

    /// Yields each value in turn. After the first error the iterator is
    /// exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        match self.read_next() {
            Ok(Some(value)) => Some(Ok(value)),
            Ok(None) => None,
            Err(err) => {
                self.offset = self.source.len();
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn test_read_vlq_single_value() {
        assert_eq!(read_vlq(&[0x00]), Ok((0, 1)));
        assert_eq!(read_vlq(&[0x7F]), Ok((0x7F, 1)));
        assert_eq!(read_vlq(&[0xC0, 0x00]), Ok((0x2000, 2)));
        assert_eq!(read_vlq(&[0x8F, 0xFF, 0xFF, 0xFF, 0x7F]), Ok((u32::MAX, 5)));
    }

    #[test]
    pub fn test_read_vlq_stops_at_terminator() {
        assert_eq!(read_vlq(&[0x81, 0x00, 0xFF, 0xFF]), Ok((0x80, 2)));
    }

    #[test]
    pub fn test_read_vlq_errors() {
        assert_eq!(read_vlq(&[]), Err(DecodeError::IncompleteSequence { pos: 0 }));
        assert_eq!(read_vlq(&[0x80]), Err(DecodeError::IncompleteSequence { pos: 0 }));
        assert_eq!(
            read_vlq(&[0x90, 0x80, 0x80, 0x80, 0x00]),
            Err(DecodeError::Overflow { pos: 0 })
        );
    }

    #[test]
    pub fn test_read_vlq_accepts_leading_zero_groups() {
        assert_eq!(read_vlq(&[0x80, 0x80, 0x01]), Ok((1, 3)));
        let mut padded = vec![0x80; 16];
        padded.extend_from_slice(&[0x8F, 0xFF, 0xFF, 0xFF, 0x7F]);
        assert_eq!(read_vlq(&padded), Ok((u32::MAX, 21)));
    }

    #[test]
    pub fn test_reader_tracks_offset() {
        let source = [0x40, 0x81, 0x80, 0x00, 0x7F];
        let mut reader = VlqReader::new(&source, 0);

        assert_eq!(reader.read_next(), Ok(Some(0x40)));
        assert_eq!(reader.offset(), 1);
        assert_eq!(reader.read_next(), Ok(Some(0x4000)));
        assert_eq!(reader.offset(), 4);
        assert_eq!(reader.remaining(), &[0x7F]);
        assert_eq!(reader.read_next(), Ok(Some(0x7F)));
        assert_eq!(reader.read_next(), Ok(None));
        assert_eq!(reader.read_next(), Ok(None));
    }

    #[test]
    pub fn test_reader_error_positions() {
        let source = [0x00, 0xC0, 0x00, 0xFF, 0xFF];
        let mut reader = VlqReader::new(&source, 0);
        assert_eq!(
            reader.read_all(),
            Err(DecodeError::IncompleteSequence { pos: 3 })
        );

        // positions are shifted by source_start
        let mut reader = VlqReader::new(&source[1..], 1);
        assert_eq!(reader.read_next(), Ok(Some(0x2000)));
        assert_eq!(
            reader.read_next(),
            Err(DecodeError::IncompleteSequence { pos: 3 })
        );
        assert_eq!(reader.offset(), 2);
    }

    #[test]
    pub fn test_reader_iterator_stops_after_error() {
        let source = [0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0x02];
        let results: Vec<DecodeResult<u32>> = VlqReader::new(&source, 0).collect();
        assert_eq!(results, vec![Ok(1), Err(DecodeError::Overflow { pos: 1 })]);
    }

    #[test]
    pub fn test_reader_iterator_collects() {
        let source = [0xC8, 0xE8, 0x56, 0x00];
        let values: DecodeResult<Vec<u32>> = VlqReader::new(&source, 0).collect();
        assert_eq!(values, Ok(vec![0x12_3456, 0]));
    }
}
