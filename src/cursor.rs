use crate::{Error, ErrorKind};

#[inline]
fn get_split<const N: usize>(data: &[u8]) -> Option<([u8; N], &[u8])> {
    let (head, rest) = data.split_first_chunk::<N>()?;
    Some((*head, rest))
}

/// Bounds-checked view over the unread portion of a save buffer
///
/// A cursor owns the remaining unread slice and shrinks it on every read.
/// Nested regions are carved out with [`read_frame`](Cursor::read_frame),
/// which hands back an independent cursor over exactly the framed bytes, so
/// sibling regions never alias.
///
/// ```rust
/// use moltke::Cursor;
///
/// let mut cursor = Cursor::new(&[0x00, 0x00, 0x00, 0x2a, 0xff]);
/// assert_eq!(cursor.read_u32().unwrap(), 42);
/// assert_eq!(cursor.remaining(), 1);
/// ```
#[derive(Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    original_length: usize,
    base: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over a fully loaded save buffer
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Cursor {
            data,
            original_length: data.len(),
            base: 0,
        }
    }

    #[inline]
    fn framed(data: &'a [u8], base: usize) -> Self {
        Cursor {
            data,
            original_length: data.len(),
            base,
        }
    }

    /// Byte offset consumed so far, relative to the root buffer
    ///
    /// Cursors carved out of a parent keep counting from the parent's
    /// position, so errors at any nesting depth report a root offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.base + (self.original_length - self.data.len())
    }

    /// Number of unread bytes
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn truncated(&self) -> Error {
        Error::new(ErrorKind::Truncated {
            offset: self.position(),
        })
    }

    /// Return the next `n` bytes and advance past them
    #[inline]
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], Error> {
        if self.data.len() < n {
            return Err(self.truncated());
        }
        let (head, rest) = self.data.split_at(n);
        self.data = rest;
        Ok(head)
    }

    /// Read an unsigned byte
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        let (head, rest) = get_split::<1>(self.data).ok_or_else(|| self.truncated())?;
        self.data = rest;
        Ok(head[0])
    }

    /// Read a big-endian unsigned 32 bit integer
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, Error> {
        let (head, rest) = get_split::<4>(self.data).ok_or_else(|| self.truncated())?;
        self.data = rest;
        Ok(u32::from_be_bytes(head))
    }

    /// Read a little-endian IEEE-754 single precision float
    ///
    /// Integers in the format are big endian while floats are little endian.
    /// The asymmetry is part of the format and preserved here exactly.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32, Error> {
        let (head, rest) = get_split::<4>(self.data).ok_or_else(|| self.truncated())?;
        self.data = rest;
        Ok(f32::from_le_bytes(head))
    }

    /// Carve a length-prefixed region into an independent cursor
    ///
    /// The prefix is a big-endian u32 byte count `L`. The parent advances by
    /// `4 + L` and the returned cursor covers exactly the `L` framed bytes.
    ///
    /// ```rust
    /// use moltke::Cursor;
    ///
    /// let mut cursor = Cursor::new(&[0x00, 0x00, 0x00, 0x02, 0xab, 0xcd]);
    /// let mut frame = cursor.read_frame().unwrap();
    /// assert!(cursor.is_empty());
    /// assert_eq!(frame.read_bytes(2).unwrap(), &[0xab, 0xcd]);
    /// ```
    #[inline]
    pub fn read_frame(&mut self) -> Result<Cursor<'a>, Error> {
        let len = self.read_u32()? as usize;
        let base = self.position();
        let contents = self.read_bytes(len)?;
        Ok(Cursor::framed(contents, base))
    }

    /// Fail with `TrailingData` unless every byte has been consumed
    ///
    /// Called after each region decode: a schema that leaves part of its
    /// region unread is a format error, not a silent skip.
    #[inline]
    pub fn expect_empty(&self) -> Result<(), Error> {
        if self.data.is_empty() {
            Ok(())
        } else {
            Err(Error::new(ErrorKind::TrailingData {
                remaining: self.data.len(),
                offset: self.position(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use rstest::*;

    #[quickcheck]
    fn read_frame_roundtrip(contents: Vec<u8>) -> bool {
        let mut buffer = (contents.len() as u32).to_be_bytes().to_vec();
        buffer.extend_from_slice(&contents);
        buffer.extend_from_slice(&[0xde, 0xad]);

        let mut cursor = Cursor::new(&buffer);
        let before = cursor.remaining();
        let mut frame = cursor.read_frame().unwrap();

        frame.remaining() == contents.len()
            && frame.read_bytes(contents.len()).unwrap() == contents.as_slice()
            && before - cursor.remaining() == 4 + contents.len()
            && cursor.remaining() == 2
    }

    #[rstest]
    #[case(&[][..])]
    #[case(&[0x00][..])]
    #[case(&[0x00, 0x00, 0x00][..])]
    fn read_u32_truncated(#[case] data: &[u8]) {
        let mut cursor = Cursor::new(data);
        let err = cursor.read_u32().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Truncated { offset: 0 });
    }

    #[test]
    fn read_zero_bytes_from_empty() {
        let mut cursor = Cursor::new(&[]);
        assert!(cursor.read_bytes(0).unwrap().is_empty());
        assert!(cursor.expect_empty().is_ok());
    }

    #[test]
    fn read_u8_advances() {
        let mut cursor = Cursor::new(&[0x07, 0x08]);
        assert_eq!(cursor.read_u8().unwrap(), 7);
        assert_eq!(cursor.read_u8().unwrap(), 8);
        assert!(cursor.read_u8().is_err());
    }

    #[test]
    fn read_f32_little_endian() {
        let data = 1.5f32.to_le_bytes();
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.read_f32().unwrap(), 1.5);
    }

    #[test]
    fn read_u32_big_endian() {
        let mut cursor = Cursor::new(&[0x01, 0x00, 0x00, 0x00]);
        assert_eq!(cursor.read_u32().unwrap(), 1 << 24);
    }

    #[test]
    fn frame_longer_than_remaining() {
        let mut cursor = Cursor::new(&[0x00, 0x00, 0x00, 0x05, 0x01]);
        let err = cursor.read_frame().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Truncated { offset: 4 });
    }

    #[test]
    fn expect_empty_reports_remainder() {
        let mut cursor = Cursor::new(&[0x01, 0x02, 0x03]);
        cursor.read_u8().unwrap();
        let err = cursor.expect_empty().unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::TrailingData {
                remaining: 2,
                offset: 1
            }
        );
    }

    #[test]
    fn nested_frames_report_root_offsets() {
        // outer frame at 0..10, inner frame contents start at offset 8
        let mut buffer = vec![0x00, 0x00, 0x00, 0x06];
        buffer.extend_from_slice(&[0x00, 0x00, 0x00, 0x02, 0xaa, 0xbb]);

        let mut root = Cursor::new(&buffer);
        let mut outer = root.read_frame().unwrap();
        let mut inner = outer.read_frame().unwrap();
        assert_eq!(inner.position(), 8);
        inner.read_u8().unwrap();
        assert_eq!(inner.position(), 9);
        let err = inner.read_bytes(2).unwrap_err();
        assert_eq!(err.offset(), 9);
    }
}
