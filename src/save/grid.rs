use crate::{Cursor, Error, ErrorKind};

/// The map section: two parallel row-major layers of per-cell tile codes
///
/// Both layers always hold exactly `width * height` codes. Tile codes are
/// structural data to the decoder; their meaning only matters when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    pub first_layer: Vec<u8>,
    pub second_layer: Vec<u8>,
}

impl Grid {
    pub(crate) fn decode(cursor: &mut Cursor) -> Result<Grid, Error> {
        let width = cursor.read_u32()?;
        let height = cursor.read_u32()?;

        let size = u64::from(width) * u64::from(height);
        let expected = size * 2;
        if cursor.remaining() as u64 != expected {
            return Err(Error::new(ErrorKind::LengthMismatch {
                expected: expected as usize,
                actual: cursor.remaining(),
                offset: cursor.position(),
            }));
        }

        let size = size as usize;
        let first_layer = cursor.read_bytes(size)?.to_vec();
        let second_layer = cursor.read_bytes(size)?.to_vec();
        cursor.expect_empty()?;

        Ok(Grid {
            width,
            height,
            first_layer,
            second_layer,
        })
    }

    /// Tile codes of the cell at `(x, y)`, first then second layer
    pub fn cell(&self, x: u32, y: u32) -> (u8, u8) {
        let index = (y * self.width + x) as usize;
        (self.first_layer[index], self.second_layer[index])
    }
}
