use super::{EntityCollection, Grid};
use crate::{Cursor, Error};

/// A fully decoded save: the map grid plus every entity
///
/// ```rust
/// use moltke::GameState;
///
/// // 1x1 grid with one tile per layer, then an empty entity collection
/// let data = [
///     0x00, 0x00, 0x00, 0x0a, // grid region, 10 bytes
///     0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x03, 0x01,
///     0x00, 0x00, 0x00, 0x10, // entity region, 16 bytes
///     0x00, 0x00, 0x00, 0x02, // id counter
///     0x00, 0x00, 0x00, 0x00, // units
///     0x00, 0x00, 0x00, 0x00, // projectiles
///     0x00, 0x00, 0x00, 0x00, // buildings
/// ];
///
/// let state = GameState::from_slice(&data)?;
/// assert_eq!(state.grid.cell(0, 0), (3, 1));
/// assert_eq!(state.entities.id_counter, 2);
/// # Ok::<(), moltke::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameState {
    pub grid: Grid,
    pub entities: EntityCollection,
}

impl GameState {
    /// Decode a save from a fully loaded byte buffer
    ///
    /// The buffer must hold exactly two framed regions, grid then entity
    /// collection, with nothing after them. The first malformed byte aborts
    /// the decode; on success the whole buffer has been consumed.
    pub fn from_slice(data: &[u8]) -> Result<GameState, Error> {
        let mut cursor = Cursor::new(data);
        let mut grid_region = cursor.read_frame()?;
        let grid = Grid::decode(&mut grid_region)?;
        let mut entity_region = cursor.read_frame()?;
        let entities = EntityCollection::decode(&mut entity_region)?;
        cursor.expect_empty()?;
        Ok(GameState { grid, entities })
    }
}
