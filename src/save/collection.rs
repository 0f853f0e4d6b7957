use super::{Building, Projectile, Unit};
use crate::{Cursor, Error};

/// Every live entity in the save plus the id allocator's high water mark
///
/// The three lists arrive in a fixed order (units, projectiles, buildings),
/// each in its own framed region holding a concatenation of individually
/// framed records.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntityCollection {
    pub id_counter: u32,
    pub units: Vec<Unit>,
    pub projectiles: Vec<Projectile>,
    pub buildings: Vec<Building>,
}

impl EntityCollection {
    pub(crate) fn decode(cursor: &mut Cursor) -> Result<EntityCollection, Error> {
        let id_counter = cursor.read_u32()?;
        let units = decode_list(cursor, Unit::decode)?;
        let projectiles = decode_list(cursor, Projectile::decode)?;
        let buildings = decode_list(cursor, Building::decode)?;
        cursor.expect_empty()?;
        Ok(EntityCollection {
            id_counter,
            units,
            projectiles,
            buildings,
        })
    }
}

/// Drain a framed list region record by record
///
/// Termination is driven by the region itself running dry, never by a
/// sentinel value in the stream.
fn decode_list<'a, T>(
    cursor: &mut Cursor<'a>,
    decode: fn(&mut Cursor<'a>) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    let mut region = cursor.read_frame()?;
    let mut records = Vec::new();
    while !region.is_empty() {
        let mut record = region.read_frame()?;
        records.push(decode(&mut record)?);
    }
    Ok(records)
}
