use crate::{Cursor, Error, ErrorKind};

/// A mobile entity with pathing and task state
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Unit {
    pub x: f32,
    pub y: f32,
    pub id: u32,
    /// Raw kind discriminant; which stats and task layout a kind implies is
    /// game logic and not decoded here
    pub kind: u8,
    pub waypoint_index: u32,
    pub orientation: u32,
    pub team_id: u32,
    pub hp: u32,
    pub cooldown: u32,
    pub path: Vec<(f32, f32)>,
    pub enemy_point: Option<(f32, f32)>,
    /// Opaque task payload, stored verbatim
    pub task: Vec<u8>,
}

impl Unit {
    pub(crate) fn decode(cursor: &mut Cursor) -> Result<Unit, Error> {
        let x = cursor.read_f32()?;
        let y = cursor.read_f32()?;
        let id = cursor.read_u32()?;
        let kind = cursor.read_u8()?;
        let waypoint_index = cursor.read_u32()?;
        let orientation = cursor.read_u32()?;
        let team_id = cursor.read_u32()?;
        let hp = cursor.read_u32()?;
        let cooldown = cursor.read_u32()?;

        let mut path_region = cursor.read_frame()?;
        if path_region.remaining() % 8 != 0 {
            return Err(Error::new(ErrorKind::LengthMismatch {
                expected: path_region.remaining() / 8 * 8,
                actual: path_region.remaining(),
                offset: path_region.position(),
            }));
        }
        let mut path = Vec::with_capacity(path_region.remaining() / 8);
        while !path_region.is_empty() {
            let waypoint_x = path_region.read_f32()?;
            let waypoint_y = path_region.read_f32()?;
            path.push((waypoint_x, waypoint_y));
        }

        let enemy_point = if cursor.read_u8()? != 0 {
            Some((cursor.read_f32()?, cursor.read_f32()?))
        } else {
            // the flag-off branch still carries a 4 byte placeholder
            cursor.read_bytes(4)?;
            None
        };

        let mut task_region = cursor.read_frame()?;
        let task = task_region.read_bytes(task_region.remaining())?.to_vec();

        cursor.expect_empty()?;
        Ok(Unit {
            x,
            y,
            id,
            kind,
            waypoint_index,
            orientation,
            team_id,
            hp,
            cooldown,
            path,
            enemy_point,
            task,
        })
    }
}

/// A static structure anchored to a tile
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Building {
    pub x: u32,
    pub y: u32,
}

impl Building {
    pub(crate) fn decode(cursor: &mut Cursor) -> Result<Building, Error> {
        let x = cursor.read_u32()?;
        let y = cursor.read_u32()?;
        cursor.expect_empty()?;
        Ok(Building { x, y })
    }
}

/// An in-flight projectile travelling between two points
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
    pub angle: f32,
}

impl Projectile {
    pub(crate) fn decode(cursor: &mut Cursor) -> Result<Projectile, Error> {
        let x = cursor.read_f32()?;
        let y = cursor.read_f32()?;
        let start_x = cursor.read_f32()?;
        let start_y = cursor.read_f32()?;
        let end_x = cursor.read_f32()?;
        let end_y = cursor.read_f32()?;
        let angle = cursor.read_f32()?;
        cursor.expect_empty()?;
        Ok(Projectile {
            x,
            y,
            start_x,
            start_y,
            end_x,
            end_y,
            angle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(contents: &[u8]) -> Vec<u8> {
        let mut framed = (contents.len() as u32).to_be_bytes().to_vec();
        framed.extend_from_slice(contents);
        framed
    }

    fn unit_header() -> Vec<u8> {
        let mut region = Vec::new();
        region.extend_from_slice(&1.0f32.to_le_bytes());
        region.extend_from_slice(&2.0f32.to_le_bytes());
        region.extend_from_slice(&7u32.to_be_bytes());
        region.push(3);
        region.extend_from_slice(&0u32.to_be_bytes());
        region.extend_from_slice(&90u32.to_be_bytes());
        region.extend_from_slice(&1u32.to_be_bytes());
        region.extend_from_slice(&100u32.to_be_bytes());
        region.extend_from_slice(&5u32.to_be_bytes());
        region
    }

    #[test]
    fn unit_with_path_and_enemy_point() {
        let mut path = Vec::new();
        path.extend_from_slice(&3.0f32.to_le_bytes());
        path.extend_from_slice(&4.5f32.to_le_bytes());

        let mut region = unit_header();
        region.extend_from_slice(&frame(&path));
        region.push(1);
        region.extend_from_slice(&1.5f32.to_le_bytes());
        region.extend_from_slice(&(-2.25f32).to_le_bytes());
        region.extend_from_slice(&frame(&[0xca, 0xfe]));

        let unit = Unit::decode(&mut Cursor::new(&region)).unwrap();
        assert_eq!(unit.x, 1.0);
        assert_eq!(unit.y, 2.0);
        assert_eq!(unit.id, 7);
        assert_eq!(unit.kind, 3);
        assert_eq!(unit.waypoint_index, 0);
        assert_eq!(unit.orientation, 90);
        assert_eq!(unit.team_id, 1);
        assert_eq!(unit.hp, 100);
        assert_eq!(unit.cooldown, 5);
        assert_eq!(unit.path, vec![(3.0, 4.5)]);
        assert_eq!(unit.enemy_point, Some((1.5, -2.25)));
        assert_eq!(unit.task, vec![0xca, 0xfe]);
    }

    #[test]
    fn absent_enemy_point_skips_placeholder() {
        let mut region = unit_header();
        region.extend_from_slice(&frame(&[]));
        region.push(0);
        region.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        region.extend_from_slice(&frame(&[]));

        let unit = Unit::decode(&mut Cursor::new(&region)).unwrap();
        assert_eq!(unit.enemy_point, None);
        assert!(unit.path.is_empty());
        assert!(unit.task.is_empty());
    }

    #[test]
    fn path_region_must_hold_whole_pairs() {
        let mut region = unit_header();
        region.extend_from_slice(&frame(&[0; 12]));
        region.push(0);
        region.extend_from_slice(&[0; 4]);
        region.extend_from_slice(&frame(&[]));

        let err = Unit::decode(&mut Cursor::new(&region)).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::LengthMismatch {
                expected: 8,
                actual: 12,
                ..
            }
        ));
    }

    #[test]
    fn unit_region_must_be_exhausted() {
        let mut region = unit_header();
        region.extend_from_slice(&frame(&[]));
        region.push(0);
        region.extend_from_slice(&[0; 4]);
        region.extend_from_slice(&frame(&[]));
        region.push(0xff);

        let err = Unit::decode(&mut Cursor::new(&region)).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::TrailingData { remaining: 1, .. }
        ));
    }

    #[test]
    fn building_is_two_coordinates() {
        let mut region = 11u32.to_be_bytes().to_vec();
        region.extend_from_slice(&22u32.to_be_bytes());

        let building = Building::decode(&mut Cursor::new(&region)).unwrap();
        assert_eq!(building, Building { x: 11, y: 22 });
    }

    #[test]
    fn building_rejects_extra_bytes() {
        let region = [0, 0, 0, 1, 0, 0, 0, 2, 0];
        let err = Building::decode(&mut Cursor::new(&region)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TrailingData { .. }));
    }

    #[test]
    fn projectile_reads_seven_floats() {
        let fields = [0.5f32, 1.0, 0.0, 0.0, 4.0, 4.0, 0.75];
        let mut region = Vec::new();
        for field in &fields {
            region.extend_from_slice(&field.to_le_bytes());
        }

        let projectile = Projectile::decode(&mut Cursor::new(&region)).unwrap();
        assert_eq!(projectile.x, 0.5);
        assert_eq!(projectile.y, 1.0);
        assert_eq!(projectile.end_x, 4.0);
        assert_eq!(projectile.angle, 0.75);
    }

    #[test]
    fn truncated_projectile() {
        let region = [0; 27];
        let err = Projectile::decode(&mut Cursor::new(&region)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Truncated { .. }));
    }
}
