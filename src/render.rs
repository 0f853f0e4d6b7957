//! Human readable rendering of decoded saves
//!
//! The renderer trusts a successfully decoded [`GameState`] completely and
//! performs no validation of its own.

use crate::{Building, GameState, Grid, Projectile, Unit};
use std::io::{self, Write};

/// Glyphs for the terrain layer, indexed by tile code
const FIRST_LAYER_GLYPHS: &[u8] = b"X: .#";

/// Glyphs for the overlay layer, indexed by tile code
const SECOND_LAYER_GLYPHS: &[u8] = b" Xt.";

#[inline]
fn glyph(legend: &[u8], code: u8) -> char {
    char::from(legend.get(usize::from(code)).copied().unwrap_or(b'?'))
}

/// Renders a decoded save as text, one grid row or entity per line
///
/// Grid cells become two-glyph pairs (terrain then overlay), columns in
/// increasing x order. Entities become one labeled line each with fields in
/// stream order.
///
/// ```rust
/// use moltke::{Grid, TextRenderer};
///
/// let grid = Grid {
///     width: 2,
///     height: 1,
///     first_layer: vec![0, 1],
///     second_layer: vec![1, 2],
/// };
///
/// let mut renderer = TextRenderer::new(Vec::new());
/// renderer.write_grid(&grid)?;
/// assert_eq!(renderer.into_inner(), b"XX:t\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct TextRenderer<W> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        TextRenderer { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write the grid followed by every entity, in stream order
    pub fn write_state(&mut self, state: &GameState) -> io::Result<()> {
        self.write_grid(&state.grid)?;
        for unit in &state.entities.units {
            self.write_unit(unit)?;
        }
        for projectile in &state.entities.projectiles {
            self.write_projectile(projectile)?;
        }
        for building in &state.entities.buildings {
            self.write_building(building)?;
        }
        Ok(())
    }

    /// Write one line of two-glyph cells per grid row
    pub fn write_grid(&mut self, grid: &Grid) -> io::Result<()> {
        let width = grid.width as usize;
        let mut line = String::with_capacity(width * 2);
        for row in 0..grid.height as usize {
            line.clear();
            for col in 0..width {
                let index = row * width + col;
                line.push(glyph(FIRST_LAYER_GLYPHS, grid.first_layer[index]));
                line.push(glyph(SECOND_LAYER_GLYPHS, grid.second_layer[index]));
            }
            writeln!(self.writer, "{}", line)?;
        }
        Ok(())
    }

    pub fn write_unit(&mut self, unit: &Unit) -> io::Result<()> {
        write!(self.writer, "Unit: {} {}", unit.x, unit.y)?;
        for field in [
            unit.id,
            u32::from(unit.kind),
            unit.waypoint_index,
            unit.orientation,
            unit.team_id,
            unit.hp,
            unit.cooldown,
        ] {
            self.writer.write_all(b" ")?;
            self.write_u32(field)?;
        }
        write!(self.writer, " {:?} {:?} 0x", unit.path, unit.enemy_point)?;
        for byte in &unit.task {
            write!(self.writer, "{:02x}", byte)?;
        }
        writeln!(self.writer)
    }

    pub fn write_projectile(&mut self, projectile: &Projectile) -> io::Result<()> {
        writeln!(
            self.writer,
            "Projectile: {} {} {} {} {} {} {}",
            projectile.x,
            projectile.y,
            projectile.start_x,
            projectile.start_y,
            projectile.end_x,
            projectile.end_y,
            projectile.angle
        )
    }

    pub fn write_building(&mut self, building: &Building) -> io::Result<()> {
        self.writer.write_all(b"Building: ")?;
        self.write_u32(building.x)?;
        self.writer.write_all(b" ")?;
        self.write_u32(building.y)?;
        writeln!(self.writer)
    }

    #[cfg(feature = "faster_writer")]
    #[inline]
    fn write_u32(&mut self, value: u32) -> io::Result<()> {
        let mut scratch = itoa::Buffer::new();
        self.writer.write_all(scratch.format(value).as_bytes())
    }

    #[cfg(not(feature = "faster_writer"))]
    #[inline]
    fn write_u32(&mut self, value: u32) -> io::Result<()> {
        write!(self.writer, "{}", value)
    }
}
