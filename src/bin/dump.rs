//! Render a saved game as text
//!
//! Reads the save from the path given as the first argument, or from stdin
//! when no path is given. The grid prints one row per line followed by one
//! line per entity:
//!
//! ```text
//! . . : :
//! . #t:
//! Unit: 12.5 3 17 1 0 90 2 100 0 [] None 0x
//! Building: 4 9
//! ```

use moltke::{GameState, TextRenderer};
use std::io::{self, Read};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data = match std::env::args_os().nth(1) {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let state = GameState::from_slice(&data)?;

    let stdout = io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());
    renderer.write_state(&state)?;
    Ok(())
}
