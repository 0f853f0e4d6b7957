//! Emit a saved game as JSON
//!
//! Reads the save from the path given as the first argument, or from stdin
//! when no path is given.

use moltke::GameState;
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
    serde_json::to_writer_pretty(stdout.lock(), &state)?;
    println!();
    Ok(())
}
