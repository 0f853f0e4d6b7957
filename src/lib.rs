/*!

A low level, performance orientated decoder for framed binary RTS save files.

A save is a single byte buffer of nested, length-prefixed regions: a map grid
followed by an entity collection (units, projectiles, buildings). Moltke
reconstructs the typed game state with strict bounds and structure validation
and can render it as human readable text.

## Features

- ✔ Strict: every region must be consumed exactly; the first malformed byte
  aborts the decode with a kind and a root-relative offset
- ✔ Small: compiles with zero required dependencies
- ✔ Safe: fuzzed against arbitrary input
- ✔ Embeddable: no I/O during decoding, the caller supplies the buffer

## Quick Start

```rust
use moltke::GameState;

let data = [
    0x00, 0x00, 0x00, 0x0c, // grid region, 12 bytes
    0x00, 0x00, 0x00, 0x02, // width
    0x00, 0x00, 0x00, 0x01, // height
    0x00, 0x01, 0x01, 0x02, // first layer, second layer
    0x00, 0x00, 0x00, 0x10, // entity region, 16 bytes
    0x00, 0x00, 0x00, 0x05, // id counter
    0x00, 0x00, 0x00, 0x00, // units
    0x00, 0x00, 0x00, 0x00, // projectiles
    0x00, 0x00, 0x00, 0x00, // buildings
];

let state = GameState::from_slice(&data)?;
assert_eq!(state.grid.width, 2);
assert_eq!(state.entities.id_counter, 5);
assert!(state.entities.units.is_empty());
# Ok::<(), moltke::Error>(())
```

Decoded state renders as text, one grid row or entity per line:

```rust
# use moltke::GameState;
# let data = [
#     0x00, 0x00, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01,
#     0x00, 0x01, 0x01, 0x02, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x05,
#     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
# ];
# let state = GameState::from_slice(&data).unwrap();
use moltke::TextRenderer;

let mut renderer = TextRenderer::new(Vec::new());
renderer.write_state(&state)?;
assert_eq!(renderer.into_inner(), b"XX:t\n");
# Ok::<(), std::io::Error>(())
```

## Binary layout

All multi-byte integers are big endian; floats are little-endian IEEE-754
single precision. A framed region is a u32 byte count followed by that many
bytes, nested to arbitrary depth. The root holds exactly two regions (grid,
entity collection) and nothing else.

## One Level Lower

The schema decoders are built on [`Cursor`], a bounds-checked view over a
byte buffer. It can be used directly to pick a save apart:

```rust
use moltke::Cursor;

let mut cursor = Cursor::new(&[0x00, 0x00, 0x00, 0x01, 0x2a]);
let mut frame = cursor.read_frame()?;
assert_eq!(frame.read_u8()?, 42);
frame.expect_empty()?;
# Ok::<(), moltke::Error>(())
```

*/

mod cursor;
mod errors;
mod render;
mod save;

pub use self::cursor::Cursor;
pub use self::errors::{Error, ErrorKind};
pub use self::render::TextRenderer;
pub use self::save::{Building, EntityCollection, GameState, Grid, Projectile, Unit};
