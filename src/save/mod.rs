//! Types decoded from the framed save schema
//!
//! Every type here is constructed once per decode pass from its own framed
//! region and is immutable afterwards. Decoders consume their region exactly:
//! leftover bytes at any nesting level abort the decode.

mod collection;
mod entity;
mod grid;
mod state;

pub use self::collection::EntityCollection;
pub use self::entity::{Building, Projectile, Unit};
pub use self::grid::Grid;
pub use self::state::GameState;
