//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the search can reuse them on its scratch copy.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{completes, find_line, lines};
