pub mod list;

pub use list::{Cursor, Direction, List};
