//! Text presentation helpers shared by shells.

pub mod table;
