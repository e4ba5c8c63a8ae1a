pub mod roster;
pub mod stat_grid;
