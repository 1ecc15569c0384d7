pub mod avatar_grid;
pub mod avatar_page;
pub mod avatar_tile;
