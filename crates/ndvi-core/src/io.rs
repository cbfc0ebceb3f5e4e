pub mod export;
pub mod grid_io;
