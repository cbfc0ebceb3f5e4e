pub mod error;
pub mod consts;
pub mod config;
pub mod grid;
pub mod color;
pub mod viewport;
pub mod render;
pub mod stats;
pub mod interaction;
pub mod engine;
pub mod io;
pub mod synthetic;
