pub mod app;
pub mod audio;
pub mod config;
pub mod game;
pub mod model;
pub mod render;
pub mod traits;
pub mod util;
