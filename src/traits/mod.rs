pub mod audio;
pub mod render;
