pub mod colors;
pub mod config;
pub mod constants;
pub mod fractal;
pub mod input;
pub mod palette;
pub mod render;
pub mod session;
pub mod timing;
pub mod viewport;
