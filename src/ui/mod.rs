pub mod canvas;
pub mod frame;
pub mod gauge;
pub mod screen;
