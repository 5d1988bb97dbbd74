pub mod geom;
pub mod painter;
pub mod style;
pub mod text;
pub mod theme;
