pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod widgets;
