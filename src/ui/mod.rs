//! Text front end: board rendering and click input for the terminal driver.

pub mod display;
pub mod input;
pub mod theme;
pub mod view_models;

pub use display::render_board;
pub use input::parse_click;
