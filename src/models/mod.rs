mod game;

pub use game::GameModel;
