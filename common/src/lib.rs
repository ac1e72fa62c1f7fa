pub mod constants;
pub mod level;
pub mod maze;
pub mod player;
pub mod session;
