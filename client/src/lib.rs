pub mod config;
pub mod frame;
pub mod info;
pub mod input;
pub mod palette;
pub mod run;
pub mod world;
