pub mod biome;
pub mod maze;
