use std::{env, str::FromStr};

use log::warn;

use common::{
    constants::{DEFAULT_SEED, MAX_MAZE_ITEMS},
    maze::MazeParams,
    session::SessionSettings,
};

pub const WINDOW_TITLE: &str = "Lattice maze";
pub const WINDOW_WIDTH: i32 = 1280;
pub const WINDOW_HEIGHT: i32 = 720;

pub const DEFAULT_SCALE: f32 = 10.0; // Screen pixels per maze cell in editor mode.
pub const DEFAULT_SPEED: f32 = 12.0; // Cells per second.
pub const DEFAULT_ZOOM: f32 = 4.0;
pub const MAX_MAZE_SIDE: usize = 1024; // Keeps the maze texture within GPU limits.

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub session: SessionSettings,
    pub scale: f32,
    pub speed: f32,
    pub zoom: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session: SessionSettings::default(),
            scale: DEFAULT_SCALE,
            speed: DEFAULT_SPEED,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Config {
    /// Reads overrides from the environment, after loading an optional `.env`
    /// file from the working directory.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = MazeParams::default();

        let params = MazeParams {
            width: parse_or(&lookup, "MAZE_WIDTH", defaults.width),
            height: parse_or(&lookup, "MAZE_HEIGHT", defaults.height),
            row_spacing: parse_or(&lookup, "MAZE_ROW_SPACING", defaults.row_spacing),
            col_spacing: parse_or(&lookup, "MAZE_COL_SPACING", defaults.col_spacing),
            point_chance: parse_or(&lookup, "MAZE_POINT_CHANCE", defaults.point_chance),
        };

        let params = match params.validate() {
            Ok(()) if params.width > MAX_MAZE_SIDE || params.height > MAX_MAZE_SIDE => {
                warn!(
                    "maze of {}x{} is larger than {} cells per side; using the defaults",
                    params.width, params.height, MAX_MAZE_SIDE
                );
                defaults
            }
            Ok(()) => params,
            Err(e) => {
                warn!("ignoring maze settings from the environment: {}", e);
                defaults
            }
        };

        Self {
            session: SessionSettings {
                params,
                seed: parse_or(&lookup, "MAZE_SEED", DEFAULT_SEED),
                items: parse_or(&lookup, "MAZE_ITEMS", MAX_MAZE_ITEMS),
            },
            scale: positive_or(&lookup, "MAZE_SCALE", DEFAULT_SCALE),
            speed: positive_or(&lookup, "PLAYER_SPEED", DEFAULT_SPEED),
            zoom: positive_or(&lookup, "CAMERA_ZOOM", DEFAULT_ZOOM),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("could not parse {}={:?}; using the default", key, raw);
            default
        }
    }
}

fn positive_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f32) -> f32 {
    let value = parse_or(lookup, key, default);
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!("{} must be positive, got {}; using the default", key, value);
        default
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("MAZE_SEED", "42"),
            ("MAZE_WIDTH", "31"),
            ("MAZE_HEIGHT", " 21 "),
            ("MAZE_POINT_CHANCE", "0.5"),
            ("MAZE_ITEMS", "3"),
            ("PLAYER_SPEED", "6.5"),
        ]);

        assert_eq!(config.session.seed, 42);
        assert_eq!(config.session.params.width, 31);
        assert_eq!(config.session.params.height, 21);
        assert_eq!(config.session.params.point_chance, 0.5);
        assert_eq!(config.session.items, 3);
        assert_eq!(config.speed, 6.5);
        assert_eq!(config.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_unparseable_values_fall_back_individually() {
        let config = config_from(&[("MAZE_SEED", "lots"), ("MAZE_WIDTH", "40")]);

        assert_eq!(config.session.seed, DEFAULT_SEED);
        assert_eq!(config.session.params.width, 40);
    }

    #[test]
    fn test_invalid_maze_params_fall_back_together() {
        let config = config_from(&[("MAZE_WIDTH", "40"), ("MAZE_POINT_CHANCE", "2.0")]);
        assert_eq!(config.session.params, MazeParams::default());

        let config = config_from(&[("MAZE_HEIGHT", "2")]);
        assert_eq!(config.session.params, MazeParams::default());

        let config = config_from(&[("MAZE_WIDTH", "5000")]);
        assert_eq!(config.session.params, MazeParams::default());
    }

    #[test]
    fn test_non_positive_render_settings_are_rejected() {
        let config = config_from(&[
            ("MAZE_SCALE", "0"),
            ("CAMERA_ZOOM", "-1"),
            ("PLAYER_SPEED", "inf"),
        ]);

        assert_eq!(config.scale, DEFAULT_SCALE);
        assert_eq!(config.zoom, DEFAULT_ZOOM);
        assert_eq!(config.speed, DEFAULT_SPEED);
    }
}
