use std::path::Path;

use anyhow::Context as _;
use ggez::glam::Vec2;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Tunables for a match. Every field falls back to its default, so a
/// config file only needs to list what it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub window: Size,
    pub playfield: Size,
    pub player_size: Size,
    pub player_start: Point,
    pub sprite_path: String,

    pub max_power: i32,
    pub initial_power: i32,
    pub power_step: i32,

    pub aim_step: i32,
    pub aim_line_length: f32,
    pub launch_scale: f32,
    pub friction_step: f32,

    pub ticks_per_second: u32,
    pub repeat_interval_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Size {
                width: 800.0,
                height: 600.0,
            },
            playfield: Size {
                width: 800.0,
                height: 600.0,
            },
            player_size: Size {
                width: 50.0,
                height: 50.0,
            },
            player_start: Point { x: 400.0, y: 300.0 },
            sprite_path: "/player.png".to_string(),
            max_power: 1000,
            initial_power: 300,
            power_step: 100,
            aim_step: 5,
            aim_line_length: 100.0,
            launch_scale: 0.01,
            friction_step: 0.05,
            ticks_per_second: 60,
            repeat_interval_ticks: 6,
        }
    }
}

impl GameConfig {
    /// Reads the config at `path`. A missing file yields the defaults, a
    /// malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&data).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_json(data: &str) -> anyhow::Result<Self> {
        let config: GameConfig = serde_json::from_str(data)?;
        anyhow::ensure!(config.max_power >= 0, "maxPower must not be negative");
        anyhow::ensure!(config.ticks_per_second > 0, "ticksPerSecond must be positive");
        Ok(config)
    }
}
