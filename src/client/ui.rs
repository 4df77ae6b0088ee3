use ggez::{
    GameResult,
    glam::Vec2,
    graphics::{Color, Rect},
};

use crate::rendering::DrawTarget;

/// HUD bar showing the charged power as a fraction of the maximum.
#[derive(Debug, Clone)]
pub struct PowerBar {
    pub origin: Vec2,
    pub size: Vec2,
    pub back: Color,
    pub front: Color,
}

impl Default for PowerBar {
    fn default() -> Self {
        Self {
            origin: Vec2::new(20.0, 20.0),
            size: Vec2::new(200.0, 12.0),
            back: Color::from_rgba(40, 40, 40, 200),
            front: Color::from_rgba(120, 200, 255, 200),
        }
    }
}

impl PowerBar {
    pub fn fill(power: i32, max_power: i32) -> f32 {
        if max_power <= 0 {
            return 0.0;
        }
        (power as f32 / max_power as f32).clamp(0.0, 1.0)
    }

    pub fn draw<T: DrawTarget>(
        &self,
        target: &mut T,
        power: i32,
        max_power: i32,
        scale: f32,
    ) -> GameResult {
        let origin = self.origin * scale;
        let size = self.size * scale;
        let charge = Self::fill(power, max_power);

        target.rect(Rect::new(origin.x, origin.y, size.x, size.y), self.back)?;
        if charge > 0.0 {
            target.rect(
                Rect::new(origin.x, origin.y, size.x * charge, size.y),
                self.front,
            )?;
        }
        Ok(())
    }
}
