use ggez::{GameResult, glam::Vec2};

use crate::config::GameConfig;
use crate::rendering::DrawTarget;
use crate::ui::PowerBar;

/// Match-wide state the player reads and asks to change: the charged
/// power, the playfield and whether a throw is in flight.
#[derive(Debug)]
pub struct Session {
    power: i32,
    max_power: i32,
    extent: Vec2,
    shooting: bool,
    power_bar: PowerBar,
}

impl Session {
    pub fn new(extent: Vec2, max_power: i32, initial_power: i32) -> Self {
        let max_power = max_power.max(0);
        Self {
            power: initial_power.clamp(0, max_power),
            max_power,
            extent,
            shooting: false,
            power_bar: PowerBar::default(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.playfield.as_vec2(),
            config.max_power,
            config.initial_power,
        )
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    pub fn max_power(&self) -> i32 {
        self.max_power
    }

    /// Stores `power` clamped to `[0, max_power]`.
    pub fn set_power(&mut self, power: i32) {
        let clamped = power.clamp(0, self.max_power);
        if clamped != self.power {
            tracing::debug!(requested = power, power = clamped, "power changed");
        }
        self.power = clamped;
    }

    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    pub fn shooting(&self) -> bool {
        self.shooting
    }

    pub fn begin_flight(&mut self) {
        self.shooting = true;
    }

    pub fn flight_finished(&mut self) {
        if self.shooting {
            tracing::info!("throw came to rest");
        }
        self.shooting = false;
    }

    pub fn draw_power_bar<T: DrawTarget>(&self, target: &mut T, scale: f32) -> GameResult {
        self.power_bar
            .draw(target, self.power, self.max_power, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Vec2::new(800.0, 600.0), 1000, 300)
    }

    #[test]
    fn power_is_clamped() {
        let mut s = session();
        s.set_power(1100);
        assert_eq!(s.power(), 1000);
        s.set_power(-100);
        assert_eq!(s.power(), 0);
    }

    #[test]
    fn repeated_steps_never_leave_range() {
        let mut s = session();
        for _ in 0..20 {
            s.set_power(s.power() + 100);
            assert!((0..=s.max_power()).contains(&s.power()));
        }
        for _ in 0..20 {
            s.set_power(s.power() - 100);
            assert!((0..=s.max_power()).contains(&s.power()));
        }
        assert_eq!(s.power(), 0);
    }

    #[test]
    fn initial_power_is_clamped() {
        let s = Session::new(Vec2::ZERO, 500, 900);
        assert_eq!(s.power(), 500);
    }

    #[test]
    fn flight_flag() {
        let mut s = session();
        assert!(!s.shooting());
        s.begin_flight();
        assert!(s.shooting());
        s.flight_finished();
        assert!(!s.shooting());
    }
}
