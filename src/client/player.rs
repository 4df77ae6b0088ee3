use ggez::{
    GameResult,
    glam::Vec2,
    graphics::{Color, Rect},
    input::keyboard::KeyCode,
};

use crate::config::GameConfig;
use crate::input::{InputSource, KeyEvent};
use crate::physics::{bounce_velocity, decay_velocity};
use crate::rendering::DrawTarget;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMode {
    Idle,
    Aiming,
    ChargingPower,
    Launched,
}

/// Per-match constants for the controller.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    pub aim_step: i32,
    pub power_step: i32,
    pub launch_scale: f32,
    pub friction_step: f32,
    pub aim_line_length: f32,
}

impl Tuning {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            aim_step: config.aim_step,
            power_step: config.power_step,
            launch_scale: config.launch_scale,
            friction_step: config.friction_step,
            aim_line_length: config.aim_line_length,
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// The aiming, charging and flying player.
///
/// `S` is the sprite resource; the game uses a ggez `Image`.
pub struct Player<S> {
    mode: PlayerMode,
    pos: Vec2,
    size: Vec2,
    bounds: Rect,
    direction: i32,
    vel: Vec2,
    launch_origin: Vec2,
    sprite: S,
    tuning: Tuning,
}

impl<S> Player<S> {
    pub fn new(sprite: S, pos: Vec2, size: Vec2, tuning: Tuning) -> Self {
        let mut player = Self {
            mode: PlayerMode::Idle,
            pos,
            size,
            bounds: Rect::new(pos.x, pos.y, size.x, size.y),
            direction: 0,
            vel: Vec2::ZERO,
            launch_origin: Vec2::ZERO,
            sprite,
            tuning,
        };
        player.launch_origin = player.center();
        player
    }

    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn launch_origin(&self) -> Vec2 {
        self.launch_origin
    }

    pub fn center(&self) -> Vec2 {
        self.pos + (self.size / 2.0).floor()
    }

    pub fn forward_vector(&self) -> Vec2 {
        let r = (self.direction as f32).to_radians();
        Vec2::new(r.cos(), r.sin())
    }

    fn set_mode(&mut self, mode: PlayerMode) {
        if self.mode != mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "player mode");
            self.mode = mode;
        }
    }

    /// Applies one key event. Returns `true` when the player launched.
    pub fn handle_input(
        &mut self,
        event: KeyEvent,
        session: &mut Session,
        input: &mut impl InputSource,
    ) -> bool {
        let KeyEvent::Pressed(key) = event else {
            return false;
        };

        match key {
            KeyCode::Space => {
                self.set_mode(PlayerMode::Launched);
                self.launch_origin = self.center();
                let speed = self.tuning.launch_scale * session.power() as f32;
                self.vel = self.forward_vector() * speed;
                tracing::info!(
                    direction = self.direction,
                    power = session.power(),
                    vx = self.vel.x,
                    vy = self.vel.y,
                    "launched"
                );
                return true;
            }
            KeyCode::ArrowLeft | KeyCode::ArrowRight => {
                self.set_mode(PlayerMode::Aiming);
                input.arm_repeat();
                self.direction += if key == KeyCode::ArrowRight {
                    self.tuning.aim_step
                } else {
                    -self.tuning.aim_step
                };
            }
            KeyCode::ArrowUp | KeyCode::ArrowDown => {
                self.set_mode(PlayerMode::ChargingPower);
                let step = if key == KeyCode::ArrowUp {
                    self.tuning.power_step
                } else {
                    -self.tuning.power_step
                };
                session.set_power(session.power() + step);
            }
            _ => {}
        }

        false
    }

    /// Advances the player by one simulation step.
    pub fn tick(&mut self, session: &mut Session, input: &mut impl InputSource) {
        if input.repeat_fired() {
            if input.is_held(KeyCode::ArrowLeft) {
                self.direction -= self.tuning.aim_step;
            } else if input.is_held(KeyCode::ArrowRight) {
                self.direction += self.tuning.aim_step;
            }
        }

        self.pos += self.vel;
        self.bounds.move_to(self.pos);

        if self.vel == Vec2::ZERO {
            session.flight_finished();
        }

        self.vel = bounce_velocity(self.pos, self.vel, self.size, session.extent());
        self.vel = decay_velocity(self.vel, self.tuning.friction_step);

        if self.mode == PlayerMode::Launched && self.vel == Vec2::ZERO {
            self.set_mode(PlayerMode::Idle);
        }
    }

    /// Halts the player where it stands.
    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
    }

    /// Draws the player in window space: `pos * scale + translation`.
    pub fn render<T>(
        &self,
        target: &mut T,
        session: &Session,
        scale: f32,
        translation: Vec2,
    ) -> GameResult
    where
        T: DrawTarget<Sprite = S>,
    {
        let to_screen = |p: Vec2| p * scale + translation;

        if matches!(self.mode, PlayerMode::Aiming | PlayerMode::ChargingPower) {
            let start = to_screen(self.center());
            let end = start + self.forward_vector() * self.tuning.aim_line_length * scale;
            target.line(start, end, 2.0, Color::WHITE)?;
        }

        if self.mode == PlayerMode::ChargingPower {
            session.draw_power_bar(target, scale)?;
        }

        if self.mode == PlayerMode::Launched {
            target.circle(
                to_screen(self.launch_origin),
                4.0 * scale,
                Color::from_rgb(255, 100, 100),
            )?;
        }

        target.sprite(&self.sprite, to_screen(self.pos), self.size * scale)
    }
}
