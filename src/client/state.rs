use ggez::{GameResult, glam::Vec2, graphics::Color, input::keyboard::KeyCode};

use crate::config::GameConfig;
use crate::input::{InputState, KeyEvent};
use crate::player::{Player, PlayerMode, Tuning};
use crate::rendering::{DrawTarget, ViewTransform};
use crate::session::Session;

/// What a key press asks of the window, beyond the game itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

pub struct GameState<S> {
    pub player: Player<S>,
    pub session: Session,
    pub input: InputState,
    view: ViewTransform,
}

impl<S> GameState<S> {
    pub fn new(config: &GameConfig, sprite: S) -> Self {
        let player = Player::new(
            sprite,
            config.player_start.as_vec2(),
            config.player_size.as_vec2(),
            Tuning::from_config(config),
        );
        let session = Session::from_config(config);
        let view = ViewTransform::fit(config.window.as_vec2(), session.extent());

        Self {
            player,
            session,
            input: InputState::new(config.repeat_interval_ticks),
            view,
        }
    }

    pub fn resize(&mut self, window: Vec2) {
        self.view = ViewTransform::fit(window, self.session.extent());
        tracing::debug!(scale = self.view.scale, "view resized");
    }

    pub fn key_down(&mut self, key: KeyCode) -> Outcome {
        match key {
            KeyCode::Escape => return Outcome::Quit,
            KeyCode::KeyR => {
                tracing::info!("throw reset");
                self.player.stop();
                self.session.flight_finished();
                return Outcome::Continue;
            }
            _ => {}
        }

        // aiming is locked until the throw comes to rest
        if self.session.shooting() {
            return Outcome::Continue;
        }

        self.input.process_key_down(key);
        let event = KeyEvent::Pressed(key);
        if self
            .player
            .handle_input(event, &mut self.session, &mut self.input)
        {
            self.input.release_all();
            self.session.begin_flight();
        }
        Outcome::Continue
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.input.process_key_up(key);
        let event = KeyEvent::Released(key);
        self.player
            .handle_input(event, &mut self.session, &mut self.input);
    }

    /// One fixed simulation step.
    pub fn tick(&mut self) {
        self.input.update();
        self.player.tick(&mut self.session, &mut self.input);
    }

    pub fn draw<T>(&self, target: &mut T) -> GameResult
    where
        T: DrawTarget<Sprite = S>,
    {
        self.player.render(
            target,
            &self.session,
            self.view.scale,
            self.view.translation,
        )?;

        let hud = format!(
            "angle {}  power {}/{}  {}",
            self.player.direction(),
            self.session.power(),
            self.session.max_power(),
            mode_label(self.player.mode()),
        );
        let y = self.view.apply(self.session.extent()).y - 24.0 * self.view.scale;
        target.text(&hud, Vec2::new(self.view.translation.x + 20.0, y), Color::WHITE)
    }
}

fn mode_label(mode: PlayerMode) -> &'static str {
    match mode {
        PlayerMode::Idle => "ready",
        PlayerMode::Aiming => "aiming",
        PlayerMode::ChargingPower => "charging",
        PlayerMode::Launched => "in flight",
    }
}
