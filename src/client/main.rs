use ggez::event::{self, EventHandler};
use ggez::graphics::{Color, Image};
use ggez::input::keyboard::KeyInput;
use ggez::winit::keyboard::PhysicalKey;
use ggez::{Context, ContextBuilder, GameError, GameResult, glam::Vec2};

pub mod config;
pub mod input;
pub mod physics;
pub mod player;
pub mod rendering;
pub mod session;
pub mod state;
pub mod ui;

use config::GameConfig;
use rendering::FrameCanvas;
use state::{GameState, Outcome};

const CONFIG_PATH: &str = "game_config.json";

struct MainState {
    game: GameState<Image>,
    ticks_per_second: u32,
}

impl MainState {
    fn new(ctx: &mut Context, config: &GameConfig) -> GameResult<Self> {
        let sprite = Image::from_path(ctx, &config.sprite_path)?;
        tracing::info!(
            sprite = %config.sprite_path,
            width = sprite.width(),
            height = sprite.height(),
            "sprite loaded"
        );

        Ok(Self {
            game: GameState::new(config, sprite),
            ticks_per_second: config.ticks_per_second,
        })
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(self.ticks_per_second) {
            self.game.tick();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut frame = FrameCanvas::new(ctx, Color::from_rgb(20, 20, 30));
        self.game.draw(&mut frame)?;
        frame.finish()
    }

    fn key_down_event(
        &mut self,
        ctx: &mut Context,
        input: KeyInput,
        repeat: bool,
    ) -> Result<(), GameError> {
        // held keys are repeated by the game's own trigger
        if repeat {
            return Ok(());
        }
        if let PhysicalKey::Code(keycode) = input.event.physical_key {
            if self.game.key_down(keycode) == Outcome::Quit {
                ctx.request_quit();
            }
        }
        Ok(())
    }

    fn key_up_event(&mut self, _ctx: &mut Context, input: KeyInput) -> Result<(), GameError> {
        if let PhysicalKey::Code(keycode) = input.event.physical_key {
            self.game.key_up(keycode);
        }
        Ok(())
    }

    fn resize_event(
        &mut self,
        _ctx: &mut Context,
        width: f32,
        height: f32,
    ) -> Result<(), GameError> {
        self.game.resize(Vec2::new(width, height));
        Ok(())
    }
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

pub fn main() -> GameResult {
    init_tracing();

    let config =
        GameConfig::load(CONFIG_PATH).map_err(|e| GameError::ConfigError(format!("{e:#}")))?;

    let (mut ctx, event_loop) = ContextBuilder::new("power_shot", "you")
        .window_setup(ggez::conf::WindowSetup::default().title("Power Shot"))
        .window_mode(
            ggez::conf::WindowMode::default()
                .dimensions(config.window.width, config.window.height)
                .resizable(true),
        )
        .add_resource_path("resources")
        .build()?;

    let state = MainState::new(&mut ctx, &config)?;
    tracing::info!(
        width = config.playfield.width,
        height = config.playfield.height,
        "match started"
    );
    event::run(ctx, event_loop, state)
}
