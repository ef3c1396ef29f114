//! Frame orchestration
//!
//! [`Game`] is what the host drives: one [`Game::frame`] call per tick plus
//! the start, key and touch callbacks. It owns the session state, the
//! background field and the host capabilities, and is the only place the
//! simulation and the canvas meet.

use glam::Vec2;

use crate::canvas::{BLACK, Canvas, PixelFrame, Sprite, TextAlign};
use crate::consts::*;
use crate::error::ConfigError;
use crate::field::BackgroundField;
use crate::platform::{Clock, Key, StartControl};
use crate::settings::Settings;
use crate::sim::{self, Bounds, GamePhase, GameState, TickInput};

const PROMPT_TEXT: &str = "Press Space or Click Start to Begin";
const RESTART_TEXT: &str = "Press Space";

/// A game session wired to its host
pub struct Game<C: Clock, S: StartControl> {
    pub state: GameState,
    field: BackgroundField,
    background: PixelFrame,
    clock: C,
    start_control: S,
    /// False once the game-over screen has been drawn
    looping: bool,
}

impl<C: Clock, S: StartControl> Game<C, S> {
    /// Set up an idle session on a `width` x `height` canvas
    pub fn new(
        settings: &Settings,
        width: u32,
        height: u32,
        seed: u64,
        clock: C,
        mut start_control: S,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        let field = BackgroundField::generate(settings.field_seed, settings.seed_points, width, height)?;
        let bounds = Bounds::new(width as f32, height as f32);

        let center = bounds.center();
        start_control.place(
            center.x - START_BUTTON_WIDTH / 2.0,
            center.y,
            START_BUTTON_WIDTH,
            START_BUTTON_HEIGHT,
        );
        start_control.show();

        log::info!("Game initialized {}x{} with seed {}", width, height, seed);

        Ok(Self {
            state: GameState::new(seed, bounds, settings.round_seconds),
            field,
            background: PixelFrame::new(width, height),
            clock,
            start_control,
            looping: true,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Whether the host should keep calling [`Game::frame`] for new pixels
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn start_control(&self) -> &S {
        &self.start_control
    }

    /// Start button callback
    pub fn start_pressed(&mut self) {
        if sim::start_round(&mut self.state, self.clock.now_ms()) {
            self.start_control.hide();
        }
    }

    /// Key press callback: Space starts from Idle and restarts from GameOver
    pub fn key_pressed(&mut self, key: Key) {
        if key != Key::Space {
            return;
        }
        match self.state.phase {
            GamePhase::Idle => self.start_pressed(),
            GamePhase::GameOver => self.restart(),
            GamePhase::Playing => {}
        }
    }

    fn restart(&mut self) {
        sim::reset(&mut self.state);
        self.start_control.show();
        self.looping = true;
        self.start_pressed();
    }

    /// Touch-drag hook: the host should cancel native scrolling
    pub fn suppress_touch_scroll(&self) -> bool {
        true
    }

    /// Run one tick and draw it. Returns false when nothing was drawn
    /// because the loop is halted on the game-over screen.
    pub fn frame(&mut self, input: &TickInput, canvas: &mut impl Canvas) -> bool {
        if !self.looping {
            return false;
        }

        let (width, height) = (self.state.bounds.width, self.state.bounds.height);
        canvas.clear(BLACK);

        if self.state.phase == GamePhase::Idle {
            canvas.draw_text(
                PROMPT_TEXT,
                Vec2::new(width / 2.0, height / 2.0 - 60.0),
                32.0,
                TextAlign::Center,
            );
            return true;
        }

        self.field.render(&mut self.background);
        canvas.put_pixels(&self.background);

        let events = sim::tick(&mut self.state, input, self.clock.now_ms());
        self.draw_entities(canvas);
        self.draw_hud(canvas);

        if events.game_over {
            self.draw_game_over(canvas);
            self.looping = false;
        }
        true
    }

    fn draw_entities(&self, canvas: &mut impl Canvas) {
        let player = &self.state.player;
        canvas.draw_sprite(Sprite::Boat, player.pos, Vec2::splat(player.size));
        for c in &self.state.collectibles {
            canvas.draw_sprite(Sprite::Trash, c.pos, Vec2::splat(c.size));
        }
    }

    fn draw_hud(&self, canvas: &mut impl Canvas) {
        let width = self.state.bounds.width;
        canvas.draw_text(
            &format!("Score: {}", self.state.score),
            Vec2::new(60.0, 30.0),
            24.0,
            TextAlign::Center,
        );
        canvas.draw_text(
            &format!("Time: {}", self.state.seconds_remaining),
            Vec2::new(width - 100.0, 30.0),
            24.0,
            TextAlign::Center,
        );
    }

    fn draw_game_over(&self, canvas: &mut impl Canvas) {
        let bounds = self.state.bounds;
        canvas.draw_sprite(
            Sprite::GameOverOverlay,
            bounds.center(),
            Vec2::new(bounds.width, bounds.height),
        );
        canvas.draw_text(
            &format!("Your score: {}", self.state.score),
            Vec2::new(bounds.width / 2.0, bounds.height - 80.0),
            28.0,
            TextAlign::Center,
        );
        canvas.draw_text(
            RESTART_TEXT,
            Vec2::new(bounds.width / 2.0, bounds.height - 50.0),
            28.0,
            TextAlign::Center,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Assets, FrameCanvas};
    use crate::platform::{HeadlessStartControl, ManualClock};

    fn game(clock: &ManualClock) -> Game<ManualClock, HeadlessStartControl> {
        Game::new(
            &Settings::default(),
            400,
            400,
            7,
            clock.clone(),
            HeadlessStartControl::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_game_idle_with_button() {
        let clock = ManualClock::new(0.0);
        let g = game(&clock);
        assert_eq!(g.phase(), GamePhase::Idle);
        assert!(g.start_control().visible);
        assert!(g.is_looping());
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let settings = Settings {
            seed_points: 0,
            ..Default::default()
        };
        let result = Game::new(
            &settings,
            64,
            48,
            7,
            ManualClock::default(),
            HeadlessStartControl::default(),
        );
        assert!(matches!(result, Err(ConfigError::NoSeedPoints)));

        let result = Game::new(
            &Settings::default(),
            0,
            48,
            7,
            ManualClock::default(),
            HeadlessStartControl::default(),
        );
        assert!(matches!(result, Err(ConfigError::EmptyCanvas { .. })));
    }

    #[test]
    fn test_idle_frame_is_prompt_only() {
        let clock = ManualClock::new(0.0);
        let mut g = game(&clock);
        let mut canvas = FrameCanvas::new(400, 400, Assets::placeholder());
        assert!(g.frame(&TickInput::default(), &mut canvas));
        assert_eq!(canvas.hud().len(), 1);
        assert_eq!(canvas.hud()[0].text, PROMPT_TEXT);
        assert!(canvas.frame().pixels().iter().all(|p| *p == BLACK));
    }

    #[test]
    fn test_other_keys_ignored() {
        let clock = ManualClock::new(0.0);
        let mut g = game(&clock);
        g.key_pressed(Key::Other);
        assert_eq!(g.phase(), GamePhase::Idle);
        g.key_pressed(Key::Space);
        assert_eq!(g.phase(), GamePhase::Playing);
        assert!(!g.start_control().visible);
    }

    #[test]
    fn test_playing_frame_draws_field_and_hud() {
        let clock = ManualClock::new(0.0);
        let mut g = game(&clock);
        g.start_pressed();
        let mut canvas = FrameCanvas::new(400, 400, Assets::placeholder());
        g.frame(&TickInput::default(), &mut canvas);
        let texts: Vec<_> = canvas.hud().iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["Score: 0", "Time: 60"]);
        assert!(canvas.frame().pixels().iter().any(|p| *p != BLACK));
    }
}
