//! Whole-round scenarios driven through the host-facing API

use glam::Vec2;

use trash_boat::canvas::{Canvas, PixelFrame, Rgba, Sprite, TextAlign};
use trash_boat::platform::{Key, ManualClock, StartControl};
use trash_boat::sim::{Collectible, GamePhase, TickInput};
use trash_boat::{Game, Settings};

/// Canvas that remembers what it was asked to draw
#[derive(Default)]
struct RecordingCanvas {
    clears: usize,
    frames: usize,
    sprites: Vec<(Sprite, Vec2, Vec2)>,
    texts: Vec<String>,
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, _color: Rgba) {
        self.clears += 1;
        self.sprites.clear();
        self.texts.clear();
    }

    fn put_pixels(&mut self, _frame: &PixelFrame) {
        self.frames += 1;
    }

    fn draw_sprite(&mut self, sprite: Sprite, center: Vec2, size: Vec2) {
        self.sprites.push((sprite, center, size));
    }

    fn draw_text(&mut self, text: &str, _pos: Vec2, _size: f32, _align: TextAlign) {
        self.texts.push(text.to_string());
    }
}

/// Start control that logs show/hide calls
#[derive(Default)]
struct RecordingButton {
    visible: bool,
    placed: Option<(f32, f32, f32, f32)>,
    shows: usize,
    hides: usize,
}

impl StartControl for RecordingButton {
    fn place(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.placed = Some((x, y, width, height));
    }

    fn show(&mut self) {
        self.visible = true;
        self.shows += 1;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.hides += 1;
    }
}

const WIDTH: u32 = 320;
const HEIGHT: u32 = 480;

fn new_game(clock: &ManualClock) -> Game<ManualClock, RecordingButton> {
    Game::new(
        &Settings::default(),
        WIDTH,
        HEIGHT,
        99,
        clock.clone(),
        RecordingButton::default(),
    )
    .unwrap()
}

/// Keep the boat parked far from anything that falls
fn park() -> TickInput {
    TickInput {
        pointer: Some(Vec2::new(-1000.0, -1000.0)),
        ..Default::default()
    }
}

#[test]
fn start_button_begins_round() {
    let clock = ManualClock::new(500.0);
    let mut game = new_game(&clock);
    assert_eq!(game.start_control().placed, Some((110.0, 240.0, 100.0, 50.0)));
    assert!(game.start_control().visible);

    game.start_pressed();
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.state.seconds_remaining, 60);
    assert_eq!(game.state.collectibles.len(), 5);
    assert_eq!(game.state.score, 0);
    assert!(!game.start_control().visible);

    // A second press mid-round changes nothing
    game.start_pressed();
    assert_eq!(game.state.collectibles.len(), 5);
    assert_eq!(game.start_control().hides, 1);
}

#[test]
fn countdown_follows_wall_clock() {
    let clock = ManualClock::new(0.0);
    let mut game = new_game(&clock);
    let mut canvas = RecordingCanvas::default();

    // Idle frames never touch the timer
    clock.advance(5000.0);
    game.frame(&park(), &mut canvas);
    assert_eq!(game.state.seconds_remaining, 60);
    assert_eq!(canvas.texts, vec!["Press Space or Click Start to Begin"]);

    game.key_pressed(Key::Space);
    clock.advance(1000.0);
    game.frame(&park(), &mut canvas);
    assert_eq!(game.state.seconds_remaining, 59);

    // Many fast frames inside one second step nothing
    for _ in 0..10 {
        clock.advance(50.0);
        game.frame(&park(), &mut canvas);
    }
    assert_eq!(game.state.seconds_remaining, 59);

    // Run the clock out one second at a time
    while game.phase() == GamePhase::Playing {
        clock.advance(1000.0);
        game.frame(&park(), &mut canvas);
    }
    assert_eq!(game.state.seconds_remaining, 0);
    assert_eq!(game.phase(), GamePhase::GameOver);
}

#[test]
fn game_over_screen_then_halt() {
    let clock = ManualClock::new(0.0);
    let mut game = new_game(&clock);
    let mut canvas = RecordingCanvas::default();
    game.start_pressed();

    for _ in 0..60 {
        clock.advance(1000.0);
        game.frame(&park(), &mut canvas);
    }
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(!game.is_looping());

    let overlay = canvas
        .sprites
        .iter()
        .find(|(s, _, _)| *s == Sprite::GameOverOverlay)
        .expect("overlay drawn");
    assert_eq!(overlay.1, Vec2::new(160.0, 240.0));
    assert_eq!(overlay.2, Vec2::new(320.0, 480.0));
    assert!(canvas.texts.contains(&"Time: 0".to_string()));
    assert!(canvas.texts.contains(&format!("Your score: {}", game.state.score)));
    assert!(canvas.texts.contains(&"Press Space".to_string()));

    // Halted: further frames draw nothing and the clock is ignored
    let clears = canvas.clears;
    clock.advance(10_000.0);
    assert!(!game.frame(&park(), &mut canvas));
    assert_eq!(canvas.clears, clears);
    assert_eq!(game.state.seconds_remaining, 0);

    // The start button stays hidden; only Space restarts
    game.start_pressed();
    assert_eq!(game.phase(), GamePhase::GameOver);
}

#[test]
fn space_restarts_after_game_over() {
    let clock = ManualClock::new(0.0);
    let mut game = new_game(&clock);
    let mut canvas = RecordingCanvas::default();
    game.key_pressed(Key::Space);

    game.state.score = 7;
    game.state.collectibles.push(Collectible::new(Vec2::new(1.0, 1.0)));
    game.state.seconds_remaining = 1;
    clock.advance(1000.0);
    game.frame(&park(), &mut canvas);
    assert_eq!(game.phase(), GamePhase::GameOver);

    // Space mid-round would be ignored; after game over it restarts
    clock.advance(3000.0);
    game.key_pressed(Key::Space);
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.state.score, 0);
    assert_eq!(game.state.seconds_remaining, 60);
    assert_eq!(game.state.collectibles.len(), 5);
    assert!(game.is_looping());
    assert_eq!(game.start_control().shows, 2);
    assert!(!game.start_control().visible);

    clock.advance(1000.0);
    assert!(game.frame(&park(), &mut canvas));
    assert_eq!(game.state.seconds_remaining, 59);
}

#[test]
fn pickup_scores_on_frame() {
    let clock = ManualClock::new(0.0);
    let mut game = new_game(&clock);
    let mut canvas = RecordingCanvas::default();
    game.start_pressed();

    game.state.collectibles = vec![
        Collectible::new(Vec2::new(110.0, 97.0)),
        Collectible::new(Vec2::new(300.0, -200.0)),
    ];
    let input = TickInput {
        pointer: Some(Vec2::new(100.0, 100.0)),
        ..Default::default()
    };
    game.frame(&input, &mut canvas);

    assert_eq!(game.state.score, 1);
    assert_eq!(game.state.collectibles.len(), 1);
    assert!(canvas.texts.contains(&"Score: 1".to_string()));
    assert_eq!(canvas.frames, 1);

    let boats: Vec<_> = canvas
        .sprites
        .iter()
        .filter(|(s, _, _)| *s == Sprite::Boat)
        .collect();
    assert_eq!(boats.len(), 1);
    assert_eq!(boats[0].1, Vec2::new(100.0, 100.0));
    assert_eq!(boats[0].2, Vec2::splat(60.0));
    assert_eq!(
        canvas
            .sprites
            .iter()
            .filter(|(s, _, _)| *s == Sprite::Trash)
            .count(),
        1
    );
}

#[test]
fn keyboard_moves_boat_only_while_playing() {
    let clock = ManualClock::new(0.0);
    let mut game = new_game(&clock);
    let mut canvas = RecordingCanvas::default();
    let start = game.state.player.pos;
    let left = TickInput {
        left: true,
        ..Default::default()
    };

    game.frame(&left, &mut canvas);
    assert_eq!(game.state.player.pos, start);

    game.start_pressed();
    game.frame(&left, &mut canvas);
    assert_eq!(game.state.player.pos, start - Vec2::new(8.0, 0.0));
}

#[test]
fn touch_scroll_is_suppressed() {
    let clock = ManualClock::new(0.0);
    let game = new_game(&clock);
    assert!(game.suppress_touch_scroll());
}
