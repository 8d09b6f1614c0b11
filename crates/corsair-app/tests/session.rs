use std::cell::RefCell;
use std::rc::Rc;

use corsair_app::collaborators::{FrameRef, Hud, Renderer, SpriteSource};
use corsair_app::error::{SessionError, SpriteError};
use corsair_app::{Collaborators, GameSession};
use corsair_core::input::InputEvent;
use corsair_core::state::{HudUpdate, WorldSnapshot};
use corsair_core::types::Viewport;
use corsair_sim::SimConfig;

#[derive(Clone, Default)]
struct RecordingHud(Rc<RefCell<Vec<HudUpdate>>>);

impl Hud for RecordingHud {
    fn update_hud(&mut self, stats: &HudUpdate) {
        self.0.borrow_mut().push(stats.clone());
    }
}

#[derive(Clone, Default)]
struct RecordingRenderer {
    frames: Rc<RefCell<Vec<WorldSnapshot>>>,
    saw_sprites: Rc<RefCell<bool>>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snapshot: &WorldSnapshot, sprites: Option<&dyn SpriteSource>) {
        if let Some(sprites) = sprites {
            *self.saw_sprites.borrow_mut() = true;
            // Unloaded sheets must be tolerated.
            let _ = sprites.frame("ship_tier1", snapshot.player.heading);
        }
        self.frames.borrow_mut().push(snapshot.clone());
    }
}

struct BrokenSprites;

impl SpriteSource for BrokenSprites {
    fn load_all(&mut self) -> Result<(), SpriteError> {
        Err(SpriteError::LoadFailed {
            name: "ship_tier1".into(),
            reason: "404".into(),
        })
    }

    fn frame(&self, _name: &str, _angle: f64) -> Option<FrameRef> {
        None
    }
}

fn surface() -> Option<Viewport> {
    Some(Viewport::new(1280.0, 720.0))
}

#[test]
fn test_start_without_surface_fails() {
    let mut session = GameSession::default();
    let err = session.start(SimConfig::default(), None).unwrap_err();
    assert_eq!(err, SessionError::MissingSurface);
    assert!(!session.is_running());
    assert!(session.engine().is_none());
    assert!(session.on_animation_frame(16.0).is_none());
}

#[test]
fn test_start_with_zero_sized_surface_fails() {
    let mut session = GameSession::default();
    let err = session
        .start(SimConfig::default(), Some(Viewport::new(0.0, 720.0)))
        .unwrap_err();
    assert!(matches!(err, SessionError::InvalidSurface { .. }));
    assert!(!session.is_running());
}

#[test]
fn test_double_start_is_rejected() {
    let mut session = GameSession::default();
    session.start(SimConfig::default(), surface()).unwrap();
    assert_eq!(
        session.start(SimConfig::default(), surface()),
        Err(SessionError::AlreadyRunning)
    );
}

#[test]
fn test_hud_gets_initial_record_and_one_per_frame() {
    let hud = RecordingHud::default();
    let mut session = GameSession::new(Collaborators {
        hud: Some(Box::new(hud.clone())),
        ..Default::default()
    });
    session.start(SimConfig::default(), surface()).unwrap();
    assert_eq!(hud.0.borrow().len(), 1);
    assert_eq!(hud.0.borrow()[0].level, Some(1));
    assert_eq!(hud.0.borrow()[0].health, Some(100.0));

    for i in 0..10 {
        session.on_animation_frame(1000.0 + i as f64 * 16.0);
    }
    assert_eq!(hud.0.borrow().len(), 11);
}

#[test]
fn test_first_frame_uses_assumed_interval() {
    let mut session = GameSession::default();
    session.start(SimConfig::default(), surface()).unwrap();
    // A large first timestamp must not read as a long stall.
    let first = session.on_animation_frame(987_654.0).unwrap();
    assert!((first.dt - 1.0 / 15.0).abs() < 1e-12);
    let second = session.on_animation_frame(987_654.0).unwrap();
    assert_eq!(second.dt, 0.0);
}

#[test]
fn test_stop_halts_frames() {
    let mut session = GameSession::default();
    session.start(SimConfig::default(), surface()).unwrap();
    assert!(session.on_animation_frame(0.0).is_some());
    session.stop();
    assert!(!session.is_running());
    assert!(session.on_animation_frame(16.0).is_none());
    assert_eq!(session.engine().map(|e| e.time().frame), Some(1));
}

#[test]
fn test_runs_without_any_collaborators() {
    let mut session = GameSession::default();
    session.start(SimConfig::default(), surface()).unwrap();
    for i in 0..120 {
        assert!(session.on_animation_frame(i as f64 * 16.666).is_some());
    }
    assert_eq!(session.engine().map(|e| e.time().frame), Some(120));
}

#[test]
fn test_sprite_failure_is_not_fatal() {
    let renderer = RecordingRenderer::default();
    let mut session = GameSession::new(Collaborators {
        renderer: Some(Box::new(renderer.clone())),
        sprites: Some(Box::new(BrokenSprites)),
        ..Default::default()
    });
    session.start(SimConfig::default(), surface()).unwrap();
    session.on_animation_frame(0.0);
    assert!(session.is_running());
    assert_eq!(renderer.frames.borrow().len(), 1);
    assert!(*renderer.saw_sprites.borrow());
}

#[test]
fn test_renderer_receives_current_world() {
    let renderer = RecordingRenderer::default();
    let mut session = GameSession::new(Collaborators {
        renderer: Some(Box::new(renderer.clone())),
        ..Default::default()
    });
    session.start(SimConfig::default(), surface()).unwrap();
    for i in 0..3 {
        session.on_animation_frame(i as f64 * 16.666);
    }
    let frames = renderer.frames.borrow();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[2].time.frame, 3);
    assert_eq!(frames[0].ships.len(), 10);
    assert!(!frames[0].islands.is_empty());
    assert!(!*renderer.saw_sprites.borrow());
}

#[test]
fn test_click_sails_the_player() {
    let mut session = GameSession::default();
    session.start(SimConfig::default(), surface()).unwrap();
    let start = session.engine().map(|e| e.player().position).unwrap();

    // Camera centers the player, so a click right of screen center heads east.
    session.handle_input(&InputEvent::PrimaryClick {
        screen_x: 640.0 + 300.0,
        screen_y: 360.0,
    });
    for i in 0..30 {
        session.on_animation_frame(i as f64 * 16.666);
    }
    let now = session.engine().map(|e| e.player().position).unwrap();
    assert!(now.x > start.x + 10.0, "{start:?} -> {now:?}");
}

#[test]
fn test_resize_reframes_camera() {
    let mut session = GameSession::default();
    session.start(SimConfig::default(), surface()).unwrap();
    session.resize(Viewport::new(1000.0, 1000.0));
    let engine = session.engine().unwrap();
    assert_eq!(engine.viewport(), Viewport::new(1000.0, 1000.0));
    assert_eq!(engine.camera().x, 1500.0);
    assert_eq!(engine.camera().y, 1500.0);

    // Degenerate sizes are ignored.
    session.resize(Viewport::new(0.0, 0.0));
    assert_eq!(session.engine().unwrap().viewport(), Viewport::new(1000.0, 1000.0));
}
