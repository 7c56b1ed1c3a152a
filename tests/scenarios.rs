use glam::Vec2;

use ray_dodge::renderer::{DrawCommand, EntityRef, build_scene};
use ray_dodge::replay::InputScript;
use ray_dodge::sim::{
    FrameIntents, GameEvent, GameOverCause, GamePhase, GameState, MoveRejection, SpeedMode, tick,
};
use ray_dodge::{ObstacleConfig, SessionConfig};

fn idle() -> FrameIntents {
    FrameIntents::default()
}

/// One ray at y = 410, nothing in its way
fn single_ray_session() -> GameState {
    GameState::new(&SessionConfig {
        arena_size: 800.0,
        player_radius: 10.0,
        player_start: Vec2::new(400.0, 100.0),
        ray_speed: 2.0,
        ray_origin_x: 0.0,
        ray_first_offset: 410.0,
        ray_spacing: 1000.0,
        obstacles: Vec::new(),
        ..Default::default()
    })
}

#[test]
fn move_into_obstacle_is_rolled_back() {
    let mut state = GameState::new(&SessionConfig {
        arena_size: 800.0,
        player_radius: 10.0,
        player_start: Vec2::new(240.0, 100.0),
        step: 10.0,
        obstacles: vec![ObstacleConfig::new(20.0, 200.0, 100.0)],
        ..Default::default()
    });
    state.rays.clear();

    // Nudge the player to (229, 100) and try to step 10 toward the obstacle
    state.player.pos = Vec2::new(229.0, 100.0);
    let events = tick(
        &mut state,
        &FrameIntents {
            move_left: true,
            ..idle()
        },
    );

    assert_eq!(state.player.pos, Vec2::new(229.0, 100.0));
    assert_eq!(
        events,
        vec![GameEvent::MoveRejected {
            reason: MoveRejection::Obstacle(0)
        }]
    );
}

#[test]
fn ray_crosses_arena_and_ends_session() {
    let mut state = single_ray_session();

    for _ in 0..200 {
        tick(&mut state, &idle());
    }
    assert_eq!(state.rays[0].pos, Vec2::new(400.0, 410.0));
    assert_eq!(state.phase, GamePhase::Playing);

    for _ in 200..399 {
        tick(&mut state, &idle());
    }
    assert_eq!(state.rays[0].pos.x, 798.0);
    assert_eq!(state.phase, GamePhase::Playing);

    let events = tick(&mut state, &idle());
    assert_eq!(state.rays[0].pos.x, 800.0);
    assert_eq!(state.phase, GamePhase::Over);
    assert_eq!(state.frame, 400);
    assert_eq!(
        events,
        vec![
            GameEvent::RayEscaped { ray: 0 },
            GameEvent::GameOver(GameOverCause::RayEscaped { ray: 0 }),
        ]
    );
}

#[test]
fn double_toggle_restores_step() {
    let mut state = single_ray_session();
    let original = state.player_step();
    let toggle = FrameIntents {
        toggle_speed: true,
        ..idle()
    };

    tick(&mut state, &toggle);
    assert_eq!(state.player.speed_mode, SpeedMode::Fast);
    assert_eq!(state.player_step(), original * 20.0);

    tick(&mut state, &toggle);
    assert_eq!(state.player.speed_mode, SpeedMode::Normal);
    assert_eq!(state.player_step(), original);
}

#[test]
fn ray_freezes_on_first_contact_and_keeps_its_trail() {
    let mut state = GameState::new(&SessionConfig {
        player_start: Vec2::new(700.0, 700.0),
        ray_first_offset: 410.0,
        ray_spacing: 1000.0,
        obstacles: vec![ObstacleConfig::new(30.0, 300.0, 420.0)],
        ..Default::default()
    });

    // Contact once (x - 300)^2 + 10^2 <= 30^2, i.e. x >= 300 - sqrt(800) ~ 271.7
    let mut freeze_frame = None;
    for frame in 1..=200u64 {
        let events = tick(&mut state, &idle());
        if let Some(GameEvent::RayFrozen { x, .. }) = events
            .iter()
            .find(|e| matches!(e, GameEvent::RayFrozen { .. }))
        {
            freeze_frame = Some((frame, *x));
            break;
        }
        assert!(!state.rays[0].collided);
    }

    let (frame, x) = freeze_frame.expect("ray never froze");
    assert_eq!((frame, x), (136, 272.0));
    assert!(state.rays[0].collided);

    let trail = state.rays[0].path.clone();
    assert_eq!(trail.len(), 137);
    assert_eq!(*trail.last().unwrap(), Vec2::new(272.0, 410.0));

    for _ in 0..300 {
        tick(&mut state, &idle());
    }
    assert!(state.rays[0].collided);
    assert_eq!(state.rays[0].path, trail);
    assert_eq!(state.phase, GamePhase::Playing);

    let scene = build_scene(&state);
    let drawn = scene
        .iter()
        .find(|d| d.entity == EntityRef::Ray(0))
        .map(|d| d.command.clone());
    assert_eq!(
        drawn,
        Some(DrawCommand::Polyline {
            points: trail,
            thickness: 1.0,
        })
    );
}

#[test]
fn scripted_session_matches_manual_ticks() {
    let script = InputScript::from_json_str(
        r#"{ "segments": [
            { "frames": 1, "toggle_speed": true },
            { "frames": 5, "move_down": true },
            { "frames": 3, "move_left": true, "move_up": true }
        ] }"#,
    )
    .unwrap();

    let mut scripted = single_ray_session();
    for input in script.frames() {
        tick(&mut scripted, &input);
    }

    // 5 fast steps down from y = 100 would end at y = 0; the walls stop it at 20
    assert_eq!(scripted.player.speed_mode, SpeedMode::Fast);
    assert_eq!(scripted.player.pos, Vec2::new(340.0, 80.0));
    assert_eq!(scripted.frame, 9);
}

#[test]
fn default_session_ends_when_open_lane_ray_escapes() {
    let mut state = GameState::new(&SessionConfig::default());
    while !state.is_over() {
        tick(&mut state, &idle());
    }
    assert_eq!(state.frame, 400);
    assert_eq!(state.cause, Some(GameOverCause::RayEscaped { ray: 10 }));
    assert_eq!(state.player.pos, Vec2::new(750.0, 50.0));
}
