pub mod aabb;
pub mod components;
pub mod config;
pub mod params;
pub mod render;
pub mod report;
pub mod resources;
pub mod systems;
pub mod timing;

pub use aabb::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use render::*;
pub use report::*;
pub use resources::*;
pub use systems::InputSnapshot;
pub use timing::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Everything the frame loop owns: entities, timing, score and this frame's events
pub struct GameState {
    pub world: World,
    pub time: Time,
    pub score: Score,
    pub events: Events,
    pub config: Config,
    pub running: bool,
}

impl GameState {
    /// Spawn both paddles and a ball at rest
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, &config, 0);
        create_paddle(&mut world, &config, 1);
        create_ball(&mut world, &config);

        Self {
            world,
            time: Time::default(),
            score: Score::new(),
            events: Events::new(),
            config,
            running: true,
        }
    }

    /// Copy of the paddle owned by `player_id`
    pub fn paddle(&self, player_id: u8) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.player_id == player_id)
            .map(|(_e, paddle)| *paddle)
    }

    /// Copy of the ball
    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }
}

/// Sample one frame of input.
///
/// Clears the previous frame's events, moves paddles, serves a resting ball
/// and stops the loop when quit was requested.
pub fn apply_input(state: &mut GameState, input: &InputSnapshot, angles: &mut impl AngleSource) {
    state.events.clear();

    if input.quit {
        state.running = false;
    }

    ingest_inputs(
        &mut state.world,
        input,
        state.time.dt,
        &state.config,
        angles,
        &mut state.events,
    );
}

/// Pace the frame, then run the simulation with the measured delta
pub fn update<C: Clock>(state: &mut GameState, pacer: &mut FramePacer<C>) {
    let dt = pacer.tick();
    state.time.advance(dt);
    step(state);
}

/// Run the deterministic Pong simulation for `state.time.dt`
pub fn step(state: &mut GameState) {
    let dt = state.time.dt;

    // 1. Keep paddles inside the window
    clamp_paddles(&mut state.world, &state.config);

    // 2. Move ball
    move_ball(&mut state.world, dt);

    // 3. Top/bottom walls, then paddles
    bounce_walls(&mut state.world, &state.config, &mut state.events);
    collide_paddles(&mut state.world, &state.config, &mut state.events);

    // 4. Check scoring (ball left the window)
    check_scoring(
        &mut state.world,
        &state.config,
        &mut state.score,
        &mut state.events,
    );
}

/// Send the ball back to the center at rest. Scores are untouched.
pub fn reset_ball(state: &mut GameState) {
    reset_balls(&mut state.world, &state.config);
}

/// Helper to create a paddle entity at its spawn point
pub fn create_paddle(world: &mut World, config: &Config, player_id: u8) -> hecs::Entity {
    let size = Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((Paddle::new(player_id, config.paddle_spawn(player_id), size),))
}

/// Helper to create the ball entity, at rest on its spawn point
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    let size = Vec2::splat(config.ball_size);
    world.spawn((Ball::new(config.ball_spawn(), Vec2::ZERO, size),))
}
