use crate::{Ball, Config, Events, Score};
use hecs::World;
use tracing::debug;

/// Check if ball left the window (scoring)
///
/// Leaving past the right edge is a point for the left player and past the
/// left edge a point for the right player. Either way the ball goes back to
/// its spawn at rest.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x > config.window_width {
            score.increment_left();
            events.left_scored = true;
            ball.reset(config.ball_spawn());
            debug!(left = score.left, right = score.right, "left player scored");
        }

        if ball.pos.x < 0.0 {
            score.increment_right();
            events.right_scored = true;
            ball.reset(config.ball_spawn());
            debug!(left = score.left, right = score.right, "right player scored");
        }
    }
}

/// Put every ball back on its spawn, at rest. Scores are untouched.
pub fn reset_balls(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config.ball_spawn());
    }
}
