use hecs::World;
use tracing::debug;

use crate::components::*;
use crate::resources::*;
use crate::Config;

/// Keyboard state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub serve: bool,
    pub quit: bool,
}

/// Move paddles from held keys and serve the ball if it is at rest.
///
/// Paddles move by `paddle_speed * dt` where `dt` is the delta of the
/// previous frame; bounds are enforced later by `clamp_paddles`.
pub fn ingest_inputs(
    world: &mut World,
    input: &InputSnapshot,
    dt: f32,
    config: &Config,
    angles: &mut impl AngleSource,
    events: &mut Events,
) {
    let step = config.paddle_speed * dt;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let (up, down) = if paddle.player_id == 0 {
            (input.left_up, input.left_down)
        } else {
            (input.right_up, input.right_down)
        };
        if up {
            paddle.pos.y -= step;
        }
        if down {
            paddle.pos.y += step;
        }
    }

    if !input.serve {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.is_served() {
            continue;
        }
        let angle = angles.next_angle();
        ball.serve(angle, config.ball_speed);
        events.served = true;
        debug!(
            angle_deg = angle.to_degrees(),
            vx = ball.vel.x,
            vy = ball.vel.y,
            "ball served"
        );
    }
}
