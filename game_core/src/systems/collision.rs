use crate::{Ball, Config, Events, Paddle};
use hecs::World;
use tracing::debug;

/// Reflect the ball off the top and bottom walls.
///
/// Only the vertical velocity flips; the ball is not pushed back inside, so
/// it can clip the wall for a frame.
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.bounds();
        if bounds.min.y <= 0.0 || bounds.max.y >= config.window_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            debug!(y = ball.pos.y, vy = ball.vel.y, "ball hit wall");
        }
    }
}

/// Bounce the ball off any paddle it overlaps.
///
/// Every paddle is tested every frame, left first. A ball overlapping both
/// paddles in one frame is resolved twice.
pub fn collide_paddles(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.player_id);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            let paddle_box = paddle.bounds();
            if !ball.bounds().overlaps(&paddle_box) {
                continue;
            }

            // Flush against the paddle face that points into the field
            ball.pos.x = if paddle.player_id == 0 {
                paddle_box.max.x
            } else {
                paddle_box.min.x - ball.size.x
            };
            ball.vel.x = -ball.vel.x;

            // Hit offset from paddle center, -1 at the top edge and 1 at the bottom
            let half_height = paddle.size.y / 2.0;
            let offset = (ball.center_y() - paddle.center_y()) / half_height;
            ball.vel.y = offset * config.ball_speed;

            events.ball_hit_paddle = true;
            debug!(
                player_id = paddle.player_id,
                offset,
                vx = ball.vel.x,
                vy = ball.vel.y,
                "ball hit paddle"
            );
        }
    }
}
