use crate::{Ball, Config, Paddle};
use hecs::World;

/// Keep every paddle inside the window
pub fn clamp_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * dt;
    }
}
