//! Backend-neutral drawing of a frame
//!
//! The game only needs a surface that can be cleared, filled with
//! rectangles and presented. The desktop client implements [`Canvas`] on top
//! of wgpu; tests record the calls instead.

use glam::Vec2;

use crate::{Ball, GameState, Paddle};

/// RGBA color, 0.0..=1.0 per channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Filled rectangle, top-left corner plus size, in window pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }
}

pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn present(&mut self);
}

/// Draw the current state exactly as simulated: black background, white
/// paddles (left first) and a white ball.
pub fn draw_frame(state: &GameState, canvas: &mut impl Canvas) {
    canvas.clear(Color::BLACK);

    let mut paddles: Vec<Paddle> = state
        .world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.player_id);
    for paddle in paddles {
        canvas.fill_rect(Rect::new(paddle.pos, paddle.size), Color::WHITE);
    }

    for (_entity, ball) in state.world.query::<&Ball>().iter() {
        canvas.fill_rect(Rect::new(ball.pos, ball.size), Color::WHITE);
    }

    canvas.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear(Color),
        Fill(Rect, Color),
        Present,
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl Canvas for Recorder {
        fn clear(&mut self, color: Color) {
            self.0.push(Call::Clear(color));
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.0.push(Call::Fill(rect, color));
        }

        fn present(&mut self) {
            self.0.push(Call::Present);
        }
    }

    #[test]
    fn test_draw_frame_order() {
        let state = GameState::new(Config::new());
        let mut canvas = Recorder::default();

        draw_frame(&state, &mut canvas);

        let paddle = Vec2::new(10.0, 50.0);
        assert_eq!(
            canvas.0,
            vec![
                Call::Clear(Color::BLACK),
                Call::Fill(Rect::new(Vec2::new(20.0, 20.0), paddle), Color::WHITE),
                Call::Fill(Rect::new(Vec2::new(770.0, 530.0), paddle), Color::WHITE),
                Call::Fill(
                    Rect::new(Vec2::new(400.0, 300.0), Vec2::splat(10.0)),
                    Color::WHITE
                ),
                Call::Present,
            ]
        );
    }

    #[test]
    fn test_color_to_array() {
        assert_eq!(Color::WHITE.to_array(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_array(), [0.0, 0.0, 0.0, 1.0]);
    }
}
