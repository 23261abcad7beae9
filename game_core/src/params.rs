/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window (logical pixels, origin top-left, +Y down)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 600.0; // pixels per second
    pub const PADDLE_INSET: f32 = 20.0; // gap between paddle and its side wall

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 500.0; // pixels per second, fixed after serve

    // Frame pacing
    pub const FPS: u64 = 60;
    pub const MAX_DT: f32 = 0.033; // Clamp to prevent large jumps
}
