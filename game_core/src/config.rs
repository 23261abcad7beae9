use glam::Vec2;

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub fps: u64,
    pub max_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            fps: Params::FPS,
            max_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-left spawn corner for a paddle.
    ///
    /// The left paddle starts in the top corner and the right paddle in the
    /// bottom corner, each `paddle_inset` away from its walls.
    pub fn paddle_spawn(&self, player_id: u8) -> Vec2 {
        if player_id == 0 {
            Vec2::new(self.paddle_inset, self.paddle_inset)
        } else {
            Vec2::new(
                self.window_width - self.paddle_inset - self.paddle_width,
                self.window_height - self.paddle_inset - self.paddle_height,
            )
        }
    }

    /// Ball spawn, used for both the first placement and every reset.
    /// This is the ball's top-left corner, not its center.
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.window_width / 2.0, self.window_height / 2.0)
    }

    /// Clamp paddle Y (top edge) to window bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.window_height - self.paddle_height)
    }

    /// Target frame duration in whole milliseconds
    pub fn frame_target_ms(&self) -> u64 {
        1000 / self.fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_spawn() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn(0), Vec2::new(20.0, 20.0), "Left paddle spawn");
        assert_eq!(
            config.paddle_spawn(1),
            Vec2::new(770.0, 530.0),
            "Right paddle spawn"
        );
    }

    #[test]
    fn test_config_ball_spawn() {
        let config = Config::new();
        assert_eq!(config.ball_spawn(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-15.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.window_height - config.paddle_height
        );
        let valid_y = 120.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_config_frame_target_ms() {
        let config = Config::new();
        assert_eq!(config.frame_target_ms(), 16, "1000 / 60 rounds down");

        let zero_fps = Config {
            fps: 0,
            ..Config::new()
        };
        assert_eq!(zero_fps.frame_target_ms(), 1000);
    }
}
