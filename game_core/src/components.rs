use glam::Vec2;

use crate::aabb::Aabb;

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left, 1 = right
    pub pos: Vec2,     // Top-left corner
    pub size: Vec2,
}

impl Paddle {
    pub fn new(player_id: u8, pos: Vec2, size: Vec2) -> Self {
        Self {
            player_id,
            pos,
            size,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub vel: Vec2,
    pub size: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self { pos, vel, size }
    }

    /// A ball at rest has not been served yet
    pub fn is_served(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    /// Launch the ball from rest along `angle` (radians)
    pub fn serve(&mut self, angle: f32, speed: f32) {
        self.vel = Vec2::new(angle.cos(), angle.sin()) * speed;
    }

    /// Put the ball back on its spawn point, at rest
    pub fn reset(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}
