use rand::Rng;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32, // Delta time of the last paced frame
}

impl Time {
    /// Record the delta of a freshly paced frame
    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Source of serve angles, in radians
pub trait AngleSource {
    fn next_angle(&mut self) -> f32;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl AngleSource for GameRng {
    /// Whole degree drawn uniformly from [0, 360)
    fn next_angle(&mut self) -> f32 {
        let degrees: u32 = self.0.gen_range(0..360);
        (degrees as f32).to_radians()
    }
}

/// Always serves along the same angle, given in degrees
#[derive(Debug, Clone, Copy)]
pub struct FixedAngle(pub f32);

impl AngleSource for FixedAngle {
    fn next_angle(&mut self) -> f32 {
        self.0.to_radians()
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub served: bool,
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.served = false;
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment_left();
        assert_eq!(score.left, 1);
        score.increment_left();
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        assert_eq!(score.right, 0);
        score.increment_right();
        assert_eq!(score.right, 1);
        assert_eq!(score.left, 0);
    }

    #[test]
    fn test_time_advance() {
        let mut time = Time::default();
        time.advance(0.016);
        time.advance(0.020);
        assert_eq!(time.dt, 0.020, "Only the latest frame's delta is kept");
    }

    #[test]
    fn test_rng_angles_are_whole_degrees_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let degrees = rng.next_angle().to_degrees();
            assert!((0.0..360.0).contains(&degrees), "Angle {} out of range", degrees);
            assert!((degrees - degrees.round()).abs() < 1e-3, "Angle {} not whole", degrees);
        }
    }

    #[test]
    fn test_rng_is_reproducible() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_angle(), b.next_angle());
        }
    }

    #[test]
    fn test_fixed_angle() {
        let mut angle = FixedAngle(90.0);
        assert!((angle.next_angle() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.served = true;
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        assert!(events.scored());

        events.clear();

        assert!(!events.served);
        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.scored());
    }
}
