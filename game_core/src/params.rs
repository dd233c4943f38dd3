/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 480.0;
    pub const ARENA_ASPECT: (f32, f32) = (3.0, 5.0); // height = width * 3 / 5
    pub const ARENA_MAX_WIDTH: f32 = 800.0;
    pub const ARENA_MIN_WIDTH: f32 = 170.0; // Keeps height above PADDLE_HEIGHT
    pub const VIEWPORT_MARGIN: f32 = 40.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 300.0; // units per second

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 300.0;
    pub const BALL_SPEED_MAX: f32 = 400.0; // per axis
    pub const BALL_SPEED_INCREASE: f32 = 1.02; // Multiply vx on paddle hit
    pub const LAUNCH_CONE: f32 = std::f32::consts::FRAC_PI_4; // +-45 degrees

    // Physics
    pub const MAX_DT: f32 = 0.1; // Frames at or above this gap are skipped
}
