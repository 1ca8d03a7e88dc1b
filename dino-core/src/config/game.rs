//! Game loop tuning

/// Default consecutive ticks the player may stay in the top row
pub const DEFAULT_JUMP_CAP: u8 = 2;

/// Default shift-steps per macro-tick (one spawn decision each)
pub const DEFAULT_STEPS_PER_SPAWN: u8 = 3;

/// Default exclusive upper bound of the spawn draw
pub const DEFAULT_SPAWN_RANGE: u32 = 3;

/// Default delay between the two player animation frames
pub const DEFAULT_FRAME_DELAY_MS: u32 = 100;

/// Default pause after resetting the arena
pub const DEFAULT_SESSION_START_DELAY_MS: u32 = 20;

/// Default re-poll interval while waiting for the button
pub const DEFAULT_INPUT_POLL_MS: u32 = 5;

/// Smallest spawn range that can still produce both obstacle kinds
pub const MIN_SPAWN_RANGE: u32 = 3;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Jump cap of zero would make jumping impossible
    ZeroJumpCap,
    /// At least one shift-step is needed per spawn decision
    ZeroStepsPerSpawn,
    /// Spawn range below 3 never produces a low obstacle
    SpawnRangeTooSmall,
    /// The animation delay is the only thing pacing the game
    ZeroFrameDelay,
}

/// Tuning values for the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    /// Maximum consecutive ticks in the top row
    pub jump_cap: u8,
    /// Shift-steps between spawn decisions
    pub steps_per_spawn: u8,
    /// Exclusive upper bound of the spawn draw.
    /// A draw of 1 spawns a high obstacle, 2 a low one, anything else nothing.
    pub spawn_range: u32,
    /// Delay between the two player animation frames (ms)
    pub frame_delay_ms: u32,
    /// Pause after resetting the arena at session start (ms)
    pub session_start_delay_ms: u32,
    /// Re-poll interval while waiting for the button (ms)
    pub input_poll_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            jump_cap: DEFAULT_JUMP_CAP,
            steps_per_spawn: DEFAULT_STEPS_PER_SPAWN,
            spawn_range: DEFAULT_SPAWN_RANGE,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            session_start_delay_ms: DEFAULT_SESSION_START_DELAY_MS,
            input_poll_ms: DEFAULT_INPUT_POLL_MS,
        }
    }
}

impl GameConfig {
    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jump_cap == 0 {
            return Err(ConfigError::ZeroJumpCap);
        }
        if self.steps_per_spawn == 0 {
            return Err(ConfigError::ZeroStepsPerSpawn);
        }
        if self.spawn_range < MIN_SPAWN_RANGE {
            return Err(ConfigError::SpawnRangeTooSmall);
        }
        if self.frame_delay_ms == 0 {
            return Err(ConfigError::ZeroFrameDelay);
        }
        Ok(())
    }
}
