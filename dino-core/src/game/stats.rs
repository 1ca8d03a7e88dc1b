//! Per-session statistics

/// Counters for one play session
///
/// Reset together with the arena at the start of every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionStats {
    /// Shift-steps survived
    pub ticks: u32,
    /// Jumps started (bottom row to top row)
    pub jumps: u32,
    /// Obstacles staged by the spawner
    pub spawned: u32,
    /// Obstacles that passed the player column without a collision
    pub cleared: u32,
}

impl SessionStats {
    pub(crate) fn record_tick(&mut self, cleared: u32) {
        self.ticks = self.ticks.saturating_add(1);
        self.cleared = self.cleared.saturating_add(cleared);
    }

    pub(crate) fn record_jump(&mut self) {
        self.jumps = self.jumps.saturating_add(1);
    }

    pub(crate) fn record_spawn(&mut self) {
        self.spawned = self.spawned.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = SessionStats::default();
        stats.record_tick(0);
        stats.record_tick(2);
        stats.record_jump();
        stats.record_spawn();

        assert_eq!(
            stats,
            SessionStats {
                ticks: 2,
                jumps: 1,
                spawned: 1,
                cleared: 2
            }
        );
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = SessionStats {
            ticks: u32::MAX,
            ..Default::default()
        };
        stats.record_tick(1);
        assert_eq!(stats.ticks, u32::MAX);
    }
}
