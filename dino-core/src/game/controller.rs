//! Game controller
//!
//! Owns the arena, the player and the session state, and drives the
//! display, button, random and delay collaborators. Every wait is an
//! `.await` on the delay, so a cooperative executor can run other tasks
//! in between; no game state changes while waiting.

use core::convert::Infallible;

use embedded_hal_async::delay::DelayNs;

use super::render;
use super::stats::SessionStats;
use crate::arena::Arena;
use crate::config::screens::{ATTRACT_SCREEN, GAME_OVER_SCREEN};
use crate::config::{ConfigError, GameConfig, PLAYER_COLUMN};
use crate::glyph::GlyphSlot;
use crate::player::PlayerState;
use crate::state::{Event, SessionState};
use crate::traits::{ButtonInput, CharacterDisplay, CharacterDisplayExt, DisplayError, RandomSource};

/// Outcome of advancing the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Arena shifted, session continues
    Advanced,
    /// An obstacle was about to hit the player; session is over
    Collided,
    /// No session is being played; nothing changed
    Stopped,
}

/// Single-button game controller
pub struct GameController<D, B, R, T> {
    display: D,
    button: B,
    rng: R,
    delay: T,
    config: GameConfig,
    state: SessionState,
    arena: Arena,
    player: PlayerState,
    stats: SessionStats,
}

impl<D, B, R, T> GameController<D, B, R, T>
where
    D: CharacterDisplay,
    B: ButtonInput,
    R: RandomSource,
    T: DelayNs,
{
    /// Create a controller in the attract state
    pub fn new(
        display: D,
        button: B,
        rng: R,
        delay: T,
        config: GameConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            display,
            button,
            rng,
            delay,
            config,
            state: SessionState::Attract,
            arena: Arena::new(),
            player: PlayerState::new(config.jump_cap),
            stats: SessionStats::default(),
        })
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The obstacle field
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// The player
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Statistics of the current (or last) session
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Active tuning values
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Upload the glyphs and show the attract screen
    pub fn boot(&mut self) -> Result<(), DisplayError> {
        self.state = SessionState::Attract;
        self.display.define_game_glyphs()?;
        render::render_screen(&mut self.display, &ATTRACT_SCREEN)?;
        info!("Attract screen shown");
        Ok(())
    }

    /// Poll the button until it reads activated
    ///
    /// Returns the number of polls that read inactive.
    pub async fn wait_for_button(&mut self) -> u32 {
        let mut polls: u32 = 0;
        while !self.button.is_activated() {
            polls = polls.wrapping_add(1);
            self.delay.delay_ms(self.config.input_poll_ms).await;
        }
        polls
    }

    /// Wait for the button on the current screen, then start a session
    pub async fn press_to_continue(&mut self) -> Result<(), DisplayError> {
        let polls = self.wait_for_button().await;
        self.rng.mix_entropy(polls);

        let next = self.state.transition(Event::ButtonPressed);
        debug!("{} -> {} after {} polls", self.state, next, polls);
        self.state = next;

        if self.state.is_playing() {
            self.start_session().await?;
        }
        Ok(())
    }

    /// Reset the field and draw the player on an empty screen
    async fn start_session(&mut self) -> Result<(), DisplayError> {
        self.arena.reset();
        self.player.reset();
        self.stats = SessionStats::default();

        self.delay.delay_ms(self.config.session_start_delay_ms).await;

        self.display.clear()?;
        render::draw_player(&mut self.display, self.player.row(), GlyphSlot::DinoStride)?;
        info!("Session started");
        Ok(())
    }

    /// Advance the game by one tick
    ///
    /// Collision is checked against the arena before it shifts. On
    /// collision the session ends and nothing else is touched.
    pub async fn shift_step(&mut self) -> Result<TickOutcome, DisplayError> {
        if !self.state.is_playing() {
            return Ok(TickOutcome::Stopped);
        }

        if self.arena.will_collide(self.player.row()) {
            self.state = self.state.transition(Event::Collision);
            debug!("Collision in {} row", self.player.row());
            return Ok(TickOutcome::Collided);
        }

        let changes = self.arena.step();
        let cleared = changes
            .iter()
            .filter(|change| change.to as usize == PLAYER_COLUMN)
            .count() as u32;
        self.stats.record_tick(cleared);
        render::render_changes(&mut self.display, &changes)?;

        let activated = self.button.is_activated();
        let movement = self.player.update(activated);
        self.arena.place_player(movement.to);
        if movement.jumped && movement.from != movement.to {
            self.stats.record_jump();
        }

        render::clear_vacated_row(&mut self.display, movement.to)?;
        render::draw_player(&mut self.display, movement.to, GlyphSlot::DinoStride)?;
        self.delay.delay_ms(self.config.frame_delay_ms).await;
        render::draw_player(&mut self.display, movement.to, GlyphSlot::DinoStep)?;

        Ok(TickOutcome::Advanced)
    }

    /// Run the configured number of ticks, then make one spawn decision
    pub async fn macro_tick(&mut self) -> Result<TickOutcome, DisplayError> {
        for _ in 0..self.config.steps_per_spawn {
            let outcome = self.shift_step().await?;
            if outcome != TickOutcome::Advanced {
                return Ok(outcome);
            }
        }

        let draw = self.rng.next_uniform(self.config.spawn_range);
        if let Some(row) = self.arena.spawn(draw) {
            self.stats.record_spawn();
            trace!("Obstacle staged in {} row", row);
        }

        Ok(TickOutcome::Advanced)
    }

    /// Play until a collision, then show the game-over screen
    ///
    /// Returns the statistics of the finished session.
    pub async fn play(&mut self) -> Result<SessionStats, DisplayError> {
        loop {
            match self.macro_tick().await? {
                TickOutcome::Advanced => {}
                TickOutcome::Collided => break,
                TickOutcome::Stopped => return Ok(self.stats),
            }
        }

        render::render_screen(&mut self.display, &GAME_OVER_SCREEN)?;
        info!(
            "Game over: {} ticks, {} jumps, {} cleared of {} spawned",
            self.stats.ticks,
            self.stats.jumps,
            self.stats.cleared,
            self.stats.spawned
        );
        Ok(self.stats)
    }

    /// Run the game forever
    ///
    /// Shows the attract screen once, then alternates play sessions and
    /// the game-over screen. Only returns on a display error.
    pub async fn run(&mut self) -> Result<Infallible, DisplayError> {
        self.boot()?;

        loop {
            self.press_to_continue().await?;
            self.play().await?;
        }
    }
}
