//! The single owner of draw state: current display, history and the busy gate.
//!
//! A draw is split in two steps so that an event loop can keep handling
//! input while the reveal is pending: `request` validates and enters the
//! busy state, `complete` computes the outcome once the delay has elapsed.
//! `draw` runs both with a tokio timer in between.

use crate::config::KujiConfig;
use crate::draws::engine::{parse_range, DrawEngine};
use crate::draws::history::History;
use crate::draws::labels::Labels;
use crate::draws::random::{RandomSource, ThreadRandom};
use crate::draws::types::{DrawKind, DrawResult};
use crate::errors::{DrawError, SessionError};
use log::{debug, info};
use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;

/// Re-entrancy guard for draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationState {
    Idle,
    Busy,
}

/// What the current-result surface shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Surface {
    Empty,
    InProgress,
    Result(String),
    Error(String),
}

/// A draw that has been accepted and waits for its reveal
#[derive(Debug)]
#[must_use = "a pending draw must be completed to leave the busy state"]
pub struct PendingDraw {
    kind: DrawKind,
    reveal_at: Instant,
}

impl PendingDraw {
    pub fn kind(&self) -> DrawKind {
        self.kind
    }

    pub fn reveal_at(&self) -> Instant {
        self.reveal_at
    }
}

/// Render-ready snapshot of a session
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionView {
    pub display: String,
    pub state: AnimationState,
    /// Newest first
    pub history: Vec<String>,
}

pub struct DrawSession<R: RandomSource = ThreadRandom> {
    engine: DrawEngine<R>,
    history: History,
    display: Surface,
    state: AnimationState,
    delay: Duration,
    default_sides: u32,
}

impl DrawSession<ThreadRandom> {
    /// Session using the platform generator
    pub fn from_config(config: &KujiConfig) -> Self {
        let labels = Labels::for_locale(config.display.locale);
        Self::new(DrawEngine::with_thread_rng(labels), config)
    }
}

impl<R: RandomSource> DrawSession<R> {
    pub fn new(engine: DrawEngine<R>, config: &KujiConfig) -> Self {
        info!(
            "Draw session ready (delay {}ms, d{} default, locale {})",
            config.animation.delay_ms,
            config.die.default_sides,
            engine.labels().locale()
        );

        Self {
            engine,
            history: History::new(),
            display: Surface::Empty,
            state: AnimationState::Idle,
            delay: config.reveal_delay(),
            default_sides: config.die.default_sides,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == AnimationState::Busy
    }

    pub fn display(&self) -> &Surface {
        &self.display
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn labels(&self) -> &Labels {
        self.engine.labels()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Text of the current-result surface
    pub fn display_text(&self) -> String {
        match &self.display {
            Surface::Empty => String::new(),
            Surface::InProgress => self.labels().in_progress.to_string(),
            Surface::Result(text) | Surface::Error(text) => text.clone(),
        }
    }

    /// Accept a draw and enter the busy state.
    ///
    /// Rejected parameters switch the display to the error text and leave
    /// the session idle with history untouched.
    pub fn request(&mut self, kind: DrawKind) -> Result<PendingDraw, SessionError> {
        if self.is_busy() {
            debug!("Rejecting {} draw: busy", kind);
            return Err(SessionError::Busy);
        }

        if let Err(e) = DrawEngine::<R>::validate(&kind) {
            return Err(self.reject(e).into());
        }

        self.state = AnimationState::Busy;
        self.display = Surface::InProgress;
        let pending = PendingDraw {
            kind,
            reveal_at: Instant::now() + self.delay,
        };
        debug!("Scheduled {} draw, reveal in {:?}", kind, self.delay);
        Ok(pending)
    }

    /// Accept a range draw from raw text bounds
    pub fn request_range(&mut self, min_text: &str, max_text: &str) -> Result<PendingDraw, SessionError> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }

        match parse_range(min_text, max_text) {
            Ok((min, max)) => self.request(DrawKind::Range { min, max }),
            Err(e) => Err(self.reject(e).into()),
        }
    }

    /// Accept a die roll, falling back to the configured number of sides
    pub fn request_die(&mut self, sides: Option<u32>) -> Result<PendingDraw, SessionError> {
        let sides = sides.unwrap_or(self.default_sides);
        self.request(DrawKind::Die { sides })
    }

    fn reject(&mut self, error: DrawError) -> DrawError {
        debug!("Rejected draw parameters: {}", error);
        let text = if error.is_range_error() {
            self.labels().range_error.to_string()
        } else {
            error.to_string()
        };
        self.display = Surface::Error(text);
        error
    }

    /// Reveal a pending draw: compute, display, record, go idle.
    ///
    /// Callers wait for `pending.reveal_at()` first; `draw` and the console
    /// loop do.
    pub fn complete(&mut self, pending: PendingDraw) -> Result<DrawResult, SessionError> {
        debug_assert!(
            Instant::now() >= pending.reveal_at,
            "draw completed before its reveal time"
        );
        let outcome = self.engine.draw(pending.kind);
        self.state = AnimationState::Idle;

        let result = outcome.map_err(|e| self.reject(e))?;
        debug!("Revealed {} draw: {}", result.kind, result.history_text);
        self.display = Surface::Result(result.display_text.clone());
        self.history.record(result.clone());
        Ok(result)
    }

    /// Request, wait out the reveal delay, then complete
    pub async fn draw(&mut self, kind: DrawKind) -> Result<DrawResult, SessionError> {
        let pending = self.request(kind)?;
        tokio::time::sleep_until(pending.reveal_at()).await;
        self.complete(pending)
    }

    /// Empty the history regardless of the busy state
    pub fn clear_history(&mut self) -> usize {
        let removed = self.history.clear();
        info!("Cleared {} history entries", removed);
        removed
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            display: self.display_text(),
            state: self.state,
            history: self.history.texts(),
        }
    }
}
