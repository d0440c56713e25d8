use crate::draws::labels::Labels;
use crate::draws::random::{RandomSource, ThreadRandom};
use crate::draws::types::{CoinFace, DrawKind, DrawResult, Outcome};
use crate::errors::DrawError;

/// Parse user-supplied range bounds.
///
/// Surrounding whitespace is ignored. Anything that is not a plain integer
/// (empty text, decimals, words) is rejected, as is `min > max`.
pub fn parse_range(min_text: &str, max_text: &str) -> Result<(i64, i64), DrawError> {
    let min = parse_bound(min_text)?;
    let max = parse_bound(max_text)?;
    check_range(min, max)?;
    Ok((min, max))
}

fn parse_bound(text: &str) -> Result<i64, DrawError> {
    text.trim().parse::<i64>().map_err(|_| DrawError::InvalidBound {
        input: text.to_string(),
    })
}

fn check_range(min: i64, max: i64) -> Result<(), DrawError> {
    if min > max {
        return Err(DrawError::EmptyRange { min, max });
    }
    Ok(())
}

/// Produces draw outcomes and their display lines
pub struct DrawEngine<R: RandomSource = ThreadRandom> {
    source: R,
    labels: Labels,
}

impl DrawEngine<ThreadRandom> {
    /// Engine backed by the platform generator
    pub fn with_thread_rng(labels: Labels) -> Self {
        Self::new(ThreadRandom, labels)
    }
}

impl<R: RandomSource> DrawEngine<R> {
    pub fn new(source: R, labels: Labels) -> Self {
        Self { source, labels }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Check parameters without drawing
    pub fn validate(kind: &DrawKind) -> Result<(), DrawError> {
        match *kind {
            DrawKind::Coin => Ok(()),
            DrawKind::Die { sides } if sides == 0 => Err(DrawError::InvalidSides { sides }),
            DrawKind::Die { .. } => Ok(()),
            DrawKind::Range { min, max } => check_range(min, max),
        }
    }

    /// Draw any kind
    pub fn draw(&mut self, kind: DrawKind) -> Result<DrawResult, DrawError> {
        match kind {
            DrawKind::Coin => Ok(self.flip_coin()),
            DrawKind::Die { sides } => self.roll_die(sides),
            DrawKind::Range { min, max } => self.draw_range(min, max),
        }
    }

    /// Heads or tails with equal probability
    pub fn flip_coin(&mut self) -> DrawResult {
        let face = if self.source.next_unit() < 0.5 {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        };

        DrawResult::new(
            DrawKind::Coin,
            Outcome::Face(face),
            self.labels.coin_result(face),
            self.labels.coin_entry(face),
        )
    }

    /// Uniform integer in `[1, sides]`
    pub fn roll_die(&mut self, sides: u32) -> Result<DrawResult, DrawError> {
        if sides == 0 {
            return Err(DrawError::InvalidSides { sides });
        }

        let value = self.source.next_below(sides as u128) as i64 + 1;

        Ok(DrawResult::new(
            DrawKind::Die { sides },
            Outcome::Number(value),
            self.labels.die_result(sides, value),
            self.labels.die_entry(sides, value),
        ))
    }

    /// Uniform integer in `[min, max]` inclusive
    pub fn draw_range(&mut self, min: i64, max: i64) -> Result<DrawResult, DrawError> {
        check_range(min, max)?;

        let span = (max as i128 - min as i128 + 1) as u128;
        let index = self.source.next_below(span);
        let value = (min as i128 + index as i128) as i64;

        let line = self.labels.range_line(min, max, value);
        Ok(DrawResult::new(
            DrawKind::Range { min, max },
            Outcome::Number(value),
            line.clone(),
            line,
        ))
    }
}
