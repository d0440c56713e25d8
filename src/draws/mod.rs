pub mod types;
pub mod labels;
pub mod random;
pub mod engine;
pub mod history;
pub mod session;

pub use types::*;
pub use engine::{parse_range, DrawEngine};
pub use history::History;
pub use labels::{Labels, Locale};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use session::{AnimationState, DrawSession, PendingDraw, SessionView, Surface};
