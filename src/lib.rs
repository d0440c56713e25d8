//! kuji - coin flips, die rolls and range draws with a delayed reveal
//!
//! The draw engine produces uniform outcomes, the session owns history and
//! the busy gate, and the console drives a session from text commands.

pub mod config;
pub mod console;
pub mod draws;
pub mod errors;

pub use config::{ConfigLoader, KujiConfig};
pub use console::{parse_command, Command, Console};
pub use draws::{
    AnimationState, CoinFace, DrawEngine, DrawKind, DrawResult, DrawSession, Labels, Locale, Outcome,
};
pub use errors::{DrawError, KujiError, KujiResult, SessionError};
