//! Line-oriented front-end for a draw session.
//!
//! Runs on one task: each loop iteration waits for either the next input
//! line or the pending reveal, whichever comes first.

use crate::draws::random::RandomSource;
use crate::draws::session::{DrawSession, PendingDraw};
use crate::draws::types::{DrawKind, DrawResult};
use crate::errors::{KujiError, KujiResult, SessionError};
use log::{debug, warn};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{sleep_until, Instant};

pub const HELP: &str = "\
Commands:
  coin              flip a coin
  die [SIDES]       roll a die
  range MIN MAX     draw an integer between MIN and MAX inclusive
  history           show the history
  clear             clear the history
  help              show this help
  quit              leave";

/// One console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Coin,
    Die(Option<u32>),
    Range(String, String),
    History,
    Clear,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("coin", []) => Command::Coin,
        ("die", []) => Command::Die(None),
        ("die", [sides]) => {
            let sides = sides
                .parse::<u32>()
                .map_err(|_| format!("die: '{}' is not a number of sides", sides))?;
            Command::Die(Some(sides))
        }
        ("range", [min, max]) => Command::Range(min.to_string(), max.to_string()),
        ("history", []) => Command::History,
        ("clear", []) => Command::Clear,
        ("help", []) => Command::Help,
        ("quit", []) | ("exit", []) => Command::Quit,
        ("coin", _) | ("die", _) | ("range", _) | ("history", _) | ("clear", _) | ("help", _)
        | ("quit", _) | ("exit", _) => {
            return Err(format!("wrong arguments for '{}', try 'help'", head))
        }
        _ => return Err(format!("unknown command '{}', try 'help'", head)),
    };

    Ok(Some(command))
}

/// Console bound to a session and an output sink
pub struct Console<R: RandomSource, W: Write> {
    session: DrawSession<R>,
    out: W,
    show_history_after_draw: bool,
}

impl<R: RandomSource, W: Write> Console<R, W> {
    pub fn new(session: DrawSession<R>, out: W, show_history_after_draw: bool) -> Self {
        Self {
            session,
            out,
            show_history_after_draw,
        }
    }

    pub fn session(&self) -> &DrawSession<R> {
        &self.session
    }

    pub fn into_parts(self) -> (DrawSession<R>, W) {
        (self.session, self.out)
    }

    /// Read commands until `quit` or end of input.
    ///
    /// A reveal that is still pending when input ends is waited for.
    pub async fn run<I>(&mut self, input: I) -> KujiResult<()>
    where
        I: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut pending: Option<PendingDraw> = None;
        let mut accepting = true;

        while accepting || pending.is_some() {
            let deadline = pending
                .as_ref()
                .map(PendingDraw::reveal_at)
                .unwrap_or_else(Instant::now);

            tokio::select! {
                biased;

                _ = sleep_until(deadline), if pending.is_some() => {
                    if let Some(draw) = pending.take() {
                        self.reveal(draw)?;
                    }
                }
                line = lines.next_line(), if accepting => {
                    match line? {
                        Some(line) => {
                            if !self.handle_line(&line, &mut pending)? {
                                accepting = false;
                            }
                        }
                        None => {
                            debug!("Input closed");
                            accepting = false;
                        }
                    }
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Returns false when the console should stop reading input.
    fn handle_line(&mut self, line: &str, pending: &mut Option<PendingDraw>) -> KujiResult<bool> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(msg) => {
                writeln!(self.out, "{}", msg)?;
                return Ok(true);
            }
        };

        let started = match command {
            Command::Coin => self.session.request(DrawKind::Coin),
            Command::Die(sides) => self.session.request_die(sides),
            Command::Range(min, max) => self.session.request_range(&min, &max),
            Command::History => {
                self.render_history()?;
                return Ok(true);
            }
            Command::Clear => {
                self.session.clear_history();
                self.render_history()?;
                return Ok(true);
            }
            Command::Help => {
                writeln!(self.out, "{}", HELP)?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
        };

        match started {
            Ok(draw) => {
                *pending = Some(draw);
                self.render_display()?;
            }
            Err(SessionError::Busy) => {
                warn!("Ignoring '{}' while a draw is in progress", line.trim());
                writeln!(self.out, "{}", self.session.labels().busy)?;
            }
            Err(SessionError::Draw(_)) => self.render_display()?,
        }
        Ok(true)
    }

    fn reveal(&mut self, draw: PendingDraw) -> KujiResult<DrawResult> {
        let result = self.session.complete(draw)?;
        self.render_display()?;
        if self.show_history_after_draw {
            self.render_history()?;
        }
        Ok(result)
    }

    /// Run a single draw command to completion, rendering as it goes
    pub async fn run_once(&mut self, command: Command) -> KujiResult<DrawResult> {
        let draw = match command {
            Command::Coin => self.session.request(DrawKind::Coin),
            Command::Die(sides) => self.session.request_die(sides),
            Command::Range(min, max) => self.session.request_range(&min, &max),
            other => {
                return Err(KujiError::Usage(format!("{:?} is not a draw command", other)))
            }
        };

        let draw = match draw {
            Ok(draw) => draw,
            Err(e) => {
                self.render_display()?;
                return Err(e.into());
            }
        };

        self.render_display()?;
        sleep_until(draw.reveal_at()).await;
        self.reveal(draw)
    }

    fn render_display(&mut self) -> KujiResult<()> {
        writeln!(self.out, "{}", self.session.display_text())?;
        self.out.flush()?;
        Ok(())
    }

    fn render_history(&mut self) -> KujiResult<()> {
        let labels = *self.session.labels();
        writeln!(self.out, "{}:", labels.history_title)?;
        if self.session.history().is_empty() {
            writeln!(self.out, "  - {}", labels.no_history)?;
        }
        for entry in self.session.history().iter() {
            writeln!(self.out, "  - {}", entry.history_text)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_draw_commands() {
        assert_eq!(parse_command("coin"), Ok(Some(Command::Coin)));
        assert_eq!(parse_command("  DIE  "), Ok(Some(Command::Die(None))));
        assert_eq!(parse_command("die 20"), Ok(Some(Command::Die(Some(20)))));
        assert_eq!(
            parse_command("range -5 abc"),
            Ok(Some(Command::Range("-5".to_string(), "abc".to_string())))
        );
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("history"), Ok(Some(Command::History)));
        assert_eq!(parse_command("clear"), Ok(Some(Command::Clear)));
        assert_eq!(parse_command("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("die -1").unwrap_err().contains("sides"));
        assert!(parse_command("range 1").unwrap_err().contains("wrong arguments"));
        assert!(parse_command("coin twice").is_err());
        assert!(parse_command("lottery").unwrap_err().contains("unknown command"));
    }
}
