//! Console runs driven from in-memory input.

use kuji::draws::{FixedRandom, SeededRandom};
use kuji::{Command, Console, DrawEngine, DrawSession, KujiConfig, KujiError, Labels, SessionError};
use tokio::io::BufReader;

fn console(sample: f64) -> Console<FixedRandom, Vec<u8>> {
    let config = KujiConfig::default();
    let session = DrawSession::new(DrawEngine::new(FixedRandom::new(sample), Labels::default()), &config);
    Console::new(session, Vec::new(), true)
}

async fn run_script<R: kuji::draws::RandomSource>(mut console: Console<R, Vec<u8>>, script: &str) -> (DrawSession<R>, String) {
    console
        .run(BufReader::new(script.as_bytes()))
        .await
        .expect("console run failed");
    let (session, out) = console.into_parts();
    (session, String::from_utf8(out).unwrap())
}

#[tokio::test(start_paused = true)]
async fn test_single_roll_renders_placeholder_then_result() {
    let (session, out) = run_script(console(0.999999), "die\n").await;

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec!["Drawing...", "Die (6 sides) result: 6", "History:", "  - Die (6 sides): 6"]
    );
    assert_eq!(session.history().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_commands_during_reveal_are_rejected() {
    let (session, out) = run_script(console(0.0), "coin\ncoin\nrange 1 3\n").await;

    assert_eq!(out.matches("A draw is in progress").count(), 2);
    assert_eq!(session.history().texts(), vec!["Coin: Heads"]);
}

#[tokio::test(start_paused = true)]
async fn test_range_error_and_empty_history() {
    let (session, out) = run_script(console(0.5), "range 10 3\nhistory\nrange 1 x\n").await;

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec!["Range error", "History:", "  - No history yet", "Range error"]
    );
    assert!(session.history().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_clear_and_quit() {
    let config = KujiConfig::instant();
    let mut session = DrawSession::new(DrawEngine::new(SeededRandom::new(5), Labels::default()), &config);
    session.draw(kuji::DrawKind::Range { min: 5, max: 5 }).await.unwrap();
    assert_eq!(session.history().len(), 1);

    // quit stops reading: the trailing coin never runs
    let console = Console::new(session, Vec::new(), false);
    let (session, out) = run_script(console, "clear\nquit\ncoin\n").await;

    assert_eq!(out.lines().collect::<Vec<_>>(), vec!["History:", "  - No history yet"]);
    assert!(session.history().is_empty());
    assert_eq!(session.display_text(), "Range draw (5-5): 5");
    assert!(!session.is_busy());
}

#[tokio::test(start_paused = true)]
async fn test_unknown_commands_are_reported() {
    let (_, out) = run_script(console(0.5), "roll\ndie many\n\n").await;
    assert!(out.contains("unknown command 'roll'"));
    assert!(out.contains("'many' is not a number of sides"));
}

#[tokio::test(start_paused = true)]
async fn test_run_once_reports_rejection() {
    let mut console = console(0.5);

    match console.run_once(Command::Range("9".to_string(), "1".to_string())).await {
        Err(KujiError::Session(SessionError::Draw(_))) => {}
        other => panic!("Expected draw rejection, got {:?}", other.map(|r| r.history_text)),
    }

    let result = console.run_once(Command::Die(Some(2))).await.unwrap();
    assert_eq!(result.history_text, "Die (2 sides): 2");

    assert!(matches!(
        console.run_once(Command::History).await,
        Err(KujiError::Usage(_))
    ));
}
