#![cfg(feature = "std")]

use std::sync::Mutex;

use broadside::{Coord, Direction, Game, LogSink, Shot, ShotOutcome, Side, Variant};
use log::{LevelFilter, Log, Metadata, Record};

/// Keeps every record emitted by the crate.
struct Capture {
    lines: Mutex<Vec<String>>,
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("broadside")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(format!("{}", record.args()));
            }
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};

fn count(lines: &[String], needle: &str) -> usize {
    lines.iter().filter(|line| line.contains(needle)).count()
}

#[test]
fn test_each_event_is_logged_once() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let mut game = Game::with_seed(Variant::Classic, 5);
    for side in Side::BOTH {
        game.board_mut(side)
            .place(4, Coord::new(0, 0), Direction::Right)
            .unwrap();
    }
    let mut sink = LogSink;
    game.start(&mut sink).unwrap();
    assert_eq!(
        game.resolve_shot(Shot::Fire(Coord::new(0, 0)), Side::A, &mut sink),
        Ok(ShotOutcome::Hit)
    );
    game.resolve_shot(Shot::Fire(Coord::new(0, 1)), Side::A, &mut sink)
        .unwrap();
    game.resolve_shot(Shot::Forfeit, Side::B, &mut sink).unwrap();
    assert_eq!(game.check_win(Side::A, &mut sink), Some(Side::A));

    let lines = CAPTURE.lines.lock().unwrap().clone();
    assert_eq!(count(&lines, "game started"), 1, "{:?}", lines);
    assert_eq!(count(&lines, "fired at A1"), 1, "{:?}", lines);
    assert_eq!(count(&lines, "fired at A2"), 1, "{:?}", lines);
    assert_eq!(count(&lines, "forfeit"), 1, "{:?}", lines);
    assert_eq!(count(&lines, "won"), 1, "{:?}", lines);
}
