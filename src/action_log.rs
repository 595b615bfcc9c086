//! Human-readable action log written to any [`Write`] target.

use std::io::{self, Write};
use std::string::String;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    common::{ShotOutcome, Side},
    event::{EventSink, GameEvent},
};

/// Event sink writing one line per event, e.g.
/// `Player fired at (C, 5). It was a HIT.`
///
/// The first write error is kept and returned by [`ActionLog::finish`];
/// later events are dropped.
///
/// With a clock attached every line is prefixed with the UTC time of day and
/// the session start and exit carry the full date.
pub struct ActionLog<W: Write> {
    out: W,
    names: [String; 2],
    clock: Option<fn() -> u64>,
    error: Option<io::Error>,
}

/// Seconds since the Unix epoch, or 0 if the system clock is before it.
pub fn now_unix_s() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0)
}

/// `dd/mm/yyyy` for a Unix timestamp, in UTC.
pub fn format_date(unix_s: u64) -> String {
    let (year, month, day) = civil_from_days((unix_s / 86_400) as i64);
    std::format!("{:02}/{:02}/{}", day, month, year)
}

/// `hh:mm:ss` for a Unix timestamp, in UTC.
pub fn format_time(unix_s: u64) -> String {
    let secs = unix_s % 86_400;
    std::format!("{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

// Proleptic Gregorian date of a day count since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

impl<W: Write> ActionLog<W> {
    /// Log with side A named "Player" and side B named "Computer".
    pub fn new(out: W) -> Self {
        Self::with_names(out, "Player", "Computer")
    }

    pub fn with_names(out: W, a: &str, b: &str) -> Self {
        Self {
            out,
            names: [a.into(), b.into()],
            clock: None,
            error: None,
        }
    }

    /// Stamp lines with the system clock.
    pub fn timestamped(self) -> Self {
        self.with_clock(now_unix_s)
    }

    /// Stamp lines with `clock`, which returns seconds since the Unix epoch.
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Close the log with an exit line.
    pub fn log_exit(&mut self) {
        let line = match self.clock {
            Some(clock) => {
                let now = clock();
                std::format!("Game exited on {} at {}.", format_date(now), format_time(now))
            }
            None => "Game exited.".into(),
        };
        self.write_line(&line);
    }

    fn write_line(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", line) {
            self.error = Some(err);
        }
    }

    fn name(&self, side: Side) -> &str {
        &self.names[side.index()]
    }

    /// Flush and hand back the writer, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn line(&self, event: &GameEvent) -> String {
        let Some(clock) = self.clock else {
            return self.entry(event);
        };
        let now = clock();
        match *event {
            GameEvent::Started { variant } => std::format!(
                "BATTLESHIP\n---------------------------\nNew game started on {} at {}.\nGame Type {} was selected.",
                format_date(now),
                format_time(now),
                variant
            ),
            _ => std::format!("{} {}", format_time(now), self.entry(event)),
        }
    }

    fn entry(&self, event: &GameEvent) -> String {
        match *event {
            GameEvent::Started { variant } => std::format!("A {} game has begun.", variant),
            GameEvent::VesselPlaced { side, vessel } => {
                let coords: std::vec::Vec<String> =
                    vessel.coords().iter().map(|c| std::format!("{}", c)).collect();
                std::format!(
                    "{} placed the {} at {}.",
                    self.name(side),
                    vessel.name(),
                    coords.join(" ")
                )
            }
            GameEvent::TurnStarted { side, shots } => {
                std::format!("{}'s turn with {} shot(s).", self.name(side), shots)
            }
            GameEvent::ShotResolved {
                side,
                target,
                outcome,
            } => {
                let result = match outcome {
                    ShotOutcome::Hit | ShotOutcome::Sunk(_) => "a HIT",
                    ShotOutcome::Miss => "a MISS",
                    ShotOutcome::ShotDown => "SHOT DOWN",
                    ShotOutcome::Forfeit(_) => "a FORFEIT",
                };
                std::format!(
                    "{} fired at ({}, {}). It was {}.",
                    self.name(side),
                    (b'A' + target.row as u8) as char,
                    target.col + 1,
                    result
                )
            }
            GameEvent::VesselDamaged { owner, vessel } => std::format!(
                "The {}'s {} was damaged. Health reduced to {}/{}.",
                self.name(owner),
                vessel.name(),
                vessel.health(),
                vessel.length()
            ),
            GameEvent::VesselSunk { owner, vessel } => {
                std::format!("The {}'s {} was sunk.", self.name(owner), vessel.name())
            }
            GameEvent::Forfeited { side } => std::format!("{} forfeited.", self.name(side)),
            GameEvent::Peeked { side, .. } => {
                std::format!("{} peeked at the enemy fleet.", self.name(side))
            }
            GameEvent::FleetDestroyed { side } => {
                std::format!("The {}'s fleet was destroyed.", self.name(side))
            }
            GameEvent::Won { side } => std::format!("The {} WON!", self.name(side)),
        }
    }
}

impl<W: Write> EventSink for ActionLog<W> {
    fn record(&mut self, event: &GameEvent) {
        if self.error.is_some() {
            return;
        }
        let line = self.line(event);
        self.write_line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;

    #[test]
    fn shot_lines_use_letter_and_number() {
        let mut log = ActionLog::new(Vec::new());
        log.record(&GameEvent::ShotResolved {
            side: Side::A,
            target: Coord::new(2, 4),
            outcome: ShotOutcome::Hit,
        });
        log.record(&GameEvent::Won { side: Side::A });
        let text = String::from_utf8(log.finish().unwrap()).unwrap();
        assert_eq!(
            text,
            "Player fired at (C, 5). It was a HIT.\nThe Player WON!\n"
        );
    }

    // 2026-10-18 14:03:07 UTC
    fn fixed_clock() -> u64 {
        1_792_332_187
    }

    #[test]
    fn dates_and_times_are_utc() {
        assert_eq!(format_date(0), "01/01/1970");
        assert_eq!(format_time(0), "00:00:00");
        assert_eq!(format_date(951_782_400), "29/02/2000");
        assert_eq!(format_date(fixed_clock()), "18/10/2026");
        assert_eq!(format_time(fixed_clock()), "14:03:07");
    }

    #[test]
    fn clocked_log_stamps_start_entries_and_exit() {
        let mut log = ActionLog::new(Vec::new()).with_clock(fixed_clock);
        log.record(&GameEvent::Started {
            variant: crate::rules::Variant::Classic,
        });
        log.record(&GameEvent::Won { side: Side::B });
        log.log_exit();
        let text = String::from_utf8(log.finish().unwrap()).unwrap();
        assert_eq!(
            text,
            "BATTLESHIP\n---------------------------\n\
             New game started on 18/10/2026 at 14:03:07.\n\
             Game Type CLASSIC was selected.\n\
             14:03:07 The Computer WON!\n\
             Game exited on 18/10/2026 at 14:03:07.\n"
        );
    }
}
