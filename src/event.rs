//! Game events and the sinks that consume them.
//!
//! The engine never prints or writes files. Everything a display or an
//! action log needs is reported as a [`GameEvent`] to an [`EventSink`].

use alloc::vec::Vec;
use log::{debug, info};

use crate::board::Grid;
use crate::common::{ShotOutcome, Side};
use crate::coord::Coord;
use crate::rules::Variant;
use crate::vessel::Vessel;

/// Something that happened during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Session moved from waiting to in progress.
    Started { variant: Variant },
    /// A vessel was placed on `side`'s board.
    VesselPlaced { side: Side, vessel: Vessel },
    /// A turn began with `shots` shots available.
    TurnStarted { side: Side, shots: usize },
    /// A fire command from `side` was resolved.
    ShotResolved {
        side: Side,
        target: Coord,
        outcome: ShotOutcome,
    },
    /// A vessel owned by `owner` lost a point of health.
    VesselDamaged { owner: Side, vessel: Vessel },
    /// A vessel owned by `owner` was sunk.
    VesselSunk { owner: Side, vessel: Vessel },
    /// `side` forfeited; its whole fleet was sunk.
    Forfeited { side: Side },
    /// `side` asked to see the opponent's fleet.
    Peeked { side: Side, opponent_fleet: Grid },
    /// Every vessel of `side` is sunk.
    FleetDestroyed { side: Side },
    /// The session ended with `side` as winner.
    Won { side: Side },
}

/// Receiver of game events.
pub trait EventSink {
    fn record(&mut self, event: &GameEvent);
}

/// Discards every event.
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: &GameEvent) {}
}

/// Collects events in memory.
impl EventSink for Vec<GameEvent> {
    fn record(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}

/// Forward each event to both sinks in order.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn record(&mut self, event: &GameEvent) {
        self.0.record(event);
        self.1.record(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: &GameEvent) {
        (**self).record(event);
    }
}

/// Forwards events to the `log` facade.
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Started { variant } => info!("game started: {}", variant),
            GameEvent::VesselPlaced { side, vessel } => {
                debug!("{:?} placed {} at {:?}", side, vessel.name(), vessel.coords())
            }
            GameEvent::TurnStarted { side, shots } => {
                debug!("{:?} turn with {} shot(s)", side, shots)
            }
            GameEvent::ShotResolved {
                side,
                target,
                outcome,
            } => debug!("{:?} fired at {}: {:?}", side, target, outcome),
            GameEvent::VesselDamaged { owner, vessel } => debug!(
                "{:?} {} damaged, health {}/{}",
                owner,
                vessel.name(),
                vessel.health(),
                vessel.length()
            ),
            GameEvent::VesselSunk { owner, vessel } => {
                info!("{:?} {} sunk", owner, vessel.name())
            }
            GameEvent::Forfeited { side } => info!("{:?} forfeited", side),
            GameEvent::Peeked { side, .. } => debug!("{:?} peeked", side),
            GameEvent::FleetDestroyed { side } => info!("{:?} fleet destroyed", side),
            GameEvent::Won { side } => info!("{:?} won", side),
        }
    }
}

/// An absent sink records nothing.
impl<S: EventSink> EventSink for Option<S> {
    fn record(&mut self, event: &GameEvent) {
        if let Some(sink) = self {
            sink.record(event);
        }
    }
}
