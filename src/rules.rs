//! Rule variants and the shot-count and interception policy they select.

use core::fmt;
use core::str::FromStr;
use rand::Rng;

/// Game mode chosen for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Variant {
    /// One shot per turn, no interception.
    Classic,
    /// One shot per vessel afloat.
    Multifire,
    /// One shot per turn; incoming shots may be intercepted.
    CruiseMissiles,
    /// Multifire and interception combined.
    Hardcore,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Classic,
        Variant::Multifire,
        Variant::CruiseMissiles,
        Variant::Hardcore,
    ];
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Classic => "CLASSIC",
            Variant::Multifire => "MULTIFIRE",
            Variant::CruiseMissiles => "CRUISE MISSILES",
            Variant::Hardcore => "HARDCORE",
        };
        f.write_str(name)
    }
}

impl Variant {
    fn tag(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Multifire => "multifire",
            Variant::CruiseMissiles => "cruisemissiles",
            Variant::Hardcore => "hardcore",
        }
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    /// Accepts names case-insensitively, ignoring separators, so
    /// `cruise-missiles`, `Cruise Missiles` and `CRUISE_MISSILES` all match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| {
                s.chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .map(|c| c.to_ascii_lowercase())
                    .eq(v.tag().chars())
            })
            .ok_or(UnknownVariant)
    }
}

/// Returned when a variant name is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownVariant;

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of: classic, multifire, cruise-missiles, hardcore")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownVariant {}

/// Shots granted this turn to a side with `vessels_afloat` vessels.
pub fn shots_per_turn(variant: Variant, vessels_afloat: usize) -> usize {
    match variant {
        Variant::Classic | Variant::CruiseMissiles => 1,
        Variant::Multifire | Variant::Hardcore => vessels_afloat,
    }
}

/// Whether vessels in this variant can shoot down incoming fire.
pub fn interception_enabled(variant: Variant) -> bool {
    matches!(variant, Variant::CruiseMissiles | Variant::Hardcore)
}

/// Roll a d10; 1 through 8 means the incoming shot is shot down.
pub fn roll_interception<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random_range(1..=10u8) <= 8
}
