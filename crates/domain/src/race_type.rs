// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The discipline family a race type belongs to.
///
/// The family decides which optional data a race carries: horse racing
/// carries course conditions, mechanical racing carries stages and players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaceFamily {
    /// JRA, NAR and overseas horse racing.
    HorseRacing,
    /// Keirin, autorace and boatrace.
    MechanicalRacing,
}

/// One of the six supported public-gambling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RaceType {
    /// Japan Racing Association.
    Jra,
    /// National Association of Racing (local horse racing).
    Nar,
    /// Overseas horse racing.
    Overseas,
    /// Keirin (track cycling).
    Keirin,
    /// Autorace (motorcycle racing).
    Autorace,
    /// Boatrace (hydroplane racing).
    Boatrace,
}

impl RaceType {
    /// Every race type, in the fixed order services iterate them.
    pub const ALL: [Self; 6] = [
        Self::Jra,
        Self::Nar,
        Self::Overseas,
        Self::Keirin,
        Self::Autorace,
        Self::Boatrace,
    ];

    /// Returns the upper-case name used in payloads and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jra => "JRA",
            Self::Nar => "NAR",
            Self::Overseas => "OVERSEAS",
            Self::Keirin => "KEIRIN",
            Self::Autorace => "AUTORACE",
            Self::Boatrace => "BOATRACE",
        }
    }

    /// Returns the lower-case tag every identifier of this race type starts with.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Jra => "jra",
            Self::Nar => "nar",
            Self::Overseas => "overseas",
            Self::Keirin => "keirin",
            Self::Autorace => "autorace",
            Self::Boatrace => "boatrace",
        }
    }

    /// Returns the discipline family.
    #[must_use]
    pub const fn family(&self) -> RaceFamily {
        match self {
            Self::Jra | Self::Nar | Self::Overseas => RaceFamily::HorseRacing,
            Self::Keirin | Self::Autorace | Self::Boatrace => RaceFamily::MechanicalRacing,
        }
    }

    #[must_use]
    pub const fn is_horse_racing(&self) -> bool {
        matches!(self.family(), RaceFamily::HorseRacing)
    }

    #[must_use]
    pub const fn is_mechanical_racing(&self) -> bool {
        matches!(self.family(), RaceFamily::MechanicalRacing)
    }

    /// Returns whether meetings of this race type carry held-day counters.
    ///
    /// Only JRA numbers its meetings and meeting days.
    #[must_use]
    pub const fn has_held_day(&self) -> bool {
        matches!(self, Self::Jra)
    }

    /// Returns the highest post/frame position, or `None` when the race type
    /// has no player assignments.
    #[must_use]
    pub const fn max_position_number(&self) -> Option<u8> {
        match self {
            Self::Keirin => Some(9),
            Self::Autorace => Some(8),
            Self::Boatrace => Some(6),
            Self::Jra | Self::Nar | Self::Overseas => None,
        }
    }
}

impl FromStr for RaceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|race_type| race_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::InvalidRaceType(s.to_string()))
    }
}

impl std::fmt::Display for RaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
