//! Routing values and ranked-ladder axes accepted by the API.
//!
//! Each table keeps the order the API documentation lists them in, so the
//! position of a value doubles as its numeric index.

use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// Platform routing value (a single game shard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Br1,
    Eun1,
    Euw1,
    Jp1,
    Kr,
    La1,
    La2,
    Na1,
    Oc1,
    Ru,
    Tr1,
}

impl Region {
    pub const ALL: [Region; 11] = [
        Region::Br1,
        Region::Eun1,
        Region::Euw1,
        Region::Jp1,
        Region::Kr,
        Region::La1,
        Region::La2,
        Region::Na1,
        Region::Oc1,
        Region::Ru,
        Region::Tr1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Br1 => "BR1",
            Region::Eun1 => "EUN1",
            Region::Euw1 => "EUW1",
            Region::Jp1 => "JP1",
            Region::Kr => "KR",
            Region::La1 => "LA1",
            Region::La2 => "LA2",
            Region::Na1 => "NA1",
            Region::Oc1 => "OC1",
            Region::Ru => "RU",
            Region::Tr1 => "TR1",
        }
    }

    /// Regional cluster serving this platform's matches.
    pub fn cluster(&self) -> Cluster {
        match self {
            Region::Br1 | Region::La1 | Region::La2 | Region::Na1 | Region::Oc1 => {
                Cluster::Americas
            }
            Region::Jp1 | Region::Kr => Cluster::Asia,
            Region::Eun1 | Region::Euw1 | Region::Ru | Region::Tr1 => Cluster::Europe,
        }
    }
}

/// Regional routing value used by account and match lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cluster {
    Americas,
    Asia,
    Europe,
    Esports,
}

impl Cluster {
    pub const ALL: [Cluster; 4] = [
        Cluster::Americas,
        Cluster::Asia,
        Cluster::Europe,
        Cluster::Esports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::Americas => "AMERICAS",
            Cluster::Asia => "ASIA",
            Cluster::Europe => "EUROPE",
            Cluster::Esports => "ESPORTS",
        }
    }

    /// Cluster holding a match, from the platform prefix of its id
    /// (e.g. `LA2_1138947703`). Unknown prefixes fall back to Europe.
    pub fn for_match_id(match_id: &str) -> Cluster {
        Region::ALL
            .iter()
            .find(|region| match_id.starts_with(region.as_str()))
            .map_or(Cluster::Europe, Region::cluster)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Queue {
    RankedSolo5x5,
    RankedFlexSr,
    RankedFlexTt,
}

impl Queue {
    pub const ALL: [Queue; 3] = [Queue::RankedSolo5x5, Queue::RankedFlexSr, Queue::RankedFlexTt];

    pub fn as_str(&self) -> &'static str {
        match self {
            Queue::RankedSolo5x5 => "RANKED_SOLO_5x5",
            Queue::RankedFlexSr => "RANKED_FLEX_SR",
            Queue::RankedFlexTt => "RANKED_FLEX_TT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Diamond,
    Platinum,
    Gold,
    Silver,
    Bronze,
    Iron,
}

impl Tier {
    pub const ALL: [Tier; 6] = [
        Tier::Diamond,
        Tier::Platinum,
        Tier::Gold,
        Tier::Silver,
        Tier::Bronze,
        Tier::Iron,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Diamond => "DIAMOND",
            Tier::Platinum => "PLATINUM",
            Tier::Gold => "GOLD",
            Tier::Silver => "SILVER",
            Tier::Bronze => "BRONZE",
            Tier::Iron => "IRON",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    I,
    II,
    III,
    IV,
}

impl Division {
    pub const ALL: [Division; 4] = [Division::I, Division::II, Division::III, Division::IV];

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::I => "I",
            Division::II => "II",
            Division::III => "III",
            Division::IV => "IV",
        }
    }
}

// Index and token conversions are identical for every table.
macro_rules! code_table {
    ($ty:ident, $kind:literal) => {
        impl TryFrom<usize> for $ty {
            type Error = AppError;

            fn try_from(index: usize) -> Result<Self, Self::Error> {
                $ty::ALL
                    .get(index)
                    .copied()
                    .ok_or_else(|| AppError::UnknownCode {
                        kind: $kind,
                        value: index.to_string(),
                    })
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|code| code.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| AppError::UnknownCode {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

code_table!(Region, "region");
code_table!(Cluster, "cluster");
code_table!(Queue, "queue");
code_table!(Tier, "tier");
code_table!(Division, "division");
