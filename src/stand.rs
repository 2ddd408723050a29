use crate::aircraft::{AircraftTypeId, SizeClass};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub type StandId = Arc<str>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stand {
    pub id: StandId,
    pub max_size: SizeClass,
    /// Authoritative when non-empty, otherwise every type up to `max_size` fits.
    #[serde(default)]
    pub compatible: Vec<AircraftTypeId>,
}

impl fmt::Display for Stand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// What happens to the restricted stand while its neighbour is occupied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Restriction {
    NoUse,
    SizeLimited { max_size: SizeClass },
    TypeLimited { prohibited_types: Vec<AircraftTypeId> },
}

impl Restriction {
    fn normalized(&self) -> Restriction {
        match self {
            Restriction::TypeLimited { prohibited_types } => {
                let mut types = prohibited_types.clone();
                types.sort();
                types.dedup();
                Restriction::TypeLimited { prohibited_types: types }
            }
            other => other.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Direction {
    /// `stand_a` occupied restricts `stand_b`.
    #[default]
    AToB,
    /// `stand_b` occupied restricts `stand_a`.
    BToA,
    Both,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::AToB => write!(f, "a_to_b"),
            Direction::BToA => write!(f, "b_to_a"),
            Direction::Both => write!(f, "both"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown adjacency direction '{0}'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a_to_b" | "a->b" | "atob" | "forward" => Ok(Direction::AToB),
            "b_to_a" | "b->a" | "btoa" | "reverse" => Ok(Direction::BToA),
            "both" | "bidirectional" | "a<->b" => Ok(Direction::Both),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = ParseDirectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Direction> for String {
    fn from(value: Direction) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyRule {
    pub stand_a: StandId,
    pub stand_b: StandId,
    pub restriction: Restriction,
    #[serde(default)]
    pub direction: Direction,
}

/// Directed restriction: while `from` is occupied, `to` is limited by `restriction`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: StandId,
    pub to: StandId,
    pub restriction: Restriction,
}

impl AdjacencyRule {
    pub fn edges(&self) -> Vec<Edge> {
        let restriction = self.restriction.normalized();
        let forward = Edge {
            from: self.stand_a.clone(),
            to: self.stand_b.clone(),
            restriction: restriction.clone(),
        };
        let reverse = Edge {
            from: self.stand_b.clone(),
            to: self.stand_a.clone(),
            restriction,
        };
        match self.direction {
            Direction::AToB => vec![forward],
            Direction::BToA => vec![reverse],
            Direction::Both => vec![forward, reverse],
        }
    }

    /// Two rules with equal keys describe the same constraint.
    pub fn canonical_key(&self) -> (StandId, StandId, Direction, Restriction) {
        let restriction = self.restriction.normalized();
        match self.direction {
            Direction::AToB => (self.stand_a.clone(), self.stand_b.clone(), Direction::AToB, restriction),
            Direction::BToA => (self.stand_b.clone(), self.stand_a.clone(), Direction::AToB, restriction),
            Direction::Both if self.stand_a <= self.stand_b => {
                (self.stand_a.clone(), self.stand_b.clone(), Direction::Both, restriction)
            }
            Direction::Both => (self.stand_b.clone(), self.stand_a.clone(), Direction::Both, restriction),
        }
    }
}
