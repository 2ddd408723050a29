use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub type AircraftTypeId = Arc<str>;

/// ICAO aerodrome reference code letter, ordered by wingspan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SizeClass {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl SizeClass {
    pub const ALL: [SizeClass; 6] = [
        SizeClass::A,
        SizeClass::B,
        SizeClass::C,
        SizeClass::D,
        SizeClass::E,
        SizeClass::F,
    ];

    pub fn rank(self) -> u8 {
        self as u8 + 1
    }

    pub fn body(self) -> BodyType {
        match self {
            SizeClass::A | SizeClass::B | SizeClass::C | SizeClass::D => BodyType::Narrow,
            SizeClass::E | SizeClass::F => BodyType::Wide,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown size class '{0}', expected one of A-F")]
pub struct ParseSizeClassError(pub String);

impl FromStr for SizeClass {
    type Err = ParseSizeClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(SizeClass::A),
            "B" => Ok(SizeClass::B),
            "C" => Ok(SizeClass::C),
            "D" => Ok(SizeClass::D),
            "E" => Ok(SizeClass::E),
            "F" => Ok(SizeClass::F),
            _ => Err(ParseSizeClassError(s.to_string())),
        }
    }
}

impl TryFrom<String> for SizeClass {
    type Error = ParseSizeClassError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SizeClass> for String {
    fn from(value: SizeClass) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Narrow,
    Wide,
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyType::Narrow => write!(f, "narrow"),
            BodyType::Wide => write!(f, "wide"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftType {
    pub id: AircraftTypeId,
    pub size: SizeClass,
    pub turnaround_minutes: u32,
    /// Explicit override of the body type derived from `size`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<BodyType>,
}

impl AircraftType {
    pub fn body(&self) -> BodyType {
        self.body_type.unwrap_or(self.size.body())
    }

    pub fn overrides_body(&self) -> bool {
        self.body_type.is_some_and(|b| b != self.size.body())
    }
}
