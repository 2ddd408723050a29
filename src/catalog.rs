use crate::aircraft::{AircraftType, AircraftTypeId, BodyType, SizeClass};
use crate::error::Warning;
use crate::stand::{Stand, StandId};
use std::collections::HashMap;

pub type TypeIdx = usize;
pub type StandIdx = usize;

/// Id-indexed view of aircraft types and stands, with each stand's compatibility
/// resolved once. Both collections are ordered by id.
pub struct Catalog {
    aircraft: Vec<AircraftType>,
    aircraft_index: HashMap<AircraftTypeId, TypeIdx>,
    stands: Vec<Stand>,
    stand_index: HashMap<StandId, StandIdx>,
    compatibility: Vec<Vec<bool>>,
}

impl Catalog {
    /// Ids are expected to be unique. Compatibility entries that cannot hold are dropped
    /// and reported in `warnings`.
    pub fn new(mut aircraft: Vec<AircraftType>, mut stands: Vec<Stand>, warnings: &mut Vec<Warning>) -> Catalog {
        aircraft.sort_by(|a, b| a.id.cmp(&b.id));
        stands.sort_by(|a, b| a.id.cmp(&b.id));

        let aircraft_index = aircraft
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.clone(), i))
            .collect::<HashMap<_, _>>();
        let stand_index = stands
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect::<HashMap<_, _>>();

        let compatibility = stands
            .iter()
            .map(|stand| Self::resolve(stand, &aircraft, &aircraft_index, warnings))
            .collect();

        Catalog {
            aircraft,
            aircraft_index,
            stands,
            stand_index,
            compatibility,
        }
    }

    fn resolve(
        stand: &Stand,
        aircraft: &[AircraftType],
        aircraft_index: &HashMap<AircraftTypeId, TypeIdx>,
        warnings: &mut Vec<Warning>,
    ) -> Vec<bool> {
        let mut row = vec![false; aircraft.len()];
        if stand.compatible.is_empty() {
            aircraft
                .iter()
                .enumerate()
                .filter(|(_, a)| a.size <= stand.max_size)
                .for_each(|(i, _)| row[i] = true);
        } else {
            for id in &stand.compatible {
                match aircraft_index.get(id) {
                    None => warnings.push(Warning::UnknownAircraftInConstraint {
                        id: id.clone(),
                        stand: stand.id.clone(),
                    }),
                    Some(&i) if aircraft[i].size > stand.max_size => {
                        warnings.push(Warning::AircraftExceedsStandSize {
                            id: id.clone(),
                            stand: stand.id.clone(),
                        })
                    }
                    Some(&i) => row[i] = true,
                }
            }
        }
        if !row.iter().any(|c| *c) {
            warnings.push(Warning::StandWithNoCompatibility { id: stand.id.clone() });
        }
        row
    }

    pub fn aircraft(&self) -> &[AircraftType] {
        &self.aircraft
    }

    pub fn stands(&self) -> &[Stand] {
        &self.stands
    }

    pub fn aircraft_idx(&self, id: &str) -> Option<TypeIdx> {
        self.aircraft_index.get(id).copied()
    }

    pub fn stand_idx(&self, id: &str) -> Option<StandIdx> {
        self.stand_index.get(id).copied()
    }

    pub fn body_of(&self, t: TypeIdx) -> BodyType {
        self.aircraft[t].body()
    }

    pub fn size_rank(size: SizeClass) -> u8 {
        size.rank()
    }

    pub fn compatible(&self, stand: StandIdx, t: TypeIdx) -> bool {
        self.compatibility[stand][t]
    }

    pub fn compatible_types(&self, stand: StandIdx) -> impl Iterator<Item = TypeIdx> + '_ {
        self.compatibility[stand]
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(t, _)| t)
    }

    /// A stand that accepts at least one aircraft type.
    pub fn is_active(&self, stand: StandIdx) -> bool {
        self.compatibility[stand].iter().any(|c| *c)
    }
}
