use crate::aircraft::SizeClass;
use crate::catalog::{Catalog, StandIdx, TypeIdx};
use crate::stand::{AdjacencyRule, Restriction};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use tracing::debug;

/// How neighbour occupancy is assumed when no flight assignment is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// No neighbour is in use.
    BestCase,
    /// Every neighbour with a rule towards the stand is in use.
    WorstCase,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::BestCase, Scenario::WorstCase];
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::BestCase => write!(f, "best"),
            Scenario::WorstCase => write!(f, "worst"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Limit {
    NoUse,
    Size(SizeClass),
    Types(Vec<TypeIdx>),
}

/// Restriction imposed on a stand by the occupancy of `from`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Incoming {
    from: StandIdx,
    limit: Limit,
}

/// Combined effect of all active restrictions on one stand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    Unrestricted,
    Blocked,
    Limited {
        max_size: Option<SizeClass>,
        prohibited: BTreeSet<TypeIdx>,
    },
}

impl Capability {
    pub fn allows(&self, t: TypeIdx, size: SizeClass) -> bool {
        match self {
            Capability::Unrestricted => true,
            Capability::Blocked => false,
            Capability::Limited { max_size, prohibited } => {
                max_size.is_none_or(|m| size <= m) && !prohibited.contains(&t)
            }
        }
    }

    fn restrict(self, limit: &Limit) -> Capability {
        let (mut max_size, mut prohibited) = match self {
            Capability::Blocked => return Capability::Blocked,
            Capability::Unrestricted => (None, BTreeSet::new()),
            Capability::Limited { max_size, prohibited } => (max_size, prohibited),
        };
        match limit {
            Limit::NoUse => return Capability::Blocked,
            Limit::Size(m) => max_size = Some(max_size.map_or(*m, |cur: SizeClass| cur.min(*m))),
            Limit::Types(types) => prohibited.extend(types.iter().copied()),
        }
        Capability::Limited { max_size, prohibited }
    }
}

pub struct AdjacencyResolver {
    incoming: Vec<Vec<Incoming>>,
}

impl AdjacencyResolver {
    /// Expands rules into directed restrictions per target stand. References are expected
    /// to be validated; anything unresolvable is skipped. Edges from stands that accept no
    /// aircraft are ignored since those stands are never occupied.
    pub fn new(catalog: &Catalog, rules: &[AdjacencyRule]) -> AdjacencyResolver {
        let mut incoming: Vec<Vec<Incoming>> = vec![vec![]; catalog.stands().len()];
        let mut seen = HashSet::new();

        rules
            .iter()
            .flat_map(|rule| rule.edges())
            .filter_map(|edge| {
                let from = catalog.stand_idx(&edge.from)?;
                let to = catalog.stand_idx(&edge.to)?;
                let limit = match &edge.restriction {
                    Restriction::NoUse => Limit::NoUse,
                    Restriction::SizeLimited { max_size } => Limit::Size(*max_size),
                    Restriction::TypeLimited { prohibited_types } => Limit::Types(
                        prohibited_types
                            .iter()
                            .filter_map(|id| catalog.aircraft_idx(id))
                            .collect(),
                    ),
                };
                Some((to, Incoming { from, limit }))
            })
            .filter(|(to, edge)| *to != edge.from && catalog.is_active(edge.from))
            .for_each(|(to, edge)| {
                if seen.insert((to, edge.clone())) {
                    incoming[to].push(edge);
                }
            });

        debug!(edges = seen.len(), "adjacency resolved");
        AdjacencyResolver { incoming }
    }

    pub fn has_incoming(&self, stand: StandIdx) -> bool {
        !self.incoming[stand].is_empty()
    }

    /// Neighbours whose occupancy restricts `stand`.
    pub fn neighbours(&self, stand: StandIdx) -> BTreeSet<StandIdx> {
        self.incoming[stand].iter().map(|e| e.from).collect()
    }

    /// Capability of `stand` for an arbitrary neighbour-occupancy assignment.
    pub fn capability_with(&self, stand: StandIdx, occupied: impl Fn(StandIdx) -> bool) -> Capability {
        self.incoming[stand]
            .iter()
            .filter(|e| occupied(e.from))
            .fold(Capability::Unrestricted, |cap, e| cap.restrict(&e.limit))
    }

    pub fn capability(&self, stand: StandIdx, scenario: Scenario) -> Capability {
        match scenario {
            Scenario::BestCase => self.capability_with(stand, |_| false),
            Scenario::WorstCase => self.capability_with(stand, |_| true),
        }
    }

    /// Whether type `t` may use `stand` under `scenario`, compatibility included.
    pub fn allows(&self, catalog: &Catalog, stand: StandIdx, t: TypeIdx, scenario: Scenario) -> bool {
        catalog.compatible(stand, t) && self.capability(stand, scenario).allows(t, catalog.aircraft()[t].size)
    }
}
