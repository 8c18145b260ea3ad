use std::fmt;

/// Vertex identifier. Valid ids are `1..=V`; letter labels live at the edges of the system.
pub type VertexId = usize;

/// A directed, weighted edge `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: i32,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: i32) -> Self {
        Edge { from, to, weight }
    }
}

impl From<(VertexId, VertexId, i32)> for Edge {
    fn from((from, to, weight): (VertexId, VertexId, i32)) -> Self {
        Edge { from, to, weight }
    }
}

/// Tentative shortest distance of a vertex.
///
/// The three states are kept apart explicitly instead of overloading an
/// integer sentinel, so adding a weight can never wrap into a bogus value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Distance {
    Finite(i64),
    /// Not reached from the source (+∞).
    #[default]
    Unreachable,
    /// Affected by a negative-weight cycle (−∞).
    NegativeCycle,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<i64> {
        match self {
            Distance::Finite(d) => Some(*d),
            _ => None,
        }
    }

    /// Distance obtained by following an edge of `weight` out of a vertex at `self`.
    ///
    /// Only finite distances can be extended.
    pub fn extend(&self, weight: i32) -> Option<i64> {
        self.finite().map(|d| d + i64::from(weight))
    }

    /// Returns true if `candidate` is strictly shorter than `current`.
    ///
    /// `Unreachable` is beaten by every finite candidate; `NegativeCycle` by none.
    pub fn improves_on(candidate: i64, current: Distance) -> bool {
        match current {
            Distance::Finite(d) => candidate < d,
            Distance::Unreachable => true,
            Distance::NegativeCycle => false,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => write!(f, "INF"),
            Distance::NegativeCycle => write!(f, "-INF"),
        }
    }
}
