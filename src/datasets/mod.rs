//! Synthetic 2-D point classification datasets.
//!
//! Six fixed patterns are available by name through [`datasets`] and
//! [`generate`], or by variant through [`DatasetKind`].

pub mod generators;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::common_types::DataPoint;
use crate::operators::Scalar;
pub use crate::error::DatasetError;
pub use generators::{circle, diag, make_pts, make_pts_with_rng, simple, spiral, split, xor};

pub type Result<T> = std::result::Result<T, DatasetError>;

/// A point `(x1, x2)` in the unit square.
pub type Point = (Scalar, Scalar);

/// Binary class label, 0 or 1.
pub type Label = u8;

/// Signature shared by every entry of the [`datasets`] table.
pub type Generator = fn(usize) -> Graph;

/// An immutable labelled point set. `x()[i]` carries label `y()[i]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    n: usize,
    x: Vec<Point>,
    y: Vec<Label>,
}

impl Graph {
    pub(crate) fn from_parts(x: Vec<Point>, y: Vec<Label>) -> Self {
        debug_assert_eq!(x.len(), y.len(), "every point needs exactly one label");
        Graph { n: x.len(), x, y }
    }

    /// Number of points held.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn x(&self) -> &[Point] {
        &self.x
    }

    pub fn y(&self) -> &[Label] {
        &self.y
    }

    /// Alias of [`Graph::n`].
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Iterates over `(point, label)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Label)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Number of points labelled 1.
    pub fn positives(&self) -> usize {
        self.y.iter().filter(|&&label| label == 1).count()
    }

    /// One `DataPoint` per point, with features `[x1, x2]` and the point's label.
    pub fn to_data_points(&self) -> Vec<DataPoint<Scalar, Label>> {
        self.iter()
            .map(|((x1, x2), label)| DataPoint::new(vec![x1, x2], label))
            .collect()
    }
}

/// The six fixed classification patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DatasetKind {
    Simple,
    Diag,
    Split,
    Xor,
    Circle,
    Spiral,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 6] = [
        DatasetKind::Simple,
        DatasetKind::Diag,
        DatasetKind::Split,
        DatasetKind::Xor,
        DatasetKind::Circle,
        DatasetKind::Spiral,
    ];

    /// The lookup name used by [`datasets`].
    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::Simple => "Simple",
            DatasetKind::Diag => "Diag",
            DatasetKind::Split => "Split",
            DatasetKind::Xor => "Xor",
            DatasetKind::Circle => "Circle",
            DatasetKind::Spiral => "Spiral",
        }
    }

    pub fn generator(self) -> Generator {
        match self {
            DatasetKind::Simple => simple,
            DatasetKind::Diag => diag,
            DatasetKind::Split => split,
            DatasetKind::Xor => xor,
            DatasetKind::Circle => circle,
            DatasetKind::Spiral => spiral,
        }
    }

    pub fn generate(self, n: usize) -> Graph {
        self.generate_with_rng(n, &mut rand::thread_rng())
    }

    /// Generates from the given source, so a seeded generator reproduces the set.
    pub fn generate_with_rng<R: Rng + ?Sized>(self, n: usize, rng: &mut R) -> Graph {
        let graph = match self {
            DatasetKind::Simple => generators::simple_with_rng(n, rng),
            DatasetKind::Diag => generators::diag_with_rng(n, rng),
            DatasetKind::Split => generators::split_with_rng(n, rng),
            DatasetKind::Xor => generators::xor_with_rng(n, rng),
            DatasetKind::Circle => generators::circle_with_rng(n, rng),
            DatasetKind::Spiral => generators::spiral_with_rng(n, rng),
        };
        log::debug!(
            "generated {} dataset: {} points, {} labelled 1",
            self,
            graph.n(),
            graph.positives()
        );
        graph
    }

    pub fn generate_seeded(self, n: usize, seed: u64) -> Graph {
        self.generate_with_rng(n, &mut StdRng::seed_from_u64(seed))
    }

    /// Label of a single point, for the patterns whose label depends on the point alone.
    /// `Spiral` labels depend on position in the set and return `None`.
    pub fn label_point(self, point: Point) -> Option<Label> {
        match self {
            DatasetKind::Simple => Some(generators::simple_rule(point)),
            DatasetKind::Diag => Some(generators::diag_rule(point)),
            DatasetKind::Split => Some(generators::split_rule(point)),
            DatasetKind::Xor => Some(generators::xor_rule(point)),
            DatasetKind::Circle => Some(generators::circle_rule(point)),
            DatasetKind::Spiral => None,
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self> {
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DatasetError::UnknownDataset(s.to_string()))
    }
}

/// The process-wide name → generator table. Built on first use, never mutated.
pub fn datasets() -> &'static HashMap<&'static str, Generator> {
    static TABLE: OnceLock<HashMap<&'static str, Generator>> = OnceLock::new();
    TABLE.get_or_init(|| {
        DatasetKind::ALL
            .into_iter()
            .map(|kind| (kind.name(), kind.generator()))
            .collect()
    })
}

/// Looks `name` up in [`datasets`] and generates `n` points.
///
/// # Errors
/// `DatasetError::UnknownDataset` when `name` is not one of the six names.
pub fn generate(name: &str, n: usize) -> Result<Graph> {
    let generator = datasets()
        .get(name)
        .ok_or_else(|| DatasetError::UnknownDataset(name.to_string()))?;
    Ok(generator(n))
}

/// Re-derives every label of `graph` with the rule of `kind` and checks it
/// against the stored one.
pub fn labels_match(kind: DatasetKind, graph: &Graph) -> bool {
    if graph.x().len() != graph.y().len() || graph.n() != graph.y().len() {
        return false;
    }
    graph.iter().enumerate().all(|(i, (point, label))| {
        let expected = kind
            .label_point(point)
            .unwrap_or_else(|| generators::spiral_rule(i, graph.n()));
        expected == label
    })
}
