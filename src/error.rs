//! Error types shared by the operator and dataset layers.

use thiserror::Error;

/// Failures signalled by the scalar operators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperatorError {
    /// The input lies outside the operator's mathematical domain,
    /// e.g. `log` of a non-positive number or `inv` of zero.
    #[error("domain error in {op}: x = {x}")]
    Domain { op: &'static str, x: f64 },
}

/// Failures signalled by dataset lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("unknown dataset: {0:?} (expected one of Simple, Diag, Split, Xor, Circle, Spiral)")]
    UnknownDataset(String),
}
