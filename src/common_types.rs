//! Common data structures shared between the dataset layer and its consumers.

/// A single labelled sample: a feature vector and its label.
///
/// - `F`: feature type (e.g. `f64`).
/// - `L`: label type (e.g. `u8` for the binary datasets).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPoint<F, L> {
    pub features: Vec<F>,
    pub label: L,
}

impl<F, L> DataPoint<F, L> {
    pub fn new(features: Vec<F>, label: L) -> Self {
        DataPoint { features, label }
    }
}
