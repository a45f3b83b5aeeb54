//! Scalar operators, sequence combinators and synthetic classification datasets.

pub mod common_types;
pub mod datasets;
pub mod error;
pub mod operators;

pub use common_types::DataPoint;
pub use datasets::{DatasetKind, Graph, Label, Point};
pub use error::{DatasetError, OperatorError};

#[cfg(feature = "python")]
#[allow(unsafe_op_in_unsafe_fn)] // pyo3 0.21 macro expansion under edition 2024
mod python {
    use pyo3::exceptions::{PyKeyError, PyValueError};
    use pyo3::prelude::*;

    use crate::datasets::{self, DatasetKind, Label, Point};
    use crate::error::{DatasetError, OperatorError};
    use crate::operators::{self as ops, Scalar};

    impl From<OperatorError> for PyErr {
        fn from(err: OperatorError) -> Self {
            PyValueError::new_err(err.to_string())
        }
    }

    impl From<DatasetError> for PyErr {
        fn from(err: DatasetError) -> Self {
            PyKeyError::new_err(err.to_string())
        }
    }

    // Rust names carry a `py_` prefix so they cannot shadow crates such as `log`;
    // the Python names stay the plain operator names.

    // --- Scalar operators ---

    #[pyfunction]
    #[pyo3(name = "mul")]
    fn py_mul(x: Scalar, y: Scalar) -> Scalar {
        ops::mul(x, y)
    }

    #[pyfunction]
    #[pyo3(name = "id")]
    fn py_id(x: Scalar) -> Scalar {
        ops::id(x)
    }

    #[pyfunction]
    #[pyo3(name = "add")]
    fn py_add(x: Scalar, y: Scalar) -> Scalar {
        ops::add(x, y)
    }

    #[pyfunction]
    #[pyo3(name = "neg")]
    fn py_neg(x: Scalar) -> Scalar {
        ops::neg(x)
    }

    #[pyfunction]
    #[pyo3(name = "lt")]
    fn py_lt(x: Scalar, y: Scalar) -> bool {
        ops::lt(x, y)
    }

    #[pyfunction]
    #[pyo3(name = "eq")]
    fn py_eq(x: Scalar, y: Scalar) -> bool {
        ops::eq(x, y)
    }

    #[pyfunction]
    #[pyo3(name = "max")]
    fn py_max(x: Scalar, y: Scalar) -> Scalar {
        ops::max(x, y)
    }

    #[pyfunction]
    #[pyo3(name = "is_close")]
    fn py_is_close(x: Scalar, y: Scalar) -> bool {
        ops::is_close(x, y)
    }

    #[pyfunction]
    #[pyo3(name = "sigmoid")]
    fn py_sigmoid(x: Scalar) -> Scalar {
        ops::sigmoid(x)
    }

    #[pyfunction]
    #[pyo3(name = "relu")]
    fn py_relu(x: Scalar) -> Scalar {
        ops::relu(x)
    }

    #[pyfunction]
    #[pyo3(name = "log")]
    fn py_log(x: Scalar) -> PyResult<Scalar> {
        Ok(ops::log(x)?)
    }

    #[pyfunction]
    #[pyo3(name = "exp")]
    fn py_exp(x: Scalar) -> Scalar {
        ops::exp(x)
    }

    #[pyfunction]
    #[pyo3(name = "inv")]
    fn py_inv(x: Scalar) -> PyResult<Scalar> {
        Ok(ops::inv(x)?)
    }

    #[pyfunction]
    #[pyo3(name = "log_back")]
    fn py_log_back(x: Scalar, b: Scalar) -> Scalar {
        ops::log_back(x, b)
    }

    #[pyfunction]
    #[pyo3(name = "inv_back")]
    fn py_inv_back(x: Scalar, b: Scalar) -> PyResult<Scalar> {
        Ok(ops::inv_back(x, b)?)
    }

    #[pyfunction]
    #[pyo3(name = "relu_back")]
    fn py_relu_back(x: Scalar, b: Scalar) -> Scalar {
        ops::relu_back(x, b)
    }

    // --- List operations ---

    #[pyfunction]
    #[pyo3(name = "neg_list")]
    fn py_neg_list(seq: Vec<Scalar>) -> Vec<Scalar> {
        ops::neg_list(seq).collect()
    }

    #[pyfunction]
    #[pyo3(name = "add_lists")]
    fn py_add_lists(a: Vec<Scalar>, b: Vec<Scalar>) -> Vec<Scalar> {
        ops::add_lists(a, b).collect()
    }

    #[pyfunction]
    #[pyo3(name = "sum")]
    fn py_sum(seq: Vec<Scalar>) -> Scalar {
        ops::sum(seq)
    }

    #[pyfunction]
    #[pyo3(name = "prod")]
    fn py_prod(seq: Vec<Scalar>) -> Scalar {
        ops::prod(seq)
    }

    // --- Datasets ---

    /// Returns `(N, X, y)` for the named pattern. A `seed` makes the draw reproducible.
    #[pyfunction]
    #[pyo3(name = "make_dataset", signature = (name, n, seed = None))]
    fn py_make_dataset(name: &str, n: usize, seed: Option<u64>) -> PyResult<(usize, Vec<Point>, Vec<Label>)> {
        let graph = match seed {
            Some(seed) => name.parse::<DatasetKind>()?.generate_seeded(n, seed),
            None => datasets::generate(name, n)?,
        };
        Ok((graph.n(), graph.x().to_vec(), graph.y().to_vec()))
    }

    #[pyfunction]
    #[pyo3(name = "dataset_names")]
    fn py_dataset_names() -> Vec<&'static str> {
        DatasetKind::ALL.iter().map(|kind| kind.name()).collect()
    }

    /// The Python module. Its name must match `lib.name` in `Cargo.toml`.
    #[pymodule]
    fn ml_prelude(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(py_mul, m)?)?;
        m.add_function(wrap_pyfunction!(py_id, m)?)?;
        m.add_function(wrap_pyfunction!(py_add, m)?)?;
        m.add_function(wrap_pyfunction!(py_neg, m)?)?;
        m.add_function(wrap_pyfunction!(py_lt, m)?)?;
        m.add_function(wrap_pyfunction!(py_eq, m)?)?;
        m.add_function(wrap_pyfunction!(py_max, m)?)?;
        m.add_function(wrap_pyfunction!(py_is_close, m)?)?;
        m.add_function(wrap_pyfunction!(py_sigmoid, m)?)?;
        m.add_function(wrap_pyfunction!(py_relu, m)?)?;
        m.add_function(wrap_pyfunction!(py_log, m)?)?;
        m.add_function(wrap_pyfunction!(py_exp, m)?)?;
        m.add_function(wrap_pyfunction!(py_inv, m)?)?;
        m.add_function(wrap_pyfunction!(py_log_back, m)?)?;
        m.add_function(wrap_pyfunction!(py_inv_back, m)?)?;
        m.add_function(wrap_pyfunction!(py_relu_back, m)?)?;
        m.add_function(wrap_pyfunction!(py_neg_list, m)?)?;
        m.add_function(wrap_pyfunction!(py_add_lists, m)?)?;
        m.add_function(wrap_pyfunction!(py_sum, m)?)?;
        m.add_function(wrap_pyfunction!(py_prod, m)?)?;
        m.add_function(wrap_pyfunction!(py_make_dataset, m)?)?;
        m.add_function(wrap_pyfunction!(py_dataset_names, m)?)?;
        Ok(())
    }

    // Links against libpython, so run with `--features python` only
    // (the `extension-module` feature leaves the symbols unresolved).
    #[cfg(test)]
    mod tests {
        use super::*;
        use pyo3::exceptions::{PyKeyError, PyValueError};

        fn with_module<T>(f: impl FnOnce(&Bound<'_, PyModule>) -> PyResult<T>) -> T {
            pyo3::prepare_freethreaded_python();
            Python::with_gil(|py| {
                let m = PyModule::new_bound(py, "ml_prelude").expect("create module");
                ml_prelude(py, &m).expect("register functions");
                f(&m).expect("python call failed")
            })
        }

        #[test]
        fn test_operators_keep_python_names() {
            with_module(|m| {
                let ln: Scalar = m.getattr("log")?.call1((1.0,))?.extract()?;
                assert_eq!(ln, 0.0);
                let s: Scalar = m.getattr("sigmoid")?.call1((0.0,))?.extract()?;
                assert_eq!(s, 0.5);
                let back: Scalar = m.getattr("inv_back")?.call1((2.0, 1.0))?.extract()?;
                assert_eq!(back, -0.25);
                let total: Scalar = m.getattr("sum")?.call1((vec![1.0, 2.0, 3.0],))?.extract()?;
                assert_eq!(total, 6.0);
                let added: Vec<Scalar> = m.getattr("add_lists")?.call1((vec![1.0, 2.0], vec![3.0, 4.0, 5.0]))?.extract()?;
                assert_eq!(added, vec![4.0, 6.0]);
                Ok(())
            });
        }

        #[test]
        fn test_domain_errors_raise_value_error() {
            with_module(|m| {
                let py = m.py();
                let err = m.getattr("log")?.call1((0.0,)).unwrap_err();
                assert!(err.is_instance_of::<PyValueError>(py));
                let err = m.getattr("inv")?.call1((0.0,)).unwrap_err();
                assert!(err.is_instance_of::<PyValueError>(py));
                Ok(())
            });
        }

        #[test]
        fn test_make_dataset() {
            with_module(|m| {
                let py = m.py();
                let (n, x, y): (usize, Vec<Point>, Vec<Label>) =
                    m.getattr("make_dataset")?.call1(("Spiral", 10))?.extract()?;
                assert_eq!(n, 10);
                assert_eq!(x.len(), 10);
                assert_eq!(y, vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1]);

                let a: (usize, Vec<Point>, Vec<Label>) =
                    m.getattr("make_dataset")?.call1(("Xor", 20, 7u64))?.extract()?;
                let b: (usize, Vec<Point>, Vec<Label>) =
                    m.getattr("make_dataset")?.call1(("Xor", 20, 7u64))?.extract()?;
                assert_eq!(a, b);

                let err = m.getattr("make_dataset")?.call1(("Moons", 10)).unwrap_err();
                assert!(err.is_instance_of::<PyKeyError>(py));

                let names: Vec<String> = m.getattr("dataset_names")?.call0()?.extract()?;
                assert_eq!(names.len(), 6);
                Ok(())
            });
        }
    }
}
