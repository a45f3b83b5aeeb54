//! Scalar elementary operators.
//!
//! Each forward operator has a plain value form. The operators that an autodiff
//! layer needs to differentiate also have a `*_back` form taking the original
//! input `x` and an upstream weight `b`, returning `d/dx[op(x)] * b`.
//!
//! | Operator | Domain |
//! |----------|--------|
//! | `mul`, `add`, `id`, `neg`, `lt`, `eq`, `max`, `is_close`, `sigmoid`, `relu`, `exp` | all reals |
//! | `log` | x > 0 |
//! | `inv` | x != 0 |

pub mod combinators;

use num_traits::Float;

pub use crate::error::OperatorError;
pub use combinators::{add_lists, map, neg_list, prod, reduce, sum, zip_with};

/// The canonical scalar: IEEE double precision, no wrapper type.
pub type Scalar = f64;

pub type Result<T> = std::result::Result<T, OperatorError>;

/// Absolute tolerance used by [`is_close`].
pub const IS_CLOSE_TOLERANCE: f64 = 1e-2;

fn tolerance<F: Float>(tol: f64) -> F {
    // NumCast into f32/f64 never fails for a finite literal.
    F::from(tol).unwrap_or_else(F::epsilon)
}

fn domain_error<F: Float>(op: &'static str, x: F) -> OperatorError {
    OperatorError::Domain { op, x: x.to_f64().unwrap_or(f64::NAN) }
}

// --- Arithmetic ---

#[inline]
pub fn mul<F: Float>(x: F, y: F) -> F {
    x * y
}

#[inline]
pub fn id<F: Float>(x: F) -> F {
    x
}

#[inline]
pub fn add<F: Float>(x: F, y: F) -> F {
    x + y
}

#[inline]
pub fn neg<F: Float>(x: F) -> F {
    -x
}

// --- Comparison ---

/// Strict less-than.
#[inline]
pub fn lt<F: Float>(x: F, y: F) -> bool {
    x < y
}

#[inline]
pub fn eq<F: Float>(x: F, y: F) -> bool {
    x == y
}

/// Returns the larger operand. On a tie `y` is returned, which equals `x`.
#[inline]
pub fn max<F: Float>(x: F, y: F) -> F {
    if x > y { x } else { y }
}

/// `|x - y| < IS_CLOSE_TOLERANCE`. Identical values are always close,
/// including infinities.
#[inline]
pub fn is_close<F: Float>(x: F, y: F) -> bool {
    is_close_within(x, y, IS_CLOSE_TOLERANCE)
}

/// Same as [`is_close`] with an explicit absolute tolerance.
#[inline]
pub fn is_close_within<F: Float>(x: F, y: F, tol: f64) -> bool {
    x == y || (x - y).abs() < tolerance(tol)
}

// --- Activations ---

/// Logistic sigmoid, evaluated on the branch that cannot overflow:
/// `1 / (1 + e^-x)` for `x >= 0`, `e^x / (1 + e^x)` for `x < 0`.
#[inline]
pub fn sigmoid<F: Float>(x: F) -> F {
    if x >= F::zero() {
        F::one() / (F::one() + (-x).exp())
    } else {
        let e = x.exp();
        e / (F::one() + e)
    }
}

#[inline]
pub fn relu<F: Float>(x: F) -> F {
    max(F::zero(), x)
}

// --- Transcendental ---

/// Natural logarithm.
///
/// # Errors
/// `OperatorError::Domain` when `x <= 0`.
pub fn log<F: Float>(x: F) -> Result<F> {
    if x <= F::zero() {
        return Err(domain_error("log", x));
    }
    Ok(x.ln())
}

/// Natural exponential. Overflows to `+inf` for large `x`.
#[inline]
pub fn exp<F: Float>(x: F) -> F {
    x.exp()
}

/// Reciprocal `1 / x`.
///
/// # Errors
/// `OperatorError::Domain` when `x == 0`.
pub fn inv<F: Float>(x: F) -> Result<F> {
    if x == F::zero() {
        return Err(domain_error("inv", x));
    }
    Ok(F::one() / x)
}

// --- Backward ---

/// `(1 / x) * b`. Total: `x == 0` gives the IEEE result.
#[inline]
pub fn log_back<F: Float>(x: F, b: F) -> F {
    (F::one() / x) * b
}

/// `(-1 / x^2) * b`.
///
/// # Errors
/// `OperatorError::Domain` when `x == 0`.
pub fn inv_back<F: Float>(x: F, b: F) -> Result<F> {
    if x == F::zero() {
        return Err(domain_error("inv_back", x));
    }
    Ok((-F::one() / (x * x)) * b)
}

/// `b` where `x >= 0`, otherwise zero.
#[inline]
pub fn relu_back<F: Float>(x: F, b: F) -> F {
    if x >= F::zero() { b } else { F::zero() }
}
