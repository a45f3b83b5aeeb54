//! Higher-order sequence combinators and the list operations built from them.
//!
//! `map` and `zip_with` are lazy: they return iterators and never materialize
//! their input, so they compose with unbounded sources. `reduce` is a strict
//! left fold. The list operations `neg_list`, `add_lists`, `sum` and `prod` are
//! defined only through these three combinators and the scalar operators.

use num_traits::Float;

use super::{add, mul, neg};

/// Lazily applies `f` to every element of `seq`, preserving order and length.
pub fn map<I, B, Fun>(f: Fun, seq: I) -> impl Iterator<Item = B>
where
    I: IntoIterator,
    Fun: FnMut(I::Item) -> B,
{
    seq.into_iter().map(f)
}

/// Lazily combines `a` and `b` position by position with `f`.
///
/// Stops at the end of the shorter input; a length mismatch is not an error.
pub fn zip_with<A, B, C, Fun>(mut f: Fun, a: A, b: B) -> impl Iterator<Item = C>
where
    A: IntoIterator,
    B: IntoIterator,
    Fun: FnMut(A::Item, B::Item) -> C,
{
    a.into_iter().zip(b).map(move |(x, y)| f(x, y))
}

/// Left fold: `f(f(f(start, e0), e1), e2)...`. An empty `seq` returns `start`.
pub fn reduce<I, T, Fun>(f: Fun, start: T, seq: I) -> T
where
    I: IntoIterator,
    Fun: FnMut(T, I::Item) -> T,
{
    seq.into_iter().fold(start, f)
}

/// Negates every element.
pub fn neg_list<F, I>(seq: I) -> impl Iterator<Item = F>
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    map(neg::<F>, seq)
}

/// Element-wise sum of two sequences, truncated to the shorter one.
pub fn add_lists<F, A, B>(a: A, b: B) -> impl Iterator<Item = F>
where
    F: Float,
    A: IntoIterator<Item = F>,
    B: IntoIterator<Item = F>,
{
    zip_with(add::<F>, a, b)
}

/// Sum of all elements; zero for an empty sequence.
pub fn sum<F, I>(seq: I) -> F
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    reduce(add::<F>, F::zero(), seq)
}

/// Product of all elements; one for an empty sequence.
pub fn prod<F, I>(seq: I) -> F
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    reduce(mul::<F>, F::one(), seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_map_preserves_order_and_length() {
        let squared: Vec<f64> = map(|x: f64| x * x, vec![1.0, -2.0, 3.0]).collect();
        assert_eq!(squared, vec![1.0, 4.0, 9.0]);

        let empty: Vec<f64> = map(|x: f64| x + 1.0, Vec::<f64>::new()).collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_map_is_lazy_over_unbounded_source() {
        // An infinite source only works if nothing is materialized.
        let firsts: Vec<f64> = map(|x: f64| x * 10.0, (0..).map(|i| i as f64)).take(3).collect();
        assert_eq!(firsts, vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_map_calls_function_on_demand() {
        let mut calls = 0;
        {
            let mut it = map(
                |x: f64| {
                    calls += 1;
                    x
                },
                vec![1.0, 2.0, 3.0],
            );
            let _ = it.next();
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_zip_with_truncates_to_shorter() {
        let out: Vec<f64> = zip_with(|a: f64, b: f64| a * b, vec![1.0, 2.0, 3.0], vec![10.0, 20.0]).collect();
        assert_eq!(out, vec![10.0, 40.0]);

        let out: Vec<f64> = zip_with(|a: f64, b: f64| a - b, Vec::<f64>::new(), vec![1.0]).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn test_zip_with_mixed_item_types() {
        let labels = vec!["a", "bb", "ccc"];
        let out: Vec<String> = zip_with(|s: &str, n: usize| s.repeat(n), labels, 1..4usize).collect();
        assert_eq!(out, vec!["a", "bbbb", "ccccccccc"]);
    }

    #[test]
    fn test_reduce_is_left_fold() {
        // Subtraction is not associative, so order matters.
        let folded = reduce(|acc: f64, e: f64| acc - e, 10.0, vec![1.0, 2.0, 3.0]);
        assert_eq!(folded, 4.0);

        let trace = reduce(|acc: String, e: &str| acc + e, String::from(">"), vec!["a", "b", "c"]);
        assert_eq!(trace, ">abc");

        assert_eq!(reduce(|acc: f64, e: f64| acc + e, 7.5, Vec::<f64>::new()), 7.5);
    }

    #[test]
    fn test_neg_list() {
        let out: Vec<f64> = neg_list(vec![1.0, -2.0, 3.0]).collect();
        assert_eq!(out, vec![-1.0, 2.0, -3.0]);
    }

    #[test]
    fn test_add_lists() {
        let out: Vec<f64> = add_lists(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]).collect();
        assert_eq!(out, vec![5.0, 7.0, 9.0]);

        let out: Vec<f64> = add_lists(vec![1.0, 2.0, 3.0], vec![4.0]).collect();
        assert_eq!(out, vec![5.0]);
    }

    #[test]
    fn test_sum_and_prod() {
        assert_eq!(sum(Vec::<f64>::new()), 0.0);
        assert_eq!(prod(Vec::<f64>::new()), 1.0);
        assert!((sum(vec![1.0, 2.0, 3.5]) - 6.5).abs() < EPSILON);
        assert!((prod(vec![2.0, -3.0, 0.5]) - (-3.0)).abs() < EPSILON);
    }

    #[test]
    fn test_list_ops_compose_over_borrowed_slices() {
        let data = [1.0_f64, 2.0, 3.0];
        let neg_sum = sum(neg_list(data.iter().copied()));
        assert!((neg_sum + sum(data.iter().copied())).abs() < EPSILON);
        assert_eq!(prod(add_lists(data, data)), 2.0 * 4.0 * 6.0);
    }
}
