//! Point samplers and labelling rules for the six classification patterns.

use rand::Rng;

use super::{Graph, Label, Point};
use crate::operators::map;

/// `Simple`: label 1 when `x1` is left of this line.
pub const SIMPLE_THRESHOLD: f64 = 0.5;
/// `Diag`: label 1 when `x1 + x2` is below this value.
pub const DIAG_THRESHOLD: f64 = 0.5;
/// `Split`: label 1 when `x1` falls outside `[SPLIT_LOW, SPLIT_HIGH]`.
pub const SPLIT_LOW: f64 = 0.2;
pub const SPLIT_HIGH: f64 = 0.8;
/// `Xor`: both axes are split at this value.
pub const XOR_PIVOT: f64 = 0.5;
/// `Circle`: label 1 when the squared distance from the centre exceeds this.
pub const CIRCLE_RADIUS_SQ: f64 = 0.1;
/// Centre shared by `Circle` and both `Spiral` arms.
pub const CENTER: f64 = 0.5;
/// First parameter index of each spiral arm.
pub const SPIRAL_START: usize = 5;

/// Draws `n` points uniformly from `[0, 1)²` using the thread-local generator.
pub fn make_pts(n: usize) -> Vec<Point> {
    make_pts_with_rng(n, &mut rand::thread_rng())
}

/// Draws `n` points uniformly from `[0, 1)²`. `x1` is drawn before `x2` for each point.
pub fn make_pts_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point> {
    (0..n).map(|_| (rng.r#gen::<f64>(), rng.r#gen::<f64>())).collect()
}

// --- Labelling rules ---

pub(crate) fn simple_rule((x1, _): Point) -> Label {
    (x1 < SIMPLE_THRESHOLD) as Label
}

pub(crate) fn diag_rule((x1, x2): Point) -> Label {
    (x1 + x2 < DIAG_THRESHOLD) as Label
}

pub(crate) fn split_rule((x1, _): Point) -> Label {
    (x1 < SPLIT_LOW || x1 > SPLIT_HIGH) as Label
}

pub(crate) fn xor_rule((x1, x2): Point) -> Label {
    ((x1 < XOR_PIVOT && x2 > XOR_PIVOT) || (x1 > XOR_PIVOT && x2 < XOR_PIVOT)) as Label
}

pub(crate) fn circle_rule((x1, x2): Point) -> Label {
    let (u, v) = (x1 - CENTER, x2 - CENTER);
    (u * u + v * v > CIRCLE_RADIUS_SQ) as Label
}

/// Spiral labels depend only on position: the first arm is 0, the second is 1.
pub(crate) fn spiral_rule(index: usize, n: usize) -> Label {
    (index >= n / 2) as Label
}

fn labelled<R: Rng + ?Sized>(n: usize, rng: &mut R, rule: fn(Point) -> Label) -> Graph {
    let x = make_pts_with_rng(n, rng);
    let y = map(rule, x.iter().copied()).collect();
    Graph::from_parts(x, y)
}

// --- Generators ---

pub fn simple_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    labelled(n, rng, simple_rule)
}

pub fn diag_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    labelled(n, rng, diag_rule)
}

pub fn split_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    labelled(n, rng, split_rule)
}

pub fn xor_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    labelled(n, rng, xor_rule)
}

pub fn circle_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Graph {
    labelled(n, rng, circle_rule)
}

/// The spiral is fully deterministic; the generator is accepted only so every
/// pattern shares one signature.
pub fn spiral_with_rng<R: Rng + ?Sized>(n: usize, _rng: &mut R) -> Graph {
    spiral(n)
}

/// Labels `x1 < 0.5` as 1.
pub fn simple(n: usize) -> Graph {
    simple_with_rng(n, &mut rand::thread_rng())
}

/// Labels `x1 + x2 < 0.5` as 1.
pub fn diag(n: usize) -> Graph {
    diag_with_rng(n, &mut rand::thread_rng())
}

/// Labels `x1 < 0.2 || x1 > 0.8` as 1.
pub fn split(n: usize) -> Graph {
    split_with_rng(n, &mut rand::thread_rng())
}

/// Labels the top-left and bottom-right quadrants as 1.
pub fn xor(n: usize) -> Graph {
    xor_with_rng(n, &mut rand::thread_rng())
}

/// Labels points outside the circle of squared radius 0.1 around the centre as 1.
pub fn circle(n: usize) -> Graph {
    circle_with_rng(n, &mut rand::thread_rng())
}

fn spiral_x(t: f64) -> f64 {
    t * t.cos() / 20.0
}

fn spiral_y(t: f64) -> f64 {
    t * t.sin() / 20.0
}

/// Two interleaved parametric arms of `n / 2` points each.
///
/// For `i` in `SPIRAL_START..SPIRAL_START + n / 2` and `t = 10 * i / (n / 2)`, arm 0
/// holds `(x(t), y(t))` and arm 1 holds `(y(-t), x(-t))`, both shifted by the centre.
/// An odd `n` yields `2 * (n / 2)` points, one fewer than requested; the returned
/// graph reports the number it actually holds.
pub fn spiral(n: usize) -> Graph {
    let half = n / 2;
    if n % 2 == 1 {
        log::warn!("spiral: odd point count {} truncated to {}", n, 2 * half);
    }
    let param = |i: usize| 10.0 * (i as f64 / half as f64);
    let arm_indices = SPIRAL_START..SPIRAL_START + half;

    let mut x: Vec<Point> = Vec::with_capacity(2 * half);
    x.extend(arm_indices.clone().map(|i| {
        let t = param(i);
        (spiral_x(t) + CENTER, spiral_y(t) + CENTER)
    }));
    x.extend(arm_indices.map(|i| {
        let t = -param(i);
        (spiral_y(t) + CENTER, spiral_x(t) + CENTER)
    }));

    let total = x.len();
    let y = (0..total).map(|i| spiral_rule(i, total)).collect();
    Graph::from_parts(x, y)
}
