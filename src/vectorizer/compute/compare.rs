use num::Num;

use crate::vectorizer::evaluate::scoring::Similarity;

/// dot積
/// d(a, b) = Σ(a_i * b_i)
///
/// Extra dimensions of the longer slice are ignored.
#[inline]
pub fn dot<N>(a: &[N], b: &[N]) -> f64
where
    N: Num + Copy + Into<f64>,
{
    a.iter()
        .zip(b)
        .map(|(&x, &y)| x.into() * y.into())
        .sum()
}

/// コサイン類似度
/// cos(θ) = Σ(a_i * b_i) / sqrt(Σ(a_i^2) * Σ(b_i^2))
///
/// A zero-magnitude side makes the ratio 0/0; that is reported as
/// `Similarity::Undefined` instead of a NaN.
/// Slices of different lengths come from different alphabets and have no
/// common layout; they are `Similarity::Undefined` too.
/// No clamping: for non-negative inputs the value is already in [0, 1].
#[inline]
pub fn cosine_similarity<N>(a: &[N], b: &[N]) -> Similarity
where
    N: Num + Copy + Into<f64>,
{
    if a.len() != b.len() {
        return Similarity::Undefined;
    }
    let mut sum_aa = 0_f64;
    let mut sum_ab = 0_f64;
    let mut sum_bb = 0_f64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y): (f64, f64) = (x.into(), y.into());
        sum_aa += x * x;
        sum_ab += x * y;
        sum_bb += y * y;
    }
    if sum_aa == 0.0 || sum_bb == 0.0 {
        return Similarity::Undefined;
    }
    Similarity::Defined(sum_ab / (sum_aa * sum_bb).sqrt())
}
