//! Laplace-smoothed per-token likelihood.
//!
//! ```text
//! P(token | category) = (count_in_category(token) + 1)
//!                       / (count_globally(token) + number_of_categories)
//! ```
//!
//! The smoothing term in the denominator is the number of categories, not the
//! vocabulary size. Every value is strictly positive and at most 1, which is
//! all the log-likelihood sum needs; the values are weights, not a normalized
//! distribution over tokens.

use crate::model::Category;
use crate::model::frequency::Frequencies;

/// Smoothed likelihood of `token` under `category`, in `(0, 1]`.
///
/// Unseen tokens count as `0` in both tables. `category_count` must be at
/// least one; the classifier rejects empty models before calling this.
pub fn probability(
    global_frequencies: &Frequencies,
    category_count: usize,
    category: &Category,
    token: &str,
) -> f64 {
    smoothed(
        category.count(token),
        global_frequencies.get(token),
        category_count,
    )
}

/// The smoothing formula on raw counts.
pub(crate) fn smoothed(in_category: u64, globally: u64, category_count: usize) -> f64 {
    (in_category as f64 + 1.0) / (globally as f64 + category_count as f64)
}
