use std::collections::BTreeSet;

use crate::errors::PlagiarismError;

/// |a ∩ b| / |a ∪ b|.
///
/// Undefined when both sets are empty, which is reported as
/// [`PlagiarismError::EmptyComparison`] for the caller to resolve.
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> Result<f64, PlagiarismError> {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return Err(PlagiarismError::EmptyComparison(
            "both sets are empty, Jaccard coefficient is undefined".into(),
        ));
    }

    Ok(intersection as f64 / union as f64)
}
