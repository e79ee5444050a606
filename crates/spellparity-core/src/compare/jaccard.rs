use std::collections::HashSet;

/// |A ∩ B| / |A ∪ B| over the distinct entries of both lists.
///
/// Order and duplicates are ignored. Two empty lists score 0.0; callers that
/// treat empty-vs-empty as agreement handle that case before scoring.
pub fn jaccard_similarity(a: &[String], b: &[String]) -> f64 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}
