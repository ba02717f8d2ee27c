//! Visible-result selection for the grid.
//!
//! A candidate is kept when it matches both the free-text query and the
//! category filter; the kept sequence is cut to the reveal cap. When nothing
//! survives, the caller's placeholder is shown instead.

/// Reads one text field off a candidate. `None` means the candidate has no
/// such field, which never matches a non-empty query or category.
pub type FieldAccessor<T> = fn(&T) -> Option<&str>;

pub struct FilterCriteria<'q, T> {
    pub query: &'q str,
    pub category: &'q str,
    pub query_by: Option<FieldAccessor<T>>,
    pub filter_by: Option<FieldAccessor<T>>,
}

impl<'q, T> FilterCriteria<'q, T> {
    pub fn new(query: &'q str, category: &'q str) -> Self {
        Self {
            query,
            category,
            query_by: None,
            filter_by: None,
        }
    }

    pub fn query_by(mut self, accessor: FieldAccessor<T>) -> Self {
        self.query_by = Some(accessor);
        self
    }

    pub fn filter_by(mut self, accessor: FieldAccessor<T>) -> Self {
        self.filter_by = Some(accessor);
        self
    }
}

/// Indices of the first `cap` candidates matching `criteria`, in input order.
pub fn matching_indices<T>(candidates: &[T], criteria: &FilterCriteria<'_, T>, cap: usize) -> Vec<usize> {
    // Fold the query once instead of per candidate.
    let folded_query = criteria.query.to_lowercase();

    candidates
        .iter()
        .enumerate()
        .filter(|&(_, item)| {
            matches_query(item, criteria.query_by, &folded_query)
                && matches_category(item, criteria.filter_by, criteria.category)
        })
        .map(|(index, _)| index)
        .take(cap)
        .collect()
}

/// The visible slice for `criteria`, or `[empty]` if no candidate qualifies.
pub fn filter_results<'a, T>(
    candidates: &'a [T],
    criteria: &FilterCriteria<'_, T>,
    cap: usize,
    empty: &'a T,
) -> Vec<&'a T> {
    let visible: Vec<&T> = matching_indices(candidates, criteria, cap)
        .into_iter()
        .map(|index| &candidates[index])
        .collect();
    if visible.is_empty() {
        vec![empty]
    } else {
        visible
    }
}

fn matches_query<T>(item: &T, query_by: Option<FieldAccessor<T>>, folded_query: &str) -> bool {
    let Some(field) = query_by else {
        return true;
    };
    if folded_query.is_empty() {
        return true;
    }
    field(item).is_some_and(|value| value.to_lowercase().contains(folded_query))
}

fn matches_category<T>(item: &T, filter_by: Option<FieldAccessor<T>>, category: &str) -> bool {
    let Some(field) = filter_by else {
        return true;
    };
    if category.is_empty() {
        return true;
    }
    field(item).is_some_and(|value| value.contains(category))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    generation: u64,
    query: String,
    category: String,
    cap: usize,
}

/// Memoised visible indices.
///
/// Recomputes only when the candidate generation, query, category or cap
/// differs from the previous refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultCache {
    key: Option<CacheKey>,
    indices: Vec<usize>,
    recomputations: u64,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the cache up to date. Returns `true` when the indices were recomputed.
    pub fn refresh<T>(
        &mut self,
        generation: u64,
        candidates: &[T],
        criteria: &FilterCriteria<'_, T>,
        cap: usize,
    ) -> bool {
        let unchanged = self.key.as_ref().is_some_and(|key| {
            key.generation == generation
                && key.cap == cap
                && key.query == criteria.query
                && key.category == criteria.category
        });
        if unchanged {
            return false;
        }

        self.indices = matching_indices(candidates, criteria, cap);
        self.key = Some(CacheKey {
            generation,
            query: criteria.query.to_string(),
            category: criteria.category.to_string(),
            cap,
        });
        self.recomputations += 1;
        true
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
