pub mod fixture;

/// Result of a single call into the graph-query capability.
pub type QueryResult<T> = Result<T, QueryError>;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    /// An endpoint is unknown, or nothing connects it. Expected during normal use.
    #[error("no such element: {detail}")]
    NotFound { detail: String },

    #[error("graph query failed: {0}")]
    Failure(String),
}

impl QueryError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure(reason.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Read-only view of the campus graph that the presenters query.
///
/// Implementations own the graph, its loading, and the path algorithms. Callers
/// only ever issue these four queries and never mutate anything through them.
pub trait GraphQuery {
    fn list_all_locations(&self) -> QueryResult<Vec<String>>;

    /// Stops from `from` to `to`, both inclusive.
    fn shortest_path(&self, from: &str, to: &str) -> QueryResult<Vec<String>>;

    /// One travel time in seconds per edge of `shortest_path(from, to)`.
    fn segment_times(&self, from: &str, to: &str) -> QueryResult<Vec<f64>>;

    fn furthest_destination(&self, from: &str) -> QueryResult<Option<String>>;
}
