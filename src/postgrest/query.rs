//! Builder for PostgREST query-string filters.

/// Sort direction for an `order=` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Ascending order (`col.asc`).
    Asc,
    /// Descending order (`col.desc`).
    Desc,
}

impl Order {
    /// Returns the PostgREST suffix for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// An ordered set of PostgREST query parameters.
///
/// Values are stored raw; percent-encoding happens when the parameters are
/// serialised onto the request URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Adds a `select=` projection, including embedded resources
    /// (`*,task_comments(id)` style).
    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_owned(), columns.to_owned()));
        self
    }

    /// Adds an `order=column.direction` clause.
    #[must_use]
    pub fn order(mut self, column: &str, direction: Order) -> Self {
        self.params
            .push(("order".to_owned(), format!("{column}.{}", direction.as_str())));
        self
    }

    /// Adds a `column=eq.value` equality filter.
    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_owned(), format!("eq.{value}")));
        self
    }

    /// Adds a `column=ilike.*term*` pattern filter.
    #[must_use]
    pub fn ilike(mut self, column: &str, term: &str) -> Self {
        self.params
            .push((column.to_owned(), format!("ilike.*{term}*")));
        self
    }

    /// Adds an `or=(a.ilike.*term*,b.ilike.*term*)` disjunction over the
    /// given columns.
    #[must_use]
    pub fn ilike_any(mut self, columns: &[&str], term: &str) -> Self {
        let clauses: Vec<String> = columns
            .iter()
            .map(|column| format!("{column}.ilike.*{term}*"))
            .collect();
        self.params
            .push(("or".to_owned(), format!("({})", clauses.join(","))));
        self
    }

    /// Adds a `limit=` clause.
    #[must_use]
    pub fn limit(mut self, count: u32) -> Self {
        self.params.push(("limit".to_owned(), count.to_string()));
        self
    }

    /// Returns the accumulated parameter pairs.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Returns true when no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
