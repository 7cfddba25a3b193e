//! utilities related to database queries
use std::{ops::Deref, sync::Arc};

pub mod filter {
    use super::DynFilterPart;

    /// An operator for combining filter parts to form a more complex filter expression
    #[derive(Clone)]
    pub enum Op {
        Or,
        And,
    }

    #[derive(Clone)]
    /// An object that allows you easily build compound filters that can be applied to SQL queries
    pub struct CompoundFilterBuilder {
        pub(crate) top: CompoundFilter,
    }

    pub fn and() -> CompoundFilterBuilder {
        CompoundFilterBuilder::new(Op::And)
    }

    pub fn or() -> CompoundFilterBuilder {
        CompoundFilterBuilder::new(Op::Or)
    }

    impl CompoundFilterBuilder {
        /// Create a new [CompoundFilterBuilder] object that will combine all filter
        /// expressions using the given operator
        pub fn new(op: Op) -> Self {
            Self {
                top: CompoundFilter::new(op),
            }
        }

        /// Add a new filter expression to this compound filter. It will be combined
        /// with all existing filter expressions using the operator that was specified in
        /// the constructor.
        pub fn push<F: Into<DynFilterPart>>(mut self, filter: F) -> Self {
            self.top.add_filter(filter.into());
            self
        }

        /// Generate a new [CompoundFilter] object from this builder object
        pub fn build(self) -> DynFilterPart {
            self.top.into()
        }
    }

    /// A Trait implemented by anything that can be a filter. It could be a single field or a
    /// multi-level compound filter condition.
    pub trait FilterPart: Send {
        /// convert the given filter part to SQL syntax and add it to the given [sqlx::QueryBuilder] object
        fn add_to_query(&self, builder: &mut sqlx::QueryBuilder<sqlx::Sqlite>);
    }

    #[derive(Clone)]
    /// An object that represents one or more filter conditions that are combined by a single logical
    /// operator ([Op]). Multiple compound filters can be combined together into larger filter
    /// conditions
    pub struct CompoundFilter {
        pub(crate) conditions: Vec<DynFilterPart>,
        pub(crate) op: Op,
    }

    impl CompoundFilter {
        /// Create a new compound filter object
        pub fn new(op: Op) -> Self {
            Self {
                conditions: Default::default(),
                op,
            }
        }

        /// Create an builder object that is used for building compound filters
        pub fn builder(op: Op) -> CompoundFilterBuilder {
            CompoundFilterBuilder::new(op)
        }

        /// Add a new filter expression to the current filter. It will be combined
        /// with the operator [Op] that was specified in [CompoundFilter::new()]
        pub fn add_filter(&mut self, filter: DynFilterPart) {
            self.conditions.push(filter);
        }
    }

    impl FilterPart for CompoundFilter {
        fn add_to_query(&self, builder: &mut sqlx::QueryBuilder<sqlx::Sqlite>) {
            if self.conditions.is_empty() {
                builder.push("TRUE");
                return;
            }

            let mut first = true;
            builder.push(" (");
            let separator = match self.op {
                Op::And => " AND ",
                Op::Or => " OR ",
            };

            for cond in &self.conditions {
                if first {
                    first = false;
                } else {
                    builder.push(separator);
                }
                cond.add_to_query(builder);
            }
            builder.push(")");
        }
    }

    #[derive(Clone)]
    /// An object representing the comparison operator that is used in a filter expression
    pub enum Cmp {
        Equal,
        NotEqual,
        LessThan,
        GreaterThan,
        NotGreaterThan,
        NotLessThan,
    }

    impl std::fmt::Display for Cmp {
        fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            match self {
                Cmp::Equal => write!(f, " IS "),
                Cmp::NotEqual => write!(f, " IS NOT "),
                Cmp::LessThan => write!(f, " < "),
                Cmp::GreaterThan => write!(f, " > "),
                Cmp::NotGreaterThan => write!(f, " <= "),
                Cmp::NotLessThan => write!(f, " >= "),
            }
        }
    }
}

/// A cheaply clonable, type-erased [filter::FilterPart]
#[derive(Clone)]
pub struct DynFilterPart(Arc<dyn filter::FilterPart + Sync>);

impl Deref for DynFilterPart {
    type Target = Arc<dyn filter::FilterPart + Sync>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<F> From<F> for DynFilterPart
where
    F: filter::FilterPart + Send + Sync + 'static,
{
    fn from(value: F) -> Self {
        DynFilterPart(Arc::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::filter::FilterPart;
    use super::*;

    // Mock FilterPart for testing
    #[derive(Clone)]
    struct MockFilter {
        sql: String,
    }

    impl filter::FilterPart for MockFilter {
        fn add_to_query(&self, builder: &mut sqlx::QueryBuilder<sqlx::Sqlite>) {
            builder.push(&self.sql);
        }
    }

    #[test]
    fn test_compound_filter_builder_build() {
        let mock_filter = MockFilter {
            sql: "test = 1".to_string(),
        };
        let filter_part = filter::and().push(mock_filter).build();

        // Test that we can add it to a query
        let mut builder = sqlx::QueryBuilder::new("SELECT * FROM test WHERE");
        filter_part.add_to_query(&mut builder);
        let sql = builder.sql();
        assert_eq!(sql, "SELECT * FROM test WHERE (test = 1)");
    }

    #[test]
    fn test_compound_filter_add_to_query_empty() {
        let filter = filter::CompoundFilter::new(filter::Op::And);
        let mut builder = sqlx::QueryBuilder::new("SELECT * WHERE");
        builder.push(" ");
        filter.add_to_query(&mut builder);
        let sql = builder.sql();
        assert_eq!(sql, "SELECT * WHERE TRUE");
    }

    #[test]
    fn test_compound_filter_add_to_query_multiple_and() {
        let mut filter = filter::CompoundFilter::new(filter::Op::And);
        filter.add_filter(
            MockFilter {
                sql: "longitude > -123.0".to_string(),
            }
            .into(),
        );
        filter.add_filter(
            MockFilter {
                sql: "latitude < 38.0".to_string(),
            }
            .into(),
        );

        let mut builder = sqlx::QueryBuilder::new("SELECT * WHERE");
        filter.add_to_query(&mut builder);
        let sql = builder.sql();
        assert_eq!(sql, "SELECT * WHERE (longitude > -123.0 AND latitude < 38.0)");
    }

    #[test]
    fn test_compound_filter_add_to_query_multiple_or() {
        let mut filter = filter::CompoundFilter::new(filter::Op::Or);
        filter.add_filter(
            MockFilter {
                sql: "locid = 1".to_string(),
            }
            .into(),
        );
        filter.add_filter(
            MockFilter {
                sql: "locid = 2".to_string(),
            }
            .into(),
        );

        let mut builder = sqlx::QueryBuilder::new("SELECT * WHERE");
        filter.add_to_query(&mut builder);
        let sql = builder.sql();
        assert_eq!(sql, "SELECT * WHERE (locid = 1 OR locid = 2)");
    }

    #[test]
    fn test_cmp_display() {
        assert_eq!(filter::Cmp::Equal.to_string(), " IS ");
        assert_eq!(filter::Cmp::NotLessThan.to_string(), " >= ");
        assert_eq!(filter::Cmp::NotGreaterThan.to_string(), " <= ");
    }
}
