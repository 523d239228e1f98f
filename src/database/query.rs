//! Property search query builder
//!
//! Assembles a parameterized statement from an arbitrary subset of
//! [`PropertySearch`] filters. Predicates are collected as
//! `(template, value)` pairs and placeholders are numbered while rendering,
//! so the `$n` ordinals always line up with the bound values.

use std::sync::OnceLock;

use regex::Regex;
use sqlx::postgres::{PgArguments, PgRow, Postgres};
use sqlx::query::QueryAs;
use sqlx::FromRow;

use crate::models::PropertySearch;

const BASE_QUERY: &str = "SELECT properties.*, AVG(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id";

/// A value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// SQL text plus the values for its placeholders, in ordinal order
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub sql: String,
    pub parameters: Vec<QueryParam>,
}

impl QueryPlan {
    /// Placeholder ordinals in the order they appear in the SQL text
    pub fn placeholders(&self) -> Vec<usize> {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER.get_or_init(|| Regex::new(r"\$(\d+)").expect("valid placeholder pattern"));

        re.captures_iter(&self.sql)
            .filter_map(|caps| caps[1].parse().ok())
            .collect()
    }

    /// Build a typed `sqlx` query with every parameter bound in order
    pub fn query_as<'q, O>(&'q self) -> QueryAs<'q, Postgres, O, PgArguments>
    where
        O: for<'r> FromRow<'r, PgRow>,
    {
        self.parameters
            .iter()
            .fold(sqlx::query_as::<_, O>(&self.sql), |query, param| match param {
                QueryParam::Text(value) => query.bind(value.as_str()),
                QueryParam::Integer(value) => query.bind(*value),
                QueryParam::Float(value) => query.bind(*value),
            })
    }
}

/// Accumulates SQL lines and bound values, numbering placeholders as it goes
struct PlanBuilder {
    lines: Vec<String>,
    parameters: Vec<QueryParam>,
}

impl PlanBuilder {
    fn new(base: &str) -> Self {
        Self {
            lines: vec![base.to_string()],
            parameters: Vec::new(),
        }
    }

    /// Bind a value and return its placeholder
    fn bind(&mut self, value: QueryParam) -> String {
        self.parameters.push(value);
        format!("${}", self.parameters.len())
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn finish(self) -> QueryPlan {
        QueryPlan {
            sql: self.lines.join("\n"),
            parameters: self.parameters,
        }
    }
}

/// Convert a whole-unit price to cents
fn to_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Build the property search statement for `criteria`, returning at most
/// `limit` rows ordered by nightly cost
pub fn build_property_search(criteria: &PropertySearch, limit: i64) -> QueryPlan {
    let mut filters: Vec<(&'static str, QueryParam)> = Vec::new();

    if let Some(city) = criteria.city_filter() {
        filters.push(("city LIKE", QueryParam::Text(format!("%{}%", city))));
    }
    if let Some(owner_id) = criteria.owner_id {
        filters.push(("owner_id =", QueryParam::Integer(i64::from(owner_id))));
    }
    if let Some(minimum) = criteria.minimum_price_per_night {
        filters.push(("cost_per_night >=", QueryParam::Integer(to_cents(minimum))));
    }
    if let Some(maximum) = criteria.maximum_price_per_night {
        filters.push(("cost_per_night <=", QueryParam::Integer(to_cents(maximum))));
    }

    let mut plan = PlanBuilder::new(BASE_QUERY);

    for (index, (predicate, value)) in filters.into_iter().enumerate() {
        let keyword = if index == 0 { "WHERE" } else { "AND" };
        let placeholder = plan.bind(value);
        plan.push(format!("{} {} {}", keyword, predicate, placeholder));
    }

    plan.push("GROUP BY properties.id");

    if let Some(rating) = criteria.minimum_rating {
        let placeholder = plan.bind(QueryParam::Float(rating));
        plan.push(format!("HAVING AVG(property_reviews.rating) >= {}", placeholder));
    }

    let placeholder = plan.bind(QueryParam::Integer(limit));
    plan.push("ORDER BY cost_per_night");
    plan.push(format!("LIMIT {}", placeholder));

    plan.finish()
}
