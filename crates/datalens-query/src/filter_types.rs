//! Filter and sort types
//!
//! Shared data structures for filter conditions and sort criteria, plus the
//! parser that turns a single condition token such as `Age>=30` into a
//! [`FilterCondition`].

use std::cmp::Ordering;

use datalens_core::{DatalensError, Result, Value};

use crate::coercion::coerce_value;

/// Filter operators accepted in condition expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterOperator {
    // Equality operators
    #[default]
    Equal,
    NotEqual,

    // Comparison operators
    GreaterThanOrEqual,
    LessThanOrEqual,
    GreaterThan,
    LessThan,

    // String operators
    /// Case-insensitive substring match
    Contains,
}

impl FilterOperator {
    /// Get the operator as typed in an expression
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::Contains => "~",
        }
    }

    /// All operators in tokenizer priority order.
    ///
    /// Two-character operators come before their one-character prefixes so
    /// that `Age>=30` is never split as `>` with value `=30`.
    pub fn all() -> &'static [FilterOperator] {
        &[
            Self::Equal,
            Self::NotEqual,
            Self::GreaterThanOrEqual,
            Self::LessThanOrEqual,
            Self::GreaterThan,
            Self::LessThan,
            Self::Contains,
        ]
    }

    /// Returns true if an empty right-hand side is rejected for this operator
    pub fn requires_value(&self) -> bool {
        !matches!(self, Self::Contains)
    }

    /// Whether a comparison that produced `ordering` satisfies this operator.
    ///
    /// `Contains` is evaluated by substring search and never accepts an
    /// ordering.
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Self::Equal => ordering == Ordering::Equal,
            Self::NotEqual => ordering != Ordering::Equal,
            Self::GreaterThan => ordering == Ordering::Greater,
            Self::GreaterThanOrEqual => ordering != Ordering::Less,
            Self::LessThan => ordering == Ordering::Less,
            Self::LessThanOrEqual => ordering != Ordering::Greater,
            Self::Contains => false,
        }
    }

    fn symbols() -> String {
        Self::all()
            .iter()
            .map(|op| op.symbol())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single filter condition: column as typed by the user, operator and value
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    /// Column name as typed (resolved case-insensitively later)
    pub column: String,
    /// Filter operator
    pub operator: FilterOperator,
    /// Coerced right-hand side
    pub value: Value,
}

impl FilterCondition {
    pub fn new(column: impl Into<String>, operator: FilterOperator, value: Value) -> Self {
        Self {
            column: column.into(),
            operator,
            value,
        }
    }

    /// Parse one condition token such as `Age>=30` or `Name~ali`.
    ///
    /// The first operator (in priority order) that occurs anywhere in the token
    /// wins, and the token is split around that operator's first occurrence.
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim();

        for operator in FilterOperator::all() {
            let Some((left, right)) = token.split_once(operator.symbol()) else {
                continue;
            };
            let (left, right) = (left.trim(), right.trim());

            if left.is_empty() {
                return Err(DatalensError::MissingColumn(token.to_string()));
            }
            if right.is_empty() && operator.requires_value() {
                return Err(DatalensError::MissingValue(token.to_string()));
            }

            return Ok(Self::new(left, *operator, coerce_value(right)));
        }

        Err(DatalensError::InvalidCondition {
            condition: token.to_string(),
            operators: FilterOperator::symbols(),
        })
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Parse `asc` / `desc` in any case
    pub fn parse(text: &str) -> Result<Self> {
        match text.trim().to_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(DatalensError::InvalidOrder(text.trim().to_string())),
        }
    }
}

/// A single sort criterion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCriterion {
    /// Column name to sort by, as typed
    pub column: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortCriterion {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Parse `column[,asc|desc]`. Segments after the direction are ignored.
    pub fn parse(key: &str) -> Result<Self> {
        let mut parts = key.split(',').map(str::trim).filter(|p| !p.is_empty());

        let column = parts.next().ok_or(DatalensError::EmptyExpression("Sort"))?;
        let direction = match parts.next() {
            Some(order) => SortDirection::parse(order)?,
            None => SortDirection::Ascending,
        };

        Ok(Self::new(column, direction))
    }
}
