//! Filter engine
//!
//! A filter expression is a comma-separated list of conditions that are all
//! required to hold (`Age>=28,Department==IT`). There is no OR.

use datalens_core::{DatalensError, Result, Table};

use crate::evaluator::{SelectionMask, evaluate};
use crate::filter_types::FilterCondition;

/// Split a filter expression into parsed conditions.
///
/// Empty tokens between commas are dropped; an expression with no tokens left
/// is an error.
pub fn parse_filter_expression(expr: &str) -> Result<Vec<FilterCondition>> {
    let conditions = expr
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(FilterCondition::parse)
        .collect::<Result<Vec<_>>>()?;

    if conditions.is_empty() {
        return Err(DatalensError::EmptyExpression("Filter"));
    }
    Ok(conditions)
}

/// Apply a filter expression, returning a new table with the matching rows.
///
/// Every condition is parsed, then resolved against the table's columns,
/// before any row is selected, so an error leaves nothing half-applied.
pub fn run_filter(table: &Table, expr: &str) -> Result<Table> {
    let conditions = parse_filter_expression(expr)?;

    let index = table.column_index();
    let mut combined: SelectionMask = vec![true; table.row_count()];
    for condition in conditions {
        let column = index.resolve(&condition.column)?;

        let mask = evaluate(table, column.position, condition.operator, &condition.value);
        for (keep, matched) in combined.iter_mut().zip(mask) {
            *keep &= matched;
        }

        tracing::debug!(
            column = %column.name,
            operator = %condition.operator,
            value = %condition.value,
            "applied filter condition"
        );
    }

    let filtered = table.select(&combined);
    tracing::debug!(
        input_rows = table.row_count(),
        output_rows = filtered.row_count(),
        "filter complete"
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use datalens_core::Value;
    use pretty_assertions::assert_eq;

    fn staff() -> Table {
        Table::new(
            vec!["Age".into(), "Dept".into()],
            vec![
                vec![Value::Int(20), "HR".into()],
                vec![Value::Int(30), "IT".into()],
                vec![Value::Int(40), "IT".into()],
            ],
        )
    }

    fn ages(table: &Table) -> Vec<Value> {
        table.column_values(0).cloned().collect()
    }

    #[test]
    fn conditions_are_anded() {
        let filtered = run_filter(&staff(), "Age>=28,Dept==IT").unwrap();
        assert_eq!(ages(&filtered), vec![Value::Int(30), Value::Int(40)]);

        let filtered = run_filter(&staff(), "Age>=28, Dept==HR").unwrap();
        assert_eq!(filtered.row_count(), 0);
        assert_eq!(filtered.columns(), staff().columns());
    }

    #[test]
    fn column_lookup_is_case_insensitive() {
        let upper = run_filter(&staff(), "Age>25").unwrap();
        let lower = run_filter(&staff(), "age>25").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn empty_tokens_are_dropped() {
        let filtered = run_filter(&staff(), ",Age<25,,").unwrap();
        assert_eq!(ages(&filtered), vec![Value::Int(20)]);
    }

    #[test]
    fn empty_expression() {
        for expr in ["", "   ", ", ,"] {
            let err = run_filter(&staff(), expr).unwrap_err();
            assert!(matches!(err, DatalensError::EmptyExpression("Filter")), "{expr:?}");
        }
        assert!(matches!(
            parse_filter_expression(" , "),
            Err(DatalensError::EmptyExpression("Filter"))
        ));
    }

    #[test]
    fn unknown_column_fails_whole_filter() {
        let err = run_filter(&staff(), "Age>25,Salary>10").unwrap_err();
        assert!(matches!(err, DatalensError::UnknownColumn { ref column, .. } if column == "Salary"));
    }

    #[test]
    fn malformed_condition_is_reported_before_column_lookup() {
        let err = run_filter(&staff(), "Salary>1,Age").unwrap_err();
        assert!(matches!(err, DatalensError::InvalidCondition { ref condition, .. } if condition == "Age"));
    }

    #[test]
    fn parse_errors_surface() {
        assert!(matches!(
            run_filter(&staff(), "Age"),
            Err(DatalensError::InvalidCondition { .. })
        ));
        assert!(matches!(
            parse_filter_expression("Age>25,==3"),
            Err(DatalensError::MissingColumn(_))
        ));
    }
}
