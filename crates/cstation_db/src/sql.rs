//! Helpers for building parameterized SQL.

use crate::error::DbError;

/// The SET clause and bind values of a partial UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    /// `col_a = $1, col_b = $2`
    pub set_clause: String,
    /// Values in placeholder order.
    pub values: Vec<String>,
}

impl PartialUpdate {
    /// Placeholder index for the first parameter after the SET values.
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }
}

/// Builds the SET clause for the fields that are present.
///
/// `data` holds `(field, value)` pairs as they arrive from clients;
/// `field_to_column` renames fields whose column differs (`firstName` to
/// `first_name`). Unmapped fields are used as column names unchanged, so
/// callers must only pass whitelisted fields.
pub fn sql_for_partial_update(
    data: &[(&str, Option<String>)],
    field_to_column: &[(&str, &str)],
) -> Result<PartialUpdate, DbError> {
    let mut assignments = Vec::new();
    let mut values = Vec::new();

    for (field, value) in data {
        let Some(value) = value else { continue };
        let column = field_to_column
            .iter()
            .find(|(from, _)| from == field)
            .map_or(*field, |(_, to)| *to);

        values.push(value.clone());
        assignments.push(format!("{} = ${}", column, values.len()));
    }

    if values.is_empty() {
        return Err(DbError::NoUpdateFields);
    }

    Ok(PartialUpdate {
        set_clause: assignments.join(", "),
        values,
    })
}
