//! Column projection of resources into display rows.

use std::collections::HashMap;

use crate::resource::{FieldValue, Fields};

/// Turns a raw attribute value into its display string.
pub type Formatter = fn(&FieldValue) -> String;

/// Formatters keyed by column display name.
pub type Formatters = HashMap<String, Formatter>;

/// Headers plus a lazy row iterator, consumed once for display.
pub struct Projection<'a, I> {
    pub headers: Vec<&'a str>,
    pub rows: I,
}

/// Normalizes a column display name to an attribute name ("Project Id" -> "project_id").
pub fn normalize_column(column: &str) -> String {
    column.to_lowercase().replace(' ', "_")
}

/// Projects one object onto `columns`, applying formatters where registered.
///
/// Attributes the object does not carry render as an empty string.
pub fn project_row<T: Fields>(
    object: &T,
    columns: &[&str],
    formatters: &Formatters,
) -> Vec<String> {
    columns
        .iter()
        .map(|column| match object.field(&normalize_column(column)) {
            Some(value) => match formatters.get(*column) {
                Some(format) => format(&value),
                None => value.to_string(),
            },
            None => String::new(),
        })
        .collect()
}

/// Projects `objects` onto the ordered `columns`.
pub fn project<'a, T, I>(
    objects: I,
    columns: &'a [&'a str],
    formatters: &'a Formatters,
) -> Projection<'a, impl Iterator<Item = Vec<String>> + 'a>
where
    T: Fields + 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: 'a,
{
    Projection {
        headers: columns.to_vec(),
        rows: objects
            .into_iter()
            .map(move |object| project_row(object, columns, formatters)),
    }
}

/// Sorted `(attribute, value)` pairs present on a single object.
pub fn show_fields<T: Fields>(object: &T) -> Vec<(&'static str, FieldValue)> {
    let mut fields: Vec<(&'static str, FieldValue)> = T::FIELDS
        .iter()
        .filter_map(|name| object.field(name).map(|value| (*name, value)))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));
    fields
}
