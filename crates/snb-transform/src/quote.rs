//! Field quoting for the loader's CSV dialect.
//!
//! A field is wrapped in double quotes when it contains a comma or has a
//! leading or trailing space. Embedded quotes are not escaped; the loader
//! reads the generator's text columns as-is.

use std::borrow::Cow;

/// Returns true when `field` must be quoted in comma-delimited output.
pub fn needs_quoting(field: &str) -> bool {
    field.contains(',') || field.starts_with(' ') || field.ends_with(' ')
}

/// Quotes `field` if required, borrowing it unchanged otherwise.
pub fn quote_field(field: &str) -> Cow<'_, str> {
    if needs_quoting(field) {
        Cow::Owned(format!("\"{field}\""))
    } else {
        Cow::Borrowed(field)
    }
}

/// Quotes every field of a record in place.
pub fn quote_fields(fields: &mut [String]) {
    for field in fields.iter_mut() {
        let quoted = match quote_field(field) {
            Cow::Owned(quoted) => quoted,
            Cow::Borrowed(_) => continue,
        };
        *field = quoted;
    }
}
