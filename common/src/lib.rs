pub mod config;

use validator::ValidationErrors;

/// Flattens `validator` errors into a single `; `-separated message string
/// suitable for the error response body.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Builds the standard message for request bodies missing required fields,
/// e.g. `Missing required fields: topic, week`.
pub fn missing_fields_message(missing: &[&str]) -> String {
    format!("Missing required fields: {}", missing.join(", "))
}
