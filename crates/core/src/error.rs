use validator::ValidationErrors;

use crate::types::ItemId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: ItemId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for CoreError {
    /// Flatten validator output into a single message.
    ///
    /// Field errors are ordered by field name so the message is stable across
    /// runs. Errors without a custom message fall back to `"{field} is invalid"`.
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let messages: Vec<String> = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();

        CoreError::Validation(messages.join("; "))
    }
}
