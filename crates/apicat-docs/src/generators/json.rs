use crate::{
    error::{GeneratorError, Result},
    model::ApiItem,
};

/// Pretty-printed JSON array of `{ name, kind, description }` records.
pub fn render_json(items: &[ApiItem]) -> Result<String> {
    serde_json::to_string_pretty(items).map_err(|error| GeneratorError::Persistence {
        message: error.to_string(),
    })
}
