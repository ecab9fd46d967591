//! Runtime JSON schema loading and validation, keyed by action name.
//!
//! The teacher's `ocpp_json_validate_attribute` macro embeds each schema at
//! compile time via `include_str!`. This crate loads schema documents from
//! a directory at runtime instead, so the same binary serves whichever
//! action set (1.6 or 2.0.1) the operator points it at. [`crate::validate::JsonValidate`]
//! is unchanged — it already takes the compiled validator by reference.

use std::collections::HashMap;
use std::path::Path;

use jsonschema::JSONSchema;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ValidateError;
use crate::validate::JsonValidate;

/// Which direction a schema applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Request,
    Response,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Key<'a> {
    action: &'a str,
    direction: Direction,
}

/// Holds one compiled [`JSONSchema`] per `(action, direction)` pair.
///
/// Compiled schemas are not `Send`-cheap to rebuild, so they are compiled
/// once at load time and looked up by name thereafter.
pub struct SchemaRegistry {
    schemas: HashMap<(String, Direction), JSONSchema>,
}

impl SchemaRegistry {
    pub fn empty() -> Self {
        SchemaRegistry {
            schemas: HashMap::new(),
        }
    }

    /// Loads every `<Action>.json` / `<Action>Response.json` pair from
    /// `dir`. A request schema file is named `<Action>.json`; its response
    /// counterpart `<Action>Response.json`. Missing files are skipped, not
    /// an error — not every action has a schema for both directions (e.g.
    /// CALLERROR payloads never do).
    pub fn load_dir(dir: &Path) -> Result<Self, ValidateError> {
        let mut schemas = HashMap::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(s) => s.to_string(),
                None => continue,
            };
            let (action, direction) = if let Some(base) = stem.strip_suffix("Response") {
                (base.to_string(), Direction::Response)
            } else {
                (stem, Direction::Request)
            };

            let contents = std::fs::read_to_string(&path)?;
            let document: Value = serde_json::from_str(&contents)
                .map_err(|e| ValidateError::BadSchemaDocument(e.to_string()))?;
            // JSONSchema::compile borrows its input for the lifetime of the
            // compiled schema; leaking the parsed document ties that
            // lifetime to 'static, matching the registry's own lifetime.
            let leaked: &'static Value = Box::leak(Box::new(document));
            let compiled = JSONSchema::compile(leaked)
                .map_err(|e| ValidateError::BadSchemaDocument(e.to_string()))?;
            schemas.insert((action, direction), compiled);
        }
        Ok(SchemaRegistry { schemas })
    }

    pub fn register(&mut self, action: impl Into<String>, direction: Direction, schema: Value) -> Result<(), ValidateError> {
        let leaked: &'static Value = Box::leak(Box::new(schema));
        let compiled = JSONSchema::compile(leaked)
            .map_err(|e| ValidateError::BadSchemaDocument(e.to_string()))?;
        self.schemas.insert((action.into(), direction), compiled);
        Ok(())
    }

    /// Validates `payload` against the schema registered for `action` in
    /// `direction`. An action with no registered schema for that direction
    /// is reported as [`ValidateError::UnknownAction`] — callers that want
    /// "no schema means pass" behaviour should catch that variant
    /// explicitly; the dispatcher maps it to `NotSupported`.
    pub fn validate_value(&self, action: &str, direction: Direction, payload: &Value) -> Result<(), ValidateError> {
        let schema = self
            .schemas
            .get(&(action.to_string(), direction))
            .ok_or_else(|| ValidateError::UnknownAction(action.to_string()))?;
        if let Err(errors) = schema.validate(payload) {
            let messages = errors.map(|e| e.to_string()).collect();
            return Err(ValidateError::FailToValidateJson(messages));
        }
        Ok(())
    }

    pub fn validate<T: Serialize>(&self, action: &str, direction: Direction, value: &T) -> Result<(), ValidateError> {
        self.validate_value(action, direction, &json!(value))
    }

    pub fn has_schema(&self, action: &str, direction: Direction) -> bool {
        self.schemas.contains_key(&(action.to_string(), direction))
    }
}

/// Adapts a [`SchemaRegistry`] lookup to the teacher's original
/// [`JsonValidate`] trait shape, for message types that still want to call
/// `self.generic_validate(&schema)` directly with a borrowed compiled
/// schema rather than going through the registry by name.
pub fn validate_against<T: JsonValidate + Serialize>(value: &T, schema: &JSONSchema) -> Result<(), ValidateError> {
    value.generic_validate(schema)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unknown_action_reports_unknown() {
        let registry = SchemaRegistry::empty();
        let err = registry
            .validate_value("NoSuchAction", Direction::Request, &json!({}))
            .unwrap_err();
        assert!(matches!(err, ValidateError::UnknownAction(_)));
    }

    #[test]
    fn registered_schema_validates() {
        let mut registry = SchemaRegistry::empty();
        registry
            .register(
                "Heartbeat",
                Direction::Request,
                json!({"type": "object", "properties": {}, "additionalProperties": false}),
            )
            .unwrap();
        assert!(registry
            .validate_value("Heartbeat", Direction::Request, &json!({}))
            .is_ok());
        assert!(registry
            .validate_value("Heartbeat", Direction::Request, &json!({"extra": 1}))
            .is_err());
    }
}
