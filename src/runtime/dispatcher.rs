//! Message dispatcher: routes an inbound CALL's action name to a typed
//! handler, validating against the schema registry before decode and after
//! encode.
//!
//! Handler registration is idempotent per action: a second `register` call
//! for an action that already has a handler is rejected rather than
//! silently overwriting it, so a manager installing a default handler
//! can't be overridden by accident.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::{CallErrorCode, DispatchError};
use crate::runtime::schema_registry::{Direction, SchemaRegistry};

/// A handler for one action. Boxed as `Fn` (not `FnMut`) since multiple
/// worker threads may dispatch the same action concurrently. The `Err`
/// side carries the CALLERROR code the handler wants reported, not just a
/// description, so a rejection can be reported as e.g.
/// `PropertyConstraintViolation` instead of a single hardcoded code.
pub type Handler = Box<dyn Fn(Value) -> Result<Value, (CallErrorCode, String)> + Send + Sync>;

struct Registration {
    handler: Handler,
}

/// Routes inbound CALLs by action name to registered handlers, enforcing
/// schema validation on the way in and out.
pub struct Dispatcher {
    schemas: Arc<SchemaRegistry>,
    handlers: Mutex<HashMap<String, Registration>>,
}

impl Dispatcher {
    pub fn new(schemas: Arc<SchemaRegistry>) -> Self {
        Dispatcher {
            schemas,
            handlers: Mutex::new(HashMap::new()),
        }
    }

    /// Registers the handler for `action`. Returns
    /// [`DispatchError::AlreadyRegistered`] if `action` already has one —
    /// registration is idempotent per action, not last-writer-wins.
    pub fn register(&self, action: impl Into<String>, handler: Handler) -> Result<(), DispatchError> {
        let action = action.into();
        let mut handlers = self.handlers.lock().expect("dispatcher handlers mutex poisoned");
        if handlers.contains_key(&action) {
            return Err(DispatchError::AlreadyRegistered(action));
        }
        handlers.insert(action, Registration { handler });
        Ok(())
    }

    pub fn is_registered(&self, action: &str) -> bool {
        self.handlers
            .lock()
            .expect("dispatcher handlers mutex poisoned")
            .contains_key(action)
    }

    /// Validates, decodes, and invokes the handler registered for
    /// `action`, returning the (schema-validated) response payload or the
    /// [`DispatchError`] to report back over the wire as a CALLERROR.
    pub fn dispatch(&self, action: &str, payload: Value) -> Result<Value, DispatchError> {
        // Unknown-schema is tolerated (an action with no schema on file
        // still dispatches); a schema violation is not.
        match self.schemas.validate_value(action, Direction::Request, &payload) {
            Ok(()) => {}
            Err(crate::error::ValidateError::UnknownAction(_)) => {}
            Err(e) => return Err(DispatchError::Schema(e)),
        }

        let handlers = self.handlers.lock().expect("dispatcher handlers mutex poisoned");
        let registration = handlers
            .get(action)
            .ok_or_else(|| DispatchError::NotImplemented(action.to_string()))?;

        let result = catch_unwind(AssertUnwindSafe(|| (registration.handler)(payload)));
        drop(handlers);

        let response = match result {
            Ok(Ok(response)) => response,
            Ok(Err((code, reason))) => return Err(DispatchError::HandlerRejected(code, reason)),
            Err(_) => return Err(DispatchError::HandlerPanic),
        };

        match self.schemas.validate_value(action, Direction::Response, &response) {
            Ok(()) => {}
            Err(crate::error::ValidateError::UnknownAction(_)) => {}
            Err(e) => return Err(DispatchError::Schema(e)),
        }

        Ok(response)
    }
}

/// Maps a [`DispatchError`] to the `(code, description)` pair the
/// transport layer writes into a CALLERROR frame.
pub fn to_call_error(err: &DispatchError) -> (CallErrorCode, String) {
    (err.call_error_code(), err.to_string())
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn unregistered_action_is_not_implemented() {
        let dispatcher = Dispatcher::new(Arc::new(SchemaRegistry::empty()));
        let err = dispatcher.dispatch("Heartbeat", json!({})).unwrap_err();
        assert!(matches!(err, DispatchError::NotImplemented(_)));
    }

    #[test]
    fn registered_handler_runs() {
        let dispatcher = Dispatcher::new(Arc::new(SchemaRegistry::empty()));
        dispatcher.register("Heartbeat", Box::new(|_req| Ok(json!({"currentTime": "2024-01-01T00:00:00Z"})))).unwrap();
        let response = dispatcher.dispatch("Heartbeat", json!({})).unwrap();
        assert_eq!(response["currentTime"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn handler_rejection_is_reported_with_its_chosen_code() {
        let dispatcher = Dispatcher::new(Arc::new(SchemaRegistry::empty()));
        dispatcher
            .register("Reset", Box::new(|_req| Err((CallErrorCode::PropertyConstraintViolation, "connector busy".to_string()))))
            .unwrap();
        let err = dispatcher.dispatch("Reset", json!({})).unwrap_err();
        assert!(matches!(err, DispatchError::HandlerRejected(CallErrorCode::PropertyConstraintViolation, _)));
        assert_eq!(err.call_error_code(), CallErrorCode::PropertyConstraintViolation);
    }

    #[test]
    fn handler_panic_is_caught() {
        let dispatcher = Dispatcher::new(Arc::new(SchemaRegistry::empty()));
        dispatcher.register("Reset", Box::new(|_req| panic!("boom"))).unwrap();
        let err = dispatcher.dispatch("Reset", json!({})).unwrap_err();
        assert!(matches!(err, DispatchError::HandlerPanic));
    }

    #[test]
    fn re_registering_an_action_is_rejected() {
        let dispatcher = Dispatcher::new(Arc::new(SchemaRegistry::empty()));
        dispatcher.register("Reset", Box::new(|_req| Ok(json!({"status": "first"})))).unwrap();
        let err = dispatcher
            .register("Reset", Box::new(|_req| Ok(json!({"status": "second"}))))
            .unwrap_err();
        assert!(matches!(err, DispatchError::AlreadyRegistered(_)));

        let response = dispatcher.dispatch("Reset", json!({})).unwrap();
        assert_eq!(response["status"], "first");
    }
}
