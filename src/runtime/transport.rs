//! OCPP-J RPC transport: WebSocket framing, call/response correlation and
//! connection lifecycle.
//!
//! Grounded in `IRpcClient`/`IRpcClientListener`/`IRpcClientSpy` from the
//! reference implementation: a single reader thread owns the socket, a
//! `call()` from any other thread blocks on a condvar keyed by message id
//! until the matching CALLRESULT/CALLERROR arrives or the timeout expires.

use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use serde_json::Value;
use tungstenite::{connect, Message, WebSocket};
use url::Url;
use uuid::Uuid;

use crate::error::{CallErrorCode, TransportError};

/// Connection security profile. Only 1, 2 and 3 are defined; the profile in
/// use for a connection can only increase across reconnect attempts, never
/// decrease, per the specification's security requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SecurityProfile {
    /// WS + HTTP Basic Auth
    Unsecured = 1,
    /// WSS + HTTP Basic Auth
    TlsWithBasicAuth = 2,
    /// WSS + TLS client certificate
    TlsWithClientCertificate = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

/// A decoded OCPP-J RPC frame.
#[derive(Debug, Clone)]
pub enum RpcFrame {
    Call { id: String, action: String, payload: Value },
    CallResult { id: String, payload: Value },
    CallError { id: String, code: String, description: String, details: Value },
}

impl RpcFrame {
    pub fn call(action: &str, payload: Value) -> (String, Self) {
        let id = Uuid::new_v4().to_string();
        (
            id.clone(),
            RpcFrame::Call {
                id,
                action: action.to_string(),
                payload,
            },
        )
    }

    pub fn to_json(&self) -> Value {
        match self {
            RpcFrame::Call { id, action, payload } => {
                serde_json::json!([2, id, action, payload])
            }
            RpcFrame::CallResult { id, payload } => serde_json::json!([3, id, payload]),
            RpcFrame::CallError { id, code, description, details } => {
                serde_json::json!([4, id, code, description, details])
            }
        }
    }

    pub fn from_json(value: &Value) -> Result<Self, TransportError> {
        let arr = value
            .as_array()
            .ok_or_else(|| TransportError::Framing("frame is not a JSON array".into()))?;
        let message_type = arr
            .first()
            .and_then(Value::as_u64)
            .ok_or_else(|| TransportError::Framing("missing message type id".into()))?;
        match message_type {
            2 => {
                let id = arr.get(1).and_then(Value::as_str).ok_or_else(|| {
                    TransportError::Framing("CALL missing message id".into())
                })?;
                let action = arr.get(2).and_then(Value::as_str).ok_or_else(|| {
                    TransportError::Framing("CALL missing action".into())
                })?;
                let payload = arr.get(3).cloned().unwrap_or(Value::Null);
                Ok(RpcFrame::Call {
                    id: id.to_string(),
                    action: action.to_string(),
                    payload,
                })
            }
            3 => {
                let id = arr.get(1).and_then(Value::as_str).ok_or_else(|| {
                    TransportError::Framing("CALLRESULT missing message id".into())
                })?;
                let payload = arr.get(2).cloned().unwrap_or(Value::Null);
                Ok(RpcFrame::CallResult {
                    id: id.to_string(),
                    payload,
                })
            }
            4 => {
                let id = arr.get(1).and_then(Value::as_str).ok_or_else(|| {
                    TransportError::Framing("CALLERROR missing message id".into())
                })?;
                let code = arr.get(2).and_then(Value::as_str).unwrap_or("GenericError");
                let description = arr.get(3).and_then(Value::as_str).unwrap_or("");
                let details = arr.get(4).cloned().unwrap_or(Value::Null);
                Ok(RpcFrame::CallError {
                    id: id.to_string(),
                    code: code.to_string(),
                    description: description.to_string(),
                    details,
                })
            }
            other => Err(TransportError::Framing(format!(
                "unknown message type id {other}"
            ))),
        }
    }
}

/// Observes raw frames crossing the wire, independent of dispatch — used
/// for diagnostics logging, matching `IRpcClientSpy`.
pub trait TransportSpy: Send + Sync {
    fn message_received(&self, _raw: &str) {}
    fn message_sent(&self, _raw: &str) {}
}

/// Observes connection lifecycle events and inbound CALLs, matching
/// `IRpcClientListener`.
pub trait ConnectionListener: Send + Sync {
    fn connected(&self) {}
    fn connection_failed(&self) {}
    fn disconnected(&self) {}
    fn call_received(&self, action: &str, payload: &Value) -> Result<Value, (CallErrorCode, String)>;
}

struct PendingCall {
    result: Mutex<Option<Result<Value, TransportError>>>,
    ready: Condvar,
}

struct Shared {
    state: Mutex<ConnectionState>,
    profile: Mutex<Option<SecurityProfile>>,
    pending: Mutex<HashMap<String, Arc<PendingCall>>>,
    listener: Arc<dyn ConnectionListener>,
    spy: Option<Arc<dyn TransportSpy>>,
}

/// A single charge-point-to-central-system connection.
pub struct RpcClient {
    shared: Arc<Shared>,
    socket: Mutex<Option<WebSocket<tungstenite::stream::MaybeTlsStream<std::net::TcpStream>>>>,
}

impl RpcClient {
    pub fn new(listener: Arc<dyn ConnectionListener>, spy: Option<Arc<dyn TransportSpy>>) -> Self {
        RpcClient {
            shared: Arc::new(Shared {
                state: Mutex::new(ConnectionState::Disconnected),
                profile: Mutex::new(None),
                pending: Mutex::new(HashMap::new()),
                listener,
                spy,
            }),
            socket: Mutex::new(None),
        }
    }

    pub fn state(&self) -> ConnectionState {
        *self.shared.state.lock().expect("transport state mutex poisoned")
    }

    /// Connects to `url` under `profile`. The new profile must not be a
    /// downgrade from whatever was previously negotiated for this client.
    pub fn connect(&self, url: &str, subprotocol: &str, profile: SecurityProfile) -> Result<(), TransportError> {
        {
            let mut current = self.shared.profile.lock().expect("transport profile mutex poisoned");
            if let Some(prev) = *current {
                if profile < prev {
                    return Err(TransportError::ProfileDowngrade {
                        current: prev as u8,
                        requested: profile as u8,
                    });
                }
            }
            *current = Some(profile);
        }

        *self.shared.state.lock().expect("transport state mutex poisoned") = ConnectionState::Connecting;

        let parsed = Url::parse(url).map_err(|e| TransportError::WebSocket(e.to_string()))?;
        let request = tungstenite::handshake::client::Request::builder()
            .uri(parsed.as_str())
            .header("Sec-WebSocket-Protocol", subprotocol)
            .body(())
            .map_err(|e| TransportError::WebSocket(e.to_string()))?;

        match connect(request) {
            Ok((socket, _response)) => {
                *self.socket.lock().expect("transport socket mutex poisoned") = Some(socket);
                *self.shared.state.lock().expect("transport state mutex poisoned") = ConnectionState::Connected;
                self.shared.listener.connected();
                Ok(())
            }
            Err(e) => {
                *self.shared.state.lock().expect("transport state mutex poisoned") = ConnectionState::Disconnected;
                self.shared.listener.connection_failed();
                Err(TransportError::WebSocket(e.to_string()))
            }
        }
    }

    pub fn disconnect(&self) {
        if let Some(mut socket) = self.socket.lock().expect("transport socket mutex poisoned").take() {
            let _ = socket.close(None);
        }
        *self.shared.state.lock().expect("transport state mutex poisoned") = ConnectionState::Disconnected;
        self.shared.listener.disconnected();
    }

    /// Sends a CALL and blocks until the matching CALLRESULT/CALLERROR
    /// arrives, a pump cycle reads it (see [`RpcClient::pump_once`]), or
    /// `timeout` elapses.
    pub fn call(&self, action: &str, payload: Value, timeout: Duration) -> Result<Value, TransportError> {
        if self.state() != ConnectionState::Connected {
            return Err(TransportError::NotConnected);
        }
        let (id, frame) = RpcFrame::call(action, payload);
        let pending = Arc::new(PendingCall {
            result: Mutex::new(None),
            ready: Condvar::new(),
        });
        self.shared
            .pending
            .lock()
            .expect("transport pending mutex poisoned")
            .insert(id.clone(), Arc::clone(&pending));

        self.send_frame(&frame)?;

        let guard = pending.result.lock().expect("pending call mutex poisoned");
        let (mut guard, wait_result) = pending
            .ready
            .wait_timeout_while(guard, timeout, |r| r.is_none())
            .expect("pending call condvar poisoned");
        self.shared
            .pending
            .lock()
            .expect("transport pending mutex poisoned")
            .remove(&id);

        if wait_result.timed_out() {
            return Err(TransportError::Timeout(id));
        }
        guard.take().expect("woken with result present")
    }

    fn send_frame(&self, frame: &RpcFrame) -> Result<(), TransportError> {
        let text = frame.to_json().to_string();
        if let Some(spy) = &self.shared.spy {
            spy.message_sent(&text);
        }
        let mut guard = self.socket.lock().expect("transport socket mutex poisoned");
        let socket = guard.as_mut().ok_or(TransportError::NotConnected)?;
        socket
            .write_message(Message::Text(text))
            .map_err(|e| TransportError::WebSocket(e.to_string()))
    }

    /// Reads and dispatches one inbound frame. Intended to be driven in a
    /// loop by a dedicated reader thread owned by the caller, so the
    /// transport itself stays free of any particular threading policy.
    pub fn pump_once(&self) -> Result<(), TransportError> {
        let raw = {
            let mut guard = self.socket.lock().expect("transport socket mutex poisoned");
            let socket = guard.as_mut().ok_or(TransportError::NotConnected)?;
            socket
                .read_message()
                .map_err(|e| TransportError::WebSocket(e.to_string()))?
        };
        if !raw.is_text() {
            return Ok(());
        }
        let text = raw.into_text().map_err(|e| TransportError::WebSocket(e.to_string()))?;
        if let Some(spy) = &self.shared.spy {
            spy.message_received(&text);
        }

        let value: Value = serde_json::from_str(&text)
            .map_err(|e| TransportError::Framing(e.to_string()))?;
        let frame = RpcFrame::from_json(&value)?;

        match frame {
            RpcFrame::Call { id, action, payload } => {
                let response = self.shared.listener.call_received(&action, &payload);
                let reply = match response {
                    Ok(payload) => RpcFrame::CallResult { id, payload },
                    Err((code, description)) => RpcFrame::CallError {
                        id,
                        code: code.to_string(),
                        description,
                        details: Value::Null,
                    },
                };
                self.send_frame(&reply)?;
            }
            RpcFrame::CallResult { id, payload } => self.complete(&id, Ok(payload)),
            RpcFrame::CallError { id, code, description, .. } => {
                self.complete(&id, Err(TransportError::Framing(format!("{code}: {description}"))))
            }
        }
        Ok(())
    }

    fn complete(&self, id: &str, result: Result<Value, TransportError>) {
        let pending = self
            .shared
            .pending
            .lock()
            .expect("transport pending mutex poisoned")
            .get(id)
            .cloned();
        if let Some(pending) = pending {
            *pending.result.lock().expect("pending call mutex poisoned") = Some(result);
            pending.ready.notify_all();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct NullListener;
    impl ConnectionListener for NullListener {
        fn call_received(&self, _action: &str, _payload: &Value) -> Result<Value, (CallErrorCode, String)> {
            Err((CallErrorCode::NotImplemented, "no handler in test".into()))
        }
    }

    #[test]
    fn call_frame_round_trips_through_json() {
        let (id, frame) = RpcFrame::call("Heartbeat", serde_json::json!({}));
        let encoded = frame.to_json();
        let decoded = RpcFrame::from_json(&encoded).unwrap();
        match decoded {
            RpcFrame::Call { id: decoded_id, action, .. } => {
                assert_eq!(decoded_id, id);
                assert_eq!(action, "Heartbeat");
            }
            _ => panic!("expected a CALL frame"),
        }
    }

    #[test]
    fn call_result_frame_round_trips() {
        let encoded = serde_json::json!([3, "abc", {"status": "Accepted"}]);
        let decoded = RpcFrame::from_json(&encoded).unwrap();
        assert!(matches!(decoded, RpcFrame::CallResult { id, .. } if id == "abc"));
    }

    #[test]
    fn unconnected_call_fails_fast() {
        let client = RpcClient::new(Arc::new(NullListener), None);
        let err = client
            .call("Heartbeat", serde_json::json!({}), Duration::from_millis(10))
            .unwrap_err();
        assert!(matches!(err, TransportError::NotConnected));
    }

    #[test]
    fn security_profile_cannot_downgrade() {
        let client = RpcClient::new(Arc::new(NullListener), None);
        // First "connect" attempt fails (nothing is listening), but the
        // profile bookkeeping happens before the socket is opened.
        let _ = client.connect("ws://127.0.0.1:1", "ocpp1.6", SecurityProfile::TlsWithBasicAuth);
        let err = client
            .connect("ws://127.0.0.1:1", "ocpp1.6", SecurityProfile::Unsecured)
            .unwrap_err();
        assert!(matches!(err, TransportError::ProfileDowngrade { .. }));
    }
}
