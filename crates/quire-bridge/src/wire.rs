//! JSON-lines framing for the bridge.
//!
//! Each line is one object: `{"id": "...", "kind": "...", "payload": ...}`.
//! Requests whose `kind` is not one of the six bridge operations are
//! rejected before their payload is looked at.

use quire_common::{new_correlation_id, BridgeError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::messages::{BridgeRequest, BridgeResponse};

/// A framed message as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    /// Correlation id echoed back in the response.
    #[serde(default)]
    pub id: Option<String>,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

/// Check whether a request kind is one of the bridge operations.
pub fn is_request_kind_allowed(kind: &str) -> bool {
    BridgeRequest::KINDS.contains(&kind)
}

/// A decoded request line.
#[derive(Debug)]
pub struct DecodedRequest {
    pub id: String,
    pub request: BridgeRequest,
}

/// A line that could not be turned into a request. `id` is the line's own
/// id when it could be read, otherwise a fresh one.
#[derive(Debug)]
pub struct RejectedRequest {
    pub id: String,
    pub error: BridgeError,
}

/// Decode one request line. Lines without an id get a fresh one.
pub fn decode_request(line: &str) -> Result<DecodedRequest, RejectedRequest> {
    let message: WireMessage = serde_json::from_str(line).map_err(|e| RejectedRequest {
        id: new_correlation_id(),
        error: BridgeError::Protocol(format!("malformed message: {e}")),
    })?;

    let id = message.id.unwrap_or_else(new_correlation_id);

    if !is_request_kind_allowed(&message.kind) {
        return Err(RejectedRequest {
            id,
            error: BridgeError::Protocol(format!("unknown request kind '{}'", message.kind)),
        });
    }

    let tagged = serde_json::json!({ "kind": message.kind, "payload": message.payload });
    match serde_json::from_value::<BridgeRequest>(tagged) {
        Ok(request) => Ok(DecodedRequest { id, request }),
        Err(e) => Err(RejectedRequest {
            id,
            error: BridgeError::Protocol(format!("invalid {} payload: {e}", message.kind)),
        }),
    }
}

/// Encode a response line (no trailing newline).
pub fn encode_response(id: &str, response: &BridgeResponse) -> String {
    let message = match serde_json::to_value(response) {
        Ok(Value::Object(mut map)) => WireMessage {
            id: Some(id.to_string()),
            kind: map
                .remove("kind")
                .and_then(|k| k.as_str().map(str::to_string))
                .unwrap_or_default(),
            payload: map.remove("payload").unwrap_or(Value::Null),
        },
        _ => WireMessage {
            id: Some(id.to_string()),
            kind: "error".into(),
            payload: serde_json::json!({"kind": "protocol", "message": "unencodable response"}),
        },
    };
    serde_json::to_string(&message).unwrap_or_else(|_| {
        format!("{{\"id\":{id:?},\"kind\":\"error\",\"payload\":{{\"kind\":\"protocol\",\"message\":\"unencodable response\"}}}}")
    })
}

/// Encode a request line; the client side of [`decode_request`].
pub fn encode_request(id: &str, request: &BridgeRequest) -> Result<String, BridgeError> {
    let mut value =
        serde_json::to_value(request).map_err(|e| BridgeError::Protocol(e.to_string()))?;
    if let Value::Object(ref mut map) = value {
        map.insert("id".into(), Value::String(id.to_string()));
    }
    serde_json::to_string(&value).map_err(|e| BridgeError::Protocol(e.to_string()))
}

/// Decode a response line into its id and response.
pub fn decode_response(line: &str) -> Result<(Option<String>, BridgeResponse), BridgeError> {
    let message: WireMessage = serde_json::from_str(line)
        .map_err(|e| BridgeError::Protocol(format!("malformed response: {e}")))?;
    let tagged = serde_json::json!({ "kind": message.kind, "payload": message.payload });
    let response = serde_json::from_value(tagged)
        .map_err(|e| BridgeError::Protocol(format!("invalid response: {e}")))?;
    Ok((message.id, response))
}
