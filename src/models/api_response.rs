use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata shared by every API response.
///
/// Successful responses usually only carry the HTTP status. Error responses
/// also carry the remote error `code`, a `message` and optional `details`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonResponse {
    /// HTTP status of the response this value was taken from.
    #[serde(skip)]
    pub status_code: u16,

    /// Remote error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,

    /// Remote error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Additional diagnostic entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<CommonResponseDetail>,
}

/// A single diagnostic entry of the response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonResponseDetail {
    #[serde(rename = "typeUrl", default)]
    pub type_url: String,

    #[serde(default)]
    pub value: String,
}

impl CommonResponse {
    /// Extracts the envelope from a raw response body.
    ///
    /// Fields whose JSON type does not match the envelope are ignored, so a
    /// payload field named `code` holding a string does not collide with the
    /// numeric error code.
    pub(crate) fn from_body(status_code: u16, body: &[u8]) -> Self {
        let mut common = CommonResponse {
            status_code,
            ..Default::default()
        };

        let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
            if !body.is_empty() && !(200..300).contains(&status_code) {
                common.message = Some(String::from_utf8_lossy(body).into_owned());
            }
            return common;
        };

        common.code = map.get("code").and_then(Value::as_i64);
        common.message = map.get("message").and_then(Value::as_str).map(str::to_owned);
        common.details = map
            .get("details")
            .and_then(Value::as_array)
            .map(|details| {
                details
                    .iter()
                    .filter_map(|detail| CommonResponseDetail::deserialize(detail).ok())
                    .collect()
            })
            .unwrap_or_default();

        common
    }

    /// Returns true if the response carried a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

impl fmt::Display for CommonResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}", self.status_code)?;
        if let Some(code) = self.code {
            write!(f, ", code {}", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

/// Implemented by every typed response so the transport can copy the
/// envelope into it after decoding.
pub trait Envelope {
    fn common(&self) -> &CommonResponse;

    fn common_mut(&mut self) -> &mut CommonResponse;
}

/// Implements [`Envelope`] for response types holding a `common` field.
macro_rules! impl_envelope {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::Envelope for $ty {
                fn common(&self) -> &$crate::models::CommonResponse {
                    &self.common
                }

                fn common_mut(&mut self) -> &mut $crate::models::CommonResponse {
                    &mut self.common
                }
            }
        )+
    };
}

pub(crate) use impl_envelope;

/// Response for endpoints whose payload is not interpreted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmptyResponse {
    #[serde(skip)]
    pub common: CommonResponse,
}

impl_envelope!(EmptyResponse);
