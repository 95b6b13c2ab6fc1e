use serde::{Deserialize, Serialize};

/// Uniform result envelope wrapped around every API payload.
///
/// Serializes as `{"isOk": .., "mssg": .., "data": .., "expired": ..}` with
/// `data` and `expired` omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(rename = "isOk")]
    pub is_ok: bool,
    pub mssg: String,
    // Missing `Option` fields deserialize to `None`; a field-level
    // `default` would add a `T: Default` bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub expired: Option<bool>,
}

impl<T> ApiResponse<T> {
    pub fn ok(mssg: impl Into<String>, data: T) -> Self {
        Self {
            is_ok: true,
            mssg: mssg.into(),
            data: Some(data),
            expired: None,
        }
    }

    pub fn ok_empty(mssg: impl Into<String>) -> Self {
        Self {
            is_ok: true,
            mssg: mssg.into(),
            data: None,
            expired: None,
        }
    }

    pub fn error(mssg: impl Into<String>) -> Self {
        Self {
            is_ok: false,
            mssg: mssg.into(),
            data: None,
            expired: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Flags the response as stale. An expired response is not an error.
    pub fn mark_expired(mut self) -> Self {
        self.expired = Some(true);
        self
    }

    pub fn is_expired(&self) -> bool {
        self.expired.unwrap_or(false)
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    pub fn map_data<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            is_ok: self.is_ok,
            mssg: self.mssg,
            data: self.data.map(f),
            expired: self.expired,
        }
    }
}
