use crate::envelope::ApiResponse;

pub struct ApiResponseBuilder<T> {
    is_ok: Option<bool>,
    mssg: Option<String>,
    data: Option<T>,
    expired: Option<bool>,
}

impl<T> Default for ApiResponseBuilder<T> {
    fn default() -> Self {
        Self {
            is_ok: None,
            mssg: None,
            data: None,
            expired: None,
        }
    }
}

impl<T> ApiResponseBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, is_ok: bool) -> Self {
        self.is_ok = Some(is_ok);
        self
    }

    pub fn ok(self) -> Self {
        self.status(true)
    }

    pub fn failed(self) -> Self {
        self.status(false)
    }

    pub fn mssg(mut self, mssg: impl Into<String>) -> Self {
        self.mssg = Some(mssg.into());
        self
    }

    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn expired(mut self, expired: bool) -> Self {
        self.expired = Some(expired);
        self
    }

    pub fn build(self) -> Result<ApiResponse<T>, BuildError> {
        let is_ok = self.is_ok.ok_or(BuildError::MissingStatus)?;
        let mssg = self.mssg.ok_or(BuildError::MissingMessage)?;

        Ok(ApiResponse {
            is_ok,
            mssg,
            data: self.data,
            expired: self.expired,
        })
    }
}

impl<T> ApiResponse<T> {
    pub fn builder() -> ApiResponseBuilder<T> {
        ApiResponseBuilder::new()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Status (isOk) is required to build a response")]
    MissingStatus,
    #[error("Message (mssg) is required to build a response")]
    MissingMessage,
}
