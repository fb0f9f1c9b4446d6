use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    /// Non-success response from the completion endpoint. The message comes
    /// from the response body when it carries one.
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed api response: {0}")]
    MalformedResponse(String),
}

impl GenerateError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Api {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}
