use reqwest::StatusCode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to build the request URL")]
    InvalidUrl { source: url::ParseError },

    #[error("Pexels API request failed")]
    Request { source: reqwest::Error },

    #[error("Failed to read Pexels API response")]
    ReadBody { source: reqwest::Error },

    #[error("Pexels API error: {status} {body}")]
    BadStatus { status: StatusCode, body: String },

    #[error("Failed to parse response: {body}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },

    #[error("Pexels API returned a photo without an id")]
    BlankPhoto,
}

impl Error {
    /// Transport-level failures, as opposed to the service answering with
    /// something we couldn't use.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl { .. } | Self::Request { .. } | Self::ReadBody { .. }
        )
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::BlankPhoto)
    }
}
