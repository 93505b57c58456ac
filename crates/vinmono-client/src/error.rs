use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. Carries the response body text as the message so
    /// upstream error payloads surface to the caller unchanged.
    #[error("unexpected HTTP status {status} from {url}: {body}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A required structure was entirely absent from an otherwise valid
    /// payload (e.g. no `productSearchResult` in a search response).
    #[error("unexpected payload shape: {context}")]
    UnexpectedShape { context: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
