use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Request failed with status {status} for {url}")]
    StatusError {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Malformed response: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid endpoint file: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("{service} reported failure: {message}")]
    ApiStatusError { service: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown template function: {name}")]
    UnknownFunctionError { name: String },

    #[error("Error running {function}: {source}")]
    FunctionError {
        function: &'static str,
        #[source]
        source: Box<WebError>,
    },
}

impl WebError {
    /// Wraps any lower-level failure into the single error kind a template
    /// function surfaces to the template evaluator.
    pub fn in_function(function: &'static str) -> impl FnOnce(WebError) -> WebError {
        move |source| WebError::FunctionError {
            function,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
