use crate::domain::ports::EndpointProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_QUOTE_ENDPOINT: &str = "https://api.quotable.io/random";
pub const DEFAULT_PICTURE_ENDPOINT: &str = "https://templater-unsplash.fly.dev/";
pub const DEFAULT_POETRY_ENDPOINT: &str = "https://v2.jinrishici.com/one.json";
pub const DEFAULT_LUNAR_ENDPOINT: &str = "https://api.timelessq.com/time";
pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://wttr.7wate.com";
pub const DEFAULT_HITOKOTO_ENDPOINT: &str = "https://v1.hitokoto.cn";

/// Base URLs of the six external services. Defaults point at the public
/// instances; a TOML file can override any subset, which is how tests and
/// mirrors redirect traffic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub quote: String,
    pub picture: String,
    pub poetry: String,
    pub lunar: String,
    pub weather: String,
    pub hitokoto: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            quote: DEFAULT_QUOTE_ENDPOINT.to_string(),
            picture: DEFAULT_PICTURE_ENDPOINT.to_string(),
            poetry: DEFAULT_POETRY_ENDPOINT.to_string(),
            lunar: DEFAULT_LUNAR_ENDPOINT.to_string(),
            weather: DEFAULT_WEATHER_ENDPOINT.to_string(),
            hitokoto: DEFAULT_HITOKOTO_ENDPOINT.to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let config: EndpointConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for EndpointConfig {
    fn validate(&self) -> Result<()> {
        validate_url("quote", &self.quote)?;
        validate_url("picture", &self.picture)?;
        validate_url("poetry", &self.poetry)?;
        validate_url("lunar", &self.lunar)?;
        validate_url("weather", &self.weather)?;
        validate_url("hitokoto", &self.hitokoto)?;
        Ok(())
    }
}

impl EndpointProvider for EndpointConfig {
    fn quote_endpoint(&self) -> &str {
        &self.quote
    }

    fn picture_endpoint(&self) -> &str {
        &self.picture
    }

    fn poetry_endpoint(&self) -> &str {
        &self.poetry
    }

    fn lunar_endpoint(&self) -> &str {
        &self.lunar
    }

    fn weather_endpoint(&self) -> &str {
        &self.weather
    }

    fn hitokoto_endpoint(&self) -> &str {
        &self.hitokoto
    }
}
