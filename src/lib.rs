pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::EndpointConfig;
pub use crate::core::{HttpFetcher, WebModule};
pub use crate::domain::model::{HitokotoOptions, PictureSize};
pub use crate::utils::error::{Result, WebError};
