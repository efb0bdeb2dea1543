pub mod client;
pub mod hitokoto;
pub mod lunar;
pub mod module;
pub mod picture;
pub mod poetry;
pub mod quote;
pub mod weather;

pub use crate::domain::model::{HitokotoOptions, PictureSize};
pub use crate::domain::ports::{EndpointProvider, Fetcher};
pub use crate::utils::error::Result;
pub use client::HttpFetcher;
pub use module::{FUNCTION_NAMES, WebModule};
