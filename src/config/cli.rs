use crate::config::endpoints::EndpointConfig;
use crate::core::weather::{DEFAULT_CITY, DEFAULT_PARAMS};
use crate::domain::model::{HitokotoOptions, PictureSize};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "websnip")]
#[command(about = "Fetch short web snippets (quote, poetry, weather, ...) for document insertion")]
pub struct CliConfig {
    #[arg(long, help = "TOML file overriding service endpoints")]
    pub endpoints_file: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Random quote as a Markdown callout
    Quote,
    /// Random picture as a Markdown image with credit
    Picture {
        #[arg(long, help = "Requested size, WIDTH or WIDTHxHEIGHT")]
        size: Option<PictureSize>,
        #[arg(long, help = "Search term for the picture")]
        query: Option<String>,
        #[arg(long, help = "Put the size in the alt text instead of the URL")]
        include_size: bool,
    },
    /// Line of classical poetry with author and dynasty
    Poetry,
    /// Current lunar calendar date
    Lunar,
    /// One-line weather report
    Weather {
        #[arg(default_value = DEFAULT_CITY)]
        city: String,
        #[arg(long, default_value = DEFAULT_PARAMS, help = "Raw query string of the weather service")]
        params: String,
    },
    /// One aphorism sentence
    Hitokoto {
        #[arg(long, short = 'c', help = "Sentence category code")]
        category: Option<String>,
        #[arg(long)]
        min_length: Option<usize>,
        #[arg(long)]
        max_length: Option<usize>,
        #[arg(long, help = "JSON field to select")]
        select: Option<String>,
        #[arg(long)]
        charset: Option<String>,
    },
}

impl CliConfig {
    /// Endpoints from the override file when given, defaults otherwise.
    pub fn endpoints(&self) -> Result<EndpointConfig> {
        match &self.endpoints_file {
            Some(path) => EndpointConfig::from_file(path),
            None => Ok(EndpointConfig::default()),
        }
    }
}

impl Command {
    pub fn hitokoto_options(&self) -> Option<HitokotoOptions> {
        match self {
            Command::Hitokoto {
                category,
                min_length,
                max_length,
                select,
                charset,
            } => Some(HitokotoOptions {
                category: category.clone(),
                charset: charset.clone(),
                select: select.clone(),
                min_length: *min_length,
                max_length: *max_length,
                ..Default::default()
            }),
            _ => None,
        }
    }
}
