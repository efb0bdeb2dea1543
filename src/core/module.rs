use crate::core::{hitokoto, lunar, picture, poetry, quote, weather};
use crate::domain::model::{HitokotoOptions, PictureSize};
use crate::domain::ports::{EndpointProvider, Fetcher};
use crate::utils::error::{Result, WebError};

/// Names under which the template functions are registered, in registration
/// order of the original module.
pub const FUNCTION_NAMES: [&str; 6] = [
    "daily_quote",
    "random_picture",
    "today_poetry",
    "lunar_date",
    "weather",
    "hitokoto",
];

/// The "web" template module: owns the fetcher and the endpoint config and
/// exposes one method per template function, plus dispatch by name for the
/// template evaluator.
pub struct WebModule<F: Fetcher, E: EndpointProvider> {
    fetcher: F,
    endpoints: E,
}

impl<F: Fetcher, E: EndpointProvider> WebModule<F, E> {
    pub fn new(fetcher: F, endpoints: E) -> Self {
        Self { fetcher, endpoints }
    }

    pub fn function_names(&self) -> &'static [&'static str] {
        &FUNCTION_NAMES
    }

    pub async fn daily_quote(&self) -> Result<String> {
        quote::daily_quote(&self.fetcher, self.endpoints.quote_endpoint()).await
    }

    pub async fn random_picture(
        &self,
        size: Option<PictureSize>,
        query: Option<&str>,
        include_size: bool,
    ) -> Result<String> {
        picture::random_picture(
            &self.fetcher,
            self.endpoints.picture_endpoint(),
            size,
            query,
            include_size,
        )
        .await
    }

    pub async fn today_poetry(&self) -> Result<String> {
        poetry::today_poetry(&self.fetcher, self.endpoints.poetry_endpoint()).await
    }

    pub async fn lunar_date(&self) -> Result<String> {
        lunar::lunar_date(&self.fetcher, self.endpoints.lunar_endpoint()).await
    }

    pub async fn weather(&self, city: &str, params: &str) -> Result<String> {
        weather::weather(&self.fetcher, self.endpoints.weather_endpoint(), city, params).await
    }

    pub async fn hitokoto(&self, options: &HitokotoOptions) -> Result<String> {
        hitokoto::hitokoto(&self.fetcher, self.endpoints.hitokoto_endpoint(), options).await
    }

    /// Calls a function by its registered name with the positional string
    /// arguments a template evaluator hands over.
    ///
    /// Conventions: `random_picture [size] [query] [include_size]`,
    /// `weather [city] [params]`, `hitokoto [key=value]...`; the remaining
    /// functions take no arguments.
    pub async fn call(&self, name: &str, args: &[String]) -> Result<String> {
        tracing::debug!("Dispatching template function '{}' ({} args)", name, args.len());
        match name {
            "daily_quote" => self.daily_quote().await,
            "random_picture" => {
                let size = match args.first().filter(|s| !s.is_empty()) {
                    Some(raw) => Some(raw.parse()?),
                    None => None,
                };
                let query = args.get(1).filter(|s| !s.is_empty()).map(String::as_str);
                let include_size = match args.get(2) {
                    Some(raw) => parse_bool("include_size", raw)?,
                    None => false,
                };
                self.random_picture(size, query, include_size).await
            }
            "today_poetry" => self.today_poetry().await,
            "lunar_date" => self.lunar_date().await,
            "weather" => {
                let city = args
                    .first()
                    .filter(|s| !s.is_empty())
                    .map(String::as_str)
                    .unwrap_or(weather::DEFAULT_CITY);
                let params = args
                    .get(1)
                    .map(String::as_str)
                    .unwrap_or(weather::DEFAULT_PARAMS);
                self.weather(city, params).await
            }
            "hitokoto" => {
                let options = parse_hitokoto_args(args)?;
                self.hitokoto(&options).await
            }
            other => Err(WebError::UnknownFunctionError {
                name: other.to_string(),
            }),
        }
    }
}

fn parse_bool(field: &str, raw: &str) -> Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" | "" => Ok(false),
        _ => Err(WebError::InvalidConfigValueError {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "Expected 'true' or 'false'".to_string(),
        }),
    }
}

fn parse_hitokoto_args(args: &[String]) -> Result<HitokotoOptions> {
    let mut options = HitokotoOptions::default();
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            return Err(WebError::InvalidConfigValueError {
                field: "hitokoto".to_string(),
                value: arg.clone(),
                reason: "Expected key=value".to_string(),
            });
        };
        let parse_len = |field: &str| -> Result<usize> {
            value.parse().map_err(|_| WebError::InvalidConfigValueError {
                field: field.to_string(),
                value: value.to_string(),
                reason: "Expected a number".to_string(),
            })
        };
        match key {
            "c" => options.category = Some(value.to_string()),
            "encode" => options.encode = Some(value.to_string()),
            "charset" => options.charset = Some(value.to_string()),
            "callback" => options.callback = Some(value.to_string()),
            "select" => options.select = Some(value.to_string()),
            "min_length" => options.min_length = Some(parse_len("min_length")?),
            "max_length" => options.max_length = Some(parse_len("max_length")?),
            other => {
                return Err(WebError::InvalidConfigValueError {
                    field: "hitokoto".to_string(),
                    value: other.to_string(),
                    reason: "Unknown option".to_string(),
                })
            }
        }
    }
    Ok(options)
}
