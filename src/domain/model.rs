use crate::utils::error::{Result, WebError};
use crate::utils::validation::Validate;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Response of the quote service (`GET /random`).
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteResponse {
    pub content: String,
    pub author: String,
}

/// Response of the photo proxy. `full` is the full-resolution image URL,
/// `photog` the photographer credit.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoResponse {
    pub full: String,
    pub photog: String,
}

/// Response of the poetry service. Payloads carry a `status` field that must
/// be `"success"` before `data` is usable.
#[derive(Debug, Clone, Deserialize)]
pub struct PoetryResponse {
    pub status: String,
    pub data: Option<PoetryData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoetryData {
    pub content: String,
    pub origin: PoetryOrigin,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoetryOrigin {
    pub author: String,
    pub dynasty: String,
}

/// Response of the lunar/time service. `errno` is zero on success.
#[derive(Debug, Clone, Deserialize)]
pub struct LunarResponse {
    pub errno: i64,
    pub data: Option<LunarData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LunarData {
    pub lunar: LunarDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LunarDate {
    #[serde(rename = "cyclicalYear")]
    pub cyclical_year: String,
    #[serde(rename = "cyclicalMonth")]
    pub cyclical_month: String,
    #[serde(rename = "cyclicalDay")]
    pub cyclical_day: String,
    pub zodiac: String,
    #[serde(rename = "cnMonth")]
    pub cn_month: String,
    #[serde(rename = "cnDay")]
    pub cn_day: String,
}

/// Response of the aphorism service; only the sentence itself is used.
#[derive(Debug, Clone, Deserialize)]
pub struct HitokotoResponse {
    pub hitokoto: String,
}

/// Requested picture size: a bare width or explicit `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureSize {
    Width(u32),
    Dimensions(u32, u32),
}

impl FromStr for PictureSize {
    type Err = WebError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| WebError::InvalidConfigValueError {
            field: "size".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };

        if let Some((w, h)) = s.split_once('x') {
            let width = w.parse().map_err(|_| invalid("Width is not a number"))?;
            let height = h.parse().map_err(|_| invalid("Height is not a number"))?;
            Ok(PictureSize::Dimensions(width, height))
        } else {
            let width = s.parse().map_err(|_| invalid("Width is not a number"))?;
            Ok(PictureSize::Width(width))
        }
    }
}

impl fmt::Display for PictureSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PictureSize::Width(w) => write!(f, "{}", w),
            PictureSize::Dimensions(w, h) => write!(f, "{}x{}", w, h),
        }
    }
}

/// Optional query parameters of the aphorism service. Unset fields are left
/// out of the request entirely; `encode` defaults to `json`, which every
/// call sends unless explicitly cleared.
#[derive(Debug, Clone)]
pub struct HitokotoOptions {
    pub category: Option<String>,
    pub encode: Option<String>,
    pub charset: Option<String>,
    pub callback: Option<String>,
    pub select: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl Default for HitokotoOptions {
    fn default() -> Self {
        Self {
            category: None,
            encode: Some("json".to_string()),
            charset: None,
            callback: None,
            select: None,
            min_length: None,
            max_length: None,
        }
    }
}

impl Validate for HitokotoOptions {
    fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(WebError::InvalidConfigValueError {
                    field: "min_length".to_string(),
                    value: min.to_string(),
                    reason: format!("min_length exceeds max_length ({})", max),
                });
            }
        }
        Ok(())
    }
}

impl HitokotoOptions {
    /// Parameters the service expects, in its documented order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(c) = &self.category {
            pairs.push(("c", c.clone()));
        }
        if let Some(encode) = &self.encode {
            pairs.push(("encode", encode.clone()));
        }
        if let Some(charset) = &self.charset {
            pairs.push(("charset", charset.clone()));
        }
        if let Some(callback) = &self.callback {
            pairs.push(("callback", callback.clone()));
        }
        if let Some(select) = &self.select {
            pairs.push(("select", select.clone()));
        }
        if let Some(min) = self.min_length {
            pairs.push(("min_length", min.to_string()));
        }
        if let Some(max) = self.max_length {
            pairs.push(("max_length", max.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_size_parsing() {
        assert_eq!("640".parse::<PictureSize>().unwrap(), PictureSize::Width(640));
        assert_eq!(
            "200x300".parse::<PictureSize>().unwrap(),
            PictureSize::Dimensions(200, 300)
        );
        assert!("abc".parse::<PictureSize>().is_err());
        assert!("200x".parse::<PictureSize>().is_err());
        assert!("x300".parse::<PictureSize>().is_err());
    }

    #[test]
    fn test_picture_size_display() {
        assert_eq!(PictureSize::Width(640).to_string(), "640");
        assert_eq!(PictureSize::Dimensions(200, 300).to_string(), "200x300");
    }

    #[test]
    fn test_hitokoto_query_pairs_skip_unset() {
        let options = HitokotoOptions {
            category: Some("d".to_string()),
            encode: None,
            min_length: Some(10),
            ..Default::default()
        };

        let pairs = options.query_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("c", "d".to_string()));
        assert_eq!(pairs[1], ("min_length", "10".to_string()));
    }

    #[test]
    fn test_hitokoto_default_options_send_json_encode() {
        let pairs = HitokotoOptions::default().query_pairs();
        assert_eq!(pairs, vec![("encode", "json".to_string())]);
    }

    #[test]
    fn test_hitokoto_length_bounds() {
        let options = HitokotoOptions {
            min_length: Some(10),
            max_length: Some(30),
            ..Default::default()
        };
        assert!(options.validate().is_ok());

        let inverted = HitokotoOptions {
            min_length: Some(30),
            max_length: Some(10),
            ..Default::default()
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_lunar_response_field_names() {
        let json = serde_json::json!({
            "errno": 0,
            "data": {
                "lunar": {
                    "cyclicalYear": "甲辰",
                    "cyclicalMonth": "丙寅",
                    "cyclicalDay": "戊申",
                    "zodiac": "龙",
                    "cnMonth": "正月",
                    "cnDay": "初一"
                }
            }
        });

        let parsed: LunarResponse = serde_json::from_value(json).unwrap();
        let lunar = parsed.data.unwrap().lunar;
        assert_eq!(lunar.cyclical_year, "甲辰");
        assert_eq!(lunar.cn_day, "初一");
    }
}
