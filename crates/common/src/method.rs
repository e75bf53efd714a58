//! HTTP methods and their badge styling

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Base URL of the badge service used for method badges
pub const BADGE_BASE_URL: &str = "https://badgers.space/badge/_";

/// The HTTP methods recognized as operations under a path item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Trace,
}

impl HttpMethod {
    /// Every recognized method
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Trace,
    ];

    /// Lowercase key as it appears in a path item
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
            HttpMethod::Trace => "trace",
        }
    }

    /// Uppercase name used in badges and curl samples
    pub fn upper(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Badge color
    pub fn badge_color(self) -> &'static str {
        match self {
            HttpMethod::Get => "blue",
            HttpMethod::Post => "green",
            HttpMethod::Put => "orange",
            HttpMethod::Delete => "red",
            HttpMethod::Patch => "purple",
            HttpMethod::Head | HttpMethod::Options | HttpMethod::Trace => "lightgrey",
        }
    }

    /// Badge glyph, a neutral circle for the non-primary methods
    pub fn badge_glyph(self) -> &'static str {
        match self {
            HttpMethod::Get => "🔵",
            HttpMethod::Post => "🟢",
            HttpMethod::Put => "🟠",
            HttpMethod::Delete => "🔴",
            HttpMethod::Patch => "🟣",
            HttpMethod::Head | HttpMethod::Options | HttpMethod::Trace => "⚪",
        }
    }

    /// Whether a curl sample for this method may carry a request body
    pub fn allows_body(self) -> bool {
        !matches!(self, HttpMethod::Get | HttpMethod::Head)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.upper())
    }
}

impl FromStr for HttpMethod {
    type Err = ();

    /// Path item keys are matched exactly, so `GET` is not an operation key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or(())
    }
}
