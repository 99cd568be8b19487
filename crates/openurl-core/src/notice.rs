//! User-facing notices with fixed, localized text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for notices shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Ko,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ko" => Ok(Locale::Ko),
            other => Err(format!("unknown locale {other:?} (expected \"en\" or \"ko\")")),
        }
    }
}

/// Alert-style notice: a title line and a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
}

impl Notice {
    /// Shown when submitted text is not a usable address.
    pub fn invalid_url(locale: Locale) -> Self {
        match locale {
            Locale::En => Notice {
                title: "Invalid URL",
                message: "Please enter a valid address.",
            },
            Locale::Ko => Notice {
                title: "유효하지 않은 URL",
                message: "올바른 주소를 입력해 주세요.",
            },
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
