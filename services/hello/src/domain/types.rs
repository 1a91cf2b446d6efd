use std::str::FromStr;

use crate::error::HelloServiceError;

/// Body returned by `GET /`.
pub const HELLO_MESSAGE: &str = "hello world !!!";

/// Languages the greeting endpoint can answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Ko,
    En,
    Ja,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            Self::Ko => "안녕하세요",
            Self::En => "Hello",
            Self::Ja => "こんにちは",
        }
    }
}

impl FromStr for Lang {
    type Err = HelloServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Self::Ko),
            "en" => Ok(Self::En),
            "ja" => Ok(Self::Ja),
            _ => Err(HelloServiceError::UnsupportedLanguage(s.to_string())),
        }
    }
}
