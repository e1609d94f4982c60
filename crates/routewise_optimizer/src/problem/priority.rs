use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum Priority {
    Express,
    #[default]
    Standard,
    Economy,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Express => "Express",
            Priority::Standard => "Standard",
            Priority::Economy => "Economy",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "express" => Ok(Priority::Express),
            "standard" => Ok(Priority::Standard),
            "economy" => Ok(Priority::Economy),
            _ => Err(ParseError::UnknownPriority(s.to_owned())),
        }
    }
}
