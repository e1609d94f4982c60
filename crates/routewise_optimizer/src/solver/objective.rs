use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// What a ranked option set is ordered by. Lower scores are always better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Fastest,
    Cheapest,
    Greenest,
    Balanced,
}

impl Objective {
    pub const ALL: [Objective; 4] = [
        Objective::Fastest,
        Objective::Cheapest,
        Objective::Greenest,
        Objective::Balanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::Fastest => "fastest",
            Objective::Cheapest => "cheapest",
            Objective::Greenest => "greenest",
            Objective::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Objective {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Objective::ALL
            .into_iter()
            .find(|objective| objective.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownObjective(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_objective() {
        assert_eq!("Greenest".parse(), Ok(Objective::Greenest));
        assert_eq!(" balanced ".parse(), Ok(Objective::Balanced));
        assert!("shortest".parse::<Objective>().is_err());
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Objective::Cheapest).unwrap(),
            "\"cheapest\""
        );
    }
}
