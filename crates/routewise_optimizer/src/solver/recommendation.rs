use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    problem::priority::Priority,
    utils::approx::{BALANCED_TOLERANCE, DEFAULT_TOLERANCE, approximately_equal},
};

use super::{
    objective::Objective,
    ranking::{RankedOption, RankedOptions},
};

/// Smallest CO₂ gap, in kg, worth suggesting the greenest option for.
pub const MIN_CO2_SAVINGS_KG: f64 = 1.0;
/// Smallest cost gap worth suggesting the cheapest option for.
pub const MIN_COST_SAVINGS: f64 = 50.0;
/// Smallest time gap, in hours, worth suggesting the fastest option for.
pub const MIN_TIME_SAVINGS_H: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecommendedOption {
    Fastest,
    Cheapest,
    Greenest,
    Balanced,
    /// No route serves the request.
    None,
    /// No vehicle can take the order right now.
    Wait,
}

impl RecommendedOption {
    pub fn objective(&self) -> Option<Objective> {
        match self {
            RecommendedOption::Fastest => Some(Objective::Fastest),
            RecommendedOption::Cheapest => Some(Objective::Cheapest),
            RecommendedOption::Greenest => Some(Objective::Greenest),
            RecommendedOption::Balanced => Some(Objective::Balanced),
            RecommendedOption::None | RecommendedOption::Wait => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedOption::Fastest => "fastest",
            RecommendedOption::Cheapest => "cheapest",
            RecommendedOption::Greenest => "greenest",
            RecommendedOption::Balanced => "balanced",
            RecommendedOption::None => "none",
            RecommendedOption::Wait => "wait",
        }
    }
}

impl From<Objective> for RecommendedOption {
    fn from(objective: Objective) -> Self {
        match objective {
            Objective::Fastest => RecommendedOption::Fastest,
            Objective::Cheapest => RecommendedOption::Cheapest,
            Objective::Greenest => RecommendedOption::Greenest,
            Objective::Balanced => RecommendedOption::Balanced,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Recommendation {
    pub option: RecommendedOption,
    pub rationale: String,
}

impl Recommendation {
    fn new(option: RecommendedOption, rationale: String) -> Self {
        Recommendation { option, rationale }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Recommendations {
    pub primary: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative: Option<Recommendation>,
}

impl Recommendations {
    /// A primary recommendation with no alternative, used for failed requests.
    pub fn fallback(option: RecommendedOption, rationale: impl Into<String>) -> Self {
        Recommendations {
            primary: Recommendation::new(option, rationale.into()),
            alternative: None,
        }
    }
}

struct TopPicks<'a> {
    fastest: &'a RankedOption,
    cheapest: &'a RankedOption,
    greenest: &'a RankedOption,
    balanced: &'a RankedOption,
}

impl<'a> TopPicks<'a> {
    fn from_ranked(ranked: &'a RankedOptions) -> Option<Self> {
        Some(TopPicks {
            fastest: ranked.best(Objective::Fastest)?,
            cheapest: ranked.best(Objective::Cheapest)?,
            greenest: ranked.best(Objective::Greenest)?,
            balanced: ranked.best(Objective::Balanced)?,
        })
    }

    fn get(&self, objective: Objective) -> &'a RankedOption {
        match objective {
            Objective::Fastest => self.fastest,
            Objective::Cheapest => self.cheapest,
            Objective::Greenest => self.greenest,
            Objective::Balanced => self.balanced,
        }
    }
}

/// Picks a primary option for `priority` and at most one alternative.
///
/// `None` when nothing was ranked.
pub fn recommend(
    ranked: &RankedOptions,
    priority: Priority,
    currency: &str,
) -> Option<Recommendations> {
    let picks = TopPicks::from_ranked(ranked)?;

    let primary = match priority {
        Priority::Express => recommend_express(&picks, currency),
        Priority::Economy => recommend_economy(&picks, currency),
        Priority::Standard => recommend_standard(&picks, currency),
    };
    let alternative = recommend_alternative(&picks, primary.option, currency);

    Some(Recommendations {
        primary,
        alternative,
    })
}

fn recommend_express(picks: &TopPicks, currency: &str) -> Recommendation {
    let TopPicks {
        fastest,
        cheapest,
        greenest,
        ..
    } = *picks;

    if approximately_equal(fastest.time_score, cheapest.time_score, DEFAULT_TOLERANCE) {
        Recommendation::new(
            RecommendedOption::Cheapest,
            format!(
                "Cheapest option delivers in the same time ({:.1}h) as the fastest but saves {currency} {:.0}",
                cheapest.time_score,
                (fastest.cost_score - cheapest.cost_score).abs()
            ),
        )
    } else if approximately_equal(fastest.time_score, greenest.time_score, DEFAULT_TOLERANCE) {
        Recommendation::new(
            RecommendedOption::Greenest,
            format!(
                "Greenest option delivers in the same time ({:.1}h) as the fastest but saves {:.1} kg CO₂",
                greenest.time_score,
                (fastest.emissions_score - greenest.emissions_score).abs()
            ),
        )
    } else {
        Recommendation::new(
            RecommendedOption::Fastest,
            format!(
                "Fastest delivery ({:.1}h) for Express priority",
                fastest.time_score
            ),
        )
    }
}

fn recommend_economy(picks: &TopPicks, currency: &str) -> Recommendation {
    let TopPicks {
        fastest,
        cheapest,
        greenest,
        ..
    } = *picks;

    if approximately_equal(cheapest.cost_score, greenest.cost_score, DEFAULT_TOLERANCE) {
        Recommendation::new(
            RecommendedOption::Greenest,
            format!(
                "Greenest option costs the same ({currency} {:.0}) as the cheapest but saves {:.1} kg CO₂",
                greenest.cost_score,
                (cheapest.emissions_score - greenest.emissions_score).abs()
            ),
        )
    } else if approximately_equal(cheapest.cost_score, fastest.cost_score, DEFAULT_TOLERANCE) {
        Recommendation::new(
            RecommendedOption::Fastest,
            format!(
                "Fastest option costs the same ({currency} {:.0}) as the cheapest but saves {:.1} hours",
                fastest.cost_score,
                (cheapest.time_score - fastest.time_score).abs()
            ),
        )
    } else {
        Recommendation::new(
            RecommendedOption::Cheapest,
            format!(
                "Lowest cost ({currency} {:.0}) for Economy priority",
                cheapest.cost_score
            ),
        )
    }
}

fn recommend_standard(picks: &TopPicks, currency: &str) -> Recommendation {
    let TopPicks {
        cheapest,
        greenest,
        balanced,
        ..
    } = *picks;

    if approximately_equal(
        balanced.composite_score,
        cheapest.composite_score,
        BALANCED_TOLERANCE,
    ) {
        Recommendation::new(
            RecommendedOption::Cheapest,
            format!(
                "Cheapest option ({currency} {:.0}) provides the best overall balance for Standard priority",
                cheapest.cost_score
            ),
        )
    } else if approximately_equal(
        balanced.composite_score,
        greenest.composite_score,
        BALANCED_TOLERANCE,
    ) {
        Recommendation::new(
            RecommendedOption::Greenest,
            format!(
                "Greenest option ({:.1} kg CO₂) provides the best overall balance for Standard priority",
                greenest.emissions_score
            ),
        )
    } else {
        Recommendation::new(
            RecommendedOption::Balanced,
            format!(
                "Balanced option trades off time ({:.1}h), cost ({currency} {:.0}) and emissions ({:.1} kg CO₂)",
                balanced.time_score, balanced.cost_score, balanced.emissions_score
            ),
        )
    }
}

/// Only the first objective the primary pick is not is considered, a gap
/// below its threshold yields no alternative at all.
fn recommend_alternative(
    picks: &TopPicks,
    primary: RecommendedOption,
    currency: &str,
) -> Option<Recommendation> {
    let chosen = picks.get(primary.objective()?);

    if primary != RecommendedOption::Greenest {
        let co2_savings = (chosen.emissions_score - picks.greenest.emissions_score).abs();
        (co2_savings > MIN_CO2_SAVINGS_KG).then(|| {
            Recommendation::new(
                RecommendedOption::Greenest,
                format!(
                    "Consider the greenest option to save {co2_savings:.1} kg CO₂ for sustainability goals"
                ),
            )
        })
    } else if primary != RecommendedOption::Cheapest {
        let cost_savings = (chosen.cost_score - picks.cheapest.cost_score).abs();
        (cost_savings > MIN_COST_SAVINGS).then(|| {
            Recommendation::new(
                RecommendedOption::Cheapest,
                format!("Consider the cheapest option to save {currency} {cost_savings:.0}"),
            )
        })
    } else {
        let time_savings = (chosen.time_score - picks.fastest.time_score).abs();
        (time_savings > MIN_TIME_SAVINGS_H).then(|| {
            Recommendation::new(
                RecommendedOption::Fastest,
                format!("Consider the fastest option to save {time_savings:.1} hours"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_ranked_option;

    use super::*;

    fn ranked(
        fastest: RankedOption,
        cheapest: RankedOption,
        greenest: RankedOption,
        balanced: RankedOption,
    ) -> RankedOptions {
        RankedOptions {
            fastest: vec![fastest],
            cheapest: vec![cheapest],
            greenest: vec![greenest],
            balanced: vec![balanced],
        }
    }

    #[test]
    fn test_express_prefers_cheapest_on_equal_time() {
        let fastest = create_ranked_option(20.0, 10000.0, 300.0, 0.6);
        let cheapest = create_ranked_option(20.0, 9600.0, 300.0, 0.4);
        let options = ranked(fastest, cheapest.clone(), cheapest.clone(), cheapest);

        let recommendations = recommend(&options, Priority::Express, "INR").unwrap();

        assert_eq!(recommendations.primary.option, RecommendedOption::Cheapest);
        assert!(recommendations.primary.rationale.contains("INR 400"));
        assert_eq!(recommendations.alternative, None);
    }

    #[test]
    fn test_express_prefers_greenest_on_equal_time() {
        let fastest = create_ranked_option(20.0, 10000.0, 300.0, 0.6);
        let cheapest = create_ranked_option(26.0, 8000.0, 280.0, 0.4);
        let greenest = create_ranked_option(20.5, 11000.0, 200.0, 0.5);
        let options = ranked(fastest, cheapest.clone(), greenest, cheapest);

        let recommendations = recommend(&options, Priority::Express, "INR").unwrap();

        assert_eq!(recommendations.primary.option, RecommendedOption::Greenest);
        assert!(recommendations.primary.rationale.contains("100.0 kg"));
        // Greenest primary moves on to the cost gap.
        let alternative = recommendations.alternative.unwrap();
        assert_eq!(alternative.option, RecommendedOption::Cheapest);
        assert!(alternative.rationale.contains("INR 3000"));
    }

    #[test]
    fn test_express_falls_back_to_fastest() {
        let fastest = create_ranked_option(10.0, 10000.0, 300.0, 0.6);
        let cheapest = create_ranked_option(14.0, 8000.0, 280.0, 0.4);
        let greenest = create_ranked_option(16.0, 9000.0, 200.0, 0.5);
        let options = ranked(fastest, cheapest.clone(), greenest, cheapest);

        let recommendations = recommend(&options, Priority::Express, "INR").unwrap();

        assert_eq!(recommendations.primary.option, RecommendedOption::Fastest);
        assert_eq!(
            recommendations.primary.rationale,
            "Fastest delivery (10.0h) for Express priority"
        );
        let alternative = recommendations.alternative.unwrap();
        assert_eq!(alternative.option, RecommendedOption::Greenest);
        assert!(alternative.rationale.contains("100.0 kg"));
    }

    #[test]
    fn test_economy_overrides() {
        let fastest = create_ranked_option(10.0, 13000.0, 300.0, 0.6);
        let cheapest = create_ranked_option(14.0, 10000.0, 280.0, 0.4);
        let greenest = create_ranked_option(16.0, 10400.0, 200.0, 0.5);
        let options = ranked(fastest, cheapest.clone(), greenest, cheapest.clone());
        let recommendations = recommend(&options, Priority::Economy, "INR").unwrap();
        assert_eq!(recommendations.primary.option, RecommendedOption::Greenest);

        let fastest = create_ranked_option(10.0, 10300.0, 300.0, 0.6);
        let greenest = create_ranked_option(16.0, 12000.0, 200.0, 0.5);
        let options = ranked(fastest, cheapest.clone(), greenest, cheapest.clone());
        let recommendations = recommend(&options, Priority::Economy, "INR").unwrap();
        assert_eq!(recommendations.primary.option, RecommendedOption::Fastest);

        let fastest = create_ranked_option(10.0, 13000.0, 300.0, 0.6);
        let greenest = create_ranked_option(16.0, 12000.0, 200.0, 0.5);
        let options = ranked(fastest, cheapest.clone(), greenest, cheapest);
        let recommendations = recommend(&options, Priority::Economy, "INR").unwrap();
        assert_eq!(recommendations.primary.option, RecommendedOption::Cheapest);
        assert_eq!(
            recommendations.primary.rationale,
            "Lowest cost (INR 10000) for Economy priority"
        );
    }

    #[test]
    fn test_standard_uses_composite_tolerance() {
        let fastest = create_ranked_option(10.0, 13000.0, 300.0, 0.7);
        let greenest = create_ranked_option(16.0, 12000.0, 200.0, 0.5);
        let balanced = create_ranked_option(12.0, 11000.0, 250.0, 0.40);

        let cheapest = create_ranked_option(14.0, 10000.0, 280.0, 0.41);
        let options = ranked(fastest.clone(), cheapest, greenest.clone(), balanced.clone());
        let recommendations = recommend(&options, Priority::Standard, "INR").unwrap();
        assert_eq!(recommendations.primary.option, RecommendedOption::Cheapest);

        let cheapest = create_ranked_option(14.0, 10000.0, 280.0, 0.6);
        let options = ranked(fastest, cheapest, greenest, balanced);
        let recommendations = recommend(&options, Priority::Standard, "INR").unwrap();
        assert_eq!(recommendations.primary.option, RecommendedOption::Balanced);
        assert_eq!(
            recommendations.primary.rationale,
            "Balanced option trades off time (12.0h), cost (INR 11000) and emissions (250.0 kg CO₂)"
        );
        assert_eq!(
            recommendations.alternative.unwrap().option,
            RecommendedOption::Greenest
        );
    }

    #[test]
    fn test_standard_prefers_greenest_when_balanced_matches_it() {
        let fastest = create_ranked_option(10.0, 13000.0, 300.0, 0.7);
        let cheapest = create_ranked_option(14.0, 10000.0, 280.0, 0.6);
        let greenest = create_ranked_option(16.0, 12000.0, 200.0, 0.405);
        let balanced = create_ranked_option(12.0, 11000.0, 250.0, 0.40);
        let options = ranked(fastest, cheapest, greenest, balanced);

        let recommendations = recommend(&options, Priority::Standard, "INR").unwrap();

        assert_eq!(recommendations.primary.option, RecommendedOption::Greenest);
    }

    #[test]
    fn test_small_co2_gap_suppresses_any_alternative() {
        // The fastest option is 15 hours quicker, but a cheapest primary only
        // ever looks at the CO₂ gap.
        let fastest = create_ranked_option(5.0, 20000.0, 310.0, 0.7);
        let cheapest = create_ranked_option(20.0, 10000.0, 300.0, 0.4);
        let greenest = create_ranked_option(21.0, 12000.0, 299.5, 0.5);
        let options = ranked(fastest, cheapest.clone(), greenest, cheapest);

        let recommendations = recommend(&options, Priority::Economy, "INR").unwrap();

        assert_eq!(recommendations.primary.option, RecommendedOption::Cheapest);
        assert_eq!(recommendations.alternative, None);
    }

    #[test]
    fn test_nothing_ranked() {
        assert!(recommend(&RankedOptions::default(), Priority::Standard, "INR").is_none());
    }

    #[test]
    fn test_failure_recommendations_have_no_alternative() {
        let recommendations = Recommendations::fallback(RecommendedOption::Wait, "later");

        assert_eq!(recommendations.primary.option.objective(), None);
        assert!(recommendations.alternative.is_none());
    }
}
