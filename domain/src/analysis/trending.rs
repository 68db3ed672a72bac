use crate::catalog::knowledge::{USE_CASES, trends_for_year};
use crate::theme::Theme;
use serde::Serialize;

/// Knowledge-base snapshot for one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingIdeas {
    /// The year that was requested (even when its trends fell back)
    pub year: u16,
    pub trends: Vec<&'static str>,
    pub themes: Vec<Theme>,
    pub use_cases: Vec<&'static str>,
}

pub fn trending_ideas(year: u16) -> TrendingIdeas {
    TrendingIdeas {
        year,
        trends: trends_for_year(year).to_vec(),
        themes: Theme::ALL.to_vec(),
        use_cases: USE_CASES.to_vec(),
    }
}
