//! Idea analysis and the trending-ideas knowledge base
//!
//! Both are lightweight, offline helpers exposed alongside generation.

mod idea_analysis;
mod trending;

pub use idea_analysis::{
    COMPLEX_WORD_THRESHOLD, Complexity, FALLBACK_THEME_LABEL, FALLBACK_USE_CASE_LABEL,
    IdeaAnalysis, analyze_idea,
};
pub use trending::{TrendingIdeas, trending_ideas};
