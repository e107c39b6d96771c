//! Keyword-based classification of plan section titles.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category assigned to a plan section based on its title.
///
/// Classification is a total function: titles that match no keyword fall
/// through to [`SectionCategory::Other`] rather than being rejected. The
/// keyword table accepts both English and Russian titles since plan content
/// arrives in either language.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionCategory {
    /// Executive summary / resume sections
    Summary,

    /// Target audience and customer analysis
    Audience,

    /// Product or service description
    Product,

    /// Marketing and promotion channels
    Marketing,

    /// Competitor analysis
    Competitors,

    /// Budgets and financial planning
    Finance,

    /// Goals and strategy
    Goals,

    /// Anything that matched no keyword
    #[default]
    Other,
}

/// Keyword table, matched case-insensitively as substrings of the title.
const KEYWORD_TABLE: &[(&str, SectionCategory)] = &[
    ("резюме", SectionCategory::Summary),
    ("summary", SectionCategory::Summary),
    ("аудитор", SectionCategory::Audience),
    ("клиент", SectionCategory::Audience),
    ("audience", SectionCategory::Audience),
    ("customer", SectionCategory::Audience),
    ("продукт", SectionCategory::Product),
    ("услуг", SectionCategory::Product),
    ("product", SectionCategory::Product),
    ("service", SectionCategory::Product),
    ("маркетинг", SectionCategory::Marketing),
    ("продвижени", SectionCategory::Marketing),
    ("marketing", SectionCategory::Marketing),
    ("promotion", SectionCategory::Marketing),
    ("конкурент", SectionCategory::Competitors),
    ("competitor", SectionCategory::Competitors),
    ("финанс", SectionCategory::Finance),
    ("бюджет", SectionCategory::Finance),
    ("finance", SectionCategory::Finance),
    ("budget", SectionCategory::Finance),
    ("цел", SectionCategory::Goals),
    ("стратеги", SectionCategory::Goals),
    ("goal", SectionCategory::Goals),
    ("strateg", SectionCategory::Goals),
];

impl SectionCategory {
    /// Classifies a section title. First matching keyword wins.
    pub fn from_title(title: &str) -> Self {
        let lowered = title.to_lowercase();
        KEYWORD_TABLE
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, category)| *category)
            .unwrap_or(SectionCategory::Other)
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionCategory::Summary => "summary",
            SectionCategory::Audience => "audience",
            SectionCategory::Product => "product",
            SectionCategory::Marketing => "marketing",
            SectionCategory::Competitors => "competitors",
            SectionCategory::Finance => "finance",
            SectionCategory::Goals => "goals",
            SectionCategory::Other => "other",
        }
    }
}

impl FromStr for SectionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(SectionCategory::Summary),
            "audience" => Ok(SectionCategory::Audience),
            "product" => Ok(SectionCategory::Product),
            "marketing" => Ok(SectionCategory::Marketing),
            "competitors" => Ok(SectionCategory::Competitors),
            "finance" => Ok(SectionCategory::Finance),
            "goals" => Ok(SectionCategory::Goals),
            "other" => Ok(SectionCategory::Other),
            _ => Err(format!("Invalid section category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russian_titles() {
        assert_eq!(
            SectionCategory::from_title("Резюме"),
            SectionCategory::Summary
        );
        assert_eq!(
            SectionCategory::from_title("Целевая аудитория"),
            SectionCategory::Audience
        );
        assert_eq!(
            SectionCategory::from_title("Анализ конкурентов"),
            SectionCategory::Competitors
        );
    }

    #[test]
    fn test_english_titles() {
        assert_eq!(
            SectionCategory::from_title("Marketing channels"),
            SectionCategory::Marketing
        );
        assert_eq!(
            SectionCategory::from_title("Budget overview"),
            SectionCategory::Finance
        );
        assert_eq!(
            SectionCategory::from_title("Goals for the year"),
            SectionCategory::Goals
        );
    }

    #[test]
    fn test_unmatched_title_falls_through_to_other() {
        assert_eq!(
            SectionCategory::from_title("Appendix B"),
            SectionCategory::Other
        );
        assert_eq!(SectionCategory::from_title(""), SectionCategory::Other);
    }

    #[test]
    fn test_first_match_wins() {
        // Contains both "summary" and "goal"; table order prefers summary.
        assert_eq!(
            SectionCategory::from_title("Summary of goals"),
            SectionCategory::Summary
        );
    }
}
