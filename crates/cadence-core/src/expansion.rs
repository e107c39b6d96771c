//! Theme-rotation expansion of plan sections into a 52-week calendar.
//!
//! The expansion is a pure batch operation: given the same sections and
//! year it always produces the same 52 items, and consumers treat the
//! result as a full replacement of any previously generated calendar for
//! that year.

use crate::calendar::{week_deadline, WEEKS_PER_QUARTER};
use crate::error::Result;
use crate::insights::extract_insights;
use crate::models::{
    ItemStatus, PlanSection, Priority, Quarter, SectionCategory, ThemeCycleEntry,
    WeeklyStrategyItem, THEME_CYCLE,
};

/// Maximum length, in characters, of the rotated insight embedded in a
/// week's narrative.
const MAX_POINT_CHARS: usize = 200;

/// Insights extracted from one qualifying plan section.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentInsight {
    /// Title of the source section
    pub section_title: String,

    /// Category derived from the section title
    pub category: SectionCategory,

    /// Extracted points; may be empty, in which case the section title
    /// stands in when a point is needed
    pub points: Vec<String>,
}

/// Outcome of an annual expansion.
///
/// "Nothing to expand" is a reportable outcome, not an error: the caller
/// decides whether to surface a message when no section qualifies.
#[derive(Debug, Clone, PartialEq)]
pub enum Expansion {
    /// Exactly 52 items, weeks 1..=52 in order
    Expanded(Vec<WeeklyStrategyItem>),

    /// No section had a non-empty narrative
    NothingToExpand,
}

/// Derives per-section content insights from the qualifying sections.
///
/// Sections without a narrative are dropped; the rest are sorted by their
/// `order` field so that rotation follows plan precedence.
pub fn content_insights(sections: &[PlanSection]) -> Vec<ContentInsight> {
    let mut qualifying: Vec<&PlanSection> =
        sections.iter().filter(|s| s.has_narrative()).collect();
    qualifying.sort_by_key(|s| s.order);

    qualifying
        .into_iter()
        .map(|section| ContentInsight {
            section_title: section.title.clone(),
            category: SectionCategory::from_title(&section.title),
            points: extract_insights(section.narrative.as_deref().unwrap_or_default()),
        })
        .collect()
}

/// Expands plan sections into a full 52-week, 4-quarter themed calendar.
///
/// Themes rotate through [`THEME_CYCLE`] by week offset within the
/// quarter; because the cycle length equals the quarter length, the theme
/// at a given offset is identical in all four quarters. Section insights
/// rotate independently by the same offset. Returns
/// [`Expansion::NothingToExpand`] when no section qualifies.
pub fn expand_annual_plan(sections: &[PlanSection], year: i16) -> Result<Expansion> {
    let content = content_insights(sections);
    if content.is_empty() {
        return Ok(Expansion::NothingToExpand);
    }

    let mut items = Vec::with_capacity(52);
    for quarter_index in 0..4u8 {
        for week_offset in 0..WEEKS_PER_QUARTER {
            let week_number = quarter_index * WEEKS_PER_QUARTER + week_offset + 1;
            let quarter = Quarter::from_week(week_number);
            let theme = &THEME_CYCLE[usize::from(week_offset) % THEME_CYCLE.len()];
            let insight = &content[usize::from(week_offset) % content.len()];

            let priority = if week_offset < 4 {
                Priority::High
            } else if week_offset < 9 {
                Priority::Medium
            } else {
                Priority::Low
            };

            items.push(WeeklyStrategyItem {
                week_number,
                quarter,
                title: format!("Week {}: {}", week_number, theme.focus_theme),
                narrative: compose_narrative(quarter, week_number, theme, insight, week_offset),
                focus_theme: theme.focus_theme.to_string(),
                tactics: theme.tactics.iter().map(|t| (*t).to_string()).collect(),
                deadline_date: week_deadline(year, week_number)?,
                priority,
                status: ItemStatus::Planned,
            });
        }
    }

    Ok(Expansion::Expanded(items))
}

/// Composes the narrative for one week: quarter ordinal, week number,
/// focus label, source section, bulleted tactics, and a rotated insight
/// capped at 200 characters.
fn compose_narrative(
    quarter: Quarter,
    week_number: u8,
    theme: &ThemeCycleEntry,
    insight: &ContentInsight,
    week_offset: u8,
) -> String {
    let point = if insight.points.is_empty() {
        insight.section_title.as_str()
    } else {
        &insight.points[usize::from(week_offset) % insight.points.len()]
    };
    let point: String = point.chars().take(MAX_POINT_CHARS).collect();

    let mut narrative = format!(
        "{}, week {}. Focus: {}. Source: {}.\nTactics:\n",
        quarter.ordinal_name(),
        week_number,
        theme.focus_theme,
        insight.section_title,
    );
    for tactic in theme.tactics {
        narrative.push_str("- ");
        narrative.push_str(tactic);
        narrative.push('\n');
    }
    narrative.push_str("Key point: ");
    narrative.push_str(&point);
    narrative
}
