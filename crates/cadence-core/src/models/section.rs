//! Plan section model: the narrative input to the annual expansion.

use serde::{Deserialize, Serialize};

/// One narrative part of a business/marketing plan.
///
/// Sections are produced by the surrounding plan-editing workflow and are
/// read-only input here. A section with a missing or empty `narrative` is
/// excluded from expansion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSection {
    /// Identifier assigned by the plan content source
    pub id: u64,

    /// Human label; also drives keyword-based category classification
    pub title: String,

    /// Precedence of the section within the plan
    pub order: i32,

    /// Free-text narrative content (may be absent)
    pub narrative: Option<String>,
}

impl PlanSection {
    /// Whether this section qualifies for expansion.
    pub fn has_narrative(&self) -> bool {
        self.narrative
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_narrative() {
        let mut section = PlanSection {
            id: 1,
            title: "Резюме".to_string(),
            order: 1,
            narrative: Some("- Target SMB".to_string()),
        };
        assert!(section.has_narrative());

        section.narrative = Some("   \n".to_string());
        assert!(!section.has_narrative());

        section.narrative = None;
        assert!(!section.has_narrative());
    }
}
