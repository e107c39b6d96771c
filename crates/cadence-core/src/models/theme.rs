//! The fixed theme cycle consumed round-robin by the annual expansion.

/// One entry of the theme cycle: a focus label plus its tactic labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeCycleEntry {
    /// Short focus label for the week, e.g. "Content marketing"
    pub focus_theme: &'static str,

    /// Ordered list of short tactic labels
    pub tactics: &'static [&'static str],
}

/// The fixed theme rotation.
///
/// The cycle length equals the number of weeks per quarter, so the theme
/// assigned at a given week offset is the same in every quarter. That is
/// the reference behavior and is pinned by tests; do not vary it per
/// quarter.
pub const THEME_CYCLE: &[ThemeCycleEntry] = &[
    ThemeCycleEntry {
        focus_theme: "Content marketing",
        tactics: &["Publish a long-form article", "Repurpose into short posts", "Update cornerstone pages"],
    },
    ThemeCycleEntry {
        focus_theme: "Social media",
        tactics: &["Schedule a posting calendar", "Engage in niche communities", "Run a poll or AMA"],
    },
    ThemeCycleEntry {
        focus_theme: "Email campaigns",
        tactics: &["Segment the subscriber list", "Send a value-first newsletter", "A/B test subject lines"],
    },
    ThemeCycleEntry {
        focus_theme: "SEO",
        tactics: &["Refresh keyword research", "Fix technical crawl issues", "Build two quality backlinks"],
    },
    ThemeCycleEntry {
        focus_theme: "Partnerships",
        tactics: &["Shortlist complementary brands", "Pitch a co-marketing offer", "Draft a joint webinar"],
    },
    ThemeCycleEntry {
        focus_theme: "Paid advertising",
        tactics: &["Review ad spend efficiency", "Launch one experiment campaign", "Refine audience targeting"],
    },
    ThemeCycleEntry {
        focus_theme: "Community building",
        tactics: &["Welcome new members personally", "Host a live session", "Collect member stories"],
    },
    ThemeCycleEntry {
        focus_theme: "Analytics & optimization",
        tactics: &["Audit the conversion funnel", "Set up missing tracking", "Kill underperforming channels"],
    },
    ThemeCycleEntry {
        focus_theme: "Brand awareness",
        tactics: &["Pitch a podcast appearance", "Refresh visual assets", "Publish a customer story"],
    },
    ThemeCycleEntry {
        focus_theme: "Customer retention",
        tactics: &["Check in with key accounts", "Ship a loyalty perk", "Survey churned customers"],
    },
    ThemeCycleEntry {
        focus_theme: "Product launches",
        tactics: &["Tease the upcoming release", "Brief early adopters", "Prepare launch-day assets"],
    },
    ThemeCycleEntry {
        focus_theme: "PR & outreach",
        tactics: &["Update the press kit", "Pitch two journalists", "Respond to expert requests"],
    },
    ThemeCycleEntry {
        focus_theme: "Referral programs",
        tactics: &["Simplify the referral flow", "Remind happy customers", "Reward top referrers"],
    },
];
