//! Skill category filter.

use crate::content::Skill;

/// Key that selects every skill.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub key: &'static str,
    pub label: &'static str,
}

/// Filter buttons in display order.
pub const SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        key: ALL_CATEGORIES,
        label: "All Skills",
    },
    SkillCategory {
        key: "FRONTEND",
        label: "Frontend",
    },
    SkillCategory {
        key: "BACKEND",
        label: "Backend",
    },
    SkillCategory {
        key: "DATABASE",
        label: "Data & ORM",
    },
    SkillCategory {
        key: "TOOLS",
        label: "Tools",
    },
];

/// Display label for a category key, if it is a known one.
pub fn category_label(key: &str) -> Option<&'static str> {
    SKILL_CATEGORIES
        .iter()
        .find(|category| category.key == key)
        .map(|category| category.label)
}

/// Skills whose category equals `key`; `all` keeps everything.
///
/// Order is preserved. Unknown keys match nothing unless a skill carries
/// exactly that category.
pub fn filter_skills<'a>(skills: &'a [Skill], key: &str) -> Vec<&'a Skill> {
    if key == ALL_CATEGORIES {
        return skills.iter().collect();
    }
    skills.iter().filter(|skill| skill.category == key).collect()
}

/// Selected category, starting at `all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: String,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            selected: ALL_CATEGORIES.to_string(),
        }
    }
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn select(&mut self, key: impl Into<String>) {
        self.selected = key.into();
    }

    pub fn apply<'a>(&self, skills: &'a [Skill]) -> Vec<&'a Skill> {
        filter_skills(skills, &self.selected)
    }
}
