//! Curriculum content: types for every seeded row plus the generator that
//! expands the twelve-week plan into 84 days of lessons, skill checks,
//! patterns and checkpoint tests.

mod builders;
pub mod lint;
pub mod template;
mod weeks;

use crate::visual::Visual;
use serde::{Deserialize, Serialize};

pub use builders::build_program_content;
pub use lint::{lint_lessons, lint_program_content, ContentIssue};

pub const TOTAL_DAYS: u32 = 84;
pub const DAYS_PER_WEEK: u32 = 7;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Intuition,
    Learn,
    Visual,
    Mcq,
    Fix,
}

impl StepKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Intuition => "intuition",
            StepKind::Learn => "learn",
            StepKind::Visual => "visual",
            StepKind::Mcq => "mcq",
            StepKind::Fix => "fix",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "intuition" => Some(StepKind::Intuition),
            "learn" => Some(StepKind::Learn),
            "visual" => Some(StepKind::Visual),
            "mcq" => Some(StepKind::Mcq),
            "fix" => Some(StepKind::Fix),
            _ => None,
        }
    }

    /// Question steps need an answer; the rest are completed by viewing.
    pub fn is_question(self) -> bool {
        matches!(self, StepKind::Mcq | StepKind::Fix)
    }

    pub fn question_kind(self) -> Option<QuestionKind> {
        match self {
            StepKind::Mcq => Some(QuestionKind::Mcq),
            StepKind::Fix => Some(QuestionKind::Fix),
            _ => None,
        }
    }
}

impl From<QuestionKind> for StepKind {
    fn from(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::Mcq => StepKind::Mcq,
            QuestionKind::Fix => StepKind::Fix,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Mcq,
    Fix,
}

impl QuestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Mcq => "mcq",
            QuestionKind::Fix => "fix",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mcq" => Some(QuestionKind::Mcq),
            "fix" => Some(QuestionKind::Fix),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::Mcq => "Multiple choice",
            QuestionKind::Fix => "Fix the mistake",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Stored answer key, `{"correctIndex": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub correct_index: usize,
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PatternSection {
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        body: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        bullets: Vec<String>,
    },
    Visual {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        visual: Visual,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternContent {
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub sections: Vec<PatternSection>,
    #[serde(default)]
    pub takeaway: Option<String>,
}

// ---------------------------------------------------------------------------
// Seed rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct StepSeed {
    pub kind: StepKind,
    pub title: Option<String>,
    pub body: Option<String>,
    pub example: Option<String>,
    pub prompt: Option<String>,
    pub choices: Vec<String>,
    pub correct_index: Option<usize>,
    pub explanation: Option<String>,
    pub visual: Option<Visual>,
}

impl StepSeed {
    pub(crate) fn text(kind: StepKind, title: &str, body: String) -> Self {
        Self {
            kind,
            title: Some(title.to_string()),
            body: Some(body),
            example: None,
            prompt: None,
            choices: Vec::new(),
            correct_index: None,
            explanation: None,
            visual: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LessonSeed {
    pub day: u32,
    pub title: String,
    pub micro_goal: String,
    pub recap_bullets: Vec<String>,
    pub real_world_line: String,
    pub steps: Vec<StepSeed>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCheckSeed {
    pub id: String,
    pub day_number: u32,
    pub title: String,
    pub prompt: String,
    pub kind: QuestionKind,
    pub choices: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    pub xp_reward: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternSeed {
    pub id: String,
    pub day_number: u32,
    pub title: String,
    pub description: String,
    pub content: PatternContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointQuestionSeed {
    pub id: String,
    pub test_id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointTestSeed {
    pub id: String,
    pub day_number: u32,
    pub title: String,
    pub pass_percent: u32,
    pub xp_reward: i64,
    pub questions: Vec<CheckpointQuestionSeed>,
}

/// Everything the seeder writes, generated in memory.
#[derive(Debug, Clone)]
pub struct ProgramContent {
    pub lessons: Vec<LessonSeed>,
    pub skill_checks: Vec<SkillCheckSeed>,
    pub patterns: Vec<PatternSeed>,
    pub checkpoints: Vec<CheckpointTestSeed>,
}

/// Week (1-based) a day belongs to.
pub fn week_of(day: u32) -> u32 {
    (day.saturating_sub(1)) / DAYS_PER_WEEK + 1
}

/// First day of the week containing `day`.
pub fn week_start(day: u32) -> u32 {
    (week_of(day) - 1) * DAYS_PER_WEEK + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_math() {
        assert_eq!(week_of(1), 1);
        assert_eq!(week_of(7), 1);
        assert_eq!(week_of(8), 2);
        assert_eq!(week_of(84), 12);
        assert_eq!(week_start(10), 8);
        assert_eq!(week_start(84), 78);
    }

    #[test]
    fn answer_key_is_camel_case() {
        let json = serde_json::to_string(&Answer { correct_index: 2 }).unwrap();
        assert_eq!(json, r#"{"correctIndex":2}"#);
    }

    #[test]
    fn step_kind_round_trips_through_text() {
        for kind in [
            StepKind::Intuition,
            StepKind::Learn,
            StepKind::Visual,
            StepKind::Mcq,
            StepKind::Fix,
        ] {
            assert_eq!(StepKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(StepKind::parse("quiz"), None);
        assert!(StepKind::Fix.is_question());
        assert!(!StepKind::Visual.is_question());
    }
}
