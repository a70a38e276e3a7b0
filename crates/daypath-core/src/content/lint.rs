use super::{LessonSeed, ProgramContent, StepKind};
use std::fmt;

const MANAGER_MARKER: &str = "What you'd tell your manager:";
const VAGUE_PHRASES: &[&str] = &["analyze the data", "use insights", "optimize metrics"];

/// Problems found in one lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIssue {
    pub day: u32,
    pub issues: Vec<String>,
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}: {}", self.day, self.issues.join(" "))
    }
}

/// Quality rules every generated lesson must satisfy before it is seeded.
pub fn lint_program_content(content: &ProgramContent) -> Vec<ContentIssue> {
    lint_lessons(&content.lessons)
}

pub fn lint_lessons(lessons: &[LessonSeed]) -> Vec<ContentIssue> {
    lessons
        .iter()
        .filter_map(|lesson| {
            let issues = lint_lesson(lesson);
            (!issues.is_empty()).then_some(ContentIssue {
                day: lesson.day,
                issues,
            })
        })
        .collect()
}

fn lint_lesson(lesson: &LessonSeed) -> Vec<String> {
    let mut issues = Vec::new();

    let has_table = lesson.steps.iter().any(|s| {
        s.kind == StepKind::Visual && s.visual.as_ref().is_some_and(|v| v.is_table())
    });
    if !has_table {
        issues.push("Missing table visual step.".to_string());
    }
    if !lesson.real_world_line.contains(MANAGER_MARKER) {
        issues.push("Missing manager-style sentence.".to_string());
    }

    for step in &lesson.steps {
        if !matches!(step.kind, StepKind::Intuition | StepKind::Learn) {
            continue;
        }
        let text = format!(
            "{} {}",
            step.title.as_deref().unwrap_or(""),
            step.body.as_deref().unwrap_or("")
        )
        .to_lowercase();
        let vague = VAGUE_PHRASES.iter().any(|p| text.contains(p));
        let has_example = step.example.as_deref().is_some_and(|e| !e.trim().is_empty());
        if vague && !has_example {
            issues.push(format!(
                "Vague phrase without example in \"{}\".",
                step.title.as_deref().unwrap_or("step")
            ));
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{build_program_content, StepSeed};

    fn lesson(steps: Vec<StepSeed>, line: &str) -> LessonSeed {
        LessonSeed {
            day: 3,
            title: "Day 3".into(),
            micro_goal: "goal".into(),
            recap_bullets: vec![],
            real_world_line: line.into(),
            steps,
        }
    }

    #[test]
    fn generated_program_is_clean() {
        let content = build_program_content();
        assert!(lint_program_content(&content).is_empty());
    }

    #[test]
    fn flags_missing_table_and_manager_line() {
        let issues = lint_lessons(&[lesson(vec![], "Nothing to say.")]);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].to_string(),
            "Day 3: Missing table visual step. Missing manager-style sentence."
        );
    }

    #[test]
    fn vague_phrase_needs_an_example() {
        let steps = vec![
            StepSeed::text(StepKind::Learn, "Next", "Then analyze the data.".into()),
            StepSeed {
                example: Some("Example: revenue by region".into()),
                ..StepSeed::text(StepKind::Learn, "Later", "Use insights wisely.".into())
            },
        ];
        let issues = lint_lessons(&[lesson(steps, "What you'd tell your manager: ok")]);
        assert_eq!(
            issues[0].issues,
            vec![
                "Missing table visual step.".to_string(),
                "Vague phrase without example in \"Next\".".to_string(),
            ]
        );
    }
}
