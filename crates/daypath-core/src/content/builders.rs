use super::template::Scenario;
use super::weeks::{QuestionTemplate, WeekPlan, WEEKS};
use super::{
    CheckpointQuestionSeed, CheckpointTestSeed, LessonSeed, PatternContent, PatternSection,
    PatternSeed, ProgramContent, QuestionKind, SkillCheckSeed, StepKind, StepSeed,
};
use crate::visual::{Highlight, Visual};
use regex::Regex;
use std::sync::OnceLock;

const SKILL_CHECK_XP: i64 = 5;
const CHECKPOINT_PASS_PERCENT: u32 = 70;
const CHECKPOINT_XP: i64 = 15;
const MAX_CHECKPOINT_QUESTIONS: usize = 8;

/// Expand the twelve-week plan into every seeded row.
pub fn build_program_content() -> ProgramContent {
    let mut content = ProgramContent {
        lessons: Vec::new(),
        skill_checks: Vec::new(),
        patterns: Vec::new(),
        checkpoints: Vec::new(),
    };

    let mut day = 1;
    for week in WEEKS.iter() {
        for i in 0..week.titles.len() {
            let ctx = DayContext {
                day,
                index: i,
                week,
                scenario: &week.scenarios[i % week.scenarios.len()],
            };
            content.lessons.push(ctx.lesson());
            content.skill_checks.extend(ctx.skill_checks());
            content.patterns.extend(ctx.patterns());
            content.checkpoints.push(ctx.checkpoint());
            day += 1;
        }
    }
    content
}

struct DayContext<'a> {
    day: u32,
    index: usize,
    week: &'a WeekPlan,
    scenario: &'a Scenario,
}

impl DayContext<'_> {
    fn fill(&self, template: &str) -> String {
        self.scenario.fill(template)
    }

    fn title(&self) -> &'static str {
        self.week.titles[self.index]
    }

    fn manager_line(&self) -> String {
        self.fill(self.week.manager_line)
    }

    // -----------------------------------------------------------------------
    // Lessons
    // -----------------------------------------------------------------------

    fn lesson(&self) -> LessonSeed {
        let micro_goal = match &self.week.plain_micro_goals {
            Some(plain) => plain[self.index],
            None => self.week.micro_goals[self.index],
        };

        let mut steps = self.opening_steps();
        steps.push(StepSeed {
            body: None,
            visual: Some(self.table_visual()),
            ..StepSeed::text(StepKind::Visual, "Example snapshot", String::new())
        });
        for question in &self.week.questions {
            steps.push(self.question_step(question));
        }
        steps.push(self.manager_question());

        let recap_bullets: Vec<String> = self.week.recap.iter().map(|b| b.to_string()).collect();
        let real_world_line = self.manager_line();
        let mut body: Vec<String> = recap_bullets.iter().map(|b| format!("- {b}")).collect();
        body.push(real_world_line.clone());
        steps.push(StepSeed::text(StepKind::Learn, "Recap", body.join("\n")));

        LessonSeed {
            day: self.day,
            title: format!("Day {}: {}", self.day, self.title()),
            micro_goal: micro_goal.to_string(),
            recap_bullets,
            real_world_line,
            steps,
        }
    }

    /// Intuition plus two learn steps.
    fn opening_steps(&self) -> Vec<StepSeed> {
        if let Some(scaffolds) = &self.week.scaffolds {
            let scaffold = &scaffolds[self.index];
            let mut steps = vec![StepSeed::text(
                StepKind::Intuition,
                "Picture this",
                self.fill(scaffold.intuition),
            )];
            for (title, body) in scaffold.learn {
                steps.push(StepSeed::text(StepKind::Learn, title, self.fill(body)));
            }
            return steps;
        }

        let prompt = self.scenario_prompt();
        vec![
            StepSeed::text(
                StepKind::Intuition,
                "Picture this",
                self.week.intuition.to_string(),
            ),
            StepSeed {
                example: Some(format!("Example: {prompt}")),
                ..StepSeed::text(
                    StepKind::Learn,
                    "What you will do",
                    self.week.micro_goals[self.index].to_string(),
                )
            },
            StepSeed::text(
                StepKind::Learn,
                "Why it matters",
                format!("This skill helps you answer questions like: {prompt}"),
            ),
        ]
    }

    fn scenario_prompt(&self) -> String {
        let s = self.scenario;
        match s.get("metric") {
            Some(metric) => {
                if let Some(d) = s.get("dimension") {
                    format!("Which {d} drives {metric}?")
                } else if let Some(seg) = s.get("segment") {
                    format!("How does {seg} affect {metric}?")
                } else if let Some(ch) = s.get("channel") {
                    format!("Which {ch} performs best for {metric}?")
                } else if let Some(t) = s.get("table") {
                    format!("What is {metric} in {t}?")
                } else {
                    GENERIC_PROMPT.to_string()
                }
            }
            None => GENERIC_PROMPT.to_string(),
        }
    }

    fn table_visual(&self) -> Visual {
        let left = self
            .scenario
            .first_of(&["dimension", "segment", "channel", "plan", "category", "feature"])
            .unwrap_or("Group");
        let right = self.scenario.get("metric").unwrap_or("Result");
        let base = 40 + self.day * 2;
        Visual::Table {
            headers: vec![left.to_string(), right.to_string()],
            rows: [("A", 12), ("B", 4), ("C", 18)]
                .iter()
                .map(|(tag, bump)| vec![format!("{left} {tag}"), (base + bump).to_string()])
                .collect(),
            highlights: vec![Highlight {
                r: 2,
                c: 1,
                label: Some("highest".to_string()),
            }],
            note: Some("Example snapshot".to_string()),
        }
    }

    fn question_step(&self, q: &QuestionTemplate) -> StepSeed {
        StepSeed {
            kind: q.kind.into(),
            title: None,
            body: None,
            example: None,
            prompt: Some(self.fill(q.prompt)),
            choices: q.choices.iter().map(|c| self.fill(c)).collect(),
            correct_index: Some(q.correct),
            explanation: Some(explanation_from_feedback(q.feedback)),
            visual: None,
        }
    }

    fn manager_question(&self) -> StepSeed {
        let q = QuestionTemplate {
            kind: QuestionKind::Mcq,
            prompt: "",
            choices: [
                "I found a clear change in {metric|the key metric} and recommend a specific next step.",
                "The data is interesting, but I do not know what to do next.",
                "Everything looks fine, so we should stop tracking this.",
                "The numbers moved, but I did not check what action to take.",
            ],
            correct: 0,
            feedback: "Correct. Lead with the insight and the action.",
        };
        StepSeed {
            prompt: Some(format!(
                "What would you tell your manager? ({})",
                self.week.focus
            )),
            ..self.question_step(&q)
        }
    }

    // -----------------------------------------------------------------------
    // Skill checks
    // -----------------------------------------------------------------------

    fn skill_checks(&self) -> Vec<SkillCheckSeed> {
        let mut checks: Vec<SkillCheckSeed> = self
            .week
            .skill_checks
            .iter()
            .enumerate()
            .map(|(i, t)| SkillCheckSeed {
                id: format!("day-{}-skill-{}", self.day, i + 1),
                day_number: self.day,
                title: t.title.to_string(),
                prompt: self.fill(t.prompt),
                kind: t.kind,
                choices: t.choices.iter().map(|c| self.fill(c)).collect(),
                correct_index: 0,
                explanation: t.explanation.to_string(),
                xp_reward: SKILL_CHECK_XP,
            })
            .collect();

        checks.push(SkillCheckSeed {
            id: format!("day-{}-skill-{}", self.day, checks.len() + 1),
            day_number: self.day,
            title: "Manager-ready line".to_string(),
            prompt: self.fill("Which update best helps your manager act on {metric|the key result}?"),
            kind: QuestionKind::Mcq,
            choices: vec![
                "State the change, the driver, and one next step.".to_string(),
                "Share the full raw table.".to_string(),
                "List only tools used.".to_string(),
                "Hold the update until next month.".to_string(),
            ],
            correct_index: 0,
            explanation: "Short, action-ready updates work best.".to_string(),
            xp_reward: SKILL_CHECK_XP,
        });
        checks
    }

    // -----------------------------------------------------------------------
    // Patterns
    // -----------------------------------------------------------------------

    fn patterns(&self) -> Vec<PatternSeed> {
        let takeaway = self.manager_line();
        let good_bad = Visual::Table {
            headers: strings(&["Version", "What it says"]),
            rows: vec![
                strings(&["Bad", "Overloaded and unclear."]),
                strings(&["Good", "One message with a clear next step."]),
            ],
            highlights: Vec::new(),
            note: Some("Quick comparison".to_string()),
        };
        let template = Visual::Table {
            headers: strings(&["Line", "Example"]),
            rows: vec![
                vec!["Context".to_string(), self.fill("{metric|Key metric} this week")],
                vec!["Impact".to_string(), self.fill("{segment|Main segment} moved the most")],
                strings(&["Next step", "Review the top driver and adjust"]),
            ],
            highlights: Vec::new(),
            note: None,
        };

        vec![
            PatternSeed {
                id: format!("day-{}-pattern-1", self.day),
                day_number: self.day,
                title: format!("Good vs bad: {}", self.title()),
                description: "Quick example of clean storytelling.".to_string(),
                content: PatternContent {
                    intro: Some("Use this as a template when presenting the day.".to_string()),
                    sections: vec![
                        PatternSection::Visual {
                            title: Some("Example".to_string()),
                            visual: good_bad,
                        },
                        PatternSection::Text {
                            title: Some("Why it works".to_string()),
                            body: "The good version focuses on one message and one action."
                                .to_string(),
                            bullets: Vec::new(),
                        },
                    ],
                    takeaway: Some(takeaway.clone()),
                },
            },
            PatternSeed {
                id: format!("day-{}-pattern-2", self.day),
                day_number: self.day,
                title: "Manager update template".to_string(),
                description: "Ready-to-use update with a simple structure.".to_string(),
                content: PatternContent {
                    intro: Some("Keep the update short and decision-ready.".to_string()),
                    sections: vec![
                        PatternSection::Visual {
                            title: Some("Template".to_string()),
                            visual: template,
                        },
                        PatternSection::Text {
                            title: Some("Tip".to_string()),
                            body: "Replace each line with a single sentence.".to_string(),
                            bullets: Vec::new(),
                        },
                    ],
                    takeaway: Some(takeaway),
                },
            },
        ]
    }

    // -----------------------------------------------------------------------
    // Checkpoints
    // -----------------------------------------------------------------------

    fn checkpoint(&self) -> CheckpointTestSeed {
        let id = format!("checkpoint-day-{}", self.day);
        let questions = self
            .week
            .checkpoint_bank
            .iter()
            .take(MAX_CHECKPOINT_QUESTIONS)
            .enumerate()
            .map(|(i, b)| CheckpointQuestionSeed {
                id: format!("{id}-q{}", i + 1),
                test_id: id.clone(),
                kind: b.kind,
                prompt: self.fill(b.prompt),
                choices: b.choices.iter().map(|c| self.fill(c)).collect(),
                correct_index: b.correct,
                explanation: b.explanation.to_string(),
                difficulty: b.difficulty,
            })
            .collect();
        CheckpointTestSeed {
            title: format!("Checkpoint Day {}: {}", self.day, self.title()),
            id,
            day_number: self.day,
            pass_percent: CHECKPOINT_PASS_PERCENT,
            xp_reward: CHECKPOINT_XP,
            questions,
        }
    }
}

const GENERIC_PROMPT: &str = "What changed, and what should we do next?";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static VERDICT_RE: OnceLock<Regex> = OnceLock::new();

/// Strip the leading "Correct." / "Not quite." verdict from feedback text.
fn explanation_from_feedback(feedback: &str) -> String {
    let re = VERDICT_RE.get_or_init(|| Regex::new(r"(?i)^(?:correct|not quite)\.?\s*").unwrap());
    re.replace(feedback, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TOTAL_DAYS;
    use std::collections::HashSet;

    #[test]
    fn builds_a_full_program() {
        let content = build_program_content();
        assert_eq!(content.lessons.len(), TOTAL_DAYS as usize);
        assert_eq!(content.checkpoints.len(), TOTAL_DAYS as usize);
        assert_eq!(content.skill_checks.len(), 3 * TOTAL_DAYS as usize);
        assert_eq!(content.patterns.len(), 2 * TOTAL_DAYS as usize);

        let days: Vec<u32> = content.lessons.iter().map(|l| l.day).collect();
        assert_eq!(days, (1..=TOTAL_DAYS).collect::<Vec<_>>());
    }

    #[test]
    fn ids_are_unique() {
        let content = build_program_content();
        let skill: HashSet<_> = content.skill_checks.iter().map(|c| &c.id).collect();
        assert_eq!(skill.len(), content.skill_checks.len());
        let questions: HashSet<_> = content
            .checkpoints
            .iter()
            .flat_map(|t| t.questions.iter().map(|q| &q.id))
            .collect();
        assert_eq!(questions.len(), 6 * TOTAL_DAYS as usize);
    }

    #[test]
    fn every_lesson_has_the_same_shape() {
        let content = build_program_content();
        for lesson in &content.lessons {
            let kinds: Vec<StepKind> = lesson.steps.iter().map(|s| s.kind).collect();
            assert_eq!(kinds.len(), 10, "day {}", lesson.day);
            assert_eq!(kinds[0], StepKind::Intuition);
            assert_eq!(kinds[3], StepKind::Visual);
            assert_eq!(kinds[9], StepKind::Learn);
            assert_eq!(kinds.iter().filter(|k| k.is_question()).count(), 5);
            for step in lesson.steps.iter().filter(|s| s.kind.is_question()) {
                let idx = step.correct_index.unwrap();
                assert!(idx < step.choices.len());
                assert!(!step.prompt.as_deref().unwrap_or("").contains('{'));
            }
        }
    }

    #[test]
    fn first_day_uses_hand_written_opening() {
        let content = build_program_content();
        let day1 = &content.lessons[0];
        assert_eq!(day1.title, "Day 1: Good questions vs bad questions");
        assert_eq!(
            day1.micro_goal,
            "Turn a vague question into one clear next step."
        );
        assert_eq!(day1.steps[1].title.as_deref(), Some("Focus on one step"));
        assert!(day1.steps[1]
            .body
            .as_deref()
            .unwrap()
            .starts_with("For a subscription app,"));
    }

    #[test]
    fn later_weeks_use_scenario_prompt() {
        let content = build_program_content();
        let day15 = &content.lessons[14];
        assert_eq!(day15.steps[1].title.as_deref(), Some("What you will do"));
        assert_eq!(
            day15.steps[1].example.as_deref(),
            Some("Example: Which region drives revenue?")
        );
        match day15.steps[3].visual.as_ref().unwrap() {
            Visual::Table { headers, rows, .. } => {
                assert_eq!(headers, &vec!["region".to_string(), "revenue".to_string()]);
                assert_eq!(rows[2], vec!["region C".to_string(), "88".to_string()]);
            }
            other => panic!("unexpected visual {other:?}"),
        }
    }

    #[test]
    fn explanation_drops_verdict() {
        assert_eq!(
            explanation_from_feedback("Correct. Keep the scale honest."),
            "Keep the scale honest."
        );
        assert_eq!(explanation_from_feedback("not quite try again"), "try again");
        assert_eq!(explanation_from_feedback("Plain."), "Plain.");
    }

    #[test]
    fn recap_ends_with_manager_line() {
        let content = build_program_content();
        let recap = content.lessons[0].steps.last().unwrap();
        let body = recap.body.as_deref().unwrap();
        assert!(body.starts_with("- Start with one clear question."));
        assert!(body.ends_with(&content.lessons[0].real_world_line));
    }
}
