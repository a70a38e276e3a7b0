//! Writes the generated curriculum into the database.
//!
//! Seeding is an upsert keyed on natural ids, so re-running it against a
//! populated database only rewrites changed text. User progress rows
//! reference steps by id and survive a reseed.

use crate::content::{build_program_content, lint_program_content, Answer, ProgramContent};
use crate::error::{CoreError, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

pub const CONTENT_SEED_VERSION: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ContentCounts {
    pub lessons: usize,
    pub lesson_steps: usize,
    pub skill_checks: usize,
    pub patterns: usize,
    pub checkpoint_tests: usize,
    pub checkpoint_questions: usize,
}

impl ContentCounts {
    pub fn of(content: &ProgramContent) -> Self {
        Self {
            lessons: content.lessons.len(),
            lesson_steps: content.lessons.iter().map(|l| l.steps.len()).sum(),
            skill_checks: content.skill_checks.len(),
            patterns: content.patterns.len(),
            checkpoint_tests: content.checkpoints.len(),
            checkpoint_questions: content.checkpoints.iter().map(|t| t.questions.len()).sum(),
        }
    }

    /// True when every table holds at least as many rows as `expected`.
    pub fn covers(&self, expected: &ContentCounts) -> bool {
        self.lessons >= expected.lessons
            && self.lesson_steps >= expected.lesson_steps
            && self.skill_checks >= expected.skill_checks
            && self.patterns >= expected.patterns
            && self.checkpoint_tests >= expected.checkpoint_tests
            && self.checkpoint_questions >= expected.checkpoint_questions
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Content was already present.
    Skipped(ContentCounts),
    Seeded(ContentCounts),
}

/// Current row counts of the content tables.
pub fn content_counts(conn: &Connection) -> Result<ContentCounts> {
    let counts = conn.query_row(
        "SELECT
            (SELECT COUNT(*) FROM lessons),
            (SELECT COUNT(*) FROM lesson_steps),
            (SELECT COUNT(*) FROM skill_checks),
            (SELECT COUNT(*) FROM patterns),
            (SELECT COUNT(*) FROM checkpoint_tests),
            (SELECT COUNT(*) FROM checkpoint_questions)",
        [],
        |r| {
            Ok(ContentCounts {
                lessons: r.get::<_, i64>(0)? as usize,
                lesson_steps: r.get::<_, i64>(1)? as usize,
                skill_checks: r.get::<_, i64>(2)? as usize,
                patterns: r.get::<_, i64>(3)? as usize,
                checkpoint_tests: r.get::<_, i64>(4)? as usize,
                checkpoint_questions: r.get::<_, i64>(5)? as usize,
            })
        },
    )?;
    Ok(counts)
}

/// Seed the curriculum unless it is already fully present.
pub fn ensure_content_seeded(conn: &Connection) -> Result<SeedOutcome> {
    let content = build_program_content();
    let expected = ContentCounts::of(&content);
    let existing = content_counts(conn)?;

    if existing.covers(&expected) {
        record_version(conn)?;
        tracing::debug!("content already seeded");
        return Ok(SeedOutcome::Skipped(existing));
    }

    let issues = lint_program_content(&content);
    if !issues.is_empty() {
        let summary = issues
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" | ");
        return Err(CoreError::ContentCheckFailed(summary));
    }

    let tx = conn.unchecked_transaction()?;
    write_content(&tx, &content)?;
    record_version(&tx)?;
    tx.commit()?;

    tracing::info!(
        lessons = expected.lessons,
        steps = expected.lesson_steps,
        skill_checks = expected.skill_checks,
        patterns = expected.patterns,
        checkpoints = expected.checkpoint_tests,
        "seeded content"
    );
    Ok(SeedOutcome::Seeded(expected))
}

/// Seed version already recorded in the database, if any.
pub fn seeded_version(conn: &Connection) -> Result<Option<i64>> {
    let version = conn
        .query_row(
            "SELECT MAX(version) FROM content_seed",
            [],
            |r| r.get::<_, Option<i64>>(0),
        )
        .optional()?
        .flatten();
    Ok(version)
}

fn record_version(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO content_seed (version, seeded_at) VALUES (?1, ?2)",
        params![CONTENT_SEED_VERSION, Utc::now()],
    )?;
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn write_content(conn: &Connection, content: &ProgramContent) -> Result<()> {
    // -----------------------------------------------------------------------
    // Lessons and steps
    // -----------------------------------------------------------------------
    let mut lesson_stmt = conn.prepare(
        "INSERT INTO lessons (day, title, micro_goal, recap_bullets, real_world_line)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT (day) DO UPDATE SET
            title = excluded.title,
            micro_goal = excluded.micro_goal,
            recap_bullets = excluded.recap_bullets,
            real_world_line = excluded.real_world_line",
    )?;
    let mut step_stmt = conn.prepare(
        "INSERT INTO lesson_steps (lesson_day, sort_order, type, title, body, example,
                                   prompt, choices, correct_index, explanation, visual_json)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
         ON CONFLICT (lesson_day, sort_order) DO UPDATE SET
            type = excluded.type,
            title = excluded.title,
            body = excluded.body,
            example = excluded.example,
            prompt = excluded.prompt,
            choices = excluded.choices,
            correct_index = excluded.correct_index,
            explanation = excluded.explanation,
            visual_json = excluded.visual_json",
    )?;
    let mut trim_steps = conn.prepare(
        "DELETE FROM lesson_steps WHERE lesson_day = ?1 AND sort_order > ?2",
    )?;

    for lesson in &content.lessons {
        lesson_stmt.execute(params![
            lesson.day,
            lesson.title,
            lesson.micro_goal,
            to_json(&lesson.recap_bullets)?,
            lesson.real_world_line,
        ])?;
        for (i, step) in lesson.steps.iter().enumerate() {
            let choices = if step.choices.is_empty() {
                None
            } else {
                Some(to_json(&step.choices)?)
            };
            let visual = step.visual.as_ref().map(to_json).transpose()?;
            step_stmt.execute(params![
                lesson.day,
                (i + 1) as i64,
                step.kind.as_str(),
                step.title,
                step.body,
                step.example,
                step.prompt,
                choices,
                step.correct_index.map(|c| c as i64),
                step.explanation,
                visual,
            ])?;
        }
        trim_steps.execute(params![lesson.day, lesson.steps.len() as i64])?;
    }

    // -----------------------------------------------------------------------
    // Skill checks and patterns
    // -----------------------------------------------------------------------
    let mut check_stmt = conn.prepare(
        "INSERT INTO skill_checks (id, day_number, title, prompt, type, choices_json,
                                   answer_json, explanation, xp_reward)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT (id) DO UPDATE SET
            day_number = excluded.day_number,
            title = excluded.title,
            prompt = excluded.prompt,
            type = excluded.type,
            choices_json = excluded.choices_json,
            answer_json = excluded.answer_json,
            explanation = excluded.explanation,
            xp_reward = excluded.xp_reward",
    )?;
    for check in &content.skill_checks {
        check_stmt.execute(params![
            check.id,
            check.day_number,
            check.title,
            check.prompt,
            check.kind.as_str(),
            to_json(&check.choices)?,
            to_json(&Answer {
                correct_index: check.correct_index
            })?,
            check.explanation,
            check.xp_reward,
        ])?;
    }

    let mut pattern_stmt = conn.prepare(
        "INSERT INTO patterns (id, day_number, title, description, content_json)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT (id) DO UPDATE SET
            day_number = excluded.day_number,
            title = excluded.title,
            description = excluded.description,
            content_json = excluded.content_json",
    )?;
    for pattern in &content.patterns {
        pattern_stmt.execute(params![
            pattern.id,
            pattern.day_number,
            pattern.title,
            pattern.description,
            to_json(&pattern.content)?,
        ])?;
    }

    // -----------------------------------------------------------------------
    // Checkpoints
    // -----------------------------------------------------------------------
    let mut test_stmt = conn.prepare(
        "INSERT INTO checkpoint_tests (id, day_number, title, pass_percent, xp_reward)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT (id) DO UPDATE SET
            day_number = excluded.day_number,
            title = excluded.title,
            pass_percent = excluded.pass_percent,
            xp_reward = excluded.xp_reward",
    )?;
    let mut question_stmt = conn.prepare(
        "INSERT INTO checkpoint_questions (id, checkpoint_test_id, sort_order, type, prompt,
                                           choices_json, answer_json, explanation, difficulty)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT (id) DO UPDATE SET
            checkpoint_test_id = excluded.checkpoint_test_id,
            sort_order = excluded.sort_order,
            type = excluded.type,
            prompt = excluded.prompt,
            choices_json = excluded.choices_json,
            answer_json = excluded.answer_json,
            explanation = excluded.explanation,
            difficulty = excluded.difficulty",
    )?;
    let mut trim_questions = conn.prepare(
        "DELETE FROM checkpoint_questions WHERE checkpoint_test_id = ?1 AND sort_order > ?2",
    )?;

    for test in &content.checkpoints {
        test_stmt.execute(params![
            test.id,
            test.day_number,
            test.title,
            test.pass_percent,
            test.xp_reward,
        ])?;
        for (i, q) in test.questions.iter().enumerate() {
            question_stmt.execute(params![
                q.id,
                q.test_id,
                (i + 1) as i64,
                q.kind.as_str(),
                q.prompt,
                to_json(&q.choices)?,
                to_json(&Answer {
                    correct_index: q.correct_index
                })?,
                q.explanation,
                q.difficulty.as_str(),
            ])?;
        }
        trim_questions.execute(params![test.id, test.questions.len() as i64])?;
    }
    Ok(())
}
