//! Graded end-of-day tests. Passing a day's checkpoint unlocks the next day.

use crate::content::{Answer, Difficulty, QuestionKind};
use crate::error::{CoreError, Result};
use crate::lessons::string_list;
use crate::progress::{add_xp, ensure_progress};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointQuestion {
    pub id: String,
    pub test_id: String,
    pub sort_order: u32,
    pub kind: QuestionKind,
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointTest {
    pub id: String,
    pub day_number: u32,
    pub title: String,
    pub pass_percent: u32,
    pub xp_reward: i64,
    pub questions: Vec<CheckpointQuestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckpointAnswer {
    pub selected_index: usize,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub id: i64,
    pub score: u32,
    pub passed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalizeOutcome {
    pub score: u32,
    pub passed: bool,
    pub correct: usize,
    pub total: usize,
    pub xp_awarded: i64,
}

fn parse_difficulty(s: &str) -> Difficulty {
    match s {
        "easy" => Difficulty::Easy,
        "hard" => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}

const QUESTION_COLUMNS: &str = "id, checkpoint_test_id, sort_order, type, prompt, choices_json,
                                answer_json, explanation, difficulty";

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<CheckpointQuestion> {
    let kind: String = row.get(3)?;
    let answer: String = row.get(6)?;
    let difficulty: String = row.get(8)?;
    Ok(CheckpointQuestion {
        id: row.get(0)?,
        test_id: row.get(1)?,
        sort_order: row.get(2)?,
        kind: QuestionKind::parse(&kind).unwrap_or(QuestionKind::Mcq),
        prompt: row.get(4)?,
        choices: string_list(row.get(5)?),
        correct_index: serde_json::from_str::<Answer>(&answer)
            .map(|a| a.correct_index)
            .unwrap_or(0),
        explanation: row.get(7)?,
        difficulty: parse_difficulty(&difficulty),
    })
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

pub fn checkpoint_for_day(conn: &Connection, day: u32) -> Result<Option<CheckpointTest>> {
    let head = conn
        .query_row(
            "SELECT id, day_number, title, pass_percent, xp_reward
             FROM checkpoint_tests WHERE day_number = ?1",
            [day],
            |r| {
                Ok(CheckpointTest {
                    id: r.get(0)?,
                    day_number: r.get(1)?,
                    title: r.get(2)?,
                    pass_percent: r.get(3)?,
                    xp_reward: r.get(4)?,
                    questions: Vec::new(),
                })
            },
        )
        .optional()?;
    let Some(mut test) = head else {
        return Ok(None);
    };
    let mut stmt = conn.prepare(&format!(
        "SELECT {QUESTION_COLUMNS} FROM checkpoint_questions
         WHERE checkpoint_test_id = ?1 ORDER BY sort_order, id"
    ))?;
    test.questions = stmt
        .query_map([&test.id], question_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(Some(test))
}

pub fn checkpoint_question(conn: &Connection, id: &str) -> Result<Option<CheckpointQuestion>> {
    let q = conn
        .query_row(
            &format!("SELECT {QUESTION_COLUMNS} FROM checkpoint_questions WHERE id = ?1"),
            [id],
            question_from_row,
        )
        .optional()?;
    Ok(q)
}

/// The user's current answers for a test, keyed by question id.
pub fn checkpoint_answers(
    conn: &Connection,
    user_id: i64,
    test_id: &str,
) -> Result<HashMap<String, CheckpointAnswer>> {
    let mut stmt = conn.prepare(
        "SELECT a.question_id, a.selected_index, a.is_correct
         FROM checkpoint_answers a
         JOIN checkpoint_questions q ON q.id = a.question_id
         WHERE a.user_id = ?1 AND q.checkpoint_test_id = ?2",
    )?;
    let rows = stmt.query_map(params![user_id, test_id], |r| {
        Ok((
            r.get::<_, String>(0)?,
            CheckpointAnswer {
                selected_index: r.get::<_, i64>(1)? as usize,
                is_correct: r.get(2)?,
            },
        ))
    })?;
    let mut map = HashMap::new();
    for row in rows {
        let (id, answer) = row?;
        map.insert(id, answer);
    }
    Ok(map)
}

pub fn latest_attempt(conn: &Connection, user_id: i64, test_id: &str) -> Result<Option<Attempt>> {
    let attempt = conn
        .query_row(
            "SELECT id, score, passed, created_at FROM checkpoint_attempts
             WHERE user_id = ?1 AND checkpoint_test_id = ?2
             ORDER BY id DESC LIMIT 1",
            params![user_id, test_id],
            |r| {
                Ok(Attempt {
                    id: r.get(0)?,
                    score: r.get(1)?,
                    passed: r.get(2)?,
                    created_at: r.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(attempt)
}

pub fn has_passed(conn: &Connection, user_id: i64, test_id: &str) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM checkpoint_attempts
             WHERE user_id = ?1 AND checkpoint_test_id = ?2 AND passed = 1 LIMIT 1",
            params![user_id, test_id],
            |r| r.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Highest day whose checkpoint the user has passed, 0 if none.
pub fn max_passed_day(conn: &Connection, user_id: i64) -> Result<u32> {
    let day: u32 = conn.query_row(
        "SELECT COALESCE(MAX(t.day_number), 0)
         FROM checkpoint_attempts a
         JOIN checkpoint_tests t ON t.id = a.checkpoint_test_id
         WHERE a.user_id = ?1 AND a.passed = 1",
        [user_id],
        |r| r.get(0),
    )?;
    Ok(day)
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// Store (or replace) the answer to one question. `None` for an unknown
/// question or an index out of range.
pub fn record_checkpoint_answer(
    conn: &Connection,
    user_id: i64,
    question_id: &str,
    selected: usize,
) -> Result<Option<bool>> {
    let Some(question) = checkpoint_question(conn, question_id)? else {
        return Ok(None);
    };
    if selected >= question.choices.len() {
        return Ok(None);
    }
    let is_correct = selected == question.correct_index;
    conn.execute(
        "INSERT INTO checkpoint_answers (user_id, question_id, selected_index, is_correct, answered_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT (user_id, question_id) DO UPDATE SET
            selected_index = excluded.selected_index,
            is_correct = excluded.is_correct,
            answered_at = excluded.answered_at",
        params![user_id, question.id, selected as i64, is_correct, Utc::now()],
    )?;
    Ok(Some(is_correct))
}

/// Grade the current answers and store an attempt.
pub fn finalize_checkpoint(
    conn: &Connection,
    user_id: i64,
    test: &CheckpointTest,
    today: NaiveDate,
) -> Result<FinalizeOutcome> {
    let answers = checkpoint_answers(conn, user_id, &test.id)?;
    if test.questions.iter().any(|q| !answers.contains_key(&q.id)) {
        return Err(CoreError::invalid("Finish all questions first."));
    }
    ensure_progress(conn, user_id, today)?;

    let total = test.questions.len();
    let correct = test
        .questions
        .iter()
        .filter(|q| answers.get(&q.id).is_some_and(|a| a.is_correct))
        .count();
    let score = if total == 0 {
        0
    } else {
        ((correct as f64 / total as f64) * 100.0).round() as u32
    };
    let passed = score >= test.pass_percent;
    let already_passed = has_passed(conn, user_id, &test.id)?;
    let xp_awarded = if passed && !already_passed {
        test.xp_reward
    } else {
        0
    };

    let tx = conn.unchecked_transaction()?;
    if xp_awarded > 0 {
        add_xp(&tx, user_id, xp_awarded)?;
    }
    tx.execute(
        "INSERT INTO checkpoint_attempts (user_id, checkpoint_test_id, score, passed, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, test.id, score, passed, Utc::now()],
    )?;
    tx.commit()?;

    tracing::info!(user_id, day = test.day_number, score, passed, "checkpoint graded");
    Ok(FinalizeOutcome {
        score,
        passed,
        correct,
        total,
        xp_awarded,
    })
}

/// Clear the user's answers so the test can be retaken.
pub fn reset_checkpoint(conn: &Connection, user_id: i64, test_id: &str) -> Result<()> {
    conn.execute(
        "DELETE FROM checkpoint_answers
         WHERE user_id = ?1
           AND question_id IN (SELECT id FROM checkpoint_questions WHERE checkpoint_test_id = ?2)",
        params![user_id, test_id],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_db_in_memory;
    use crate::seed::ensure_content_seeded;

    fn setup() -> (Connection, i64) {
        let conn = open_db_in_memory().unwrap();
        ensure_content_seeded(&conn).unwrap();
        conn.execute(
            "INSERT INTO users (email, password_hash, created_at) VALUES ('a@b.c', 'x', 'now')",
            [],
        )
        .unwrap();
        let id = conn.last_insert_rowid();
        (conn, id)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    /// Answer the first `right` questions correctly and the rest wrong.
    fn answer(conn: &Connection, user: i64, test: &CheckpointTest, right: usize) {
        for (i, q) in test.questions.iter().enumerate() {
            let pick = if i < right {
                q.correct_index
            } else {
                (q.correct_index + 1) % q.choices.len()
            };
            record_checkpoint_answer(conn, user, &q.id, pick).unwrap().unwrap();
        }
    }

    #[test]
    fn loads_the_days_test() {
        let (conn, _) = setup();
        let test = checkpoint_for_day(&conn, 3).unwrap().unwrap();
        assert_eq!(test.id, "checkpoint-day-3");
        assert_eq!(test.pass_percent, 70);
        assert_eq!(test.questions.len(), 6);
        assert_eq!(test.questions[0].id, "checkpoint-day-3-q1");
        assert_eq!(test.questions[5].difficulty, Difficulty::Hard);
    }

    #[test]
    fn finalize_requires_every_answer() {
        let (conn, user) = setup();
        let test = checkpoint_for_day(&conn, 1).unwrap().unwrap();
        record_checkpoint_answer(&conn, user, &test.questions[0].id, 0).unwrap();
        let err = finalize_checkpoint(&conn, user, &test, today()).unwrap_err();
        assert_eq!(err.to_string(), "Finish all questions first.");
        assert!(latest_attempt(&conn, user, &test.id).unwrap().is_none());
    }

    #[test]
    fn failing_then_passing() {
        let (conn, user) = setup();
        let test = checkpoint_for_day(&conn, 1).unwrap().unwrap();

        answer(&conn, user, &test, 4);
        let fail = finalize_checkpoint(&conn, user, &test, today()).unwrap();
        assert_eq!(fail.score, 67);
        assert!(!fail.passed);
        assert_eq!(max_passed_day(&conn, user).unwrap(), 0);

        reset_checkpoint(&conn, user, &test.id).unwrap();
        assert!(checkpoint_answers(&conn, user, &test.id).unwrap().is_empty());

        answer(&conn, user, &test, 5);
        let pass = finalize_checkpoint(&conn, user, &test, today()).unwrap();
        assert_eq!(pass.score, 83);
        assert!(pass.passed);
        assert_eq!(pass.xp_awarded, 15);
        assert_eq!(max_passed_day(&conn, user).unwrap(), 1);

        let again = finalize_checkpoint(&conn, user, &test, today()).unwrap();
        assert_eq!(again.xp_awarded, 0);
        assert_eq!(ensure_progress(&conn, user, today()).unwrap().xp, 15);

        let latest = latest_attempt(&conn, user, &test.id).unwrap().unwrap();
        assert!(latest.passed);
        assert_eq!(latest.score, 83);
    }

    #[test]
    fn answers_can_be_changed() {
        let (conn, user) = setup();
        let test = checkpoint_for_day(&conn, 1).unwrap().unwrap();
        let q = &test.questions[0];
        let wrong = (q.correct_index + 1) % q.choices.len();
        assert_eq!(record_checkpoint_answer(&conn, user, &q.id, wrong).unwrap(), Some(false));
        assert_eq!(
            record_checkpoint_answer(&conn, user, &q.id, q.correct_index).unwrap(),
            Some(true)
        );
        assert_eq!(record_checkpoint_answer(&conn, user, &q.id, 17).unwrap(), None);
        let answers = checkpoint_answers(&conn, user, &test.id).unwrap();
        assert!(answers[&q.id].is_correct);
    }
}
