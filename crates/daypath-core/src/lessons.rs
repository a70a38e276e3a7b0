use crate::content::StepKind;
use crate::error::Result;
use crate::visual::{parse_visual, Visual};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct LessonStep {
    pub id: i64,
    pub lesson_day: u32,
    pub sort_order: u32,
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

#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub day: u32,
    pub title: String,
    pub micro_goal: String,
    pub recap_bullets: Vec<String>,
    pub real_world_line: String,
    pub steps: Vec<LessonStep>,
}

/// What the user did on one step. View-only steps have no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepProgress {
    pub selected_index: Option<usize>,
    pub is_correct: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCounts {
    pub total: usize,
    pub completed: usize,
}

impl StepCounts {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub step: LessonStep,
    /// Correctness of the stored answer, which is the first one given.
    pub is_correct: bool,
}

const STEP_COLUMNS: &str = "id, lesson_day, sort_order, type, title, body, example, prompt,
                            choices, correct_index, explanation, visual_json";

/// JSON string array, tolerating NULL and garbage.
pub(crate) fn string_list(raw: Option<String>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str::<Vec<String>>(&s).ok())
        .unwrap_or_default()
}

fn step_from_row(row: &Row<'_>) -> rusqlite::Result<LessonStep> {
    let kind: String = row.get(3)?;
    let visual: Option<String> = row.get(11)?;
    Ok(LessonStep {
        id: row.get(0)?,
        lesson_day: row.get(1)?,
        sort_order: row.get(2)?,
        // Unknown kinds are treated as multiple choice.
        kind: StepKind::parse(&kind).unwrap_or(StepKind::Mcq),
        title: row.get(4)?,
        body: row.get(5)?,
        example: row.get(6)?,
        prompt: row.get(7)?,
        choices: string_list(row.get(8)?),
        correct_index: row.get::<_, Option<i64>>(9)?.map(|i| i as usize),
        explanation: row.get(10)?,
        visual: parse_visual(visual.as_deref()),
    })
}

pub fn get_lesson(conn: &Connection, day: u32) -> Result<Option<Lesson>> {
    let head = conn
        .query_row(
            "SELECT day, title, micro_goal, recap_bullets, real_world_line
             FROM lessons WHERE day = ?1",
            [day],
            |r| {
                Ok((
                    r.get::<_, u32>(0)?,
                    r.get::<_, String>(1)?,
                    r.get::<_, String>(2)?,
                    r.get::<_, Option<String>>(3)?,
                    r.get::<_, Option<String>>(4)?,
                ))
            },
        )
        .optional()?;
    let Some((day, title, micro_goal, recap, real_world_line)) = head else {
        return Ok(None);
    };

    let mut stmt = conn.prepare(&format!(
        "SELECT {STEP_COLUMNS} FROM lesson_steps WHERE lesson_day = ?1 ORDER BY sort_order, id"
    ))?;
    let steps = stmt
        .query_map([day], step_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(Some(Lesson {
        day,
        title,
        micro_goal,
        recap_bullets: string_list(recap),
        real_world_line: real_world_line.unwrap_or_default(),
        steps,
    }))
}

pub fn get_step(conn: &Connection, step_id: i64) -> Result<Option<LessonStep>> {
    let step = conn
        .query_row(
            &format!("SELECT {STEP_COLUMNS} FROM lesson_steps WHERE id = ?1"),
            [step_id],
            step_from_row,
        )
        .optional()?;
    Ok(step)
}

pub fn step_progress(
    conn: &Connection,
    user_id: i64,
    day: u32,
) -> Result<HashMap<i64, StepProgress>> {
    let mut stmt = conn.prepare(
        "SELECT sp.step_id, sp.selected_index, sp.is_correct
         FROM user_step_progress sp
         JOIN lesson_steps ls ON ls.id = sp.step_id
         WHERE sp.user_id = ?1 AND ls.lesson_day = ?2",
    )?;
    let rows = stmt.query_map(params![user_id, day], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            StepProgress {
                selected_index: r.get::<_, Option<i64>>(1)?.map(|i| i as usize),
                is_correct: r.get(2)?,
            },
        ))
    })?;
    let mut map = HashMap::new();
    for row in rows {
        let (id, progress) = row?;
        map.insert(id, progress);
    }
    Ok(map)
}

pub fn lesson_step_counts(conn: &Connection, user_id: i64, day: u32) -> Result<StepCounts> {
    let (total, completed) = conn.query_row(
        "SELECT
            (SELECT COUNT(*) FROM lesson_steps WHERE lesson_day = ?2),
            (SELECT COUNT(*) FROM user_step_progress sp
               JOIN lesson_steps ls ON ls.id = sp.step_id
              WHERE sp.user_id = ?1 AND ls.lesson_day = ?2)",
        params![user_id, day],
        |r| Ok((r.get::<_, i64>(0)?, r.get::<_, i64>(1)?)),
    )?;
    Ok(StepCounts {
        total: total as usize,
        completed: completed as usize,
    })
}

/// Mark a non-question step as seen. Returns `None` for question steps.
pub fn record_step_view(conn: &Connection, user_id: i64, step_id: i64) -> Result<Option<LessonStep>> {
    let Some(step) = get_step(conn, step_id)? else {
        return Ok(None);
    };
    if step.kind.is_question() {
        return Ok(None);
    }
    conn.execute(
        "INSERT OR IGNORE INTO user_step_progress (user_id, step_id, completed_at)
         VALUES (?1, ?2, ?3)",
        params![user_id, step_id, Utc::now()],
    )?;
    Ok(Some(step))
}

/// Answer a question step. The first answer sticks; later ones are ignored.
pub fn record_step_answer(
    conn: &Connection,
    user_id: i64,
    step_id: i64,
    selected: usize,
) -> Result<Option<AnswerOutcome>> {
    let Some(step) = get_step(conn, step_id)? else {
        return Ok(None);
    };
    if !step.kind.is_question() || selected >= step.choices.len() {
        return Ok(None);
    }
    let is_correct = step.correct_index == Some(selected);
    conn.execute(
        "INSERT OR IGNORE INTO user_step_progress
            (user_id, step_id, selected_index, is_correct, completed_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, step_id, selected as i64, is_correct, Utc::now()],
    )?;
    let stored: Option<bool> = conn.query_row(
        "SELECT is_correct FROM user_step_progress WHERE user_id = ?1 AND step_id = ?2",
        params![user_id, step_id],
        |r| r.get(0),
    )?;
    Ok(Some(AnswerOutcome {
        step,
        is_correct: stored.unwrap_or(false),
    }))
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

    #[test]
    fn lesson_steps_come_back_in_order() {
        let (conn, _) = setup();
        let lesson = get_lesson(&conn, 1).unwrap().unwrap();
        assert_eq!(lesson.recap_bullets.len(), 3);
        let orders: Vec<u32> = lesson.steps.iter().map(|s| s.sort_order).collect();
        assert_eq!(orders, (1..=10).collect::<Vec<_>>());
        assert!(lesson.steps[3].visual.as_ref().unwrap().is_table());
        assert!(get_lesson(&conn, 85).unwrap().is_none());
    }

    #[test]
    fn viewing_only_applies_to_non_questions() {
        let (conn, user) = setup();
        let lesson = get_lesson(&conn, 1).unwrap().unwrap();
        let intro = &lesson.steps[0];
        let question = &lesson.steps[4];

        assert!(record_step_view(&conn, user, intro.id).unwrap().is_some());
        assert!(record_step_view(&conn, user, intro.id).unwrap().is_some());
        assert!(record_step_view(&conn, user, question.id).unwrap().is_none());

        let counts = lesson_step_counts(&conn, user, 1).unwrap();
        assert_eq!(counts, StepCounts { total: 10, completed: 1 });
        assert!(!counts.is_complete());
    }

    #[test]
    fn first_answer_sticks() {
        let (conn, user) = setup();
        let lesson = get_lesson(&conn, 1).unwrap().unwrap();
        let question = &lesson.steps[4];
        let right = question.correct_index.unwrap();
        let wrong = (right + 1) % question.choices.len();

        let first = record_step_answer(&conn, user, question.id, wrong).unwrap().unwrap();
        assert!(!first.is_correct);
        let second = record_step_answer(&conn, user, question.id, right).unwrap().unwrap();
        assert!(!second.is_correct);

        let progress = step_progress(&conn, user, 1).unwrap();
        assert_eq!(
            progress.get(&question.id),
            Some(&StepProgress {
                selected_index: Some(wrong),
                is_correct: Some(false)
            })
        );
    }

    #[test]
    fn out_of_range_answers_are_ignored() {
        let (conn, user) = setup();
        let lesson = get_lesson(&conn, 1).unwrap().unwrap();
        let question = &lesson.steps[4];
        assert!(record_step_answer(&conn, user, question.id, 9).unwrap().is_none());
        assert!(record_step_answer(&conn, user, lesson.steps[0].id, 0).unwrap().is_none());
        assert!(record_step_answer(&conn, user, 999_999, 0).unwrap().is_none());
        assert!(step_progress(&conn, user, 1).unwrap().is_empty());
    }
}
