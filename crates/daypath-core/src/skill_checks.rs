use crate::content::{Answer, QuestionKind};
use crate::error::Result;
use crate::lessons::string_list;
use crate::progress::{add_xp, ensure_progress};
use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCheck {
    pub id: String,
    pub day_number: u32,
    pub title: String,
    pub prompt: String,
    pub kind: QuestionKind,
    pub choices: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    pub xp_reward: i64,
    /// Answered correctly at least once.
    pub completed: bool,
    /// Most recent answer, `(selected, correct)`.
    pub last_answer: Option<(usize, bool)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCheckOutcome {
    pub is_correct: bool,
    /// First correct answer; XP was awarded.
    pub newly_completed: bool,
    pub xp_awarded: i64,
}

const SELECT: &str = "SELECT sc.id, sc.day_number, sc.title, sc.prompt, sc.type, sc.choices_json,
        sc.answer_json, sc.explanation, sc.xp_reward,
        c.completed_at IS NOT NULL, a.selected_index, a.is_correct
    FROM skill_checks sc
    LEFT JOIN user_skill_check_completions c
        ON c.skill_check_id = sc.id AND c.user_id = ?1
    LEFT JOIN user_skill_checks a
        ON a.skill_check_id = sc.id AND a.user_id = ?1";

fn from_row(row: &Row<'_>) -> rusqlite::Result<SkillCheck> {
    let kind: String = row.get(4)?;
    let answer: String = row.get(6)?;
    let selected: Option<i64> = row.get(10)?;
    let correct: Option<bool> = row.get(11)?;
    Ok(SkillCheck {
        id: row.get(0)?,
        day_number: row.get(1)?,
        title: row.get(2)?,
        prompt: row.get(3)?,
        kind: QuestionKind::parse(&kind).unwrap_or(QuestionKind::Mcq),
        choices: string_list(row.get(5)?),
        correct_index: serde_json::from_str::<Answer>(&answer)
            .map(|a| a.correct_index)
            .unwrap_or(0),
        explanation: row.get(7)?,
        xp_reward: row.get(8)?,
        completed: row.get(9)?,
        last_answer: selected.map(|s| (s as usize, correct.unwrap_or(false))),
    })
}

pub fn skill_checks_for_day(conn: &Connection, user_id: i64, day: u32) -> Result<Vec<SkillCheck>> {
    let mut stmt = conn.prepare(&format!("{SELECT} WHERE sc.day_number = ?2 ORDER BY sc.id"))?;
    let checks = stmt
        .query_map(params![user_id, day], from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(checks)
}

pub fn skill_check(conn: &Connection, user_id: i64, id: &str) -> Result<Option<SkillCheck>> {
    let check = conn
        .query_row(
            &format!("{SELECT} WHERE sc.id = ?2"),
            params![user_id, id],
            from_row,
        )
        .optional()?;
    Ok(check)
}

/// Store the answer. XP is paid on the first correct answer only.
pub fn record_skill_check_answer(
    conn: &Connection,
    user_id: i64,
    id: &str,
    selected: usize,
    today: NaiveDate,
) -> Result<Option<SkillCheckOutcome>> {
    let Some(check) = skill_check(conn, user_id, id)? else {
        return Ok(None);
    };
    if selected >= check.choices.len() {
        return Ok(None);
    }
    ensure_progress(conn, user_id, today)?;
    let is_correct = selected == check.correct_index;
    let now = Utc::now();

    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "INSERT INTO user_skill_checks (user_id, skill_check_id, selected_index, is_correct, answered_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT (user_id, skill_check_id) DO UPDATE SET
            selected_index = excluded.selected_index,
            is_correct = excluded.is_correct,
            answered_at = excluded.answered_at",
        params![user_id, check.id, selected as i64, is_correct, now],
    )?;
    let newly_completed = is_correct
        && !check.completed
        && tx.execute(
            "INSERT OR IGNORE INTO user_skill_check_completions (user_id, skill_check_id, completed_at)
             VALUES (?1, ?2, ?3)",
            params![user_id, check.id, now],
        )? == 1;
    if newly_completed {
        add_xp(&tx, user_id, check.xp_reward)?;
    }
    tx.commit()?;

    Ok(Some(SkillCheckOutcome {
        is_correct,
        newly_completed,
        xp_awarded: if newly_completed { check.xp_reward } else { 0 },
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

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn xp(conn: &Connection, user: i64) -> i64 {
        ensure_progress(conn, user, today()).unwrap().xp
    }

    #[test]
    fn three_checks_per_day() {
        let (conn, user) = setup();
        let checks = skill_checks_for_day(&conn, user, 2).unwrap();
        let ids: Vec<&str> = checks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["day-2-skill-1", "day-2-skill-2", "day-2-skill-3"]);
        assert_eq!(checks[2].title, "Manager-ready line");
        assert!(checks.iter().all(|c| !c.completed && c.xp_reward == 5));
    }

    #[test]
    fn xp_awarded_once() {
        let (conn, user) = setup();
        let wrong = record_skill_check_answer(&conn, user, "day-1-skill-1", 2, today())
            .unwrap()
            .unwrap();
        assert!(!wrong.is_correct && !wrong.newly_completed);
        assert_eq!(xp(&conn, user), 0);

        let right = record_skill_check_answer(&conn, user, "day-1-skill-1", 0, today())
            .unwrap()
            .unwrap();
        assert!(right.is_correct && right.newly_completed);
        assert_eq!(right.xp_awarded, 5);

        let again = record_skill_check_answer(&conn, user, "day-1-skill-1", 0, today())
            .unwrap()
            .unwrap();
        assert!(again.is_correct && !again.newly_completed);
        assert_eq!(xp(&conn, user), 5);
    }

    #[test]
    fn last_answer_is_kept() {
        let (conn, user) = setup();
        record_skill_check_answer(&conn, user, "day-1-skill-2", 0, today()).unwrap();
        record_skill_check_answer(&conn, user, "day-1-skill-2", 3, today()).unwrap();
        let check = skill_check(&conn, user, "day-1-skill-2").unwrap().unwrap();
        assert_eq!(check.last_answer, Some((3, false)));
        assert!(check.completed);
    }

    #[test]
    fn bad_input_records_nothing() {
        let (conn, user) = setup();
        assert!(record_skill_check_answer(&conn, user, "day-1-skill-1", 4, today())
            .unwrap()
            .is_none());
        assert!(record_skill_check_answer(&conn, user, "nope", 0, today())
            .unwrap()
            .is_none());
        assert!(skill_check(&conn, user, "day-1-skill-1")
            .unwrap()
            .unwrap()
            .last_answer
            .is_none());
    }
}
