//! Per-user XP, streak and day gating.
//!
//! The current day is derived, never stored: it is one past the highest
//! day whose checkpoint the user has passed.

use crate::checkpoints::max_passed_day;
use crate::content::TOTAL_DAYS;
use crate::error::{CoreError, Result};
use crate::lessons::lesson_step_counts;
use chrono::{Duration, Local, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};

pub const XP_PER_DAY: i64 = 10;

/// Calendar date used for streaks, in the server's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub user_id: i64,
    pub start_date: NaiveDate,
    pub xp: i64,
    pub streak: i64,
    pub last_completed_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Recorded { xp: i64, streak: i64 },
    AlreadyCompleted,
    /// Every day is already behind the user.
    Finished,
}

fn load_progress(conn: &Connection, user_id: i64) -> Result<Option<Progress>> {
    let progress = conn
        .query_row(
            "SELECT user_id, start_date, xp, streak, last_completed_date
             FROM user_progress WHERE user_id = ?1",
            [user_id],
            |r| {
                Ok(Progress {
                    user_id: r.get(0)?,
                    start_date: r.get(1)?,
                    xp: r.get(2)?,
                    streak: r.get(3)?,
                    last_completed_date: r.get(4)?,
                })
            },
        )
        .optional()?;
    Ok(progress)
}

/// Load the user's progress row, creating it on first use.
pub fn ensure_progress(conn: &Connection, user_id: i64, today: NaiveDate) -> Result<Progress> {
    conn.execute(
        "INSERT OR IGNORE INTO user_progress (user_id, start_date, xp, streak, updated_at)
         VALUES (?1, ?2, 0, 0, ?3)",
        params![user_id, today, Utc::now()],
    )?;
    load_progress(conn, user_id)?
        .ok_or_else(|| CoreError::invalid(format!("no progress for user {user_id}")))
}

/// Zero the streak when the last completion is older than yesterday.
pub fn reset_streak_if_missed(
    conn: &Connection,
    progress: Progress,
    today: NaiveDate,
) -> Result<Progress> {
    let Some(last) = progress.last_completed_date else {
        return Ok(progress);
    };
    let still_valid = last == today || last == today - Duration::days(1);
    if still_valid || progress.streak == 0 {
        return Ok(progress);
    }
    conn.execute(
        "UPDATE user_progress SET streak = 0, updated_at = ?2 WHERE user_id = ?1",
        params![progress.user_id, Utc::now()],
    )?;
    tracing::debug!(user_id = progress.user_id, "streak reset");
    Ok(Progress {
        streak: 0,
        ..progress
    })
}

pub fn add_xp(conn: &Connection, user_id: i64, amount: i64) -> Result<()> {
    conn.execute(
        "UPDATE user_progress SET xp = xp + ?2, updated_at = ?3 WHERE user_id = ?1",
        params![user_id, amount, Utc::now()],
    )?;
    Ok(())
}

pub fn has_completed_day(conn: &Connection, user_id: i64, day: u32) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM user_days WHERE user_id = ?1 AND day = ?2",
            params![user_id, day],
            |r| r.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

pub fn completed_days(conn: &Connection, user_id: i64) -> Result<Vec<u32>> {
    let mut stmt = conn.prepare("SELECT day FROM user_days WHERE user_id = ?1 ORDER BY day")?;
    let days = stmt
        .query_map([user_id], |r| r.get::<_, u32>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(days)
}

/// The day the user is working on, and whether the program is finished.
pub fn current_day(conn: &Connection, user_id: i64) -> Result<(u32, bool)> {
    let max_passed = max_passed_day(conn, user_id)?;
    Ok(((max_passed + 1).min(TOTAL_DAYS), max_passed >= TOTAL_DAYS))
}

/// Record `day` as completed on `today`. Awards XP once per day.
///
/// The `user_days` insert decides who wins when two requests complete the
/// same day; the loser sees `AlreadyCompleted`.
pub fn record_lesson_completion(
    conn: &Connection,
    user_id: i64,
    day: u32,
    today: NaiveDate,
) -> Result<Completion> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    let inserted = tx.execute(
        "INSERT OR IGNORE INTO user_days (user_id, day, completed_date) VALUES (?1, ?2, ?3)",
        params![user_id, day, today],
    )?;
    if inserted == 0 {
        return Ok(Completion::AlreadyCompleted);
    }

    let progress = ensure_progress(&tx, user_id, today)?;
    let streak = match progress.last_completed_date {
        Some(last) if last == today - Duration::days(1) => progress.streak + 1,
        Some(last) if last == today => progress.streak.max(1),
        _ => 1,
    };
    let xp = progress.xp + XP_PER_DAY;
    tx.execute(
        "UPDATE user_progress
         SET xp = ?2, streak = ?3, last_completed_date = ?4, updated_at = ?5
         WHERE user_id = ?1",
        params![user_id, xp, streak, today, Utc::now()],
    )?;
    tx.commit()?;

    tracing::info!(user_id, day, xp, streak, "day completed");
    Ok(Completion::Recorded { xp, streak })
}

/// A lesson counts as done once its day row exists or every step is done.
pub fn is_lesson_ready_for_checkpoint(conn: &Connection, user_id: i64, day: u32) -> Result<bool> {
    Ok(has_completed_day(conn, user_id, day)?
        || lesson_step_counts(conn, user_id, day)?.is_complete())
}

/// Explicit "finish day" action. Every step of the current day must be done.
pub fn complete_today(conn: &Connection, user_id: i64, today: NaiveDate) -> Result<Completion> {
    let (day, completed_all) = current_day(conn, user_id)?;
    if completed_all {
        return Ok(Completion::Finished);
    }
    if !lesson_step_counts(conn, user_id, day)?.is_complete() {
        return Err(CoreError::invalid("Finish all steps first."));
    }
    record_lesson_completion(conn, user_id, day, today)
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub day: u32,
    pub total_days: u32,
    pub xp: i64,
    pub streak: i64,
    pub today: NaiveDate,
    pub lesson_completed: bool,
    pub checkpoint_passed: bool,
    pub can_complete: bool,
    pub can_take_checkpoint: bool,
    pub completed_all: bool,
    pub completed_days: Vec<u32>,
    pub rank: Rank,
}

pub fn dashboard_state(conn: &Connection, user_id: i64, today: NaiveDate) -> Result<DashboardState> {
    let progress = ensure_progress(conn, user_id, today)?;
    let mut progress = reset_streak_if_missed(conn, progress, today)?;
    let max_passed = max_passed_day(conn, user_id)?;
    let day = (max_passed + 1).min(TOTAL_DAYS);
    let completed_all = max_passed >= TOTAL_DAYS;

    let mut lesson_completed = false;
    if !completed_all {
        let has_day = has_completed_day(conn, user_id, day)?;
        let steps_done = lesson_step_counts(conn, user_id, day)?.is_complete();
        if steps_done && !has_day {
            if let Completion::Recorded { xp, streak } =
                record_lesson_completion(conn, user_id, day, today)?
            {
                progress.xp = xp;
                progress.streak = streak;
            }
        }
        lesson_completed = has_day || steps_done;
    }
    let checkpoint_passed = max_passed >= day;

    Ok(DashboardState {
        day,
        total_days: TOTAL_DAYS,
        xp: progress.xp,
        streak: progress.streak,
        today,
        lesson_completed,
        checkpoint_passed,
        can_complete: !completed_all && !lesson_completed,
        can_take_checkpoint: !completed_all && lesson_completed && !checkpoint_passed,
        completed_all,
        completed_days: completed_days(conn, user_id)?,
        rank: rank_for(progress.xp),
    })
}

// ---------------------------------------------------------------------------
// Ranks
// ---------------------------------------------------------------------------

const RANKS: &[(&str, i64, i64)] = &[
    ("Beginner Analyst", 0, 60),
    ("Junior Analyst", 60, 160),
    ("Analyst", 160, 320),
    ("Senior Analyst", 320, 520),
    ("Lead Analyst", 520, 800),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Rank {
    pub name: &'static str,
    pub min_xp: i64,
    pub max_xp: i64,
    /// Fraction of the band covered, 0..=1.
    pub progress: f64,
}

impl Rank {
    pub fn percent(&self) -> u32 {
        (self.progress * 100.0).round() as u32
    }

    /// e.g. "40% to 160 XP".
    pub fn progress_label(&self) -> String {
        format!("{}% to {} XP", self.percent(), self.max_xp)
    }
}

pub fn rank_for(xp: i64) -> Rank {
    let (name, min_xp, max_xp) = RANKS
        .iter()
        .copied()
        .find(|(_, min, max)| xp >= *min && xp < *max)
        .unwrap_or(RANKS[RANKS.len() - 1]);
    let span = (max_xp - min_xp) as f64;
    let progress = ((xp - min_xp) as f64 / span).clamp(0.0, 1.0);
    Rank {
        name,
        min_xp,
        max_xp,
        progress,
    }
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
            "INSERT INTO users (email, password_hash, created_at) VALUES ('a@b.c', 'x', '2026-01-01')",
            [],
        )
        .unwrap();
        let id = conn.last_insert_rowid();
        (conn, id)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn finish_all_steps(conn: &Connection, user_id: i64, day: u32) {
        conn.execute(
            "INSERT OR IGNORE INTO user_step_progress (user_id, step_id, completed_at)
             SELECT ?1, id, '2026-01-01' FROM lesson_steps WHERE lesson_day = ?2",
            params![user_id, day],
        )
        .unwrap();
    }

    #[test]
    fn new_user_starts_on_day_one() {
        let (conn, user) = setup();
        let state = dashboard_state(&conn, user, date("2026-03-01")).unwrap();
        assert_eq!(state.day, 1);
        assert_eq!(state.xp, 0);
        assert!(state.can_complete);
        assert!(!state.can_take_checkpoint);
        assert_eq!(state.rank.name, "Beginner Analyst");
        let progress = ensure_progress(&conn, user, date("2026-03-05")).unwrap();
        assert_eq!(progress.start_date, date("2026-03-01"));
    }

    #[test]
    fn streak_grows_on_consecutive_days() {
        let (conn, user) = setup();
        let c1 = record_lesson_completion(&conn, user, 1, date("2026-03-01")).unwrap();
        assert_eq!(c1, Completion::Recorded { xp: 10, streak: 1 });
        let c2 = record_lesson_completion(&conn, user, 2, date("2026-03-02")).unwrap();
        assert_eq!(c2, Completion::Recorded { xp: 20, streak: 2 });
        let same_day = record_lesson_completion(&conn, user, 3, date("2026-03-02")).unwrap();
        assert_eq!(same_day, Completion::Recorded { xp: 30, streak: 2 });
        let gap = record_lesson_completion(&conn, user, 4, date("2026-03-05")).unwrap();
        assert_eq!(gap, Completion::Recorded { xp: 40, streak: 1 });
    }

    #[test]
    fn completion_is_idempotent() {
        let (conn, user) = setup();
        record_lesson_completion(&conn, user, 1, date("2026-03-01")).unwrap();
        let again = record_lesson_completion(&conn, user, 1, date("2026-03-01")).unwrap();
        assert_eq!(again, Completion::AlreadyCompleted);
        assert_eq!(ensure_progress(&conn, user, date("2026-03-01")).unwrap().xp, 10);
        assert_eq!(completed_days(&conn, user).unwrap(), vec![1]);
    }

    #[test]
    fn concurrent_completions_record_once() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("race.db");
        let user = {
            let conn = crate::db::open_db(&path).unwrap();
            conn.execute(
                "INSERT INTO users (email, password_hash, created_at) VALUES ('a@b.c', 'x', '2026-01-01')",
                [],
            )
            .unwrap();
            conn.last_insert_rowid()
        };

        let handles: Vec<_> = (0..6)
            .map(|_| {
                let path = path.clone();
                std::thread::spawn(move || {
                    let conn = crate::db::open_db(&path).unwrap();
                    record_lesson_completion(&conn, user, 1, date("2026-03-01")).unwrap()
                })
            })
            .collect();
        let results: Vec<Completion> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let recorded = results
            .iter()
            .filter(|c| matches!(c, Completion::Recorded { .. }))
            .count();
        assert_eq!(recorded, 1, "{results:?}");
        assert!(results
            .iter()
            .all(|c| matches!(c, Completion::Recorded { .. } | Completion::AlreadyCompleted)));

        let conn = crate::db::open_db(&path).unwrap();
        assert_eq!(ensure_progress(&conn, user, date("2026-03-01")).unwrap().xp, 10);
    }

    #[test]
    fn missed_day_resets_streak() {
        let (conn, user) = setup();
        record_lesson_completion(&conn, user, 1, date("2026-03-01")).unwrap();
        let state = dashboard_state(&conn, user, date("2026-03-02")).unwrap();
        assert_eq!(state.streak, 1);
        let state = dashboard_state(&conn, user, date("2026-03-04")).unwrap();
        assert_eq!(state.streak, 0);
    }

    #[test]
    fn finished_steps_complete_the_day_automatically() {
        let (conn, user) = setup();
        finish_all_steps(&conn, user, 1);
        let state = dashboard_state(&conn, user, date("2026-03-01")).unwrap();
        assert!(state.lesson_completed);
        assert!(!state.can_complete);
        assert!(state.can_take_checkpoint);
        assert_eq!(state.xp, 10);
        assert_eq!(state.completed_days, vec![1]);
    }

    #[test]
    fn complete_today_requires_every_step() {
        let (conn, user) = setup();
        let err = complete_today(&conn, user, date("2026-03-01")).unwrap_err();
        assert_eq!(err.to_string(), "Finish all steps first.");
        finish_all_steps(&conn, user, 1);
        assert!(matches!(
            complete_today(&conn, user, date("2026-03-01")).unwrap(),
            Completion::Recorded { .. }
        ));
        assert!(is_lesson_ready_for_checkpoint(&conn, user, 1).unwrap());
        assert!(!is_lesson_ready_for_checkpoint(&conn, user, 2).unwrap());
    }

    #[test]
    fn rank_bands() {
        assert_eq!(rank_for(0).name, "Beginner Analyst");
        assert_eq!(rank_for(59).name, "Beginner Analyst");
        assert_eq!(rank_for(60).name, "Junior Analyst");
        let analyst = rank_for(240);
        assert_eq!(analyst.name, "Analyst");
        assert_eq!(analyst.progress_label(), "50% to 320 XP");
        let lead = rank_for(5_000);
        assert_eq!(lead.name, "Lead Analyst");
        assert_eq!(lead.percent(), 100);
    }
}
