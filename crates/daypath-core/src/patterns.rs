use crate::content::PatternContent;
use crate::error::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub id: String,
    pub day_number: u32,
    pub title: String,
    pub description: String,
    pub content: PatternContent,
    pub completed: bool,
}

const SELECT: &str = "SELECT p.id, p.day_number, p.title, p.description, p.content_json,
        c.completed_at IS NOT NULL
    FROM patterns p
    LEFT JOIN user_pattern_completions c
        ON c.pattern_id = p.id AND c.user_id = ?1";

fn parse_content(raw: &str) -> PatternContent {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::debug!("unreadable pattern content: {e}");
        PatternContent {
            intro: None,
            sections: Vec::new(),
            takeaway: None,
        }
    })
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<Pattern> {
    let content: String = row.get(4)?;
    Ok(Pattern {
        id: row.get(0)?,
        day_number: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        content: parse_content(&content),
        completed: row.get(5)?,
    })
}

pub fn patterns_for_day(conn: &Connection, user_id: i64, day: u32) -> Result<Vec<Pattern>> {
    let mut stmt = conn.prepare(&format!("{SELECT} WHERE p.day_number = ?2 ORDER BY p.id"))?;
    let patterns = stmt
        .query_map(params![user_id, day], from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(patterns)
}

pub fn pattern(conn: &Connection, user_id: i64, id: &str) -> Result<Option<Pattern>> {
    let found = conn
        .query_row(&format!("{SELECT} WHERE p.id = ?2"), params![user_id, id], from_row)
        .optional()?;
    Ok(found)
}

pub fn mark_pattern_completed(conn: &Connection, user_id: i64, id: &str) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO user_pattern_completions (user_id, pattern_id, completed_at)
         VALUES (?1, ?2, ?3)",
        params![user_id, id, Utc::now()],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PatternSection;
    use crate::db::open_db_in_memory;
    use crate::seed::ensure_content_seeded;

    #[test]
    fn patterns_round_trip_and_complete() {
        let conn = open_db_in_memory().unwrap();
        ensure_content_seeded(&conn).unwrap();
        conn.execute(
            "INSERT INTO users (email, password_hash, created_at) VALUES ('a@b.c', 'x', 'now')",
            [],
        )
        .unwrap();
        let user = conn.last_insert_rowid();

        let day = patterns_for_day(&conn, user, 1).unwrap();
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].title, "Good vs bad: Good questions vs bad questions");
        assert!(matches!(
            day[0].content.sections[0],
            PatternSection::Visual { .. }
        ));
        assert!(day[1]
            .content
            .takeaway
            .as_deref()
            .unwrap()
            .starts_with("What you'd tell your manager:"));

        mark_pattern_completed(&conn, user, "day-1-pattern-2").unwrap();
        mark_pattern_completed(&conn, user, "day-1-pattern-2").unwrap();
        let p = pattern(&conn, user, "day-1-pattern-2").unwrap().unwrap();
        assert!(p.completed);
        assert!(!pattern(&conn, user, "day-1-pattern-1").unwrap().unwrap().completed);
        assert!(pattern(&conn, user, "day-99-pattern-1").unwrap().is_none());
    }

    #[test]
    fn garbage_content_becomes_empty() {
        let content = parse_content("{broken");
        assert!(content.sections.is_empty());
        assert!(content.intro.is_none());
    }
}
