use crate::output::{print_json, print_table};
use anyhow::Context;
use daypath_core::config::Config;
use daypath_core::db::open_db;
use daypath_core::seed::{ensure_content_seeded, seeded_version, ContentCounts, SeedOutcome};
use serde::Serialize;

#[derive(Serialize)]
struct SeedReport<'a> {
    db_path: String,
    seeded: bool,
    version: Option<i64>,
    counts: &'a ContentCounts,
}

pub fn run(config: &Config, json: bool) -> anyhow::Result<()> {
    let conn = open_db(&config.db_path)
        .with_context(|| format!("opening {}", config.db_path.display()))?;
    let outcome = ensure_content_seeded(&conn).context("seeding content")?;
    let version = seeded_version(&conn)?;

    let (seeded, counts) = match &outcome {
        SeedOutcome::Seeded(counts) => (true, counts),
        SeedOutcome::Skipped(counts) => (false, counts),
    };

    if json {
        return print_json(&SeedReport {
            db_path: config.db_path.display().to_string(),
            seeded,
            version,
            counts,
        });
    }

    if seeded {
        println!("Seeded content into {}", config.db_path.display());
    } else {
        println!("Content already seeded in {}", config.db_path.display());
    }
    print_table(&["table", "rows"], count_rows(counts));
    Ok(())
}

fn count_rows(counts: &ContentCounts) -> Vec<Vec<String>> {
    [
        ("lessons", counts.lessons),
        ("lesson_steps", counts.lesson_steps),
        ("skill_checks", counts.skill_checks),
        ("patterns", counts.patterns),
        ("checkpoint_tests", counts.checkpoint_tests),
        ("checkpoint_questions", counts.checkpoint_questions),
    ]
    .into_iter()
    .map(|(table, n)| vec![table.to_string(), n.to_string()])
    .collect()
}
