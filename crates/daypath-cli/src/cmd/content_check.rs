use crate::output::print_json;
use anyhow::bail;
use daypath_core::content::{build_program_content, lint_program_content};
use serde::Serialize;

#[derive(Serialize)]
struct IssueRow<'a> {
    day: u32,
    issues: &'a [String],
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let content = build_program_content();
    let issues = lint_program_content(&content);

    if json {
        let rows: Vec<IssueRow<'_>> = issues
            .iter()
            .map(|i| IssueRow {
                day: i.day,
                issues: &i.issues,
            })
            .collect();
        print_json(&rows)?;
    } else if issues.is_empty() {
        println!("Content check passed.");
        println!(
            "{} lessons, {} skill checks, {} patterns, {} checkpoints",
            content.lessons.len(),
            content.skill_checks.len(),
            content.patterns.len(),
            content.checkpoints.len()
        );
    } else {
        for issue in &issues {
            println!("{issue}");
        }
    }

    if !issues.is_empty() {
        bail!("content check failed for {} day(s)", issues.len());
    }
    Ok(())
}
