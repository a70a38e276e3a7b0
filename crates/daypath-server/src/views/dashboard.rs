use super::skill_check::{check_card, CheckLinks, CheckResult};
use super::visual::render_visual;
use super::{
    alert, back_home, choice_inputs, encode_component, escape, graded_choices, hidden, kind_tag,
    page, verdict,
};
use daypath_core::content::{week_of, week_start, DAYS_PER_WEEK};
use daypath_core::lessons::{Lesson, LessonStep, StepProgress};
use daypath_core::library::LibraryCard;
use daypath_core::patterns::Pattern;
use daypath_core::progress::DashboardState;
use daypath_core::skill_checks::SkillCheck;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Shared step rendering
// ---------------------------------------------------------------------------

/// Body text keeps its line breaks; `- x` lines become a list.
fn body_text(out: &mut String, body: &str) {
    let mut in_list = false;
    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match line.strip_prefix("- ") {
            Some(item) => {
                if !in_list {
                    out.push_str("<ul>");
                    in_list = true;
                }
                out.push_str(&format!("<li>{}</li>", escape(item)));
            }
            None => {
                if in_list {
                    out.push_str("</ul>");
                    in_list = false;
                }
                out.push_str(&format!("<p>{}</p>", escape(line)));
            }
        }
    }
    if in_list {
        out.push_str("</ul>");
    }
}

fn reading_step(out: &mut String, step: &LessonStep) {
    if let Some(title) = &step.title {
        out.push_str(&format!("<h2>{}</h2>", escape(title)));
    }
    if let Some(body) = &step.body {
        body_text(out, body);
    }
    if let Some(visual) = &step.visual {
        out.push_str(&render_visual(visual));
    }
    if let Some(example) = &step.example {
        out.push_str(&format!("<p class=\"note\">{}</p>", escape(example)));
    }
}

fn question_head(out: &mut String, step: &LessonStep) {
    if let Some(kind) = step.kind.question_kind() {
        out.push_str(&kind_tag(kind));
    }
    if let Some(visual) = &step.visual {
        out.push_str(&render_visual(visual));
    }
    out.push_str(&format!(
        "<p><strong>{}</strong></p>",
        escape(step.prompt.as_deref().unwrap_or_default())
    ));
}

fn graded_step(out: &mut String, step: &LessonStep, progress: Option<&StepProgress>) {
    let selected = progress.and_then(|p| p.selected_index);
    out.push_str(&graded_choices(&step.choices, step.correct_index, selected));
    let correct = progress.and_then(|p| p.is_correct).unwrap_or(false);
    out.push_str(&format!(
        "<div class=\"feedback\"><strong>{}</strong> {}</div>",
        verdict(correct),
        escape(step.explanation.as_deref().unwrap_or_default())
    ));
}

fn continue_form(step_id: i64) -> String {
    format!(
        "<form method=\"post\" action=\"/dashboard/continue\">{}<button type=\"submit\">Continue</button></form>",
        hidden("step_id", &step_id.to_string())
    )
}

/// Step on screen: the one named by `show` if it has progress, else the
/// first step without progress.
pub fn current_step<'a>(
    lesson: &'a Lesson,
    progress: &HashMap<i64, StepProgress>,
    show: Option<i64>,
) -> Option<(usize, &'a LessonStep)> {
    let shown = show.and_then(|id| {
        lesson
            .steps
            .iter()
            .enumerate()
            .find(|(_, s)| s.id == id && progress.contains_key(&s.id))
    });
    shown.or_else(|| {
        lesson
            .steps
            .iter()
            .enumerate()
            .find(|(_, s)| !progress.contains_key(&s.id))
    })
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

pub struct HomeView<'a> {
    pub state: &'a DashboardState,
    pub lesson_title: Option<&'a str>,
    pub skill_checks: &'a [SkillCheck],
    pub patterns: &'a [Pattern],
    pub cards: &'a [LibraryCard],
    pub error: Option<&'a str>,
}

fn stats(out: &mut String, state: &DashboardState) {
    let rank = &state.rank;
    out.push_str(&format!(
        "<div class=\"card\"><div class=\"meta\"><span>XP <strong>{xp}</strong></span>\
         <span>Streak <strong>{streak}</strong></span><span>Rank <strong>{name}</strong></span></div>\
         <div class=\"xp-bar\"><div class=\"xp-fill\" style=\"width:{pct}%\"></div></div>\
         <p class=\"note\">{label}</p></div>",
        xp = state.xp,
        streak = state.streak,
        name = escape(rank.name),
        pct = rank.percent(),
        label = escape(&rank.progress_label()),
    ));
}

fn today_card(out: &mut String, view: &HomeView<'_>) {
    let state = view.state;
    let line = if state.completed_all {
        format!("You finished all {} days.", state.total_days)
    } else if state.lesson_completed {
        "Today is complete. Pass the checkpoint to unlock the next day.".to_string()
    } else {
        "One focused step keeps your momentum strong.".to_string()
    };
    out.push_str(&format!(
        "<div class=\"card\"><span class=\"pill\">Today</span><h2>Day {day} of {total}</h2>",
        day = state.day,
        total = state.total_days,
    ));
    if let Some(title) = view.lesson_title {
        out.push_str(&format!("<p><strong>{}</strong></p>", escape(title)));
    }
    out.push_str(&format!("<p>{}</p><div class=\"actions\">", escape(&line)));
    if !state.completed_all {
        out.push_str("<a class=\"button\" href=\"/dashboard?view=lesson\">Continue learning</a>");
    }
    if state.can_take_checkpoint {
        out.push_str(&format!(
            "<a class=\"button outline\" href=\"/checkpoint/{}\">Take checkpoint</a>",
            state.day
        ));
    }
    out.push_str("</div></div>");
}

fn week_grid(out: &mut String, state: &DashboardState) {
    let start = week_start(state.day);
    out.push_str(&format!(
        "<div class=\"card\"><span class=\"pill\">Weekly path</span><h2>Week {week}</h2>\
         <p class=\"note\">Days {start}-{end}</p><div class=\"grid\">",
        week = week_of(state.day),
        end = start + DAYS_PER_WEEK - 1,
    ));
    for day in start..start + DAYS_PER_WEEK {
        let done = state.completed_days.contains(&day);
        if done {
            out.push_str(&format!(
                "<a class=\"tile done\" href=\"/dashboard?view=review&amp;day={day}\">Day {day}<br>Done</a>"
            ));
        } else if day == state.day {
            out.push_str(&format!("<div class=\"tile current\">Day {day}<br>Today</div>"));
        } else {
            out.push_str(&format!("<div class=\"tile locked\">Day {day}<br>Locked</div>"));
        }
    }
    out.push_str("</div></div>");
}

pub fn home_page(view: &HomeView<'_>) -> String {
    let mut body = String::from("<h1>Welcome back</h1>");
    body.push_str(&alert(view.error));
    stats(&mut body, view.state);
    today_card(&mut body, view);
    week_grid(&mut body, view.state);

    body.push_str("<div class=\"card\"><span class=\"pill\">Mini challenges</span><h2>Skill checks</h2><div class=\"grid\">");
    for check in view.skill_checks {
        body.push_str(&format!(
            "<a class=\"tile\" href=\"/dashboard?view=skill&amp;check={id}\"><strong>{title}</strong><br>\
             <span class=\"note\">+{xp} XP | {status}</span></a>",
            id = encode_component(&check.id),
            title = escape(&check.title),
            xp = check.xp_reward,
            status = if check.completed { "Completed" } else { "Try now" },
        ));
    }
    body.push_str("</div></div>");

    body.push_str("<div class=\"card\"><span class=\"pill\">Patterns</span><h2>Today's reading</h2><div class=\"grid\">");
    for pattern in view.patterns {
        body.push_str(&format!(
            "<a class=\"tile\" href=\"/patterns/{id}\"><strong>{title}</strong><br><span class=\"note\">{status}</span></a>",
            id = encode_component(&pattern.id),
            title = escape(&pattern.title),
            status = if pattern.completed { "Read" } else { "Quick read" },
        ));
    }
    body.push_str("</div></div>");

    body.push_str("<div class=\"card\"><span class=\"pill\">Examples library</span><h2>Ready-to-use patterns</h2><div class=\"grid\">");
    for card in view.cards {
        body.push_str(&format!(
            "<a class=\"tile\" href=\"/dashboard?view=example&amp;example={id}\"><strong>{title}</strong><br>\
             <span class=\"note\">{blurb}</span></a>",
            id = encode_component(card.id),
            title = escape(card.title),
            blurb = escape(card.blurb),
        ));
    }
    body.push_str("</div></div>");
    page("Dashboard", true, &body)
}

// ---------------------------------------------------------------------------
// Lesson
// ---------------------------------------------------------------------------

pub struct LessonView<'a> {
    pub state: &'a DashboardState,
    pub lesson: &'a Lesson,
    pub progress: &'a HashMap<i64, StepProgress>,
    pub show: Option<i64>,
    pub error: Option<&'a str>,
}

pub fn lesson_page(view: &LessonView<'_>) -> String {
    let (state, lesson) = (view.state, view.lesson);
    let total = lesson.steps.len();
    let current = current_step(lesson, view.progress, view.show);
    let index = current.map(|(i, _)| i + 1).unwrap_or(total);

    let mut body = String::from(back_home());
    body.push_str(&format!(
        "<div class=\"card\"><span class=\"pill\">Day {day} of {days}</span><h1>{title}</h1><p>{goal}</p>\
         <div class=\"meta\"><span>Step {index} of {total}</span><span>{xp} XP | {streak} streak</span></div>{alert}",
        day = state.day,
        days = state.total_days,
        title = escape(&lesson.title),
        goal = escape(&lesson.micro_goal),
        xp = state.xp,
        streak = state.streak,
        alert = alert(view.error),
    ));

    if state.completed_all {
        body.push_str(&format!(
            "<p class=\"note\">You finished all {} days. Amazing work.</p>",
            state.total_days
        ));
    } else if let Some((_, step)) = current {
        body.push_str("<div class=\"card\">");
        match view.progress.get(&step.id) {
            _ if !step.kind.is_question() => {
                reading_step(&mut body, step);
                body.push_str(&continue_form(step.id));
            }
            Some(p) => {
                question_head(&mut body, step);
                graded_step(&mut body, step, Some(p));
                body.push_str(&continue_form(step.id));
            }
            None => {
                question_head(&mut body, step);
                body.push_str(&format!(
                    "<form method=\"post\" action=\"/dashboard/answer\">{id}{choices}<button type=\"submit\">Check</button></form>",
                    id = hidden("step_id", &step.id.to_string()),
                    choices = choice_inputs("answer_index", &step.choices),
                ));
            }
        }
        body.push_str("</div>");
    } else if state.lesson_completed {
        body.push_str("<p class=\"note\">Today is complete.</p><div class=\"actions\">");
        if state.can_take_checkpoint {
            body.push_str(&format!(
                "<a class=\"button\" href=\"/checkpoint/{}\">Take the checkpoint</a>",
                state.day
            ));
        }
        body.push_str(&format!(
            "<a class=\"button outline\" href=\"/dashboard?view=review&amp;day={}\">Review</a></div>",
            lesson.day
        ));
    } else {
        body.push_str(&format!(
            "<form method=\"post\" action=\"/dashboard/complete\"><button type=\"submit\">Finish day {}</button></form>",
            lesson.day
        ));
    }
    body.push_str("</div>");
    page(&lesson.title, true, &body)
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

/// Read-only walk through a finished day. `step` is 1-based and clamped.
pub fn review_page(lesson: &Lesson, progress: &HashMap<i64, StepProgress>, step: usize) -> String {
    let total = lesson.steps.len();
    let index = step.clamp(1, total.max(1));

    let mut body = String::from(back_home());
    body.push_str(&format!(
        "<div class=\"card\"><span class=\"pill\">Day {day} recap</span><h1>{title}</h1><p>{goal}</p>\
         <div class=\"meta\"><span>Step {index} of {total}</span><span>Read-only</span></div>",
        day = lesson.day,
        title = escape(&lesson.title),
        goal = escape(&lesson.micro_goal),
    ));
    if let Some(current) = lesson.steps.get(index - 1) {
        body.push_str("<div class=\"card\">");
        if current.kind.is_question() {
            question_head(&mut body, current);
            graded_step(&mut body, current, progress.get(&current.id));
        } else {
            reading_step(&mut body, current);
        }
        body.push_str("</div>");
    }

    body.push_str("<div class=\"actions\">");
    if index > 1 {
        body.push_str(&format!(
            "<a class=\"button outline\" href=\"/dashboard?view=review&amp;day={}&amp;step={}\">Previous</a>",
            lesson.day,
            index - 1
        ));
    }
    if index < total {
        body.push_str(&format!(
            "<a class=\"button\" href=\"/dashboard?view=review&amp;day={}&amp;step={}\">Next</a>",
            lesson.day,
            index + 1
        ));
    } else {
        body.push_str("<a class=\"button\" href=\"/dashboard\">Back to home</a>");
    }
    body.push_str("</div></div>");
    page(&lesson.title, true, &body)
}

// ---------------------------------------------------------------------------
// Skill checks and examples
// ---------------------------------------------------------------------------

pub fn skill_page(check: &SkillCheck, result: Option<CheckResult>, read_only: bool) -> String {
    let retry = format!("/dashboard?view=skill&check={}", encode_component(&check.id));
    let links = CheckLinks {
        action: "/dashboard/skill",
        retry: &retry,
    };
    let body = format!("{}{}", back_home(), check_card(check, result, read_only, &links));
    page(&check.title, true, &body)
}

pub fn example_page(card: &LibraryCard) -> String {
    let mut body = String::from(back_home());
    body.push_str(&format!(
        "<div class=\"card\"><span class=\"pill\">Example</span><h1>{}</h1><p>{}</p>",
        escape(card.title),
        escape(card.blurb)
    ));
    body.push_str(&render_visual(&card.visual));
    body.push_str("<ul>");
    for point in card.points {
        body.push_str(&format!("<li>{}</li>", escape(point)));
    }
    body.push_str("</ul></div>");
    page(card.title, true, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use daypath_core::content::StepKind;
    use daypath_core::library::library_card;
    use daypath_core::progress::rank_for;

    fn step(id: i64, kind: StepKind) -> LessonStep {
        LessonStep {
            id,
            lesson_day: 1,
            sort_order: id as u32,
            kind,
            title: Some(format!("Step {id}")),
            body: Some("Line one\n- first\n- second".into()),
            example: None,
            prompt: Some("Pick one".into()),
            choices: vec!["a".into(), "b".into()],
            correct_index: Some(0),
            explanation: Some("Because a.".into()),
            visual: None,
        }
    }

    fn lesson() -> Lesson {
        Lesson {
            day: 1,
            title: "Day 1: Questions".into(),
            micro_goal: "Ask better questions".into(),
            recap_bullets: vec![],
            real_world_line: String::new(),
            steps: vec![step(1, StepKind::Learn), step(2, StepKind::Mcq), step(3, StepKind::Learn)],
        }
    }

    fn state() -> DashboardState {
        DashboardState {
            day: 1,
            total_days: 84,
            xp: 0,
            streak: 0,
            today: chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            lesson_completed: false,
            checkpoint_passed: false,
            can_complete: true,
            can_take_checkpoint: false,
            completed_all: false,
            completed_days: vec![],
            rank: rank_for(0),
        }
    }

    fn answered(id: i64, correct: bool) -> (i64, StepProgress) {
        (
            id,
            StepProgress {
                selected_index: Some(if correct { 0 } else { 1 }),
                is_correct: Some(correct),
            },
        )
    }

    #[test]
    fn current_step_prefers_shown_answered_step() {
        let lesson = lesson();
        let progress: HashMap<_, _> = [(1, StepProgress { selected_index: None, is_correct: None }), answered(2, false)]
            .into_iter()
            .collect();
        assert_eq!(current_step(&lesson, &progress, Some(2)).map(|(i, _)| i), Some(1));
        assert_eq!(current_step(&lesson, &progress, None).map(|(i, _)| i), Some(2));
        assert_eq!(current_step(&lesson, &progress, Some(3)).map(|(i, _)| i), Some(2));
    }

    #[test]
    fn lesson_page_shows_question_form() {
        let lesson = lesson();
        let progress: HashMap<_, _> = [(1, StepProgress { selected_index: None, is_correct: None })]
            .into_iter()
            .collect();
        let st = state();
        let html = lesson_page(&LessonView {
            state: &st,
            lesson: &lesson,
            progress: &progress,
            show: None,
            error: None,
        });
        assert!(html.contains("Step 2 of 3"));
        assert!(html.contains("action=\"/dashboard/answer\""));
        assert!(html.contains("name=\"answer_index\""));
    }

    #[test]
    fn lesson_page_shows_feedback_for_shown_step() {
        let lesson = lesson();
        let progress: HashMap<_, _> = [answered(2, true)].into_iter().collect();
        let st = state();
        let html = lesson_page(&LessonView {
            state: &st,
            lesson: &lesson,
            progress: &progress,
            show: Some(2),
            error: Some("Finish all steps first."),
        });
        assert!(html.contains("<strong>Correct.</strong> Because a."));
        assert!(html.contains("Finish all steps first."));
        assert!(html.contains("action=\"/dashboard/continue\""));
    }

    #[test]
    fn reading_step_lists_dash_lines() {
        let mut out = String::new();
        reading_step(&mut out, &step(1, StepKind::Learn));
        assert!(out.contains("<p>Line one</p><ul><li>first</li><li>second</li></ul>"));
    }

    #[test]
    fn review_clamps_and_links() {
        let lesson = lesson();
        let progress = HashMap::new();
        let html = review_page(&lesson, &progress, 0);
        assert!(html.contains("Step 1 of 3"));
        assert!(html.contains("step=2\">Next"));
        assert!(!html.contains("Previous"));
        let html = review_page(&lesson, &progress, 9);
        assert!(html.contains("Step 3 of 3"));
        assert!(html.contains("Back to home</a></div>"));
    }

    #[test]
    fn week_grid_marks_days() {
        let mut st = state();
        st.day = 9;
        st.completed_days = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let mut out = String::new();
        week_grid(&mut out, &st);
        assert!(out.contains("Week 2"));
        assert!(out.contains("Days 8-14"));
        assert!(out.contains("day=8\">Day 8<br>Done"));
        assert!(out.contains("Day 9<br>Today"));
        assert!(out.contains("Day 14<br>Locked"));
    }

    #[test]
    fn example_page_renders_card_visual() {
        let html = example_page(&library_card("cleaning").unwrap());
        assert!(html.contains("Clean vs messy data"));
        assert!(html.contains("<table class=\"visual\">"));
        assert!(html.contains("<li>Remove duplicates before analysis.</li>"));
    }
}
