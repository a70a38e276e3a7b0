use super::{choice_inputs, escape, graded_choices, hidden, kind_tag, page};
use daypath_core::skill_checks::SkillCheck;

/// Answer outcome carried in `?result=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    Correct,
    Wrong,
}

impl CheckResult {
    pub fn parse(s: Option<&str>) -> Option<Self> {
        match s? {
            "correct" => Some(CheckResult::Correct),
            "wrong" => Some(CheckResult::Wrong),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CheckResult::Correct => "correct",
            CheckResult::Wrong => "wrong",
        }
    }
}

/// Where the card posts and links, so it can live inline on the dashboard
/// or on its own page.
pub struct CheckLinks<'a> {
    pub action: &'a str,
    pub retry: &'a str,
}

pub fn check_card(
    check: &SkillCheck,
    result: Option<CheckResult>,
    read_only: bool,
    links: &CheckLinks<'_>,
) -> String {
    let status = if check.completed { "Completed" } else { "Try now" };
    let mut out = format!(
        "<div class=\"card\"><span class=\"pill\">Skill check</span> {tag} \
         <span class=\"note\">+{xp} XP | {status}</span>\
         <h1>{title}</h1><p>{prompt}</p>",
        tag = kind_tag(check.kind),
        xp = check.xp_reward,
        title = escape(&check.title),
        prompt = escape(&check.prompt),
    );

    if read_only {
        let selected = check.last_answer.map(|(s, _)| s);
        out.push_str(&graded_choices(&check.choices, Some(check.correct_index), selected));
        out.push_str(&format!(
            "<div class=\"feedback\"><p class=\"note\">This day is behind you. Answers are read-only.</p>\
             <p>{}</p></div><div class=\"actions\"><a class=\"button\" href=\"/dashboard\">Back to home</a></div>",
            escape(&check.explanation)
        ));
    } else if let Some(result) = result {
        let title = match result {
            CheckResult::Correct => "Correct",
            CheckResult::Wrong => "Not quite",
        };
        let retry = if result == CheckResult::Wrong {
            format!(
                "<a class=\"button outline\" href=\"{}\">Try again</a>",
                escape(links.retry)
            )
        } else {
            String::new()
        };
        out.push_str(&format!(
            "<div class=\"feedback {class}\"><h2>{title}</h2><p>{explanation}</p></div>\
             <div class=\"actions\"><a class=\"button\" href=\"/dashboard\">Continue</a>{retry}</div>",
            class = result.as_str(),
            explanation = escape(&check.explanation),
        ));
    } else {
        out.push_str(&format!(
            "<form method=\"post\" action=\"{action}\">{id}{choices}<button type=\"submit\">Check</button></form>",
            action = escape(links.action),
            id = hidden("check_id", &check.id),
            choices = choice_inputs("choice_index", &check.choices),
        ));
    }
    out.push_str("</div>");
    out
}

/// Standalone `/skill-check/{id}` page.
pub fn skill_check_page(check: &SkillCheck, result: Option<CheckResult>, read_only: bool) -> String {
    let href = format!("/skill-check/{}", super::encode_component(&check.id));
    let links = CheckLinks {
        action: &href,
        retry: &href,
    };
    let body = format!("{}{}", super::back_home(), check_card(check, result, read_only, &links));
    page(&check.title, true, &body)
}
