use super::{alert, back_home, choice_inputs, escape, graded_choices, hidden, kind_tag, page, verdict};
use daypath_core::checkpoints::{Attempt, CheckpointAnswer, CheckpointQuestion, CheckpointTest};
use std::collections::HashMap;

pub struct CheckpointView<'a> {
    pub test: &'a CheckpointTest,
    pub answers: &'a HashMap<String, CheckpointAnswer>,
    pub show: Option<&'a str>,
    pub error: Option<&'a str>,
    /// Finalize just ran; show the latest attempt.
    pub result_done: bool,
    pub latest_attempt: Option<&'a Attempt>,
    pub passed_already: bool,
}

/// Question on screen: the one named by `show` if answered, else the first
/// unanswered one.
pub fn current_question<'a>(
    test: &'a CheckpointTest,
    answers: &HashMap<String, CheckpointAnswer>,
    show: Option<&str>,
) -> Option<(usize, &'a CheckpointQuestion)> {
    let shown = show.and_then(|id| {
        test.questions
            .iter()
            .enumerate()
            .find(|(_, q)| q.id == id && answers.contains_key(&q.id))
    });
    shown.or_else(|| {
        test.questions
            .iter()
            .enumerate()
            .find(|(_, q)| !answers.contains_key(&q.id))
    })
}

fn day_form(action: &str, day: u32, label: &str, class: &str) -> String {
    format!(
        "<form method=\"post\" action=\"/checkpoint/{day}/{action}\"><button class=\"{class}\" type=\"submit\">{label}</button></form>"
    )
}

fn question_block(out: &mut String, day: u32, q: &CheckpointQuestion, answer: Option<&CheckpointAnswer>) {
    out.push_str(&format!(
        "<div class=\"card\">{tag}<p><strong>{prompt}</strong></p>",
        tag = kind_tag(q.kind),
        prompt = escape(&q.prompt)
    ));
    match answer {
        Some(a) => {
            out.push_str(&graded_choices(&q.choices, Some(q.correct_index), Some(a.selected_index)));
            out.push_str(&format!(
                "<div class=\"feedback\"><strong>{}</strong> {}</div>",
                verdict(a.is_correct),
                escape(&q.explanation)
            ));
            out.push_str(&day_form("continue", day, "Continue", "button"));
        }
        None => {
            out.push_str(&format!(
                "<form method=\"post\" action=\"/checkpoint/{day}/answer\">{id}{choices}<button type=\"submit\">Check</button></form>",
                id = hidden("question_id", &q.id),
                choices = choice_inputs("choice_index", &q.choices),
            ));
        }
    }
    out.push_str("</div>");
}

pub fn checkpoint_page(view: &CheckpointView<'_>) -> String {
    let test = view.test;
    let day = test.day_number;
    let total = test.questions.len();
    let current = current_question(test, view.answers, view.show);
    let index = current.map(|(i, _)| i + 1).unwrap_or(total);

    let mut body = String::from(back_home());
    body.push_str(&format!(
        "<div class=\"card\"><span class=\"pill\">Checkpoint</span><h1>{title}</h1>\
         <p class=\"note\">Score {pass}% or higher to unlock the next day.</p>\
         <div class=\"meta\"><span>Question {index} of {total}</span><span>{xp} XP on pass</span></div>{alert}</div>",
        title = escape(&test.title),
        pass = test.pass_percent,
        xp = test.xp_reward,
        alert = alert(view.error),
    ));

    let all_answered = view.answers.len() >= total;
    match (view.result_done, view.latest_attempt) {
        (true, Some(attempt)) => {
            let (heading, class) = if attempt.passed {
                ("Passed", "correct")
            } else {
                ("Not passed", "wrong")
            };
            let line = if attempt.score >= test.pass_percent { "meets" } else { "below" };
            body.push_str(&format!(
                "<div class=\"card feedback {class}\"><h2>{heading}</h2>\
                 <p>You scored {score}% ({line} the pass line).</p><div class=\"actions\">\
                 <a class=\"button\" href=\"/dashboard\">Back to home</a>",
                score = attempt.score,
            ));
            if !attempt.passed {
                body.push_str(&day_form("reset", day, "Retry checkpoint", "button outline"));
            }
            body.push_str("</div></div>");
        }
        _ if current.is_some_and(|(_, q)| view.answers.contains_key(&q.id)) || !all_answered => {
            if let Some((_, q)) = current {
                question_block(&mut body, day, q, view.answers.get(&q.id));
            }
        }
        _ => {
            let (heading, line) = if view.passed_already {
                ("Checkpoint passed", "You already passed this checkpoint.")
            } else {
                ("Ready for results", "Review your answers and see your score.")
            };
            body.push_str(&format!(
                "<div class=\"card\"><h2>{heading}</h2><p>{line}</p><div class=\"actions\">{}",
                day_form("finalize", day, "See results", "button")
            ));
            if view.passed_already {
                body.push_str("<a class=\"button outline\" href=\"/dashboard\">Back to home</a>");
            } else {
                body.push_str(&day_form("reset", day, "Start over", "button outline"));
            }
            body.push_str("</div></div>");
        }
    }
    page(&test.title, true, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use daypath_core::content::{Difficulty, QuestionKind};

    fn test_with(n: usize) -> CheckpointTest {
        CheckpointTest {
            id: "checkpoint-day-2".into(),
            day_number: 2,
            title: "Checkpoint Day 2: Metrics".into(),
            pass_percent: 70,
            xp_reward: 15,
            questions: (1..=n)
                .map(|k| CheckpointQuestion {
                    id: format!("checkpoint-day-2-q{k}"),
                    test_id: "checkpoint-day-2".into(),
                    sort_order: k as u32,
                    kind: QuestionKind::Mcq,
                    prompt: format!("Question {k}?"),
                    choices: vec!["yes".into(), "no".into()],
                    correct_index: 0,
                    explanation: "Because.".into(),
                    difficulty: Difficulty::Medium,
                })
                .collect(),
        }
    }

    fn answered(ids: &[&str]) -> HashMap<String, CheckpointAnswer> {
        ids.iter()
            .map(|id| {
                (
                    id.to_string(),
                    CheckpointAnswer {
                        selected_index: 1,
                        is_correct: false,
                    },
                )
            })
            .collect()
    }

    fn view<'a>(test: &'a CheckpointTest, answers: &'a HashMap<String, CheckpointAnswer>) -> CheckpointView<'a> {
        CheckpointView {
            test,
            answers,
            show: None,
            error: None,
            result_done: false,
            latest_attempt: None,
            passed_already: false,
        }
    }

    #[test]
    fn first_unanswered_is_current() {
        let test = test_with(3);
        let answers = answered(&["checkpoint-day-2-q1"]);
        let (i, q) = current_question(&test, &answers, None).unwrap();
        assert_eq!((i, q.id.as_str()), (1, "checkpoint-day-2-q2"));
        let (i, _) = current_question(&test, &answers, Some("checkpoint-day-2-q1")).unwrap();
        assert_eq!(i, 0);
        // An unanswered `show` falls back to the next open question.
        let (i, _) = current_question(&test, &answers, Some("checkpoint-day-2-q3")).unwrap();
        assert_eq!(i, 1);
    }

    #[test]
    fn shown_answer_has_feedback_and_continue() {
        let test = test_with(2);
        let answers = answered(&["checkpoint-day-2-q1"]);
        let mut v = view(&test, &answers);
        v.show = Some("checkpoint-day-2-q1");
        let html = checkpoint_page(&v);
        assert!(html.contains("Question 1 of 2"));
        assert!(html.contains("Not quite."));
        assert!(html.contains("/checkpoint/2/continue"));
    }

    #[test]
    fn all_answered_offers_results() {
        let test = test_with(2);
        let answers = answered(&["checkpoint-day-2-q1", "checkpoint-day-2-q2"]);
        let html = checkpoint_page(&view(&test, &answers));
        assert!(html.contains("Ready for results"));
        assert!(html.contains("/checkpoint/2/finalize"));
    }

    #[test]
    fn failed_attempt_offers_retry() {
        let test = test_with(2);
        let answers = answered(&["checkpoint-day-2-q1", "checkpoint-day-2-q2"]);
        let attempt = Attempt {
            id: 1,
            score: 50,
            passed: false,
            created_at: Utc::now(),
        };
        let mut v = view(&test, &answers);
        v.result_done = true;
        v.latest_attempt = Some(&attempt);
        let html = checkpoint_page(&v);
        assert!(html.contains("Not passed"));
        assert!(html.contains("You scored 50% (below the pass line)."));
        assert!(html.contains("Retry checkpoint"));
    }
}
