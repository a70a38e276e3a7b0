//! HTML rendering. Pages are plain strings; every piece of user-visible
//! text passes through [`escape`].

pub mod auth;
pub mod checkpoint;
pub mod dashboard;
pub mod patterns;
pub mod skill_check;
pub mod visual;

use axum::http::StatusCode;
use daypath_core::content::QuestionKind;

const STYLE: &str = r#"
body{font-family:system-ui,sans-serif;margin:0;background:#f6f7fb;color:#1d2230}
main{max-width:760px;margin:0 auto;padding:1.5rem}
.card{background:#fff;border-radius:12px;padding:1.25rem;margin:1rem 0;box-shadow:0 1px 3px #0001}
.pill{display:inline-block;background:#e6ecff;color:#2f4bb9;border-radius:99px;padding:.15rem .7rem;font-size:.85rem}
.alert{background:#ffe9e6;color:#9b2a17;border-radius:8px;padding:.6rem .9rem;margin:.75rem 0}
.note{color:#5a6275;font-size:.9rem}
.meta{display:flex;justify-content:space-between;color:#5a6275;font-size:.9rem}
.button,button{background:#2f4bb9;color:#fff;border:0;border-radius:8px;padding:.55rem 1.1rem;cursor:pointer;text-decoration:none;display:inline-block}
.button.outline{background:#fff;color:#2f4bb9;border:1px solid #2f4bb9}
.choice{display:block;border:1px solid #d5d9e6;border-radius:8px;padding:.55rem .8rem;margin:.4rem 0}
.choice.correct{border-color:#2e9b55;background:#e9f8ef}
.choice.incorrect{border-color:#c8442c;background:#fdeeea}
.feedback{margin:.8rem 0}
.actions{display:flex;gap:.6rem;margin-top:.8rem}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:.75rem}
.tile{border-radius:8px;padding:.6rem;background:#eef0f5;text-align:center;text-decoration:none;color:inherit}
.tile.done{background:#e9f8ef}.tile.current{background:#e6ecff;font-weight:600}.tile.locked{opacity:.55}
.xp-bar{background:#eef0f5;border-radius:99px;height:8px;overflow:hidden}
.xp-fill{background:#2f4bb9;height:100%}
table.visual{border-collapse:collapse;margin:.5rem 0}
table.visual th,table.visual td{border:1px solid #d5d9e6;padding:.3rem .7rem}
td.hl{background:#fff4cc;font-weight:600}
.tag{font-size:.75rem;color:#8a6d00;margin-left:.4rem}
.bars .bar{display:flex;align-items:center;gap:.5rem;margin:.2rem 0}
.bars .bar span{width:5rem;font-size:.85rem}
.bars .bar div{background:#2f4bb9;height:14px;border-radius:3px}
"#;

/// HTML-escape text for element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Percent-encode a query or path component. Unreserved characters pass
/// through; spaces become `%20`.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => {
                out.push_str(&format!("%{b:02X}"));
            }
        }
    }
    out
}

/// Full document around `body`. `signed_in` adds the sign-out button.
pub fn page(title: &str, signed_in: bool, body: &str) -> String {
    let nav = if signed_in {
        r#"<form method="post" action="/logout" style="float:right"><button class="button outline" type="submit">Sign out</button></form>"#
    } else {
        ""
    };
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title} | daypath</title><style>{STYLE}</style></head>\
         <body><main>{nav}{body}</main></body></html>",
        title = escape(title),
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<div class=\"card\"><span class=\"pill\">{code}</span><h1>{reason}</h1>\
         <p>{message}</p><a class=\"button\" href=\"/dashboard\">Back to home</a></div>",
        code = status.as_u16(),
        reason = escape(status.canonical_reason().unwrap_or("Error")),
        message = escape(message),
    );
    page("Error", false, &body)
}

pub(crate) fn alert(message: Option<&str>) -> String {
    match message.filter(|m| !m.is_empty()) {
        Some(m) => format!("<div class=\"alert\">{}</div>", escape(m)),
        None => String::new(),
    }
}

pub(crate) fn back_home() -> &'static str {
    r#"<p><a href="/dashboard">Back to home</a></p>"#
}

pub(crate) fn kind_tag(kind: QuestionKind) -> String {
    format!("<span class=\"pill\">{}</span>", escape(kind.label()))
}

pub(crate) fn verdict(is_correct: bool) -> &'static str {
    if is_correct {
        "Correct."
    } else {
        "Not quite."
    }
}

/// Choices with the right one and the user's pick marked, as shown after
/// an answer.
pub(crate) fn graded_choices(choices: &[String], correct: Option<usize>, selected: Option<usize>) -> String {
    let mut out = String::new();
    for (i, choice) in choices.iter().enumerate() {
        let class = if Some(i) == correct {
            "choice correct"
        } else if Some(i) == selected {
            "choice incorrect"
        } else {
            "choice"
        };
        out.push_str(&format!("<div class=\"{class}\">{}</div>", escape(choice)));
    }
    out
}

/// Radio inputs for an unanswered question.
pub(crate) fn choice_inputs(name: &str, choices: &[String]) -> String {
    let mut out = String::new();
    for (i, choice) in choices.iter().enumerate() {
        out.push_str(&format!(
            "<label class=\"choice\"><input type=\"radio\" name=\"{name}\" value=\"{i}\" required> {}</label>",
            escape(choice)
        ));
    }
    out
}

pub(crate) fn hidden(name: &str, value: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"{name}\" value=\"{}\">",
        escape(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_and_quotes() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jo'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jo&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn encode_uses_percent_twenty() {
        assert_eq!(
            encode_component("Finish all steps first."),
            "Finish%20all%20steps%20first."
        );
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("day-1-skill-2"), "day-1-skill-2");
    }

    #[test]
    fn graded_choices_mark_right_and_wrong() {
        let choices = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let html = graded_choices(&choices, Some(0), Some(2));
        assert!(html.contains(r#"<div class="choice correct">a</div>"#));
        assert!(html.contains(r#"<div class="choice">b</div>"#));
        assert!(html.contains(r#"<div class="choice incorrect">c</div>"#));
    }

    #[test]
    fn error_page_escapes_message() {
        let html = error_page(StatusCode::NOT_FOUND, "<nope>");
        assert!(html.contains("&lt;nope&gt;"));
        assert!(html.contains("Not Found"));
    }
}
