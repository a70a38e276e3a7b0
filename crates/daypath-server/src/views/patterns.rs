use super::visual::render_visual;
use super::{back_home, encode_component, escape, page};
use daypath_core::content::PatternSection;
use daypath_core::patterns::Pattern;

fn section(out: &mut String, section: &PatternSection) {
    out.push_str("<section class=\"card\">");
    match section {
        PatternSection::Text {
            title,
            body,
            bullets,
        } => {
            if let Some(title) = title {
                out.push_str(&format!("<h3>{}</h3>", escape(title)));
            }
            out.push_str(&format!("<p>{}</p>", escape(body)));
            if !bullets.is_empty() {
                out.push_str("<ul>");
                for b in bullets {
                    out.push_str(&format!("<li>{}</li>", escape(b)));
                }
                out.push_str("</ul>");
            }
        }
        PatternSection::Visual { title, visual } => {
            if let Some(title) = title {
                out.push_str(&format!("<h3>{}</h3>", escape(title)));
            }
            out.push_str(&render_visual(visual));
        }
    }
    out.push_str("</section>");
}

pub fn pattern_page(pattern: &Pattern, just_finished: bool) -> String {
    let mut body = String::from(back_home());
    body.push_str(&format!(
        "<div class=\"card\"><span class=\"pill\">Pattern | Day {day}</span><h1>{title}</h1><p>{desc}</p>",
        day = pattern.day_number,
        title = escape(&pattern.title),
        desc = escape(&pattern.description),
    ));
    if let Some(intro) = &pattern.content.intro {
        body.push_str(&format!("<p class=\"note\">{}</p>", escape(intro)));
    }
    body.push_str("</div>");

    for s in &pattern.content.sections {
        section(&mut body, s);
    }
    if let Some(takeaway) = &pattern.content.takeaway {
        body.push_str(&format!("<div class=\"card\"><strong>{}</strong></div>", escape(takeaway)));
    }

    if just_finished || pattern.completed {
        body.push_str(
            "<div class=\"card\"><p>Pattern saved to your finished list.</p>\
             <a class=\"button\" href=\"/dashboard\">Back to home</a></div>",
        );
    } else {
        body.push_str(&format!(
            "<form method=\"post\" action=\"/patterns/{}/finish\"><button type=\"submit\">Mark as read</button></form>",
            encode_component(&pattern.id)
        ));
    }
    page(&pattern.title, true, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use daypath_core::content::PatternContent;

    fn pattern(completed: bool) -> Pattern {
        Pattern {
            id: "day-3-pattern-2".into(),
            day_number: 3,
            title: "Manager update template".into(),
            description: "Three lines".into(),
            content: PatternContent {
                intro: Some("Keep it short.".into()),
                sections: vec![PatternSection::Text {
                    title: Some("Template".into()),
                    body: "Metric, change, action.".into(),
                    bullets: vec!["Lead with the decision".into()],
                }],
                takeaway: Some("What you'd tell your manager: ship it".into()),
            },
            completed,
        }
    }

    #[test]
    fn unread_pattern_offers_finish() {
        let html = pattern_page(&pattern(false), false);
        assert!(html.contains("action=\"/patterns/day-3-pattern-2/finish\""));
        assert!(html.contains("<li>Lead with the decision</li>"));
        assert!(html.contains("What you&#39;d tell your manager: ship it"));
    }

    #[test]
    fn finished_pattern_hides_form() {
        let html = pattern_page(&pattern(true), false);
        assert!(!html.contains("/finish"));
        assert!(html.contains("finished list"));
    }
}
