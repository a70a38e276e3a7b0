use super::escape;
use daypath_core::visual::Visual;

const LINE_WIDTH: f64 = 320.0;
const LINE_HEIGHT: f64 = 120.0;
const LINE_PAD: f64 = 10.0;

pub fn render_visual(visual: &Visual) -> String {
    let mut out = String::from("<figure class=\"visual\">");
    match visual {
        Visual::Table { headers, rows, .. } => render_table(&mut out, visual, headers, rows),
        Visual::Bar { labels, values, .. } => render_bars(&mut out, labels, values),
        Visual::Line { labels, values, .. } => render_line(&mut out, labels, values),
    }
    if let Some(note) = visual.note() {
        out.push_str(&format!("<figcaption class=\"note\">{}</figcaption>", escape(note)));
    }
    out.push_str("</figure>");
    out
}

fn render_table(out: &mut String, visual: &Visual, headers: &[String], rows: &[Vec<String>]) {
    out.push_str("<table class=\"visual\"><thead><tr>");
    for h in headers {
        out.push_str(&format!("<th>{}</th>", escape(h)));
    }
    out.push_str("</tr></thead><tbody>");
    for (r, row) in rows.iter().enumerate() {
        out.push_str("<tr>");
        for (c, cell) in row.iter().enumerate() {
            match visual.highlight_at(r, c) {
                Some(hl) => {
                    out.push_str(&format!("<td class=\"hl\">{}", escape(cell)));
                    if let Some(label) = &hl.label {
                        out.push_str(&format!("<span class=\"tag\">{}</span>", escape(label)));
                    }
                    out.push_str("</td>");
                }
                None => {
                    out.push_str(&format!("<td>{}</td>", escape(cell)));
                }
            }
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

fn render_bars(out: &mut String, labels: &[String], values: &[f64]) {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    out.push_str("<div class=\"bars\">");
    for (label, value) in labels.iter().zip(values) {
        let width = if max > 0.0 { (value / max * 100.0).max(0.0) } else { 0.0 };
        out.push_str(&format!(
            "<div class=\"bar\"><span>{}</span><div style=\"width:{width:.0}%\"></div><em>{}</em></div>",
            escape(label),
            format_value(*value),
        ));
    }
    out.push_str("</div>");
}

/// Plot points scaled into the SVG box, lowest value at the bottom edge.
fn line_points(values: &[f64]) -> Vec<(f64, f64)> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if max > min { max - min } else { 1.0 };
    let step = if values.len() > 1 {
        (LINE_WIDTH - 2.0 * LINE_PAD) / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = LINE_PAD + step * i as f64;
            let y = LINE_HEIGHT - LINE_PAD - (v - min) / span * (LINE_HEIGHT - 2.0 * LINE_PAD);
            (x, y)
        })
        .collect()
}

fn render_line(out: &mut String, labels: &[String], values: &[f64]) {
    let points = line_points(values);
    let path: Vec<String> = points.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect();
    out.push_str(&format!(
        "<svg viewBox=\"0 0 {LINE_WIDTH} {LINE_HEIGHT}\" width=\"{LINE_WIDTH}\" height=\"{LINE_HEIGHT}\" role=\"img\">\
         <polyline fill=\"none\" stroke=\"#2f4bb9\" stroke-width=\"2\" points=\"{}\"/>",
        path.join(" ")
    ));
    for (x, y) in &points {
        out.push_str(&format!("<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"3\" fill=\"#2f4bb9\"/>"));
    }
    out.push_str("</svg><div class=\"meta\">");
    for (label, value) in labels.iter().zip(values) {
        out.push_str(&format!("<span>{} {}</span>", escape(label), format_value(*value)));
    }
    out.push_str("</div>");
}

fn format_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daypath_core::visual::Highlight;

    #[test]
    fn table_marks_highlighted_cell() {
        let visual = Visual::Table {
            headers: vec!["region".into(), "revenue".into()],
            rows: vec![vec!["A".into(), "52".into()], vec!["<C>".into(), "58".into()]],
            highlights: vec![Highlight {
                r: 1,
                c: 1,
                label: Some("highest".into()),
            }],
            note: Some("Example snapshot".into()),
        };
        let html = render_visual(&visual);
        assert!(html.contains("<th>region</th>"));
        assert!(html.contains("<td>&lt;C&gt;</td>"));
        assert!(html.contains("<td class=\"hl\">58<span class=\"tag\">highest</span></td>"));
        assert!(html.contains("Example snapshot"));
    }

    #[test]
    fn bars_scale_to_largest() {
        let visual = Visual::Bar {
            labels: vec!["W1".into(), "W2".into()],
            values: vec![50.0, 100.0],
            note: None,
        };
        let html = render_visual(&visual);
        assert!(html.contains("width:50%"));
        assert!(html.contains("width:100%"));
        assert!(!html.contains("figcaption"));
    }

    #[test]
    fn line_spans_the_box() {
        let points = line_points(&[42.0, 45.0, 51.0]);
        assert_eq!(points[0], (LINE_PAD, LINE_HEIGHT - LINE_PAD));
        assert_eq!(points[2], (LINE_WIDTH - LINE_PAD, LINE_PAD));
        let html = render_visual(&Visual::Line {
            labels: vec!["Jan".into()],
            values: vec![1.5],
            note: None,
        });
        assert!(html.contains("<polyline"));
        assert!(html.contains("Jan 1.5"));
    }
}
