use serde::{Deserialize, Serialize};

/// A cell callout inside a table visual. `r` and `c` are zero-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub r: usize,
    pub c: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Small illustrative chart or table attached to a lesson step or pattern
/// section. Stored as JSON tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Visual {
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        highlights: Vec<Highlight>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Bar {
        labels: Vec<String>,
        values: Vec<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Line {
        labels: Vec<String>,
        values: Vec<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl Visual {
    pub fn is_table(&self) -> bool {
        matches!(self, Visual::Table { .. })
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            Visual::Table { note, .. } | Visual::Bar { note, .. } | Visual::Line { note, .. } => {
                note.as_deref()
            }
        }
    }

    /// Highlight label for a table cell, if any.
    pub fn highlight_at(&self, r: usize, c: usize) -> Option<&Highlight> {
        match self {
            Visual::Table { highlights, .. } => highlights.iter().find(|h| h.r == r && h.c == c),
            _ => None,
        }
    }
}

/// Parse a stored visual. Anything missing, malformed or of an unknown
/// type is treated as "no visual".
pub fn parse_visual(raw: Option<&str>) -> Option<Visual> {
    let raw = raw?.trim();
    if raw.is_empty() || raw == "null" {
        return None;
    }
    match serde_json::from_str::<Visual>(raw) {
        Ok(visual) => Some(visual),
        Err(e) => {
            tracing::debug!("ignoring unreadable visual: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_table_with_highlight() {
        let raw = r#"{"type":"table","headers":["region","revenue"],"rows":[["A","52"]],"highlights":[{"r":0,"c":1,"label":"highest"}],"note":"Example snapshot"}"#;
        let visual = parse_visual(Some(raw)).unwrap();
        assert!(visual.is_table());
        assert_eq!(visual.note(), Some("Example snapshot"));
        assert_eq!(
            visual.highlight_at(0, 1).and_then(|h| h.label.as_deref()),
            Some("highest")
        );
    }

    #[test]
    fn parses_bar_without_note() {
        let visual = parse_visual(Some(r#"{"type":"bar","labels":["W1"],"values":[3]}"#)).unwrap();
        assert_eq!(
            visual,
            Visual::Bar {
                labels: vec!["W1".into()],
                values: vec![3.0],
                note: None
            }
        );
    }

    #[test]
    fn tolerates_garbage() {
        assert_eq!(parse_visual(None), None);
        assert_eq!(parse_visual(Some("")), None);
        assert_eq!(parse_visual(Some("null")), None);
        assert_eq!(parse_visual(Some("{not json")), None);
        assert_eq!(parse_visual(Some(r#"{"type":"pie","slices":[]}"#)), None);
        assert_eq!(parse_visual(Some(r#"{"type":"table"}"#)), None);
    }
}
