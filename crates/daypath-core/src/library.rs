//! Static reference cards shown on the dashboard's examples tab.

use crate::visual::{Highlight, Visual};

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryCard {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub points: [&'static str; 3],
    pub visual: Visual,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn library_cards() -> Vec<LibraryCard> {
    vec![
        LibraryCard {
            id: "charts",
            title: "Good vs bad charts",
            blurb: "Honest axes, clear scales, no clutter.",
            points: [
                "Start axes at zero when possible.",
                "Label trends, not decorations.",
                "One message per chart.",
            ],
            visual: Visual::Bar {
                labels: strings(&["Week 1", "Week 2", "Week 3", "Week 4"]),
                values: vec![120.0, 135.0, 150.0, 172.0],
                note: Some("Weekly signups, axis from zero".to_string()),
            },
        },
        LibraryCard {
            id: "cleaning",
            title: "Clean vs messy data",
            blurb: "Small fixes make numbers trustworthy.",
            points: [
                "Normalize categories and casing.",
                "Remove duplicates before analysis.",
                "Check dates and missing values.",
            ],
            visual: Visual::Table {
                headers: strings(&["Before", "After"]),
                rows: vec![
                    strings(&[" north ", "North"]),
                    strings(&["NORTH", "North"]),
                    strings(&["1/5/26", "2026-01-05"]),
                    strings(&["(blank)", "Unknown"]),
                ],
                highlights: vec![Highlight {
                    r: 2,
                    c: 1,
                    label: Some("real date".to_string()),
                }],
                note: Some("Three labels become one".to_string()),
            },
        },
        LibraryCard {
            id: "manager",
            title: "What analysts send to managers",
            blurb: "Short, clear, action-ready updates.",
            points: [
                "Lead with the decision needed.",
                "State the metric and timeframe.",
                "Offer one clear recommendation.",
            ],
            visual: Visual::Line {
                labels: strings(&["Jan", "Feb", "Mar", "Apr"]),
                values: vec![42.0, 45.0, 44.0, 51.0],
                note: Some("Revenue up 16% in April; expand the April promo".to_string()),
            },
        },
    ]
}

pub fn library_card(id: &str) -> Option<LibraryCard> {
    library_cards().into_iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_cards_with_visuals() {
        let cards = library_cards();
        let ids: Vec<&str> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["charts", "cleaning", "manager"]);
        assert!(library_card("cleaning").unwrap().visual.is_table());
        assert!(library_card("missing").is_none());
    }
}
