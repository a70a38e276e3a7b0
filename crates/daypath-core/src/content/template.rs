/// Named placeholders for one day's worked example, e.g. `metric` or
/// `dimension`. Keys vary by week.
#[derive(Debug, Clone, Copy)]
pub struct Scenario(pub &'static [(&'static str, &'static str)]);

impl Scenario {
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(k, v)| *k == key && !v.is_empty())
            .map(|(_, v)| *v)
    }

    /// First key that has a value, in the given order.
    pub fn first_of(&self, keys: &[&str]) -> Option<&'static str> {
        keys.iter().find_map(|k| self.get(k))
    }

    /// Expand `{key}` and `{key|fallback}` placeholders.
    ///
    /// An unknown key without a fallback is left in place so it shows up in
    /// review instead of silently disappearing.
    pub fn fill(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                return out;
            };
            let inner = &after[..close];
            let (key, fallback) = match inner.split_once('|') {
                Some((k, f)) => (k, Some(f)),
                None => (inner, None),
            };
            match (self.get(key), fallback) {
                (Some(value), _) => out.push_str(value),
                (None, Some(fallback)) => out.push_str(fallback),
                (None, None) => {
                    out.push('{');
                    out.push_str(inner);
                    out.push('}');
                }
            }
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: Scenario = Scenario(&[("metric", "revenue"), ("dimension", "region"), ("segment", "")]);

    #[test]
    fn fills_known_keys() {
        assert_eq!(
            S.fill("Which {dimension} drives {metric}?"),
            "Which region drives revenue?"
        );
    }

    #[test]
    fn uses_fallback_for_missing_or_empty() {
        assert_eq!(S.fill("{segment|Main segment} moved"), "Main segment moved");
        assert_eq!(S.fill("{plan|Group} A"), "Group A");
    }

    #[test]
    fn leaves_unknown_and_unbalanced_text() {
        assert_eq!(S.fill("{nope} and {metric"), "{nope} and {metric");
        assert_eq!(S.fill("no placeholders"), "no placeholders");
    }

    #[test]
    fn first_of_skips_absent_keys() {
        assert_eq!(S.first_of(&["segment", "dimension"]), Some("region"));
        assert_eq!(S.first_of(&["channel"]), None);
    }
}
