//! `{name}` placeholder substitution for `.mesa` template files.
//!
//! Matching is literal and per line. Substituted values are plain numbers,
//! so a replacement can never introduce another placeholder.

use ms_core::ParameterSet;
use std::collections::BTreeSet;

pub fn placeholder(name: &str) -> String {
    format!("{{{name}}}")
}

/// Shortest exponent form that round-trips, e.g. `2e-3`.
pub fn format_value(value: f64) -> String {
    format!("{value:e}")
}

/// Replace every placeholder on `line`, recording which names matched.
pub fn substitute_line(line: &str, params: &ParameterSet, used: &mut BTreeSet<String>) -> String {
    let mut resolved = line.to_string();
    for (name, value) in params.iter() {
        let token = placeholder(name);
        if resolved.contains(&token) {
            resolved = resolved.replace(&token, &format_value(value));
            used.insert(name.to_string());
        }
    }
    resolved
}

/// Resolve a whole template, preserving line endings.
pub fn render_template(content: &str, params: &ParameterSet, used: &mut BTreeSet<String>) -> String {
    content
        .split_inclusive('\n')
        .map(|line| substitute_line(line, params, used))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ParameterSet {
        let mut p = ParameterSet::new();
        p.insert("ne_core", 2.5e19).unwrap();
        p.insert("puff", 0.002).unwrap();
        p
    }

    #[test]
    fn substituted_line_is_emitted() {
        let mut used = BTreeSet::new();
        let out = substitute_line("  'b2stbc_ne' '{ne_core}'\n", &params(), &mut used);
        assert_eq!(out, "  'b2stbc_ne' '2.5e19'\n");
        assert!(used.contains("ne_core"));
        assert!(!used.contains("puff"));
    }

    #[test]
    fn repeated_placeholders_all_resolve() {
        let mut used = BTreeSet::new();
        let out = substitute_line("{puff} {puff}", &params(), &mut used);
        assert_eq!(out, "2e-3 2e-3");
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        let mut used = BTreeSet::new();
        let out = substitute_line("{other}", &params(), &mut used);
        assert_eq!(out, "{other}");
        assert!(used.is_empty());
    }

    #[test]
    fn render_keeps_line_structure() {
        let mut used = BTreeSet::new();
        let out = render_template("a\n{puff}\nlast", &params(), &mut used);
        assert_eq!(out, "a\n2e-3\nlast");
    }
}
