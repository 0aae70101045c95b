//! Placeholder extraction from template text
//!
//! Placeholders are `{{name}}` tokens. Extraction is non-greedy with no
//! nested-brace support; unmatched single braces are ignored. Names are
//! returned deduplicated in first-occurrence order so the prompt sequence
//! follows the template. The captured name is kept verbatim (whitespace
//! included) so rendering can substitute the literal token back.

use regex::Regex;

/// Extract unique placeholder names in first-occurrence order
pub fn extract(text: &str) -> Vec<String> {
    // Lazy match between double braces; `.` does not cross newlines
    let re = Regex::new(r"\{\{(.*?)\}\}").unwrap_or_else(|_| unreachable!("placeholder pattern is valid"));

    let mut names = Vec::new();
    for caps in re.captures_iter(text) {
        if let Some(m) = caps.get(1) {
            let name = m.as_str().to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic() {
        let names = extract("Hello {{name}}, week {{week}}");
        assert_eq!(names, vec!["name", "week"]);
    }

    #[test]
    fn test_extract_empty_template() {
        assert!(extract("").is_empty());
        assert!(extract("no placeholders here").is_empty());
    }

    #[test]
    fn test_extract_dedupes_repeated_fields() {
        let names = extract("{{a}} {{b}} {{a}} {{a}}");
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_extract_first_occurrence_order() {
        let names = extract("{{zulu}} then {{alpha}} then {{mike}}");
        assert_eq!(names, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn test_extract_ignores_unmatched_braces() {
        let names = extract("{not one} {{real}} }} {{");
        assert_eq!(names, vec!["real"]);
    }

    #[test]
    fn test_extract_keeps_name_verbatim() {
        // "{{ padded }}" and "{{padded}}" are distinct tokens; the raw inner
        // text is what rendering substitutes against
        let names = extract("{{ padded }} and {{padded}}");
        assert_eq!(names, vec![" padded ", "padded"]);
    }

    #[test]
    fn test_extract_does_not_cross_lines() {
        let names = extract("{{open\nclose}} {{ok}}");
        assert_eq!(names, vec!["ok"]);
    }
}
