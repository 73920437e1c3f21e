/// Parsing of typed answers and item lists.
use pairsort_core::Decision;

/// One typed answer to a comparison question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    First,
    Second,
    Tie,
    Quit,
}

/// Parse a line typed at the prompt. `None` means "ask again".
pub fn parse_answer(input: &str) -> Option<Answer> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" => Some(Answer::First),
        "2" => Some(Answer::Second),
        "=" | "t" | "tie" => Some(Answer::Tie),
        "q" | "quit" => Some(Answer::Quit),
        _ => None,
    }
}

/// Turn an answer about (`option1`, `option2`) into a ledger entry.
/// `Quit` records nothing.
pub fn answer_to_decision<T>(answer: Answer, option1: T, option2: T) -> Option<Decision<T>> {
    match answer {
        Answer::First => Some(Decision::beats(option1, option2)),
        Answer::Second => Some(Decision::beats(option2, option1)),
        Answer::Tie => Some(Decision::tie(option1, option2)),
        Answer::Quit => None,
    }
}

/// Parse a string as either a JSON array of strings or plain text (one item per line).
pub fn parse_items_from_str(content: &str) -> Result<Vec<String>, serde_json::Error> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        let items: Vec<String> = serde_json::from_str(trimmed)?;
        Ok(items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    } else {
        Ok(trimmed
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
}

/// First item that appears more than once, if any.
pub fn find_duplicate(items: &[String]) -> Option<&str> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    items.iter().find(|item| !seen.insert(item.as_str())).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer_variants() {
        assert_eq!(parse_answer("1"), Some(Answer::First));
        assert_eq!(parse_answer(" 2\n"), Some(Answer::Second));
        assert_eq!(parse_answer("="), Some(Answer::Tie));
        assert_eq!(parse_answer("TIE"), Some(Answer::Tie));
        assert_eq!(parse_answer("q"), Some(Answer::Quit));
        assert_eq!(parse_answer("3"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[test]
    fn test_answer_to_decision_orientation() {
        let d = answer_to_decision(Answer::Second, "a", "b").unwrap();
        assert!(d.ranks_above(&"b", &"a"));

        let d = answer_to_decision(Answer::Tie, "a", "b").unwrap();
        assert!(d.ties(&"a", &"b"));

        assert!(answer_to_decision(Answer::Quit, "a", "b").is_none());
    }

    #[test]
    fn test_parse_items_plain_text() {
        let items = parse_items_from_str("\n  Pizza \n\nSushi\nRamen\n").unwrap();
        assert_eq!(items, vec!["Pizza", "Sushi", "Ramen"]);
    }

    #[test]
    fn test_parse_items_json_array() {
        let items = parse_items_from_str(r#"["Pizza", " ", "Sushi"]"#).unwrap();
        assert_eq!(items, vec!["Pizza", "Sushi"]);
    }

    #[test]
    fn test_parse_items_bad_json() {
        assert!(parse_items_from_str("[\"Pizza\",").is_err());
    }

    #[test]
    fn test_find_duplicate() {
        let items: Vec<String> = ["a", "b", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(find_duplicate(&items), Some("a"));
        assert_eq!(find_duplicate(&items[..2]), None);
    }
}
