/// Output formatting: terminal table and JSON.
use pairsort_core::{RankedResult, Sorter};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
struct JsonRankedGroup {
    rank: usize,
    items: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
struct JsonOutput {
    groups: Vec<JsonRankedGroup>,
    total_items: usize,
    total_comparisons: usize,
}

/// Competition-style ranks: a group's rank is one more than the number of
/// items ranked above it, so ties share a rank and the next rank skips.
fn group_ranks(result: &RankedResult<String>) -> Vec<usize> {
    let mut above = 0;
    result
        .iter()
        .map(|group| {
            let rank = above + 1;
            above += group.len();
            rank
        })
        .collect()
}

fn build_json(result: &RankedResult<String>, total_comparisons: usize) -> JsonOutput {
    let groups = result
        .iter()
        .zip(group_ranks(result))
        .map(|(group, rank)| JsonRankedGroup { rank, items: group.clone() })
        .collect();

    JsonOutput {
        groups,
        total_items: result.iter().map(Vec::len).sum(),
        total_comparisons,
    }
}

/// Print results as a formatted terminal table.
pub fn print_table(result: &RankedResult<String>, total_comparisons: usize) {
    let name_width = result
        .iter()
        .flatten()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Item"

    println!("   # | {:<name_width$}", "Item");
    println!("-----|-{}", "-".repeat(name_width));

    for (group, rank) in result.iter().zip(group_ranks(result)) {
        let tied = group.len() > 1;
        for name in group {
            if tied {
                println!("{:>4} | {:<name_width$} (tied)", rank, name);
            } else {
                println!("{:>4} | {}", rank, name);
            }
        }
    }

    let total_items: usize = result.iter().map(Vec::len).sum();
    println!("\n{} items ranked in {} groups ({} comparisons answered)", total_items, result.len(), total_comparisons);
}

/// Print results as JSON.
pub fn print_json(result: &RankedResult<String>, total_comparisons: usize) {
    let output = build_json(result, total_comparisons);
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => crate::bail(format!("Failed to serialize results: {e}")),
    }
}

/// Lines printed by `pairsort status`. Runs one ranking attempt to find out
/// whether the session is complete and which question comes next.
pub fn describe_status(sorter: &mut Sorter<String>, limit: Option<usize>) -> Vec<String> {
    let ties = sorter.ledger().iter().filter(|d| !d.tie.is_empty()).count();
    let mut lines = vec![
        format!("Items: {}", sorter.len()),
        format!("Answers recorded: {} ({} ties)", sorter.round(), ties),
    ];

    match sorter.rank(limit) {
        Ok(result) => {
            lines.push("Progress: 100%".to_string());
            lines.push(format!("Complete: yes ({} groups)", result.len()));
        }
        Err(pair) => {
            lines.push(format!("Progress: {}%", sorter.estimate_progress(limit)));
            lines.push("Complete: no".to_string());
            lines.push(format!("Next question: \"{}\" vs \"{}\"", pair.a, pair.b));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(groups: &[&[&str]]) -> RankedResult<String> {
        groups
            .iter()
            .map(|g| g.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_tied_groups_share_rank() {
        let r = result(&[&["a"], &["b", "c"], &["d"]]);
        assert_eq!(group_ranks(&r), vec![1, 2, 4]);
    }

    #[test]
    fn test_json_shape() {
        let r = result(&[&["a", "b"], &["c"]]);
        let value = serde_json::to_value(build_json(&r, 3)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "groups": [
                    { "rank": 1, "items": ["a", "b"] },
                    { "rank": 3, "items": ["c"] },
                ],
                "total_items": 3,
                "total_comparisons": 3,
            })
        );
    }

    fn sorter(items: &[&str]) -> Sorter<String> {
        Sorter::from_state(pairsort_core::EngineState::new(items.iter().map(|s| s.to_string()).collect()))
    }

    #[test]
    fn test_status_of_unfinished_session() {
        let mut s = sorter(&["a", "b", "c"]);
        s.add_decision(pairsort_core::Decision::tie("b".to_string(), "a".to_string()));

        let lines = describe_status(&mut s, None);
        assert_eq!(lines[0], "Items: 3");
        assert_eq!(lines[1], "Answers recorded: 1 (1 ties)");
        assert_eq!(lines[3], "Complete: no");
        assert_eq!(lines[4], "Next question: \"c\" vs \"a\"");
    }

    #[test]
    fn test_status_of_finished_session() {
        let mut s = sorter(&["a", "b"]);
        s.add_decision(pairsort_core::Decision::beats("a".to_string(), "b".to_string()));

        let lines = describe_status(&mut s, None);
        assert_eq!(lines[1], "Answers recorded: 1 (0 ties)");
        assert_eq!(lines[2], "Progress: 100%");
        assert_eq!(lines[3], "Complete: yes (2 groups)");
    }
}
