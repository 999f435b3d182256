//! Result rendering for the terminal
//!
//! Produces the results table: rule, status, evidence, reasoning and
//! confidence. An empty result set renders as nothing at all.

use serde::Serialize;

use crate::types::CheckResult;

const RULE_WIDTH: usize = 28;
const TEXT_WIDTH: usize = 36;
const HEADERS: [&str; 5] = ["Rule", "Status", "Evidence", "Reasoning", "Confidence"];

/// Coarse grouping of a confidence score for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 80.0 {
            ConfidenceBand::High
        } else if confidence >= 60.0 {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "high",
            ConfidenceBand::Medium => "medium",
            ConfidenceBand::Low => "low",
        }
    }
}

/// `92%` for whole numbers, `40.5%` otherwise
pub fn format_confidence(confidence: f64) -> String {
    if confidence.fract() == 0.0 {
        format!("{}%", confidence as i64)
    } else {
        format!("{}%", confidence)
    }
}

/// Render results as a plain-text table, or an empty string if there are none
pub fn render_table(results: &[CheckResult]) -> String {
    if results.is_empty() {
        return String::new();
    }

    let rows: Vec<[Vec<String>; 5]> = results
        .iter()
        .map(|r| {
            let band = ConfidenceBand::from_confidence(r.confidence);
            [
                wrap(&r.rule, RULE_WIDTH),
                vec![format!("{} {}", r.status.marker(), r.status.label())],
                wrap(&r.evidence, TEXT_WIDTH),
                wrap(&r.reasoning, TEXT_WIDTH),
                vec![format!("{} ({})", format_confidence(r.confidence), band.label())],
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (col, cell) in row.iter().enumerate() {
            for line in cell {
                widths[col] = widths[col].max(line.chars().count());
            }
        }
    }

    let mut out = String::from("Check Results\n\n");
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    for row in &rows {
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for i in 0..height {
            let line = row
                .iter()
                .map(|cell| cell.get(i).cloned().unwrap_or_default())
                .collect::<Vec<_>>();
            push_line(&mut out, &line, &widths);
        }
    }

    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

/// Greedy word wrap; words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }

        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// JSON view of one result, with the display band attached
#[derive(Serialize)]
struct ResultView<'a> {
    #[serde(flatten)]
    result: &'a CheckResult,
    band: ConfidenceBand,
}

/// Render results as pretty JSON in the service's `{ "results": [...] }` shape
pub fn render_json(results: &[CheckResult]) -> serde_json::Result<String> {
    #[derive(Serialize)]
    struct Envelope<'a> {
        results: Vec<ResultView<'a>>,
    }

    serde_json::to_string_pretty(&Envelope {
        results: results
            .iter()
            .map(|result| ResultView {
                result,
                band: ConfidenceBand::from_confidence(result.confidence),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckStatus;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<CheckResult> {
        vec![
            CheckResult {
                rule: "Has a purpose section".to_string(),
                status: CheckStatus::Pass,
                evidence: "Section 1 is titled Purpose".to_string(),
                reasoning: "Explicit heading found".to_string(),
                confidence: 92.0,
            },
            CheckResult {
                rule: "Mentions a retention period".to_string(),
                status: CheckStatus::Fail,
                evidence: String::new(),
                reasoning: "No duration is stated anywhere in the document body".to_string(),
                confidence: 61.5,
            },
        ]
    }

    #[test]
    fn test_bands() {
        assert_eq!(ConfidenceBand::from_confidence(100.0), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(80.0), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(79.9), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_confidence(60.0), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_confidence(59.0), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_confidence(0.0), ConfidenceBand::Low);
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(92.0), "92%");
        assert_eq!(format_confidence(61.5), "61.5%");
    }

    #[test]
    fn test_empty_results_render_nothing() {
        assert_eq!(render_table(&[]), "");
    }

    #[test]
    fn test_table_contents_in_order() {
        let table = render_table(&sample());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Check Results");
        assert!(lines[2].starts_with("Rule"));
        assert!(lines[2].ends_with("Confidence"));
        assert!(lines[4].contains("✓ PASS"));
        assert!(lines[4].contains("92% (high)"));

        let fail_line = lines.iter().position(|l| l.contains("✗ FAIL")).unwrap();
        assert!(fail_line > 4);
        assert!(lines[fail_line].contains("61.5% (medium)"));
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("a abcdefgh", 4), vec!["a", "abcd", "efgh"]);
    }

    #[test]
    fn test_json_keeps_service_fields() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["results"][0]["rule"], "Has a purpose section");
        assert_eq!(value["results"][0]["status"], "pass");
        assert_eq!(value["results"][0]["band"], "High");
        assert_eq!(value["results"][1]["status"], "fail");
    }
}
