pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Tags as a comma list, or `-` when there are none.
pub fn join_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.join(", ")
    }
}

/// First letter upper-cased, like the chip labels.
pub fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Horizontal bar scaled so `max` fills `width` cells. Any non-zero count
/// gets at least one cell.
pub fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let cells = (count * width).div_ceil(max).clamp(1, width);
    "█".repeat(cells)
}

/// Similarity score as a whole percentage.
pub fn percent(score: f64) -> String {
    format!("{:.0}%", (score * 100.0).round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Aqua", 10), "Aqua");
        assert_eq!(truncate("Aqua di Gioia Profondo", 10), "Aqua di...");
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(10, 10, 20).chars().count(), 20);
        assert_eq!(bar(5, 10, 20).chars().count(), 10);
        assert_eq!(bar(1, 100, 20).chars().count(), 1);
        assert_eq!(bar(0, 10, 20), "");
    }

    #[test]
    fn test_percent_and_title_case() {
        assert_eq!(percent(0.254), "25%");
        assert_eq!(percent(1.0), "100%");
        assert_eq!(title_case("woody"), "Woody");
        assert_eq!(join_tags(&[]), "-");
    }
}
