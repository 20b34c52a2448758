//! Formatting utilities for terminal output

/// Create a bar showing `count` as a share of `total`
#[must_use]
pub fn share_bar(count: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (count * width / total).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a count as a percentage of `total` with one decimal
#[must_use]
pub fn percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    #[allow(clippy::cast_precision_loss)] // Word counts stay far below 2^52
    let pct = count as f64 * 100.0 / total as f64;
    format!("{pct:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_bar_empty() {
        assert_eq!(share_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn share_bar_full() {
        assert_eq!(share_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn share_bar_half() {
        assert_eq!(share_bar(5, 10, 10), "█████░░░░░");
    }

    #[test]
    fn share_bar_no_words() {
        assert_eq!(share_bar(0, 0, 4), "░░░░");
    }

    #[test]
    fn percentage_formats_one_decimal() {
        assert_eq!(percentage(1, 3), "33.3%");
        assert_eq!(percentage(0, 0), "0.0%");
    }
}
