//! Small formatting helpers shared by the screens.

use unicode_width::UnicodeWidthChar;

/// A horizontal bar `width` cells wide, filled to `fraction`.
pub fn text_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let filled = (fraction * width as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

/// Truncate to `max_width` display columns, ending with `…` when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().filter_map(|c| c.width()).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// "1,280" style thousands separators.
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_bar() {
        assert_eq!(text_bar(0.5, 4), "██░░");
        assert_eq!(text_bar(1.7, 3), "███");
        assert_eq!(text_bar(f64::NAN, 2), "░░");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello world", 6), "hello…");
        assert_eq!(truncate_string("abc", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        assert_eq!(truncate_string("🌱🌱🌱", 4), "🌱…");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(420), "420");
        assert_eq!(format_thousands(1280), "1,280");
        assert_eq!(format_thousands(-1234567), "-1,234,567");
    }
}
