use crate::config::DisplayConfig;

/// Box-drawing characters for table borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub selector: String,
    pub sort_asc: String,
    pub sort_desc: String,
    pub expanded: String,
    pub collapsed: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            selector: "►".to_string(),
            sort_asc: "▲".to_string(),
            sort_desc: "▼".to_string(),
            expanded: "▼".to_string(),
            collapsed: "▶".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            selector: ">".to_string(),
            sort_asc: "^".to_string(),
            sort_desc: "v".to_string(),
            expanded: "v".to_string(),
            collapsed: ">".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

/// Fantasy points with thousands separators ("12,345")
pub fn format_points(points: i64) -> String {
    let digits = points.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if points < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Fixed-decimal stat value
pub fn format_stat(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// 0-1 fraction as a percentage with one decimal ("71.0%")
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_header_single_line_unicode() {
        let display = DisplayConfig { use_unicode: true, ..Default::default() };
        let result = format_header("Regular Season", false, &display);
        assert_eq!(result, "Regular Season\n──────────────\n");
    }

    #[test]
    fn test_format_header_double_line_ascii() {
        let display = DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
            ..Default::default()
        };
        let result = format_header("Tournament", true, &display);
        assert_eq!(result, "Tournament\n==========\n");
    }

    #[test]
    fn test_format_points_groups_thousands() {
        assert_eq!(format_points(0), "0");
        assert_eq!(format_points(999), "999");
        assert_eq!(format_points(1800), "1,800");
        assert_eq!(format_points(6565), "6,565");
        assert_eq!(format_points(1234567), "1,234,567");
        assert_eq!(format_points(-360), "-360");
        assert_eq!(format_points(-12345), "-12,345");
    }

    #[test]
    fn test_format_stat_decimals() {
        assert_eq!(format_stat(7.456, 2), "7.46");
        assert_eq!(format_stat(320.44, 1), "320.4");
        assert_eq!(format_stat(3.0, 2), "3.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.8), "80.0%");
        assert_eq!(format_percent(0.7149), "71.5%");
        assert_eq!(format_percent(1.0), "100.0%");
    }
}
