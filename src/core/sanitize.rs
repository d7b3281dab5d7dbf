// src/core/sanitize.rs

/// Minimal HTML entity decoding for table cells.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// `"12,5"` → `"12.5"`. Locale files use a decimal comma.
pub fn decimal_comma_to_point(s: &str) -> String {
    s.trim().replace(',', ".")
}

/// Parse a float the way a spreadsheet export writes it.
pub fn parse_decimal(s: &str) -> Option<f64> {
    decimal_comma_to_point(s).parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Header text as comparable key: no BOM, mojibake degree sign repaired,
/// whitespace collapsed, ASCII lowercased.
pub fn header_key(s: &str) -> String {
    let s = s.trim_start_matches('\u{feff}').replace("Â°", "°");
    normalize_ws(&s).to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_comma() {
        assert_eq!(parse_decimal(" 16,3 "), Some(16.3));
        assert_eq!(parse_decimal("478.4"), Some(478.4));
        assert_eq!(parse_decimal("n/a"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
    }

    #[test]
    fn header_key_repairs_degree_sign() {
        assert_eq!(header_key("\u{feff}Mean  Temperature (Â°C)"), header_key("mean temperature (°C)"));
    }

    #[test]
    fn entities_decoded() {
        assert_eq!(normalize_entities("a&nbsp;&amp;&nbsp;b"), "a & b");
    }
}
