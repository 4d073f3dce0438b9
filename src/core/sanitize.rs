// src/core/sanitize.rs
// Text clean-up and lenient number reading for cell contents.

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

/// Optional sign followed by ASCII digits, measured from the start of `s`.
fn signed_digits_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) { i += 1; }
    let digits = b[i..].iter().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 { 0 } else { i + digits }
}

/// Leading integer of `s`: whitespace, optional sign, digits. Anything after is ignored.
/// `"3"`, `" 12x"` and `"-4 pcs"` parse; `""`, `"x3"` do not.
/// A digit run too long for `i64` saturates at `i64::MAX` / `i64::MIN`.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let n = signed_digits_len(s);
    if n == 0 { return None; }
    // digits are already checked, so parsing can only fail on overflow
    Some(s[..n].parse().unwrap_or(if s.starts_with('-') { i64::MIN } else { i64::MAX }))
}

/// Leading decimal number of `s`: whitespace, optional sign, digits with an
/// optional fraction, optional exponent. Anything after is ignored.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) { i += 1; }

    let int_digits = b[i..].iter().take_while(|c| c.is_ascii_digit()).count();
    i += int_digits;
    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        frac_digits = b[i + 1..].iter().take_while(|c| c.is_ascii_digit()).count();
        if int_digits > 0 || frac_digits > 0 { i += 1 + frac_digits; }
    }
    if int_digits == 0 && frac_digits == 0 { return None; }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let exp = signed_digits_len(&s[i + 1..]);
        if exp > 0 { i += 1 + exp; }
    }
    s[..i].parse().ok()
}

/// Percentage cell → probability. `"12.5%"` → 0.125, `"1,234%"` → 12.34.
/// Text after the first `%` is ignored; `,` grouping separators are dropped.
pub fn parse_chance(s: &str) -> Option<f64> {
    let before = s.split('%').next().unwrap_or("");
    let cleaned: String = before.chars().filter(|&c| c != ',').collect();
    parse_float_prefix(&cleaned).map(|v| v / 100.0)
}

pub fn round_to(v: f64, digits: i32) -> f64 {
    let m = 10f64.powi(digits);
    (v * m).round() / m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefix() {
        assert_eq!(parse_int_prefix("3"), Some(3));
        assert_eq!(parse_int_prefix("  12x"), Some(12));
        assert_eq!(parse_int_prefix("-4 pcs"), Some(-4));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("x3"), None);
        assert_eq!(parse_int_prefix("+"), None);
    }

    #[test]
    fn int_prefix_saturates_on_overflow() {
        assert_eq!(parse_int_prefix("99999999999999999999 pcs"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_int_prefix("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn float_prefix() {
        assert_eq!(parse_float_prefix("12.5"), Some(12.5));
        assert_eq!(parse_float_prefix(" .5abc"), Some(0.5));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
        assert_eq!(parse_float_prefix("1e2%"), Some(100.0));
        assert_eq!(parse_float_prefix("3e"), Some(3.0));
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("n/a"), None);
    }

    #[test]
    fn chance_handles_percent_and_grouping() {
        assert_eq!(parse_chance("12.5%"), Some(0.125));
        assert_eq!(parse_chance("4%"), Some(0.04));
        assert_eq!(parse_chance("1,234.5%"), Some(12.345));
        assert_eq!(parse_chance("%"), None);
        assert_eq!(parse_chance("?"), None);
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(0.123456789, 5), 0.12346);
        assert_eq!(round_to(2.0, 5), 2.0);
    }
}
