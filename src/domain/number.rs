//! Conversion between field text and numbers
//!
//! Input text is reparsed on every activation with lenient integer parsing,
//! and results are rendered in the default numeric text form. Neither
//! direction fails: unparseable text becomes `NaN` and every `f64` has a
//! textual rendering.

/// Largest decimal exponent still rendered in plain notation
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Smallest decimal exponent still rendered in plain notation (exclusive)
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Parses the leading base-10 integer of `text`
///
/// Leading whitespace is skipped, one optional `+`/`-` sign is accepted and
/// the longest run of ASCII digits that follows is taken. Anything after the
/// digits is ignored. Text without a digit run yields `NaN`.
///
/// ```
/// use basic_calc::domain::parse_int;
///
/// assert_eq!(parse_int("  42px"), 42.0);
/// assert_eq!(parse_int("-7"), -7.0);
/// assert!(parse_int("abc").is_nan());
/// ```
pub fn parse_int(text: &str) -> f64 {
    let trimmed = text.trim_start_matches(is_leading_space);

    let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return f64::NAN;
    }

    // A pure digit run always parses; overlong runs round or saturate to inf.
    let magnitude = unsigned[..digit_count].parse::<f64>().unwrap_or(f64::NAN);
    if negative { -magnitude } else { magnitude }
}

/// Whitespace and line terminators skipped before the digits
///
/// Unicode `White_Space` plus the byte-order mark, minus NEL (U+0085),
/// which conventional integer parsing treats as content.
fn is_leading_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Renders `value` in its default text form
///
/// `NaN`, `Infinity` and `-Infinity` for the sentinels, `0` for either zero,
/// integral values without a fractional part and everything else with the
/// shortest digit sequence that round-trips. Decimal exponents outside
/// `(-6, 21]` switch to scientific notation (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. "3.5e0" or "1e21"
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digit_count = digits.len() as i32;
    // position of the decimal point relative to the start of `digits`
    let point = exponent + 1;

    let body = if digit_count <= point && point <= MAX_PLAIN_EXPONENT {
        format!("{digits}{}", "0".repeat((point - digit_count) as usize))
    } else if 0 < point && point <= MAX_PLAIN_EXPONENT {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{whole}.{fraction}")
    } else if MIN_PLAIN_EXPONENT < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let exponent_sign = if exponent >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{exponent_sign}{}", exponent.abs())
        } else {
            format!("{lead}.{rest}e{exponent_sign}{}", exponent.abs())
        }
    };

    format!("{sign}{body}")
}
