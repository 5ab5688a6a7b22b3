//! Numeric coercion of custom field values.
//!
//! Values are read as the longest numeric prefix of the trimmed input. Input
//! without a numeric prefix coerces to zero; nothing here fails.

/// Coerce to an integer: `"12abc"` is 12, `"3.9"` is 3, `"abc"` is 0.
///
/// Out of range values saturate at `i64::MIN` / `i64::MAX`.
pub fn coerce_int(value: &str) -> i64 {
    let bytes = value.trim_start().as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut result: i64 = 0;
    for digit in digits.iter().take_while(|b| b.is_ascii_digit()) {
        let digit = i64::from(digit - b'0');
        result = match result
            .checked_mul(10)
            .and_then(|r| if negative { r.checked_sub(digit) } else { r.checked_add(digit) })
        {
            Some(next) => next,
            None => return if negative { i64::MIN } else { i64::MAX },
        };
    }
    result
}

/// Coerce to a double: `"12.5kg"` is 12.5, `"1e3"` is 1000, `"abc"` is 0.
///
/// Values that overflow to infinity coerce to zero, since JSON has no
/// representation for them.
pub fn coerce_double(value: &str) -> f64 {
    let text = value.trim_start();
    let end = numeric_prefix_len(text.as_bytes());
    let parsed: f64 = text[..end].parse().unwrap_or(0.0);
    if parsed.is_finite() {
        parsed
    } else {
        0.0
    }
}

fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'-' | b'+')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
