/// Fraction digits that hold the exact decimal expansion of any finite `f64`.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Returns the first `max` characters of `s` (Unicode scalar values, not bytes).
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => s.get(..byte_idx).unwrap_or(s),
        None => s,
    }
}

/// Number of Unicode scalar values in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Format `value` with `digits` fraction digits, rounding the exact binary
/// value half away from zero (`1.25` -> `"1.3"`, `1.125` -> `"1.13"`).
///
/// `format!("{:.N}")` rounds exact ties to even instead.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac_part = frac_part.as_bytes();

    let mut int_digits: Vec<u8> = int_part.bytes().collect();
    let mut frac_digits: Vec<u8> = frac_part.iter().take(digits).copied().collect();
    frac_digits.resize(digits, b'0');

    let round_up = frac_part.get(digits).is_some_and(|&d| d >= b'5');
    if round_up && increment_digits(&mut frac_digits) && increment_digits(&mut int_digits) {
        int_digits.insert(0, b'1');
    }

    let mut out = String::with_capacity(int_digits.len() + digits + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(int_digits.iter().map(|&d| char::from(d)));
    if digits > 0 {
        out.push('.');
        out.extend(frac_digits.iter().map(|&d| char::from(d)));
    }
    out
}

/// Add one to an ASCII digit string in place. Returns the carry out.
fn increment_digits(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}
