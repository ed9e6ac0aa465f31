// Text-scanning primitives shared by the numeric and color grammars.
//
// Every scanner works on ASCII bytes: any non-ASCII byte is simply never a
// digit, a sign, a dot or an exponent marker, so multi-byte characters are
// rejected without decoding them.

const MINUS: u8 = b'-';
const PLUS: u8 = b'+';
const DECIMAL_POINT: u8 = b'.';

// Number of leading ASCII digits.
pub(crate) fn digit_run(input: &[u8]) -> usize {
    input.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

// Strips a single optional leading minus sign.
pub(crate) fn strip_minus(input: &[u8]) -> &[u8] {
    input.strip_prefix(&[MINUS]).unwrap_or(input)
}

// Whether the whole input is a non-empty run of ASCII digits.
pub(crate) fn is_digits(input: &[u8]) -> bool {
    !input.is_empty() && digit_run(input) == input.len()
}

// `-?[0-9]+`
pub(crate) fn is_integer_literal(input: &str) -> bool {
    is_digits(strip_minus(input.as_bytes()))
}

// Length of an optional fractional part, dot included, and the number of
// digits following the dot.
fn fraction(input: &[u8]) -> (usize, usize) {
    match input.first() {
        Some(&DECIMAL_POINT) => {
            let digits = digit_run(&input[1..]);
            (digits + 1, digits)
        }
        _ => (0, 0),
    }
}

// Length of an optional exponent, marker included.
//
// Returns `None` when a marker is present but not followed by digits.
fn exponent(input: &[u8]) -> Option<usize> {
    match input.first() {
        Some(b'e' | b'E') => {
            let signed = usize::from(matches!(input.get(1), Some(&(MINUS | PLUS))));
            let digits = digit_run(&input[1 + signed..]);
            (digits > 0).then_some(1 + signed + digits)
        }
        _ => Some(0),
    }
}

// `-?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?`
pub(crate) fn is_float_literal(input: &str) -> bool {
    let mantissa = strip_minus(input.as_bytes());

    let integer_digits = digit_run(mantissa);
    let (fraction_len, fraction_digits) = fraction(&mantissa[integer_digits..]);
    if integer_digits == 0 && fraction_digits == 0 {
        return false;
    }

    let consumed = integer_digits + fraction_len;
    exponent(&mantissa[consumed..]).is_some_and(|len| consumed + len == mantissa.len())
}

// Splits `input` on `separator` into exactly `N` segments.
//
// Empty segments are kept, so a trailing separator yields one segment too
// many and the split fails.
pub(crate) fn split_exact<const N: usize>(input: &str, separator: char) -> Option<[&str; N]> {
    let mut segments = [""; N];
    let mut parts = input.split(separator);
    for segment in &mut segments {
        *segment = parts.next()?;
    }
    parts.next().is_none().then_some(segments)
}

// An unsigned whole number where the empty segment stands for zero.
pub(crate) fn whole_number_or_zero(segment: &str) -> Option<u32> {
    if segment.is_empty() {
        return Some(0);
    }
    if !is_digits(segment.as_bytes()) {
        return None;
    }
    segment.parse().ok()
}
