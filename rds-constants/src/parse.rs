use crate::InvalidConstant;

/// Parses the contents of a constant file.
///
/// Follows `strtoul(buf, &end, 0)`: leading whitespace and a `+` are skipped,
/// `0x`/`0X` selects hex, a leading `0` selects octal, otherwise decimal.
/// Parsing stops at the first byte that isn't a digit of the radix, and that
/// byte must be either the end of `buf` or a newline.
pub fn parse_constant(buf: &[u8]) -> Result<i32, InvalidConstant> {
    parse_constant_prefix(buf).map(|(value, _)| value)
}

// parse_constant, also returning the offset the digits stopped at
pub(crate) fn parse_constant_prefix(buf: &[u8]) -> Result<(i32, usize), InvalidConstant> {
    let (value, end) = parse_unsigned(buf)?;

    let value = value
        .and_then(|v| i32::try_from(v).ok())
        .ok_or(InvalidConstant::OutOfRange)?;

    match buf.get(end) {
        None | Some(b'\n') => Ok((value, end)),
        Some(&byte) => Err(InvalidConstant::Trailing(byte)),
    }
}

// C isspace() in the "C" locale, which includes \v unlike u8::is_ascii_whitespace
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

// Returns the value (None on overflow) and the offset parsing stopped at.
fn parse_unsigned(buf: &[u8]) -> Result<(Option<u64>, usize), InvalidConstant> {
    let mut pos = buf.iter().take_while(|&&b| is_space(b)).count();
    if buf.get(pos) == Some(&b'+') {
        pos += 1;
    }

    let is_hex_digit = |offset: usize| buf.get(offset).map_or(false, u8::is_ascii_hexdigit);
    let (radix, start) = match (buf.get(pos), buf.get(pos + 1)) {
        (Some(b'0'), Some(b'x' | b'X')) if is_hex_digit(pos + 2) => (16, pos + 2),
        // A bare "0x" is the digit 0 followed by junk
        (Some(b'0'), _) => (8, pos),
        _ => (10, pos),
    };

    let mut value = Some(0u64);
    let mut end = start;
    while let Some(digit) = buf.get(end).and_then(|&b| char::from(b).to_digit(radix)) {
        value = value
            .and_then(|v| v.checked_mul(u64::from(radix)))
            .and_then(|v| v.checked_add(u64::from(digit)));
        end += 1;
    }

    if end == start {
        return Err(InvalidConstant::NoDigits);
    }

    Ok((value, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_with_and_without_newline() {
        assert_eq!(parse_constant(b"21\n"), Ok(21));
        assert_eq!(parse_constant(b"276"), Ok(276));
        assert_eq!(parse_constant(b"0\n"), Ok(0));
        assert_eq!(parse_constant(b"2147483647\n"), Ok(i32::MAX));
    }

    #[test]
    fn base_prefixes() {
        assert_eq!(parse_constant(b"0x1A\n"), Ok(26));
        assert_eq!(parse_constant(b"0X1a"), Ok(26));
        assert_eq!(parse_constant(b"017\n"), Ok(15));
        assert_eq!(parse_constant(b"0x7fffffff\n"), Ok(i32::MAX));
    }

    #[test]
    fn leading_whitespace_and_plus() {
        assert_eq!(parse_constant(b"  +42\n"), Ok(42));
        assert_eq!(parse_constant(b"\t\n\x0b\x0c\r7"), Ok(7));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            parse_constant(b"2147483648\n"),
            Err(InvalidConstant::OutOfRange)
        );
        assert_eq!(
            parse_constant(b"99999999999\n"),
            Err(InvalidConstant::OutOfRange)
        );
        assert_eq!(
            parse_constant(b"0xffffffffffffffffffff\n"),
            Err(InvalidConstant::OutOfRange)
        );
    }

    #[test]
    fn missing_digits() {
        assert_eq!(parse_constant(b""), Err(InvalidConstant::NoDigits));
        assert_eq!(parse_constant(b"\n"), Err(InvalidConstant::NoDigits));
        assert_eq!(parse_constant(b"abc\n"), Err(InvalidConstant::NoDigits));
        assert_eq!(parse_constant(b"+\n"), Err(InvalidConstant::NoDigits));
        assert_eq!(parse_constant(b"-1\n"), Err(InvalidConstant::NoDigits));
    }

    #[test]
    fn trailing_bytes() {
        assert_eq!(
            parse_constant(b"21x\n"),
            Err(InvalidConstant::Trailing(b'x'))
        );
        assert_eq!(
            parse_constant(b"21 \n"),
            Err(InvalidConstant::Trailing(b' '))
        );
        assert_eq!(parse_constant(b"09\n"), Err(InvalidConstant::Trailing(b'9')));
        assert_eq!(parse_constant(b"0x\n"), Err(InvalidConstant::Trailing(b'x')));
        assert_eq!(parse_constant(b"0xg\n"), Err(InvalidConstant::Trailing(b'x')));
    }

    #[test]
    fn only_the_byte_after_the_number_is_checked() {
        assert_eq!(parse_constant(b"21\n\n"), Ok(21));
        assert_eq!(parse_constant(b"21\ntrailing"), Ok(21));
    }
}
