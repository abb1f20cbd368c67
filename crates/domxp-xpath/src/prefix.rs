//! Namespace prefix scan over XPath expression text
//!
//! sxd-xpath resolves QName prefixes only at evaluation time and panics on
//! one it does not know, so prefixes are checked against the bound set
//! before evaluating.

/// Prefixes of the QNames in `expression`, in order of first use.
///
/// String literals are skipped and axis separators (`::`) are not
/// prefixes. Name tests, wildcards (`p:*`), function names and variable
/// references are all covered.
pub(crate) fn used_prefixes(expression: &str) -> Vec<&str> {
    let bytes = expression.as_bytes();
    let mut prefixes: Vec<&str> = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            quote @ (b'"' | b'\'') => {
                pos += 1;
                while pos < bytes.len() && bytes[pos] != quote {
                    pos += 1;
                }
                pos += 1;
            }
            b if is_name_start_char(b) => {
                let start = pos;
                while pos < bytes.len() && is_name_char(bytes[pos]) {
                    pos += 1;
                }
                let qualified = bytes.get(pos) == Some(&b':')
                    && bytes
                        .get(pos + 1)
                        .is_some_and(|&next| next == b'*' || is_name_start_char(next));
                if qualified {
                    let prefix = &expression[start..pos];
                    if !prefixes.contains(&prefix) {
                        prefixes.push(prefix);
                    }
                    pos += 1;
                }
            }
            b if b.is_ascii_digit() => {
                while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
                    pos += 1;
                }
            }
            _ => pos += 1,
        }
    }

    prefixes
}

// Non-ASCII bytes count as name bytes so multi-byte names are consumed whole
fn is_name_start_char(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

fn is_name_char(b: u8) -> bool {
    is_name_start_char(b) || b.is_ascii_digit() || b == b'-' || b == b'.'
}
