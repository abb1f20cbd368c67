//! XPath string literals

/// Quote `value` as an XPath 1.0 string literal.
///
/// XPath 1.0 has no escape sequences, so a value holding both quote
/// characters is spliced together with `concat()`.
pub fn string_literal(value: &str) -> String {
    if !value.contains('\'') {
        format!("'{value}'")
    } else if !value.contains('"') {
        format!("\"{value}\"")
    } else {
        let parts: Vec<String> = value.split('\'').map(|part| format!("'{part}'")).collect();
        format!("concat({})", parts.join(", \"'\", "))
    }
}
