// src/core/sanitize.rs

/// Remove every parenthesised allergy code: `(5)` or `(1.2)` style.
/// Anything else in parentheses (e.g. `(소)`, `(1.2.3)`) is kept as-is.
/// Result is trimmed.
pub fn strip_allergy_codes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(open) = rest.find('(') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match allergy_code_len(tail) {
            Some(n) => rest = &tail[n..],
            None => {
                out.push('(');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}

/// Byte length of a leading `(digits)` / `(digits.digits)` token.
fn allergy_code_len(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    if b.first() != Some(&b'(') {
        return None;
    }
    let digits = |from: usize| b[from..].iter().take_while(|c| c.is_ascii_digit()).count();

    let mut i = 1;
    let n = digits(i);
    if n == 0 {
        return None;
    }
    i += n;
    if b.get(i) == Some(&b'.') {
        let m = digits(i + 1);
        if m == 0 {
            return None;
        }
        i += 1 + m;
    }
    (b.get(i) == Some(&b')')).then_some(i + 1)
}
