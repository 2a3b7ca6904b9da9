// src/core/markup.rs
//
// The API packs lists into one string joined with HTML line breaks.
// Seen in the wild: `<br/>`, `<br>`, occasionally `<BR />`.

/// Split on every line-break tag, case-insensitive, with or without the
/// self-closing slash. Segments are returned untrimmed, empties included.
pub fn split_breaks(s: &str) -> Vec<&str> {
    // ASCII lowering keeps byte offsets, so indices into `lc` are valid in `s`.
    let lc = s.to_ascii_lowercase();
    let mut out = Vec::new();
    let mut seg_start = 0usize;
    let mut from = 0usize;

    while let Some(rel) = lc[from..].find("<br") {
        let open = from + rel;
        match break_tag_end(lc.as_bytes(), open + 3) {
            Some(end) => {
                out.push(&s[seg_start..open]);
                seg_start = end;
                from = end;
            }
            // `<brand>` and friends
            None => from = open + 3,
        }
    }
    out.push(&s[seg_start..]);
    out
}

/// Position just past the `>` closing a `<br` opener, or None if the tag
/// is something else.
fn break_tag_end(b: &[u8], mut i: usize) -> Option<usize> {
    let skip_ws = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_whitespace() {
            i += 1;
        }
        i
    };
    i = skip_ws(i);
    if b.get(i) == Some(&b'/') {
        i = skip_ws(i + 1);
    }
    (b.get(i) == Some(&b'>')).then_some(i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_all_break_forms() {
        assert_eq!(split_breaks("a<br/>b<br>c<BR />d<Br>e"), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn keeps_empty_and_untrimmed_segments() {
        assert_eq!(split_breaks(" a <br/><br/>b "), vec![" a ", "", "b "]);
    }

    #[test]
    fn ignores_tags_that_only_start_like_br() {
        assert_eq!(split_breaks("<brand>x<br/>y"), vec!["<brand>x", "y"]);
        assert_eq!(split_breaks("tail<br"), vec!["tail<br"]);
    }

    #[test]
    fn no_marker_yields_whole_string() {
        assert_eq!(split_breaks("쌀밥"), vec!["쌀밥"]);
        assert_eq!(split_breaks(""), vec![""]);
    }
}
