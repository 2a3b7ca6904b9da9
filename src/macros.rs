// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate `&str`-likes into one `String`, sized up front.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {{
        let parts: &[&str] = &[$(::core::convert::AsRef::<str>::as_ref(&$part)),+];
        let mut s = ::std::string::String::with_capacity(parts.iter().map(|p| p.len()).sum());
        for p in parts {
            s.push_str(p);
        }
        s
    }};
}
