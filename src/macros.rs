//! Helper macros used across the crate.

/// Lazily compile a [`Regex`](regex::Regex) with a custom panic message.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static FENCE: LazyLock<Regex> = zlmd::lazy_regex!(r"^\s*```", "fence");
/// assert!(FENCE.is_match("  ```rust"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}

/// Append a status line built from `format!` arguments.
///
/// Expands to a call of the named [`status`](crate::status) writer with
/// [`format_args!`], mirroring `write!`.
///
/// # Examples
///
/// ```
/// let mut info = String::new();
/// zlmd::status!(warn, &mut info, "{} retries left", 2);
/// assert_eq!(info, "⚠️ 2 retries left\n");
/// ```
#[macro_export]
macro_rules! status {
    ($kind:ident, $info:expr, $($arg:tt)*) => {
        $crate::status::$kind($info, format_args!($($arg)*))
    };
}
