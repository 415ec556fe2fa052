/// Compile a regex literal once and hand out a `&'static Regex`.
///
/// Patterns are literals checked by the date parsing tests, so a bad pattern
/// fails the first test that touches it rather than a caller.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
