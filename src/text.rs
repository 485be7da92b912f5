//! Text helpers shared by the renderer: the single-quote escape the output
//! format requires, and the default cropping routine.

/// Replaces every `'` with the HTML entity `&#39;`.
///
/// The rendered markup uses single-quoted attributes, so this is the one
/// escape the renderer guarantees. Everything else in the input passes
/// through untouched.
///
/// ## Examples
///
/// ```
/// use prettylink::text::escape_single_quotes;
///
/// assert_eq!(escape_single_quotes("John's Report"), "John&#39;s Report");
/// assert_eq!(escape_single_quotes("plain"), "plain");
/// ```
pub fn escape_single_quotes(text: &str) -> String {
    text.replace('\'', "&#39;")
}

/// Truncates `text` to at most `max_length` characters and appends
/// `ellipsis` when something was cut.
///
/// A `max_length` of zero disables truncation entirely. Boundaries are
/// `char` boundaries, so multi-byte input is never split mid-codepoint.
///
/// ## Examples
///
/// ```
/// use prettylink::text::crop_text;
///
/// assert_eq!(crop_text("a rather long title", 8, "..."), "a rather...");
/// assert_eq!(crop_text("short", 8, "..."), "short");
/// assert_eq!(crop_text("never cropped", 0, "..."), "never cropped");
/// ```
pub fn crop_text(text: &str, max_length: usize, ellipsis: &str) -> String {
    if max_length == 0 || text.chars().count() <= max_length {
        return text.to_string();
    }

    let mut cropped: String = text.chars().take(max_length).collect();
    cropped.push_str(ellipsis);
    cropped
}
