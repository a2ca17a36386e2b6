pub mod time;

/// Slugify a caption for use in a note filename.
///
/// Rules (deliberately minimal, the filename contract is exact):
/// - Convert to lowercase
/// - Replace every space with a hyphen
///
/// No other characters are touched; captions are free text and the
/// filename keeps whatever the user typed.
///
/// # Examples
///
/// ```
/// use notelink_core::slugify_caption;
///
/// assert_eq!(slugify_caption("Project Ideas"), "project-ideas");
/// assert_eq!(slugify_caption("New Note"), "new-note");
/// assert_eq!(slugify_caption("A  B"), "a--b"); // Consecutive spaces → consecutive hyphens
/// assert_eq!(slugify_caption("2024 Q2 (draft)"), "2024-q2-(draft)"); // Punctuation kept
/// ```
pub fn slugify_caption(caption: &str) -> String {
    caption.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_caption() {
        assert_eq!(slugify_caption("Project Ideas"), "project-ideas");
        assert_eq!(slugify_caption("single"), "single");
        assert_eq!(slugify_caption("UPPER CASE"), "upper-case");
        assert_eq!(slugify_caption("A  B  C"), "a--b--c"); // Consecutive spaces
        assert_eq!(slugify_caption("Hello (World)!"), "hello-(world)!"); // Punctuation kept
        assert_eq!(slugify_caption(" edges "), "-edges-"); // Edge spaces kept
        assert_eq!(slugify_caption("你好 World"), "你好-world"); // Unicode kept
    }
}
