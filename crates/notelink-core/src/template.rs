/// Fixed body of a freshly created note: an H1 of the caption, a back-link
/// to the originating document's bare file name, and an empty content
/// placeholder.
///
/// The back-link carries no directory component, so it only resolves while
/// both files share a directory. That constraint is implicit and not
/// validated.
pub fn render_note_body(caption: &str, origin_basename: &str) -> String {
    format!("# {caption}\n\n[← back]({origin_basename})\n\n&nbsp;\n\n<!-- content  -->\n\n")
}
