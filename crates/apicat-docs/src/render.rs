use crate::model::Fragment;

/// Flattens rich-text fragments into plain text.
///
/// Inline code keeps its backtick markers; references render their display
/// text, or the target's name when the display text is empty.
pub fn render_content(fragments: &[Fragment]) -> String {
    let mut output = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::Text { text } => output.push_str(text),
            Fragment::Code { text } => {
                output.push('`');
                output.push_str(text);
                output.push('`');
            }
            Fragment::InlineReference {
                display_text,
                target_name,
            } => {
                if !display_text.is_empty() {
                    output.push_str(display_text);
                } else if let Some(target) = target_name {
                    output.push_str(target);
                }
            }
            Fragment::Unsupported => {}
        }
    }
    output
}
