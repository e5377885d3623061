use indexmap::IndexSet;

use crate::model::BlockTag;
use crate::render::render_content;

/// Tags whose body is placed on the line after the tag name.
pub const LONG_FORM_TAGS: [&str; 4] = ["@example", "@remarks", "@returns", "@throws"];

/// Formats modifier tags followed by block tags, one string per tag.
///
/// Long-form tags (see [`LONG_FORM_TAGS`]) render as `"@tag\nbody"`, every
/// other tag as `"@tag body"`. A tag without a body renders as its bare name.
pub fn format_tags(block_tags: &[BlockTag], modifier_tags: &IndexSet<String>) -> Vec<String> {
    let modifiers = modifier_tags.iter().map(|tag| normalize_tag_name(tag));
    let blocks = block_tags.iter().map(format_block_tag);

    modifiers
        .chain(blocks)
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Formats a single block tag.
pub fn format_block_tag(tag: &BlockTag) -> String {
    let tag_name = normalize_tag_name(&tag.tag_name);
    let content = render_content(&tag.content);
    let content = content.trim();

    if content.is_empty() {
        return tag_name;
    }

    if is_long_form(&tag_name) {
        format!("{tag_name}\n{content}")
    } else {
        format!("{tag_name} {content}")
    }
}

/// Ensures the tag name carries exactly one leading `@`.
pub fn normalize_tag_name(name: &str) -> String {
    if name.starts_with('@') {
        name.to_string()
    } else {
        format!("@{name}")
    }
}

fn is_long_form(tag_name: &str) -> bool {
    LONG_FORM_TAGS.contains(&tag_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fragment;

    fn tag(name: &str, body: &str) -> BlockTag {
        BlockTag::new(name, vec![Fragment::text(body)])
    }

    #[test]
    fn long_form_tags_break_the_line() {
        assert_eq!(
            format_block_tag(&tag("returns", "a number")),
            "@returns\na number"
        );
        assert_eq!(
            format_block_tag(&tag("@example", "  foo(1)\n")),
            "@example\nfoo(1)"
        );
    }

    #[test]
    fn short_form_tags_stay_inline() {
        assert_eq!(
            format_block_tag(&tag("param", "x - the input")),
            "@param x - the input"
        );
        assert_eq!(format_block_tag(&tag("@since", "1.2")), "@since 1.2");
    }

    #[test]
    fn empty_body_renders_bare_name() {
        assert_eq!(format_block_tag(&tag("returns", "   ")), "@returns");
        assert_eq!(
            format_block_tag(&BlockTag::new("deprecated", vec![])),
            "@deprecated"
        );
    }

    #[test]
    fn marker_is_never_doubled() {
        assert_eq!(normalize_tag_name("@throws"), "@throws");
        assert_eq!(normalize_tag_name("throws"), "@throws");
    }

    #[test]
    fn modifiers_come_before_block_tags() {
        let mut modifiers = IndexSet::new();
        modifiers.insert("beta".to_string());
        modifiers.insert("@internal".to_string());

        let lines = format_tags(&[tag("param", "x - the input")], &modifiers);
        assert_eq!(lines, ["@beta", "@internal", "@param x - the input"]);
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(format_tags(&[], &IndexSet::new()).is_empty());
    }
}
