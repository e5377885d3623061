use crate::comment::{Documented, best_comment};
use crate::model::ExtractResult;
use crate::render::render_content;
use crate::tags::format_tags;

/// Resolves the best comment for `reflection` and splits it into a trimmed
/// summary and formatted tag lines. Undocumented reflections yield an empty
/// result.
pub fn extract_description_and_tags<R: Documented + ?Sized>(reflection: &R) -> ExtractResult {
    match best_comment(reflection) {
        Some(comment) => ExtractResult {
            summary: render_content(&comment.summary).trim().to_string(),
            tags: format_tags(&comment.block_tags, &comment.modifier_tags),
        },
        None => ExtractResult::default(),
    }
}

/// Joins the summary and tag lines with blank lines in between.
pub fn build_description(summary: &str, tags: &[String]) -> String {
    let description = if tags.is_empty() {
        summary.to_string()
    } else {
        let mut output = String::new();
        if !summary.is_empty() {
            output.push_str(summary);
            output.push_str("\n\n");
        }
        output.push_str(&tags.join("\n\n"));
        output
    };
    description.trim().to_string()
}

/// Full description text for a reflection.
pub fn describe<R: Documented + ?Sized>(reflection: &R) -> String {
    let ExtractResult { summary, tags } = extract_description_and_tags(reflection);
    build_description(&summary, &tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        BlockTag, Comment, DeclarationKind, DeclarationNode, Fragment, SignatureNode,
    };

    #[test]
    fn joins_summary_and_tags() {
        let tags = vec!["@returns\na number".to_string()];
        assert_eq!(
            build_description("Does X.", &tags),
            "Does X.\n\n@returns\na number"
        );
    }

    #[test]
    fn handles_missing_parts() {
        assert_eq!(build_description("", &[]), "");
        assert_eq!(build_description("Does X.", &[]), "Does X.");
        assert_eq!(
            build_description("", &["@beta".to_string(), "@since 2".to_string()]),
            "@beta\n\n@since 2"
        );
    }

    #[test]
    fn trims_result() {
        assert_eq!(build_description("  padded \n", &[]), "padded");
    }

    #[test]
    fn extracts_through_signature_fallback() {
        let comment = Comment {
            summary: vec![
                Fragment::text("  Parses "),
                Fragment::code("src"),
                Fragment::text(". "),
            ],
            ..Comment::default()
        }
        .with_block_tag(BlockTag::new("throws", vec![Fragment::text("SyntaxError")]))
        .with_modifier("beta");

        let node = DeclarationNode::new("parse", DeclarationKind::Function)
            .with_signature(SignatureNode::new("parse").with_comment(comment));

        let extracted = extract_description_and_tags(&node);
        assert_eq!(extracted.summary, "Parses `src`.");
        assert_eq!(extracted.tags, ["@beta", "@throws\nSyntaxError"]);
        assert_eq!(
            describe(&node),
            "Parses `src`.\n\n@beta\n\n@throws\nSyntaxError"
        );
    }

    #[test]
    fn undocumented_reflection_has_empty_description() {
        let node = DeclarationNode::new("bar", DeclarationKind::Function);
        assert_eq!(
            extract_description_and_tags(&node),
            ExtractResult::default()
        );
        assert_eq!(describe(&node), "");
    }
}
