//! Conversion from TypeDoc's serialized project model.
//!
//! TypeDoc (`typedoc --json`) writes the whole reflection tree as one JSON
//! document. Reflections carry a numeric `kind` flag, signatures reuse the
//! reflection shape, and `{@link}` targets are reflection ids.

use apicat_docs::{
    BlockTag, Comment, DeclarationKind, DeclarationNode, DeclarationTree, Fragment, SignatureNode,
};
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// `ReflectionKind.Project`.
pub const PROJECT_KIND: u64 = 1;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawReflection {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    kind: u64,
    #[serde(default)]
    comment: Option<RawComment>,
    #[serde(default)]
    signatures: Vec<RawReflection>,
    #[serde(default)]
    children: Vec<RawReflection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawComment {
    #[serde(default)]
    summary: Vec<RawPart>,
    #[serde(default)]
    block_tags: Vec<RawBlockTag>,
    #[serde(default)]
    modifier_tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawBlockTag {
    tag: String,
    /// Parameter name for `@param` / `@typeParam`; TypeDoc strips it from
    /// the content.
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    content: Vec<RawPart>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum RawPart {
    Text {
        text: String,
    },
    Code {
        text: String,
    },
    InlineTag {
        #[serde(default)]
        text: String,
        #[serde(default)]
        target: Option<RawTarget>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTarget {
    Reflection(u64),
    Url(String),
    #[serde(rename_all = "camelCase")]
    External {
        #[serde(default)]
        qualified_name: Option<String>,
    },
}

/// Maps TypeDoc's `ReflectionKind` flags onto declaration kinds.
pub fn declaration_kind(flag: u64) -> DeclarationKind {
    match flag {
        1 => DeclarationKind::Project,
        2 => DeclarationKind::Module,
        4 => DeclarationKind::Namespace,
        8 => DeclarationKind::Enum,
        16 => DeclarationKind::EnumMember,
        32 => DeclarationKind::Variable,
        64 => DeclarationKind::Function,
        128 => DeclarationKind::Class,
        256 => DeclarationKind::Interface,
        512 => DeclarationKind::Constructor,
        1024 => DeclarationKind::Property,
        2048 => DeclarationKind::Method,
        262_144 => DeclarationKind::Accessor,
        2_097_152 => DeclarationKind::TypeAlias,
        4_194_304 => DeclarationKind::Reference,
        _ => DeclarationKind::Other,
    }
}

impl RawReflection {
    /// Builds the declaration tree rooted at this (project) reflection.
    pub(crate) fn into_tree(self) -> DeclarationTree {
        let mut names = FxHashMap::default();
        self.collect_names(&mut names);

        let converter = Converter { names: &names };
        DeclarationTree {
            name: self.name,
            children: self
                .children
                .into_iter()
                .map(|child| converter.declaration(child))
                .collect(),
        }
    }

    fn collect_names(&self, names: &mut FxHashMap<u64, String>) {
        names.insert(self.id, self.name.clone());
        for nested in self.children.iter().chain(&self.signatures) {
            nested.collect_names(names);
        }
    }
}

struct Converter<'a> {
    names: &'a FxHashMap<u64, String>,
}

impl Converter<'_> {
    fn declaration(&self, raw: RawReflection) -> DeclarationNode {
        DeclarationNode {
            kind: declaration_kind(raw.kind),
            comment: raw.comment.map(|comment| self.comment(comment)),
            signatures: raw
                .signatures
                .into_iter()
                .map(|signature| SignatureNode {
                    comment: signature.comment.map(|comment| self.comment(comment)),
                    name: signature.name,
                })
                .collect(),
            children: raw
                .children
                .into_iter()
                .map(|child| self.declaration(child))
                .collect(),
            name: raw.name,
        }
    }

    fn comment(&self, raw: RawComment) -> Comment {
        Comment {
            summary: self.fragments(raw.summary),
            block_tags: raw
                .block_tags
                .into_iter()
                .map(|tag| {
                    let mut content = Vec::with_capacity(tag.content.len() + 1);
                    if let Some(name) = tag.name.filter(|name| !name.is_empty()) {
                        content.push(Fragment::text(format!("{name} - ")));
                    }
                    content.extend(self.fragments(tag.content));
                    BlockTag::new(tag.tag, content)
                })
                .collect(),
            modifier_tags: raw.modifier_tags.into_iter().collect(),
        }
    }

    fn fragments(&self, parts: Vec<RawPart>) -> Vec<Fragment> {
        parts.into_iter().map(|part| self.fragment(part)).collect()
    }

    fn fragment(&self, part: RawPart) -> Fragment {
        match part {
            RawPart::Text { text } => Fragment::Text { text },
            RawPart::Code { text } => code_fragment(text),
            RawPart::InlineTag { text, target } => {
                let target_name = target.and_then(|target| match target {
                    RawTarget::Reflection(id) => self.names.get(&id).cloned(),
                    RawTarget::Url(url) => Some(url),
                    RawTarget::External { qualified_name } => qualified_name,
                });
                Fragment::reference(text, target_name)
            }
            RawPart::Other => Fragment::Unsupported,
        }
    }
}

/// TypeDoc keeps the backticks of inline code in the text. Inline spans are
/// unwrapped so the renderer can re-add them; fenced blocks stay verbatim.
fn code_fragment(text: String) -> Fragment {
    if text.starts_with("```") {
        return Fragment::Text { text };
    }
    match text
        .strip_prefix('`')
        .and_then(|inner| inner.strip_suffix('`'))
    {
        Some(inner) => Fragment::code(inner),
        None => Fragment::Code { text },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(value: serde_json::Value) -> DeclarationTree {
        RawReflection::deserialize(&value).unwrap().into_tree()
    }

    #[test]
    fn maps_reflection_kinds() {
        assert_eq!(declaration_kind(64), DeclarationKind::Function);
        assert_eq!(declaration_kind(2_097_152), DeclarationKind::TypeAlias);
        assert_eq!(declaration_kind(4096), DeclarationKind::Other);
    }

    #[test]
    fn unwraps_inline_code_only() {
        assert_eq!(code_fragment("`x`".to_string()), Fragment::code("x"));
        assert_eq!(
            code_fragment("```ts\nx\n```".to_string()),
            Fragment::text("```ts\nx\n```")
        );
        assert_eq!(code_fragment("x".to_string()), Fragment::code("x"));
    }

    #[test]
    fn resolves_link_targets_by_id() {
        let tree = convert(json!({
            "id": 0, "name": "lib", "kind": 1,
            "children": [
                { "id": 1, "name": "parse", "kind": 64 },
                {
                    "id": 2, "name": "Parser", "kind": 128,
                    "comment": { "summary": [
                        { "kind": "text", "text": "Wraps " },
                        { "kind": "inline-tag", "tag": "@link", "text": "", "target": 1 },
                        {
                            "kind": "inline-tag",
                            "tag": "@link",
                            "text": "",
                            "target": "https://example.com"
                        }
                    ] }
                }
            ]
        }));

        let comment = tree.children[1].comment.as_ref().unwrap();
        assert_eq!(
            comment.summary[1],
            Fragment::reference("", Some("parse".to_string()))
        );
        assert_eq!(
            comment.summary[2],
            Fragment::reference("", Some("https://example.com".to_string()))
        );
    }

    #[test]
    fn param_names_lead_the_tag_content() {
        let tree = convert(json!({
            "id": 0, "name": "lib", "kind": 1,
            "children": [{
                "id": 1, "name": "scale", "kind": 64,
                "signatures": [{
                    "id": 2, "name": "scale", "kind": 4096,
                    "comment": {
                        "summary": [],
                        "blockTags": [{
                            "tag": "@param",
                            "name": "factor",
                            "content": [{ "kind": "text", "text": "multiplier" }]
                        }],
                        "modifierTags": ["@beta"]
                    }
                }]
            }]
        }));

        let comment = tree.children[0].signatures[0].comment.as_ref().unwrap();
        assert_eq!(comment.block_tags[0].tag_name, "@param");
        assert_eq!(
            comment.block_tags[0].content,
            [Fragment::text("factor - "), Fragment::text("multiplier")]
        );
        assert!(comment.modifier_tags.contains("@beta"));
    }
}
