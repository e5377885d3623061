use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Root of a reflected library surface, as produced by a reflection engine.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationTree {
    /// Project (library) name.
    pub name: String,
    /// Top-level declarations in discovery order.
    #[serde(default)]
    pub children: Vec<DeclarationNode>,
}

impl DeclarationTree {
    /// Creates an empty tree for the named project.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Adds a top-level declaration.
    pub fn with_child(mut self, child: DeclarationNode) -> Self {
        self.children.push(child);
        self
    }

    /// Iterates every declaration in pre-order: parents before members,
    /// siblings in their original order.
    pub fn walk(&self) -> impl Iterator<Item = &DeclarationNode> {
        let mut stack: Vec<&DeclarationNode> = self.children.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

/// A named declaration in the reflected model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationNode {
    /// Declared identifier.
    pub name: String,
    /// Reflection kind.
    pub kind: DeclarationKind,
    /// Documentation attached directly to the declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    /// Callable signatures (overloads), in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<SignatureNode>,
    /// Member declarations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DeclarationNode>,
}

impl DeclarationNode {
    /// Creates an undocumented declaration with no signatures or members.
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            comment: None,
            signatures: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn with_signature(mut self, signature: SignatureNode) -> Self {
        self.signatures.push(signature);
        self
    }

    pub fn with_child(mut self, child: DeclarationNode) -> Self {
        self.children.push(child);
        self
    }
}

/// A callable signature belonging to a declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureNode {
    /// Signature name (usually the owning declaration's name).
    pub name: String,
    /// Documentation attached to this signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

impl SignatureNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }
}

/// Reflection kinds understood by the walker.
///
/// Only kinds present in the active [`KindMap`] produce catalog items; the
/// rest are walked for members and otherwise ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    Project,
    Module,
    Namespace,
    Enum,
    EnumMember,
    Variable,
    Function,
    Class,
    Interface,
    Constructor,
    Property,
    Method,
    Accessor,
    TypeAlias,
    Reference,
    Other,
}

/// A documentation comment.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Summary paragraph.
    #[serde(default)]
    pub summary: Vec<Fragment>,
    /// Content-bearing tags in source order.
    #[serde(default)]
    pub block_tags: Vec<BlockTag>,
    /// Bare tags such as `beta` or `internal`.
    #[serde(default)]
    pub modifier_tags: IndexSet<String>,
}

impl Comment {
    /// Creates a comment whose summary is a single text fragment.
    pub fn from_summary(text: impl Into<String>) -> Self {
        Self {
            summary: vec![Fragment::text(text)],
            ..Self::default()
        }
    }

    pub fn with_block_tag(mut self, tag: BlockTag) -> Self {
        self.block_tags.push(tag);
        self
    }

    pub fn with_modifier(mut self, tag: impl Into<String>) -> Self {
        self.modifier_tags.insert(tag.into());
        self
    }
}

/// One piece of a rich-text comment body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Fragment {
    /// Literal text.
    Text { text: String },
    /// Inline code, rendered between backticks.
    Code { text: String },
    /// `{@link ...}` style reference.
    #[serde(rename_all = "camelCase")]
    InlineReference {
        #[serde(default)]
        display_text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_name: Option<String>,
    },
    /// Any fragment kind this crate does not render.
    #[serde(other)]
    Unsupported,
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::Code { text: text.into() }
    }

    pub fn reference(display_text: impl Into<String>, target_name: Option<String>) -> Self {
        Self::InlineReference {
            display_text: display_text.into(),
            target_name,
        }
    }
}

/// A named block tag (`@returns`, `@example`, ...) with a rich-text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTag {
    /// Tag name, with or without the leading `@`.
    pub tag_name: String,
    /// Tag body.
    #[serde(default)]
    pub content: Vec<Fragment>,
}

impl BlockTag {
    pub fn new(tag_name: impl Into<String>, content: Vec<Fragment>) -> Self {
        Self {
            tag_name: tag_name.into(),
            content,
        }
    }
}

/// Summary and formatted tags extracted from a single comment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractResult {
    pub summary: String,
    pub tags: Vec<String>,
}

/// Kinds of entries in the generated catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Function,
    Class,
    Interface,
    Type,
    Variable,
    Object,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Function => "function",
            ItemKind::Class => "class",
            ItemKind::Interface => "interface",
            ItemKind::Type => "type",
            ItemKind::Variable => "variable",
            ItemKind::Object => "object",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the generated catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiItem {
    pub name: String,
    pub kind: ItemKind,
    pub description: String,
}

impl ApiItem {
    pub fn new(name: impl Into<String>, kind: ItemKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
        }
    }
}

/// Deduplicated catalog and its size, handed from processing to writing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    pub items: Vec<ApiItem>,
    pub count: usize,
}

impl ProcessingResult {
    pub fn new(items: Vec<ApiItem>) -> Self {
        let count = items.len();
        Self { items, count }
    }
}

/// Maps reflection kinds onto catalog kinds.
///
/// A declaration kind without an entry is unsupported and never produces an
/// item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindMap(BTreeMap<DeclarationKind, ItemKind>);

impl KindMap {
    /// A map with no supported kinds.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, kind: DeclarationKind, item_kind: ItemKind) -> Self {
        self.0.insert(kind, item_kind);
        self
    }

    pub fn get(&self, kind: DeclarationKind) -> Option<ItemKind> {
        self.0.get(&kind).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for KindMap {
    fn default() -> Self {
        Self::empty()
            .with(DeclarationKind::Function, ItemKind::Function)
            .with(DeclarationKind::Class, ItemKind::Class)
            .with(DeclarationKind::Interface, ItemKind::Interface)
            .with(DeclarationKind::TypeAlias, ItemKind::Type)
            .with(DeclarationKind::Variable, ItemKind::Variable)
            .with(DeclarationKind::Enum, ItemKind::Object)
            .with(DeclarationKind::Namespace, ItemKind::Object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_visits_parents_before_members() {
        let tree = DeclarationTree::new("lib")
            .with_child(
                DeclarationNode::new("Shape", DeclarationKind::Class)
                    .with_child(DeclarationNode::new("area", DeclarationKind::Method)),
            )
            .with_child(DeclarationNode::new("origin", DeclarationKind::Variable));

        let names: Vec<_> = tree.walk().map(|node| node.name.as_str()).collect();
        assert_eq!(names, ["Shape", "area", "origin"]);
    }

    #[test]
    fn unknown_fragment_kinds_deserialize_as_unsupported() {
        let fragment: Fragment =
            serde_json::from_str(r#"{"kind":"relative-link","text":"./x.md"}"#).unwrap();
        assert_eq!(fragment, Fragment::Unsupported);
    }

    #[test]
    fn default_kind_map_skips_members() {
        let kinds = KindMap::default();
        assert_eq!(kinds.get(DeclarationKind::TypeAlias), Some(ItemKind::Type));
        assert_eq!(kinds.get(DeclarationKind::Method), None);
        assert_eq!(kinds.get(DeclarationKind::Property), None);
    }

    #[test]
    fn item_kind_serializes_lowercase() {
        let item = ApiItem::new("Point", ItemKind::Interface, "");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["kind"], "interface");
    }
}
