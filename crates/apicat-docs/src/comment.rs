//! Locating the documentation comment that best describes a reflection.

use crate::model::{Comment, DeclarationNode, SignatureNode};

/// Anything in the reflected model that can carry documentation.
pub trait Documented {
    /// Comment attached directly to this reflection.
    fn own_comment(&self) -> Option<&Comment>;

    /// Signatures whose comments may stand in for a missing one.
    fn signatures(&self) -> &[SignatureNode] {
        &[]
    }
}

impl Documented for DeclarationNode {
    fn own_comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    fn signatures(&self) -> &[SignatureNode] {
        &self.signatures
    }
}

impl Documented for SignatureNode {
    fn own_comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }
}

/// Returns the reflection's own comment, falling back to the comment on its
/// first signature.
///
/// Functions are usually documented on the signature rather than the
/// declaration, so `export function foo() {}` with a leading doc comment
/// resolves through the fallback. `None` means the reflection is simply
/// undocumented.
pub fn best_comment<R: Documented + ?Sized>(reflection: &R) -> Option<&Comment> {
    reflection.own_comment().or_else(|| {
        reflection
            .signatures()
            .first()
            .and_then(|signature| signature.comment.as_ref())
    })
}
