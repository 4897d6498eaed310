//! Content handles and the drawer's inner content area
//!
//! The engine does not own a view tree; the host does. Content placed in
//! a drawer is tracked as opaque [`ContentId`] handles, and the drawer
//! redirects every insertion into its inner content area so children
//! never end up attached to the drawer's own root.

/// Opaque handle for a piece of host-owned content placed inside a
/// drawer.
///
/// The engine only tracks ordering and membership; what the handle
/// refers to (a view, a node id, a widget key) is the host's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentId(String);

impl ContentId {
    /// Create a new content handle.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the handle as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for ContentId {
    fn from(s: S) -> Self {
        Self::new(s)
    }
}

/// The drawer's inner container: the ordered children the host should
/// lay out inside the sheet.
#[derive(Debug, Default)]
pub(crate) struct ContentArea {
    children: Vec<ContentId>,
}

impl ContentArea {
    pub fn push(&mut self, child: ContentId) {
        self.children.push(child);
    }

    pub fn remove(&mut self, child: &ContentId) -> bool {
        let before = self.children.len();
        self.children.retain(|existing| existing != child);
        self.children.len() != before
    }

    pub fn children(&self) -> &[ContentId] {
        &self.children
    }
}
