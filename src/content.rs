//! The content handle: the minimal capability surface the renderer needs
//! from the object being linked to.

/// The designated main file field of a content item.
///
/// Contents backed by a file (a PDF report, an image) expose the field name
/// and the stored filename so links can point straight at the download route
/// instead of the object view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryField {
    /// Name of the field holding the file.
    pub name: String,
    /// Filename stored on that field.
    pub filename: String,
}

impl PrimaryField {
    /// Creates a primary field descriptor.
    pub fn new(name: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
        }
    }
}

/// Opaque handle to the object being linked to.
///
/// Implementations wrap whatever the hosting CMS calls a content object.
/// Every method is a read-only query; the renderer never mutates the content
/// it renders.
pub trait Content {
    /// The content's title, used as display text when no override is given.
    fn title(&self) -> String;

    /// Canonical absolute URL of the content.
    fn absolute_url(&self) -> String;

    /// Identifier of the content's type in the host's type registry.
    fn type_id(&self) -> String;

    /// Whether the content is currently locked (checked out) by someone.
    fn is_locked(&self) -> bool;

    /// The designated main file field, when the content has one.
    ///
    /// Absence is a normal outcome, not an error: most contents are not
    /// file-backed.
    fn primary_field(&self) -> Option<PrimaryField> {
        None
    }
}
