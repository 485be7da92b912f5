//! The host facade: everything the renderer asks of the CMS it runs inside.

use crate::content::Content;
use crate::text;

/// Descriptor for a content type, as stored in the host's type registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Registry identifier of the type.
    pub id: String,
    /// Human-readable type title (a translatable message id).
    pub title: String,
    /// Translation domain the title belongs to.
    pub i18n_domain: String,
    /// Expression naming the type's icon asset, when the type has one.
    ///
    /// Hosts typically store something like
    /// `string:${portal_url}/myContentIcon.png`; only the last path segment
    /// is used as the icon filename.
    pub icon_expr: Option<String>,
}

impl TypeDescriptor {
    /// Creates a descriptor without an icon expression.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        i18n_domain: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            i18n_domain: i18n_domain.into(),
            icon_expr: None,
        }
    }

    /// Sets the icon expression.
    pub fn with_icon_expr(mut self, expr: impl Into<String>) -> Self {
        self.icon_expr = Some(expr.into());
        self
    }
}

/// Host framework surface the renderer queries.
///
/// Two methods are required; the rest default to "feature absent" behavior
/// so a minimal host stays small. Lookups that can come up empty return
/// `Option`, and that is the whole contract: absence degrades the rendered
/// output, it never aborts it.
pub trait Host {
    /// Whether the current user may view `content`.
    fn has_view_permission(&self, content: &dyn Content) -> bool;

    /// Root URL prefix for icon assets.
    fn base_url(&self) -> String;

    /// Best-effort localization of `key` in `domain`.
    ///
    /// The default hands back `default` unchanged; implementations should
    /// do the same for unknown keys. Returning the fallback is how
    /// "translation never fails" stays true.
    fn translate(&self, key: &str, domain: &str, default: &str) -> String {
        let _ = (key, domain);
        default.to_string()
    }

    /// Truncates `text` to `max_length` characters, appending `ellipsis`
    /// when something was cut.
    ///
    /// The default is plain character truncation; hosts with smarter
    /// cropping (word boundaries, display width) can override.
    fn crop(&self, text: &str, max_length: usize, ellipsis: &str) -> String {
        text::crop_text(text, max_length, ellipsis)
    }

    /// Workflow review state of `content`, or `None` when the content is
    /// not workflow-managed.
    fn review_state(&self, content: &dyn Content) -> Option<String> {
        let _ = content;
        None
    }

    /// Looks up `type_id` in the type registry.
    ///
    /// `None` means the registry does not know the type; the renderer then
    /// omits both the type icon and the generated type class.
    fn type_descriptor(&self, type_id: &str) -> Option<TypeDescriptor> {
        let _ = type_id;
        None
    }
}
