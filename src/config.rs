//! Render-time options.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default anchor `target` attribute.
pub const DEFAULT_TARGET: &str = "_self";

/// Ellipsis appended by cropping unless overridden via the extra options.
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Options for one render call.
///
/// Every field is read for the duration of a single render and never mutated
/// by the renderer. The struct deserializes from a partial JSON bag, with
/// missing fields taking the defaults documented below.
///
/// ## Examples
///
/// ```
/// use prettylink::LinkConfig;
///
/// let config = LinkConfig::new()
///     .show_icons(false)
///     .max_length(24)
///     .target("_blank")
///     .additional_css_class("internal");
/// assert_eq!(config.target, "_blank");
/// assert_eq!(config.additional_css_classes, vec!["internal"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Append a `state-{reviewState}` class reflecting workflow state.
    /// Default `true`.
    pub show_colors: bool,
    /// Compute and render the icon list. Default `true`.
    pub show_icons: bool,
    /// Append a content-type icon, or the generated type class when the
    /// type has no icon expression. Default `false`.
    pub show_content_icon: bool,
    /// Render a lock icon when the content is locked. Default `true`.
    pub show_locked_icon: bool,
    /// Override for the display text; empty means "use the title".
    pub content_value: String,
    /// Override for the `title` attribute; single quotes are escaped.
    pub tag_title: String,
    /// Crop the display text to this many characters; 0 disables cropping.
    pub max_length: usize,
    /// Anchor `target` attribute. Default `_self`.
    pub target: String,
    /// Suffix appended verbatim to the computed URL.
    pub append_to_url: String,
    /// Extra CSS classes, kept in order after the fixed `pretty_link` class.
    pub additional_css_classes: Vec<String>,
    /// Caller's viewability hint. The renderer may downgrade this to false
    /// after the permission check, never upgrade it. Default `true`.
    pub is_viewable: bool,
    /// Passthrough options; only `ellipsis` is consumed today.
    pub extra: Map<String, Value>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            show_colors: true,
            show_icons: true,
            show_content_icon: false,
            show_locked_icon: true,
            content_value: String::new(),
            tag_title: String::new(),
            max_length: 0,
            target: DEFAULT_TARGET.to_string(),
            append_to_url: String::new(),
            additional_css_classes: Vec::new(),
            is_viewable: true,
            extra: Map::new(),
        }
    }
}

impl LinkConfig {
    /// Creates a config with the defaults documented on each field.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Builder methods
    // -------------------------------------------------------------------------

    /// Sets whether workflow state is reflected as a CSS class.
    pub fn show_colors(mut self, show: bool) -> Self {
        self.show_colors = show;
        self
    }

    /// Sets whether the icon list is rendered at all.
    pub fn show_icons(mut self, show: bool) -> Self {
        self.show_icons = show;
        self
    }

    /// Sets whether the content-type icon (or generated class) is rendered.
    pub fn show_content_icon(mut self, show: bool) -> Self {
        self.show_content_icon = show;
        self
    }

    /// Sets whether locked contents get a lock icon.
    pub fn show_locked_icon(mut self, show: bool) -> Self {
        self.show_locked_icon = show;
        self
    }

    /// Overrides the display text.
    pub fn content_value(mut self, value: impl Into<String>) -> Self {
        self.content_value = value.into();
        self
    }

    /// Overrides the `title` attribute.
    pub fn tag_title(mut self, title: impl Into<String>) -> Self {
        self.tag_title = title.into();
        self
    }

    /// Crops the display text to `length` characters (0 disables cropping).
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = length;
        self
    }

    /// Sets the anchor `target` attribute.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Appends `suffix` verbatim to the computed URL.
    pub fn append_to_url(mut self, suffix: impl Into<String>) -> Self {
        self.append_to_url = suffix.into();
        self
    }

    /// Adds one CSS class after the fixed `pretty_link` class.
    pub fn additional_css_class(mut self, class: impl Into<String>) -> Self {
        self.additional_css_classes.push(class.into());
        self
    }

    /// Replaces the extra CSS class list.
    pub fn additional_css_classes(mut self, classes: Vec<String>) -> Self {
        self.additional_css_classes = classes;
        self
    }

    /// Sets the caller's viewability hint.
    pub fn is_viewable(mut self, viewable: bool) -> Self {
        self.is_viewable = viewable;
        self
    }

    /// Sets the cropping ellipsis (stored in the extra options).
    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.extra
            .insert("ellipsis".to_string(), Value::String(ellipsis.into()));
        self
    }

    /// Sets an arbitrary passthrough option.
    pub fn extra_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Ellipsis to hand the cropping service, resolved from the extra
    /// options (default `...`).
    pub fn crop_ellipsis(&self) -> &str {
        self.extra
            .get("ellipsis")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ELLIPSIS)
    }
}
