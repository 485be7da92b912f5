//! The renderer itself.
//!
//! [`PrettyLink`] pairs a content handle with a [`LinkConfig`] and renders
//! one HTML fragment: an anchor when the content is viewable, a
//! non-clickable `<div>` placeholder when it is not.

use std::fmt;

use crate::config::LinkConfig;
use crate::content::Content;
use crate::error::{PrettyLinkError, Result};
use crate::host::{Host, TypeDescriptor};
use crate::icons::{self, Icon, IconSource};
use crate::text::escape_single_quotes;

/// Fixed first CSS class on every rendered fragment.
pub const BASE_CSS_CLASS: &str = "pretty_link";

/// Translation domain for the strings this crate owns.
pub const TRANSLATION_DOMAIN: &str = "prettylink";

/// Message key for the help text shown on non-viewable placeholders.
pub const NOT_VIEWABLE_KEY: &str = "can_not_access_this_element";

/// Fallback help text when translation has nothing better.
const NOT_VIEWABLE_DEFAULT: &str =
    "<span class='discreet no_access'>(You can not access this element)</span>";

/// Asset filename of the lock indicator.
const LOCK_ICON_FILE: &str = "lock_icon.png";

/// Renders one content object as a pretty link.
///
/// Construction resolves everything that decides *which* fragment gets
/// rendered: the permission check, the localized not-viewable help message,
/// and quote escaping of the title override. [`render`] then assembles the
/// string from that resolved state plus read-only host lookups, so it can be
/// called any number of times.
///
/// ## Examples
///
/// ```
/// use prettylink::testing::{TestContent, TestHost};
/// use prettylink::{LinkConfig, PrettyLink};
///
/// let host = TestHost::new("https://cms.example.org");
/// let report = TestContent::new("Report", "https://cms.example.org/report");
///
/// let html = PrettyLink::new(&host, &report, LinkConfig::new()).render();
/// assert!(html.starts_with("<a class='pretty_link'"));
/// ```
///
/// [`render`]: PrettyLink::render
pub struct PrettyLink<'a> {
    host: &'a dyn Host,
    content: &'a dyn Content,
    config: LinkConfig,
    /// Effective viewability after the construction-time permission check.
    viewable: bool,
    /// Help message for the placeholder branch, resolved eagerly.
    not_viewable_message: String,
    /// `config.tag_title` with quotes already escaped.
    tag_title: String,
    leading_icons: Option<Box<dyn IconSource + 'a>>,
    trailing_icons: Option<Box<dyn IconSource + 'a>>,
}

impl<'a> PrettyLink<'a> {
    /// Creates a renderer for `content`.
    ///
    /// This is the eager phase. When `config.is_viewable` is true the host's
    /// View permission is checked here and a denial downgrades the hint; a
    /// false hint is taken at its word and no permission query is made. The
    /// not-viewable help message is localized here so the placeholder branch
    /// needs no further lookups, and single quotes in `config.tag_title` are
    /// escaped here.
    pub fn new(host: &'a dyn Host, content: &'a dyn Content, config: LinkConfig) -> Self {
        let viewable = config.is_viewable && {
            let granted = host.has_view_permission(content);
            if !granted {
                tracing::debug!(
                    url = %content.absolute_url(),
                    "view permission denied, rendering placeholder"
                );
            }
            granted
        };
        let not_viewable_message =
            host.translate(NOT_VIEWABLE_KEY, TRANSLATION_DOMAIN, NOT_VIEWABLE_DEFAULT);
        let tag_title = escape_single_quotes(&config.tag_title);

        Self {
            host,
            content,
            config,
            viewable,
            not_viewable_message,
            tag_title,
            leading_icons: None,
            trailing_icons: None,
        }
    }

    /// Creates a renderer from an optional content lookup.
    ///
    /// Convenience for callers holding a catalog or traversal result: a
    /// missing handle is the one fatal error this crate knows.
    ///
    /// ## Errors
    ///
    /// Returns [`PrettyLinkError::MissingContent`] when `content` is `None`.
    ///
    /// ## Examples
    ///
    /// ```
    /// use prettylink::testing::TestHost;
    /// use prettylink::{LinkConfig, PrettyLink, PrettyLinkError};
    ///
    /// let host = TestHost::new("https://cms.example.org");
    /// let missing = PrettyLink::create(&host, None, LinkConfig::new());
    /// assert!(matches!(missing, Err(PrettyLinkError::MissingContent)));
    /// ```
    pub fn create(
        host: &'a dyn Host,
        content: Option<&'a dyn Content>,
        config: LinkConfig,
    ) -> Result<Self> {
        match content {
            Some(content) => Ok(Self::new(host, content, config)),
            None => Err(PrettyLinkError::MissingContent),
        }
    }

    // -------------------------------------------------------------------------
    // Icon hooks
    // -------------------------------------------------------------------------

    /// Injects icons rendered before the built-in lock and type icons.
    pub fn with_leading_icons(mut self, source: impl IconSource + 'a) -> Self {
        self.leading_icons = Some(Box::new(source));
        self
    }

    /// Injects icons rendered after the built-in lock and type icons.
    pub fn with_trailing_icons(mut self, source: impl IconSource + 'a) -> Self {
        self.trailing_icons = Some(Box::new(source));
        self
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Renders the HTML fragment.
    ///
    /// Viewable contents render as an anchor; everything else renders as a
    /// `<div>` placeholder carrying the same classes and title plus the
    /// localized help message. All host lookups are read-only, so repeated
    /// calls with unchanged host state produce identical output.
    pub fn render(&self) -> String {
        let complete_text = self.display_text();
        let cropped_text = self.cropped(&complete_text);
        let title = self.title_attribute(&complete_text);
        let css = self.css_classes();
        let icons = self.icons_markup();
        let text = escape_single_quotes(&cropped_text);

        if self.viewable {
            format!(
                "<a class='{css}' title='{title}' href='{url}' target='{target}'>{icons}<span class='pretty_link_content'>{text}</span></a>",
                url = self.url(),
                target = self.config.target,
            )
        } else {
            let text = if self.not_viewable_message.is_empty() {
                text
            } else {
                format!("{text} {message}", message = self.not_viewable_message)
            };
            format!(
                "<div class='{css}' title='{title}'>{icons}<span class='pretty_link_content'>{text}</span></div>"
            )
        }
    }

    /// The space-joined class list: the fixed `pretty_link` class first,
    /// then the configured extra classes in order, then the workflow state
    /// class, then the generated type class.
    pub fn css_classes(&self) -> String {
        let mut classes = vec![BASE_CSS_CLASS.to_string()];
        classes.extend(self.config.additional_css_classes.iter().cloned());

        if self.config.show_colors {
            if let Some(state) = self.host.review_state(self.content) {
                classes.push(format!("state-{state}"));
            }
        }
        if self.config.show_content_icon {
            if let Some(descriptor) = self.content_type() {
                if descriptor.icon_expr.is_none() {
                    classes.push(format!("contenttype-{}", descriptor.id));
                }
            }
        }

        classes.join(" ")
    }

    // -------------------------------------------------------------------------
    // Resolution helpers
    // -------------------------------------------------------------------------

    /// The display text before cropping: the configured override when
    /// non-empty, the content's title otherwise.
    fn display_text(&self) -> String {
        if self.config.content_value.is_empty() {
            self.content.title()
        } else {
            self.config.content_value.clone()
        }
    }

    fn cropped(&self, text: &str) -> String {
        if self.config.max_length == 0 {
            return text.to_string();
        }
        self.host
            .crop(text, self.config.max_length, self.config.crop_ellipsis())
    }

    /// The `title` attribute: the escaped override when given, the
    /// untruncated display text (quotes escaped) otherwise.
    fn title_attribute(&self, complete_text: &str) -> String {
        if self.tag_title.is_empty() {
            escape_single_quotes(complete_text)
        } else {
            self.tag_title.clone()
        }
    }

    /// Target URL: the canonical absolute URL, rewritten to the download
    /// route when the content is file-backed, with the configured suffix
    /// appended verbatim.
    fn url(&self) -> String {
        let mut url = self.content.absolute_url();
        if let Some(field) = self.content.primary_field() {
            url = format!("{url}/@@download/{}/{}", field.name, field.filename);
        }
        url.push_str(&self.config.append_to_url);
        url
    }

    /// Icon markup in render order: leading hook icons, the lock icon, the
    /// content-type icon, trailing hook icons. Empty when `show_icons` is
    /// off or nothing applies, in which case no wrapper span is emitted.
    fn icons_markup(&self) -> String {
        if !self.config.show_icons {
            return String::new();
        }

        let rendered = icons::markup(&self.icon_descriptors(), &self.host.base_url());
        if rendered.is_empty() {
            rendered
        } else {
            format!("<span class='pretty_link_icons'>{rendered}</span>")
        }
    }

    fn icon_descriptors(&self) -> Vec<Icon> {
        let mut list = Vec::new();
        if let Some(source) = &self.leading_icons {
            list.extend(source.icons(self.content));
        }
        if self.config.show_locked_icon && self.content.is_locked() {
            let title = self.host.translate("Locked", TRANSLATION_DOMAIN, "Locked");
            list.push(Icon::new(LOCK_ICON_FILE, title));
        }
        if self.config.show_content_icon {
            if let Some(descriptor) = self.content_type() {
                if let Some(expr) = &descriptor.icon_expr {
                    let filename = expr.rsplit('/').next().unwrap_or(expr);
                    let title = self.host.translate(
                        &descriptor.title,
                        &descriptor.i18n_domain,
                        &descriptor.title,
                    );
                    list.push(Icon::new(filename, title));
                }
            }
        }
        if let Some(source) = &self.trailing_icons {
            list.extend(source.icons(self.content));
        }
        list
    }

    fn content_type(&self) -> Option<TypeDescriptor> {
        let type_id = self.content.type_id();
        let descriptor = self.host.type_descriptor(&type_id);
        if descriptor.is_none() {
            tracing::debug!(%type_id, "type registry has no entry, omitting type icon and class");
        }
        descriptor
    }
}

impl fmt::Display for PrettyLink<'_> {
    /// Formats as the rendered HTML fragment.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
