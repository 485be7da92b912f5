//! Icon descriptors and markup assembly.
//!
//! Icons come from three places: injectable leading/trailing hooks, the
//! built-in lock indicator, and the content-type registry. The renderer
//! collects descriptors in order and turns them into `<img>` tags here.

use crate::content::Content;
use crate::text::escape_single_quotes;

/// One icon to render: an asset filename plus its localized tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// Asset filename, resolved against the portal base URL.
    pub filename: String,
    /// Localized `title` attribute for the image.
    pub title: String,
}

impl Icon {
    /// Creates an icon descriptor.
    pub fn new(filename: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
        }
    }
}

/// Produces extra icons for a content, in render order.
///
/// Hooked in before or after the built-in lock and type icons via
/// [`PrettyLink::with_leading_icons`] and [`PrettyLink::with_trailing_icons`],
/// so callers extend the icon row without touching the renderer. Any
/// `Fn(&dyn Content) -> Vec<Icon>` closure qualifies.
///
/// ## Examples
///
/// ```
/// use prettylink::testing::TestContent;
/// use prettylink::{Content, Icon, IconSource};
///
/// let starred = |_: &dyn Content| vec![Icon::new("star.png", "Starred")];
/// let content = TestContent::new("Report", "https://cms.example.org/report");
/// assert_eq!(starred.icons(&content), vec![Icon::new("star.png", "Starred")]);
/// ```
///
/// [`PrettyLink::with_leading_icons`]: crate::PrettyLink::with_leading_icons
/// [`PrettyLink::with_trailing_icons`]: crate::PrettyLink::with_trailing_icons
pub trait IconSource {
    /// Icons to contribute for `content`, in the order they should appear.
    fn icons(&self, content: &dyn Content) -> Vec<Icon>;
}

impl<F> IconSource for F
where
    F: Fn(&dyn Content) -> Vec<Icon>,
{
    fn icons(&self, content: &dyn Content) -> Vec<Icon> {
        self(content)
    }
}

/// Renders icon descriptors as space-joined `<img>` tags.
///
/// Each tag carries the quote-escaped title and a `src` of
/// `{base_url}/{filename}`. An empty slice renders as the empty string.
pub fn markup(icons: &[Icon], base_url: &str) -> String {
    icons
        .iter()
        .map(|icon| {
            format!(
                "<img title='{}' src='{}/{}' />",
                escape_single_quotes(&icon.title),
                base_url,
                icon.filename
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}
