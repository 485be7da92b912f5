//! Pretty links: render CMS content as workflow-aware HTML anchors.
//!
//! Given a content handle and a bag of display options, [`PrettyLink`]
//! produces one HTML fragment: an `<a>` for contents the current user may
//! view, a non-clickable `<div>` placeholder otherwise. Both carry a fixed
//! `pretty_link` class, a workflow-state class, and an icon row (lock
//! indicator, content-type icon, caller-injected extras).
//!
//! The crate implements no CMS machinery itself. Permissions, translation,
//! workflow state, and the type registry stay behind the [`Host`] trait; the
//! object being linked stays behind [`Content`]. Implement those two traits
//! against your framework and every content object gains pretty links.
//!
//! ## Modules
//!
//! - [`config`]: the [`LinkConfig`] options bag
//! - [`content`]: the [`Content`] handle trait and [`PrimaryField`]
//! - [`host`]: the [`Host`] facade and [`TypeDescriptor`]
//! - [`icons`]: [`Icon`] descriptors, [`IconSource`] hooks, markup assembly
//! - [`link`]: the [`PrettyLink`] renderer
//! - [`text`]: quote escaping and cropping helpers
//! - [`error`]: the error type and result alias
//! - [`testing`]: in-memory [`Host`]/[`Content`] doubles for tests
//!
//! ## Examples
//!
//! ```
//! use prettylink::testing::{TestContent, TestHost};
//! use prettylink::{LinkConfig, PrettyLink};
//!
//! let host = TestHost::new("https://cms.example.org").with_review_state("published");
//! let report = TestContent::new("Quarterly Report", "https://cms.example.org/report");
//!
//! let html = PrettyLink::new(&host, &report, LinkConfig::new().target("_blank")).render();
//! assert!(html.contains("state-published"));
//! assert!(html.contains("target='_blank'"));
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod host;
pub mod icons;
pub mod link;
pub mod testing;
pub mod text;

pub use crate::config::{DEFAULT_ELLIPSIS, DEFAULT_TARGET, LinkConfig};
pub use crate::content::{Content, PrimaryField};
pub use crate::error::{PrettyLinkError, Result};
pub use crate::host::{Host, TypeDescriptor};
pub use crate::icons::{Icon, IconSource};
pub use crate::link::{BASE_CSS_CLASS, NOT_VIEWABLE_KEY, PrettyLink, TRANSLATION_DOMAIN};

/// Renders `content` with `config` in one call.
///
/// Equivalent to constructing a [`PrettyLink`] and rendering it once; handy
/// when no icon hooks are involved.
///
/// ## Examples
///
/// ```
/// use prettylink::testing::{TestContent, TestHost};
/// use prettylink::{LinkConfig, render_link};
///
/// let host = TestHost::new("https://cms.example.org");
/// let page = TestContent::new("Welcome", "https://cms.example.org/welcome");
/// let html = render_link(&host, &page, LinkConfig::new());
/// assert!(html.starts_with("<a class='pretty_link'"));
/// ```
pub fn render_link(host: &dyn Host, content: &dyn Content, config: LinkConfig) -> String {
    PrettyLink::new(host, content, config).render()
}
