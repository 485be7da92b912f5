//! In-memory doubles for tests and examples.
//!
//! [`TestHost`] and [`TestContent`] implement the two collaborator traits
//! with plain maps and flags, so rendering behavior can be exercised without
//! a CMS anywhere near the test. Both are builder-style and start from the
//! most permissive defaults: permission granted, no workflow, empty type
//! registry, no translations.

use std::cell::Cell;
use std::collections::HashMap;

use crate::content::{Content, PrimaryField};
use crate::host::{Host, TypeDescriptor};
use crate::text;

/// Scriptable [`Host`] double.
///
/// Lookup counters make "this path was never queried" assertions possible;
/// they count calls, not outcomes.
///
/// ## Examples
///
/// ```
/// use prettylink::testing::TestHost;
/// use prettylink::Host;
///
/// let host = TestHost::new("https://cms.example.org")
///     .with_review_state("published")
///     .with_translation("prettylink", "Locked", "Verrouillé");
///
/// assert_eq!(host.translate("Locked", "prettylink", "Locked"), "Verrouillé");
/// assert_eq!(host.translate("unknown", "prettylink", "fallback"), "fallback");
/// ```
#[derive(Debug, Clone)]
pub struct TestHost {
    base_url: String,
    view_permission: bool,
    review_state: Option<String>,
    translations: HashMap<(String, String), String>,
    type_descriptors: HashMap<String, TypeDescriptor>,
    permission_checks: Cell<usize>,
    crop_calls: Cell<usize>,
}

impl TestHost {
    /// Creates a host that grants permission and knows nothing else.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            view_permission: true,
            review_state: None,
            translations: HashMap::new(),
            type_descriptors: HashMap::new(),
            permission_checks: Cell::new(0),
            crop_calls: Cell::new(0),
        }
    }

    /// Denies the View permission for every content.
    pub fn deny_view(mut self) -> Self {
        self.view_permission = false;
        self
    }

    /// Reports `state` as the review state for every content.
    pub fn with_review_state(mut self, state: impl Into<String>) -> Self {
        self.review_state = Some(state.into());
        self
    }

    /// Registers a translation for `(domain, key)`.
    pub fn with_translation(
        mut self,
        domain: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.translations
            .insert((domain.into(), key.into()), text.into());
        self
    }

    /// Registers `descriptor` in the type registry under its own id.
    pub fn with_type_descriptor(mut self, descriptor: TypeDescriptor) -> Self {
        self.type_descriptors
            .insert(descriptor.id.clone(), descriptor);
        self
    }

    /// How many times the View permission was queried.
    pub fn permission_checks(&self) -> usize {
        self.permission_checks.get()
    }

    /// How many times the cropping service was called.
    pub fn crop_calls(&self) -> usize {
        self.crop_calls.get()
    }
}

impl Host for TestHost {
    fn has_view_permission(&self, _content: &dyn Content) -> bool {
        self.permission_checks.set(self.permission_checks.get() + 1);
        self.view_permission
    }

    fn base_url(&self) -> String {
        self.base_url.clone()
    }

    fn translate(&self, key: &str, domain: &str, default: &str) -> String {
        self.translations
            .get(&(domain.to_string(), key.to_string()))
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn crop(&self, text: &str, max_length: usize, ellipsis: &str) -> String {
        self.crop_calls.set(self.crop_calls.get() + 1);
        text::crop_text(text, max_length, ellipsis)
    }

    fn review_state(&self, _content: &dyn Content) -> Option<String> {
        self.review_state.clone()
    }

    fn type_descriptor(&self, type_id: &str) -> Option<TypeDescriptor> {
        self.type_descriptors.get(type_id).cloned()
    }
}

/// Scriptable [`Content`] double.
///
/// ## Examples
///
/// ```
/// use prettylink::testing::TestContent;
/// use prettylink::Content;
///
/// let minutes = TestContent::new("Minutes", "https://cms.example.org/minutes")
///     .with_primary_field("file", "minutes.pdf")
///     .locked();
///
/// assert!(minutes.is_locked());
/// assert_eq!(minutes.primary_field().unwrap().filename, "minutes.pdf");
/// ```
#[derive(Debug, Clone)]
pub struct TestContent {
    title: String,
    url: String,
    type_id: String,
    locked: bool,
    primary_field: Option<PrimaryField>,
}

impl TestContent {
    /// Creates an unlocked `Document` content with no primary field.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            type_id: "Document".to_string(),
            locked: false,
            primary_field: None,
        }
    }

    /// Sets the content's type id.
    pub fn with_type_id(mut self, type_id: impl Into<String>) -> Self {
        self.type_id = type_id.into();
        self
    }

    /// Marks the content as locked.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Gives the content a primary file field.
    pub fn with_primary_field(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        self.primary_field = Some(PrimaryField::new(name, filename));
        self
    }
}

impl Content for TestContent {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn absolute_url(&self) -> String {
        self.url.clone()
    }

    fn type_id(&self) -> String {
        self.type_id.clone()
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn primary_field(&self) -> Option<PrimaryField> {
        self.primary_field.clone()
    }
}
