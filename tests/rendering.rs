//! End-to-end rendering behavior.
//!
//! Drives the public API the way a CMS view layer would: one host, one
//! content, one config per case, asserting on the emitted markup.

use prettylink::testing::{TestContent, TestHost};
use prettylink::{
    Content, Icon, LinkConfig, PrettyLink, PrettyLinkError, TypeDescriptor, render_link,
};

fn host() -> TestHost {
    TestHost::new("https://cms.example.org")
}

fn report() -> TestContent {
    TestContent::new("Report", "https://cms.example.org/workspace/report")
}

// ============================================================================
// Viewability
// ============================================================================

#[test]
fn viewable_content_renders_an_anchor() {
    let host = host();
    let content = report();
    let html = render_link(&host, &content, LinkConfig::new());
    assert!(html.starts_with("<a class='pretty_link'"));
    assert!(html.ends_with("</a>"));
    assert!(html.contains("href='https://cms.example.org/workspace/report'"));
}

#[test]
fn viewability_hint_false_always_renders_a_div() {
    let host = host();
    let content = report();
    let html = render_link(&host, &content, LinkConfig::new().is_viewable(false));
    assert!(html.starts_with("<div class='pretty_link'"));
    assert!(html.ends_with("</div>"));
    assert!(!html.contains("<a "));
    assert!(!html.contains("href="));
    assert_eq!(host.permission_checks(), 0);
}

#[test]
fn denied_permission_overrides_the_viewability_hint() {
    let host = host().deny_view();
    let content = report();
    let html = render_link(&host, &content, LinkConfig::new().is_viewable(true));
    assert!(html.starts_with("<div "));
    assert!(!html.contains("<a "));
    assert_eq!(host.permission_checks(), 1);
}

#[test]
fn placeholder_carries_the_default_help_message() {
    let host = host().deny_view();
    let content = report();
    let html = render_link(&host, &content, LinkConfig::new());
    assert!(html.contains(
        "<span class='pretty_link_content'>Report \
         <span class='discreet no_access'>(You can not access this element)</span></span>"
    ));
}

#[test]
fn placeholder_help_message_honours_host_translation() {
    let host = host().deny_view().with_translation(
        "prettylink",
        "can_not_access_this_element",
        "<em>restricted</em>",
    );
    let content = report();
    let html = render_link(&host, &content, LinkConfig::new());
    assert!(html.contains("<span class='pretty_link_content'>Report <em>restricted</em></span>"));
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn quotes_in_the_display_text_are_escaped_everywhere() {
    let host = host();
    let content = TestContent::new("John's Report", "https://cms.example.org/johns-report");
    let html = render_link(&host, &content, LinkConfig::new());
    assert!(html.contains("title='John&#39;s Report'"));
    assert!(html.contains("<span class='pretty_link_content'>John&#39;s Report</span>"));
    assert!(!html.contains("John's"));
}

#[test]
fn quotes_in_the_tag_title_are_escaped() {
    let host = host();
    let content = report();
    let html = render_link(&host, &content, LinkConfig::new().tag_title("it's here"));
    assert!(html.contains("title='it&#39;s here'"));
    assert!(!html.contains("it's"));
}

// ============================================================================
// Cropping
// ============================================================================

#[test]
fn zero_max_length_never_calls_the_cropper() {
    let host = host();
    let content = TestContent::new(
        "a title far too long to survive any cropping",
        "https://cms.example.org/long",
    );
    let html = render_link(&host, &content, LinkConfig::new());
    assert!(html.contains(">a title far too long to survive any cropping</span>"));
    assert_eq!(host.crop_calls(), 0);
}

#[test]
fn long_text_is_cropped_with_the_default_ellipsis() {
    let host = host();
    let content = TestContent::new("a rather long report title", "https://cms.example.org/long");
    let html = render_link(&host, &content, LinkConfig::new().max_length(8));
    assert!(html.contains("<span class='pretty_link_content'>a rather...</span>"));
    assert_eq!(host.crop_calls(), 1);
}

#[test]
fn short_text_is_unchanged_by_cropping() {
    let host = host();
    let content = report();
    let html = render_link(&host, &content, LinkConfig::new().max_length(50));
    assert!(html.contains("<span class='pretty_link_content'>Report</span>"));
    assert_eq!(host.crop_calls(), 1);
}

#[test]
fn the_ellipsis_is_configurable_through_extra_options() {
    let host = host();
    let content = TestContent::new("a rather long report title", "https://cms.example.org/long");
    let html = render_link(
        &host,
        &content,
        LinkConfig::new().max_length(8).ellipsis(" [...]"),
    );
    assert!(html.contains("<span class='pretty_link_content'>a rather [...]</span>"));
}

// ============================================================================
// CSS classes
// ============================================================================

#[test]
fn class_list_starts_with_pretty_link_and_keeps_order() {
    let host = host();
    let content = report();
    let html = render_link(
        &host,
        &content,
        LinkConfig::new()
            .additional_css_class("first")
            .additional_css_class("second"),
    );
    assert!(html.contains("class='pretty_link first second'"));
}

#[test]
fn review_state_shows_up_as_a_state_class() {
    let host = host().with_review_state("published");
    let content = report();
    let html = render_link(&host, &content, LinkConfig::new());
    assert!(html.contains("state-published"));
}

#[test]
fn contents_without_workflow_render_without_a_state_class() {
    let host = host();
    let content = report();
    let html = render_link(&host, &content, LinkConfig::new());
    assert!(!html.contains("state-"));
    assert!(html.starts_with("<a class='pretty_link'"));
}

// ============================================================================
// URLs
// ============================================================================

#[test]
fn primary_field_links_to_the_download_route() {
    let host = host();
    let content = report().with_primary_field("file", "doc.pdf");
    let html = render_link(&host, &content, LinkConfig::new());
    assert!(html.contains(
        "href='https://cms.example.org/workspace/report/@@download/file/doc.pdf'"
    ));
}

#[test]
fn download_route_still_gets_the_url_suffix() {
    let host = host();
    let content = report().with_primary_field("file", "doc.pdf");
    let html = render_link(&host, &content, LinkConfig::new().append_to_url("?view=inline"));
    assert!(html.contains("/@@download/file/doc.pdf?view=inline'"));
}

// ============================================================================
// Icons
// ============================================================================

#[test]
fn locked_content_gets_the_lock_icon() {
    let host = host();
    let content = report().locked();
    let html = render_link(&host, &content, LinkConfig::new());
    assert!(html.contains(
        "<span class='pretty_link_icons'>\
         <img title='Locked' src='https://cms.example.org/lock_icon.png' /></span>"
    ));
}

#[test]
fn lock_icon_title_is_translated() {
    let host = host().with_translation("prettylink", "Locked", "Verrouillé");
    let content = report().locked();
    let html = render_link(&host, &content, LinkConfig::new());
    assert!(html.contains("<img title='Verrouillé' src='https://cms.example.org/lock_icon.png' />"));
}

#[test]
fn lock_icon_respects_its_own_toggle() {
    let host = host();
    let content = report().locked();
    let html = render_link(&host, &content, LinkConfig::new().show_locked_icon(false));
    assert!(!html.contains("lock_icon.png"));
    assert!(!html.contains("pretty_link_icons"));
}

#[test]
fn icons_toggle_suppresses_every_icon() {
    let host = host().with_type_descriptor(
        TypeDescriptor::new("Document", "Document", "types").with_icon_expr("doc_icon.png"),
    );
    let content = report().locked();
    let html = render_link(
        &host,
        &content,
        LinkConfig::new().show_icons(false).show_content_icon(true),
    );
    assert!(!html.contains("<img"));
    assert!(!html.contains("pretty_link_icons"));
}

#[test]
fn no_applicable_icons_means_no_wrapper_span() {
    let host = host();
    let content = report();
    let html = render_link(&host, &content, LinkConfig::new());
    assert!(!html.contains("pretty_link_icons"));
}

#[test]
fn type_icon_title_is_translated_in_the_type_domain() {
    let host = host()
        .with_type_descriptor(
            TypeDescriptor::new("Document", "Document", "cmstypes")
                .with_icon_expr("string:${portal_url}/document_icon.png"),
        )
        .with_translation("cmstypes", "Document", "Dokument");
    let content = report();
    let html = render_link(&host, &content, LinkConfig::new().show_content_icon(true));
    assert!(html.contains(
        "<img title='Dokument' src='https://cms.example.org/document_icon.png' />"
    ));
}

#[test]
fn type_without_icon_expr_generates_a_class_instead() {
    let host =
        host().with_type_descriptor(TypeDescriptor::new("Document", "Document", "cmstypes"));
    let content = report();
    let html = render_link(&host, &content, LinkConfig::new().show_content_icon(true));
    assert!(html.contains("contenttype-Document"));
    assert!(!html.contains("<img"));
}

#[test]
fn unknown_type_renders_without_type_fragments() {
    let host = host();
    let content = report().with_type_id("Mystery");
    let html = render_link(&host, &content, LinkConfig::new().show_content_icon(true));
    assert!(!html.contains("contenttype-"));
    assert!(!html.contains("<img"));
    assert!(html.starts_with("<a "));
}

#[test]
fn hook_icons_render_on_both_sides_of_the_built_ins() {
    let host = host();
    let content = report().locked();
    let link = PrettyLink::new(&host, &content, LinkConfig::new())
        .with_leading_icons(|_: &dyn Content| vec![Icon::new("star.png", "Starred")])
        .with_trailing_icons(|_: &dyn Content| vec![Icon::new("new.png", "New")]);
    let html = link.render();
    assert!(html.contains(
        "<span class='pretty_link_icons'>\
         <img title='Starred' src='https://cms.example.org/star.png' /> \
         <img title='Locked' src='https://cms.example.org/lock_icon.png' /> \
         <img title='New' src='https://cms.example.org/new.png' /></span>"
    ));
}

#[test]
fn placeholders_keep_their_icons() {
    let host = host().deny_view();
    let content = report().locked();
    let html = render_link(&host, &content, LinkConfig::new());
    assert!(html.starts_with("<div "));
    assert!(html.contains("lock_icon.png"));
}

// ============================================================================
// Whole-fragment shapes
// ============================================================================

#[test]
fn anchor_shape_matches_end_to_end() {
    let host = host();
    let content = TestContent::new("Report", "https://cms.example.org/report");
    let config = LinkConfig::new()
        .show_icons(false)
        .show_colors(false)
        .target("_blank");
    assert_eq!(
        render_link(&host, &content, config),
        "<a class='pretty_link' title='Report' href='https://cms.example.org/report' \
         target='_blank'><span class='pretty_link_content'>Report</span></a>"
    );
}

#[test]
fn render_is_idempotent() {
    let host = host().with_review_state("published");
    let content = report().locked().with_primary_field("file", "doc.pdf");
    let link = PrettyLink::new(&host, &content, LinkConfig::new().max_length(4));
    assert_eq!(link.render(), link.render());
}

#[test]
fn create_surfaces_the_missing_content_error() {
    let host = host();
    let err = PrettyLink::create(&host, None, LinkConfig::new())
        .map(|link| link.render())
        .unwrap_err();
    assert_eq!(err, PrettyLinkError::MissingContent);
    assert_eq!(err.to_string(), "no content handle supplied");
}

#[test]
fn convenience_function_matches_the_renderer() {
    let host = host();
    let content = report();
    let link = PrettyLink::new(&host, &content, LinkConfig::new());
    assert_eq!(render_link(&host, &content, LinkConfig::new()), link.render());
}
