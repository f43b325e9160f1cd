//! Export tests for block markup (blocks → markup)

use crate::common::fixture;
use blockmark_babel::format::ConversionContext;
use blockmark_babel::{
    html_to_blocks, serialize_blocks, Block, Destination, EscapePolicy, FormatError,
    FormatRegistry, HandlerRegistry,
};
use insta::assert_snapshot;

fn defaults() -> HandlerRegistry {
    HandlerRegistry::with_defaults().expect("default handlers register")
}

#[test]
fn test_landing_page_markup() {
    let handlers = defaults();
    let blocks = html_to_blocks(&fixture("landing.html"), &handlers).unwrap();
    let markup = serialize_blocks(&blocks, &handlers, Destination::Page).unwrap();

    assert_snapshot!(markup, @r#"
    <TemplatePart slug="header" tagName="header" class="site-header"></TemplatePart>

    <!-- wp:universal/element {"tagName":"main","class":"site-main","data-style":"padding:0"} -->
    <!-- wp:universal/element {"tagName":"section","id":"hero","data-wp-each":"items"} -->
    <!-- wp:universal/element {"tagName":"h1","class":"title"} /-->
    <Pattern slug="hero-banner" class="wide"></Pattern>
    <!-- /wp:universal/element -->
    <Navigation ref="42" overlayMenu="mobile"></Navigation>
    <!-- wp:universal/element {"tagName":"img","src":"logo.png","alt":"Logo"} /-->
    <!-- /wp:universal/element -->

    <TemplatePart slug="footer" area="footer"></TemplatePart>
    "#);
}

#[test]
fn test_empty_attributes_have_no_segment() {
    let markup = serialize_blocks(&[Block::new("core/x")], &defaults(), false).unwrap();
    assert_eq!(markup, "<!-- wp:core/x /-->");
}

#[test]
fn test_nesting_is_decided_by_children_alone() {
    let tree = Block::new("core/group").with_children(vec![Block::new("core/columns")
        .with_children(vec![Block::new("core/column"), Block::new("core/column")])]);
    let markup = serialize_blocks(&[tree], &defaults(), false).unwrap();

    assert_snapshot!(markup, @r"
    <!-- wp:core/group -->
    <!-- wp:core/columns -->
    <!-- wp:core/column /-->
    <!-- wp:core/column /-->
    <!-- /wp:core/columns -->
    <!-- /wp:core/group -->
    ");
}

#[test]
fn test_backslash_policy() {
    let blocks = vec![Block::new("core/code").with_attribute("content", "a\\b")];
    let handlers = defaults();

    assert_eq!(
        serialize_blocks(&blocks, &handlers, false).unwrap(),
        r#"<!-- wp:core/code {"content":"a\\b"} /-->"#
    );
    assert_eq!(
        serialize_blocks(&blocks, &handlers, true).unwrap(),
        r#"<!-- wp:core/code {"content":"a\\\\b"} /-->"#
    );
    assert_eq!(
        serialize_blocks(&blocks, &handlers, Destination::Content).unwrap(),
        serialize_blocks(&blocks, &handlers, EscapePolicy::DoubleBackslashes).unwrap()
    );
}

#[test]
fn test_policy_applies_to_nested_blocks() {
    let blocks = vec![Block::new("core/group").with_children(vec![
        Block::new("core/code").with_attribute("content", "\\n")
    ])];
    let markup = serialize_blocks(&blocks, &defaults(), true).unwrap();
    assert!(markup.contains(r#"{"content":"\\\\n"}"#));
}

#[test]
fn test_markup_cannot_escape_its_comment() {
    let blocks = vec![Block::element("div").with_attribute("title", "--> <script>")];
    let markup = serialize_blocks(&blocks, &defaults(), false).unwrap();

    assert!(markup.starts_with("<!-- wp:universal/element {"));
    assert!(markup.ends_with("} /-->"));
    assert_eq!(markup.matches("-->").count(), 1);
    assert!(!markup.contains("<script>"));
}

#[test]
fn test_handler_output_is_used_for_nested_custom_blocks() {
    let blocks = vec![Block::element("header").with_children(vec![
        Block::new("core/navigation").with_attribute("ref", 7),
    ])];
    let markup = serialize_blocks(&blocks, &defaults(), false).unwrap();

    assert_eq!(
        markup,
        "<!-- wp:universal/element {\"tagName\":\"header\"} -->\n<Navigation ref=\"7\"></Navigation>\n<!-- /wp:universal/element -->"
    );
}

#[test]
fn test_handler_failure_propagates() {
    let blocks = vec![Block::new("core/group").with_children(vec![Block::new("core/pattern")])];
    let err = serialize_blocks(&blocks, &defaults(), false).unwrap_err();
    assert!(matches!(err, FormatError::Handler { handler: "pattern", .. }));
}

#[test]
fn test_output_is_deterministic() {
    let handlers = defaults();
    let blocks = html_to_blocks(&fixture("directives.html"), &handlers).unwrap();

    let first = serialize_blocks(&blocks, &handlers, true).unwrap();
    for _ in 0..5 {
        assert_eq!(serialize_blocks(&blocks, &handlers, true).unwrap(), first);
    }
}

#[test]
fn test_blocks_format_through_registry() {
    let registry = FormatRegistry::default();
    let handlers = defaults();
    let ctx = ConversionContext::new(&handlers).with_escape(Destination::Page);

    let blocks = registry.parse("<hr>", "html", &ctx).unwrap();
    let markup = registry.serialize(&blocks, "blocks", &ctx).unwrap();

    assert_eq!(markup, r#"<!-- wp:universal/element {"tagName":"hr"} /-->"#);
}
