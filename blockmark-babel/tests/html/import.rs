//! Import tests for HTML (markup → blocks)
//!
//! These tests parse fixture templates with html5ever and check the resulting block trees.

use crate::common::fixture;
use blockmark_babel::format::ConversionContext;
use blockmark_babel::{html_to_blocks, Block, FormatError, FormatRegistry, HandlerRegistry};
use serde_json::json;

fn defaults() -> HandlerRegistry {
    HandlerRegistry::with_defaults().expect("default handlers register")
}

#[test]
fn test_landing_page_tree() {
    let blocks = html_to_blocks(&fixture("landing.html"), &defaults()).unwrap();

    let expected = vec![
        Block::new("core/template-part")
            .with_attribute("slug", "header")
            .with_attribute("tagName", "header")
            .with_attribute("className", "site-header"),
        Block::element("main")
            .with_attribute("class", "site-main")
            .with_attribute("data-style", "padding:0")
            .with_children(vec![
                Block::element("section")
                    .with_attribute("id", "hero")
                    .with_attribute("data-wp-each", "items")
                    .with_children(vec![
                        Block::element("h1").with_attribute("class", "title"),
                        Block::new("core/pattern")
                            .with_attribute("slug", "hero-banner")
                            .with_attribute("className", "wide"),
                    ]),
                Block::new("core/navigation")
                    .with_attribute("ref", 42)
                    .with_attribute("overlayMenu", "mobile"),
                Block::element("img")
                    .with_attribute("src", "logo.png")
                    .with_attribute("alt", "Logo"),
            ]),
        Block::new("core/template-part")
            .with_attribute("slug", "footer")
            .with_attribute("area", "footer"),
    ];

    assert_eq!(blocks, expected);
}

#[test]
fn test_directives_pass_through_untouched() {
    let blocks = html_to_blocks(&fixture("directives.html"), &defaults()).unwrap();

    assert_eq!(blocks.len(), 1);
    let list = &blocks[0];
    assert_eq!(list.tag_name(), Some("ul"));
    assert_eq!(list.attribute_str("data-wp-interactive"), Some("shop"));
    assert_eq!(
        list.attribute_str("data-wp-context"),
        Some(r#"{"open":false}"#)
    );

    let template = &list.children[0];
    assert_eq!(template.tag_name(), Some("template"));
    assert_eq!(
        template.attribute_str("data-wp-each--item"),
        Some("state.items")
    );

    let item = &template.children[0];
    assert_eq!(item.tag_name(), Some("li"));
    assert_eq!(
        item.attribute_str("data-wp-bind--hidden"),
        Some("!context.item.visible")
    );
    assert!(item.children.is_empty());
}

#[test]
fn test_attribute_order_is_document_order() {
    let blocks = html_to_blocks(
        r#"<div id="a" class="b" data-x="c" style="d"></div>"#,
        &HandlerRegistry::empty(),
    )
    .unwrap();

    let keys: Vec<&str> = blocks[0].attributes.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["tagName", "id", "class", "data-x", "data-style"]);
}

#[test]
fn test_style_never_survives() {
    let blocks = html_to_blocks(
        r#"<section style="margin:0"><p style="color:red" class="a"></p></section>"#,
        &HandlerRegistry::empty(),
    )
    .unwrap();

    let paragraph = &blocks[0].children[0];
    assert_eq!(paragraph.attributes.get("data-style"), Some(&json!("color:red")));
    assert_eq!(paragraph.attributes.get("class"), Some(&json!("a")));
    assert!(!paragraph.attributes.contains_key("style"));
    assert!(!blocks[0].attributes.contains_key("style"));
}

#[test]
fn test_text_content_is_not_a_block() {
    let blocks = html_to_blocks(
        "<p>Hello <strong>world</strong>!</p>",
        &HandlerRegistry::empty(),
    )
    .unwrap();

    assert_eq!(
        blocks,
        vec![Block::element("p").with_children(vec![Block::element("strong")])]
    );
}

#[test]
fn test_custom_element_children_are_dropped() {
    let blocks = html_to_blocks(
        r#"<Pattern slug="hero"><div class="ignored"></div></Pattern>"#,
        &defaults(),
    )
    .unwrap();

    assert_eq!(
        blocks,
        vec![Block::new("core/pattern").with_attribute("slug", "hero")]
    );
}

#[test]
fn test_partial_handler_set() {
    let handlers = HandlerRegistry::from_names(&["navigation"]).unwrap();
    let blocks = html_to_blocks(
        r#"<Pattern slug="hero"></Pattern><Navigation ref="3"></Navigation>"#,
        &handlers,
    )
    .unwrap();

    assert_eq!(
        blocks,
        vec![
            Block::element("pattern").with_attribute("slug", "hero"),
            Block::new("core/navigation").with_attribute("ref", 3),
        ]
    );
}

#[test]
fn test_invalid_navigation_reference_fails_whole_conversion() {
    let err = html_to_blocks(
        r#"<main><Navigation ref="primary"></Navigation></main>"#,
        &defaults(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        FormatError::Handler {
            handler: "navigation",
            ..
        }
    ));
}

#[test]
fn test_html_format_through_registry() {
    let registry = FormatRegistry::default();
    let handlers = defaults();
    let ctx = ConversionContext::new(&handlers);

    let format = registry
        .detect_format_from_filename("templates/landing.html")
        .unwrap();
    let blocks = registry
        .parse(&fixture("landing.html"), &format, &ctx)
        .unwrap();

    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[1].tag_name(), Some("main"));
}

#[test]
fn test_self_closing_custom_elements_keep_their_siblings() {
    let blocks = html_to_blocks(
        r#"<main><Pattern slug="a" /><Pattern slug="b" /><p class="kept"></p></main>"#,
        &defaults(),
    )
    .unwrap();

    assert_eq!(
        blocks,
        vec![Block::element("main").with_children(vec![
            Block::new("core/pattern").with_attribute("slug", "a"),
            Block::new("core/pattern").with_attribute("slug", "b"),
            Block::element("p").with_attribute("class", "kept"),
        ])]
    );
}

#[test]
fn test_self_closing_fixture_tree() {
    let blocks = html_to_blocks(&fixture("self_closing.html"), &defaults()).unwrap();

    let expected = vec![
        Block::new("core/template-part")
            .with_attribute("slug", "header")
            .with_attribute("tagName", "header"),
        Block::element("main")
            .with_attribute("class", "site-main")
            .with_children(vec![
                Block::new("core/pattern").with_attribute("slug", "hero"),
                Block::element("section")
                    .with_attribute("id", "intro")
                    .with_children(vec![Block::element("h2").with_attribute("class", "lead")]),
                Block::new("core/navigation")
                    .with_attribute("ref", 7)
                    .with_attribute("overlayMenu", "never"),
                Block::new("core/pattern")
                    .with_attribute("slug", "cta")
                    .with_attribute("className", "wide"),
                Block::element("footer").with_attribute("class", "note"),
            ]),
        Block::new("core/template-part")
            .with_attribute("slug", "footer")
            .with_attribute("area", "footer"),
    ];

    assert_eq!(blocks, expected);
}

#[test]
fn test_self_closing_input_renders_back_to_the_same_element() {
    let handlers = defaults();
    let cases = [
        (
            r#"<TemplatePart slug="header" tagName="header" />"#,
            r#"<TemplatePart slug="header" tagName="header"></TemplatePart>"#,
        ),
        (r#"<Pattern slug="hero" />"#, r#"<Pattern slug="hero"></Pattern>"#),
        (
            r#"<Navigation ref="7" overlayMenu="never"/>"#,
            r#"<Navigation ref="7" overlayMenu="never"></Navigation>"#,
        ),
        (
            r#"<Pattern slug="cta" class="wide"/>"#,
            r#"<Pattern slug="cta" class="wide"></Pattern>"#,
        ),
    ];

    for (source, rendered) in cases {
        let blocks = html_to_blocks(source, &handlers).unwrap();
        assert_eq!(blocks.len(), 1, "{source}");

        let block = &blocks[0];
        let handler = handlers.lookup_by_block_type(&block.block_type).unwrap();
        let html = handler.to_html(block).unwrap();
        assert_eq!(html, rendered);

        // Both spellings describe the same empty element
        assert_eq!(html_to_blocks(&html, &handlers).unwrap(), blocks, "{source}");
    }
}

#[test]
fn test_self_closing_tag_of_disabled_handler_is_a_generic_element() {
    let handlers = HandlerRegistry::from_names(&["navigation"]).unwrap();
    let blocks = html_to_blocks(
        r#"<main><Navigation ref="1" /><footer></footer></main>"#,
        &handlers,
    )
    .unwrap();

    assert_eq!(
        blocks,
        vec![Block::element("main").with_children(vec![
            Block::new("core/navigation").with_attribute("ref", 1),
            Block::element("footer"),
        ])]
    );
}
