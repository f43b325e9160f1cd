//! Round trips: blocks → markup → blocks

use crate::common::fixture;
use blockmark_babel::{
    html_to_blocks, parse_block_markup, serialize_blocks, Block, EscapePolicy, HandlerRegistry,
};
use proptest::prelude::*;

fn defaults() -> HandlerRegistry {
    HandlerRegistry::with_defaults().expect("default handlers register")
}

fn round_trip(blocks: &[Block], handlers: &HandlerRegistry, policy: EscapePolicy) -> Vec<Block> {
    let markup = serialize_blocks(blocks, handlers, policy).unwrap();
    parse_block_markup(&markup, handlers, policy)
        .unwrap_or_else(|e| panic!("re-parse failed: {e}\n{markup}"))
}

#[test]
fn test_fixture_trees_survive_both_policies() {
    let handlers = defaults();
    for name in ["landing.html", "directives.html", "self_closing.html"] {
        let blocks = html_to_blocks(&fixture(name), &handlers).unwrap();
        for policy in [EscapePolicy::Single, EscapePolicy::DoubleBackslashes] {
            assert_eq!(round_trip(&blocks, &handlers, policy), blocks, "{name} {policy:?}");
        }
    }
}

#[test]
fn test_custom_handlers_round_trip_through_their_own_tags() {
    let handlers = defaults();
    let blocks = vec![
        Block::new("core/pattern")
            .with_attribute("slug", "hero")
            .with_attribute("className", "x\"y <b> & 'z'"),
        Block::new("core/template-part")
            .with_attribute("slug", "header")
            .with_attribute("theme", "twentyfour")
            .with_attribute("area", "header")
            .with_attribute("tagName", "header")
            .with_attribute("className", "site-header"),
        Block::new("core/navigation")
            .with_attribute("ref", 12)
            .with_attribute("overlayMenu", "never"),
    ];

    assert_eq!(round_trip(&blocks, &handlers, EscapePolicy::Single), blocks);
}

#[test]
fn test_markup_written_without_handlers_reads_back_without_them() {
    let handlers = HandlerRegistry::empty();
    let blocks = vec![Block::new("core/pattern").with_attribute("slug", "hero")];
    assert_eq!(
        round_trip(&blocks, &handlers, EscapePolicy::DoubleBackslashes),
        blocks
    );
}

#[test]
fn test_reading_with_the_wrong_policy_changes_values() {
    let handlers = HandlerRegistry::empty();
    let blocks = vec![Block::new("core/code").with_attribute("content", "a\\b")];
    let markup = serialize_blocks(&blocks, &handlers, EscapePolicy::DoubleBackslashes).unwrap();

    let misread = parse_block_markup(&markup, &handlers, EscapePolicy::Single).unwrap();
    assert_eq!(misread[0].attribute_str("content"), Some("a\\\\b"));
}

fn tag_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}"
}

fn attribute_list() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z][a-z0-9-]{0,8}", any::<String>()), 0..4)
}

fn generic_block(tag: String, attributes: Vec<(String, String)>, children: Vec<Block>) -> Block {
    let mut block = Block::element(tag);
    for (key, value) in attributes {
        if key != "style" {
            block = block.with_attribute(key, value);
        }
    }
    block.with_children(children)
}

fn generic_tree() -> impl Strategy<Value = Block> {
    let leaf = (tag_name(), attribute_list())
        .prop_map(|(tag, attributes)| generic_block(tag, attributes, Vec::new()));
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            tag_name(),
            attribute_list(),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, attributes, children)| generic_block(tag, attributes, children))
    })
}

proptest! {
    #[test]
    fn generic_trees_round_trip(
        blocks in prop::collection::vec(generic_tree(), 0..4),
        double in any::<bool>(),
    ) {
        let handlers = defaults();
        let policy = EscapePolicy::from(double);
        let markup = serialize_blocks(&blocks, &handlers, policy).unwrap();
        let parsed = parse_block_markup(&markup, &handlers, policy).unwrap();
        prop_assert_eq!(parsed, blocks);
    }
}
