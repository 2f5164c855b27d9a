//! Composition laws that hold for any registry.

mod common;

use std::sync::Arc;

use common::{SESSION, node, paragraph};
use folio::{
    ComposeOptions, Element, Hardening, Node, RenderError, Registry, RendererMap,
    SharedRenderer, from_fn,
    renderers::{baseline, default_renderers},
    testing::{ConstRenderer, CountingRenderer, FailingRenderer, RecordingRenderer},
};
use serde_json::json;

fn labelled(label: String) -> SharedRenderer {
    Arc::new(ConstRenderer::text(label))
}

#[test]
fn test_merge_law_holds_for_every_key() {
    let cases: Vec<(Vec<&str>, Vec<&str>)> = vec![
        (vec!["a", "b", "c"], vec!["b", "d"]),
        (vec!["a"], vec![]),
        (vec![], vec!["x", "y"]),
        (vec!["p", "q"], vec!["p", "q"]),
    ];

    for (base_tags, over_tags) in &cases {
        let baseline: RendererMap = base_tags
            .iter()
            .map(|t| (t.to_string(), labelled(format!("base:{t}"))))
            .collect();
        let overrides: RendererMap = over_tags
            .iter()
            .map(|t| (t.to_string(), labelled(format!("over:{t}"))))
            .collect();

        let registry = Registry::build(baseline.clone(), overrides.clone());
        let cx = registry.composer();

        for tag in base_tags.iter().chain(over_tags.iter()) {
            let expected = overrides.get(tag).or_else(|| baseline.get(tag)).unwrap();
            assert!(Arc::ptr_eq(registry.get(tag).unwrap(), expected));

            let out = cx.compose(&Node::new(*tag)).unwrap();
            let origin = if over_tags.contains(tag) { "over" } else { "base" };
            assert_eq!(out, Element::text(format!("{origin}:{tag}")));
        }
        let mut union: Vec<&str> = base_tags.iter().chain(over_tags.iter()).copied().collect();
        union.sort_unstable();
        union.dedup();
        assert_eq!(registry.tags(), union);
    }
}

#[test]
fn test_override_replaces_without_chaining() {
    let baseline_calls = CountingRenderer::new();
    let registry = Registry::build(
        RendererMap::new().with("paragraph", baseline_calls.clone()),
        RendererMap::new().with("paragraph", ConstRenderer::text("mine")),
    );

    let out = registry.composer().compose(&paragraph(&["x"])).unwrap();
    assert_eq!(out, Element::text("mine"));
    assert_eq!(baseline_calls.count(), 0);
}

#[test]
fn test_known_tags_never_reach_fallback() {
    let fallback = CountingRenderer::new();
    let registry = Registry::from_map(default_renderers()).with_fallback(fallback.clone());
    let input = node(json!({
        "type": "root",
        "children": [
            {"type": "heading", "depth": 1, "children": [{"type": "text", "value": "T"}]},
            {"type": "list", "ordered": false, "children": [
                {"type": "listItem", "children": [
                    {"type": "paragraph", "children": [
                        {"type": "emphasis", "children": [{"type": "text", "value": "e"}]},
                        {"type": "inlineCode", "value": "c"},
                        {"type": "directive", "value": "d"}
                    ]}
                ]}
            ]},
            {"type": "signature", "value": "f", "parameters": [
                {"kind": "VAR_KEYWORD", "name": "kw", "default": {"type": "Empty"}}
            ], "children": [{"type": "thematicBreak"}]}
        ]
    }));

    let out = registry.composer().compose(&input).unwrap();
    assert_eq!(fallback.count(), 0);
    assert!(!out.contains_diagnostic());
}

#[test]
fn test_unknown_tag_is_isolated_from_siblings() {
    let input = node(json!({
        "type": "paragraph",
        "children": [
            {"type": "text", "value": "before"},
            {"type": "mystery", "children": [{"type": "text", "value": "inner"}]},
            {"type": "text", "value": "after"}
        ]
    }));

    let out = SESSION.render(&input).unwrap();
    let children = out.child_elements();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0], Element::text("before"));
    assert!(children[1].is_diagnostic());
    assert_eq!(children[1].child_elements().last(), Some(&Element::text("inner")));
    assert_eq!(children[2], Element::text("after"));
}

#[test]
fn test_unknown_tag_legacy_fatal_mode() {
    let session = SESSION.clone().with_options(ComposeOptions::default().fail_on_unknown());

    let err = session.render(&paragraph(&["a"]).with_children(vec![Node::new("mystery")]));
    assert!(matches!(
        err,
        Err(folio::FolioError::Render(RenderError::UnknownNodeType(tag))) if tag == "mystery"
    ));
}

#[test]
fn test_malformed_node_aborts_by_default() {
    let input = node(json!({
        "type": "paragraph",
        "children": [
            {"type": "text", "value": "ok"},
            {"type": "directive", "domain": "py"}
        ]
    }));

    let err = SESSION.render(&input).unwrap_err();
    assert!(matches!(
        err,
        folio::FolioError::Render(RenderError::MalformedNode { ref node_type, .. })
            if node_type == "directive"
    ));
}

#[test]
fn test_hardening_modes() {
    let input = node(json!({
        "type": "paragraph",
        "children": [
            {"type": "directive", "domain": "py"},
            {"type": "boom"},
            {"type": "text", "value": "after"}
        ]
    }));
    let overrides = RendererMap::new().with("boom", FailingRenderer::new("exploded"));
    let session = folio::Session::new(overrides);

    // Validation alone catches the malformed directive but not the failing renderer.
    let validating = session
        .clone()
        .with_options(ComposeOptions::default().with_hardening(Hardening::VALIDATE));
    assert!(validating.render(&input).is_err());

    let hardened = session.with_options(ComposeOptions::hardened());
    let out = hardened.render(&input).unwrap();
    let children = out.child_elements();
    assert!(children[0].is_diagnostic());
    assert!(children[1].is_diagnostic());
    assert_eq!(children[2], Element::text("after"));
}

#[test]
fn test_composition_is_idempotent() {
    let input = node(json!({
        "type": "root",
        "children": [
            {"type": "signature", "value": "f", "parameters": [], "children": []},
            {"type": "mystery"},
            {"type": "DefList", "children": [{"dt": {"type": "text", "value": "t"}, "dd": []}]}
        ]
    }));

    let first = SESSION.render(&input).unwrap();
    let second = SESSION.render(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_compose_many_preserves_order_for_any_registry() {
    let nodes = vec![Node::text("n1"), Node::new("mystery"), Node::text("n3")];

    let registries = [
        Registry::from_map(baseline::renderers()),
        Registry::from_map(default_renderers()),
        Registry::from_map(RendererMap::new().with(
            "text",
            from_fn(|node, _| {
                let value = node.value.as_deref().unwrap_or_default();
                Ok(Element::text(format!("[{value}]")))
            }),
        )),
    ];

    for registry in &registries {
        let out = registry.composer().compose_many(&nodes).unwrap();
        assert_eq!(out.len(), 3);
        assert!(out[0].text_content().contains("n1"));
        assert!(out[1].is_diagnostic());
        assert!(out[2].text_content().contains("n3"));
    }
}

#[test]
fn test_dispatch_order_is_depth_first() {
    let recorder = RecordingRenderer::new();
    let overrides = RendererMap::new()
        .with("root", recorder.clone())
        .with("paragraph", recorder.clone())
        .with("text", recorder.clone());
    let registry = Registry::build(baseline::renderers(), overrides);
    let input = Node::new("root").with_children(vec![paragraph(&["a", "b"]), Node::text("c")]);

    registry.composer().compose(&input).unwrap();
    assert_eq!(recorder.visited(), vec!["root", "paragraph", "text", "text", "text"]);
}

#[test]
fn test_depth_guard() {
    let mut input = Node::text("leaf");
    for _ in 0..20 {
        input = Node::new("blockquote").with_children(vec![input]);
    }

    let shallow = SESSION.clone().with_options(ComposeOptions::default().with_max_depth(10));
    assert!(matches!(
        shallow.render(&input),
        Err(folio::FolioError::Render(RenderError::DepthExceeded(10)))
    ));
    assert_eq!(SESSION.render(&input).unwrap().text_content(), "leaf");
}

fn nested(tag: &str, levels: usize, leaves_per_level: usize) -> Node {
    let mut tree = paragraph(&["bottom"]);
    for level in 0..levels {
        let mut children: Vec<Node> = (0..leaves_per_level)
            .map(|i| Node::text(format!("{level}.{i}")))
            .collect();
        children.push(tree);
        tree = Node::new(tag).with_attr("kind", "note").with_children(children);
    }
    tree
}

#[test]
fn test_attribute_views_do_not_scale_with_subtree_size() {
    use std::time::{Duration, Instant};

    let quote = nested("blockquote", 120, 40);
    let aside = nested("admonition", 120, 40);

    let started = Instant::now();
    let quoted = SESSION.render(&quote).unwrap();
    let quote_time = started.elapsed();

    let started = Instant::now();
    let asided = SESSION.render(&aside).unwrap();
    let aside_time = started.elapsed();

    assert_eq!(quoted.text_content(), asided.text_content());
    assert!(
        aside_time <= quote_time * 20 + Duration::from_millis(100),
        "admonition nest took {aside_time:?}, blockquote nest took {quote_time:?}"
    );
}
