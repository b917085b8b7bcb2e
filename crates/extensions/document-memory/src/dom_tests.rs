use super::*;

fn sample_page() -> PageSpec {
    let body = ElementSpec::new("body")
        .with_style("font-size", "16px")
        .with_children([
            ElementSpec::new("h1")
                .with_attribute("id", "title")
                .with_style("font-size", "2em"),
            ElementSpec::new("p")
                .with_attribute("class", "lead intro")
                .with_style("font-size", "9px"),
            ElementSpec::new("div")
                .with_attribute("id", "main")
                .with_style("color", "navy")
                .with_children([
                    ElementSpec::new("p").with_child(ElementSpec::new("span")),
                    ElementSpec::new("img").with_attribute("src", "cake.png"),
                ]),
            ElementSpec::new("p").with_attribute("id", "locked").locked(),
            ElementSpec::new("span")
                .with_attribute("id", "keyword")
                .with_style("font-size", "medium"),
            ElementSpec::new("div").with_attribute("role", "img"),
        ]);
    PageSpec::new(body).with_title("Sample")
}

fn sample() -> Document {
    Document::from_spec(sample_page())
}

fn tags(doc: &Document, ids: &[ElementId]) -> Vec<String> {
    ids.iter()
        .map(|&id| doc.tag(id).unwrap().to_string())
        .collect()
}

fn by_id(doc: &Document, id: &str) -> ElementId {
    doc.find_by_id(id).unwrap()
}

#[test]
fn test_body_descendants_in_document_order() {
    let doc = sample();
    let found = doc.query_selector_all("body *").unwrap();
    assert_eq!(
        tags(&doc, &found),
        vec!["h1", "p", "div", "p", "span", "img", "p", "span", "div"]
    );
}

#[test]
fn test_body_selector() {
    let doc = sample();
    let found = doc.query_selector_all("body").unwrap();
    assert_eq!(found, vec![doc.body().unwrap()]);
}

#[test]
fn test_selector_list_dedupes_and_keeps_order() {
    let doc = sample();
    let found = doc.query_selector_all("body, body *").unwrap();
    assert_eq!(found.len(), 10);
    assert_eq!(found[0], doc.body().unwrap());
    assert!(found.windows(2).all(|pair| pair[0] < pair[1]));

    let overlapping = doc.query_selector_all("p, .lead, p.intro").unwrap();
    assert_eq!(overlapping.len(), 3);
}

#[test]
fn test_image_selector() {
    let doc = sample();
    let found = doc
        .query_selector_all(r#"img, picture, svg, [role="img"]"#)
        .unwrap();
    assert_eq!(tags(&doc, &found), vec!["img", "div"]);
}

#[test]
fn test_child_versus_descendant() {
    let doc = sample();
    assert_eq!(doc.query_selector_all("#main span").unwrap().len(), 1);
    assert!(doc.query_selector_all("#main > span").unwrap().is_empty());
    assert_eq!(doc.query_selector_all("body > p").unwrap().len(), 2);
    assert_eq!(doc.query_selector_all("div > p > span").unwrap().len(), 1);
}

#[test]
fn test_no_match_is_empty() {
    let doc = sample();
    assert!(doc.query_selector_all("video").unwrap().is_empty());
}

#[test]
fn test_invalid_selector() {
    let doc = sample();
    let err = doc.query_selector_all("p:first-child").unwrap_err();
    assert!(matches!(err, DocumentError::InvalidSelector { .. }));
}

#[test]
fn test_computed_font_size_resolution() {
    let doc = sample();
    let body = doc.body().unwrap();
    let h1 = by_id(&doc, "title");
    let lead = doc.query_selector_all(".lead").unwrap()[0];
    let nested_span = doc.query_selector_all("#main span").unwrap()[0];

    assert_eq!(doc.computed_style(body, "font-size").unwrap().as_deref(), Some("16px"));
    assert_eq!(doc.computed_style(h1, "font-size").unwrap().as_deref(), Some("32px"));
    assert_eq!(doc.computed_style(lead, "font-size").unwrap().as_deref(), Some("9px"));
    assert_eq!(
        doc.computed_style(nested_span, "font-size").unwrap().as_deref(),
        Some("16px")
    );
}

#[test]
fn test_unresolvable_font_size_reported_as_declared() {
    let doc = sample();
    let keyword = by_id(&doc, "keyword");
    assert_eq!(
        doc.computed_style(keyword, "font-size").unwrap().as_deref(),
        Some("medium")
    );
}

#[test]
fn test_inline_beats_author_and_drives_em_children() {
    let mut doc = sample();
    let main = by_id(&doc, "main");
    let inner_p = doc.query_selector_all("#main > p").unwrap()[0];
    doc.set_inline_style(main, "font-size", "20px").unwrap();
    doc.set_inline_style(inner_p, "font-size", "150%").unwrap();

    assert_eq!(doc.computed_style(main, "font-size").unwrap().as_deref(), Some("20px"));
    assert_eq!(doc.computed_style(inner_p, "font-size").unwrap().as_deref(), Some("30px"));
}

#[test]
fn test_inherited_and_initial_values() {
    let doc = sample();
    let nested_span = doc.query_selector_all("#main span").unwrap()[0];
    let img = doc.query_selector_all("img").unwrap()[0];

    assert_eq!(doc.computed_style(nested_span, "color").unwrap().as_deref(), Some("navy"));
    assert_eq!(
        doc.computed_style(nested_span, "background-color").unwrap().as_deref(),
        Some("rgba(0, 0, 0, 0)")
    );
    assert_eq!(doc.computed_style(img, "display").unwrap().as_deref(), Some("inline"));
    assert_eq!(
        doc.computed_style(img, "line-height").unwrap().as_deref(),
        Some("normal")
    );
    assert_eq!(doc.computed_style(img, "filter").unwrap(), None);
}

#[test]
fn test_global_blocks_do_not_cascade() {
    let mut doc = sample();
    let body = doc.body().unwrap();
    doc.insert_style_block(StyleBlock::new("x", "body { color: white !important; }"));
    assert_eq!(
        doc.computed_style(body, "color").unwrap().as_deref(),
        Some("rgb(0, 0, 0)")
    );
}

#[test]
fn test_set_inline_style_upserts_and_clears() {
    let mut doc = sample();
    let h1 = by_id(&doc, "title");

    doc.set_inline_style(h1, "color", "red").unwrap();
    doc.set_inline_style(h1, "color", "blue").unwrap();
    assert_eq!(doc.inline_style(h1, "color").unwrap().as_deref(), Some("blue"));

    doc.set_inline_style(h1, "Display", "none").unwrap();
    assert_eq!(
        doc.inline_style_text(h1).as_deref(),
        Some("color: blue; display: none")
    );

    doc.set_inline_style(h1, "display", "").unwrap();
    assert_eq!(doc.inline_style(h1, "display").unwrap(), None);
}

#[test]
fn test_locked_element_rejects_writes() {
    let mut doc = sample();
    let locked = by_id(&doc, "locked");
    let err = doc.set_inline_style(locked, "color", "red").unwrap_err();
    assert!(matches!(err, DocumentError::StyleRejected { element, .. } if element == locked));
    assert_eq!(doc.inline_style(locked, "color").unwrap(), None);
}

#[test]
fn test_unknown_element() {
    let mut doc = sample();
    let bogus = ElementId(999);
    assert_eq!(
        doc.computed_style(bogus, "color").unwrap_err(),
        DocumentError::UnknownElement(bogus)
    );
    assert!(doc.set_inline_style(bogus, "color", "red").is_err());
    assert_eq!(doc.inline_style_text(bogus), None);
}

#[test]
fn test_style_blocks_are_unique_per_id() {
    let mut doc = sample();
    doc.insert_style_block(StyleBlock::new("a", "p {}"));
    doc.insert_style_block(StyleBlock::new("b", "div {}"));
    doc.insert_style_block(StyleBlock::new("a", "span {}"));

    assert_eq!(doc.style_block_ids(), vec!["b".to_string(), "a".to_string()]);
    assert_eq!(doc.style_block("a").unwrap().css, "span {}");

    assert!(doc.remove_style_block("a"));
    assert!(!doc.remove_style_block("a"));
    assert_eq!(doc.style_block_ids(), vec!["b".to_string()]);
}

#[test]
fn test_reload_restores_snapshot() {
    let mut doc = sample();
    let h1 = by_id(&doc, "title");
    doc.set_inline_style(h1, "color", "red").unwrap();
    doc.insert_style_block(StyleBlock::new("a", "p {}"));

    doc.reload().unwrap();

    assert_eq!(doc.inline_style(h1, "color").unwrap(), None);
    assert!(doc.style_block_ids().is_empty());
    assert_eq!(doc.reload_count(), 1);
    assert_eq!(doc.state().body, sample_page().body);
}

#[test]
fn test_state_reflects_inline_styles() {
    let mut doc = sample();
    let body = doc.body().unwrap();
    doc.set_inline_style(body, "background-color", "#FFFFFF").unwrap();
    doc.insert_style_block(StyleBlock::new("pagetweak-dark-mode", "html {}"));

    let state = doc.state();
    assert_eq!(state.title, "Sample");
    assert_eq!(state.body.unwrap().inline["background-color"], "#FFFFFF");
    assert_eq!(state.style_blocks[0].id, "pagetweak-dark-mode");
    assert_eq!(state.reload_count, 0);
}

#[test]
fn test_missing_body() {
    let mut doc = Document::from_json(r#"{"title":"frameset"}"#).unwrap();
    assert_eq!(doc.body().unwrap_err(), DocumentError::MissingBody);
    assert!(doc.query_selector_all("body *").unwrap().is_empty());
    assert!(doc.reload().is_ok());
}

#[test]
fn test_body_root_is_always_body() {
    let doc = Document::from_spec(PageSpec::new(ElementSpec::new("main")));
    let body = doc.body().unwrap();
    assert_eq!(doc.tag(body), Some("body"));
}

#[test]
fn test_from_json_lowercases_names() {
    let doc = Document::from_json(
        r#"{"body":{"tag":"BODY","children":[{"tag":"P","styles":{"Font-Size":"12px"}}]}}"#,
    )
    .unwrap();
    let p = doc.query_selector_all("p").unwrap()[0];
    assert_eq!(doc.computed_style(p, "font-size").unwrap().as_deref(), Some("12px"));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.json");
    std::fs::write(&path, serde_json::to_string(&sample_page()).unwrap()).unwrap();

    let doc = Document::load(&path).unwrap();
    assert_eq!(doc.title(), "Sample");
    assert_eq!(doc.query_selector_all("body *").unwrap().len(), 9);
}

#[test]
fn test_load_errors() {
    assert!(matches!(
        Document::load("/nonexistent/page.json"),
        Err(LoadError::Io(_))
    ));
    assert!(matches!(
        Document::from_json("not json"),
        Err(LoadError::Parse(_))
    ));
}
