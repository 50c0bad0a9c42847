// SVG output: well-formed XML, one rect per cell, escaped text, file output

use gridplot_wasm::models::maps::frozen_lake;
use gridplot_wasm::plot::{policy_svg, values_and_policy_svg, values_svg};
use gridplot_wasm::{plot_values, GridDescription, PolicyWeights, RenderConfig, SvgSurface};

fn cell_texts(doc: &roxmltree::Document) -> Vec<String> {
    doc.descendants()
        .filter(|n| n.has_tag_name("text"))
        .filter(|n| n.attribute("text-anchor") == Some("middle"))
        .filter_map(|n| n.text().map(str::to_string))
        .collect()
}

#[test]
fn test_values_svg_parses_with_expected_cells() {
    let grid = frozen_lake("4x4").unwrap();
    let values: Vec<f64> = (0..16).map(|s| s as f64 / 15.0).collect();
    let svg = values_svg(&values, &grid, &RenderConfig::default()).unwrap();

    let doc = roxmltree::Document::parse(&svg).expect("SVG should be well-formed XML");
    let root = doc.root_element();
    assert!(root.has_tag_name("svg"));

    let cell_rects = doc
        .descendants()
        .filter(|n| n.has_tag_name("rect") && n.attribute("width") == Some("48") && n.attribute("height") == Some("48"))
        .count();
    assert_eq!(cell_rects, 16);

    let texts = cell_texts(&doc);
    assert_eq!(texts.iter().filter(|t| t.as_str() == "x").count(), 4);
    assert_eq!(texts.iter().filter(|t| t.as_str() == "G").count(), 1);
    assert!(texts.contains(&"0.00".to_string()));
    assert!(texts.contains(&"State Value".to_string()));
}

#[test]
fn test_ticks_cleared_in_rendered_panel() {
    let grid = frozen_lake("4x4").unwrap();
    let svg = values_svg(&[0.0; 16], &grid, &RenderConfig::default()).unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let end_anchored = doc
        .descendants()
        .filter(|n| n.has_tag_name("text") && n.attribute("text-anchor") == Some("end"))
        .count();
    assert_eq!(end_anchored, 0);
}

#[test]
fn test_markers_are_escaped() {
    let grid = GridDescription::from_rows(&["SH"]).unwrap();
    let config = RenderConfig { hazard_marker: "<&>".to_string(), ..RenderConfig::default() };
    let svg = values_svg(&[0.0, 0.0], &grid, &config).unwrap();
    assert!(svg.contains("&lt;&amp;&gt;"));

    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert!(cell_texts(&doc).contains(&"<&>".to_string()));
}

#[test]
fn test_policy_svg_arrows() {
    let grid = GridDescription::from_rows(&["SF", "HG"]).unwrap();
    let policy = PolicyWeights::from_actions(&[2, 1, 0, 0], 4).unwrap();
    let svg = policy_svg(&[0.4, 0.6, 0.0, 1.0], &policy, &grid, &RenderConfig::default()).unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let texts = cell_texts(&doc);
    assert!(texts.contains(&"→".to_string()));
    assert!(texts.contains(&"↓".to_string()));
    assert!(!texts.contains(&"0.40".to_string()));
}

#[test]
fn test_figure_is_well_formed() {
    let grid = frozen_lake("4x4").unwrap();
    let policy = PolicyWeights::from_actions(&[0; 16], 4).unwrap();
    let svg = values_and_policy_svg(&[0.5; 16], &policy, &grid, &RenderConfig::default()).unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let gradients = doc.descendants().filter(|n| n.has_tag_name("linearGradient")).count();
    assert_eq!(gradients, 2);
}

#[test]
fn test_save_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("values.svg");

    let grid = frozen_lake("4x4").unwrap();
    let config = RenderConfig::default().with_title("Value Iteration");
    let mut surface = SvgSurface::new(4, 4, &config);
    plot_values(&[0.1; 16], &grid, &mut surface).unwrap();
    surface.save(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<?xml"));
    assert!(written.contains(">0.10</text>"));
}
