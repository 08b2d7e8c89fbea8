use super::*;

const DOT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32">
  <circle cx="16" cy="16" r="8" fill="#3366ff"/>
</svg>"##;

#[test]
fn indices_are_assigned_in_order() {
    let mut engine = SvgEngine::new();
    assert_eq!(engine.add_svg("", DOT_SVG.as_bytes().to_vec()).unwrap(), 1);
    assert_eq!(engine.add_svg("dot", DOT_SVG.as_bytes().to_vec()).unwrap(), 2);

    let figs = engine.open_figures();
    assert_eq!(figs.len(), 2);
    assert_eq!(figs[0].label(), "");
    assert_eq!(figs[1].label(), "dot");
    assert_eq!(figs[1].index(), 2);
}

#[test]
fn invalid_svg_is_a_figure_error() {
    let mut engine = SvgEngine::new();
    let err = engine.add_svg("", b"not svg".to_vec()).unwrap_err();
    assert!(matches!(err, SavefigsError::Figure(_)));
    assert!(engine.figures().is_empty());
}

#[test]
fn svg_output_is_the_source_document() {
    let dir = PathBuf::from("target").join("unit_svg_engine");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("copy.svg");

    let mut engine = SvgEngine::new();
    engine.add_svg("", DOT_SVG.as_bytes().to_vec()).unwrap();
    let fig = engine.open_figures().remove(0);
    engine
        .save_figure(&fig, &path, "svg", &WriterOptions::new())
        .unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), DOT_SVG);
}

#[test]
fn unsupported_format_fails() {
    let mut engine = SvgEngine::new();
    engine.add_svg("", DOT_SVG.as_bytes().to_vec()).unwrap();
    let fig = engine.open_figures().remove(0);
    let err = engine
        .save_figure(
            &fig,
            Path::new("target/never.pdf"),
            "pdf",
            &WriterOptions::new(),
        )
        .unwrap_err();
    assert!(err.to_string().contains("unsupported output format 'pdf'"));
}

#[test]
fn unknown_figure_fails() {
    let mut engine = SvgEngine::new();
    let ghost = Figure::unlabeled(9).unwrap();
    let err = engine
        .save_figure(
            &ghost,
            Path::new("target/ghost.png"),
            "png",
            &WriterOptions::new(),
        )
        .unwrap_err();
    assert!(err.to_string().contains("figure 9 is not open"));
}
