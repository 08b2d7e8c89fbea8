use super::*;

#[test]
fn pad_width_counts_digits() {
    assert_eq!(pad_width(0), 0);
    assert_eq!(pad_width(1), 1);
    assert_eq!(pad_width(9), 1);
    assert_eq!(pad_width(10), 2);
    assert_eq!(pad_width(99), 2);
    assert_eq!(pad_width(100), 3);
}

#[test]
fn unlabeled_stems_are_zero_padded() {
    let fig = Figure::unlabeled(3).unwrap();
    assert_eq!(figure_stem(&fig, 1), "fig3");
    assert_eq!(figure_stem(&fig, 2), "fig03");
    assert_eq!(figure_stem(&fig, 0), "fig3");
}

#[test]
fn indices_wider_than_padding_are_not_truncated() {
    let fig = Figure::unlabeled(123).unwrap();
    assert_eq!(figure_stem(&fig, 2), "fig123");
}

#[test]
fn labels_bypass_numbering() {
    let fig = Figure::new(7, "loss_curve").unwrap();
    assert_eq!(figure_stem(&fig, 3), "loss_curve");
    assert_eq!(full_stem("run_", &fig, 3), "run_loss_curve");
}

#[test]
fn extension_is_appended_not_substituted() {
    let dir = Path::new("out");
    assert_eq!(
        candidate_path(dir, "model.v2", "png", None),
        PathBuf::from("out/model.v2.png")
    );
    assert_eq!(
        candidate_path(dir, "fig1", "svg", Some(3)),
        PathBuf::from("out/fig1_3.svg")
    );
}
