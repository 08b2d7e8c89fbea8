use super::*;

#[test]
fn zero_index_is_rejected() {
    let err = Figure::new(0, "loss").unwrap_err();
    assert!(err.to_string().contains("figure index must be positive"));
}

#[test]
fn unlabeled_figure_has_empty_label() {
    let fig = Figure::unlabeled(3).unwrap();
    assert_eq!(fig.index(), 3);
    assert_eq!(fig.label(), "");
}
