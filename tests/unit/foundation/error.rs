use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SavefigsError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        SavefigsError::figure("x")
            .to_string()
            .contains("figure error:")
    );
    assert_eq!(
        SavefigsError::conflict("out/fig1.png").to_string(),
        "conflict error: file path out/fig1.png already exists"
    );
    assert!(
        SavefigsError::duplicate_output("out/dup.png")
            .to_string()
            .contains("produced twice in this export")
    );
}

#[test]
fn writer_preserves_source() {
    let base = std::io::Error::other("disk full");
    let err = SavefigsError::from(anyhow::Error::new(base));
    assert_eq!(err.to_string(), "disk full");
    let SavefigsError::Writer(inner) = err else {
        panic!("expected writer error");
    };
    assert!(inner.downcast_ref::<std::io::Error>().is_some());
}
