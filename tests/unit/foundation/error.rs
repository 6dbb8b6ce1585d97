use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FramescrollError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FramescrollError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(FramescrollError::load("x").to_string().contains("load error:"));
    assert!(
        FramescrollError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(FramescrollError::page("x").to_string().contains("page error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FramescrollError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
