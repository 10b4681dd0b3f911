use super::*;

#[test]
fn title_case_handles_hyphenated_keys() {
    assert_eq!(title_case("hi-tech"), "Hi-Tech");
    assert_eq!(title_case("societe"), "Societe");
    assert_eq!(title_case("LifeStyle"), "Lifestyle");
    assert_eq!(title_case("monde"), "Monde");
    assert_eq!(title_case(""), "");
}

#[test]
fn zero_sized_background_is_a_hard_failure() {
    let composer = Composer::new(
        ComposeSpec::default(),
        FontResolver::new("definitely-missing-fonts").with_system_dirs(vec![]),
        None,
    );
    let req = ComposeRequest {
        background: image::DynamicImage::ImageRgba8(image::RgbaImage::new(0, 0)),
        headline: "headline".to_string(),
        category_key: "sports".to_string(),
        logo: None,
        locale: "en".to_string(),
    };
    let err = composer.compose(&req).unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::PostframeError::Background(_)
    ));
}

#[test]
fn spec_accessor_exposes_the_layout() {
    let composer = Composer::with_defaults();
    assert_eq!(composer.spec().canvas.width, 1079);
}
