use super::*;

const SEED: &str = "A new study reveals surprising results about climate research";

fn above_footer(img: &image::RgbImage) -> Vec<u8> {
    let cutoff = img.height().saturating_sub(FOOTER_HEIGHT);
    let mut out = Vec::new();
    for y in 0..cutoff {
        for x in 0..img.width() {
            out.extend_from_slice(&img.get_pixel(x, y).0);
        }
    }
    out
}

#[test]
fn identical_seeds_match_outside_the_footer() {
    let a = generate_placeholder(SEED, (120, 160)).unwrap();
    let b = generate_placeholder(SEED, (120, 160)).unwrap();
    assert_eq!(above_footer(&a), above_footer(&b));
}

#[test]
fn different_seeds_produce_different_art() {
    let a = generate_placeholder(SEED, (120, 160)).unwrap();
    let b = generate_placeholder("totally unrelated subject matter entirely", (120, 160)).unwrap();
    assert_ne!(above_footer(&a), above_footer(&b));
}

#[test]
fn requested_size_is_respected() {
    let img = generate_placeholder(SEED, (200, 300)).unwrap();
    assert_eq!(img.dimensions(), (200, 300));
}

#[test]
fn zero_size_is_rejected() {
    assert!(generate_placeholder(SEED, (0, 100)).is_err());
    assert!(generate_placeholder(SEED, (100, 0)).is_err());
}

#[test]
fn empty_seed_still_renders() {
    let img = generate_placeholder("", (80, 100)).unwrap();
    assert_eq!(img.dimensions(), (80, 100));
}

#[test]
fn gradient_runs_top_to_bottom() {
    // Ambient discs can brighten individual pixels, so compare whole-row
    // means, which the gradient dominates.
    let img = generate_placeholder("", (64, 200)).unwrap();
    let row_mean_red = |y: u32| -> f64 {
        (0..img.width())
            .map(|x| f64::from(img.get_pixel(x, y)[0]))
            .sum::<f64>()
            / f64::from(img.width())
    };
    assert!(row_mean_red(150) > row_mean_red(10));
}

#[test]
fn keywords_skip_short_and_stop_words() {
    let kws = extract_keywords("this that with from tiny a climate research results");
    assert_eq!(
        kws,
        vec![
            "climate".to_string(),
            "research".to_string(),
            "results".to_string()
        ]
    );
}

#[test]
fn keywords_are_capped_and_stripped() {
    let kws = extract_keywords(
        "alpha! bravo, charlie? deltas; echos: foxtrot golfer hotels",
    );
    assert_eq!(kws.len(), 5);
    assert_eq!(kws[0], "alpha");
    assert_eq!(kws[1], "bravo");
}
