//! Tests for /random endpoints.

mod common;

use common::TestApp;
use shade_family::{Family, FamilyKey};

#[tokio::test]
async fn test_random_without_family_uses_all() {
    let app = TestApp::new();

    let response = app.get("/random").await;
    let color = common::assert_hex_color(&response);

    assert!(FamilyKey::All.family().contains(&color));
}

#[tokio::test]
async fn test_random_named_family() {
    let app = TestApp::new();

    for name in ["blue", "RED", "Green", "magenta"] {
        let response = app.get(&format!("/random/{name}")).await;
        common::assert_hex_color(&response);
    }
}

#[tokio::test]
async fn test_random_unknown_family() {
    let app = TestApp::new();

    let response = app.get("/random/yuck").await;

    common::assert_error(
        &response,
        "could not get color family: not a valid color family: \"YUCK\"",
    );
}

#[tokio::test]
async fn test_random_is_reproducible_for_seed() {
    let first = TestApp::with_seed(7);
    let second = TestApp::with_seed(7);

    for path in ["/random", "/random/blue", "/random/red", "/random/blue"] {
        let a = first.get(path).await;
        let b = second.get(path).await;
        common::assert_ok(&a);
        assert_eq!(a.text(), b.text(), "{path}");
    }
}

#[tokio::test]
async fn test_random_matches_library_sequence() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let app = TestApp::with_seed(3);
    let mut rng = StdRng::seed_from_u64(3);
    let blue = Family::new("BLUE").unwrap();

    for _ in 0..3 {
        let response = app.get("/random/blue").await;
        common::assert_text(&response, &blue.random(&mut rng));
    }
}

#[tokio::test]
async fn test_random_sequence_advances() {
    let app = TestApp::new();

    let shades: Vec<String> = {
        let mut out = Vec::new();
        for _ in 0..5 {
            out.push(app.get("/random").await.text());
        }
        out
    };

    let mut unique = shades.clone();
    unique.sort();
    unique.dedup();
    assert!(unique.len() > 1, "expected varying shades, got {shades:?}");
}
