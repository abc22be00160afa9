//! Browser theme + reveal tests — verifies the toggle and entrance behavior
//! in a real engine.
//!
//! Run with: `cargo test --test browser_theme -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_fixtures_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_simple-folio");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let content_dir = root.join("tests/browser/content");
        std::fs::create_dir_all(&content_dir).expect("failed to create content dir");
        std::fs::write(
            content_dir.join(simple_folio::content::CONTENT_FILE),
            simple_folio::content::stock_content_toml(),
        )
        .expect("failed to write fixture content");

        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(bin)
            .args([
                "build",
                "--source",
                content_dir.to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run simple-folio");
        assert!(status.success(), "fixture generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load_index() -> Arc<Tab> {
    ensure_fixtures_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join("index.html");
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn root_is_dark(tab: &Tab) -> bool {
    tab.evaluate(
        r#"document.documentElement.classList.contains("dark")"#,
        false,
    )
    .expect("failed to evaluate JS")
    .value
    .expect("no value returned")
    .as_bool()
    .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn page_starts_dark() {
    let tab = load_index();
    assert!(root_is_dark(&tab), "initial mode should be dark");
}

#[test]
#[ignore]
fn toggle_round_trips() {
    let tab = load_index();
    assert!(root_is_dark(&tab));

    tab.evaluate(r#"document.getElementById("theme-toggle").click()"#, false)
        .expect("failed to click toggle");
    assert!(!root_is_dark(&tab), "first click should switch to light");

    tab.evaluate(r#"document.getElementById("theme-toggle").click()"#, false)
        .expect("failed to click toggle");
    assert!(root_is_dark(&tab), "second click should restore dark");
}

#[test]
#[ignore]
fn hero_reveal_becomes_visible() {
    let tab = load_index();
    // IntersectionObserver fires async after load; poll briefly.
    let visible = tab
        .evaluate(
            r##"new Promise(function (resolve) {
                var tries = 0;
                (function check() {
                    var el = document.querySelector("#home .reveal");
                    if (el && el.classList.contains("visible")) return resolve(true);
                    if (++tries > 50) return resolve(false);
                    setTimeout(check, 100);
                })();
            })"##,
            true,
        )
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned");
    assert!(visible.as_bool().unwrap_or(false), "hero never revealed");
}

#[test]
#[ignore]
fn reveal_is_one_shot() {
    let tab = load_index();
    // Scroll to the bottom and back; visible classes must stay.
    tab.evaluate(
        r#"window.scrollTo(0, document.body.scrollHeight)"#,
        false,
    )
    .expect("failed to scroll");
    std::thread::sleep(std::time::Duration::from_millis(500));
    tab.evaluate(r#"window.scrollTo(0, 0)"#, false)
        .expect("failed to scroll");
    std::thread::sleep(std::time::Duration::from_millis(500));

    let all_visible = tab
        .evaluate(
            r#"Array.from(document.querySelectorAll(".reveal")).every(
                function (el) { return el.classList.contains("visible"); }
            )"#,
            false,
        )
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned");
    assert!(
        all_visible.as_bool().unwrap_or(false),
        "a reveal lost its visible class after scrolling back"
    );
}

#[test]
#[ignore]
fn default_page_has_no_storage_access() {
    let tab = load_index();
    let uses_storage = tab
        .evaluate(
            r#"(function () {
                var scripts = Array.from(document.querySelectorAll("script"));
                return scripts.some(function (s) {
                    return s.textContent.includes("localStorage");
                });
            })()"#,
            false,
        )
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned");
    assert!(!uses_storage.as_bool().unwrap_or(true));
}
