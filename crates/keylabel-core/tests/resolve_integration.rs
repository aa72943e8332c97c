//! Integration tests for shortcut label resolution.
//!
//! These go through the public API only, with the concrete layout sources the
//! crate ships, and cover the user-visible properties of both branches.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use keylabel_core::{
    resolve_shortcut, split_tokens, strip_physical_prefixes, JsonFileLayoutSource,
    KeyboardLayoutSource, LayoutErrorPolicy, LayoutMap, LayoutSourceError, ResolveError,
    ResolverOptions, ShortcutLabelResolver, StaticLayoutSource,
};

const SHORTCUT: &str = "Cmd KeyA Digit0 Equal Minus ArrowDown NotAKey";

fn us_fragment() -> StaticLayoutSource {
    StaticLayoutSource::new(
        [("KeyA", "A"), ("Digit0", "0"), ("Equal", "="), ("Minus", "-")]
            .into_iter()
            .collect(),
    )
}

/// Counts queries so the once-per-call contract can be checked without mocks.
#[derive(Default)]
struct CountingSource {
    queries: AtomicUsize,
}

#[async_trait]
impl KeyboardLayoutSource for CountingSource {
    async fn layout_map(&self) -> Result<LayoutMap, LayoutSourceError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok([("KeyA", "a")].into_iter().collect())
    }
}

#[tokio::test]
async fn test_heuristic_fallback_without_layout_source() {
    let out = resolve_shortcut(SHORTCUT, None).await.unwrap();
    assert_eq!(out, "Cmd A 0 Equal Minus ArrowDown NotAKey");
}

#[tokio::test]
async fn test_layout_mapped_resolution() {
    let source = us_fragment();
    let out = resolve_shortcut(SHORTCUT, Some(&source)).await.unwrap();
    assert_eq!(out, "Cmd A 0 = - ArrowDown NotAKey");
}

#[tokio::test]
async fn test_token_count_and_order_are_preserved_in_both_branches() {
    let source = StaticLayoutSource::us_qwerty();
    let inputs = [
        SHORTCUT,
        "",
        "KeyA",
        "Key Digit",
        "Ctrl  Shift KeyZ ",
        "Backquote IntlBackslash Slash",
    ];

    for input in inputs {
        let expected = split_tokens(input).count();

        let heuristic = resolve_shortcut(input, None).await.unwrap();
        let mapped = resolve_shortcut(input, Some(&source)).await.unwrap();

        assert_eq!(split_tokens(&heuristic).count(), expected, "heuristic {input:?}");
        assert_eq!(split_tokens(&mapped).count(), expected, "mapped {input:?}");
    }
}

#[tokio::test]
async fn test_us_qwerty_source_symbolises_punctuation_and_upper_cases_letters() {
    let source = StaticLayoutSource::us_qwerty();

    let out = resolve_shortcut("Cmd Shift KeyK BracketLeft Slash", Some(&source))
        .await
        .unwrap();

    assert_eq!(out, "Cmd Shift K [ /");
}

#[tokio::test]
async fn test_unknown_tokens_pass_through_verbatim_with_layout() {
    let source = us_fragment();

    let out = resolve_shortcut("F13 keya KeyB NotAKey", Some(&source))
        .await
        .unwrap();

    assert_eq!(out, "F13 keya KeyB NotAKey");
}

#[test]
fn test_heuristic_is_idempotent_on_resolved_labels() {
    let once = strip_physical_prefixes(SHORTCUT);
    assert_eq!(strip_physical_prefixes(&once), once);
}

#[tokio::test]
async fn test_empty_input_resolves_to_empty_in_both_branches() {
    let source = us_fragment();
    assert_eq!(resolve_shortcut("", None).await.unwrap(), "");
    assert_eq!(resolve_shortcut("", Some(&source)).await.unwrap(), "");
}

#[tokio::test]
async fn test_layout_source_can_be_swapped_between_calls() {
    let resolver = ShortcutLabelResolver::default();
    let qwerty = StaticLayoutSource::us_qwerty();
    let azerty = StaticLayoutSource::new([("KeyQ", "a"), ("KeyA", "q")].into_iter().collect());

    let first = resolver.resolve("Cmd KeyQ", Some(&qwerty)).await.unwrap();
    let second = resolver.resolve("Cmd KeyQ", Some(&azerty)).await.unwrap();
    let third = resolver.resolve("Cmd KeyQ", None).await.unwrap();

    assert_eq!(first, "Cmd Q");
    assert_eq!(second, "Cmd A");
    assert_eq!(third, "Cmd Q");
}

#[tokio::test]
async fn test_layout_source_is_queried_once_per_call() {
    let resolver = ShortcutLabelResolver::default();
    let source = CountingSource::default();

    resolver.resolve("KeyA KeyA Digit0", Some(&source)).await.unwrap();
    resolver.resolve("", Some(&source)).await.unwrap();

    assert_eq!(source.queries.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_heuristic_branch_never_queries() {
    let resolver = ShortcutLabelResolver::default();
    let source = CountingSource::default();

    resolver.resolve("KeyA", None).await.unwrap();

    assert_eq!(source.queries.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_layout_file_propagates_by_default() {
    let source = JsonFileLayoutSource::new("/no/such/dir/layout.json");

    let result = resolve_shortcut("KeyA", Some(&source)).await;

    assert!(matches!(
        result,
        Err(ResolveError::Layout(LayoutSourceError::Io { .. }))
    ));
}

#[tokio::test]
async fn test_missing_layout_file_falls_back_when_configured() {
    let resolver = ShortcutLabelResolver::new(ResolverOptions {
        on_layout_error: LayoutErrorPolicy::FallBackToHeuristic,
        layout_timeout: None,
    });
    let source = JsonFileLayoutSource::new("/no/such/dir/layout.json");

    let out = resolver.resolve("Cmd KeyA Equal", Some(&source)).await.unwrap();

    assert_eq!(out, "Cmd A Equal");
}

#[tokio::test]
async fn test_json_file_layout_end_to_end() {
    let dir = std::env::temp_dir().join(format!("keylabel_it_{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("de.json");
    std::fs::write(&path, r#"{"KeyZ": "y", "KeyY": "z", "Minus": "ß"}"#).unwrap();
    let source = JsonFileLayoutSource::new(&path);

    let out = resolve_shortcut("Ctrl KeyZ Minus", Some(&source)).await.unwrap();

    // German QWERTZ: the key in the Z position is labelled Y; "ß" upper-cases
    // to "SS" under Unicode rules.
    assert_eq!(out, "Ctrl Y SS");

    // Cleanup
    std::fs::remove_dir_all(&dir).ok();
}
