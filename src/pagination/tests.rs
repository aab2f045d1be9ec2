//! Tests for pagination module

use super::*;
use crate::fields::is_brace_balanced;
use crate::http::RequestFactory;
use crate::types::{Direction, JsonObject, Params};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;

fn object(value: serde_json::Value) -> JsonObject {
    value.as_object().cloned().unwrap()
}

fn factory() -> RequestFactory {
    RequestFactory::new(
        "https://graph.facebook.com",
        "v14.0",
        Some("tok".to_string()),
    )
}

fn param(url: &str, key: &str) -> Vec<String> {
    Url::parse(url)
        .unwrap()
        .query_pairs()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .collect()
}

// ============================================================================
// PagingLinks Tests
// ============================================================================

#[test]
fn test_paging_links_get() {
    let links = PagingLinks::new("https://next", "");
    assert_eq!(links.get(Direction::Next), Some("https://next"));
    assert_eq!(links.get(Direction::Previous), None);
    assert!(links.has_next());
    assert!(!links.has_previous());
    assert!(!links.is_empty());
}

#[test]
fn test_paging_links_or() {
    let computed = PagingLinks::new("computed-next", "");
    let api = PagingLinks::new("api-next", "api-prev");
    assert_eq!(
        computed.or(api),
        PagingLinks::new("computed-next", "api-prev")
    );
}

// ============================================================================
// Cursor Extraction Tests
// ============================================================================

#[test]
fn test_cursors_at_top_level() {
    let body = object(json!({
        "data": [],
        "paging": {"cursors": {"after": "A1", "before": "B1"}}
    }));
    let cursors = cursors_at(&body, &[]);
    assert_eq!(cursors.after.as_deref(), Some("A1"));
    assert_eq!(cursors.before.as_deref(), Some("B1"));
}

#[test]
fn test_cursors_at_nested() {
    let body = object(json!({
        "business_discovery": {
            "media": {"paging": {"cursors": {"after": "XYZ"}}}
        }
    }));
    let cursors = cursors_at(&body, &["business_discovery", "media"]);
    assert_eq!(cursors.get(Direction::Next), Some("XYZ"));
    assert_eq!(cursors.get(Direction::Previous), None);
    assert!(cursors_at(&body, &[]).is_empty());
}

#[test]
fn test_cursors_tolerate_odd_shapes() {
    let body = object(json!({"paging": "nope"}));
    assert!(cursors_at(&body, &[]).is_empty());

    let body = object(json!({"paging": {"cursors": {"after": "", "before": null}}}));
    assert!(cursors_at(&body, &[]).is_empty());
}

#[test]
fn test_api_links() {
    let body = object(json!({
        "paging": {"next": "https://api/next", "previous": "https://api/prev"}
    }));
    assert_eq!(
        api_links(&body),
        PagingLinks::new("https://api/next", "https://api/prev")
    );
    assert!(api_links(&JsonObject::new()).is_empty());
}

// ============================================================================
// Simple Cursor Links Tests
// ============================================================================

#[test]
fn test_simple_links_after_only() {
    let body = object(json!({"paging": {"cursors": {"after": "C1"}}}));
    let params = Params::from([("fields", "id,name")]);

    let links = compute_simple_links(&body, "/me/accounts", &params, &factory());

    assert!(links.next.starts_with("https://graph.facebook.com/v14.0/me/accounts?"));
    assert!(links.next.contains("after=C1"));
    assert_eq!(param(&links.next, "fields"), vec!["id,name"]);
    assert_eq!(param(&links.next, "access_token"), vec!["tok"]);
    assert_eq!(links.previous, "");
}

#[test]
fn test_simple_links_before() {
    let body = object(json!({"paging": {"cursors": {"before": "B9"}}}));
    let links = compute_simple_links(&body, "/me/accounts", &Params::new(), &factory());

    assert_eq!(links.next, "");
    assert_eq!(param(&links.previous, "before"), vec!["B9"]);
}

#[test]
fn test_simple_links_no_cursors() {
    let body = object(json!({"data": []}));
    let links = compute_simple_links(&body, "/me/accounts", &Params::new(), &factory());
    assert_eq!(links, PagingLinks::default());
}

#[test]
fn test_simple_links_replace_existing_cursor() {
    let body = object(json!({"paging": {"cursors": {"after": "C2"}}}));
    let params = Params::from([("after", "C1"), ("limit", "5")]);

    let links = compute_simple_links(&body, "/me/accounts", &params, &factory());

    assert_eq!(param(&links.next, "after"), vec!["C2"]);
    assert_eq!(param(&links.next, "limit"), vec!["5"]);
}

#[test]
fn test_simple_strategy_matches_function() {
    let body = object(json!({"paging": {"cursors": {"after": "C1", "before": "C0"}}}));
    let strategy = SimpleCursorLinks::new("/1/media", Params::new());

    assert_eq!(
        strategy.compute(&body, &factory()),
        compute_simple_links(&body, "/1/media", &Params::new(), &factory())
    );
}

#[test]
fn test_api_provided_strategy_computes_nothing() {
    let body = object(json!({"paging": {"cursors": {"after": "C1"}}}));
    assert!(ApiProvidedLinks.compute(&body, &factory()).is_empty());
}

// ============================================================================
// Nested Cursor Links Tests
// ============================================================================

#[test]
fn test_nested_links_splice_after_cursor() {
    let body = object(json!({
        "business_discovery": {
            "media": {"paging": {"cursors": {"after": "XYZ"}}}
        }
    }));
    let strategy = NestedCursorLinks::business_discovery("/123", "id,username,media{id,caption}");

    let links = strategy.compute(&body, &factory());

    let fields = param(&links.next, "fields");
    assert_eq!(fields, vec!["id,username,media.after(XYZ){id,caption}"]);
    assert_eq!(fields[0].matches("media.after(").count(), 1);
    assert!(is_brace_balanced(&fields[0]));
    assert!(links.next.starts_with("https://graph.facebook.com/v14.0/123?"));
    assert_eq!(param(&links.next, "after"), Vec::<String>::new());
    assert_eq!(links.previous, "");
}

#[test]
fn test_nested_links_both_directions() {
    let body = object(json!({
        "business_discovery": {
            "media": {"paging": {"cursors": {"after": "A", "before": "B"}}}
        }
    }));
    let links = compute_nested_links(
        &body,
        &["business_discovery", "media"],
        "media",
        "/123",
        "media{id}",
        &factory(),
    );

    assert_eq!(param(&links.next, "fields"), vec!["media.after(A){id}"]);
    assert_eq!(param(&links.previous, "fields"), vec!["media.before(B){id}"]);
}

#[test]
fn test_nested_links_ignore_top_level_cursors() {
    let body = object(json!({"paging": {"cursors": {"after": "TOP"}}}));
    let strategy = NestedCursorLinks::business_discovery("/123", "media{id}");
    assert!(strategy.compute(&body, &factory()).is_empty());
}

#[test]
fn test_nested_links_need_unparameterized_relation() {
    let body = object(json!({
        "business_discovery": {
            "media": {"paging": {"cursors": {"after": "C2"}}}
        }
    }));
    let strategy = NestedCursorLinks::business_discovery("/123", "media.after(C1){id}");
    assert!(strategy.compute(&body, &factory()).is_empty());
}

// ============================================================================
// Attach Links Tests
// ============================================================================

#[test]
fn test_attach_links_always_sets_side_channel_keys() {
    let mut body = object(json!({"id": "1"}));
    attach_links(&mut body, &PagingLinks::default());

    assert_eq!(body[PAGING_NEXT_LINK], "");
    assert_eq!(body[PAGING_PREVIOUS_LINK], "");
    assert!(!body.contains_key("paging"));
}

#[test]
fn test_attach_links_writes_paging() {
    let mut body = object(json!({"paging": {"cursors": {"after": "C1"}}}));
    attach_links(&mut body, &PagingLinks::new("https://next", ""));

    assert_eq!(body["paging"]["next"], "https://next");
    assert_eq!(body["paging"]["cursors"]["after"], "C1");
    assert!(body["paging"].get("previous").is_none());
    assert_eq!(body[PAGING_NEXT_LINK], "https://next");
    assert_eq!(body[PAGING_PREVIOUS_LINK], "");
}
