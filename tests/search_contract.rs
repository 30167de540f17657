//! Search & Pagination Contract Tests
//!
//! Exercises the filtered-search contract over the real router:
//! - Year expressions: comparison operators, bare equality, ranges, the
//!   `Range` keyword form, and explicit rejection of malformed input
//! - A reversed range is accepted and matches nothing
//! - Pagination: `last_page == ceil(total / page_size)` with a floor of 1,
//!   newest-first ordering, and empty pages beyond the last
//! - Repeating a query with no intervening mutation is idempotent

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{create_book, get, search_page, test_router};

#[tokio::test]
async fn test_greater_than_filter() {
    let router = test_router();
    create_book(&router, "Dune", "Herbert", 1965, None).await;
    create_book(&router, "Gateway", "Pohl", 1975, None).await;
    create_book(&router, "Neuromancer", "Gibson", 1985, None).await;

    let envelope = search_page(&router, "publish_year=%3E1970").await;
    assert!(envelope.success);

    let page = envelope.data.unwrap();
    assert_eq!(page.total, 2);
    let years: Vec<u32> = page.data.iter().map(|b| b.publish_year).collect();
    assert_eq!(years, vec![1985, 1975]);
}

#[tokio::test]
async fn test_comparison_operator_variants() {
    let router = test_router();
    create_book(&router, "A", "X", 1990, None).await;
    create_book(&router, "B", "X", 2000, None).await;
    create_book(&router, "C", "X", 2010, None).await;

    let page = search_page(&router, "publish_year=%3E%3D2000").await.data.unwrap();
    assert_eq!(page.total, 2);

    let page = search_page(&router, "publish_year=%3C2000").await.data.unwrap();
    assert_eq!(page.total, 1);

    let page = search_page(&router, "publish_year=%3C%3D2000").await.data.unwrap();
    assert_eq!(page.total, 2);

    // Bare year is equality
    let page = search_page(&router, "publish_year=2000").await.data.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].title, "B");
}

#[tokio::test]
async fn test_range_filter() {
    let router = test_router();
    create_book(&router, "Old", "X", 1985, None).await;
    create_book(&router, "Mid", "X", 1995, None).await;
    create_book(&router, "New", "X", 2005, None).await;

    let envelope = search_page(&router, "publish_year=1990-2000").await;
    let page = envelope.data.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].title, "Mid");

    // The client's keyword form parses identically
    let envelope = search_page(&router, "publish_year=Range1990-2000").await;
    assert_eq!(envelope.data.unwrap().total, 1);
}

#[tokio::test]
async fn test_reversed_range_matches_nothing() {
    let router = test_router();
    create_book(&router, "Mid", "X", 1995, None).await;

    let envelope = search_page(&router, "publish_year=2000-1990").await;
    assert!(envelope.success);

    let page = envelope.data.unwrap();
    assert_eq!(page.total, 0);
    assert!(page.data.is_empty());
    assert_eq!(page.last_page, 1);
}

#[tokio::test]
async fn test_malformed_year_filter_is_rejected() {
    let router = test_router();
    create_book(&router, "Dune", "Herbert", 1965, None).await;

    let (status, body) = get(&router, "/books?publish_year=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["data"], Value::Null);
    assert!(body["message"].as_str().unwrap().contains("year filter"));
}

#[tokio::test]
async fn test_empty_year_term_is_no_filter() {
    let router = test_router();
    create_book(&router, "Dune", "Herbert", 1965, None).await;

    let envelope = search_page(&router, "publish_year=").await;
    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap().total, 1);
}

#[tokio::test]
async fn test_substring_terms_are_case_insensitive_and_anded() {
    let router = test_router();
    create_book(&router, "Dune", "Frank Herbert", 1965, None).await;
    create_book(&router, "Dune Messiah", "Frank Herbert", 1969, None).await;
    create_book(&router, "Hyperion", "Dan Simmons", 1989, None).await;

    let page = search_page(&router, "title=dune").await.data.unwrap();
    assert_eq!(page.total, 2);

    let page = search_page(&router, "title=dune&author=simmons").await.data.unwrap();
    assert_eq!(page.total, 0);

    let page = search_page(&router, "author=HERBERT&publish_year=%3E1967")
        .await
        .data
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].title, "Dune Messiah");
}

#[tokio::test]
async fn test_description_term_skips_records_without_description() {
    let router = test_router();
    create_book(&router, "Dune", "Herbert", 1965, Some("Desert epic")).await;
    create_book(&router, "Gateway", "Pohl", 1977, None).await;

    let page = search_page(&router, "description=epic").await.data.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].title, "Dune");
}

#[tokio::test]
async fn test_pagination_metadata_and_slicing() {
    let router = test_router();
    for i in 0..7 {
        create_book(&router, &format!("Book {}", i), "Author", 1990, None).await;
    }

    let page = search_page(&router, "page=1").await.data.unwrap();
    assert_eq!(page.total, 7);
    assert_eq!(page.per_page, 5);
    assert_eq!(page.last_page, 2);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.data.len(), 5);

    let page = search_page(&router, "page=2").await.data.unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.current_page, 2);
}

#[tokio::test]
async fn test_newest_records_come_first() {
    let router = test_router();
    create_book(&router, "First", "X", 1990, None).await;
    create_book(&router, "Second", "X", 1991, None).await;

    let page = search_page(&router, "").await.data.unwrap();
    assert_eq!(page.data[0].title, "Second");
    assert_eq!(page.data[1].title, "First");
}

#[tokio::test]
async fn test_empty_catalog_still_has_one_page() {
    let router = test_router();
    let page = search_page(&router, "").await.data.unwrap();
    assert_eq!(page.total, 0);
    assert_eq!(page.last_page, 1);
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_page_beyond_last_is_empty_success() {
    let router = test_router();
    create_book(&router, "Dune", "Herbert", 1965, None).await;

    let envelope = search_page(&router, "page=9").await;
    assert!(envelope.success);

    let page = envelope.data.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.last_page, 1);
}

#[tokio::test]
async fn test_invalid_page_parameter_is_rejected() {
    let router = test_router();
    let (status, body) = get(&router, "/books?page=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_identical_queries_are_idempotent() {
    let router = test_router();
    for i in 0..8 {
        create_book(&router, &format!("Book {}", i), "Author", 1990 + i, None).await;
    }

    let first = search_page(&router, "page=2&publish_year=%3E1990").await;
    let second = search_page(&router, "page=2&publish_year=%3E1990").await;
    assert_eq!(first, second);
}
