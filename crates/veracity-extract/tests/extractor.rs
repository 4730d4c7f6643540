//! Integration tests for `ArticleExtractor` using wiremock HTTP mocks.

use veracity_extract::{ArticleExtractor, ExtractError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_extractor() -> ArticleExtractor {
    ArticleExtractor::new(5, "veracity-test/0.1").expect("extractor construction should not fail")
}

const ARTICLE_HTML: &str = r"<html><head><title>EU announces new aid package</title></head>
<body><article>
<p>The European Union has announced a new comprehensive aid package for Ukraine.</p>
<p>The package aims to support defense capabilities and civilian infrastructure.</p>
</article></body></html>";

#[tokio::test]
async fn fetches_and_extracts_article_paragraphs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/world/eu-aid"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(ARTICLE_HTML, "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let text = test_extractor()
        .fetch_article_text(&format!("{}/world/eu-aid", server.uri()))
        .await
        .expect("article text");

    assert!(text.starts_with("The European Union has announced"));
    assert!(text.contains("civilian infrastructure"));
}

#[tokio::test]
async fn not_found_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = test_extractor()
        .fetch_article_text(&format!("{}/missing", server.uri()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ExtractError::UnexpectedStatus { status: 404, .. }),
        "expected UnexpectedStatus(404), got: {err:?}"
    );
}

#[tokio::test]
async fn page_without_text_is_no_article_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html><body><div>Loading…</div></body></html>", "text/html"),
        )
        .mount(&server)
        .await;

    let err = test_extractor()
        .fetch_article_text(&format!("{}/spa", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractError::NoArticleText { .. }), "got: {err:?}");
}

#[tokio::test]
async fn binary_content_is_unsupported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(vec![0x25_u8, 0x50, 0x44, 0x46], "application/pdf"),
        )
        .mount(&server)
        .await;

    let err = test_extractor()
        .fetch_article_text(&format!("{}/report.pdf", server.uri()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ExtractError::UnsupportedContent { ref content_type, .. } if content_type == "application/pdf"),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn invalid_url_is_rejected_before_any_request() {
    let err = test_extractor()
        .fetch_article_text("mailto:editor@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, ExtractError::InvalidUrl { .. }));
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ARTICLE_HTML, "text/html"))
        .mount(&server)
        .await;

    let err = test_extractor()
        .with_max_body_bytes(64)
        .fetch_article_text(&format!("{}/world/eu-aid", server.uri()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ExtractError::BodyTooLarge { limit: 64, .. }),
        "expected BodyTooLarge, got: {err:?}"
    );
}

#[tokio::test]
async fn body_exactly_at_the_cap_is_read() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ARTICLE_HTML, "text/html"))
        .mount(&server)
        .await;

    let text = test_extractor()
        .with_max_body_bytes(ARTICLE_HTML.len())
        .fetch_article_text(&format!("{}/world/eu-aid", server.uri()))
        .await
        .expect("article text");

    assert!(text.contains("civilian infrastructure"));
}

#[tokio::test]
async fn plain_text_bodies_are_whitespace_normalised() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "Officials   confirmed the\n\nceasefire will hold through the weekend.",
            "text/plain; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let text = test_extractor()
        .fetch_article_text(&format!("{}/wire.txt", server.uri()))
        .await
        .expect("article text");

    assert_eq!(text, "Officials confirmed the ceasefire will hold through the weekend.");
}
