use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use fluxmart::api::{ApiClient, ApiError, ProductQuery};
use fluxmart::config::ApiConfig;

/// Serve exactly one canned HTTP response, returning the base URL.
fn serve_once(status: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    let status = status.to_string();
    let body = body.to_string();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 8192];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

fn client_for(base_url: String) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url,
        ..ApiConfig::default()
    })
}

#[tokio::test]
async fn fetch_products_unwraps_the_envelope() {
    let base = serve_once(
        "200 OK",
        r#"{"products": [{"id": 1, "title": "Desk Lamp", "price": 24.5, "images": ["a.png", "b.png"]}]}"#,
    );
    let client = client_for(base);

    let products = client
        .fetch_products(&ProductQuery::default())
        .await
        .expect("fetch should succeed");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Desk Lamp");
    assert_eq!(products[0].images, vec!["a.png", "b.png"]);
}

#[tokio::test]
async fn fetch_products_propagates_non_success_status() {
    let base = serve_once("500 Internal Server Error", "{}");
    let client = client_for(base);

    let err = client
        .fetch_products(&ProductQuery::default())
        .await
        .expect_err("500 must be an error");
    match err {
        ApiError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/api/products"));
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_product_propagates_not_found() {
    // The single-product endpoint reports failure like the others;
    // nothing is swallowed.
    let base = serve_once("404 Not Found", r#"{"message": "no such product"}"#);
    let client = client_for(base);

    let err = client.fetch_product(42).await.expect_err("404 must be an error");
    match err {
        ApiError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/api/products/42"));
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_product_decodes_a_record() {
    let base = serve_once(
        "200 OK",
        r#"{"id": 42, "title": "Mug", "category": "kitchen", "images": []}"#,
    );
    let client = client_for(base);

    let product = client.fetch_product(42).await.expect("fetch should succeed");
    assert_eq!(product.id, 42);
    assert_eq!(product.category, "kitchen");
}

#[tokio::test]
async fn fetch_categories_decodes_names() {
    let base = serve_once("200 OK", r#"["laptops", "phones", "kitchen"]"#);
    let client = client_for(base);

    let categories = client.fetch_categories().await.expect("fetch should succeed");
    assert_eq!(categories, vec!["laptops", "phones", "kitchen"]);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let base = serve_once("200 OK", "not json at all");
    let client = client_for(base);

    let err = client
        .fetch_categories()
        .await
        .expect_err("garbage body must fail");
    assert!(matches!(err, ApiError::Decode { .. }));
}
