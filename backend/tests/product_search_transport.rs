use axum::{
    Json, Router,
    http::StatusCode,
    response::Redirect,
    routing::post,
};
use backend::{api::product_search::submit_product_search, config::SearchEndpointConfig};
use common::{
    search_error::RequestFailed,
    search_query::ProductSearchForm,
    search_result::{SearchResponse, SearchResultState},
    search_sources::{DiscussionSite, Retailer},
};
use serde_json::{Value, json};

async fn spawn_endpoint(router: Router) -> SearchEndpointConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    SearchEndpointConfig::new(&format!("http://{addr}/search")).unwrap()
}

fn echo_router() -> Router {
    Router::new().route("/search", post(|Json(body): Json<Value>| async move {
        Json(json!({ "received": body, "products": [] }))
    }))
}

fn laptop_form() -> ProductSearchForm {
    let mut form = ProductSearchForm::default();
    form.set_category("laptop");
    form.set_min_price_text("500");
    form.set_max_price_text("1500");
    form.set_site(DiscussionSite::Reddit, true);
    form.set_site(DiscussionSite::Discord, true);
    form.set_retailer(Retailer::Amazon, true);
    form
}

#[tokio::test]
async fn test_posts_json_body_and_decodes_response() {
    let config = spawn_endpoint(echo_router()).await;
    let response = submit_product_search(&config, &laptop_form().to_request()).await.unwrap();
    assert_eq!(
        response.0,
        json!({
            "received": {
                "product_category": "laptop",
                "min_price": 500.0,
                "max_price": 1500.0,
                "sites": ["reddit", "discord"],
                "retailers": ["amazon"]
            },
            "products": []
        })
    );
}

#[tokio::test]
async fn test_empty_form_is_still_submitted() {
    let config = spawn_endpoint(echo_router()).await;
    let response = submit_product_search(&config, &ProductSearchForm::default().to_request()).await.unwrap();
    assert_eq!(
        response.0["received"],
        json!({
            "product_category": "",
            "min_price": null,
            "max_price": null,
            "sites": [],
            "retailers": []
        })
    );
}

#[tokio::test]
async fn test_follows_trailing_slash_redirect() {
    let router = Router::new()
        .route("/search", post(|| async { Redirect::temporary("/search/") }))
        .route("/search/", post(|Json(body): Json<Value>| async move { Json(json!({ "received": body })) }));
    let config = spawn_endpoint(router).await;
    let response = submit_product_search(&config, &laptop_form().to_request()).await.unwrap();
    assert_eq!(response.0["received"]["product_category"], json!("laptop"));
}

#[tokio::test]
async fn test_error_status_is_request_failed() {
    let router = Router::new().route("/search", post(|| async {
        (StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail":"Internal Server Error"}"#)
    }));
    let config = spawn_endpoint(router).await;
    let err = submit_product_search(&config, &laptop_form().to_request()).await.unwrap_err();
    assert_eq!(
        err,
        RequestFailed::Status { status: 500, body: r#"{"detail":"Internal Server Error"}"#.to_string() }
    );
}

#[tokio::test]
async fn test_non_json_body_is_request_failed() {
    let router = Router::new().route("/search", post(|| async { "<html>maintenance</html>" }));
    let config = spawn_endpoint(router).await;
    let err = submit_product_search(&config, &laptop_form().to_request()).await.unwrap_err();
    assert!(matches!(err, RequestFailed::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_request_failed() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let config = SearchEndpointConfig::new(&format!("http://{addr}/search")).unwrap();
    let err = submit_product_search(&config, &laptop_form().to_request()).await.unwrap_err();
    assert!(matches!(err, RequestFailed::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn test_failure_keeps_previous_result() {
    let ok = spawn_endpoint(echo_router()).await;
    let broken = spawn_endpoint(Router::new().route("/search", post(|| async { StatusCode::BAD_GATEWAY }))).await;

    let mut results = SearchResultState::default();
    let request = laptop_form().to_request();
    results.apply(submit_product_search(&ok, &request).await).unwrap();
    let before: Option<SearchResponse> = results.latest().cloned();
    assert!(before.is_some());

    let outcome = submit_product_search(&broken, &request).await;
    assert!(results.apply(outcome).is_err());
    assert_eq!(results.latest().cloned(), before);
}
