//! API client integration tests
//!
//! Exercises `ApiClient` against a `wiremock` mock server: request paths
//! and payload shapes, the `Token` authorization header, and the
//! user-facing error message contract (server `message` field when
//! present, fixed fallback otherwise).

use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use farmgate::{ApiClient, FarmgateError, Session, UserRole, FALLBACK_ERROR};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Construct an `ApiClient` pointing at the given wiremock base URL.
fn make_client(base_url: &str) -> ApiClient {
    let config = farmgate::config::ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
    };
    ApiClient::new(&config).expect("client should build")
}

fn buyer_session() -> Session {
    Session::new("sekret".to_string(), UserRole::Buyer)
}

fn farmer_session() -> Session {
    Session::new("sekret".to_string(), UserRole::Farmer)
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_login_posts_credentials_and_returns_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/login/"))
        .and(body_json(serde_json::json!({
            "username": "aigerim",
            "password": "hunter22",
            "user_type": "farmer",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "abc123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let token = api
        .login("aigerim", "hunter22", UserRole::Farmer)
        .await
        .expect("login should succeed");

    assert_eq!(token, "abc123");
}

#[tokio::test]
async fn test_login_without_token_in_response_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let err = api
        .login("aigerim", "hunter22", UserRole::Buyer)
        .await
        .expect_err("login without a token should fail");

    assert!(matches!(
        err.downcast_ref::<FarmgateError>(),
        Some(FarmgateError::Authentication(_))
    ));
}

#[tokio::test]
async fn test_register_buyer_nests_user_and_delivery_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/register/buyer/"))
        .and(body_json(serde_json::json!({
            "user": {
                "username": "dana",
                "email": "dana@example.com",
                "password": "hunter22",
            },
            "delivery_address": "12 Abay Ave",
            "contact_number": "7010000000",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    api.register_buyer("12 Abay Ave", "7010000000", "dana@example.com", "hunter22")
        .await
        .expect("registration should succeed");
}

#[tokio::test]
async fn test_register_farmer_nests_user_and_derives_username() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/register/farmer/"))
        .and(body_json(serde_json::json!({
            "name": "Aigerim",
            "location": "Almaty",
            "contact_info": "Phone: +7 701 000 0000, Email: aigerim@example.com",
            "user": {
                "username": "aigerim",
                "email": "aigerim@example.com",
                "password": "hunter22",
            },
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    api.register_farmer(
        "Aigerim",
        "Almaty",
        "+7 701 000 0000",
        "aigerim@example.com",
        "hunter22",
    )
    .await
    .expect("registration should succeed");
}

// ---------------------------------------------------------------------------
// Authorization header
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_cart_sends_token_scheme_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/buyers/cart/"))
        .and(header("authorization", "Token sekret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [
                {"id": 1, "product_name": "Tomatoes", "product_price": "12.50", "quantity": 2}
            ],
            "total": "25.00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let cart = api
        .cart(&buyer_session())
        .await
        .expect("cart fetch should succeed");

    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.total, Some(25.0));
}

#[tokio::test]
async fn test_public_catalog_needs_no_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/list/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "name": "Tomatoes", "price": "12.50", "quantity_available": 30},
            {"id": 2, "name": "Apples", "price": 8.0, "quantity_available": 100}
        ])))
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let products = api.list_products().await.expect("list should succeed");

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].price, 12.5);
    assert_eq!(products[1].price, 8.0);
}

#[tokio::test]
async fn test_product_detail_filters_the_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/list/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "name": "Tomatoes", "price": "12.50", "quantity_available": 30},
            {"id": 2, "name": "Apples", "price": 8.0, "quantity_available": 100}
        ])))
        .mount(&server)
        .await;

    let api = make_client(&server.uri());

    let found = api.product_detail(2).await.expect("detail should succeed");
    assert_eq!(found.expect("product 2 exists").name, "Apples");

    let missing = api.product_detail(99).await.expect("detail should succeed");
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Cart mutations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_add_to_cart_posts_product_and_quantity_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/buyers/cart/add/"))
        .and(header("authorization", "Token sekret"))
        .and(body_json(serde_json::json!({
            "product_id": 4,
            "quantity": 2,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    api.add_to_cart(&buyer_session(), 4, 2)
        .await
        .expect("add should succeed");

    // A mutation is a single round trip; no follow-up fetch.
    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_remove_from_cart_posts_item_id_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/buyers/cart/remove/"))
        .and(header("authorization", "Token sekret"))
        .and(body_json(serde_json::json!({ "item_id": 9 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    api.remove_from_cart(&buyer_session(), 9)
        .await
        .expect("remove should succeed");

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_place_order_posts_delivery_details() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/buyers/cart/place-order/"))
        .and(header("authorization", "Token sekret"))
        .and(body_json(serde_json::json!({
            "delivery_details": "12 Abay Ave, apt 3",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 31,
            "order_date": "2024-11-02T09:00:00Z",
            "total_price": "42.00",
            "is_completed": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let order = api
        .place_order(&buyer_session(), "12 Abay Ave, apt 3")
        .await
        .expect("order should be placed");

    assert_eq!(order.id, 31);
    assert_eq!(order.total_price, 42.0);
    assert_eq!(order.status(), "In Progress");
}

// ---------------------------------------------------------------------------
// Error message contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_server_message_field_becomes_the_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/buyers/cart/apply-promo/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "message": "Invalid promo code"
        })))
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let err = api
        .apply_promo(&buyer_session(), "NOPE")
        .await
        .expect_err("promo should fail");

    match err.downcast_ref::<FarmgateError>() {
        Some(FarmgateError::Api { status, message }) => {
            assert_eq!(*status, 400);
            assert_eq!(message, "Invalid promo code");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unusable_error_body_falls_back_to_fixed_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/buyers/order/history/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let err = api
        .order_history(&buyer_session())
        .await
        .expect_err("history should fail");

    match err.downcast_ref::<FarmgateError>() {
        Some(FarmgateError::Api { status, message }) => {
            assert_eq!(*status, 500);
            assert_eq!(message, FALLBACK_ERROR);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_inbox_unwraps_results_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/my-messages/"))
        .and(header("authorization", "Token sekret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"sender": 7, "receiver": 3, "message": "are the apples still available?"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let messages = api
        .inbox(&buyer_session())
        .await
        .expect("inbox should succeed");

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender, 7);
}

#[tokio::test]
async fn test_send_message_posts_unread_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/send-messages/"))
        .and(header("authorization", "Token sekret"))
        .and(body_json(serde_json::json!({
            "receiver": 7,
            "message": "hello",
            "is_read": false,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "sender": 3,
            "receiver": 7,
            "message": "hello"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let sent = api
        .send_message(&buyer_session(), 7, "hello")
        .await
        .expect("send should succeed");

    assert_eq!(sent.sender, 3);
    assert_eq!(sent.receiver, 7);
}

#[tokio::test]
async fn test_conversation_uses_both_ids_in_the_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/get-messages/3/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"sender": 3, "receiver": 7, "message": "hi"},
                {"sender": 7, "receiver": 3, "message": "hello"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let messages = api
        .conversation(&buyer_session(), 3, 7)
        .await
        .expect("conversation should succeed");

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].sender, 7);
}

// ---------------------------------------------------------------------------
// Farmer surface
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_profile_unwraps_the_farmer_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/farmer/profile/"))
        .and(header("authorization", "Token sekret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "farmer": {
                "name": "Aigerim",
                "location": "Almaty",
                "contact_info": "Phone: +7 701 000 0000, Email: aigerim@example.com"
            }
        })))
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let profile = api
        .profile(&farmer_session())
        .await
        .expect("profile should succeed");

    assert_eq!(profile.name, "Aigerim");
    assert_eq!(profile.email().as_deref(), Some("aigerim@example.com"));
}

#[tokio::test]
async fn test_create_product_uploads_multipart_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/farmer/products/create/"))
        .and(header("authorization", "Token sekret"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let image_path = dir.path().join("tomatoes.jpg");
    std::fs::write(&image_path, b"not really a jpeg").expect("write image");

    let api = make_client(&server.uri());
    let product = farmgate::api::NewProduct {
        name: "Tomatoes".to_string(),
        price: 12.5,
        description: "Fresh".to_string(),
        quantity_available: 30,
        category: 2,
        popularity: 0,
        image_path,
    };
    api.create_product(&farmer_session(), &product)
        .await
        .expect("create should succeed");

    let requests = server.received_requests().await.expect("recorded requests");
    let body = String::from_utf8_lossy(&requests[0].body);
    for field in [
        "name=\"name\"",
        "name=\"price\"",
        "name=\"description\"",
        "name=\"quantity_available\"",
        "name=\"category\"",
        "name=\"popularity\"",
        "name=\"image\"",
        "filename=\"tomatoes.jpg\"",
    ] {
        assert!(body.contains(field), "missing multipart field: {}", field);
    }
}

#[tokio::test]
async fn test_update_product_patches_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/farmer/product/9/update/"))
        .and(body_json(serde_json::json!({
            "name": "Tomatoes",
            "price": 14.0,
            "quantity_available": 25,
            "category_id": 2,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 9, "name": "Tomatoes", "price": "14.00", "quantity_available": 25
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let update = farmgate::api::ProductUpdate {
        name: "Tomatoes".to_string(),
        price: 14.0,
        quantity_available: 25,
        category_id: 2,
    };
    let product = api
        .update_product(&farmer_session(), 9, &update)
        .await
        .expect("update should succeed");

    assert_eq!(product.price, 14.0);
}

#[tokio::test]
async fn test_inventory_report_passes_range_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/inventory-report/"))
        .and(query_param("start_date", "2024-01-01"))
        .and(query_param("end_date", "2024-01-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "low_stock": [{"id": 4, "name": "Milk", "quantity_available": 2}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let report = api
        .inventory_report("2024-01-01", "2024-01-31")
        .await
        .expect("report should succeed");

    assert_eq!(report["low_stock"][0]["name"], "Milk");
}

#[tokio::test]
async fn test_sales_report_passes_range_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/farmers/sales-report/"))
        .and(query_param("start_date", "2024-01-01"))
        .and(query_param("end_date", "2024-01-31"))
        .and(query_param("report_type", "daily"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "report": {"total_sales": 120.5}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = make_client(&server.uri());
    let report = api
        .sales_report("2024-01-01", "2024-01-31", "daily")
        .await
        .expect("report should succeed");

    assert_eq!(report.report["total_sales"], 120.5);
}
