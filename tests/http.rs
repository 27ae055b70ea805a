//! HTTP surface integration tests.
//!
//! Starts the axum router on an ephemeral port and exercises it with reqwest.

use order_desk::app_system::StoreSystem;
use order_desk::config::{AppConfig, SeedAdministrator};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

struct TestServer {
    base: String,
    client: Client,
    _system: StoreSystem,
}

/// Bind to port 0 and return the actual address.
async fn start_server() -> TestServer {
    let system = StoreSystem::new(&AppConfig::for_test());
    system
        .seed_administrator(&SeedAdministrator { nickname: "admin".into(), password: "admin123".into() })
        .await
        .unwrap();

    let app = order_desk::http::router(system.services.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer { base: format!("http://{addr}"), client: Client::new(), _system: system }
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn admin_token(&self) -> String {
        let resp = self
            .client
            .post(self.url("/administrators/login"))
            .json(&json!({ "nickname": "admin", "password": "admin123" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = resp.json().await.unwrap();
        body["token"].as_str().unwrap().to_string()
    }

    async fn send(&self, method: reqwest::Method, path: &str, token: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = self.client.request(method, self.url(path)).header("Authorization", token);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let resp = request.send().await.unwrap();
        let status = resp.status();
        let body = resp.json().await.unwrap_or(Value::Null);
        (status, body)
    }
}

async fn create_customer(server: &TestServer, token: &str) -> Value {
    let (status, body) = server
        .send(
            reqwest::Method::POST,
            "/administrators/customers",
            token,
            Some(json!({
                "name": "Carla Ruiz",
                "national_id": "V-2001",
                "phone": "555-0101",
                "password": "cliente123",
                "nickname": "carla"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert!(body.get("password_hash").is_none());
    body
}

async fn create_product(server: &TestServer, token: &str, stock: &str) -> u64 {
    let (status, body) = server
        .send(
            reqwest::Method::POST,
            "/administrators/products",
            token,
            Some(json!({ "name": "Cement", "sell_price": "5.00", "base_price": "3.50", "unit": "kilos" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let id = body["id"].as_u64().unwrap();

    let (status, _) = server
        .send(
            reqwest::Method::PUT,
            &format!("/administrators/products/{id}/stock/add"),
            token,
            Some(json!({ "amount": stock })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    id
}

#[tokio::test]
async fn health_check() {
    let server = start_server().await;
    let resp = server.client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn admin_routes_require_an_admin_token() {
    let server = start_server().await;

    let resp = server.client.get(server.url("/administrators/orders")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let (status, _) = server.send(reqwest::Method::GET, "/administrators/orders", "bogus", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = server.admin_token().await;
    let (status, body) = server
        .send(reqwest::Method::GET, "/administrators/orders", &format!("Bearer {token}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    // Logging in again with a live token is refused
    let resp = server
        .client
        .post(server.url("/administrators/login"))
        .header("Authorization", &token)
        .json(&json!({ "nickname": "admin", "password": "admin123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_delivery_flow() {
    let server = start_server().await;
    let token = server.admin_token().await;
    let customer = create_customer(&server, &token).await;
    let product_id = create_product(&server, &token, "10").await;

    let (status, order) = server
        .send(
            reqwest::Method::POST,
            "/administrators/orders",
            &token,
            Some(json!({
                "customer_id": customer["id"],
                "charged_amount": "15.00",
                "address": "Av. Bolivar 12",
                "products": [{ "product_id": product_id, "quantity": "3" }]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{order}");
    assert_eq!(order["status"], "PENDING");
    let order_id = order["id"].as_u64().unwrap();

    let path = format!("/administrators/orders/{order_id}/deliver");
    let (status, body) = server.send(reqwest::Method::PUT, &path, &token, None).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["order"]["status"], "DELIVERED");
    let sale_id = body["order"]["sale_id"].as_u64().unwrap();

    let (status, _) = server.send(reqwest::Method::PUT, &path, &token, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, sale) = server
        .send(reqwest::Method::GET, &format!("/administrators/sales/{sale_id}"), &token, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sale["order_id"], order_id);

    let (_, product) = server
        .send(reqwest::Method::GET, &format!("/administrators/products/{product_id}"), &token, None)
        .await;
    assert_eq!(product["stock"], "7");
}

#[tokio::test]
async fn invalid_orders_report_every_line() {
    let server = start_server().await;
    let token = server.admin_token().await;
    let customer = create_customer(&server, &token).await;
    let product_id = create_product(&server, &token, "2").await;

    let (status, body) = server
        .send(
            reqwest::Method::POST,
            "/administrators/orders",
            &token,
            Some(json!({
                "customer_id": customer["id"],
                "charged_amount": "10",
                "address": "Av. Bolivar 12",
                "products": [
                    { "product_id": product_id, "quantity": "5" },
                    { "product_id": 99, "quantity": "1" }
                ]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = &body["errors"];
    assert!(errors[format!("product_{product_id}")][0].as_str().unwrap().contains("current stock: 2"));
    assert_eq!(errors["product_99"][0], "product is not registered");

    let (_, orders) = server.send(reqwest::Method::GET, "/administrators/orders", &token, None).await;
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn stock_removal_and_missing_products() {
    let server = start_server().await;
    let token = server.admin_token().await;

    let (status, _) = server.send(reqwest::Method::GET, "/administrators/products", &token, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "empty catalog");

    let product_id = create_product(&server, &token, "4").await;
    let path = format!("/administrators/products/{product_id}/stock/remove");

    let (status, body) = server
        .send(reqwest::Method::PUT, &path, &token, Some(json!({ "amount": "5" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["current_stock"], "4");

    let (status, _) = server
        .send(reqwest::Method::PUT, &path, &token, Some(json!({ "amount": "0" })))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = server
        .send(reqwest::Method::GET, "/administrators/products/999", &token, None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn customer_login_profile_logout() {
    let server = start_server().await;
    let admin = server.admin_token().await;
    let customer = create_customer(&server, &admin).await;

    let resp = server
        .client
        .post(server.url("/customers/login"))
        .json(&json!({ "nickname": "carla", "password": "cliente123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let token = resp.json::<Value>().await.unwrap()["token"].as_str().unwrap().to_string();

    let (status, profile) = server.send(reqwest::Method::GET, "/customers/profile", &token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["id"], customer["id"]);

    // Customer tokens do not open the back office
    let (status, _) = server.send(reqwest::Method::GET, "/administrators/profile", &token, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = server.send(reqwest::Method::POST, "/customers/logout", &token, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = server.send(reqwest::Method::GET, "/customers/profile", &token, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn incomplete_orders_report_missing_fields_with_line_errors() {
    let server = start_server().await;
    let token = server.admin_token().await;
    let customer = create_customer(&server, &token).await;

    let (status, body) = server
        .send(
            reqwest::Method::POST,
            "/administrators/orders",
            &token,
            Some(json!({
                "customer_id": customer["id"],
                "charged_amount": "10",
                "products": [{ "product_id": 99, "quantity": "1" }]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
    assert_eq!(body["errors"]["address"][0], "is required");
    assert_eq!(body["errors"]["product_99"][0], "product is not registered");

    // A customer held by a rejected order is released again
    let path = format!("/administrators/customers/{}", customer["id"]);
    let (status, _) = server.send(reqwest::Method::DELETE, &path, &token, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_bodies_are_validation_errors() {
    let server = start_server().await;
    let token = server.admin_token().await;
    let product_id = create_product(&server, &token, "1").await;

    let (status, body) = server
        .send(reqwest::Method::POST, "/administrators/orders", &token, Some(json!({ "customer_id": "abc" })))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errors"]["body"][0].is_string(), "{body}");

    let path = format!("/administrators/products/{product_id}/stock/add");
    let (status, body) = server.send(reqwest::Method::PUT, &path, &token, Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["amount"][0], "is required");
}

#[tokio::test]
async fn products_on_an_order_cannot_be_deleted() {
    let server = start_server().await;
    let token = server.admin_token().await;
    let customer = create_customer(&server, &token).await;
    let product_id = create_product(&server, &token, "3").await;

    let (status, _) = server
        .send(
            reqwest::Method::POST,
            "/administrators/orders",
            &token,
            Some(json!({
                "customer_id": customer["id"],
                "charged_amount": "5",
                "address": "Av. Bolivar 12",
                "products": [{ "product_id": product_id, "quantity": "1" }]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let path = format!("/administrators/products/{product_id}");
    let (status, _) = server.send(reqwest::Method::DELETE, &path, &token, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, product) = server.send(reqwest::Method::GET, &path, &token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["stock"], "2");

    let path = format!("/administrators/customers/{}", customer["id"]);
    let (status, _) = server.send(reqwest::Method::DELETE, &path, &token, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
