//! Integration tests driving the users API adapter against a local server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpResponse, HttpServer, web};
use department_stats::domain::DepartmentStatsService;
use department_stats::domain::ports::{UserSource, UserSourceError};
use department_stats::outbound::users_api::UsersApiSource;
use rstest::rstest;
use serde::Deserialize;
use serde_json::{Value, json};
use url::Url;

const DEFAULT_LIMIT: usize = 2;

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default)]
    skip: usize,
    limit: Option<usize>,
}

fn user(first: &str, last: &str, gender: &str, age: u32, hair: &str, postal: &str, dept: &str) -> Value {
    json!({
        "id": 1,
        "firstName": first,
        "lastName": last,
        "age": age,
        "gender": gender,
        "email": "ignored@example.com",
        "hair": { "color": hair, "type": "Straight" },
        "address": { "address": "1 Main St", "postalCode": postal },
        "company": { "department": dept, "name": "Acme", "title": "Engineer" }
    })
}

fn users() -> Vec<Value> {
    vec![
        user("John", "Doe", "male", 28, "Black", "12345", "Engineering"),
        user("Jane", "Smith", "female", 35, "Blonde", "54321", "Engineering"),
        user("Ann", "Lee", "female", 41, "Brown", "99999", "Marketing"),
    ]
}

async fn users_page(query: web::Query<PageQuery>) -> HttpResponse {
    let all = users();
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let page: Vec<Value> = all.iter().skip(query.skip).take(limit).cloned().collect();
    HttpResponse::Ok().json(json!({
        "users": page,
        "total": all.len(),
        "skip": query.skip,
        "limit": limit,
    }))
}

async fn slow_page() -> HttpResponse {
    tokio::time::sleep(Duration::from_millis(500)).await;
    HttpResponse::Ok().json(json!({ "users": [], "total": 0, "skip": 0, "limit": 0 }))
}

async fn unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable().body("maintenance window")
}

async fn malformed() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body("{\"users\": [")
}

struct LocalUpstream {
    addr: SocketAddr,
    handle: ServerHandle,
}

impl LocalUpstream {
    async fn start() -> Self {
        let server = HttpServer::new(|| {
            App::new()
                .route("/users", web::get().to(users_page))
                .route("/slow/users", web::get().to(slow_page))
                .route("/down/users", web::get().to(unavailable))
                .route("/broken/users", web::get().to(malformed))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind local upstream");
        let addr = *server.addrs().first().expect("bound address");
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Self { addr, handle }
    }

    fn base(&self, prefix: &str) -> Url {
        Url::parse(&format!("http://{}/{prefix}", self.addr)).expect("base url")
    }

    async fn stop(self) {
        self.handle.stop(false).await;
    }
}

fn source(base: &Url, timeout: Duration) -> UsersApiSource {
    UsersApiSource::new(base, timeout).expect("build client")
}

#[actix_web::test]
async fn aggregates_every_page_from_the_users_api() {
    let upstream = LocalUpstream::start().await;
    let service = DepartmentStatsService::new(Arc::new(source(
        &upstream.base(""),
        Duration::from_secs(5),
    )));

    let stats = service.run_aggregation().await.expect("aggregation succeeds");

    assert_eq!(
        serde_json::to_value(&stats).expect("serialise stats"),
        json!({
            "Engineering": {
                "male": 1,
                "female": 1,
                "ageRange": "28-35",
                "hair": { "Black": 1, "Blonde": 1 },
                "addressUser": { "JohnDoe": "12345", "JaneSmith": "54321" }
            },
            "Marketing": {
                "male": 0,
                "female": 1,
                "ageRange": "41-41",
                "hair": { "Brown": 1 },
                "addressUser": { "AnnLee": "99999" }
            }
        })
    );
    upstream.stop().await;
}

#[actix_web::test]
async fn honours_configured_page_size() {
    let upstream = LocalUpstream::start().await;
    let source = source(&upstream.base(""), Duration::from_secs(5)).with_page_size(Some(1));

    let page = source.fetch_page(1).await.expect("page");

    assert_eq!(page.len(), 1);
    assert_eq!(page.skip, 1);
    assert_eq!(page.total, 3);
    assert_eq!(page.items[0].first_name, "Jane");
    upstream.stop().await;
}

#[rstest]
#[case::timeout("slow")]
#[case::status("down")]
#[case::decode("broken")]
#[actix_rt::test]
async fn maps_upstream_failures(#[case] prefix: &str) {
    let upstream = LocalUpstream::start().await;
    let source = source(&upstream.base(prefix), Duration::from_millis(100));

    let error = source.fetch_page(0).await.expect_err("fetch should fail");

    match (prefix, &error) {
        ("slow", UserSourceError::Timeout { .. }) => {}
        ("down", UserSourceError::Status { status, message }) => {
            assert_eq!(*status, 503);
            assert_eq!(message, "maintenance window");
        }
        ("broken", UserSourceError::Decode { .. }) => {}
        _ => panic!("unexpected error for {prefix}: {error}"),
    }
    upstream.stop().await;
}
