//! In-process fake of the maintenance REST API.
//!
//! Routes are `(method, path)` pairs answered with a fixed status and JSON
//! body, optionally after a delay. Unknown routes get
//! `404 {"error": "Not found"}`. Every request is recorded on arrival so
//! tests can assert on what was (or was not) sent. Each request is answered
//! on its own thread, so a slow route does not hold up the others.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use mantis_config::ApiConfig;
use mantis_hierarchy::{ApiClient, HierarchyStore};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[derive(Debug, Clone)]
struct Reply {
    status: u16,
    body: String,
    delay: Duration,
}

type Routes = HashMap<(String, String), Reply>;

pub struct FakeApi {
    server: Arc<tiny_http::Server>,
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    handle: Option<JoinHandle<()>>,
    pub base_url: String,
}

impl FakeApi {
    pub fn start() -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").unwrap());
        let port = server.server_addr().to_ip().unwrap().port();
        let routes: Arc<Mutex<Routes>> = Arc::default();
        let requests: Arc<Mutex<Vec<Recorded>>> = Arc::default();

        let handle = {
            let server = Arc::clone(&server);
            let routes = Arc::clone(&routes);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                while let Ok(mut request) = server.recv() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    let method = request.method().to_string();
                    let path = request.url().to_string();
                    requests.lock().unwrap().push(Recorded {
                        method: method.clone(),
                        path: path.clone(),
                        body,
                    });
                    let reply = routes.lock().unwrap().get(&(method, path)).cloned();
                    std::thread::spawn(move || respond(request, reply));
                }
            })
        };

        Self {
            server,
            routes,
            requests,
            handle: Some(handle),
            base_url: format!("http://127.0.0.1:{port}"),
        }
    }

    /// A fake already serving the small plant used across these tests.
    pub fn with_plant() -> Self {
        let api = Self::start();
        api.seed_plant();
        api
    }

    pub fn route(&self, method: &str, path: &str, status: u16, body: &Value) {
        self.route_slow(method, path, status, body, Duration::ZERO);
    }

    /// Like [`Self::route`], but the reply is held back for `delay`.
    pub fn route_slow(&self, method: &str, path: &str, status: u16, body: &Value, delay: Duration) {
        self.routes.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            Reply { status, body: body.to_string(), delay },
        );
    }

    pub fn seed_plant(&self) {
        self.route("GET", "/api/areas", 200, &json!([
            {"id": 1, "name": "A", "description": null},
            {"id": 2, "name": "Bodega"}
        ]));
        // Foreign keys arrive as strings from some deployments.
        self.route("GET", "/api/lines", 200, &json!([
            {"id": "10", "name": "L", "area_id": "1"}
        ]));
        self.route("GET", "/api/equipments", 200, &json!([
            {"id": 100, "name": "E", "tag": "TAG", "line_id": 10, "criticality": "Alta"}
        ]));
        self.route("GET", "/api/systems", 200, &json!([]));
        self.route("GET", "/api/components", 200, &json!([]));
        self.route("GET", "/api/spare-parts", 200, &json!([]));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(ApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
            ..ApiConfig::default()
        })
        .unwrap()
    }

    pub fn store(&self) -> HierarchyStore {
        HierarchyStore::new(self.client())
    }
}

fn respond(request: tiny_http::Request, reply: Option<Reply>) {
    let reply = reply.unwrap_or_else(|| Reply {
        status: 404,
        body: json!({"error": "Not found"}).to_string(),
        delay: Duration::ZERO,
    });
    std::thread::sleep(reply.delay);
    let response = tiny_http::Response::from_string(reply.body)
        .with_status_code(reply.status)
        .with_header(tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap());
    let _ = request.respond(response);
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub const COLLECTIONS: [&str; 6] = [
    "/api/areas",
    "/api/lines",
    "/api/equipments",
    "/api/systems",
    "/api/components",
    "/api/spare-parts",
];
