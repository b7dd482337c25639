use sforce::{Credentials, SalesforceRestClient, SObject};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "MOCK_TOKEN";
pub const API_VERSION: &str = "mock";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn credentials() -> Credentials {
    Credentials::new("cid", "csecret", "user", "pass").expect("valid credentials")
}

pub fn login_success(server: &MockServer) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "access_token": ACCESS_TOKEN,
        "instance_url": server.uri(),
        "token_type": "Bearer"
    }))
}

pub fn invalid_session() -> ResponseTemplate {
    ResponseTemplate::new(401).set_body_json(serde_json::json!({
        "message": "Session expired or invalid",
        "errorCode": "INVALID_SESSION_ID"
    }))
}

pub fn generic_error() -> serde_json::Value {
    serde_json::json!({"message": "Generic API error", "errorCode": "GENERIC_ERROR"})
}

pub fn record(json: serde_json::Value) -> SObject {
    match json {
        serde_json::Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

/// A mock org with a client that has already logged in.
///
/// The login request is cleared from the server's history, so request counts
/// start at zero.
pub struct TestOrg {
    pub server: MockServer,
    pub client: SalesforceRestClient,
}

impl TestOrg {
    pub async fn start() -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let client = SalesforceRestClient::connect(server.uri(), API_VERSION, credentials())
            .expect("client should build");

        Mock::given(any())
            .respond_with(login_success(&server))
            .mount(&server)
            .await;
        client.session().login().await.expect("login should succeed");
        assert_eq!(
            Self::count(&server).await,
            1,
            "expected single request (login)"
        );
        server.reset().await;

        Self { server, client }
    }

    /// Answer every request with `template`, forgetting earlier requests.
    pub async fn respond_with(&self, template: ResponseTemplate) {
        self.server.reset().await;
        Mock::given(any())
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    pub async fn request_count(&self) -> usize {
        Self::count(&self.server).await
    }

    async fn count(server: &MockServer) -> usize {
        server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

/// Assert the shape every resource request shares: method, path, bearer
/// token, JSON content type, no query string, and the expected body.
pub fn assert_resource_request(
    request: &Request,
    method: &str,
    path: &str,
    body: Option<&serde_json::Value>,
    msg: &str,
) {
    assert_eq!(request.method.as_str(), method, "{msg}");
    assert_eq!(request.url.path(), path, "{msg}");
    assert!(
        request.url.query().unwrap_or("").is_empty(),
        "{msg}: unexpected query {:?}",
        request.url.query()
    );
    assert_eq!(
        header(request, "authorization"),
        Some(format!("Bearer {ACCESS_TOKEN}")),
        "{msg}"
    );
    assert_eq!(
        header(request, "content-type"),
        Some("application/json".to_string()),
        "{msg}"
    );

    match body {
        Some(expected) => {
            let actual: serde_json::Value =
                serde_json::from_slice(&request.body).expect("request body should be JSON");
            assert_eq!(&actual, expected, "{msg}");
        }
        None => assert!(request.body.is_empty(), "{msg}: expected empty body"),
    }
}

fn header(request: &Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
