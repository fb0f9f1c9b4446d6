use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use pagebrief::{
    api,
    app_state::AppState,
    config::Config,
    llm::{GenerateError, Generator},
};

/// Generator that always answers with a fixed reply.
pub struct StubGenerator {
    pub reply: String,
}

#[async_trait]
impl Generator for StubGenerator {
    async fn generate(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, GenerateError> {
        Ok(self.reply.clone())
    }
}

/// Generator that always fails with a service error.
pub struct FailingGenerator;

#[async_trait]
impl Generator for FailingGenerator {
    async fn generate(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, GenerateError> {
        Err(GenerateError::Api {
            status: 401,
            message: "Invalid API key".to_string(),
        })
    }
}

pub fn test_app(generator: Option<Arc<dyn Generator>>) -> Router {
    let config = Config::from_env().expect("Failed to load config");
    let state = AppState {
        config: Arc::new(config),
        generator,
    };
    api::router(state)
}

/// Mount `html` at `/article` on a fresh mock server; returns the server
/// (kept alive by the caller) and the page URL.
pub async fn serve_page(html: &str) -> (MockServer, String) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(html.as_bytes().to_vec(), "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;
    let url = format!("{}/article", server.uri());
    (server, url)
}

/// An article page that comfortably clears the locator's word threshold.
pub fn article_html() -> String {
    let sentence = "The committee reviewed the proposal in detail and suggested changes. ";
    format!(
        "<html><head><title>Committee Report</title></head><body>\
         <nav>Home | Archive</nav>\
         <article><h1>Committee Report</h1><p>{}</p>\
         <p>The final vote is scheduled for next week on Thursday.</p></article>\
         <footer>All rights reserved</footer></body></html>",
        sentence.repeat(12),
    )
}
