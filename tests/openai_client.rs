//! OpenAI-compatible provider against a local `wiremock` server.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ideafy::errors::IdeafyError;
use ideafy::llm::openai::OpenAIProvider;
use ideafy::llm::{LLMProvider, ProviderSettings};

fn provider_for(server: &MockServer) -> OpenAIProvider {
    let mut settings = ProviderSettings::new("test-key");
    settings.base_url = Some(server.uri());
    OpenAIProvider::new(&settings).expect("failed to build test provider")
}

#[tokio::test]
async fn test_complete_reads_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "{\"a\": 1}"}}],
            "usage": {"prompt_tokens": 50, "completion_tokens": 4}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = provider_for(&server).complete("Rate Acme", None).await.unwrap();
    assert_eq!(resp.content, "{\"a\": 1}");
    assert_eq!(resp.input_tokens, Some(50));
    assert_eq!(resp.model, "gpt-4o-mini");
}

#[tokio::test]
async fn test_complete_keeps_status_for_html_error_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = provider_for(&server).complete("Rate Acme", None).await.unwrap_err();
    assert!(matches!(err, IdeafyError::LLMApi(ref m) if m.contains("502")), "got {:?}", err);
}

#[tokio::test]
async fn test_complete_surfaces_api_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"message": "model not found"}
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server).complete("Rate Acme", None).await.unwrap_err();
    assert!(matches!(err, IdeafyError::LLMApi(ref m) if m == "model not found"), "got {:?}", err);
}
