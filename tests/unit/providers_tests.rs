/*!
 * Tests for provider request builders and the mock provider
 */

use doctrans::providers::Provider;
use doctrans::providers::gemini::GeminiRequest;
use doctrans::providers::ollama::GenerationRequest;
use doctrans::providers::anthropic::AnthropicRequest;
use doctrans::providers::mock::{MockProvider, MockRequest};

/// Test Gemini request serialization shape
#[test]
fn test_geminiRequest_serialize_shouldMatchWireFormat() {
    let request = GeminiRequest::new("gemini-1.5-flash", "Translate this").temperature(0.5);
    let value = serde_json::to_value(&request).unwrap();

    // The model travels in the URL, not in the body
    assert!(value.get("model").is_none());
    assert_eq!(
        value["contents"][0]["parts"][0]["text"],
        "Translate this"
    );
    assert_eq!(value["contents"][0]["role"], "user");
    assert_eq!(value["generationConfig"]["temperature"], 0.5);
    assert_eq!(request.model(), "gemini-1.5-flash");
}

/// Test Ollama generation request serialization shape
#[test]
fn test_generationRequest_serialize_shouldIncludeSystemAndOptions() {
    let request = GenerationRequest::new("llama3.2:3b", "some text")
        .system("translate it")
        .temperature(0.5)
        .no_stream();
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["model"], "llama3.2:3b");
    assert_eq!(value["prompt"], "some text");
    assert_eq!(value["system"], "translate it");
    assert_eq!(value["options"]["temperature"], 0.5);
    assert_eq!(value["stream"], false);
}

/// Test Anthropic request serialization shape
#[test]
fn test_anthropicRequest_serialize_shouldIncludeMessagesAndSystem() {
    let request = AnthropicRequest::new("claude-3-haiku-20240307", 4096)
        .system("translate it")
        .add_message("user", "some text")
        .temperature(0.5);
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["model"], "claude-3-haiku-20240307");
    assert_eq!(value["max_tokens"], 4096);
    assert_eq!(value["system"], "translate it");
    assert_eq!(value["messages"][0]["role"], "user");
    assert_eq!(value["messages"][0]["content"], "some text");
}

/// Test that optional fields are omitted when unset
#[test]
fn test_requestBuilders_withoutOptions_shouldOmitOptionalFields() {
    let gemini = serde_json::to_value(GeminiRequest::new("m", "p")).unwrap();
    assert!(gemini.get("generationConfig").is_none());

    let ollama = serde_json::to_value(GenerationRequest::new("m", "p")).unwrap();
    assert!(ollama.get("system").is_none());
    assert!(ollama.get("options").is_none());

    let anthropic = serde_json::to_value(AnthropicRequest::new("m", 16)).unwrap();
    assert!(anthropic.get("system").is_none());
    assert!(anthropic.get("temperature").is_none());
}

/// Test the mock provider through the Provider trait
#[tokio::test]
async fn test_mockProvider_throughProviderTrait_shouldTranslateAndExtract() {
    let provider = MockProvider::working();
    let request = MockRequest {
        text: "Hello".to_string(),
        source_language: "en".to_string(),
        target_language: "pt".to_string(),
    };

    let response = provider.complete(request).await.unwrap();
    let text = MockProvider::extract_text(&response);

    assert!(text.contains("Hello"));
    assert!(text.contains("pt"));
}

/// Test connection probing on the mock provider
#[tokio::test]
async fn test_mockProvider_testConnection_shouldReflectBehavior() {
    assert!(MockProvider::working().test_connection().await.is_ok());
    assert!(MockProvider::failing().test_connection().await.is_err());
}

/// Test that the mock counts requests across clones
#[tokio::test]
async fn test_mockProvider_requestCount_shouldAccumulate() {
    let provider = MockProvider::working();
    let request = MockRequest {
        text: "x".to_string(),
        source_language: "en".to_string(),
        target_language: "pt".to_string(),
    };

    provider.complete(request.clone()).await.unwrap();
    provider.complete(request).await.unwrap();

    assert_eq!(provider.request_count(), 2);
}
