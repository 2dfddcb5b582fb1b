use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, info_span, Instrument};

use crate::config::credentials::redact_credentials;
use crate::errors::IdeafyError;
use crate::llm::LLMProvider;
use crate::models::IdeaSubmission;
use crate::prompts::{parse_json_reply, PromptTemplate};

/// Turns an idea into a report: render the prompt, call the model once,
/// fence-strip and parse the reply.
#[derive(Clone)]
pub struct ReportService {
    provider: Arc<dyn LLMProvider>,
    template: Arc<PromptTemplate>,
    secrets: Arc<Vec<String>>,
}

impl ReportService {
    pub fn new(provider: Arc<dyn LLMProvider>, template: PromptTemplate) -> Self {
        Self {
            provider,
            template: Arc::new(template),
            secrets: Arc::new(Vec::new()),
        }
    }

    /// Values scrubbed from failure details before they leave the service.
    pub fn with_secrets(mut self, secrets: Vec<String>) -> Self {
        self.secrets = Arc::new(secrets);
        self
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    pub fn render_prompt(&self, idea: &IdeaSubmission) -> String {
        self.template.render(idea)
    }

    /// Generate a report for one submission.
    ///
    /// Provider failures come back as [`IdeafyError::Upstream`]; replies that
    /// are not a JSON object after fence-stripping come back as
    /// [`IdeafyError::MalformedResponse`].
    pub async fn generate(&self, idea: &IdeaSubmission) -> Result<Value, IdeafyError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = info_span!("generate_report", %request_id, business = %idea.business_name);

        async {
            let prompt = self.render_prompt(idea);
            info!(
                provider = self.provider.provider_name(),
                model = self.provider.model_name(),
                prompt_chars = prompt.len(),
                "Requesting report from model"
            );

            let result = match self.provider.complete(&prompt, None).await {
                Ok(response) => {
                    info!(
                        reply_chars = response.content.len(),
                        input_tokens = ?response.input_tokens,
                        output_tokens = ?response.output_tokens,
                        "Model replied"
                    );
                    parse_json_reply(&response.content)
                }
                Err(e) => Err(e.into_upstream()),
            };

            result.map_err(|e| {
                let e = self.scrub(e);
                let class = e.classify();
                error!(kind = class.error_type, error = %e, "Failed to generate report");
                e
            })
        }
        .instrument(span)
        .await
    }

    fn scrub(&self, err: IdeafyError) -> IdeafyError {
        if self.secrets.is_empty() {
            return err;
        }
        let secrets: Vec<&str> = self.secrets.iter().map(String::as_str).collect();
        match err {
            IdeafyError::Upstream(m) => IdeafyError::Upstream(redact_credentials(&m, &secrets)),
            IdeafyError::MalformedResponse(m) => {
                IdeafyError::MalformedResponse(redact_credentials(&m, &secrets))
            }
            other => other,
        }
    }
}
