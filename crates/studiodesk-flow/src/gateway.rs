use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use studiodesk_llm::{ChatClient, ChatOptions, ChatRequest, Message, ResponseFormat};
use studiodesk_types::{ConversationTurn, Role};

use crate::error::GatewayError;
use crate::prompts::{trainer_analysis_prompt, CHAT_SYSTEM_PROMPT, TICKET_ANALYSIS_PROMPT};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub const MISSING_CREDENTIAL_TAG: &str = "pending-analysis";
pub const UPSTREAM_FAILURE_TAG: &str = "error";

const MISSING_CREDENTIAL_INSIGHT: &str =
    "AI analysis is not available. Please configure the OpenAI API key.";
const UPSTREAM_FAILURE_INSIGHT: &str = "Failed to analyze content. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.3,
            max_tokens: 500,
        }
    }
}

/// One prior turn forwarded to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: Role,
    pub content: String,
}

impl From<&ConversationTurn> for HistoryTurn {
    fn from(turn: &ConversationTurn) -> Self {
        Self {
            role: turn.role,
            content: turn.content.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisMode {
    /// One text in, one JSON object out
    Single,
    /// Prior turns plus the new message, free-text reply out
    Conversational { history: Vec<HistoryTurn> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub content: String,
    pub mode: AnalysisMode,
    pub instruction_prompt: Option<String>,
    pub subject_name: Option<String>,
}

impl AnalysisRequest {
    pub fn single(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            mode: AnalysisMode::Single,
            instruction_prompt: None,
            subject_name: None,
        }
    }

    pub fn conversational(content: impl Into<String>, history: Vec<HistoryTurn>) -> Self {
        Self {
            content: content.into(),
            mode: AnalysisMode::Conversational { history },
            instruction_prompt: None,
            subject_name: None,
        }
    }

    /// Single-mode request for a ticket form: the free-text feedback if given,
    /// otherwise title and description
    pub fn for_ticket(
        title: &str,
        description: &str,
        feedback: Option<&str>,
        trainer_name: Option<&str>,
    ) -> Self {
        let content = match feedback.map(str::trim).filter(|f| !f.is_empty()) {
            Some(feedback) => feedback.to_string(),
            None => format!("{}\n\n{}", title, description),
        };

        let mut request = Self::single(content);
        request.subject_name = trainer_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        request
    }

    pub fn with_instruction(mut self, prompt: impl Into<String>) -> Self {
        self.instruction_prompt = Some(prompt.into());
        self
    }

    pub fn with_subject(mut self, name: impl Into<String>) -> Self {
        self.subject_name = Some(name.into());
        self
    }

    fn system_prompt(&self) -> String {
        if let Some(prompt) = &self.instruction_prompt {
            return prompt.clone();
        }
        match (&self.mode, &self.subject_name) {
            (AnalysisMode::Conversational { .. }, _) => CHAT_SYSTEM_PROMPT.to_string(),
            (AnalysisMode::Single, Some(name)) => trainer_analysis_prompt(name),
            (AnalysisMode::Single, None) => TICKET_ANALYSIS_PROMPT.to_string(),
        }
    }
}

/// Parsed single-mode reply
///
/// Any JSON object is accepted; its keys are whatever the instruction prompt
/// asked for. The built-in prompts ask for `sentiment`, `score` and `tags`, read
/// through the accessors when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisObject(pub Map<String, Value>);

impl AnalysisObject {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn sentiment(&self) -> Option<&str> {
        self.0.get("sentiment").and_then(Value::as_str)
    }

    /// Numeric `score`, also accepted as a numeric string
    pub fn score(&self) -> Option<f64> {
        match self.0.get("score")? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn tags(&self) -> Vec<&str> {
        self.0
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradedReason {
    MissingCredential,
    UpstreamFailure,
}

/// Fixed neutral result returned instead of an error when the model is unreachable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradedAnalysis {
    #[serde(skip)]
    pub reason: Option<DegradedReason>,
    pub error: String,
    pub sentiment: String,
    pub score: f64,
    pub tags: Vec<String>,
    pub insights: String,
}

impl DegradedAnalysis {
    pub fn missing_credential() -> Self {
        Self::with_reason(
            DegradedReason::MissingCredential,
            "OpenAI API key not configured",
            MISSING_CREDENTIAL_TAG,
            MISSING_CREDENTIAL_INSIGHT,
        )
    }

    pub fn upstream_failure(error: impl Into<String>) -> Self {
        Self::with_reason(
            DegradedReason::UpstreamFailure,
            error,
            UPSTREAM_FAILURE_TAG,
            UPSTREAM_FAILURE_INSIGHT,
        )
    }

    fn with_reason(reason: DegradedReason, error: impl Into<String>, tag: &str, insights: &str) -> Self {
        Self {
            reason: Some(reason),
            error: error.into(),
            sentiment: "neutral".to_string(),
            score: 50.0,
            tags: vec![tag.to_string()],
            insights: insights.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Degraded(DegradedAnalysis),
    #[serde(rename_all = "camelCase")]
    Reply { chat_response: String },
    Analysis(AnalysisObject),
}

impl AnalysisResult {
    pub fn is_degraded(&self) -> bool {
        matches!(self, AnalysisResult::Degraded(_))
    }

    pub fn sentiment(&self) -> Option<&str> {
        match self {
            AnalysisResult::Degraded(d) => Some(&d.sentiment),
            AnalysisResult::Analysis(a) => a.sentiment(),
            AnalysisResult::Reply { .. } => None,
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            AnalysisResult::Degraded(d) => Some(d.score),
            AnalysisResult::Analysis(a) => a.score(),
            AnalysisResult::Reply { .. } => None,
        }
    }

    /// Reply text of a conversational call
    pub fn reply_text(&self) -> Option<&str> {
        match self {
            AnalysisResult::Reply { chat_response } => Some(chat_response),
            _ => None,
        }
    }
}

/// Stateless boundary to the hosted completion endpoint
///
/// Exactly one outbound call per [`Gateway::analyze`]. Upstream problems never
/// surface as errors; they come back as [`AnalysisResult::Degraded`].
pub struct Gateway {
    client: Option<Arc<dyn ChatClient>>,
    config: GatewayConfig,
}

impl Gateway {
    pub fn new(client: Arc<dyn ChatClient>, config: GatewayConfig) -> Self {
        Self {
            client: Some(client),
            config,
        }
    }

    /// Gateway without a credential; every call degrades
    pub fn unconfigured(config: GatewayConfig) -> Self {
        Self { client: None, config }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, GatewayError> {
        if request.content.trim().is_empty() {
            return Err(GatewayError::EmptyContent);
        }

        let Some(client) = &self.client else {
            tracing::warn!("OPENAI_API_KEY not configured, returning degraded analysis");
            return Ok(AnalysisResult::Degraded(DegradedAnalysis::missing_credential()));
        };

        let chat_request = self.build_request(&request);
        let single = matches!(request.mode, AnalysisMode::Single);

        tracing::debug!(
            model = %chat_request.model,
            messages = chat_request.messages.len(),
            single,
            "Calling completion endpoint"
        );

        let response = match client.chat(chat_request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Completion call failed");
                return Ok(AnalysisResult::Degraded(DegradedAnalysis::upstream_failure(
                    "AI analysis failed",
                )));
            }
        };

        let Some(content) = response.content.filter(|c| !c.trim().is_empty()) else {
            tracing::warn!("Completion reply had no content");
            return Ok(AnalysisResult::Degraded(DegradedAnalysis::upstream_failure(
                "Empty completion",
            )));
        };

        if !single {
            return Ok(AnalysisResult::Reply {
                chat_response: content,
            });
        }

        match serde_json::from_str::<AnalysisObject>(&content) {
            Ok(analysis) => {
                tracing::info!(
                    sentiment = ?analysis.sentiment(),
                    score = ?analysis.score(),
                    keys = analysis.0.len(),
                    "Analysis complete"
                );
                Ok(AnalysisResult::Analysis(analysis))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Completion reply was not a JSON object");
                Ok(AnalysisResult::Degraded(DegradedAnalysis::upstream_failure(
                    e.to_string(),
                )))
            }
        }
    }

    fn build_request(&self, request: &AnalysisRequest) -> ChatRequest {
        let mut messages = vec![Message::system(request.system_prompt())];

        let mut options = ChatOptions::new()
            .temperature(self.config.temperature)
            .max_tokens(self.config.max_tokens);

        match &request.mode {
            AnalysisMode::Single => {
                options = options.response_format(ResponseFormat::JsonObject);
            }
            AnalysisMode::Conversational { history } => {
                messages.extend(history.iter().map(|turn| match turn.role {
                    Role::User => Message::human(turn.content.as_str()),
                    Role::Assistant => Message::ai(turn.content.as_str()),
                }));
            }
        }
        messages.push(Message::human(request.content.as_str()));

        ChatRequest::new(self.config.model.clone(), messages).with_options(options)
    }
}
