//! Question generation through the Gemini `generateContent` API.
//!
//! The model is asked for a JSON array in the `Question` wire format. The
//! level being loaded decides the category of every item, whatever the model
//! put in its `type` field.

use async_trait::async_trait;
use quiz_core::{ContentUnavailable, QuestionSource};
use quiz_types::{GameType, Question};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::GeminiConfig;

const SYSTEM_PROMPT: &str = "Je bent een vrolijke carnavalsvierder en een expert in het maken van educatieve vragen voor kinderen in groep 8 (11-12 jaar oud).
Je maakt vragen in het thema Carnaval (Brabants/Limburgs).

Voor 'math' (rekenen): Focus op breuken, procenten, hoofdrekenen en verhaaltjessommen.
Voor 'language' (taal): Focus op spelling, spreekwoorden en grammatica.
Voor 'typing' (typen): Genereer een lijst met 10 uitdagende carnavalswoorden.
Voor 'hangman' (galgje): Genereer 5 unieke carnavalswoorden van minimaal 6 letters.
Voor 'quiz' (algemene kennis): Focus op tradities, de Raad van Elf, de Prins, de 11e van de 11e, en de betekenis van carnavalskleuren en symbolen.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(String::from),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One item of the generated array. The `type` tag is not read.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedQuestion {
    id: String,
    question: String,
    #[serde(default)]
    options: Vec<String>,
    correct_answer: String,
    #[serde(default)]
    explanation: String,
}

impl GeneratedQuestion {
    fn into_question(self, category: GameType) -> Question {
        Question {
            id: self.id,
            category,
            prompt: self.question,
            options: self.options,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
        }
    }
}

/// Schema the generated JSON must follow; mirrors the `Question` wire names
pub fn question_schema() -> serde_json::Value {
    let categories = GameType::ALL.map(|category| category.as_str());
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "type": {
                    "type": "STRING",
                    "enum": categories
                },
                "question": { "type": "STRING" },
                "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                "correctAnswer": { "type": "STRING" },
                "explanation": { "type": "STRING" }
            },
            "required": ["id", "type", "question", "options", "correctAnswer", "explanation"]
        }
    })
}

pub fn build_request(category: GameType) -> GenerateContentRequest {
    let prompt = format!(
        "Genereer {} unieke items voor de categorie {} voor groep 8 in het thema Carnaval.",
        category.question_count(),
        category
    );

    GenerateContentRequest {
        system_instruction: Content::text(None, SYSTEM_PROMPT),
        contents: vec![Content::text(Some("user"), prompt)],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: question_schema(),
        },
    }
}

/// Extract the generated questions for `category` from a `generateContent` response body
pub fn parse_response(
    response: GenerateContentResponse,
    category: GameType,
) -> Result<Vec<Question>, ContentUnavailable> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ContentUnavailable::EmptyResponse);
    }

    let generated: Vec<GeneratedQuestion> =
        serde_json::from_str(&text).map_err(|e| ContentUnavailable::Unparseable(e.to_string()))?;

    Ok(generated
        .into_iter()
        .map(|item| item.into_question(category))
        .collect())
}

pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_url, self.config.model
        )
    }
}

#[async_trait]
impl QuestionSource for GeminiClient {
    async fn fetch_questions(&self, category: GameType) -> Result<Vec<Question>, ContentUnavailable> {
        let url = self.endpoint();
        tracing::debug!("Requesting {} questions from {}", category, url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&build_request(category))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Failed to reach question generator: {:?}", e);
                ContentUnavailable::Transport(e.to_string())
            })?;

        if !response.status().is_success() {
            tracing::warn!("Question generator returned status: {}", response.status());
            return Err(ContentUnavailable::Status {
                status: response.status().as_u16(),
            });
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse generator response JSON: {:?}", e);
            ContentUnavailable::Unparseable(e.to_string())
        })?;

        let questions = parse_response(body, category)?;
        tracing::debug!("Received {} {} questions", questions.len(), category);
        Ok(questions)
    }
}
