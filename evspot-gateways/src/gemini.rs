use anyhow::Result as Fallible;
use evspot_core::gateways::content::{CarContentGateway, CarModel, GeneratedCarContent};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Car descriptions generated by Google Gemini.
#[derive(Debug, Clone)]
pub struct Gemini {
    api_key: String,
    model: String,
}

impl Gemini {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_owned());
        Self { api_key, model }
    }

    fn url(&self) -> String {
        format!(
            "{API_BASE_URL}/{model}:generateContent?key={key}",
            model = self.model,
            key = self.api_key
        )
    }
}

fn car_prompt(car: &CarModel) -> String {
    let CarModel { brand, model, year } = car;
    format!(
        "Car Brand: {brand}, Car Year: {year}, Car Model: {model}. \
         Answer with a JSON object with the fields \"batteryCapacity\" \
         (usable battery capacity in kWh as a number, null if unknown) and \
         \"description\" (a short description of the car for its owner)."
    )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CarContent {
    battery_capacity: Option<f64>,
    description: String,
}

#[derive(Debug, Deserialize, Error)]
#[error("{message}")]
struct ApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Debug, Error)]
enum ContentError {
    #[error("The response contains no text")]
    NoText,
    #[error("Unexpected content: {0}")]
    Content(#[from] serde_json::Error),
}

fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

fn content_from_response(res: GenerateResponse) -> Result<GeneratedCarContent, ContentError> {
    let text = res
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text)
        .ok_or(ContentError::NoText)?;
    let CarContent {
        battery_capacity,
        description,
    } = serde_json::from_str(strip_code_fence(&text))?;
    let battery_capacity_kwh = battery_capacity.filter(|kwh| kwh.is_finite() && *kwh > 0.0);
    Ok(GeneratedCarContent {
        battery_capacity_kwh,
        description: description.trim().to_owned(),
    })
}

impl CarContentGateway for Gemini {
    fn generate_car_content(&self, car: &CarModel) -> Fallible<GeneratedCarContent> {
        let prompt = car_prompt(car);
        let req = GenerateRequest {
            contents: [Content {
                parts: [Part { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };
        log::debug!("Generating content for {} {} {}", car.brand, car.model, car.year);
        let client = reqwest::blocking::Client::new();
        let response = client.post(self.url()).json(&req).send()?;
        if !response.status().is_success() {
            let status = response.status();
            let ApiErrorResponse { error } = response.json()?;
            log::warn!("Content generation failed with status {status}: {error}");
            return Err(error.into());
        }
        let content = content_from_response(response.json()?)?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<GeneratedCarContent, ContentError> {
        content_from_response(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn parse_generated_content() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{ "text": "{\"batteryCapacity\": 75, \"description\": \" A compact SUV. \"}" }],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }"#;
        let content = parse(json).unwrap();
        assert_eq!(Some(75.0), content.battery_capacity_kwh);
        assert_eq!("A compact SUV.", content.description);
    }

    #[test]
    fn parse_fenced_content_without_capacity() {
        let text = "```json\n{\"batteryCapacity\": null, \"description\": \"Unknown car\"}\n```";
        let json = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
        .to_string();
        let content = parse(&json).unwrap();
        assert_eq!(None, content.battery_capacity_kwh);
        assert_eq!("Unknown car", content.description);
    }

    #[test]
    fn no_candidates() {
        assert!(matches!(
            parse(r#"{ "candidates": [] }"#),
            Err(ContentError::NoText)
        ));
        assert!(matches!(parse("{}"), Err(ContentError::NoText)));
    }

    #[test]
    fn text_is_not_json() {
        let json = r#"{ "candidates": [{ "content": { "parts": [{ "text": "Sorry" }] } }] }"#;
        assert!(matches!(parse(json), Err(ContentError::Content(_))));
    }

    #[test]
    fn prompt_mentions_the_car() {
        let prompt = car_prompt(&CarModel {
            brand: "Nissan".into(),
            model: "Leaf".into(),
            year: 2019,
        });
        assert!(prompt.starts_with("Car Brand: Nissan, Car Year: 2019, Car Model: Leaf."));
    }

    #[test]
    fn request_body_layout() {
        let req = GenerateRequest {
            contents: [Content {
                parts: [Part { text: "hello" }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };
        assert_eq!(
            serde_json::json!({
                "contents": [{ "parts": [{ "text": "hello" }] }],
                "generationConfig": { "responseMimeType": "application/json" }
            }),
            serde_json::to_value(&req).unwrap()
        );
    }
}
