use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::{
    api::dtos::{
        ContentRequest, ErrorResponse, HighlightRequest, HighlightResponse, KeyPointsRequest,
        KeyPointsResponse, SummarizeRequest, SummarizeResponse, TranslateRequest,
        TranslateResponse,
    },
    app_state::AppState,
    engine::{self, PageContent, dom, highlighter},
    fetcher::{self, FetchedPage},
    llm::{GenerateError, Generator, prompts},
};

#[utoipa::path(
    post,
    path = "/v1/content",
    tag = "content",
    request_body = ContentRequest,
    responses(
        (status = 200, description = "Extracted page content", body = PageContent),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 422, description = "Page could not be fetched or holds no content", body = ErrorResponse)
    )
)]
pub async fn extract_content(
    State(_state): State<AppState>,
    Json(payload): Json<ContentRequest>,
) -> Response {
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    match load_page(&payload.url).await {
        Ok((_, content)) => (StatusCode::OK, Json(content)).into_response(),
        Err(response) => response,
    }
}

#[utoipa::path(
    post,
    path = "/v1/summarize",
    tag = "generate",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Page summary", body = SummarizeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 422, description = "Page could not be fetched or holds no content", body = ErrorResponse),
        (status = 502, description = "Generation service failed", body = ErrorResponse),
        (status = 503, description = "No API key configured", body = ErrorResponse)
    )
)]
pub async fn summarize(
    State(state): State<AppState>,
    Json(payload): Json<SummarizeRequest>,
) -> Response {
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    // Configuration errors surface before any fetch is attempted
    let generator = match require_generator(&state) {
        Ok(generator) => generator,
        Err(response) => return response,
    };

    let (_, content) = match load_page(&payload.url).await {
        Ok(loaded) => loaded,
        Err(response) => return response,
    };

    let length = payload.length.unwrap_or_default();
    let language = payload
        .language
        .unwrap_or_else(|| state.config.default_language().to_string());
    let prompt = prompts::summarize(&content.text, length, &language);

    match generator.generate(prompts::SYSTEM_PROMPT, &prompt).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(SummarizeResponse {
                title: content.title,
                url: content.url,
                summary,
            }),
        )
            .into_response(),
        Err(err) => generation_failed(err),
    }
}

#[utoipa::path(
    post,
    path = "/v1/translate",
    tag = "generate",
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Translated page text", body = TranslateResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 422, description = "Page could not be fetched or holds no content", body = ErrorResponse),
        (status = 502, description = "Generation service failed", body = ErrorResponse),
        (status = 503, description = "No API key configured", body = ErrorResponse)
    )
)]
pub async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Response {
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    let generator = match require_generator(&state) {
        Ok(generator) => generator,
        Err(response) => return response,
    };

    let (_, content) = match load_page(&payload.url).await {
        Ok(loaded) => loaded,
        Err(response) => return response,
    };

    let language = payload
        .language
        .unwrap_or_else(|| state.config.default_language().to_string());
    let prompt = prompts::translate(&content.text, &language);

    match generator.generate(prompts::SYSTEM_PROMPT, &prompt).await {
        Ok(translation) => (
            StatusCode::OK,
            Json(TranslateResponse {
                title: content.title,
                url: content.url,
                translation,
            }),
        )
            .into_response(),
        Err(err) => generation_failed(err),
    }
}

#[utoipa::path(
    post,
    path = "/v1/key-points",
    tag = "generate",
    request_body = KeyPointsRequest,
    responses(
        (status = 200, description = "Ranked key points", body = KeyPointsResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 422, description = "Page could not be fetched or holds no content", body = ErrorResponse),
        (status = 502, description = "Generation service failed", body = ErrorResponse),
        (status = 503, description = "No API key configured", body = ErrorResponse)
    )
)]
pub async fn key_points(
    State(state): State<AppState>,
    Json(payload): Json<KeyPointsRequest>,
) -> Response {
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    let generator = match require_generator(&state) {
        Ok(generator) => generator,
        Err(response) => return response,
    };

    let (_, content) = match load_page(&payload.url).await {
        Ok(loaded) => loaded,
        Err(response) => return response,
    };

    match generate_key_points(generator.as_ref(), &content).await {
        Ok((points, raw)) => (
            StatusCode::OK,
            Json(KeyPointsResponse {
                title: content.title,
                url: content.url,
                key_points: points,
                raw,
            }),
        )
            .into_response(),
        Err(err) => generation_failed(err),
    }
}

#[utoipa::path(
    post,
    path = "/v1/highlight",
    tag = "highlight",
    request_body = HighlightRequest,
    responses(
        (status = 200, description = "Annotated page markup", body = HighlightResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 422, description = "Page could not be fetched or holds no content", body = ErrorResponse),
        (status = 502, description = "Generation service failed", body = ErrorResponse),
        (status = 503, description = "No API key configured but sentences were not supplied", body = ErrorResponse)
    )
)]
pub async fn highlight(
    State(state): State<AppState>,
    Json(payload): Json<HighlightRequest>,
) -> Response {
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    let explicit = payload.sentences.filter(|sentences| !sentences.is_empty());

    // Only the generated-key-points flow needs a generator
    let generator = if explicit.is_none() {
        match require_generator(&state) {
            Ok(generator) => Some(generator),
            Err(response) => return response,
        }
    } else {
        None
    };

    let (page, content) = match load_page(&payload.url).await {
        Ok(loaded) => loaded,
        Err(response) => return response,
    };

    let sentences = match explicit {
        Some(sentences) => sentences,
        None => {
            // require_generator ran above, so the generator is present here
            let Some(generator) = generator else {
                return generation_failed(GenerateError::MalformedResponse(
                    "generator unavailable".to_string(),
                ));
            };
            match generate_key_points(generator.as_ref(), &content).await {
                Ok((points, _)) => points,
                Err(err) => return generation_failed(err),
            }
        }
    };

    let document = dom::parse_document(&page.html);
    let marks_placed = highlighter::highlight(&document, &sentences);
    let first_mark_id = highlighter::first_mark_id(&document);
    info!(marks_placed, url = %content.url, "highlight pass finished");

    (
        StatusCode::OK,
        Json(HighlightResponse {
            title: content.title,
            url: content.url,
            marks_placed,
            sentences,
            first_mark_id,
            html: dom::inner_html(&document),
        }),
    )
        .into_response()
}

/// Fetch a page and extract its readable content, mapping both fetch
/// failures and empty extractions to a 422 per the error taxonomy.
async fn load_page(url: &str) -> Result<(FetchedPage, PageContent), Response> {
    let page = match fetcher::fetch(url).await {
        Ok(page) => page,
        Err(err) => {
            error!(error = %err, url, "page fetch failed");
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: format!("Failed to fetch page: {err}"),
                }),
            )
                .into_response());
        }
    };

    let content = engine::extract(&page.html, page.url.as_str());
    if content.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "No readable content found on the page".to_string(),
            }),
        )
            .into_response());
    }

    Ok((page, content))
}

fn require_generator(state: &AppState) -> Result<Arc<dyn Generator>, Response> {
    state.generator.clone().ok_or_else(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "API key is not configured. Set LLM_API_KEY to enable generation."
                    .to_string(),
            }),
        )
            .into_response()
    })
}

async fn generate_key_points(
    generator: &dyn Generator,
    content: &PageContent,
) -> Result<(Vec<String>, String), GenerateError> {
    let prompt = prompts::key_points(&content.text);
    let raw = generator.generate(prompts::SYSTEM_PROMPT, &prompt).await?;
    Ok((prompts::parse_key_points(&raw), raw))
}

fn generation_failed(err: GenerateError) -> Response {
    error!(error = %err, "generation request failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}
