//! Repetition endpoint

use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, RepeatRequest, RepeatResponse};

/// POST /v1/repetitions - Generate numbered copies of a sentence
pub async fn create_repetition(
    State(state): State<AppState>,
    Json(request): Json<RepeatRequest>,
) -> Result<Json<RepeatResponse>, ApiError> {
    let repetition = state
        .repeater_service
        .generate(&request.sentence, request.count)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(RepeatResponse::from(repetition)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_repetition_success() {
        let state = AppState::default();
        let request = RepeatRequest {
            sentence: "Hello, World!".to_string(),
            count: 3,
        };

        let response = create_repetition(State(state), Json(request))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(
            response.output_text,
            "1. Hello, World!\n2. Hello, World!\n3. Hello, World!"
        );
        assert_eq!(response.line_count, 3);
        assert_eq!(response.char_count, 50);
    }

    #[tokio::test]
    async fn test_create_repetition_rejects_blank_sentence() {
        let state = AppState::default();
        let request = RepeatRequest {
            sentence: "   ".to_string(),
            count: 3,
        };

        let err = create_repetition(State(state), Json(request))
            .await
            .unwrap_err();

        assert_eq!(
            err.response.error_kind,
            crate::api::types::ApiErrorKind::EmptySentence
        );
    }
}
