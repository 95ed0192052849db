//! Example catalog endpoint
//!
//! Read-only suggestions; selecting one never feeds back into the
//! generator, clients copy the text into their own request.

use crate::api::types::{ExamplesResponse, Json};
use crate::domain::{EXAMPLE_SENTENCES, USAGE_TIPS};

/// GET /v1/examples - List example sentences and usage tips
pub async fn list_examples() -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        examples: EXAMPLE_SENTENCES.clone(),
        tips: USAGE_TIPS.iter().map(|tip| tip.to_string()).collect(),
    })
}
