use axum::Json;
use creatrate_core::QuestionnaireAnswers;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(super) struct ScoreResponse {
    ugc_score: u32,
}

pub(super) async fn score_ugc_questionnaire(
    Json(answers): Json<QuestionnaireAnswers>,
) -> Json<ScoreResponse> {
    Json(ScoreResponse {
        ugc_score: answers.score(),
    })
}
