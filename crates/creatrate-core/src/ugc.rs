//! UGC creator scoring: questionnaire answers to an integer score, and the
//! score bands that turn that score into a price multiplier.

use serde::Deserialize;

/// Half-open score band `[lower, upper)` with its price multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBand {
    pub lower: u32,
    pub upper: u32,
    pub multiplier: f64,
}

impl ScoreBand {
    const fn new(lower: u32, upper: u32, multiplier: f64) -> Self {
        Self {
            lower,
            upper,
            multiplier,
        }
    }

    #[must_use]
    pub fn contains(&self, score: u32) -> bool {
        (self.lower..self.upper).contains(&score)
    }
}

pub const UGC_SCORE_BANDS: [ScoreBand; 5] = [
    ScoreBand::new(1, 5, 0.85),
    ScoreBand::new(5, 8, 1.0),
    ScoreBand::new(8, 11, 1.1),
    ScoreBand::new(11, 14, 1.2),
    ScoreBand::new(14, 100, 1.3),
];

/// Multiplier used when a score falls outside every band.
pub const FALLBACK_SCORE_MULTIPLIER: f64 = 1.0;

#[must_use]
pub fn ugc_score_multiplier(score: u32) -> f64 {
    UGC_SCORE_BANDS
        .iter()
        .find(|band| band.contains(score))
        .map_or(FALLBACK_SCORE_MULTIPLIER, |band| band.multiplier)
}

fn skill_level_points(answer: &str) -> u32 {
    match answer {
        "Beginner" => 1,
        "Intermediate" => 2,
        "Advanced" => 3,
        "Expert" => 4,
        _ => 0,
    }
}

fn editing_points(answer: &str) -> u32 {
    match answer {
        "Basic Editing" => 1,
        "Advanced Editing" => 2,
        // "No Editing" scores the same as an unknown answer.
        _ => 0,
    }
}

fn complexity_points(answer: &str) -> u32 {
    match answer {
        "Light" => 1,
        "Intermediate" => 2,
        "Heavy" => 3,
        _ => 0,
    }
}

fn content_type_points(answer: &str) -> u32 {
    match answer {
        "Talking Head" | "Voiceover Only" => 1,
        "Lifestyle / Demo" => 2,
        "Tutorial / How-To" => 3,
        "Unboxing / Review" => 4,
        _ => 0,
    }
}

fn equipment_points(answer: &str) -> u32 {
    match answer {
        "Smartphone" => 1,
        "Camera + Natural Light" => 2,
        "Camera + Lighting + Microphone" => 3,
        _ => 0,
    }
}

/// Sum the five questionnaire answers into a UGC score.
///
/// Answers are matched exactly; anything unrecognized contributes zero.
#[must_use]
pub fn score_ugc_questionnaire(
    skill_level: &str,
    editing: &str,
    complexity: &str,
    content_type: &str,
    equipment: &str,
) -> u32 {
    skill_level_points(skill_level)
        + editing_points(editing)
        + complexity_points(complexity)
        + content_type_points(content_type)
        + equipment_points(equipment)
}

/// Questionnaire answers as submitted. Missing answers are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuestionnaireAnswers {
    pub skill_level: String,
    pub editing: String,
    pub complexity: String,
    pub content_type: String,
    pub equipment: String,
}

impl QuestionnaireAnswers {
    #[must_use]
    pub fn score(&self) -> u32 {
        score_ugc_questionnaire(
            &self.skill_level,
            &self.editing,
            &self.complexity,
            &self.content_type,
            &self.equipment,
        )
    }
}
