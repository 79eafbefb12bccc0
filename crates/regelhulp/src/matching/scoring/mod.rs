mod bonus;
mod rules;

use tracing::warn;

use super::domain::{EligibilityTag, MatchResult, QuestionnaireAnswers, Regeling};

/// Matches scoring below this threshold are dropped from the report.
pub const MIN_MATCH_SCORE: u8 = 30;

/// Character budget for the short-description fallback.
const SHORT_DESCRIPTION_CHARS: usize = 120;

/// Score the catalog against a derived tag set and the raw answers.
///
/// Inactive programs are skipped even when the caller forgot to pre-filter.
/// The result is filtered to [`MIN_MATCH_SCORE`] and sorted by descending
/// score; equal scores keep their relative catalog order (the sort is stable).
pub fn score_matches(
    programs: &[Regeling],
    tags: &[EligibilityTag],
    answers: &QuestionnaireAnswers,
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = programs
        .iter()
        .filter(|regeling| regeling.is_active)
        .map(|regeling| {
            let breakdown = rules::score_regeling(regeling, tags, answers);
            assemble_result(regeling, breakdown.score, breakdown.reasons)
        })
        .filter(|result| result.match_score >= MIN_MATCH_SCORE)
        .collect();

    results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    results
}

/// Build the display-facing result, substituting empty strings for display
/// fields the catalog store failed to provide. One malformed entry must never
/// abort the scoring pass.
fn assemble_result(regeling: &Regeling, score: u8, reasons: Vec<String>) -> MatchResult {
    let details = &regeling.details;

    if details.category.is_none() || details.provider.is_none() {
        warn!(
            slug = %regeling.slug,
            "catalog entry missing display fields; substituting defaults"
        );
    }

    MatchResult {
        id: regeling.id.clone(),
        slug: regeling.slug.clone(),
        title: regeling.title.clone(),
        category: details.category.clone().unwrap_or_default(),
        provider: details.provider.clone().unwrap_or_default(),
        estimated_amount: details.estimated_amount.clone().unwrap_or_default(),
        short_description: short_description(regeling),
        match_score: score,
        match_reasons: reasons,
    }
}

fn short_description(regeling: &Regeling) -> String {
    if let Some(short) = &regeling.details.short_description {
        return short.clone();
    }

    match &regeling.details.description {
        Some(description) => {
            let truncated: String = description.chars().take(SHORT_DESCRIPTION_CHARS).collect();
            format!("{truncated}...")
        }
        None => String::new(),
    }
}
