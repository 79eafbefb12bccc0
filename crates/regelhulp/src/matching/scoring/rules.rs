use super::super::domain::{EligibilityTag, QuestionnaireAnswers, Regeling};
use super::bonus::BONUS_RULES;

/// Score and reason trail for a single regeling, before the cutoff filter.
pub(crate) struct ScoreBreakdown {
    pub score: u8,
    pub reasons: Vec<String>,
}

/// Every addition and subtraction is clamped immediately; intermediate values
/// never leave [0, 100].
fn clamp(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Compute one program's score as a pure accumulation over the rule set.
///
/// No state is shared across program evaluations; two calls with identical
/// inputs produce identical breakdowns.
pub(crate) fn score_regeling(
    regeling: &Regeling,
    tags: &[EligibilityTag],
    answers: &QuestionnaireAnswers,
) -> ScoreBreakdown {
    let matched: Vec<&EligibilityTag> = tags
        .iter()
        .filter(|tag| regeling.eligible_for.iter().any(|key| key == tag.key))
        .collect();

    let mut score = if regeling.eligible_for.is_empty() {
        0.0
    } else {
        clamp(matched.len() as f64 / regeling.eligible_for.len() as f64 * 100.0)
    };

    if matched.len() >= 3 {
        score = clamp(score + 15.0);
    } else if matched.len() >= 2 {
        score = clamp(score + 10.0);
    }

    let mut reasons: Vec<String> = matched.iter().map(|tag| tag.label.to_string()).collect();

    for rule in BONUS_RULES.iter().filter(|rule| rule.slug == regeling.slug) {
        if (rule.applies)(answers) {
            score = clamp(score + rule.points);
            if let Some(reason) = rule.reason {
                reasons.push(reason(answers));
            }
        }
    }

    // Residence adjustment applies to every program, after all bonuses.
    score = if answers.has_dutch_residence {
        clamp(score + 5.0)
    } else {
        clamp(score - 30.0)
    };

    dedup_preserving_order(&mut reasons);

    ScoreBreakdown {
        score: score.round() as u8,
        reasons,
    }
}

/// Drop repeated reason labels, keeping the first occurrence. Distinct tag keys
/// may carry the same label, so this is the only place duplicates collapse.
fn dedup_preserving_order(reasons: &mut Vec<String>) {
    let mut seen: Vec<String> = Vec::with_capacity(reasons.len());
    reasons.retain(|reason| {
        if seen.iter().any(|existing| existing == reason) {
            false
        } else {
            seen.push(reason.clone());
            true
        }
    });
}
