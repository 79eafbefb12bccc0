use super::super::domain::{EmploymentStatus, HousingType, IncomeRange, QuestionnaireAnswers};

/// Rent ceiling for the housing allowance bonus.
const MAX_SUBSIDIZED_RENT: f64 = 880.0;
/// Childcare allowance applies to children younger than this age.
const CHILDCARE_AGE_LIMIT: u32 = 4;

/// One program-specific scoring bonus, keyed by the regeling's stable slug.
///
/// Unknown slugs simply match no rule; that is the extension point for new
/// catalog entries, not an error.
pub(crate) struct BonusRule {
    pub slug: &'static str,
    pub points: f64,
    pub applies: fn(&QuestionnaireAnswers) -> bool,
    pub reason: Option<fn(&QuestionnaireAnswers) -> String>,
}

/// The closed set of program bonuses. A slug may appear more than once; each
/// entry is evaluated independently.
pub(crate) const BONUS_RULES: &[BonusRule] = &[
    BonusRule {
        slug: "huurtoeslag",
        points: 20.0,
        applies: rent_under_subsidy_cap,
        reason: Some(reason_rent_under_max),
    },
    BonusRule {
        slug: "huurtoeslag",
        points: 10.0,
        applies: low_income_resident,
        reason: None,
    },
    BonusRule {
        slug: "zorgtoeslag",
        points: 20.0,
        applies: insured_with_low_income,
        reason: Some(reason_health_insurance),
    },
    BonusRule {
        slug: "kinderbijslag",
        points: 30.0,
        applies: has_children,
        reason: Some(reason_child_count),
    },
    BonusRule {
        slug: "kindgebonden-budget",
        points: 25.0,
        applies: children_with_low_income,
        reason: None,
    },
    BonusRule {
        slug: "alleenstaande-ouder-kop",
        points: 30.0,
        applies: single_parent_household,
        reason: None,
    },
    BonusRule {
        slug: "kinderopvangtoeslag",
        points: 25.0,
        applies: young_child_while_working_or_studying,
        reason: Some(reason_young_children),
    },
    BonusRule {
        slug: "bijstandsuitkering",
        points: 20.0,
        applies: unemployed_under_savings_limit,
        reason: Some(reason_savings_limit),
    },
    BonusRule {
        slug: "schuldhulpverlening",
        points: 40.0,
        applies: has_debts,
        reason: None,
    },
];

fn rent_under_subsidy_cap(answers: &QuestionnaireAnswers) -> bool {
    answers.housing_type == HousingType::Rent && answers.monthly_rent <= MAX_SUBSIDIZED_RENT
}

fn low_income_resident(answers: &QuestionnaireAnswers) -> bool {
    answers.income_range == IncomeRange::Low && answers.has_dutch_residence
}

fn insured_with_low_income(answers: &QuestionnaireAnswers) -> bool {
    answers.has_health_insurance && answers.income_range == IncomeRange::Low
}

fn has_children(answers: &QuestionnaireAnswers) -> bool {
    answers.number_of_children > 0
}

fn children_with_low_income(answers: &QuestionnaireAnswers) -> bool {
    answers.number_of_children > 0 && answers.income_range == IncomeRange::Low
}

fn single_parent_household(answers: &QuestionnaireAnswers) -> bool {
    answers.is_single_parent && answers.number_of_children > 0
}

fn young_child_while_working_or_studying(answers: &QuestionnaireAnswers) -> bool {
    let working_or_studying = matches!(
        answers.employment_status,
        EmploymentStatus::Employed | EmploymentStatus::Student
    );
    working_or_studying
        && answers
            .children_ages
            .iter()
            .any(|age| *age < CHILDCARE_AGE_LIMIT)
}

fn unemployed_under_savings_limit(answers: &QuestionnaireAnswers) -> bool {
    answers.employment_status == EmploymentStatus::Unemployed && answers.savings_under_limit
}

fn has_debts(answers: &QuestionnaireAnswers) -> bool {
    answers.has_debts
}

fn reason_rent_under_max(_: &QuestionnaireAnswers) -> String {
    "Huur onder maximum".to_string()
}

fn reason_health_insurance(_: &QuestionnaireAnswers) -> String {
    "Zorgverzekering".to_string()
}

fn reason_child_count(answers: &QuestionnaireAnswers) -> String {
    if answers.number_of_children == 1 {
        "1 kind".to_string()
    } else {
        format!("{} kinderen", answers.number_of_children)
    }
}

fn reason_young_children(_: &QuestionnaireAnswers) -> String {
    "Kind(eren) onder 4 jaar".to_string()
}

fn reason_savings_limit(_: &QuestionnaireAnswers) -> String {
    "Onder vermogensgrens".to_string()
}
