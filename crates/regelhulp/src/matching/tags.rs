use super::domain::{EligibilityTag, EmploymentStatus, HousingType, IncomeRange, QuestionnaireAnswers};

/// Rent level above which housing costs are considered high.
const HIGH_RENT_THRESHOLD: f64 = 700.0;

const fn tag(key: &'static str, label: &'static str) -> EligibilityTag {
    EligibilityTag { key, label }
}

// `low_income`/`long_term_low_income` and `single_mom`/`single_parent` are
// key pairs sharing one label, inherited from two merged legacy rule sets.
// Catalog entries may reference either key, so both must keep firing; labels
// are deduplicated later at the reason stage.
pub(crate) const LOW_INCOME: EligibilityTag = tag("low_income", "Laag inkomen");
pub(crate) const LONG_TERM_LOW_INCOME: EligibilityTag = tag("long_term_low_income", "Laag inkomen");
pub(crate) const PARENT: EligibilityTag = tag("parent", "Ouder met kinderen");
pub(crate) const SINGLE_MOM: EligibilityTag = tag("single_mom", "Alleenstaande ouder");
pub(crate) const SINGLE_PARENT: EligibilityTag = tag("single_parent", "Alleenstaande ouder");
pub(crate) const WORKING_PARENT: EligibilityTag = tag("working_parent", "Werkende ouder");
pub(crate) const STUDENT_PARENT: EligibilityTag = tag("student_parent", "Studerende ouder");
pub(crate) const UNEMPLOYED: EligibilityTag = tag("unemployed", "Werkloos");
pub(crate) const NO_INCOME: EligibilityTag = tag("no_income", "Geen inkomen");
pub(crate) const RENTER: EligibilityTag = tag("renter", "Huurder");
pub(crate) const HIGH_HOUSING_COSTS: EligibilityTag = tag("high_housing_costs", "Hoge woonlasten");
pub(crate) const DEBT: EligibilityTag = tag("debt", "Schulden");
pub(crate) const FINANCIAL_HARDSHIP: EligibilityTag = tag("financial_hardship", "Financiële problemen");

/// Derive the normalized eligibility tags for a questionnaire submission.
///
/// Pure and infallible: every rule is independently additive, fires at most
/// once, and unset answers simply produce fewer tags. The returned order is
/// the fixed rule order, which downstream reason lists rely on.
pub fn derive_tags(answers: &QuestionnaireAnswers) -> Vec<EligibilityTag> {
    let mut tags = Vec::new();
    let has_children = answers.number_of_children > 0;

    if answers.income_range == IncomeRange::Low {
        tags.push(LOW_INCOME);
        tags.push(LONG_TERM_LOW_INCOME);
    }

    if has_children {
        tags.push(PARENT);
    }

    if answers.is_single_parent && has_children {
        tags.push(SINGLE_MOM);
        tags.push(SINGLE_PARENT);
    }

    if answers.employment_status == EmploymentStatus::Employed && has_children {
        tags.push(WORKING_PARENT);
    }

    if answers.employment_status == EmploymentStatus::Student && has_children {
        tags.push(STUDENT_PARENT);
    }

    if answers.employment_status == EmploymentStatus::Unemployed {
        tags.push(UNEMPLOYED);
        tags.push(NO_INCOME);
    }

    if answers.housing_type == HousingType::Rent {
        tags.push(RENTER);
        if answers.monthly_rent > HIGH_RENT_THRESHOLD {
            tags.push(HIGH_HOUSING_COSTS);
        }
    }

    if answers.has_debts {
        tags.push(DEBT);
        tags.push(FINANCIAL_HARDSHIP);
    }

    tags
}
