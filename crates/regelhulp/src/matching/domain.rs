use serde::{Deserialize, Serialize};

/// Identifier wrapper for authenticated callers supplied by the upstream auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Self-reported household situation collected by the questionnaire.
///
/// Every field is optional on the wire; absent or unrecognized values degrade to
/// the unset variant so a partially filled questionnaire still scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireAnswers {
    pub number_of_children: u32,
    /// Ages are not validated against `number_of_children`; mismatched lengths
    /// are tolerated and scored as-is.
    pub children_ages: Vec<u32>,
    pub is_single_parent: bool,
    #[serde(deserialize_with = "lenient_income_range")]
    pub income_range: IncomeRange,
    #[serde(deserialize_with = "lenient_employment_status")]
    pub employment_status: EmploymentStatus,
    #[serde(deserialize_with = "lenient_housing_type")]
    pub housing_type: HousingType,
    pub monthly_rent: f64,
    /// Informational only; never used in scoring.
    pub postal_code: String,
    pub has_dutch_residence: bool,
    pub has_health_insurance: bool,
    pub has_debts: bool,
    pub savings_under_limit: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeRange {
    Low,
    Middle,
    High,
    #[default]
    Unspecified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Employed,
    Unemployed,
    SelfEmployed,
    Student,
    #[default]
    Unspecified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingType {
    Rent,
    Own,
    #[default]
    Unspecified,
}

// Unknown or missing enum strings mean "no match for that rule", never a
// rejected questionnaire, so the wire decoders fall back to the unset variant
// instead of raising.

fn lenient_income_range<'de, D>(deserializer: D) -> Result<IncomeRange, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("low") => IncomeRange::Low,
        Some("middle") => IncomeRange::Middle,
        Some("high") => IncomeRange::High,
        _ => IncomeRange::Unspecified,
    })
}

fn lenient_employment_status<'de, D>(deserializer: D) -> Result<EmploymentStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("employed") => EmploymentStatus::Employed,
        Some("unemployed") => EmploymentStatus::Unemployed,
        Some("self_employed") => EmploymentStatus::SelfEmployed,
        Some("student") => EmploymentStatus::Student,
        _ => EmploymentStatus::Unspecified,
    })
}

fn lenient_housing_type<'de, D>(deserializer: D) -> Result<HousingType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("rent") => HousingType::Rent,
        Some("own") => HousingType::Own,
        _ => HousingType::Unspecified,
    })
}

/// One normalized fact about the applicant's situation.
///
/// The key is the stable machine identifier matched against a regeling's
/// `eligible_for` set; the label is the display string shown in match reasons.
/// Distinct keys may share a label (legacy rule sets were merged); dedup happens
/// at the reason-label stage, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EligibilityTag {
    pub key: &'static str,
    pub label: &'static str,
}

/// Catalog entry for a government benefit program, owned by the external store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regeling {
    pub id: String,
    /// Stable key driving program-specific bonus rules.
    pub slug: String,
    pub title: String,
    /// Tag keys that qualify a household for this program.
    #[serde(default)]
    pub eligible_for: Vec<String>,
    #[serde(default)]
    pub min_age: Option<u32>,
    #[serde(default)]
    pub max_age: Option<u32>,
    #[serde(default)]
    pub details: RegelingDetails,
    pub is_active: bool,
}

/// Display block carried by a catalog entry. Fields are optional because the
/// external store does not enforce them; the scorer substitutes safe defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegelingDetails {
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub category: Option<String>,
    pub provider: Option<String>,
    pub estimated_amount: Option<String>,
    pub required_documents: Vec<String>,
}

/// Scored match for a single regeling. Ephemeral; the caller decides whether to
/// persist it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: String,
    pub provider: String,
    pub estimated_amount: String,
    pub short_description: String,
    /// Always an integer in [0, 100].
    pub match_score: u8,
    /// Unique labels in first-occurrence order.
    pub match_reasons: Vec<String>,
}

/// Response envelope returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub matches: Vec<MatchResult>,
    pub total_found: usize,
    /// Derived tag keys (not labels), in derivation order.
    pub user_tags: Vec<String>,
}
