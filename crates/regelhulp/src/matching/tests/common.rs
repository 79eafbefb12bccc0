use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::matching::catalog::{
    CatalogError, CatalogRepository, ProfileStore, ProfileStoreError,
};
use crate::matching::domain::{
    EmploymentStatus, HousingType, IncomeRange, QuestionnaireAnswers, Regeling, RegelingDetails,
    UserId,
};
use crate::matching::service::MatchingService;

/// Two-child single-parent household renting at 750/month on a low income.
pub(super) fn family_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        number_of_children: 2,
        children_ages: vec![1, 5],
        is_single_parent: true,
        income_range: IncomeRange::Low,
        employment_status: EmploymentStatus::Employed,
        housing_type: HousingType::Rent,
        monthly_rent: 750.0,
        postal_code: "3511 AB".to_string(),
        has_dutch_residence: true,
        has_health_insurance: true,
        has_debts: false,
        savings_under_limit: true,
    }
}

pub(super) fn regeling(id: &str, slug: &str, title: &str, eligible_for: &[&str]) -> Regeling {
    Regeling {
        id: id.to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
        eligible_for: eligible_for.iter().map(|key| key.to_string()).collect(),
        min_age: None,
        max_age: None,
        details: RegelingDetails {
            description: Some(format!("Landelijke regeling: {title}.")),
            short_description: Some(format!("{title} in het kort.")),
            category: Some("Toeslagen".to_string()),
            provider: Some("Belastingdienst".to_string()),
            estimated_amount: Some("Afhankelijk van inkomen".to_string()),
            required_documents: vec!["Inkomensverklaring".to_string()],
        },
        is_active: true,
    }
}

/// The six national programs from the family scenario, in catalog order.
pub(super) fn family_catalog() -> Vec<Regeling> {
    vec![
        regeling(
            "r-huur",
            "huurtoeslag",
            "Huurtoeslag",
            &["renter", "high_housing_costs", "unemployed", "no_income"],
        ),
        regeling(
            "r-zorg",
            "zorgtoeslag",
            "Zorgtoeslag",
            &["low_income", "unemployed"],
        ),
        regeling("r-kb", "kinderbijslag", "Kinderbijslag", &["parent"]),
        regeling(
            "r-kgb",
            "kindgebonden-budget",
            "Kindgebonden budget",
            &["parent", "unemployed", "no_income"],
        ),
        regeling(
            "r-aok",
            "alleenstaande-ouder-kop",
            "Alleenstaande-ouderkop",
            &["single_parent", "low_income"],
        ),
        regeling(
            "r-kot",
            "kinderopvangtoeslag",
            "Kinderopvangtoeslag",
            &["working_parent", "student_parent"],
        ),
    ]
}

#[derive(Clone)]
pub(super) struct MemoryCatalog {
    regelingen: Vec<Regeling>,
}

impl MemoryCatalog {
    pub(super) fn new(regelingen: Vec<Regeling>) -> Self {
        Self { regelingen }
    }
}

impl CatalogRepository for MemoryCatalog {
    fn active_regelingen(&self) -> Result<Vec<Regeling>, CatalogError> {
        Ok(self.regelingen.clone())
    }
}

pub(super) struct UnavailableCatalog;

impl CatalogRepository for UnavailableCatalog {
    fn active_regelingen(&self) -> Result<Vec<Regeling>, CatalogError> {
        Err(CatalogError::Unavailable("store offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryProfiles {
    saved: Arc<Mutex<Vec<(UserId, QuestionnaireAnswers, DateTime<Utc>)>>>,
}

impl MemoryProfiles {
    pub(super) fn saved(&self) -> Vec<(UserId, QuestionnaireAnswers, DateTime<Utc>)> {
        self.saved.lock().expect("profile mutex poisoned").clone()
    }
}

impl ProfileStore for MemoryProfiles {
    fn save_answers(
        &self,
        user: &UserId,
        answers: &QuestionnaireAnswers,
        submitted_at: DateTime<Utc>,
    ) -> Result<(), ProfileStoreError> {
        self.saved
            .lock()
            .expect("profile mutex poisoned")
            .push((user.clone(), answers.clone(), submitted_at));
        Ok(())
    }
}

pub(super) struct FailingProfiles;

impl ProfileStore for FailingProfiles {
    fn save_answers(
        &self,
        _user: &UserId,
        _answers: &QuestionnaireAnswers,
        _submitted_at: DateTime<Utc>,
    ) -> Result<(), ProfileStoreError> {
        Err(ProfileStoreError::Unavailable("profiles offline".to_string()))
    }
}

pub(super) fn build_service(
    catalog: Vec<Regeling>,
) -> (
    MatchingService<MemoryCatalog, MemoryProfiles>,
    Arc<MemoryProfiles>,
) {
    let profiles = Arc::new(MemoryProfiles::default());
    let service = MatchingService::new(Arc::new(MemoryCatalog::new(catalog)), profiles.clone());
    (service, profiles)
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
