use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use regelhulp::matching::{
    CatalogError, CatalogRepository, ProfileStore, ProfileStoreError, QuestionnaireAnswers,
    Regeling, RegelingDetails, UserId,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog backed by the seeded national program list. Stands in for the
/// external structured-data store until that integration lands.
#[derive(Clone)]
pub(crate) struct InMemoryCatalog {
    regelingen: Arc<Vec<Regeling>>,
}

impl InMemoryCatalog {
    pub(crate) fn seeded() -> Self {
        Self {
            regelingen: Arc::new(national_regelingen()),
        }
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn active_regelingen(&self) -> Result<Vec<Regeling>, CatalogError> {
        Ok(self
            .regelingen
            .iter()
            .filter(|regeling| regeling.is_active)
            .cloned()
            .collect())
    }
}

/// Profile snapshot held for an identified caller, shaped for export to the
/// external profile store as JSON.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct StoredProfile {
    pub(crate) answers: QuestionnaireAnswers,
    pub(crate) saved_at: DateTime<Utc>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileStore {
    profiles: Arc<Mutex<HashMap<UserId, StoredProfile>>>,
}

impl InMemoryProfileStore {
    #[cfg(test)]
    pub(crate) fn profile(&self, user: &UserId) -> Option<StoredProfile> {
        self.profiles
            .lock()
            .expect("profile mutex poisoned")
            .get(user)
            .cloned()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn save_answers(
        &self,
        user: &UserId,
        answers: &QuestionnaireAnswers,
        submitted_at: DateTime<Utc>,
    ) -> Result<(), ProfileStoreError> {
        let mut guard = self.profiles.lock().expect("profile mutex poisoned");
        guard.insert(
            user.clone(),
            StoredProfile {
                answers: answers.clone(),
                saved_at: submitted_at,
            },
        );
        Ok(())
    }
}

fn entry(
    id: &str,
    slug: &str,
    title: &str,
    eligible_for: &[&str],
    category: &str,
    provider: &str,
    estimated_amount: &str,
    description: &str,
    documents: &[&str],
) -> Regeling {
    Regeling {
        id: id.to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
        eligible_for: eligible_for.iter().map(|key| key.to_string()).collect(),
        min_age: None,
        max_age: None,
        details: RegelingDetails {
            description: Some(description.to_string()),
            short_description: None,
            category: Some(category.to_string()),
            provider: Some(provider.to_string()),
            estimated_amount: Some(estimated_amount.to_string()),
            required_documents: documents.iter().map(|doc| doc.to_string()).collect(),
        },
        is_active: true,
    }
}

/// The national programs known to the seeded catalog, one per bonus slug.
pub(crate) fn national_regelingen() -> Vec<Regeling> {
    vec![
        entry(
            "reg-001",
            "huurtoeslag",
            "Huurtoeslag",
            &["renter", "high_housing_costs", "low_income"],
            "Wonen",
            "Belastingdienst",
            "Tot €416 per maand",
            "Tegemoetkoming in de huurkosten voor huurders met een laag inkomen en een huur onder de huurtoeslaggrens.",
            &["Huurcontract", "Inkomensverklaring"],
        ),
        entry(
            "reg-002",
            "zorgtoeslag",
            "Zorgtoeslag",
            &["low_income", "long_term_low_income"],
            "Zorg",
            "Belastingdienst",
            "Tot €123 per maand",
            "Bijdrage in de kosten van de zorgverzekering voor verzekerden met een laag inkomen.",
            &["Polis zorgverzekering"],
        ),
        entry(
            "reg-003",
            "kinderbijslag",
            "Kinderbijslag",
            &["parent"],
            "Gezin",
            "SVB",
            "€279 per kwartaal per kind",
            "Bijdrage in de kosten van opvoeding en verzorging voor ouders van kinderen tot 18 jaar.",
            &["Geboorteakte"],
        ),
        entry(
            "reg-004",
            "kindgebonden-budget",
            "Kindgebonden budget",
            &["parent", "low_income", "single_parent"],
            "Gezin",
            "Belastingdienst",
            "Afhankelijk van inkomen",
            "Extra bijdrage bovenop de kinderbijslag voor gezinnen met een lager inkomen.",
            &["Inkomensverklaring"],
        ),
        entry(
            "reg-005",
            "alleenstaande-ouder-kop",
            "Alleenstaande-ouderkop",
            &["single_parent", "single_mom"],
            "Gezin",
            "Belastingdienst",
            "Tot €3.480 per jaar",
            "Verhoging van het kindgebonden budget voor ouders zonder toeslagpartner.",
            &["Inkomensverklaring"],
        ),
        entry(
            "reg-006",
            "kinderopvangtoeslag",
            "Kinderopvangtoeslag",
            &["working_parent", "student_parent"],
            "Gezin",
            "Belastingdienst",
            "Afhankelijk van opvanguren",
            "Tegemoetkoming in de kosten van geregistreerde kinderopvang voor werkende of studerende ouders.",
            &["Contract kinderopvang", "Jaaropgave"],
        ),
        entry(
            "reg-007",
            "bijstandsuitkering",
            "Bijstandsuitkering",
            &["unemployed", "no_income"],
            "Inkomen",
            "Gemeente",
            "Tot bijstandsnorm",
            "Inkomensondersteuning voor huishoudens zonder werk en zonder vermogen boven de vermogensgrens.",
            &["Identiteitsbewijs", "Bankafschriften"],
        ),
        entry(
            "reg-008",
            "schuldhulpverlening",
            "Schuldhulpverlening",
            &["debt", "financial_hardship"],
            "Schulden",
            "Gemeente",
            "Kosteloos traject",
            "Begeleiding en bemiddeling voor huishoudens met problematische schulden, aangeboden door de gemeente.",
            &["Schuldenoverzicht"],
        ),
    ]
}
