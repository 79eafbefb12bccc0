//! End-to-end checks for the matching workflow through the public facade and
//! HTTP router, without reaching into private modules.

mod common {
    use std::sync::{Arc, Mutex};

    use chrono::{DateTime, Utc};

    use regelhulp::matching::{
        CatalogError, CatalogRepository, EmploymentStatus, HousingType, IncomeRange,
        MatchingService, ProfileStore, ProfileStoreError, QuestionnaireAnswers, Regeling,
        RegelingDetails, UserId,
    };

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

    pub(super) fn national_catalog() -> Vec<Regeling> {
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
    pub(super) struct StaticCatalog {
        regelingen: Vec<Regeling>,
    }

    impl StaticCatalog {
        pub(super) fn new(regelingen: Vec<Regeling>) -> Self {
            Self { regelingen }
        }
    }

    impl CatalogRepository for StaticCatalog {
        fn active_regelingen(&self) -> Result<Vec<Regeling>, CatalogError> {
            Ok(self.regelingen.clone())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct RecordingProfiles {
        saved: Arc<Mutex<Vec<(UserId, QuestionnaireAnswers, DateTime<Utc>)>>>,
    }

    impl RecordingProfiles {
        pub(super) fn saved(&self) -> Vec<(UserId, QuestionnaireAnswers, DateTime<Utc>)> {
            self.saved.lock().expect("profile mutex poisoned").clone()
        }
    }

    impl ProfileStore for RecordingProfiles {
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

    pub(super) fn build_service() -> (
        MatchingService<StaticCatalog, RecordingProfiles>,
        Arc<RecordingProfiles>,
    ) {
        let profiles = Arc::new(RecordingProfiles::default());
        let service = MatchingService::new(
            Arc::new(StaticCatalog::new(national_catalog())),
            profiles.clone(),
        );
        (service, profiles)
    }
}

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{build_service, family_answers};
use regelhulp::matching::{matching_router, MatchReport, UserId};

#[test]
fn service_scores_the_family_scenario() {
    let (service, profiles) = build_service();
    let user = UserId("user-789".to_string());

    let report: MatchReport = service
        .evaluate(&family_answers(), Some(&user))
        .expect("catalog available");

    assert_eq!(report.total_found, 6);
    let slugs: Vec<&str> = report
        .matches
        .iter()
        .map(|result| result.slug.as_str())
        .collect();
    assert_eq!(&slugs[..2], &["kinderbijslag", "alleenstaande-ouder-kop"]);
    for window in report.matches.windows(2) {
        assert!(window[0].match_score >= window[1].match_score);
    }

    assert_eq!(profiles.saved().len(), 1);
}

#[test]
fn repeated_evaluation_is_idempotent() {
    let (service, _) = build_service();
    let answers = family_answers();

    let first = service.evaluate(&answers, None).expect("first run");
    let second = service.evaluate(&answers, None).expect("second run");

    assert_eq!(first, second);
}

#[tokio::test]
async fn http_round_trip_returns_report_envelope() {
    let (service, _) = build_service();
    let router = matching_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/matches")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&family_answers()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("json payload");

    assert_eq!(payload.get("total_found"), Some(&json!(6)));
    assert_eq!(
        payload["matches"].as_array().expect("matches array").len(),
        6
    );
    assert!(payload["matches"][0]["match_reasons"]
        .as_array()
        .expect("reasons array")
        .iter()
        .all(Value::is_string));
}
