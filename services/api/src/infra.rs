use aspirant_ai::workflows::guidance::{
    PlanId, RecommendationId, RecommendationRecord, RecommendationRepository, RepositoryError,
    StudyPlanRecord, StudyPlanRepository,
};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRecommendationRepository {
    records: Arc<Mutex<HashMap<RecommendationId, RecommendationRecord>>>,
}

impl RecommendationRepository for InMemoryRecommendationRepository {
    fn insert(
        &self,
        record: RecommendationRecord,
    ) -> Result<RecommendationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.recommendation_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.recommendation_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(
        &self,
        id: &RecommendationId,
    ) -> Result<Option<RecommendationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryStudyPlanRepository {
    records: Arc<Mutex<HashMap<PlanId, StudyPlanRecord>>>,
}

impl StudyPlanRepository for InMemoryStudyPlanRepository {
    fn insert(&self, record: StudyPlanRecord) -> Result<StudyPlanRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.plan_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.plan_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &PlanId) -> Result<Option<StudyPlanRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
