use bson::oid::ObjectId;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use rota_db::Store;
use rota_db::models::RotaEntry;
use rota_types::api::CreateRotaRequest;

use crate::chores::{self, HOUSEHOLD_CHORES};
use crate::error::RotaError;

/// The rota operations behind the HTTP layer. Owns the store handle; one
/// instance is built at startup and shared across requests.
pub struct RotaService {
    store: Store,
}

impl RotaService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn chores(&self) -> &'static [&'static str] {
        &HOUSEHOLD_CHORES
    }

    pub fn random_chore(&self) -> &'static str {
        chores::random_chore()
    }

    pub async fn list_entries(&self) -> Result<Vec<RotaEntry>, RotaError> {
        Ok(self.store.list_entries().await?)
    }

    /// Validate, stamp, and persist a new entry. Nothing is written when
    /// validation fails.
    pub async fn create_entry(&self, req: CreateRotaRequest) -> Result<RotaEntry, RotaError> {
        let name = req.name.trim();
        if name.is_empty() || req.duties.is_empty() {
            return Err(RotaError::Validation(
                "Name and duties are required".into(),
            ));
        }

        let entry = RotaEntry {
            id: None,
            name: name.to_string(),
            duties: req.duties,
            date: parse_date(req.date.as_deref()),
            created_at: Utc::now(),
        };

        Ok(self.store.insert_entry(entry).await?)
    }

    pub async fn delete_entry(&self, id: &str) -> Result<(), RotaError> {
        let oid = ObjectId::parse_str(id).map_err(|_| RotaError::InvalidId)?;

        if self.store.delete_entry(oid).await? {
            Ok(())
        } else {
            Err(RotaError::NotFound)
        }
    }
}

/// Lenient assignment-date parsing: RFC 3339, then a bare `YYYY-MM-DD` day at
/// midnight UTC. Absent or unparseable input means "now" rather than an error.
fn parse_date(raw: Option<&str>) -> DateTime<Utc> {
    let Some(raw) = raw else {
        return Utc::now();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return day.and_time(NaiveTime::MIN).and_utc();
    }

    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(name: &str, duties: &[&str]) -> CreateRotaRequest {
        CreateRotaRequest {
            name: name.into(),
            duties: duties.iter().map(|d| d.to_string()).collect(),
            date: None,
        }
    }

    async fn service() -> RotaService {
        // The driver only parses the URI here; nothing connects until an
        // operation runs, so store-free tests work offline.
        let client = mongodb::Client::with_uri_str("mongodb://127.0.0.1:27017")
            .await
            .unwrap();
        RotaService::new(Store::with_client(&client))
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let svc = service().await;
        let err = svc.create_entry(request("", &["Dishes"])).await.unwrap_err();
        assert!(matches!(err, RotaError::Validation(_)));
    }

    #[tokio::test]
    async fn whitespace_name_is_rejected() {
        let svc = service().await;
        let err = svc.create_entry(request("   ", &["Dishes"])).await.unwrap_err();
        assert!(matches!(err, RotaError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_duties_are_rejected() {
        let svc = service().await;
        let err = svc.create_entry(request("Alice", &[])).await.unwrap_err();
        assert!(matches!(err, RotaError::Validation(_)));
    }

    #[tokio::test]
    async fn malformed_id_is_rejected_before_any_store_call() {
        let svc = service().await;
        let err = svc.delete_entry("not-an-object-id").await.unwrap_err();
        assert!(matches!(err, RotaError::InvalidId));
    }

    #[test]
    fn rfc3339_date_is_honoured() {
        let parsed = parse_date(Some("2026-08-08T10:15:00Z"));
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 8, 8, 10, 15, 0).unwrap());
    }

    #[test]
    fn offset_date_is_normalised_to_utc() {
        let parsed = parse_date(Some("2026-08-08T10:15:00+02:00"));
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 8, 8, 8, 15, 0).unwrap());
    }

    #[test]
    fn bare_day_parses_to_midnight_utc() {
        let parsed = parse_date(Some("2026-08-08"));
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 8, 8, 0, 0, 0).unwrap());
    }

    #[test]
    fn garbage_date_falls_back_to_now() {
        let before = Utc::now();
        let parsed = parse_date(Some("next tuesday"));
        let after = Utc::now();
        assert!(parsed >= before && parsed <= after);
    }

    #[test]
    fn missing_date_falls_back_to_now() {
        let before = Utc::now();
        let parsed = parse_date(None);
        let after = Utc::now();
        assert!(parsed >= before && parsed <= after);
    }
}
