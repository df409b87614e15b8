use crate::{config::AppConfig, db::DbPool, services::reports::ReportService};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DbPool,
    pub reports: ReportService,
}

impl AppState {
    pub fn new(config: AppConfig, db: DbPool) -> Self {
        let reports = ReportService::new(db.clone());
        Self {
            config,
            db,
            reports,
        }
    }
}
