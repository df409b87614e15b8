use crate::{
    db::DbPool,
    error::AppError,
    models::report::{NewReport, VehicleReport},
};

const INSERT_REPORT: &str = r#"
INSERT INTO vehicle_reports
    (city, sr_no, vrn, model, entry_date, in_time, out_date, out_time, remarks)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

#[derive(Clone)]
pub struct ReportService {
    db: DbPool,
}

impl ReportService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Inserts the batch in order on a single transaction; the rows become
    /// visible together once the loop completes.
    pub async fn save_reports(&self, entries: &[NewReport]) -> Result<(), AppError> {
        let mut tx = self.db.begin().await?;
        for entry in entries {
            let sr_no = entry.serial_number()?;
            sqlx::query(INSERT_REPORT)
                .bind(&entry.city)
                .bind(sr_no)
                .bind(&entry.vrn)
                .bind(&entry.model)
                .bind(&entry.entry_date)
                .bind(&entry.in_time)
                .bind(&entry.out_date)
                .bind(&entry.out_time)
                .bind(&entry.remarks)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    pub async fn save_report(&self, entry: &NewReport) -> Result<(), AppError> {
        let sr_no = entry.serial_number()?;
        let mut conn = self.db.acquire().await?;
        sqlx::query(INSERT_REPORT)
            .bind(&entry.city)
            .bind(sr_no)
            .bind(&entry.vrn)
            .bind(&entry.model)
            .bind(&entry.entry_date)
            .bind(&entry.in_time)
            .bind(&entry.out_date)
            .bind(&entry.out_time)
            .bind(&entry.remarks)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<VehicleReport>, AppError> {
        let mut conn = self.db.acquire().await?;
        let reports = sqlx::query_as::<_, VehicleReport>(
            r#"SELECT id, city, sr_no, vrn, model, entry_date, in_time, out_date, out_time, remarks
               FROM vehicle_reports
               ORDER BY entry_date DESC, city ASC, sr_no ASC"#,
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(reports)
    }

    /// Exact string match on `entry_date`; no date parsing happens anywhere.
    pub async fn list_by_date(&self, entry_date: &str) -> Result<Vec<VehicleReport>, AppError> {
        let mut conn = self.db.acquire().await?;
        let reports = sqlx::query_as::<_, VehicleReport>(
            r#"SELECT id, city, sr_no, vrn, model, entry_date, in_time, out_date, out_time, remarks
               FROM vehicle_reports
               WHERE entry_date = ?1
               ORDER BY city ASC, sr_no ASC"#,
        )
        .bind(entry_date)
        .fetch_all(&mut *conn)
        .await?;
        Ok(reports)
    }
}
