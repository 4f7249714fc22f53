//! Job and shift subcommands.
//!
//! Each command runs one engine operation and prints the result as JSON.

use serde_json::{json, Value};

use shiftdesk_core::{Cancellation, ScheduleError, SchedulingEngine};

use crate::cli::{JobAction, ShiftAction, ShiftFilter};

/// Run a job subcommand.
pub(crate) async fn handle_job_command(
    engine: &SchedulingEngine,
    action: JobAction,
) -> Result<Value, ScheduleError> {
    match action {
        JobAction::Create { id, start, end } => {
            let job = engine.create_job(id, start, end).await?;
            Ok(json!({
                "jobId": job.id,
                "companyId": job.company_id,
                "shifts": job.shifts,
            }))
        }
        JobAction::Show { job_id } => engine
            .get_job(job_id)
            .await?
            .map(|job| json!(job))
            .ok_or(ScheduleError::JobNotFound(job_id)),
        JobAction::Delete { job_id } => {
            engine.delete_job(job_id).await?;
            Ok(json!({ "deleted": job_id }))
        }
    }
}

/// Run a shift subcommand.
pub(crate) async fn handle_shift_command(
    engine: &SchedulingEngine,
    action: ShiftAction,
) -> Result<Value, ScheduleError> {
    match action {
        ShiftAction::List(ShiftFilter { job, talent }) => {
            let shifts = match (job, talent) {
                (Some(job_id), _) => engine.get_shifts_by_job(job_id).await?,
                (None, Some(talent_id)) => engine.get_shifts_by_talent(talent_id).await?,
                (None, None) => Vec::new(),
            };
            Ok(json!({ "shifts": shifts }))
        }
        ShiftAction::Book { shift_id, talent_id } => {
            let shift = engine.book_talent(shift_id, talent_id).await?;
            Ok(json!(shift))
        }
        ShiftAction::Cancel { job_id, shift_id } => {
            let status = match engine.cancel_shift(job_id, shift_id).await? {
                Cancellation::Cancelled(_) => "cancelled",
                Cancellation::AlreadyAbsent => "alreadyAbsent",
            };
            Ok(json!({ "shiftId": shift_id, "status": status }))
        }
        ShiftAction::Replace { talent_id, replacement_id } => {
            let replacement = engine.replace_all_shifts(talent_id, replacement_id).await?;
            Ok(json!(replacement))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shiftdesk_core::SchedulingConfig;
    use uuid::Uuid;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    async fn create(engine: &SchedulingEngine) -> Uuid {
        let id = Uuid::new_v4();
        let out = handle_job_command(
            engine,
            JobAction::Create {
                id,
                start: date(1),
                end: date(4),
            },
        )
        .await
        .unwrap();
        assert_eq!(out["shifts"].as_array().unwrap().len(), 3);
        id
    }

    #[tokio::test]
    async fn test_job_show_and_delete() {
        let engine = SchedulingEngine::new(SchedulingConfig::default());
        let id = create(&engine).await;

        let shown = handle_job_command(&engine, JobAction::Show { job_id: id })
            .await
            .unwrap();
        assert_eq!(shown["id"], id.to_string());

        handle_job_command(&engine, JobAction::Delete { job_id: id })
            .await
            .unwrap();
        let err = handle_job_command(&engine, JobAction::Show { job_id: id })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_shift_book_cancel_replace() {
        let engine = SchedulingEngine::new(SchedulingConfig::default());
        let job_id = create(&engine).await;
        let shifts = engine.get_shifts_by_job(job_id).await.unwrap();
        let talent = Uuid::new_v4();
        let replacement = Uuid::new_v4();

        handle_shift_command(
            &engine,
            ShiftAction::Book {
                shift_id: shifts[0].id,
                talent_id: talent,
            },
        )
        .await
        .unwrap();

        let listed = handle_shift_command(
            &engine,
            ShiftAction::List(ShiftFilter {
                job: None,
                talent: Some(talent),
            }),
        )
        .await
        .unwrap();
        assert_eq!(listed["shifts"].as_array().unwrap().len(), 1);

        let cancelled = handle_shift_command(
            &engine,
            ShiftAction::Cancel {
                job_id,
                shift_id: shifts[2].id,
            },
        )
        .await
        .unwrap();
        assert_eq!(cancelled["status"], "cancelled");

        let replaced = handle_shift_command(
            &engine,
            ShiftAction::Replace {
                talent_id: talent,
                replacement_id: replacement,
            },
        )
        .await
        .unwrap();
        assert_eq!(replaced["reassigned"].as_array().unwrap().len(), 1);
        assert_eq!(engine.get_shifts_by_talent(replacement).await.unwrap().len(), 1);
    }
}
