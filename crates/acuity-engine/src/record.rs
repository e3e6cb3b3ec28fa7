//! Finalizing a triage decision into a storable record, and the
//! wait-time policy checks run against stored records.

use acuity_audit::AuditEvent;
use acuity_core::models::{MobilityStatus, TriageAssessment, TriageRecord};
use jiff::{SignedDuration, Timestamp};
use uuid::Uuid;

use crate::error::EngineError;
use crate::intake::AssessmentDraft;
use crate::{registry, routing, rules};

/// Classify an assessment and capture the result with its policy bundle.
///
/// Emits a `triage.finalized` audit event. Persisting the record is the
/// caller's job.
pub fn finalize(
    assessment: TriageAssessment,
    mobility: Option<MobilityStatus>,
    operator_id: impl Into<String>,
    triaged_at: Timestamp,
) -> Result<TriageRecord, EngineError> {
    let operator_id = operator_id.into();
    if operator_id.trim().is_empty() {
        return Err(EngineError::MissingOperator);
    }

    let classification = rules::explain(&assessment);
    let config = registry::config_for(classification.level);
    let care_area = routing::suggest_area(classification.level, mobility);

    let record = TriageRecord {
        id: Uuid::new_v4(),
        operator_id,
        triaged_at,
        assessment,
        mobility,
        level: classification.level,
        category: classification.category,
        max_wait_minutes: config.max_wait_minutes,
        care_area,
        triggers: classification.triggers,
        registry_version: registry::REGISTRY_VERSION,
    };

    AuditEvent::new(
        "triage.finalized",
        "triage_record",
        record.id.to_string(),
        &record.operator_id,
    )
    .with_details(serde_json::json!({
        "level": record.level.as_u8(),
        "category": record.category,
        "care_area": record.care_area,
        "triggers": record.triggers,
    }))
    .emit();

    Ok(record)
}

/// Validate intake form state and finalize it in one step.
pub fn finalize_draft(
    draft: &AssessmentDraft,
    operator_id: impl Into<String>,
    triaged_at: Timestamp,
) -> Result<TriageRecord, EngineError> {
    let assessment = draft.complete()?;
    finalize(assessment, draft.mobility.observed(), operator_id, triaged_at)
}

/// Latest time the patient should be seen under the record's wait policy.
pub fn wait_deadline(record: &TriageRecord) -> Result<Timestamp, EngineError> {
    Ok(record.triaged_at.checked_add(max_wait(record))?)
}

/// Whether `now` is strictly past the wait deadline.
pub fn is_overdue(record: &TriageRecord, now: Timestamp) -> bool {
    now.duration_since(record.triaged_at) > max_wait(record)
}

/// Whole minutes past the deadline; 0 when not overdue.
pub fn minutes_overdue(record: &TriageRecord, now: Timestamp) -> i64 {
    now.duration_since(record.triaged_at)
        .checked_sub(max_wait(record))
        .map_or(0, |over| over.as_mins().max(0))
}

fn max_wait(record: &TriageRecord) -> SignedDuration {
    SignedDuration::from_mins(i64::from(record.max_wait_minutes))
}
