//! Search and status filtering for the hospital Reports tab.

use tracing::debug;

use carevault_contracts::portal::{HospitalReport, StatusFilter};

/// Return the reports matching both `query` and `filter`, in input order.
///
/// The query is trimmed and compared case-insensitively as a substring of
/// the report id, patient id, patient name, and report type. An empty query
/// matches every report.
pub fn search_reports<'a>(
    reports: &'a [HospitalReport],
    query: &str,
    filter: StatusFilter,
) -> Vec<&'a HospitalReport> {
    let needle = query.trim().to_lowercase();

    let hits: Vec<&HospitalReport> = reports
        .iter()
        .filter(|r| filter.admits(r.status))
        .filter(|r| needle.is_empty() || report_matches(r, &needle))
        .collect();

    debug!(
        query = %needle,
        filter = filter.label(),
        hits = hits.len(),
        "report search"
    );
    hits
}

fn report_matches(report: &HospitalReport, needle: &str) -> bool {
    [
        &report.id,
        &report.patient_id,
        &report.patient_name,
        &report.report_type,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
