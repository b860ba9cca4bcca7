//! CSV export of the registration table.

use std::sync::Arc;

use anyhow::{Context, Result};
use kicon_core::admin::{AdminSession, RegistrationQuery, RegistrationRecord};
use kicon_core::ports::RegistrationBackend;

const HEADER: &str = "ID,Name,Email,Mobile,Specialty,Clinic,Registration Date,Status,Payment Status,Nationality,Emergency Contact";

const PAGE_SIZE: u32 = 100;

pub struct ExportRegistrationsCsv {
    backend: Arc<dyn RegistrationBackend>,
}

impl ExportRegistrationsCsv {
    pub fn new(backend: Arc<dyn RegistrationBackend>) -> Self {
        Self { backend }
    }

    /// Build the full export, paging through the listing until the reported
    /// total is reached. The optional status filter matches the table's.
    pub async fn execute(
        &self,
        session: &AdminSession,
        status: Option<kicon_core::admin::RegistrationStatus>,
    ) -> Result<String> {
        let mut out = String::from(HEADER);
        out.push('\n');

        let mut skip = 0;
        let mut exported = 0u64;
        loop {
            let page = self
                .backend
                .list_registrations(&RegistrationQuery {
                    skip,
                    limit: PAGE_SIZE,
                    status,
                })
                .await
                .context("failed to fetch a page for the CSV export")?;
            if page.rows.is_empty() {
                break;
            }
            exported += page.rows.len() as u64;
            for row in &page.rows {
                push_row(&mut out, row);
            }
            if exported >= page.total {
                break;
            }
            skip += PAGE_SIZE;
        }

        tracing::info!(
            admin = session.admin_name(),
            rows = exported,
            "exported registrations to CSV"
        );
        Ok(out)
    }
}

fn push_row(out: &mut String, row: &RegistrationRecord) {
    let cells = [
        row.id.as_str(),
        row.full_name.as_str(),
        row.email.as_str(),
        row.mobile.as_str(),
        row.specialty.label(),
        row.clinic_name.as_str(),
        &row.registration_date.format("%Y-%m-%d").to_string(),
        row.registration_status.as_str(),
        row.payment_status.as_str(),
        row.nationality.as_str(),
        row.emergency_contact.as_str(),
    ];
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_cell(out, cell);
    }
    out.push('\n');
}

// RFC 4180 quoting: wrap when the value contains a delimiter, a quote or a
// newline, doubling embedded quotes.
fn push_cell(out: &mut String, value: &str) {
    if value.contains([',', '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&value.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(value);
    }
}
