//! reqwest-backed implementation of [`RegistrationBackend`].
//!
//! All endpoints answer with a `{ success, data, ... }` envelope; transport
//! failures map to [`BackendError::Network`], undecodable bodies to
//! [`BackendError::Malformed`], and submission rejections carry the
//! backend's own message through [`SubmitError::Rejected`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use kicon_core::admin::{
    RegistrationPage, RegistrationQuery, RegistrationRecord, RegistrationStats,
    RegistrationStatus,
};
use kicon_core::payment::PaymentInfo;
use kicon_core::ports::{
    BackendError, EmailCheck, RegistrationBackend, RegistrationReceipt, SubmitError,
};
use kicon_core::{ClientConfig, RegistrationPayload};

/// HTTP client for the registration backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self { client, base_url })
    }

    /// Build `{base}/api/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| BackendError::Malformed("base URL cannot be a base".to_string()))?;
            path.pop_if_empty();
            path.push("api");
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}

fn transport(err: reqwest::Error) -> BackendError {
    BackendError::Network(err.to_string())
}

fn malformed(err: serde_json::Error) -> BackendError {
    BackendError::Malformed(err.to_string())
}

/// Decode a JSON body after insisting on a 2xx status.
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::UnexpectedStatus(status.as_u16()));
    }
    let body = response.bytes().await.map_err(transport)?;
    serde_json::from_slice(&body).map_err(malformed)
}

#[derive(Debug, Deserialize)]
struct EmailEnvelope {
    success: bool,
    #[serde(default)]
    exists: bool,
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    success: bool,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    success: bool,
    #[serde(default)]
    data: Vec<RegistrationRecord>,
    #[serde(default)]
    total: u64,
}

#[derive(Debug, Default, Deserialize)]
struct SubmitEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<SubmitData>,
    #[serde(default)]
    error: Option<ErrorBody>,
    /// FastAPI-style rejection body.
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubmitData {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl SubmitEnvelope {
    fn rejection_message(self) -> String {
        self.error
            .map(|e| e.message)
            .or(self.detail)
            .or(self.message)
            .unwrap_or_else(|| "Registration failed. Please try again.".to_string())
    }
}

#[async_trait]
impl RegistrationBackend for HttpBackend {
    async fn check_email(&self, email: &str) -> Result<EmailCheck, BackendError> {
        let url = self.endpoint(&["registrations", "email", email])?;
        let response = self.client.get(url).send().await.map_err(transport)?;
        let envelope: EmailEnvelope = read_json(response).await?;
        if !envelope.success {
            return Err(BackendError::Malformed(
                "backend reported failure on email check".to_string(),
            ));
        }
        Ok(EmailCheck {
            exists: envelope.exists,
        })
    }

    async fn submit_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationReceipt, SubmitError> {
        let url = self.endpoint(&["registrations"])?;
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;

        // Rejections arrive both as 4xx `{detail}` bodies and as
        // `{success:false, error:{message}}` envelopes; accept either.
        let envelope: SubmitEnvelope = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(err) if status.is_success() => return Err(malformed(err).into()),
            Err(_) => return Err(BackendError::UnexpectedStatus(status.as_u16()).into()),
        };

        match (envelope.success, &envelope.data) {
            (true, Some(data)) => {
                tracing::info!(registration_id = %data.id, "registration accepted");
                Ok(RegistrationReceipt {
                    id: data.id.clone(),
                    message: envelope.message,
                })
            }
            _ => Err(SubmitError::Rejected {
                message: envelope.rejection_message(),
            }),
        }
    }

    async fn fetch_bank_details(&self) -> Result<PaymentInfo, BackendError> {
        let url = self.endpoint(&["payments", "bank-details"])?;
        let response = self.client.get(url).send().await.map_err(transport)?;
        let envelope: DataEnvelope<PaymentInfo> = read_json(response).await?;
        match (envelope.success, envelope.data) {
            (true, Some(info)) => Ok(info),
            _ => Err(BackendError::Malformed(
                "bank-details response carried no data".to_string(),
            )),
        }
    }

    async fn list_registrations(
        &self,
        query: &RegistrationQuery,
    ) -> Result<RegistrationPage, BackendError> {
        let url = self.endpoint(&["registrations"])?;
        let mut request = self.client.get(url).query(&[
            ("skip", query.skip.to_string()),
            ("limit", query.limit.to_string()),
        ]);
        if let Some(status) = query.status {
            request = request.query(&[("status", status.as_str())]);
        }
        let response = request.send().await.map_err(transport)?;
        let envelope: ListEnvelope = read_json(response).await?;
        if !envelope.success {
            return Err(BackendError::Malformed(
                "backend reported failure on listing".to_string(),
            ));
        }
        Ok(RegistrationPage {
            rows: envelope.data,
            total: envelope.total,
        })
    }

    async fn registration_stats(&self) -> Result<RegistrationStats, BackendError> {
        let url = self.endpoint(&["registrations", "stats", "summary"])?;
        let response = self.client.get(url).send().await.map_err(transport)?;
        let envelope: DataEnvelope<RegistrationStats> = read_json(response).await?;
        match (envelope.success, envelope.data) {
            (true, Some(stats)) => Ok(stats),
            _ => Err(BackendError::Malformed(
                "stats response carried no data".to_string(),
            )),
        }
    }

    async fn update_status(
        &self,
        id: &str,
        status: RegistrationStatus,
    ) -> Result<RegistrationRecord, BackendError> {
        let url = self.endpoint(&["registrations", id])?;
        let response = self
            .client
            .put(url)
            .json(&serde_json::json!({ "registrationStatus": status.as_str() }))
            .send()
            .await
            .map_err(transport)?;
        let envelope: DataEnvelope<RegistrationRecord> = read_json(response).await?;
        match (envelope.success, envelope.data) {
            (true, Some(record)) => Ok(record),
            _ => Err(BackendError::Malformed(
                "status update response carried no data".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kicon_core::registration::{DraftField, RegistrationDraft};
    use kicon_core::{FoodPreference, Gender, Specialty};

    fn backend_for(server: &mockito::Server) -> HttpBackend {
        HttpBackend::new(&ClientConfig {
            base_url: server.url(),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    fn sample_payload() -> RegistrationPayload {
        let mut draft = RegistrationDraft::default();
        for field in [
            DraftField::FullName("Jane Doe".into()),
            DraftField::Gender(Gender::Female),
            DraftField::DateOfBirth(NaiveDate::from_ymd_opt(1985, 4, 10).unwrap()),
            DraftField::PassportNumber("P1234567".into()),
            DraftField::PassportExpiry(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()),
            DraftField::Mobile("+919999999999".into()),
            DraftField::Email("jane@example.com".into()),
            DraftField::Specialty(Specialty::Dermatology),
            DraftField::YearsOfPractice("10".into()),
            DraftField::ClinicName("Smile Clinic".into()),
            DraftField::ClinicAddress("12 MG Road, New Delhi".into()),
            DraftField::Designation("Senior Consultant".into()),
            DraftField::FoodPreference(FoodPreference::Vegetarian),
            DraftField::EmergencyContact("+918888888888".into()),
            DraftField::TermsAccepted(true),
        ] {
            draft.set(field);
        }
        RegistrationPayload::from_draft(&draft, "key-1").unwrap()
    }

    #[tokio::test]
    async fn test_check_email_decodes_exists_flag() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/registrations/email/jane@example.com")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "exists": true, "message": "Email already registered"}"#)
            .create_async()
            .await;

        let backend = backend_for(&server);
        let check = backend.check_email("jane@example.com").await.unwrap();
        assert!(check.exists);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_submit_success_returns_receipt() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/registrations")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(
                r#"{"success": true, "data": {"id": "reg-42"}, "message": "Registration submitted successfully!"}"#,
            )
            .create_async()
            .await;

        let backend = backend_for(&server);
        let receipt = backend.submit_registration(&sample_payload()).await.unwrap();
        assert_eq!(receipt.id, "reg-42");
        assert_eq!(
            receipt.message.as_deref(),
            Some("Registration submitted successfully!")
        );
    }

    #[tokio::test]
    async fn test_submit_rejection_passes_backend_message_through() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/registrations")
            .with_status(400)
            .with_body(r#"{"success": false, "error": {"message": "Mobile invalid"}}"#)
            .create_async()
            .await;

        let backend = backend_for(&server);
        let err = backend
            .submit_registration(&sample_payload())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected {
                message: "Mobile invalid".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_submit_accepts_fastapi_detail_shape() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/registrations")
            .with_status(400)
            .with_body(r#"{"detail": "Email already registered. Please use a different email address or contact support."}"#)
            .create_async()
            .await;

        let backend = backend_for(&server);
        let err = backend
            .submit_registration(&sample_payload())
            .await
            .unwrap_err();
        match err {
            SubmitError::Rejected { message } => {
                assert!(message.starts_with("Email already registered"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_non_json_error_body_is_transport_level() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/registrations")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let backend = backend_for(&server);
        let err = backend
            .submit_registration(&sample_payload())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            SubmitError::Backend(BackendError::UnexpectedStatus(502))
        );
    }

    #[tokio::test]
    async fn test_bank_details_decodes_payload() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/payments/bank-details")
            .with_status(200)
            .with_body(
                r#"{
                    "success": true,
                    "data": {
                        "bank_details": {
                            "bank_name": "HDFC BANK",
                            "account_name": "ARYAN & DRAVIDIAN TRAD & CONSULT P LTD.",
                            "account_number": "50200073668320",
                            "ifsc_code": "HDFC0001360",
                            "branch": "DLHMALVIYA NAGAR BRANCH"
                        },
                        "payment_calculation": {
                            "usd_amount": 3000.0,
                            "exchange_rate": 90.0,
                            "base_inr_amount": 270000.0,
                            "gst_percentage": 5.0,
                            "gst_amount": 13500.0,
                            "total_inr_amount": 283500.0
                        },
                        "instructions": "Transfer the total amount."
                    }
                }"#,
            )
            .create_async()
            .await;

        let backend = backend_for(&server);
        let info = backend.fetch_bank_details().await.unwrap();
        assert_eq!(info.bank_details.bank_name, "HDFC BANK");
        assert_eq!(info.payment_calculation.gst_percentage, 5.0);
    }

    #[tokio::test]
    async fn test_list_registrations_sends_filter_params() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/registrations")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("skip".into(), "0".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "50".into()),
                mockito::Matcher::UrlEncoded("status".into(), "confirmed".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"success": true, "data": [], "total": 0, "message": "Retrieved 0 registrations"}"#)
            .create_async()
            .await;

        let backend = backend_for(&server);
        let page = backend
            .list_registrations(&RegistrationQuery {
                skip: 0,
                limit: 50,
                status: Some(RegistrationStatus::Confirmed),
            })
            .await
            .unwrap();
        assert!(page.rows.is_empty());
        assert_eq!(page.total, 0);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_connection_refused_maps_to_network_error() {
        let backend = HttpBackend::new(&ClientConfig {
            // Discard port: nothing listens here.
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 1,
        })
        .unwrap();

        let err = backend.check_email("jane@example.com").await.unwrap_err();
        assert!(matches!(err, BackendError::Network(_)));
    }
}
