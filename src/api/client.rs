//! Clinician API client.
//!
//! Thin wrappers over `gloo_net` for the measurement, threshold and patient
//! list endpoints. Each page gesture awaits its fetches sequentially; there
//! is no retry and no request overlap within one gesture. Failures are
//! reported through the banner, never propagated further.

use gloo_net::http::Request;

use crate::model::{AttributeThreshold, Measurement, PatientSummary};

/// Default API base URL: same origin as the page.
pub const DEFAULT_API_BASE: &str = "";

const API_BASE_STORAGE_KEY: &str = "wardview_api_url";

/// Get the API base URL from local storage or use the default.
pub fn api_base() -> String {
    let url = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_BASE_STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage.
pub fn set_api_base(url: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(API_BASE_STORAGE_KEY, url);
    }
}

/// A failed request, carrying the server's message when it supplied one.
/// `message: None` means the banner shows its generic default text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub message: Option<String>,
}

impl ApiError {
    fn generic() -> Self {
        ApiError { message: None }
    }

    fn from_body(body: String) -> Self {
        if body.trim().is_empty() {
            ApiError::generic()
        } else {
            ApiError {
                message: Some(body),
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(m) => write!(f, "{}", m),
            None => write!(f, "request failed"),
        }
    }
}

/// Fetch the ordered measurement series for one patient attribute.
pub async fn fetch_measurements(
    patient_uuid: &str,
    attribute_id: u32,
) -> Result<Vec<Measurement>, ApiError> {
    let url = format!(
        "{}/clinician/patient/patientMeasurements/{}/{}",
        api_base(),
        patient_uuid,
        attribute_id
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|_| ApiError::generic())?;
    if !response.ok() {
        return Err(ApiError::generic());
    }
    response.json().await.map_err(|_| ApiError::generic())
}

/// Fetch the latest threshold configuration for one patient attribute.
/// A 404 means no threshold has been configured, which is not an error.
pub async fn fetch_threshold(
    patient_uuid: &str,
    attribute_id: u32,
) -> Result<Option<AttributeThreshold>, ApiError> {
    let url = format!(
        "{}/clinician/attributeThreshold/{}/{}",
        api_base(),
        patient_uuid,
        attribute_id
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|_| ApiError::generic())?;
    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(ApiError::generic());
    }
    response
        .json()
        .await
        .map(Some)
        .map_err(|_| ApiError::generic())
}

/// Fetch the patient list for the tile board and table views.
pub async fn fetch_patients() -> Result<Vec<PatientSummary>, ApiError> {
    let url = format!("{}/clinician/patient/patientsJSON", api_base());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|_| ApiError::generic())?;
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_body(body));
    }
    response.json().await.map_err(|_| ApiError::generic())
}

/// Submit edited threshold values. The body is form-encoded; the response is
/// the updated threshold as the server stored it. A failing response carries
/// its body text back for the error banner.
pub async fn update_threshold(
    patient_uuid: &str,
    attribute_id: u32,
    low: &str,
    high: &str,
) -> Result<AttributeThreshold, ApiError> {
    let url = format!(
        "{}/clinician/attributeThreshold/{}/{}",
        api_base(),
        patient_uuid,
        attribute_id
    );
    let body = format!(
        "thresholdLowValue={}&thresholdHighValue={}",
        urlencoding::encode(low),
        urlencoding::encode(high)
    );
    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|_| ApiError::generic())?
        .send()
        .await
        .map_err(|_| ApiError::generic())?;
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_body(body));
    }
    response.json().await.map_err(|_| ApiError::generic())
}
