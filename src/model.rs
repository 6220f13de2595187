//! Wire Data Model
//!
//! Types deserialized from the clinician API endpoints. These mirror the
//! server's JSON shapes; the server remains the source of truth for
//! thresholds and alert classification.

use serde::{Deserialize, Deserializer, Serialize};

/// A single measurement of a clinical attribute.
///
/// The series returned by the measurement endpoint is chronologically
/// ordered; the last element is the current reading shown in summary widgets.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Epoch milliseconds.
    pub data_time: i64,
    /// Raw reading. Arrives as number or string on the wire; questionnaire
    /// responses embed a JSON object here.
    #[serde(deserialize_with = "de_number_or_string")]
    pub value: String,
    #[serde(default)]
    pub min_value: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
    #[serde(default)]
    pub alert_status: AlertStatus,
}

impl Measurement {
    /// The reading as a number, when it is one.
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.trim().parse().ok()
    }
}

fn de_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Int(i64),
        Float(f64),
        Str(String),
    }

    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(n) => n.to_string(),
        NumberOrString::Float(n) => n.to_string(),
        NumberOrString::Str(s) => s,
    })
}

/// Server-computed classification of a measurement against its threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum AlertStatus {
    #[serde(rename = "IN_THRESHOLD")]
    InThreshold,
    #[serde(rename = "OUT_OF_THRESHOLD")]
    OutOfThreshold,
    #[serde(rename = "EXPIRED_MEASUREMENT")]
    ExpiredMeasurement,
    #[serde(rename = "CANNOT_CALCULATE")]
    CannotCalculate,
    /// Empty string on the wire: the server has no classification.
    #[default]
    #[serde(rename = "")]
    None,
    /// Any status this client does not recognise; rendered like an
    /// unclassified reading.
    #[serde(other)]
    Unknown,
}

impl AlertStatus {
    /// CSS class for the recent-value widget.
    pub fn css_class(self) -> &'static str {
        match self {
            AlertStatus::InThreshold => "green",
            AlertStatus::OutOfThreshold => "red",
            AlertStatus::ExpiredMeasurement => "grey",
            _ => "amber",
        }
    }
}

/// Combined CSS class for paired readings (e.g. systolic/diastolic): a
/// breach on either side wins, both sides must be in threshold for green.
pub fn paired_alert_css_class(primary: AlertStatus, secondary: AlertStatus) -> &'static str {
    use AlertStatus::*;
    if primary == OutOfThreshold || secondary == OutOfThreshold {
        "red"
    } else if primary == InThreshold && secondary == InThreshold {
        "green"
    } else if primary == ExpiredMeasurement || secondary == ExpiredMeasurement {
        "grey"
    } else {
        "amber"
    }
}

/// Clinician-configured low/high bounds for one attribute.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeThreshold {
    #[serde(default)]
    pub threshold_low_value: Option<f64>,
    #[serde(default)]
    pub threshold_high_value: Option<f64>,
}

/// Questionnaire payload embedded as a JSON string in a measurement value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QuestionnaireResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub conversation: Vec<String>,
    #[serde(default)]
    pub advice: String,
}

impl QuestionnaireResponse {
    /// Decode the payload from a measurement's value field.
    pub fn decode(measurement: &Measurement) -> Option<Self> {
        serde_json::from_str(&measurement.value).ok()
    }
}

/// Ternary projection of a questionnaire status for categorical charting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagCode {
    Green,
    Red,
    Neutral,
}

impl FlagCode {
    pub fn from_status(status: &str) -> Self {
        match status {
            "GREEN_FLAG" => FlagCode::Green,
            "RED_FLAG" => FlagCode::Red,
            _ => FlagCode::Neutral,
        }
    }

    /// Numeric code plotted on the y-axis.
    pub fn code(self) -> i8 {
        match self {
            FlagCode::Green => 1,
            FlagCode::Red => -1,
            FlagCode::Neutral => 0,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            FlagCode::Green => "rgba(54,130,21,1)",
            FlagCode::Red => "rgba(196,0,0,1)",
            FlagCode::Neutral => "rgba(54,162,235,1)",
        }
    }
}

/// One row of the patient list endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    #[serde(rename = "patientUUID")]
    pub patient_uuid: String,
    pub nhs_number: String,
    pub first_name: String,
    pub last_name: String,
    /// Epoch milliseconds.
    pub date_of_birth: i64,
    #[serde(default)]
    pub critical: bool,
    #[serde(default)]
    pub patient_status: PatientStatus,
}

impl PatientSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Overall monitoring state of a patient, driving the tile styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum PatientStatus {
    #[serde(rename = "INCOMPLETE_SCHEDULE")]
    IncompleteSchedule,
    #[serde(rename = "IN_THRESHOLD")]
    InThreshold,
    #[serde(rename = "OUT_OF_THRESHOLD")]
    OutOfThreshold,
    #[default]
    #[serde(other)]
    CannotCalculate,
}

impl PatientStatus {
    /// CSS style stem for the patient tile.
    pub fn tile_style(self) -> &'static str {
        match self {
            PatientStatus::IncompleteSchedule => "incomplete-schedule",
            PatientStatus::InThreshold => "smiley",
            PatientStatus::OutOfThreshold => "frowney",
            PatientStatus::CannotCalculate => "cannot-calculate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_numeric_and_string_values() {
        let m: Measurement = serde_json::from_str(
            r#"{"dataTime":1000,"value":5,"alertStatus":"IN_THRESHOLD"}"#,
        )
        .unwrap();
        assert_eq!(m.value, "5");
        assert_eq!(m.numeric_value(), Some(5.0));
        assert_eq!(m.alert_status, AlertStatus::InThreshold);
        assert_eq!(m.min_value, None);

        let m: Measurement = serde_json::from_str(
            r#"{"dataTime":2000,"value":"72.5","minValue":60,"maxValue":90,"alertStatus":""}"#,
        )
        .unwrap();
        assert_eq!(m.numeric_value(), Some(72.5));
        assert_eq!(m.alert_status, AlertStatus::None);
        assert_eq!(m.min_value, Some(60.0));
    }

    #[test]
    fn test_unknown_alert_status_falls_back() {
        let m: Measurement = serde_json::from_str(
            r#"{"dataTime":1000,"value":5,"alertStatus":"SOMETHING_NEW"}"#,
        )
        .unwrap();
        assert_eq!(m.alert_status, AlertStatus::Unknown);
        assert_eq!(m.alert_status.css_class(), "amber");
    }

    #[test]
    fn test_alert_css_classes() {
        assert_eq!(AlertStatus::InThreshold.css_class(), "green");
        assert_eq!(AlertStatus::OutOfThreshold.css_class(), "red");
        assert_eq!(AlertStatus::ExpiredMeasurement.css_class(), "grey");
        assert_eq!(AlertStatus::CannotCalculate.css_class(), "amber");
        assert_eq!(AlertStatus::None.css_class(), "amber");
    }

    #[test]
    fn test_paired_alert_css_classes() {
        use AlertStatus::*;
        assert_eq!(paired_alert_css_class(InThreshold, OutOfThreshold), "red");
        assert_eq!(paired_alert_css_class(InThreshold, InThreshold), "green");
        assert_eq!(paired_alert_css_class(InThreshold, ExpiredMeasurement), "grey");
        assert_eq!(paired_alert_css_class(InThreshold, CannotCalculate), "amber");
        assert_eq!(paired_alert_css_class(None, None), "amber");
    }

    #[test]
    fn test_threshold_deserialization() {
        let t: AttributeThreshold =
            serde_json::from_str(r#"{"thresholdLowValue":60,"thresholdHighValue":90.5}"#).unwrap();
        assert_eq!(t.threshold_low_value, Some(60.0));
        assert_eq!(t.threshold_high_value, Some(90.5));

        let t: AttributeThreshold = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(t, AttributeThreshold::default());
    }

    #[test]
    fn test_questionnaire_decode() {
        let m: Measurement = serde_json::from_str(
            r#"{"dataTime":1000,"value":"{\"status\":\"GREEN_FLAG\",\"advice\":\"Keep going\"}","alertStatus":""}"#,
        )
        .unwrap();
        let q = QuestionnaireResponse::decode(&m).unwrap();
        assert_eq!(q.status, "GREEN_FLAG");
        assert_eq!(q.advice, "Keep going");
        assert!(q.conversation.is_empty());

        let plain: Measurement =
            serde_json::from_str(r#"{"dataTime":1000,"value":5,"alertStatus":""}"#).unwrap();
        assert!(QuestionnaireResponse::decode(&plain).is_none());
    }

    #[test]
    fn test_flag_codes() {
        assert_eq!(FlagCode::from_status("GREEN_FLAG").code(), 1);
        assert_eq!(FlagCode::from_status("RED_FLAG").code(), -1);
        assert_eq!(FlagCode::from_status("AMBER_FLAG").code(), 0);
        assert_eq!(FlagCode::from_status("").code(), 0);
    }

    #[test]
    fn test_patient_summary_deserialization() {
        let p: PatientSummary = serde_json::from_str(
            r#"{
                "patientUUID": "c10d1a1c-9b2b-4a4c-9c25-4b3e6e2d0001",
                "nhsNumber": "943 476 5919",
                "firstName": "Ada",
                "lastName": "Byron",
                "dateOfBirth": 499651200000,
                "critical": true,
                "patientStatus": "OUT_OF_THRESHOLD"
            }"#,
        )
        .unwrap();
        assert_eq!(p.full_name(), "Ada Byron");
        assert_eq!(p.patient_status, PatientStatus::OutOfThreshold);
        assert_eq!(p.patient_status.tile_style(), "frowney");
        assert!(p.critical);
    }

    #[test]
    fn test_patient_status_tile_styles() {
        assert_eq!(PatientStatus::IncompleteSchedule.tile_style(), "incomplete-schedule");
        assert_eq!(PatientStatus::InThreshold.tile_style(), "smiley");
        assert_eq!(PatientStatus::OutOfThreshold.tile_style(), "frowney");
        assert_eq!(PatientStatus::CannotCalculate.tile_style(), "cannot-calculate");
    }
}
