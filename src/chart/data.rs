//! Chart Data Mapper
//!
//! Pure transformation of measurement series into a chart-library-agnostic
//! series bundle: one label per timestamp and, per logical series, a point
//! sequence index-aligned to the labels. The canvas adapter in
//! [`crate::chart::draw`] consumes this without knowing about measurements.

use crate::format::date_time_dd_mm_yyyy_hh_mm;
use crate::model::{FlagCode, Measurement, QuestionnaireResponse};

/// Chart style. Questionnaire series render as bars, everything else as
/// lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// One logical series, index-aligned to the bundle's labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub points: Vec<f64>,
    /// Series color; ignored when `point_colors` is non-empty.
    pub color: &'static str,
    /// Per-point colors for categorical series.
    pub point_colors: Vec<&'static str>,
    /// Rendered with a dashed stroke (threshold bands).
    pub dashed: bool,
}

impl Dataset {
    fn solid(label: impl Into<String>, color: &'static str, points: Vec<f64>) -> Self {
        Dataset {
            label: label.into(),
            points,
            color,
            point_colors: Vec::new(),
            dashed: false,
        }
    }

    fn dashed(label: impl Into<String>, color: &'static str, points: Vec<f64>) -> Self {
        Dataset {
            dashed: true,
            ..Dataset::solid(label, color, points)
        }
    }
}

/// Mapped chart bundle ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub suggested_min: Option<f64>,
    pub suggested_max: Option<f64>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.datasets.iter().all(|d| d.points.is_empty())
    }
}

const MIN_BAND_COLOR: &str = "rgba(255,89,89,1)";
const VALUE_COLOR: &str = "rgba(53,94,142,1)";
const MAX_BAND_COLOR: &str = "rgba(196,0,0,1)";

const SECONDARY_MIN_COLOR: &str = "rgba(255,115,0,1)";
const SECONDARY_VALUE_COLOR: &str = "rgba(255,81,0,1)";
const SECONDARY_MAX_COLOR: &str = "rgba(255,47,0,1)";
const PRIMARY_MIN_COLOR: &str = "rgba(174,198,225,1)";
const PRIMARY_MAX_COLOR: &str = "rgba(30,53,81,1)";

/// A measurement's reading as a point. Absent or non-numeric readings map to
/// zero, not to a gap; the chart dips to zero rather than breaking the line.
fn value_or_zero(m: &Measurement) -> f64 {
    m.numeric_value().unwrap_or(0.0)
}

fn map_values(series: &[Measurement]) -> Vec<f64> {
    series.iter().map(value_or_zero).collect()
}

fn map_min_band(series: &[Measurement]) -> Vec<f64> {
    series.iter().map(|m| m.min_value.unwrap_or(0.0)).collect()
}

fn map_max_band(series: &[Measurement]) -> Vec<f64> {
    series.iter().map(|m| m.max_value.unwrap_or(0.0)).collect()
}

fn map_time_labels(series: &[Measurement]) -> Vec<String> {
    series
        .iter()
        .map(|m| date_time_dd_mm_yyyy_hh_mm(m.data_time))
        .collect()
}

/// The current reading of a chronologically ordered series.
pub fn last_measurement(series: &[Measurement]) -> Option<&Measurement> {
    series.last()
}

/// Line chart for one attribute: dashed min band, the value series, dashed
/// max band, sharing a time axis.
pub fn measurement_chart(series: &[Measurement], attribute_name: &str) -> ChartData {
    ChartData {
        kind: ChartKind::Line,
        labels: map_time_labels(series),
        datasets: vec![
            Dataset::dashed("Min", MIN_BAND_COLOR, map_min_band(series)),
            Dataset::solid(attribute_name, VALUE_COLOR, map_values(series)),
            Dataset::dashed("Max", MAX_BAND_COLOR, map_max_band(series)),
        ],
        suggested_min: None,
        suggested_max: None,
    }
}

/// Join two chronologically ordered series on `data_time`. Only timestamps
/// present in both series survive; nothing is assumed about the inputs
/// being index-aligned.
pub fn join_by_time<'a>(
    a: &'a [Measurement],
    b: &'a [Measurement],
) -> Vec<(&'a Measurement, &'a Measurement)> {
    let mut joined = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].data_time.cmp(&b[j].data_time) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                joined.push((&a[i], &b[j]));
                i += 1;
                j += 1;
            }
        }
    }
    joined
}

/// Line chart for a paired attribute (e.g. systolic/diastolic blood
/// pressure): min/value/max per side, secondary series first. The two series
/// are joined by timestamp before mapping.
pub fn paired_measurement_chart(
    primary: &[Measurement],
    secondary: &[Measurement],
    primary_name: &str,
    secondary_name: &str,
    suggested_min: Option<f64>,
    suggested_max: Option<f64>,
) -> ChartData {
    let joined = join_by_time(primary, secondary);
    let primary_rows: Vec<Measurement> = joined.iter().map(|(p, _)| (*p).clone()).collect();
    let secondary_rows: Vec<Measurement> = joined.iter().map(|(_, s)| (*s).clone()).collect();

    ChartData {
        kind: ChartKind::Line,
        labels: map_time_labels(&primary_rows),
        datasets: vec![
            Dataset::dashed(
                format!("{} min", secondary_name),
                SECONDARY_MIN_COLOR,
                map_min_band(&secondary_rows),
            ),
            Dataset::solid(
                secondary_name,
                SECONDARY_VALUE_COLOR,
                map_values(&secondary_rows),
            ),
            Dataset::dashed(
                format!("{} max", secondary_name),
                SECONDARY_MAX_COLOR,
                map_max_band(&secondary_rows),
            ),
            Dataset::dashed(
                format!("{} min", primary_name),
                PRIMARY_MIN_COLOR,
                map_min_band(&primary_rows),
            ),
            Dataset::solid(primary_name, VALUE_COLOR, map_values(&primary_rows)),
            Dataset::dashed(
                format!("{} max", primary_name),
                PRIMARY_MAX_COLOR,
                map_max_band(&primary_rows),
            ),
        ],
        suggested_min,
        suggested_max,
    }
}

/// Bar chart for questionnaire responses: each point is the ternary flag
/// code of the decoded status, colored per point. Undecodable values plot
/// as neutral.
pub fn questionnaire_chart(series: &[Measurement]) -> ChartData {
    let flags: Vec<FlagCode> = series
        .iter()
        .map(|m| {
            QuestionnaireResponse::decode(m)
                .map(|q| FlagCode::from_status(&q.status))
                .unwrap_or(FlagCode::Neutral)
        })
        .collect();

    ChartData {
        kind: ChartKind::Bar,
        labels: map_time_labels(series),
        datasets: vec![Dataset {
            label: String::new(),
            points: flags.iter().map(|f| f.code() as f64).collect(),
            color: FlagCode::Neutral.color(),
            point_colors: flags.iter().map(|f| f.color()).collect(),
            dashed: false,
        }],
        suggested_min: Some(-1.0),
        suggested_max: Some(1.0),
    }
}

/// Free-text tooltip lines for a questionnaire measurement: the conversation
/// transcript followed by the advice given.
pub fn questionnaire_tooltip(measurement: &Measurement) -> Vec<String> {
    let mut lines = vec!["Conversation:".to_string()];
    if let Some(q) = QuestionnaireResponse::decode(measurement) {
        lines.extend(q.conversation);
        lines.push(String::new());
        lines.push("Advice:".to_string());
        lines.push(q.advice);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AlertStatus;

    fn m(data_time: i64, value: &str) -> Measurement {
        Measurement {
            data_time,
            value: value.to_string(),
            min_value: None,
            max_value: None,
            alert_status: AlertStatus::None,
        }
    }

    fn m_banded(data_time: i64, value: &str, min: f64, max: f64) -> Measurement {
        Measurement {
            min_value: Some(min),
            max_value: Some(max),
            ..m(data_time, value)
        }
    }

    #[test]
    fn test_missing_numeric_fields_map_to_zero() {
        let series = vec![m(1000, "not a number"), m_banded(2000, "72", 60.0, 90.0)];
        let chart = measurement_chart(&series, "Pulse");

        assert_eq!(chart.datasets[0].points, vec![0.0, 60.0]); // min band
        assert_eq!(chart.datasets[1].points, vec![0.0, 72.0]); // values
        assert_eq!(chart.datasets[2].points, vec![0.0, 90.0]); // max band
    }

    #[test]
    fn test_labels_align_with_points() {
        let series = vec![m_banded(1520431500000, "72", 60.0, 90.0)];
        let chart = measurement_chart(&series, "Pulse");

        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.labels, vec!["07/03/2018 14:05"]);
        for dataset in &chart.datasets {
            assert_eq!(dataset.points.len(), chart.labels.len());
        }
        assert_eq!(chart.datasets[1].label, "Pulse");
        assert!(chart.datasets[0].dashed);
        assert!(!chart.datasets[1].dashed);
    }

    #[test]
    fn test_empty_series_maps_to_empty_chart() {
        let chart = measurement_chart(&[], "Weight");
        assert!(chart.is_empty());
        assert!(last_measurement(&[]).is_none());
    }

    #[test]
    fn test_join_by_time_drops_unmatched_timestamps() {
        let a = vec![m(1000, "120"), m(2000, "118"), m(4000, "122")];
        let b = vec![m(1000, "80"), m(3000, "79"), m(4000, "81")];

        let joined = join_by_time(&a, &b);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].0.data_time, 1000);
        assert_eq!(joined[0].1.value, "80");
        assert_eq!(joined[1].0.data_time, 4000);
        assert_eq!(joined[1].1.value, "81");
    }

    #[test]
    fn test_paired_chart_shape() {
        let systolic = vec![m_banded(1000, "120", 90.0, 140.0), m(5000, "125")];
        let diastolic = vec![m_banded(1000, "80", 60.0, 90.0), m(2000, "82")];

        let chart = paired_measurement_chart(
            &systolic,
            &diastolic,
            "Systolic",
            "Diastolic",
            Some(40.0),
            Some(200.0),
        );

        // Only the shared timestamp survives the join.
        assert_eq!(chart.labels.len(), 1);
        assert_eq!(chart.datasets.len(), 6);
        assert_eq!(chart.datasets[1].label, "Diastolic");
        assert_eq!(chart.datasets[1].points, vec![80.0]);
        assert_eq!(chart.datasets[4].label, "Systolic");
        assert_eq!(chart.datasets[4].points, vec![120.0]);
        assert_eq!(chart.suggested_min, Some(40.0));
        assert_eq!(chart.suggested_max, Some(200.0));
    }

    #[test]
    fn test_questionnaire_ternary_mapping() {
        let series = vec![
            m(1000, r#"{"status":"GREEN_FLAG"}"#),
            m(2000, r#"{"status":"RED_FLAG"}"#),
            m(3000, r#"{"status":"AMBER_FLAG"}"#),
            m(4000, "not json"),
        ];
        let chart = questionnaire_chart(&series);

        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.datasets[0].points, vec![1.0, -1.0, 0.0, 0.0]);
        assert_eq!(chart.datasets[0].point_colors.len(), 4);
        assert_eq!(chart.datasets[0].point_colors[0], "rgba(54,130,21,1)");
        assert_eq!(chart.datasets[0].point_colors[1], "rgba(196,0,0,1)");
        assert_eq!(chart.suggested_min, Some(-1.0));
        assert_eq!(chart.suggested_max, Some(1.0));
    }

    #[test]
    fn test_questionnaire_tooltip_lines() {
        let q = m(
            1000,
            r#"{"status":"RED_FLAG","conversation":["How are you?","Worse"],"advice":"Call your nurse"}"#,
        );
        let lines = questionnaire_tooltip(&q);
        assert_eq!(
            lines,
            vec![
                "Conversation:",
                "How are you?",
                "Worse",
                "",
                "Advice:",
                "Call your nurse",
            ]
        );
    }
}
