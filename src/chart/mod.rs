//! Chart Pipeline
//!
//! Measurement series are mapped into a library-agnostic bundle by [`data`]
//! and projected onto a canvas by [`draw`].

pub mod data;
pub mod draw;

pub use data::{
    join_by_time, last_measurement, measurement_chart, paired_measurement_chart,
    questionnaire_chart, questionnaire_tooltip, ChartData, ChartKind, Dataset,
};
