//! UI Components
//!
//! Reusable Leptos components for the clinician dashboard.

pub mod banner;
pub mod chart;
pub mod loading;
pub mod nav;
pub mod panel;
pub mod patient_tile;
pub mod recent_value;
pub mod threshold_editor;

pub use banner::Banner;
pub use chart::MeasurementChart;
pub use loading::Loading;
pub use nav::Nav;
pub use panel::{MeasurementPanel, PairedMeasurementPanel, QuestionnairePanel};
pub use patient_tile::PatientTile;
pub use recent_value::{PairedRecentValue, RecentValue};
pub use threshold_editor::ThresholdEditorView;
