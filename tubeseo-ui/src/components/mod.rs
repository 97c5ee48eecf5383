mod analysis_display;
mod content_form;
mod copy_button;
mod error_display;
mod loading_spinner;

pub use analysis_display::AnalysisDisplay;
pub use content_form::ContentForm;
pub use copy_button::{copy_to_clipboard, CopyButton};
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
