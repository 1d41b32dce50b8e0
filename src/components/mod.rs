pub mod analysis_form;
pub mod history_view;
pub mod result_view;

pub use analysis_form::AnalysisForm;
pub use history_view::HistoryView;
pub use result_view::ResultView;
