pub mod biomarker;
pub mod upload;
