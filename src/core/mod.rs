pub mod api;
pub mod error_report;
pub mod format;
pub mod fragment;
pub mod model;
pub mod notifications;
pub mod stage;
pub mod stage_form;
pub mod timeline;
