pub mod catalog;
pub mod core;

pub use crate::core::api::{AttachmentApi, PhaseApi, PortalClient};
pub use crate::core::error_report::ErrorReport;
pub use crate::core::format::{PhaseCardAttr, format_number_with_commas, format_phase_card_attr};
pub use crate::core::fragment::{FragmentTarget, parse_fragment};
pub use crate::core::model::{
    Attachment, AttachmentUpdate, Feed, NewAttachment, Phase, PhaseStatus, Post, Product,
    ProductTemplate,
};
pub use crate::core::notifications::Notification;
pub use crate::core::stage::{StageState, StageTab, TabFlags, unseen_tab_flags};
pub use crate::core::stage_form::{PhaseUpdate, StageForm, UpdateOutcome};
pub use crate::core::timeline::{Milestone, PhaseActualData, Timeline, phase_actual_data};

#[cfg(feature = "gui")]
pub mod gui;
