//! Yes/no questions the engine hands to its caller.
//!
//! The engine never blocks on an answer: it records the open request and
//! acts only when the caller resolves it by id.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfirmKind {
    DeleteItem { item_id: String },
    ResetCount { item_id: String },
    /// The last item of a bounded sequence was completed or passed.
    FinishSequence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    pub id: u64,
    #[serde(flatten)]
    pub kind: ConfirmKind,
}

impl ConfirmationRequest {
    /// Prompt text shown to the user.
    pub fn prompt(&self) -> &'static str {
        match self.kind {
            ConfirmKind::DeleteItem { .. } => "هل أنت متأكد من حذف هذا الذكر؟",
            ConfirmKind::ResetCount { .. } => "تصفير العداد الحالي؟",
            ConfirmKind::FinishSequence => "أتممت هذا الباب بحمد الله، هل تريد العودة للقائمة؟",
        }
    }
}
