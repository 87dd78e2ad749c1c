use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::GameType;

/// Entry of the question service's category listing
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryInfo {
    pub category: GameType,
    pub question_count: u32,
    pub multiple_choice: bool,
}

impl From<GameType> for CategoryInfo {
    fn from(category: GameType) -> Self {
        CategoryInfo {
            category,
            question_count: category.question_count() as u32,
            multiple_choice: category.is_multiple_choice(),
        }
    }
}
