use serde::{Deserialize, Serialize};

use crate::capabilities::{SessionOutput, StoreError};
use crate::model::{RouteParams, UnitSystem};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    // EVENTS FROM THE SHELL
    ScreenOpened { params: RouteParams },
    AgeChanged(String),
    WeightChanged(String),
    HeightChanged(String),
    UnitSelected(UnitSystem),
    SaveRequested,
    DialogDismissed,

    // EVENTS LOCAL TO THE CORE
    #[serde(skip)]
    SessionResolved(SessionOutput),
    #[serde(skip)]
    ProfileWritten(Result<(), StoreError>),
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ScreenOpened { .. } => "screen_opened",
            Self::AgeChanged(_) => "age_changed",
            Self::WeightChanged(_) => "weight_changed",
            Self::HeightChanged(_) => "height_changed",
            Self::UnitSelected(_) => "unit_selected",
            Self::SaveRequested => "save_requested",
            Self::DialogDismissed => "dialog_dismissed",
            Self::SessionResolved(_) => "session_resolved",
            Self::ProfileWritten(_) => "profile_written",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::AgeChanged(_)
                | Self::WeightChanged(_)
                | Self::HeightChanged(_)
                | Self::UnitSelected(_)
                | Self::SaveRequested
                | Self::DialogDismissed
        )
    }
}
