use crate::workout::{ActivityType, Coords};

/// Visibility of the new-workout form and the map location it was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    Visible {
        activity: ActivityType,
        pending: Coords,
    },
}

impl FormState {
    /// A map click. Keeps the selected activity if the form is already open.
    pub fn show(&mut self, at: Coords) {
        let activity = self.activity().unwrap_or_default();
        *self = FormState::Visible { activity, pending: at };
    }

    pub fn select_activity(&mut self, selected: ActivityType) {
        if let FormState::Visible { activity, .. } = self {
            *activity = selected;
        }
    }

    pub fn hide(&mut self) {
        *self = FormState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, FormState::Visible { .. })
    }

    pub fn activity(&self) -> Option<ActivityType> {
        match self {
            FormState::Visible { activity, .. } => Some(*activity),
            FormState::Hidden => None,
        }
    }

    pub fn pending(&self) -> Option<Coords> {
        match self {
            FormState::Visible { pending, .. } => Some(*pending),
            FormState::Hidden => None,
        }
    }
}
