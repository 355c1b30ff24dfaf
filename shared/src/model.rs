use serde::{Deserialize, Serialize};

use crate::capabilities::DocumentFields;
use crate::{AppError, MISSING_PARAM_PLACEHOLDER};

#[derive(Default, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub const ALL: [Self; 2] = [Self::Metric, Self::Imperial];

    #[must_use]
    pub const fn weight_suffix(self) -> &'static str {
        match self {
            Self::Metric => "kg",
            Self::Imperial => "lbs",
        }
    }

    #[must_use]
    pub const fn height_suffix(self) -> &'static str {
        match self {
            Self::Metric => "m",
            Self::Imperial => "ft",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Metric => "Métrico (kg, m)",
            Self::Imperial => "Imperial (lbs, ft)",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Age,
    Weight,
    Height,
}

/// What the user has typed so far. Values are kept verbatim; the unit only
/// decides which suffix gets appended when the profile is saved.
#[derive(Default, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormDraft {
    pub age: String,
    pub weight: String,
    pub height: String,
    pub unit: UnitSystem,
}

impl FormDraft {
    pub fn set_age(&mut self, value: impl Into<String>) {
        self.age = value.into();
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.weight = value.into();
    }

    pub fn set_height(&mut self, value: impl Into<String>) {
        self.height = value.into();
    }

    pub fn select_unit(&mut self, unit: UnitSystem) {
        self.unit = unit;
    }

    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Age => &self.age,
            FieldId::Weight => &self.weight,
            FieldId::Height => &self.height,
        }
    }

    /// True once age, weight and height all hold some text. Whitespace counts.
    pub fn can_save(&self) -> bool {
        !self.age.is_empty() && !self.weight.is_empty() && !self.height.is_empty()
    }

    pub fn missing_fields(&self) -> Vec<FieldId> {
        [FieldId::Age, FieldId::Weight, FieldId::Height]
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }
}

/// Answers carried over from the gender and objective screens.
#[derive(Default, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RouteParams {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub objective: Option<String>,
}

impl RouteParams {
    pub fn new(gender: Option<String>, objective: Option<String>) -> Self {
        Self { gender, objective }
    }

    pub fn gender_or_default(&self) -> &str {
        or_placeholder(self.gender.as_deref())
    }

    pub fn objective_or_default(&self) -> &str {
        or_placeholder(self.objective.as_deref())
    }
}

fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => MISSING_PARAM_PLACEHOLDER,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserProfileRecord {
    pub gender: String,
    pub objective: String,
    pub age: String,
    pub weight: String,
    pub height: String,
}

impl UserProfileRecord {
    pub fn build(params: &RouteParams, draft: &FormDraft) -> Self {
        Self {
            gender: params.gender_or_default().to_string(),
            objective: params.objective_or_default().to_string(),
            age: draft.age.clone(),
            weight: format!("{} {}", draft.weight, draft.unit.weight_suffix()),
            height: format!("{} {}", draft.height, draft.unit.height_suffix()),
        }
    }

    pub fn to_document(&self) -> DocumentFields {
        let mut fields = DocumentFields::new();
        fields.insert("gender".into(), self.gender.clone().into());
        fields.insert("objective".into(), self.objective.clone().into());
        fields.insert("age".into(), self.age.clone().into());
        fields.insert("weight".into(), self.weight.clone().into());
        fields.insert("height".into(), self.height.clone().into());
        fields
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Dialog {
    IncompleteFields,
    Unauthenticated,
    SaveSucceeded,
    SaveFailed,
}

/// Where the screen is in the save round-trip.
///
/// `Confirming` blocks further saves until the shell reports the dialog was
/// acknowledged. `Navigating` is terminal for this screen instance.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub enum SaveFlow {
    #[default]
    Idle,
    Saving {
        snapshot: FormDraft,
    },
    Confirming(Dialog),
    Navigating,
}

#[derive(Default, Debug)]
pub struct Model {
    pub params: RouteParams,
    pub draft: FormDraft,
    pub flow: SaveFlow,
    pub last_error: Option<AppError>,
}

impl Model {
    pub fn is_saving(&self) -> bool {
        matches!(self.flow, SaveFlow::Saving { .. })
    }

    pub fn open_dialog(&self) -> Option<Dialog> {
        match self.flow {
            SaveFlow::Confirming(dialog) => Some(dialog),
            _ => None,
        }
    }

    /// Whether the save control accepts presses right now.
    pub fn save_enabled(&self) -> bool {
        self.draft.can_save() && self.flow == SaveFlow::Idle
    }

    pub fn set_error(&mut self, error: AppError) {
        self.last_error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
