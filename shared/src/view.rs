//! Screen state as the shell draws it, plus the user-facing copy.

use serde::{Deserialize, Serialize};

use crate::model::{Dialog, FieldId, Model, UnitSystem};

pub const SCREEN_TITLE: &str = "Cuéntanos un poco de ti";
pub const SAVE_LABEL: &str = "Guardar";
pub const CONFIRM_LABEL: &str = "OK";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Keyboard {
    Numeric,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitOptionView {
    pub unit: UnitSystem,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldView {
    pub id: FieldId,
    pub placeholder: String,
    pub value: String,
    pub keyboard: Keyboard,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveButtonView {
    pub label: String,
    pub enabled: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DialogView {
    pub kind: Dialog,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
}

impl From<Dialog> for DialogView {
    fn from(kind: Dialog) -> Self {
        let (title, message) = match kind {
            Dialog::IncompleteFields => {
                ("Campos incompletos", "Por favor completa todos los campos.")
            }
            Dialog::Unauthenticated => ("Error", "No se pudo obtener el usuario autenticado."),
            Dialog::SaveSucceeded => ("Éxito", "Datos guardados exitosamente."),
            Dialog::SaveFailed => (
                "Error",
                "Hubo un error al guardar tus datos. Intenta nuevamente.",
            ),
        };
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            confirm_label: CONFIRM_LABEL.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub title: String,
    pub unit_options: Vec<UnitOptionView>,
    pub fields: Vec<FieldView>,
    pub save_button: SaveButtonView,
    pub can_save: bool,
    pub is_saving: bool,
    pub dialog: Option<DialogView>,
}

fn placeholder(field: FieldId, unit: UnitSystem) -> String {
    match field {
        FieldId::Age => "Edad".into(),
        FieldId::Weight => format!("Peso ({})", unit.weight_suffix()),
        FieldId::Height => format!("Altura ({})", unit.height_suffix()),
    }
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let draft = &model.draft;

        let unit_options = UnitSystem::ALL
            .into_iter()
            .map(|unit| UnitOptionView {
                unit,
                label: unit.label().into(),
                selected: unit == draft.unit,
            })
            .collect();

        let fields = [FieldId::Age, FieldId::Weight, FieldId::Height]
            .into_iter()
            .map(|id| FieldView {
                id,
                placeholder: placeholder(id, draft.unit),
                value: draft.value(id).to_string(),
                keyboard: Keyboard::Numeric,
            })
            .collect();

        Self {
            title: SCREEN_TITLE.into(),
            unit_options,
            fields,
            save_button: SaveButtonView {
                label: SAVE_LABEL.into(),
                enabled: model.save_enabled(),
            },
            can_save: draft.can_save(),
            is_saving: model.is_saving(),
            dialog: model.open_dialog().map(DialogView::from),
        }
    }
}
