use tracing::{debug, error, info, warn};

use crate::capabilities::{Capabilities, Destination, DocumentPath};
use crate::event::Event;
use crate::model::{Dialog, FormDraft, Model, SaveFlow, UserProfileRecord};
use crate::view::ViewModel;
use crate::{AppError, ErrorKind, USERS_COLLECTION};

#[derive(Default)]
pub struct App;

impl App {
    fn write_profile(model: &mut Model, caps: &Capabilities, user_id: &str, snapshot: &FormDraft) {
        let path = match DocumentPath::new(USERS_COLLECTION, user_id) {
            Ok(path) => path,
            Err(e) => {
                let error = AppError::from(e).with_context("user_id", user_id);
                error!(code = error.code(), %error, "cannot address profile document");
                model.set_error(error);
                model.flow = SaveFlow::Confirming(Dialog::SaveFailed);
                return;
            }
        };

        let record = UserProfileRecord::build(&model.params, snapshot);
        debug!(
            collection = path.collection(),
            document = path.id(),
            unit = ?snapshot.unit,
            "writing profile"
        );

        caps.document_store
            .set(&path, record.to_document(), Event::ProfileWritten);
    }

    fn edits_allowed(model: &Model) -> bool {
        model.flow != SaveFlow::Navigating
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        debug!(event = event.name(), user = event.is_user_initiated(), "update");

        match event {
            Event::ScreenOpened { params } => {
                *model = Model {
                    params,
                    ..Model::default()
                };
            }

            Event::AgeChanged(value) => {
                if !Self::edits_allowed(model) {
                    return;
                }
                model.draft.set_age(value);
            }

            Event::WeightChanged(value) => {
                if !Self::edits_allowed(model) {
                    return;
                }
                model.draft.set_weight(value);
            }

            Event::HeightChanged(value) => {
                if !Self::edits_allowed(model) {
                    return;
                }
                model.draft.set_height(value);
            }

            Event::UnitSelected(unit) => {
                if !Self::edits_allowed(model) {
                    return;
                }
                model.draft.select_unit(unit);
            }

            Event::SaveRequested => {
                if model.flow != SaveFlow::Idle {
                    debug!(flow = ?model.flow, "save ignored");
                    return;
                }

                if model.draft.can_save() {
                    model.clear_error();
                    model.flow = SaveFlow::Saving {
                        snapshot: model.draft.clone(),
                    };
                    caps.session.current_user(Event::SessionResolved);
                } else {
                    let missing = model.draft.missing_fields();
                    info!(?missing, "save blocked by empty fields");
                    model.flow = SaveFlow::Confirming(Dialog::IncompleteFields);
                }
            }

            Event::SessionResolved(output) => {
                let SaveFlow::Saving { snapshot } = &model.flow else {
                    warn!(flow = ?model.flow, "session resolved outside a save");
                    return;
                };
                let snapshot = snapshot.clone();

                if let Some(user_id) = output.user_id() {
                    Self::write_profile(model, caps, user_id, &snapshot);
                } else {
                    let error = AppError::new(ErrorKind::Authentication, "No authenticated user");
                    warn!(code = error.code(), "save attempted without a session");
                    model.set_error(error);
                    model.flow = SaveFlow::Confirming(Dialog::Unauthenticated);
                }
            }

            Event::ProfileWritten(result) => {
                if !model.is_saving() {
                    warn!(flow = ?model.flow, "write completed outside a save");
                    return;
                }

                match result {
                    Ok(()) => {
                        info!("profile saved");
                        model.flow = SaveFlow::Confirming(Dialog::SaveSucceeded);
                    }
                    Err(e) => {
                        let error = AppError::from(e);
                        error!(
                            code = error.code(),
                            retryable = error.is_retryable(),
                            %error,
                            "profile write failed"
                        );
                        model.set_error(error);
                        model.flow = SaveFlow::Confirming(Dialog::SaveFailed);
                    }
                }
            }

            Event::DialogDismissed => match model.flow {
                SaveFlow::Confirming(Dialog::SaveSucceeded) => {
                    model.flow = SaveFlow::Navigating;
                    info!(destination = Destination::Home.route_name(), "leaving profile setup");
                    caps.navigation.navigate_to(Destination::Home);
                }
                SaveFlow::Confirming(_) => {
                    model.flow = SaveFlow::Idle;
                }
                _ => {
                    debug!(flow = ?model.flow, "no dialog to dismiss");
                    return;
                }
            },
        }

        caps.render.render();
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel::from(model)
    }
}
