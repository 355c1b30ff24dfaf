mod common;

use assert_matches::assert_matches;
use common::*;
use shared::capabilities::{Destination, DocumentOperation, NavigationOperation, SessionOutput};
use shared::{Dialog, Event, Model, SaveFlow, UnitSystem};

#[test]
fn metric_profile_is_written_and_user_sent_home() {
    let app = Tester::default();
    let mut model = Model::default();

    open_screen(&app, &mut model, Some("male"), Some("lose_weight"));
    fill(&app, &mut model, "30", "80", "1.8");
    assert!(model.save_enabled());

    // 1. Save asks the shell who is signed in
    let update = app.update(Event::SaveRequested, &mut model);
    assert!(has_render(&update.effects));
    assert!(model.is_saving());
    assert!(!model.save_enabled());

    let mut requests = session_requests(update.effects);
    assert_eq!(requests.len(), 1);
    let mut session = requests.remove(0);

    // 2. Signed in -> full document write at users/<uid>
    let resolved = app
        .resolve(&mut session, SessionOutput::SignedIn { user_id: "uid-123".into() })
        .expect("session request resolves");
    let effects = run_events(&app, &mut model, resolved.events);

    let mut writes = store_requests(effects);
    assert_eq!(writes.len(), 1);
    let mut write = writes.remove(0);
    assert_matches!(&write.operation, DocumentOperation::Set { path, fields } => {
        assert_eq!(path, "users/uid-123");
        let expected = serde_json::json!({
            "gender": "male",
            "objective": "lose_weight",
            "age": "30",
            "weight": "80 kg",
            "height": "1.8 m",
        });
        assert_eq!(serde_json::Value::Object(fields.clone()), expected);
    });

    // 3. Write succeeds -> confirmation dialog
    let written = app.resolve(&mut write, Ok(())).expect("write resolves");
    let effects = run_events(&app, &mut model, written.events);
    assert!(has_render(&effects));
    assert_eq!(model.flow, SaveFlow::Confirming(Dialog::SaveSucceeded));

    let view = app.view(&model);
    let dialog = view.dialog.expect("success dialog shown");
    assert_eq!(dialog.title, "Éxito");
    assert_eq!(dialog.message, "Datos guardados exitosamente.");

    // 4. Dismissal navigates home once
    let update = app.update(Event::DialogDismissed, &mut model);
    let navigations = navigation_requests(update.effects);
    assert_eq!(navigations.len(), 1);
    assert_eq!(
        navigations[0].operation,
        NavigationOperation::NavigateTo { destination: Destination::Home }
    );
    assert_eq!(model.flow, SaveFlow::Navigating);

    // A second acknowledgment must not navigate again
    let update = app.update(Event::DialogDismissed, &mut model);
    assert!(navigation_requests(update.effects).is_empty());
}

#[test]
fn missing_route_params_are_stored_as_placeholder() {
    let app = Tester::default();
    let mut model = Model::default();

    open_screen(&app, &mut model, None, None);
    fill(&app, &mut model, "25", "150", "5.5");
    app.update(Event::UnitSelected(UnitSystem::Imperial), &mut model);

    let update = app.update(Event::SaveRequested, &mut model);
    let mut session = session_requests(update.effects).remove(0);
    let resolved = app
        .resolve(&mut session, SessionOutput::SignedIn { user_id: "u".into() })
        .expect("session request resolves");

    let writes = store_requests(run_events(&app, &mut model, resolved.events));
    assert_matches!(&writes[0].operation, DocumentOperation::Set { fields, .. } => {
        assert_eq!(fields["gender"], "N/A");
        assert_eq!(fields["objective"], "N/A");
        assert_eq!(fields["weight"], "150 lbs");
        assert_eq!(fields["height"], "5.5 ft");
    });
}

#[test]
fn incomplete_form_shows_notice_and_never_touches_session() {
    let app = Tester::default();
    let mut model = Model::default();

    open_screen(&app, &mut model, Some("female"), None);
    fill(&app, &mut model, "30", "", "1.6");
    assert!(!model.save_enabled());

    let update = app.update(Event::SaveRequested, &mut model);
    assert!(session_requests(update.effects).is_empty());
    assert_eq!(model.flow, SaveFlow::Confirming(Dialog::IncompleteFields));

    let view = app.view(&model);
    assert_eq!(
        view.dialog.map(|d| d.title),
        Some("Campos incompletos".to_string())
    );

    // Acknowledging returns control to the form with the draft intact
    app.update(Event::DialogDismissed, &mut model);
    assert_eq!(model.flow, SaveFlow::Idle);
    assert_eq!(model.draft.age, "30");
    assert_eq!(model.draft.height, "1.6");
}

#[test]
fn unit_toggle_only_changes_labels() {
    let app = Tester::default();
    let mut model = Model::default();

    open_screen(&app, &mut model, None, None);
    fill(&app, &mut model, "30", "80", "1.8");

    app.update(Event::UnitSelected(UnitSystem::Imperial), &mut model);
    let view = app.view(&model);
    let values: Vec<_> = view.fields.iter().map(|f| f.value.as_str()).collect();
    assert_eq!(values, ["30", "80", "1.8"]);
    assert_eq!(view.fields[1].placeholder, "Peso (lbs)");
    assert_eq!(view.fields[2].placeholder, "Altura (ft)");

    app.update(Event::UnitSelected(UnitSystem::Metric), &mut model);
    assert_eq!(model.draft.weight, "80");
    assert_eq!(app.view(&model).fields[1].placeholder, "Peso (kg)");
}

#[test]
fn repeated_save_presses_issue_one_session_lookup() {
    let app = Tester::default();
    let mut model = Model::default();

    open_screen(&app, &mut model, None, None);
    fill(&app, &mut model, "30", "80", "1.8");

    let first = app.update(Event::SaveRequested, &mut model);
    let second = app.update(Event::SaveRequested, &mut model);

    assert_eq!(session_requests(first.effects).len(), 1);
    assert!(session_requests(second.effects).is_empty());
    assert!(app.view(&model).is_saving);
}

#[test]
fn reopening_screen_discards_draft() {
    let app = Tester::default();
    let mut model = Model::default();

    open_screen(&app, &mut model, Some("male"), None);
    fill(&app, &mut model, "30", "80", "1.8");
    app.update(Event::UnitSelected(UnitSystem::Imperial), &mut model);

    open_screen(&app, &mut model, Some("female"), None);
    assert_eq!(model.draft.age, "");
    assert_eq!(model.draft.unit, UnitSystem::Metric);
    assert_eq!(model.params.gender.as_deref(), Some("female"));
}

#[test]
fn edits_after_leaving_for_home_are_ignored() {
    let app = Tester::default();
    let mut model = Model::default();

    open_screen(&app, &mut model, Some("male"), None);
    fill(&app, &mut model, "30", "80", "1.8");

    let mut write = save_until_write(&app, &mut model, "uid-9");
    let written = app.resolve(&mut write, Ok(())).expect("write resolves");
    run_events(&app, &mut model, written.events);
    app.update(Event::DialogDismissed, &mut model);
    assert_eq!(model.flow, SaveFlow::Navigating);

    let before = model.draft.clone();
    let update = app.update(Event::AgeChanged("99".into()), &mut model);
    assert!(!has_render(&update.effects));
    let update = app.update(Event::UnitSelected(UnitSystem::Imperial), &mut model);
    assert!(!has_render(&update.effects));

    assert_eq!(model.draft, before);
    assert_eq!(model.flow, SaveFlow::Navigating);
}

#[test]
fn edits_during_write_do_not_change_written_record() {
    let app = Tester::default();
    let mut model = Model::default();

    open_screen(&app, &mut model, None, Some("lose_weight"));
    fill(&app, &mut model, "30", "80", "1.8");

    let update = app.update(Event::SaveRequested, &mut model);
    let mut session = session_requests(update.effects).remove(0);

    // The form stays editable while the round-trip is in flight
    app.update(Event::WeightChanged("95".into()), &mut model);
    app.update(Event::UnitSelected(UnitSystem::Imperial), &mut model);
    assert_eq!(model.draft.weight, "95");

    // No dialog is open yet, so an acknowledgment does nothing
    let update = app.update(Event::DialogDismissed, &mut model);
    assert!(!has_render(&update.effects));
    assert!(model.is_saving());

    let resolved = app
        .resolve(&mut session, SessionOutput::SignedIn { user_id: "uid".into() })
        .expect("session request resolves");
    let writes = store_requests(run_events(&app, &mut model, resolved.events));
    assert_matches!(&writes[0].operation, DocumentOperation::Set { fields, .. } => {
        assert_eq!(fields["weight"], "80 kg");
        assert_eq!(fields["height"], "1.8 m");
    });
}

#[test]
fn save_ignored_while_incomplete_notice_is_open() {
    let app = Tester::default();
    let mut model = Model::default();

    open_screen(&app, &mut model, None, None);
    fill(&app, &mut model, "30", "80", "");
    app.update(Event::SaveRequested, &mut model);
    assert_eq!(model.open_dialog(), Some(Dialog::IncompleteFields));

    // Completing the form behind the notice still cannot start a save
    app.update(Event::HeightChanged("1.8".into()), &mut model);
    let update = app.update(Event::SaveRequested, &mut model);
    assert!(session_requests(update.effects).is_empty());
    assert_eq!(model.open_dialog(), Some(Dialog::IncompleteFields));
}
