#![allow(dead_code)]

use crux_core::testing::AppTester;
use crux_core::Request;
use shared::capabilities::{
    DocumentOperation, NavigationOperation, SessionOperation, SessionOutput,
};
use shared::{App, Effect, Event, Model, RouteParams};

pub type Tester = AppTester<App, Effect>;

pub fn open_screen(app: &Tester, model: &mut Model, gender: Option<&str>, objective: Option<&str>) {
    let params = RouteParams::new(gender.map(Into::into), objective.map(Into::into));
    app.update(Event::ScreenOpened { params }, model);
}

pub fn fill(app: &Tester, model: &mut Model, age: &str, weight: &str, height: &str) {
    app.update(Event::AgeChanged(age.into()), model);
    app.update(Event::WeightChanged(weight.into()), model);
    app.update(Event::HeightChanged(height.into()), model);
}

/// Feeds events produced by resolved effects back into the app, returning the
/// effects they in turn requested.
pub fn run_events(app: &Tester, model: &mut Model, events: Vec<Event>) -> Vec<Effect> {
    let mut effects = Vec::new();
    for event in events {
        let update = app.update(event, model);
        effects.extend(update.effects);
    }
    effects
}

pub fn session_requests(effects: Vec<Effect>) -> Vec<Request<SessionOperation>> {
    effects
        .into_iter()
        .filter_map(|e| match e {
            Effect::Session(request) => Some(request),
            _ => None,
        })
        .collect()
}

pub fn store_requests(effects: Vec<Effect>) -> Vec<Request<DocumentOperation>> {
    effects
        .into_iter()
        .filter_map(|e| match e {
            Effect::DocumentStore(request) => Some(request),
            _ => None,
        })
        .collect()
}

pub fn navigation_requests(effects: Vec<Effect>) -> Vec<Request<NavigationOperation>> {
    effects
        .into_iter()
        .filter_map(|e| match e {
            Effect::Navigation(request) => Some(request),
            _ => None,
        })
        .collect()
}

pub fn has_render(effects: &[Effect]) -> bool {
    effects.iter().any(|e| matches!(e, Effect::Render(_)))
}

/// Presses save and signs in as `user_id`, returning the pending document write.
pub fn save_until_write(app: &Tester, model: &mut Model, user_id: &str) -> Request<DocumentOperation> {
    let update = app.update(Event::SaveRequested, model);
    let mut session = session_requests(update.effects).remove(0);
    let resolved = app
        .resolve(&mut session, SessionOutput::SignedIn { user_id: user_id.into() })
        .expect("session request resolves");
    store_requests(run_events(app, model, resolved.events)).remove(0)
}
