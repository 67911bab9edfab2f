//! Page startup and event wiring

use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, PageTransitionEvent};

use super::{StarfieldLoop, confetti, document, dom, now_ms, window};
use crate::error::{CardError, Result};
use crate::settings::Settings;
use crate::sim::{BackdropAction, CardInput, PageTransition, Phase, Presentation, Scene, SceneEvent};

/// Canvas the starfield draws on
const STARFIELD_CANVAS: &str = "starfield";

/// Everything the page callbacks share
struct App {
    presentation: Presentation,
    rng: Pcg32,
    starfield: Option<StarfieldLoop>,
    /// Attached to every photo on the wall
    on_photo_error: Option<Closure<dyn FnMut(Event)>>,
}

/// Start the card
pub fn run() -> Result<()> {
    console_error_panic_hook::set_once();
    // Logger first so a settings warning reaches the console
    console_log::init_with_level(log::Level::Trace).map_err(|e| CardError::Js(e.to_string()))?;
    let settings = Settings::load_or_default();
    log::set_max_level(settings.log_level.to_level().to_level_filter());

    log::info!("Envelope card starting...");

    let document = document()?;
    dom::apply_settings(&document, &settings);
    if let Err(e) = dom::render_hearts(&document) {
        log::warn!("No hearts: {}", e);
    }

    let seed = now_ms() as u64;
    let presentation = Presentation::new(settings.photo_base.clone());
    dom::mount_initial(&document, presentation.phase());
    dom::update_hearts(&document, presentation.phase());

    let starfield = start_starfield(seed);

    let app = Rc::new(RefCell::new(App {
        presentation,
        rng: Pcg32::seed_from_u64(seed.wrapping_add(1)),
        starfield,
        on_photo_error: None,
    }));

    setup_photo_errors(&app);
    setup_envelope(&document, &app)?;
    setup_letter(&document, &app)?;
    setup_teardown(&app)?;

    log::info!("Envelope card ready (seed {})", seed);
    Ok(())
}

/// The backdrop is decorative; the card works without it
fn start_starfield(seed: u64) -> Option<StarfieldLoop> {
    match StarfieldLoop::start(STARFIELD_CANVAS, seed) {
        Ok(starfield) => Some(starfield),
        Err(e) => {
            log::warn!("Starfield disabled: {}", e);
            None
        }
    }
}

/// Feed one input through the presentation and reflect the results
fn dispatch(app: &Rc<RefCell<App>>, input: CardInput) {
    let events = {
        let mut a = app.borrow_mut();
        let App { presentation, rng, .. } = &mut *a;
        presentation.handle(input, now_ms(), rng)
    };

    let Ok(document) = document() else {
        return;
    };
    for event in events {
        if let Err(e) = apply(app, &document, event) {
            log::warn!("Failed to update page: {}", e);
        }
    }
}

fn apply(app: &Rc<RefCell<App>>, document: &Document, event: SceneEvent) -> Result<()> {
    match event {
        SceneEvent::EnvelopeChanged(envelope) => dom::apply_envelope(document, &envelope),
        SceneEvent::NoMoved { offset } => dom::apply_no_offset(document, offset),
        SceneEvent::Celebrate(celebration) => confetti::celebrate(celebration),
        SceneEvent::PhaseChanged(change) => {
            dom::swap_views(document, change)?;
            dom::update_hearts(document, change.to);
            if change.to == Phase::Reveal {
                let a = app.borrow();
                if let (Scene::Reveal { wall }, Some(on_error)) =
                    (a.presentation.scene(), a.on_photo_error.as_ref())
                {
                    dom::render_photo_wall(document, wall, on_error.as_ref().unchecked_ref())?;
                }
            }
        }
        SceneEvent::PhotoHidden(index) => dom::hide_photo(document, index)?,
    }
    Ok(())
}

fn setup_photo_errors(app: &Rc<RefCell<App>>) {
    let handle = app.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
        let index = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.get_attribute("data-photo"))
            .and_then(|v| v.parse::<usize>().ok());
        if let Some(index) = index {
            dispatch(&handle, CardInput::PhotoFailed(index));
        }
    });
    app.borrow_mut().on_photo_error = Some(closure);
}

fn setup_envelope(document: &Document, app: &Rc<RefCell<App>>) -> Result<()> {
    let envelope = dom::element(document, "envelope")?;

    for (event, input) in [
        ("click", CardInput::EnvelopeClick),
        ("mouseenter", CardInput::EnvelopeHover(true)),
        ("mouseleave", CardInput::EnvelopeHover(false)),
    ] {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            dispatch(&app, input);
        });
        envelope.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn setup_letter(document: &Document, app: &Rc<RefCell<App>>) -> Result<()> {
    // "No" runs away from both mice and fingers
    let no_btn = dom::element(document, "no-btn")?;
    for event in ["mouseenter", "touchstart"] {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            if event.type_() == "touchstart" {
                event.prevent_default();
            }
            dispatch(&app, CardInput::NoApproach);
        });
        no_btn.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let yes_btn = dom::element(document, "yes-btn")?;
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            dispatch(&app, CardInput::YesClick);
        });
        yes_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Stop the starfield when the page goes away, and bring it back if the
/// page returns from the back/forward cache without it
fn setup_teardown(app: &Rc<RefCell<App>>) -> Result<()> {
    let window = window()?;
    for event in ["pagehide", "pageshow"] {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PageTransitionEvent| {
            let persisted = event.persisted();
            let transition = if event.type_() == "pagehide" {
                PageTransition::Hide { persisted }
            } else {
                PageTransition::Show { persisted }
            };
            let mut a = app.borrow_mut();
            match transition.backdrop_action(a.starfield.is_some()) {
                // Dropping the loop cancels its frame and resize listener
                BackdropAction::Stop => drop(a.starfield.take()),
                BackdropAction::Restart => a.starfield = start_starfield(now_ms() as u64),
                BackdropAction::Keep => {}
            }
        });
        window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}
