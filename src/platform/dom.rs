//! DOM updates for scene events

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use super::window;
use crate::error::{CardError, Result};
use crate::settings::Settings;
use crate::sim::{Envelope, Phase, PhaseChange, PhotoWall, hearts, hearts_visible};

/// Look up a required element
pub fn element(document: &Document, id: &'static str) -> Result<HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or(CardError::ElementMissing(id))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| CardError::ElementMissing(id))
}

pub fn set_hidden(el: &Element, hidden: bool) {
    let classes = el.class_list();
    let _ = if hidden {
        classes.add_1("hidden")
    } else {
        classes.remove_1("hidden")
    };
}

fn set_text(document: &Document, id: &'static str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Fill configurable text into the page
pub fn apply_settings(document: &Document, settings: &Settings) {
    set_text(document, "greeting", &settings.greeting());
    set_text(document, "envelope-for", &format!("For {}", settings.recipient));
    set_text(document, "seal-initial", &settings.seal_initial);
    set_text(document, "letter-date", &settings.date_line);
    set_text(document, "letter-salutation", &format!("Dearest {},", settings.recipient));
    if let Err(e) = render_letter_body(document, &settings.letter_body) {
        log::warn!("Letter body not rendered: {}", e);
    }
    set_text(document, "letter-question", &settings.question);
    set_text(document, "yes-btn", &settings.yes_label);
    set_text(document, "no-btn", &settings.no_label);
    set_text(document, "reveal-title", &settings.reveal_title);
    set_text(document, "reveal-message", &settings.reveal_message);
}

/// One `<p>` per paragraph inside `#letter-body`
fn render_letter_body(document: &Document, paragraphs: &[String]) -> Result<()> {
    let body = element(document, "letter-body")?;
    body.set_text_content(None);
    for text in paragraphs {
        let p = document.create_element("p")?;
        p.set_text_content(Some(text));
        body.append_child(&p)?;
    }
    Ok(())
}

/// Show only the entrance view, without animation
pub fn mount_initial(document: &Document, phase: Phase) {
    for p in Phase::ALL {
        if let Some(view) = document.get_element_by_id(p.view_id()) {
            set_hidden(&view, p != phase);
        }
    }
    if let Some(view) = document.get_element_by_id(phase.view_id()) {
        start_entering(&view, phase);
    }
}

fn start_entering(view: &Element, phase: Phase) {
    let _ = view
        .unchecked_ref::<HtmlElement>()
        .style()
        .set_property("animation-duration", &format!("{}s", phase.enter_secs()));
    let _ = view.class_list().add_1("entering");
}

/// Swap views: play the old view's exit, then mount the new one
pub fn swap_views(document: &Document, change: PhaseChange) -> Result<()> {
    let old = element(document, change.from.view_id())?;
    let new = element(document, change.to.view_id())?;
    let exit_ms = change.from.exit_secs().unwrap_or(0.0) * 1000.0;

    let _ = old.class_list().remove_1("entering");
    let _ = old.class_list().add_1("exiting");
    let _ = old
        .style()
        .set_property("animation-duration", &format!("{}s", exit_ms / 1000.0));

    let to = change.to;
    let mount = Closure::once_into_js(move || {
        set_hidden(&old, true);
        let _ = old.class_list().remove_1("exiting");
        set_hidden(&new, false);
        start_entering(&new, to);
    });
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        mount.unchecked_ref(),
        exit_ms as i32,
    )?;
    Ok(())
}

/// Reflect envelope hover/open state
pub fn apply_envelope(document: &Document, envelope: &Envelope) {
    if let Some(el) = document.get_element_by_id("envelope") {
        let (rx, ry) = envelope.tilt();
        let transform = format!(
            "scale({}) rotateX({}deg) rotateY({}deg)",
            envelope.scale(),
            rx,
            ry
        );
        let _ = el.unchecked_ref::<HtmlElement>().style().set_property("transform", &transform);
        let _ = el.class_list().toggle_with_force("open", envelope.is_open());
        let _ = el.class_list().toggle_with_force("hovered", envelope.is_hovered());
    }
    if let Some(card) = document.get_element_by_id("envelope-card") {
        let _ = card
            .unchecked_ref::<HtmlElement>()
            .style()
            .set_property("transform", &format!("translateY({}px)", envelope.card_lift()));
    }
    if let Some(seal) = document.get_element_by_id("envelope-seal") {
        set_hidden(&seal, !envelope.seal_visible());
    }
    if let Some(hint) = document.get_element_by_id("open-hint") {
        set_hidden(&hint, envelope.is_open());
    }
}

/// Move the "No" button to its sampled offset
pub fn apply_no_offset(document: &Document, offset: Vec2) {
    if let Some(el) = document.get_element_by_id("no-btn") {
        let _ = el
            .unchecked_ref::<HtmlElement>()
            .style()
            .set_property("transform", &format!("translate({}px, {}px)", offset.x, offset.y));
    }
}

/// Add the floating hearts to their container
pub fn render_hearts(document: &Document) -> Result<()> {
    let container = element(document, "hearts")?;
    for heart in hearts() {
        let span = document.create_element("span")?;
        span.set_class_name("floating-heart");
        span.set_attribute("style", &heart.style())?;
        span.set_text_content(Some("\u{2665}"));
        container.append_child(&span)?;
    }
    Ok(())
}

pub fn update_hearts(document: &Document, phase: Phase) {
    if let Some(container) = document.get_element_by_id("hearts") {
        set_hidden(&container, !hearts_visible(phase));
    }
}

/// Build the scrolling photo columns.
///
/// `on_error` is attached to every image; it reads the photo index from the
/// image's `data-photo` attribute.
pub fn render_photo_wall(
    document: &Document,
    wall: &PhotoWall,
    on_error: &js_sys::Function,
) -> Result<()> {
    let container = element(document, "photo-wall")?;
    container.set_inner_html("");

    for column in 0..crate::consts::PHOTO_COLUMNS {
        let col = document.create_element("div")?;
        col.set_class_name("photo-column");
        let track = document.create_element("div")?;
        let (from, to) = PhotoWall::scroll(column).keyframes();
        track.set_class_name("photo-track");
        track.set_attribute(
            "style",
            &format!(
                "--from:{}%;--to:{}%;animation-duration:{}s",
                from,
                to,
                PhotoWall::scroll_secs(column)
            ),
        )?;

        for index in wall.marquee(column) {
            let img: HtmlImageElement = document
                .create_element("img")?
                .dyn_into()
                .map_err(|_| CardError::Js("created element is not an img".into()))?;
            img.set_alt("Memory");
            img.set_attribute("data-photo", &index.to_string())?;
            img.add_event_listener_with_callback("error", on_error)?;
            img.set_src(&wall.slots()[index].src);
            track.append_child(&img)?;
        }

        col.append_child(&track)?;
        container.append_child(&col)?;
    }
    Ok(())
}

/// Hide every copy of a failed photo
pub fn hide_photo(document: &Document, index: usize) -> Result<()> {
    let copies = document.query_selector_all(&format!("img[data-photo=\"{index}\"]"))?;
    for i in 0..copies.length() {
        if let Some(node) = copies.item(i) {
            if let Ok(img) = node.dyn_into::<HtmlElement>() {
                let _ = img.style().set_property("display", "none");
            }
        }
    }
    Ok(())
}
