//! Envelope Card entry point
//!
//! On the web this mounts the card into the page. Natively it walks the card
//! through every phase headlessly and reports what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = envelope_card::platform::run() {
        log::error!("Envelope card failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Envelope card (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    rehearse();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the card from sealed envelope to photo wall with a fixed seed
#[cfg(not(target_arch = "wasm32"))]
fn rehearse() {
    use envelope_card::Settings;
    use envelope_card::sim::{CardInput, Phase, Presentation, SceneEvent, Starfield};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    let settings = Settings::load_or_default();
    let mut rng = Pcg32::seed_from_u64(2024);

    let mut field = Starfield::new(1280.0, 720.0, &mut rng);
    for _ in 0..600 {
        field.step();
    }
    println!(
        "Starfield: {} stars after 600 frames, in bounds: {}",
        field.stars().len(),
        field.in_bounds()
    );

    let mut card = Presentation::new(settings.photo_base.clone());
    let script = [
        CardInput::EnvelopeHover(true),
        CardInput::EnvelopeClick,
        CardInput::NoApproach,
        CardInput::NoApproach,
        CardInput::YesClick,
        CardInput::PhotoFailed(24),
    ];

    for (i, input) in script.into_iter().enumerate() {
        let now_ms = i as f64 * 1000.0;
        for event in card.handle(input, now_ms, &mut rng) {
            match event {
                SceneEvent::NoMoved { offset } => {
                    println!("  {} dodged to ({:.1}, {:.1})", settings.no_label, offset.x, offset.y)
                }
                SceneEvent::PhaseChanged(change) => {
                    println!("  {:?} -> {:?}", change.from, change.to)
                }
                other => println!("  {:?}", other),
            }
        }
    }

    assert_eq!(card.phase(), Phase::Reveal, "card should end on the reveal");
    println!("✓ {} reached the reveal: {}", settings.greeting(), settings.reveal_title);
}
