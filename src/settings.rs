//! Card settings
//!
//! Read once at startup from a JSON block embedded in the page:
//! `<script id="card-config" type="application/json">{ ... }</script>`.
//! Missing fields take their defaults. Nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Log verbosity for the browser console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Text and assets for the card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Entrance ===
    /// Who the card is for
    pub recipient: String,
    /// Letter pressed into the wax seal
    pub seal_initial: String,

    // === Letter ===
    /// Date line at the top of the letter
    pub date_line: String,
    /// Paragraphs between the salutation and the question
    pub letter_body: Vec<String>,
    /// The question under the letter body
    pub question: String,
    pub yes_label: String,
    pub no_label: String,

    // === Reveal ===
    pub reveal_title: String,
    pub reveal_message: String,
    /// Directory holding `1.jpg` .. `25.jpg`
    pub photo_base: String,

    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recipient: "Ulik".to_string(),
            seal_initial: "U".to_string(),

            date_line: "February 14th".to_string(),
            letter_body: [
                "From the moment the red string made our paths cross, my world has changed in ways I never \
                 thought possible. You shine brighter than any star, and your voice is a melody I want to \
                 listen to on repeat forever.",
                "You, just like a Sony TV in the 2000s, bring 16'000'000 colors to my days. You bring Baku \
                 warmth to my cold Madrid nights. But hopefully soon enough, we will both be able to feel the \
                 same weather. Every moment, every second with you, even kilometers away, feels like a dream I \
                 never want to wake up from. I can't wait to hug you again. I love all the little things about \
                 you. I fell in love with them the moment I saw you. The way your eyes light up, the way you \
                 put up your hair, the face you make when you smoke.",
                "I love the comfort of just being near you. Life is an adventure, and there is not a single \
                 soul in the whole multiverse I would rather share it with. I pinky promise to always be there \
                 to make you laugh, to hold your hand through every loss, and to celebrate every win with you. \
                 You are my forever, Ulik.",
                "So, I have a very important question to ask you...",
            ]
            .map(String::from)
            .to_vec(),
            question: "Will you be my Valentine?".to_string(),
            yes_label: "Yes, Absolutely!".to_string(),
            no_label: "No".to_string(),

            reveal_title: "She said Yes!".to_string(),
            reveal_message: "Thank you for making me the happiest person in the universe.\nYou are my everything."
                .to_string(),
            photo_base: "/photos".to_string(),

            log_level: LogLevel::Info,
        }
    }
}

impl Settings {
    /// Element id of the embedded settings block
    pub const ELEMENT_ID: &'static str = "card-config";

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Entrance heading
    pub fn greeting(&self) -> String {
        format!("Hey, {}", self.recipient)
    }

    /// Parse the embedded block; a page without one gets the defaults
    pub fn from_page(json: Option<&str>) -> Result<Self> {
        json.map_or_else(|| Ok(Self::default()), Self::from_json)
    }

    /// Load settings from the page (WASM only).
    ///
    /// A malformed block is returned as an error so the caller can report
    /// it once logging is up.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self> {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());
        Self::from_page(json.as_deref())
    }

    /// Native runs always use the defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        Ok(Self::default())
    }

    /// `load`, falling back to the defaults with a warning
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("{}, using defaults", e);
            Self::default()
        })
    }
}
