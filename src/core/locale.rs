//! Labels for the four bindings every registry starts with.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Vietnamese,
}

/// Short label and description for each default binding.
pub struct BindingLabels {
    pub up: (&'static str, &'static str),
    pub down: (&'static str, &'static str),
    pub confirm: (&'static str, &'static str),
    pub quit: (&'static str, &'static str),
}

impl Locale {
    pub fn binding_labels(self) -> BindingLabels {
        match self {
            Locale::English => BindingLabels {
                up: ("↑", "Up"),
                down: ("↓", "Down"),
                confirm: ("↲", "Select"),
                quit: ("q", "Quit"),
            },
            Locale::Vietnamese => BindingLabels {
                up: ("↑", "Lên"),
                down: ("↓", "Xuống"),
                confirm: ("↲", "Chọn"),
                quit: ("q", "Thoát"),
            },
        }
    }

    /// Parse the short forms accepted in config files and env vars.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Locale::English),
            "vi" | "vietnamese" => Some(Locale::Vietnamese),
            _ => None,
        }
    }
}
