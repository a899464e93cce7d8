use crate::core::converter::Converter;
use crate::core::types::Cluster;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// The three text encodings the converter moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Romanized phonetic keystrokes.
    English,
    /// Unicode Devanagari, logical order.
    Unicode,
    /// Preeti legacy font, visual order.
    Preeti,
}

impl Script {
    pub const ALL: [Script; 3] = [Script::English, Script::Unicode, Script::Preeti];

    pub fn name(self) -> &'static str {
        match self {
            Script::English => "english",
            Script::Unicode => "unicode",
            Script::Preeti => "preeti",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown script '{0}' (expected english, unicode or preeti)")]
pub struct ParseScriptError(pub String);

impl FromStr for Script {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "roman" | "phonetic" => Ok(Script::English),
            "unicode" | "devanagari" => Ok(Script::Unicode),
            "preeti" => Ok(Script::Preeti),
            _ => Err(ParseScriptError(s.to_string())),
        }
    }
}

impl Converter {
    /// Converts between any two scripts. Pairs that do not involve Unicode
    /// go through it; converting a script to itself returns the input.
    pub fn convert(&self, text: &str, from: Script, to: Script) -> String {
        if from == to {
            return text.to_string();
        }
        debug!(%from, %to, "convert");
        let unicode = match from {
            Script::English => self.english_to_unicode(text),
            Script::Unicode => text.to_string(),
            Script::Preeti => self.preeti_to_unicode(text),
        };
        match to {
            Script::English => self.unicode_to_english(&unicode),
            Script::Unicode => unicode,
            Script::Preeti => self.unicode_to_preeti(&unicode),
        }
    }

    /// The assembled clusters of `text` read as `script`.
    pub fn analyze(&self, text: &str, script: Script) -> Vec<Cluster> {
        match script {
            Script::English => self.english_clusters(text),
            Script::Unicode => self.unicode_clusters(text),
            Script::Preeti => self.preeti_clusters(text),
        }
    }
}
