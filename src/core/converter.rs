use crate::config::{ConfigError, ConverterConfig};
use crate::core::assembler::{assemble, JoinPolicy};
use crate::core::composer::compose_unicode;
use crate::core::reorder::reorder_preeti;
use crate::core::romanizer::compose_english;
use crate::core::tables::MappingTables;
use crate::core::tokenizer::{tokenize, tokenize_preeti};
use crate::core::types::Cluster;
use std::sync::OnceLock;
use tracing::{debug, debug_span};

/// Converts between romanized keystrokes, Unicode Devanagari and Preeti.
///
/// Every conversion is a pure function of its input and the converter's
/// read-only tables, so a converter can be shared across threads.
pub struct Converter {
    tables: MappingTables,
}

impl Converter {
    pub fn new() -> Self {
        Self { tables: MappingTables::build() }
    }

    /// A converter whose phonetic scheme includes the configured overrides.
    pub fn with_config(config: &ConverterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut tables = MappingTables::build();
        tables.apply_phonetic_overrides(&config.phonetic_overrides)?;
        Ok(Self { tables })
    }

    /// Get or initialize the process-wide default converter.
    pub fn global() -> &'static Converter {
        static INSTANCE: OnceLock<Converter> = OnceLock::new();
        INSTANCE.get_or_init(Converter::new)
    }

    pub fn english_to_unicode(&self, input: &str) -> String {
        let _span = debug_span!("english_to_unicode", len = input.len()).entered();
        let clusters = self.english_clusters(input);
        debug!(clusters = clusters.len(), "assembled");
        compose_unicode(&clusters)
    }

    pub fn unicode_to_english(&self, input: &str) -> String {
        let _span = debug_span!("unicode_to_english", len = input.len()).entered();
        let clusters = self.unicode_clusters(input);
        debug!(clusters = clusters.len(), "assembled");
        compose_english(&clusters, &self.tables.phonetic_keys, &self.tables.phonetic)
    }

    pub fn unicode_to_preeti(&self, input: &str) -> String {
        let _span = debug_span!("unicode_to_preeti", len = input.len()).entered();
        let clusters = self.unicode_clusters(input);
        debug!(clusters = clusters.len(), "assembled");
        reorder_preeti(&clusters)
    }

    pub fn preeti_to_unicode(&self, input: &str) -> String {
        let _span = debug_span!("preeti_to_unicode", len = input.len()).entered();
        let clusters = self.preeti_clusters(input);
        debug!(clusters = clusters.len(), "assembled");
        compose_unicode(&clusters)
    }

    pub(crate) fn english_clusters(&self, input: &str) -> Vec<Cluster> {
        assemble(&tokenize(input, &self.tables.phonetic), JoinPolicy::Implicit)
    }

    pub(crate) fn unicode_clusters(&self, input: &str) -> Vec<Cluster> {
        assemble(&tokenize(input, &self.tables.unicode), JoinPolicy::Explicit)
    }

    pub(crate) fn preeti_clusters(&self, input: &str) -> Vec<Cluster> {
        assemble(&tokenize_preeti(input, &self.tables.preeti), JoinPolicy::Explicit)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Romanized keystrokes to Unicode Devanagari.
pub fn english_to_unicode(input: &str) -> String {
    Converter::global().english_to_unicode(input)
}

/// Unicode Devanagari to romanized keystrokes.
pub fn unicode_to_english(input: &str) -> String {
    Converter::global().unicode_to_english(input)
}

/// Unicode Devanagari to Preeti visual-order text.
pub fn unicode_to_preeti(input: &str) -> String {
    Converter::global().unicode_to_preeti(input)
}

/// Preeti visual-order text to Unicode Devanagari.
pub fn preeti_to_unicode(input: &str) -> String {
    Converter::global().preeti_to_unicode(input)
}
