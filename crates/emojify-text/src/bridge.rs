#![forbid(unsafe_code)]

//! The text box bridge.
//!
//! One invocation of [`TextSubstitutionBridge::run`]:
//!
//! 1. looks up the configured element,
//! 2. reads its value,
//! 3. runs the [`Substitute`] routine over it,
//! 4. writes the result back into the same element.
//!
//! A missing element or a value that is not a string ends the call early
//! without touching the document. Those are reported as [`BridgeOutcome`]
//! variants, not errors; only failing host calls produce a [`HostError`].

use crate::Substitute;
use crate::host::{HostError, HostValue, TextDocument, TextElement};
use crate::shortcode::Shortcodes;

/// Element id the bridge targets unless configured otherwise.
pub const DEFAULT_ELEMENT_ID: &str = "my_text_area";

/// Bridge configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Id of the text box to rewrite.
    pub element_id: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_owned(),
        }
    }
}

impl BridgeConfig {
    #[must_use]
    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = element_id.into();
        self
    }
}

/// How a bridge invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeOutcome {
    /// The value was rewritten. `changed` is false when the routine returned
    /// its input unchanged (the write still happened).
    Replaced { changed: bool },
    /// No element with the configured id.
    ElementMissing,
    /// The element has no value.
    ValueUndefined,
    /// The element's value is not a string.
    ValueNotText,
}

impl BridgeOutcome {
    /// Whether the element's value was written.
    #[must_use]
    pub const fn wrote(self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}

/// Reads a text box, substitutes, writes it back.
#[derive(Debug, Clone)]
pub struct TextSubstitutionBridge<S> {
    config: BridgeConfig,
    routine: S,
}

impl Default for TextSubstitutionBridge<Shortcodes> {
    fn default() -> Self {
        Self::new(BridgeConfig::default(), Shortcodes::default())
    }
}

impl<S: Substitute> TextSubstitutionBridge<S> {
    #[must_use]
    pub fn new(config: BridgeConfig, routine: S) -> Self {
        Self { config, routine }
    }

    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Run one read-substitute-write pass against `document`.
    pub fn run<D: TextDocument>(&self, document: &D) -> Result<BridgeOutcome, HostError> {
        let span = tracing::debug_span!("emojify", element_id = %self.config.element_id);
        let _guard = span.enter();

        let Some(element) = document.element_by_id(&self.config.element_id)? else {
            tracing::debug!("element not found; document left untouched");
            return Ok(BridgeOutcome::ElementMissing);
        };

        let text = match element.value()? {
            HostValue::Text(text) => text,
            HostValue::Undefined => {
                tracing::debug!("element value is undefined; document left untouched");
                return Ok(BridgeOutcome::ValueUndefined);
            }
            HostValue::NotText => {
                tracing::debug!("element value is not a string; document left untouched");
                return Ok(BridgeOutcome::ValueNotText);
            }
        };

        let replaced = self.routine.substitute(&text);
        let changed = replaced != text;
        element.set_value(&replaced)?;

        tracing::trace!(
            input_bytes = text.len(),
            output_bytes = replaced.len(),
            changed,
            "element value rewritten"
        );
        Ok(BridgeOutcome::Replaced { changed })
    }
}
