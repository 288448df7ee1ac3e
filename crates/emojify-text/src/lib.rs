#![forbid(unsafe_code)]

//! Emoji shortcode substitution and a host-agnostic text box bridge.
//!
//! The crate is split along the seam between the page and the text:
//! - [`shortcode`]: the default substitution routine, turning `:rocket:` into 🚀.
//! - [`Substitute`]: the pluggable routine the bridge calls. Any
//!   `Fn(&str) -> String` qualifies.
//! - [`host`]: the two traits a host document must provide (element lookup and
//!   a readable/writable `value`).
//! - [`bridge`]: [`TextSubstitutionBridge`], which reads one element, runs the
//!   routine and writes the result back.
//! - [`memory`]: an in-memory host document for native callers and tests.
//!
//! Nothing here touches `wasm-bindgen`; the `emojify-web` crate wraps the
//! bridge with a `js-sys` backed document and exports it to JavaScript.

pub mod bridge;
pub mod host;
pub mod memory;
pub mod shortcode;

pub use bridge::{BridgeConfig, BridgeOutcome, DEFAULT_ELEMENT_ID, TextSubstitutionBridge};
pub use host::{HostError, HostOp, HostValue, TextDocument, TextElement};
pub use shortcode::{ShortcodeOptions, Shortcodes, emojize, emojize_with};

/// A text substitution routine.
///
/// Implementations must be total: every input maps to some output string.
pub trait Substitute {
    /// Map `input` to its substituted form.
    fn substitute(&self, input: &str) -> String;
}

impl<F> Substitute for F
where
    F: Fn(&str) -> String,
{
    fn substitute(&self, input: &str) -> String {
        self(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn closures_are_routines() {
        let upper = |s: &str| s.to_uppercase();
        assert_eq!(upper.substitute("abc"), "ABC");
    }

    #[test]
    fn shortcodes_are_routines() {
        assert_eq!(Shortcodes::default().substitute("go :rocket:"), "go 🚀");
    }
}
