#![forbid(unsafe_code)]

//! `:shortcode:` to emoji substitution.
//!
//! Tokens have the form `:name:` where `name` is one or more ASCII
//! alphanumerics, `_`, `+` or `-`. The scan is leftmost-first and tokens never
//! overlap: an unknown token is copied through verbatim and scanning resumes
//! after its closing colon, so in `:nope:tada:` only `:nope:` is considered.
//!
//! Names are resolved against the GitHub (gemoji) shortcode table shipped with
//! the [`emojis`] crate.

use crate::Substitute;

/// Options for [`emojize_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcodeOptions {
    /// Text appended after every substituted glyph.
    pub padding: String,
}

impl ShortcodeOptions {
    /// Set the padding appended after each glyph.
    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = padding.into();
        self
    }
}

/// The default [`Substitute`] routine: shortcode lookup with [`ShortcodeOptions`].
#[derive(Debug, Clone, Default)]
pub struct Shortcodes {
    options: ShortcodeOptions,
}

impl Shortcodes {
    #[must_use]
    pub fn new(options: ShortcodeOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &ShortcodeOptions {
        &self.options
    }
}

impl Substitute for Shortcodes {
    fn substitute(&self, input: &str) -> String {
        emojize_with(input, &self.options)
    }
}

#[inline]
const fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'+' | b'-')
}

/// Replace known shortcodes in `text` with their emoji, no padding.
#[must_use]
pub fn emojize(text: &str) -> String {
    emojize_with(text, &ShortcodeOptions::default())
}

/// Replace known shortcodes in `text` with their emoji.
#[must_use]
pub fn emojize_with(text: &str, options: &ShortcodeOptions) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    // Start of the verbatim run not yet copied into `out`.
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b':' {
            i += 1;
            continue;
        }

        let name_start = i + 1;
        let mut end = name_start;
        while end < bytes.len() && is_name_byte(bytes[end]) {
            end += 1;
        }

        if end == name_start || end >= bytes.len() || bytes[end] != b':' {
            // `end` is the first byte that cannot belong to a token starting
            // anywhere in `i + 1..end`.
            i = end;
            continue;
        }

        // All delimiters are ASCII, so these slices sit on char boundaries.
        let name = &text[name_start..end];
        if let Some(emoji) = emojis::get_by_shortcode(name) {
            out.push_str(&text[copied..i]);
            out.push_str(emoji.as_str());
            out.push_str(&options.padding);
            copied = end + 1;
        }
        i = end + 1;
    }

    out.push_str(&text[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_known_shortcode() {
        assert_eq!(emojize("ship it :rocket:"), "ship it 🚀");
    }

    #[test]
    fn replaces_several_in_one_pass() {
        assert_eq!(emojize(":tada: done :tada:"), "🎉 done 🎉");
        assert_eq!(emojize(":tada::rocket:"), "🎉🚀");
    }

    #[test]
    fn plus_and_dash_are_name_bytes() {
        assert_eq!(emojize("ok :+1:"), "ok 👍");
    }

    #[test]
    fn no_tokens_pass_through() {
        assert_eq!(emojize("hello world"), "hello world");
        assert_eq!(emojize("time 12:30"), "time 12:30");
        assert_eq!(emojize("a : b : c"), "a : b : c");
    }

    #[test]
    fn empty_maps_to_empty() {
        assert_eq!(emojize(""), "");
    }

    #[test]
    fn unknown_token_is_kept_and_consumed() {
        assert_eq!(emojize(":qjqj:"), ":qjqj:");
        // `:qjqj:` consumes its closing colon, so `rocket:` is never a token.
        assert_eq!(emojize(":qjqj:rocket:"), ":qjqj:rocket:");
    }

    #[test]
    fn empty_name_is_not_a_token() {
        assert_eq!(emojize("::rocket:"), ":🚀");
        assert_eq!(emojize("::"), "::");
    }

    #[test]
    fn unterminated_token_is_kept() {
        assert_eq!(emojize("see :rocket"), "see :rocket");
        assert_eq!(emojize(":"), ":");
    }

    #[test]
    fn non_ascii_text_is_preserved() {
        assert_eq!(emojize("héllo :tada: 日本"), "héllo 🎉 日本");
        assert_eq!(emojize(":日本:"), ":日本:");
    }

    #[test]
    fn padding_follows_each_glyph() {
        let options = ShortcodeOptions::default().with_padding(" ");
        assert_eq!(emojize_with(":tada::rocket:!", &options), "🎉 🚀 !");
        assert_eq!(emojize_with("plain :qjqj:", &options), "plain :qjqj:");
    }

    #[test]
    fn shortcodes_routine_uses_its_options() {
        let routine = Shortcodes::new(ShortcodeOptions::default().with_padding("_"));
        assert_eq!(routine.options().padding, "_");
        assert_eq!(routine.substitute(":rocket:"), "🚀_");
    }
}
