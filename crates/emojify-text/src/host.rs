//! Host document abstraction.
//!
//! A host is whatever owns the text box: a browser DOM behind `js-sys`, or
//! [`crate::memory::MemoryDocument`] natively. Elements are handles, so
//! writing goes through `&self` the way a DOM setter does.

/// Which host call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOp {
    /// Acquiring the document itself.
    Document,
    /// Looking an element up by id.
    Lookup,
    /// Reading an element's value.
    Read,
    /// Writing an element's value.
    Write,
}

impl core::fmt::Display for HostOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Document => "document",
            Self::Lookup => "lookup",
            Self::Read => "read",
            Self::Write => "write",
        })
    }
}

/// A host call failed (for JS hosts: it threw, or the shape was wrong).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    pub op: HostOp,
    pub detail: String,
}

impl HostError {
    #[must_use]
    pub fn new(op: HostOp, detail: impl Into<String>) -> Self {
        Self {
            op,
            detail: detail.into(),
        }
    }
}

impl core::fmt::Display for HostError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "host {} failed: {}", self.op, self.detail)
    }
}

impl std::error::Error for HostError {}

/// The current value of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostValue {
    /// A string value.
    Text(String),
    /// No value at all (`undefined` or `null` on JS hosts).
    Undefined,
    /// A value that is present but is not a string.
    NotText,
}

/// Element lookup by id.
pub trait TextDocument {
    type Element: TextElement;

    /// Find the element with `id`, `Ok(None)` if there is none.
    fn element_by_id(&self, id: &str) -> Result<Option<Self::Element>, HostError>;
}

/// Read/write access to an element's `value`.
pub trait TextElement {
    fn value(&self) -> Result<HostValue, HostError>;

    fn set_value(&self, value: &str) -> Result<(), HostError>;
}
