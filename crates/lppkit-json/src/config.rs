/// How the `type` member of a JSON entry is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeLabel {
    /// Numeric type identifier, e.g. `103`.
    Id,
    /// Descriptor name, e.g. `"Temperature"`.
    Name,
}

/// Controls JSON rendering of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Render types as identifiers or names.
    pub type_label: TypeLabel,
    /// Pretty-print with indentation.
    pub pretty: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            type_label: TypeLabel::Id,
            pretty: false,
        }
    }
}
