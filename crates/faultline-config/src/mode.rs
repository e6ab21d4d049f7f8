use serde::Deserialize;

/// Deployment mode
///
/// Development responses carry full diagnostics; anything else restricts
/// what leaves the server.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl Mode {
    /// Whether responses may include full diagnostic detail
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Development)
    }
}
