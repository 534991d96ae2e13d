use crate::domain::models::Define;

/// Port for the mutable build settings of one compilation run.
///
/// Implementations own the preprocessor define list. Callers may only
/// append to it and read it back; existing entries are never removed,
/// replaced or deduplicated.
pub trait BuildEnvironment {
    /// Append defines after any existing entries, preserving order.
    fn append_defines(&mut self, defines: Vec<Define>);

    /// The full define list, including entries added by others.
    fn defines(&self) -> &[Define];
}
