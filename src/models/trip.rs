/// Trip parameters submitted by the suggestions form.
///
/// Absent fields are silently omitted from the generated prompt, never
/// defaulted. `days` is treated as opaque text for interpolation; there is no
/// numeric parsing or range checking.
#[derive(Debug, Clone, Default)]
pub struct TripParameters {
    /// Requested trip length, free text
    pub days: Option<String>,
    /// Whether the traveller brings children
    pub children: bool,
    /// Whether the traveller has a car
    pub car: bool,
    /// Ordered list of interests, possibly empty
    pub interests: Vec<String>,
}
