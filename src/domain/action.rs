/// One reversible entry in a person's history stack.
///
/// Persisted as a tagged record: `{"type":"tap","index":3}` or
/// `{"type":"fine"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    Tap { index: usize },
    Fine,
}
