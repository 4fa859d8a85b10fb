use serde::Deserialize;

/// Classification already attached to a source on the server.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceClassification {
    /// Class label, e.g. `Ia` or `AGN`.
    pub classification: String,
    /// Asserted probability, when the classifier recorded one.
    #[serde(default)]
    pub probability: Option<f64>,
}

/// Catalog record for one object. Immutable once fetched.
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    /// Object ID, e.g. `ZTF25abcdxyz`.
    pub id: String,
    /// Transient Name Server designation, when cross-matched.
    #[serde(default)]
    pub tns_name: Option<String>,
    /// Classifications other users or pipelines have posted.
    #[serde(default)]
    pub classifications: Vec<SourceClassification>,
}
