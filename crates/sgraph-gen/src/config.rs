/// Parameters of a partitioned grid graph.
///
/// The defaults describe a 10x10 grid in one piece with weights drawn from
/// `[0, 1)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GeneratorConfig {
    pub columns: usize,
    pub rows: usize,
    /// Number of connected components the result must have.
    pub components: usize,
    /// Inclusive lower bound of edge weights.
    pub min_weight: f64,
    /// Exclusive upper bound of edge weights.
    pub max_weight: f64,
    /// Slice attempts on one mesh before starting over from a fresh one.
    pub slice_attempts: usize,
    /// How many fresh meshes to try after the first before giving up.
    pub restarts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            columns: 10,
            rows: 10,
            components: 1,
            min_weight: 0.0,
            max_weight: 1.0,
            slice_attempts: 10_000,
            restarts: 8,
        }
    }
}

impl GeneratorConfig {
    /// Shape, component count and weight bounds, default retry budget.
    pub fn new(
        columns: usize,
        rows: usize,
        components: usize,
        min_weight: f64,
        max_weight: f64,
    ) -> Self {
        Self {
            columns,
            rows,
            components,
            min_weight,
            max_weight,
            ..Self::default()
        }
    }

    /// Replace the retry budget.
    pub fn with_budget(mut self, slice_attempts: usize, restarts: usize) -> Self {
        self.slice_attempts = slice_attempts;
        self.restarts = restarts;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: GeneratorConfig = serde_json::from_str(r#"{"columns":4,"components":3}"#).unwrap();
        assert_eq!(cfg.columns, 4);
        assert_eq!(cfg.rows, 10);
        assert_eq!(cfg.components, 3);
        assert_eq!(cfg.max_weight, 1.0);
        assert_eq!(cfg.slice_attempts, 10_000);
    }
}
