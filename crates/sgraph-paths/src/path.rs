use std::fmt;

use sgraph_core::WeightedPather;

/// A node sequence from a search start to a target, both included.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>")
)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub(crate) fn new(nodes: Vec<usize>) -> Self {
        debug_assert!(!nodes.is_empty());
        Self(nodes)
    }

    #[inline]
    pub fn nodes(&self) -> &[usize] {
        &self.0
    }

    /// Number of nodes, at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a path holds at least its start node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.0[0]
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.0[self.0.len() - 1]
    }

    /// Sum of the edge weights along the path.
    pub fn total_weight<P: WeightedPather + ?Sized>(&self, pather: &P) -> f64 {
        self.0.windows(2).map(|w| pather.cost(w[0], w[1])).sum()
    }
}

impl TryFrom<Vec<usize>> for NodePath {
    type Error = &'static str;

    /// Fails on an empty list; a path always holds its start node.
    fn try_from(nodes: Vec<usize>) -> Result<Self, Self::Error> {
        if nodes.is_empty() {
            Err("a node path cannot be empty")
        } else {
            Ok(Self(nodes))
        }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, n) in self.0.iter().enumerate() {
            if k > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_path_round_trip() {
        let p = NodePath::new(vec![3, 4, 7]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[3,4,7]");
        let back: NodePath = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn empty_path_does_not_deserialize() {
        assert!(serde_json::from_str::<NodePath>("[]").is_err());
    }
}
