use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyNode {
    pub name: String,
    pub color: String,
}

/// A weighted edge between two node indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyGraph {
    pub nodes: Vec<SankeyNode>,
    pub links: Vec<SankeyLink>,
}

impl SankeyGraph {
    /// Two-node, one-link graph shown before any period is available.
    pub fn placeholder() -> Self {
        let node = || SankeyNode {
            name: "EMPTY".into(),
            color: String::new(),
        };
        Self {
            nodes: vec![node(), node()],
            links: vec![SankeyLink {
                source: 0,
                target: 1,
                value: 1.0,
                color: String::new(),
            }],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}
