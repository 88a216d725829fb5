//! Ground-truth labels and adjacency directions.

use serde::{Deserialize, Serialize};

/// Ground-truth class of a node.
///
/// Only `Illicit` carries meaning for the engine: illicit nodes seed
/// propagation and count toward neighbor exposure. Labels are never used as
/// a scoring shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeLabel {
    Illicit,
    Licit,
    #[default]
    Unknown,
}

impl NodeLabel {
    pub fn is_illicit(self) -> bool {
        matches!(self, Self::Illicit)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Illicit => "illicit",
            Self::Licit => "licit",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a label name. Unrecognized names map to `None`.
    pub fn from_str_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "illicit" => Some(Self::Illicit),
            "licit" => Some(Self::Licit),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// Which adjacency to read for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Senders: nodes with an edge into this node.
    Incoming,
    /// Receivers: nodes this node has an edge to.
    Outgoing,
    /// Union of incoming and outgoing.
    Both,
}
