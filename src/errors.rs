use crate::graph::NodeId;

/// Errors raised by graph construction and path queries.
/// A missing route is not an error - searches return an empty path for it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Node id is not registered in the graph
    #[error("unknown node `{0}`")]
    UnknownNode(NodeId),

    /// Edge weight is negative, NaN or infinite
    #[error("invalid distance {distance} for edge `{from}` - `{to}`")]
    InvalidWeight {
        from: NodeId,
        to: NodeId,
        distance: f64,
    },
}

impl GraphError {
    pub(crate) fn unknown(id: &str) -> Self {
        GraphError::UnknownNode(NodeId::from(id))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(GraphError::unknown("Poço").to_string(), "unknown node `Poço`");

        let err = GraphError::InvalidWeight {
            from: "A".into(),
            to: "B".into(),
            distance: -1.5,
        };
        assert_eq!(err.to_string(), "invalid distance -1.5 for edge `A` - `B`");
    }
}
