use crate::search::{Cost, HeuristicValue};
use ordered_float::OrderedFloat;

/// Index of a node inside its [`SearchSpace`](super::SearchSpace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(super) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// Discovered, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
    /// The heuristic proved no goal is reachable from the node
    Deadend,
}

/// A [`SearchNode`] is the search-specific bookkeeping for one state: its
/// best known cost, heuristic estimate and the edge it was reached by.
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    node_id: NodeId,
    status: SearchNodeStatus,
    /// Best known path cost from the start.
    g: Cost,
    /// Heuristic estimate of the remaining cost. Zero for uninformed
    /// searches.
    h: HeuristicValue,
    /// The parent node and the action leading from it to this node. Only
    /// the root has none.
    parent_edge: Option<(NodeId, A)>,
}

impl<A> SearchNode<A> {
    pub fn new_root(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            g: OrderedFloat(f64::INFINITY),
            h: OrderedFloat(f64::INFINITY),
            parent_edge: None,
        }
    }

    pub fn new_with_parent(node_id: NodeId, parent_id: NodeId, action: A) -> Self {
        Self {
            parent_edge: Some((parent_id, action)),
            ..Self::new_root(node_id)
        }
    }

    pub fn open(&mut self, g: Cost, h: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
    }

    /// Record a cheaper path to an open node. The heuristic value is kept.
    pub fn improve(&mut self, g: Cost, parent_id: NodeId, action: A) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Only open nodes can be improved"
        );
        debug_assert!(g < self.g, "Improvement must lower the cost");
        self.g = g;
        self.parent_edge = Some((parent_id, action));
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn mark_as_deadend(&mut self) {
        self.status = SearchNodeStatus::Deadend;
        self.h = OrderedFloat(f64::INFINITY);
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_g(&self) -> Cost {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_f(&self) -> Cost {
        self.g + self.h
    }

    pub fn get_parent_edge(&self) -> Option<&(NodeId, A)> {
        self.parent_edge.as_ref()
    }
}
