use crate::search::search_engines::{NodeId, SearchNode};
use segvec::{Linear, SegVec};
use std::{collections::HashMap, hash::Hash};

/// A [`SearchSpace`] manages the states and nodes discovered during a
/// search. It doubles as the parent map, the cost map and the visited set:
/// every discovered state has exactly one node, which records its best
/// known cost, its parent edge and whether it has been expanded.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<A>, Linear>,
    states: SegVec<S, Linear>,
    registered_nodes: HashMap<S, NodeId>,
}

impl<S: Clone + Eq + Hash, A: Clone> SearchSpace<S, A> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_nodes = HashMap::new();

        let root_node_id = NodeId::new(0);
        registered_nodes.insert(initial_state.clone(), root_node_id);
        nodes.push(SearchNode::new_root(root_node_id));
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            registered_nodes,
        }
    }

    /// Register a newly discovered state. The caller is responsible for
    /// checking that the state is not registered yet.
    pub fn insert_node(&mut self, state: S, parent_id: NodeId, action: A) -> NodeId {
        debug_assert!(
            !self.registered_nodes.contains_key(&state),
            "State registered twice"
        );
        let node_id = NodeId::new(self.nodes.len());
        self.registered_nodes.insert(state.clone(), node_id);
        self.nodes
            .push(SearchNode::new_with_parent(node_id, parent_id, action));
        self.states.push(state);
        node_id
    }

    pub fn lookup(&self, state: &S) -> Option<NodeId> {
        self.registered_nodes.get(state).copied()
    }

    pub fn contains(&self, state: &S) -> bool {
        self.registered_nodes.contains_key(state)
    }

    /// Walk the parent edges back from `goal_id` to the root and return the
    /// actions in forward order.
    pub fn extract_plan(&self, goal_id: NodeId) -> Vec<A> {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while let Some((parent_id, action)) = current_node.get_parent_edge() {
            steps.push(action.clone());
            current_node = self.get_node(*parent_id);
        }
        steps.reverse();
        steps
    }

    #[inline(always)]
    pub fn get_root_node_id(&self) -> NodeId {
        self.root_node_id
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<A> {
        self.nodes.get(node_id.index()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<A> {
        self.nodes.get_mut(node_id.index()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.index()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.registered_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_nodes.is_empty()
    }
}
