//! Decision tree for minimax search
//!
//! Uses arena allocation: children are owned indices into the arena and the
//! parent link is a plain index back into it. The board itself is not stored
//! in the tree; each node only records the move that produced it.

use crate::board::Coord;
use crate::error::SearchError;

// ============================================================================
// TYPES
// ============================================================================

/// Node identifier (index into arena)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

/// A node in the decision tree
#[derive(Clone, Debug)]
pub struct DecisionNode {
    /// Heuristic or propagated score (None until resolved)
    pub score: Option<i32>,
    /// Move that led to this node (unused on the root)
    pub movement: Coord,
    /// True if the move into this node was made by the side not searching
    pub mover_is_opponent: bool,
    /// Parent node (None for root)
    pub parent: Option<NodeId>,
    /// Children in generation order
    pub children: Vec<NodeId>,
}

impl DecisionNode {
    fn new(score: Option<i32>, movement: Coord, mover_is_opponent: bool, parent: Option<NodeId>) -> Self {
        Self {
            score,
            movement,
            mover_is_opponent,
            parent,
            children: Vec::new(),
        }
    }

    /// Is this node a leaf?
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_resolved(&self) -> bool {
        self.score.is_some()
    }
}

// ============================================================================
// DECISION TREE
// ============================================================================

/// Minimax decision tree with arena allocation
#[derive(Debug)]
pub struct DecisionTree {
    nodes: Vec<DecisionNode>,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTree {
    /// Create a tree holding only an unscored root
    pub fn new() -> Self {
        let root = DecisionNode::new(None, Coord::default(), false, None);
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn get(&self, id: NodeId) -> &DecisionNode {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut DecisionNode {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    pub fn is_terminal(&self, id: NodeId) -> bool {
        self.get(id).is_terminal()
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Append an unscored child, to be resolved by searching below it
    pub fn add(&mut self, parent: NodeId, movement: Coord) -> NodeId {
        self.push_child(parent, None, movement)
    }

    /// Append a leaf child carrying its heuristic score
    pub fn add_terminal(&mut self, parent: NodeId, score: i32, movement: Coord) -> NodeId {
        self.push_child(parent, Some(score), movement)
    }

    fn push_child(&mut self, parent: NodeId, score: Option<i32>, movement: Coord) -> NodeId {
        let mover_is_opponent = !self.get(parent).mover_is_opponent;
        let child_id = NodeId(self.nodes.len());
        self.nodes
            .push(DecisionNode::new(score, movement, mover_is_opponent, Some(parent)));
        self.get_mut(parent).children.push(child_id);
        child_id
    }

    // ========================================================================
    // Reading results
    // ========================================================================

    /// Resolved score of a node
    pub fn score(&self, id: NodeId) -> Result<i32, SearchError> {
        self.get(id).score.ok_or(SearchError::Unresolved(id))
    }

    /// First child whose score equals the node's own score
    pub fn best_child(&self, id: NodeId) -> Option<NodeId> {
        let target = self.get(id).score?;
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.get(child).score == Some(target))
    }

    /// Move of the root's best child
    pub fn best_move(&self) -> Result<Coord, SearchError> {
        let root = self.root();
        self.score(root)?;
        self.best_child(root)
            .map(|child| self.get(child).movement)
            .ok_or(SearchError::Unresolved(root))
    }

    /// Moves and scores of a node's children, in generation order
    pub fn child_scores(&self, id: NodeId) -> Vec<(Coord, Option<i32>)> {
        self.children(id)
            .iter()
            .map(|&child| {
                let node = self.get(child);
                (node.movement, node.score)
            })
            .collect()
    }

    /// Nodes still lacking a score
    pub fn unresolved_nodes(&self) -> Vec<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|&id| !self.get(id).is_resolved())
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
