use crate::errors::{Result, ZmatchError};
use crate::math::{parallel_combination, CScalar};
use crate::units::Frequency;

use super::cable::Cable;
use super::component::Component;
use super::lumped::LumpedElement;

/// Handle to a node inside a [`Network`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in insertion order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The two kinds of element a network node can hold.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Transmission-line segment.
    Cable(Cable),
    /// Lumped R/L/C element.
    Lumped(LumpedElement),
}

impl Component for Element {
    fn terminal_impedance(&self, frequency: Frequency) -> Result<CScalar> {
        match self {
            Self::Cable(c) => c.terminal_impedance(frequency),
            Self::Lumped(l) => l.terminal_impedance(frequency),
        }
    }

    fn loaded_impedance(&self, frequency: Frequency, load: CScalar) -> Result<CScalar> {
        match self {
            Self::Cable(c) => c.loaded_impedance(frequency, load),
            Self::Lumped(l) => l.loaded_impedance(frequency, load),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Cable(c) => c.name(),
            Self::Lumped(l) => l.name(),
        }
    }
}

impl From<Cable> for Element {
    fn from(cable: Cable) -> Self {
        Self::Cable(cable)
    }
}

impl From<LumpedElement> for Element {
    fn from(element: LumpedElement) -> Self {
        Self::Lumped(element)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
struct Node {
    element: Element,
    children: Vec<NodeId>,
}

/// Tree of cables and lumped elements, evaluated child-ward from any root.
///
/// Nodes live in an arena and are wired with [`Network::attach`]. There is no
/// parent back-reference and no cycle check; callers keep the wiring acyclic.
/// `Clone` yields an independent deep copy, which is what parallel sweeps
/// operate on.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Network {
    nodes: Vec<Node>,
}

impl Network {
    /// Creates an empty network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an unattached element and returns its handle.
    pub fn add(&mut self, element: impl Into<Element>) -> NodeId {
        self.nodes.push(Node {
            element: element.into(),
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Appends `child` to the ordered child list of `parent`.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check(child)?;
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Children of `id`, in attachment order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    /// Element stored at `id`.
    pub fn element(&self, id: NodeId) -> Result<&Element> {
        Ok(&self.node(id)?.element)
    }

    /// Mutable access to the element stored at `id`.
    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut Element> {
        Ok(&mut self.node_mut(id)?.element)
    }

    /// Looks a node up by element name (first match in insertion order).
    pub fn find(&self, name: &str) -> Result<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.element.name() == name)
            .map(NodeId)
            .ok_or_else(|| ZmatchError::NodeNotFound(name.to_owned()))
    }

    /// Iterates over all node handles in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true when no nodes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Input impedance looking into `root` at `frequency`.
    ///
    /// Leaves present their terminal impedance; inner nodes are terminated by
    /// the parallel combination of their children, evaluated recursively.
    /// Nothing is cached, so every call re-walks the subtree.
    pub fn impedance(&self, root: NodeId, frequency: Frequency) -> Result<CScalar> {
        let node = self.node(root)?;
        match self.load_impedance(root, frequency)? {
            None => node.element.terminal_impedance(frequency),
            Some(load) => node.element.loaded_impedance(frequency, load),
        }
    }

    /// Parallel combination of the children of `id`, or `None` for a leaf.
    pub fn load_impedance(&self, id: NodeId, frequency: Frequency) -> Result<Option<CScalar>> {
        let node = self.node(id)?;
        if node.children.is_empty() {
            return Ok(None);
        }
        let branches = node
            .children
            .iter()
            .map(|&child| self.impedance(child, frequency))
            .collect::<Result<Vec<_>>>()?;
        parallel_combination(branches)
            .map(Some)
            .ok_or_else(|| ZmatchError::DivergentNetwork {
                node: node.element.name().to_owned(),
            })
    }

    fn check(&self, id: NodeId) -> Result<()> {
        self.node(id).map(|_| ())
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(ZmatchError::UnknownNode(id.0))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(ZmatchError::UnknownNode(id.0))
    }
}
