//! The read-only graph model consumed by the exporter.
//!
//! # Ordering
//!
//! Nodes and edges are stored in insertion order, and `nodes()` / `edges()`
//! yield exactly that order.  The exporter depends on it: placemark emission
//! and style-id assignment follow graph iteration order, so two exports of
//! the same graph produce byte-identical documents.

use crate::attr::{AttributeMap, AttributeValue, Column, ColumnRole};
use crate::color::Rgba;
use crate::ids::{ColumnId, EdgeId, NodeId};

// ── Elements ──────────────────────────────────────────────────────────────────

/// A graph node with visual state and attribute values.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id:         NodeId,
    pub label:      Option<String>,
    /// Visual radius, ≥ 0.  Scaled against the graph-wide maximum to size
    /// the exported icon.
    pub size:       f32,
    pub color:      Rgba,
    pub attributes: AttributeMap,
}

impl Node {
    /// The label, or `""` for unlabeled nodes.
    pub fn label_or_empty(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    pub fn attribute(&self, column: ColumnId) -> Option<&AttributeValue> {
        self.attributes.get(&column)
    }
}

/// A graph edge.  Either endpoint may be unset.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub id:         EdgeId,
    pub source:     Option<NodeId>,
    pub target:     Option<NodeId>,
    pub weight:     f64,
    pub label:      Option<String>,
    /// Edge color; `None` means the exporter falls back to its default
    /// translucent white.
    pub color:      Option<Rgba>,
    pub attributes: AttributeMap,
}

impl Edge {
    pub fn attribute(&self, column: ColumnId) -> Option<&AttributeValue> {
        self.attributes.get(&column)
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// An ordered collection of nodes and edges plus their column tables.
///
/// Construct via [`GraphBuilder`].  The exporter never mutates a graph.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    node_columns: Vec<Column>,
    edge_columns: Vec<Column>,
    nodes:        Vec<Node>,
    edges:        Vec<Edge>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Columns of the node attribute table, in table order.
    pub fn node_columns(&self) -> &[Column] {
        &self.node_columns
    }

    /// Columns of the edge attribute table, in table order.
    pub fn edge_columns(&self) -> &[Column] {
        &self.edge_columns
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// Column ids are allocated from one counter shared by both tables, so a
/// node-table column and an edge-table column never collide.
///
/// # Example
///
/// ```
/// use kmz_core::{ColumnRole, GraphBuilder, Rgba};
///
/// let mut b = GraphBuilder::new();
/// let lat = b.add_node_column("latitude", ColumnRole::Latitude);
/// let lon = b.add_node_column("longitude", ColumnRole::Longitude);
/// let a = b.add_node(Some("LAX"), 5.0, Rgba::opaque(200, 40, 40));
/// b.set_node_attr(a, lat, 33.94);
/// b.set_node_attr(a, lon, -118.41);
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 1);
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    graph:       Graph,
    next_column: u32,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_column(&mut self, title: impl Into<String>, role: ColumnRole) -> Column {
        let id = ColumnId(self.next_column);
        self.next_column += 1;
        Column::new(id, title, role)
    }

    /// Add a column to the node attribute table and return its id.
    pub fn add_node_column(&mut self, title: impl Into<String>, role: ColumnRole) -> ColumnId {
        let column = self.alloc_column(title, role);
        let id = column.id;
        self.graph.node_columns.push(column);
        id
    }

    /// Add a column to the edge attribute table and return its id.
    pub fn add_edge_column(&mut self, title: impl Into<String>, role: ColumnRole) -> ColumnId {
        let column = self.alloc_column(title, role);
        let id = column.id;
        self.graph.edge_columns.push(column);
        id
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, label: Option<&str>, size: f32, color: Rgba) -> NodeId {
        let id = NodeId(self.graph.nodes.len() as u32);
        self.graph.nodes.push(Node {
            id,
            label: label.map(str::to_owned),
            size,
            color,
            attributes: AttributeMap::default(),
        });
        id
    }

    /// Add an edge and return its `EdgeId` (sequential from 0).
    pub fn add_edge(
        &mut self,
        source: Option<NodeId>,
        target: Option<NodeId>,
        weight: f64,
    ) -> EdgeId {
        let id = EdgeId(self.graph.edges.len() as u32);
        self.graph.edges.push(Edge {
            id,
            source,
            target,
            weight,
            label: None,
            color: None,
            attributes: AttributeMap::default(),
        });
        id
    }

    /// Set an attribute value on a node added earlier.
    ///
    /// Out-of-range ids are ignored (the builder is test/demo plumbing, not
    /// a validating loader).
    pub fn set_node_attr(
        &mut self,
        node: NodeId,
        column: ColumnId,
        value: impl Into<AttributeValue>,
    ) {
        if let Some(n) = self.graph.nodes.get_mut(node.index()) {
            n.attributes.insert(column, value.into());
        }
    }

    /// Set an attribute value on an edge added earlier.
    pub fn set_edge_attr(
        &mut self,
        edge: EdgeId,
        column: ColumnId,
        value: impl Into<AttributeValue>,
    ) {
        if let Some(e) = self.graph.edges.get_mut(edge.index()) {
            e.attributes.insert(column, value.into());
        }
    }

    /// Set the label of an edge added earlier.
    pub fn set_edge_label(&mut self, edge: EdgeId, label: &str) {
        if let Some(e) = self.graph.edges.get_mut(edge.index()) {
            e.label = Some(label.to_owned());
        }
    }

    /// Set the color of an edge added earlier.
    pub fn set_edge_color(&mut self, edge: EdgeId, color: Rgba) {
        if let Some(e) = self.graph.edges.get_mut(edge.index()) {
            e.color = Some(color);
        }
    }

    /// Consume the builder and produce the finished [`Graph`].
    pub fn build(self) -> Graph {
        self.graph
    }
}
