//! Attribute columns and values.
//!
//! A graph carries two column tables (node and edge).  Each column has a
//! title shown to users and a semantic role; values are loosely typed the way
//! attribute tables in graph tools are.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::ids::ColumnId;

/// Per-element attribute storage, keyed by column id.
pub type AttributeMap = FxHashMap<ColumnId, AttributeValue>;

// ── Columns ───────────────────────────────────────────────────────────────────

/// Semantic role of an attribute column.
///
/// Hosts that already know which columns hold coordinates designate them
/// here; otherwise every column is `Generic` and the geo-column resolver
/// falls back to title matching.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnRole {
    Generic,
    Latitude,
    Longitude,
}

/// One attribute column: identity, user-facing title, semantic role.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    pub id:    ColumnId,
    pub title: String,
    pub role:  ColumnRole,
}

impl Column {
    pub fn new(id: ColumnId, title: impl Into<String>, role: ColumnRole) -> Self {
        Self { id, title: title.into(), role }
    }
}

// ── Values ────────────────────────────────────────────────────────────────────

/// A loosely typed attribute value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl AttributeValue {
    /// Numeric coercion used for coordinate columns.
    ///
    /// `Text` and `Bool` values are not coordinates, even when parseable.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Int(v)   => Some(*v as f64),
            AttributeValue::Float(v) => Some(*v),
            _                        => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Int(v)   => write!(f, "{v}"),
            AttributeValue::Float(v) => write!(f, "{v}"),
            AttributeValue::Text(v)  => write!(f, "{v}"),
            AttributeValue::Bool(v)  => write!(f, "{v}"),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}
