//! Unit tests for kmz-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ColumnId, EdgeId, NodeId};

    #[test]
    fn index_casts() {
        assert_eq!(NodeId(42).index(), 42);
        assert_eq!(usize::from(EdgeId(7)), 7);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(ColumnId(100) > ColumnId(99));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(ColumnId(0).to_string(), "ColumnId(0)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn finite_check() {
        assert!(GeoPoint::new(33.94, -118.41).is_finite());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_finite());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn display_six_decimals() {
        assert_eq!(GeoPoint::new(10.0, 20.5).to_string(), "(10.000000, 20.500000)");
    }
}

#[cfg(test)]
mod color {
    use crate::Rgba;

    #[test]
    fn code_is_zero_padded_argb() {
        // Channels below 0x10 must keep their leading zero.
        let c = Rgba::new(0x01, 0x02, 0x03, 0x0a);
        assert_eq!(c.kml_color_code(), "#0a010203");
    }

    #[test]
    fn opaque_alpha() {
        assert_eq!(Rgba::opaque(0xff, 0x00, 0x80).kml_color_code(), "#ffff0080");
    }
}

#[cfg(test)]
mod attr {
    use crate::AttributeValue;

    #[test]
    fn numeric_coercion() {
        assert_eq!(AttributeValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(AttributeValue::Int(-3).as_f64(), Some(-3.0));
        assert_eq!(AttributeValue::from("12.5").as_f64(), None);
        assert_eq!(AttributeValue::Bool(true).as_f64(), None);
    }

    #[test]
    fn display() {
        assert_eq!(AttributeValue::Int(7).to_string(), "7");
        assert_eq!(AttributeValue::Float(2.5).to_string(), "2.5");
        assert_eq!(AttributeValue::from("hub").to_string(), "hub");
    }
}

#[cfg(test)]
mod graph {
    use crate::{ColumnRole, GraphBuilder, NodeId, Rgba};

    #[test]
    fn insertion_order_preserved() {
        let mut b = GraphBuilder::new();
        let first = b.add_node(Some("first"), 1.0, Rgba::opaque(0, 0, 0));
        let second = b.add_node(Some("second"), 2.0, Rgba::opaque(0, 0, 0));
        b.add_edge(Some(first), Some(second), 1.0);

        let g = b.build();
        assert_eq!(g.nodes()[0].id, first);
        assert_eq!(g.nodes()[1].id, second);
        assert_eq!(g.edges()[0].source, Some(first));
    }

    #[test]
    fn column_ids_unique_across_tables() {
        let mut b = GraphBuilder::new();
        let n = b.add_node_column("latitude", ColumnRole::Latitude);
        let e = b.add_edge_column("kind", ColumnRole::Generic);
        assert_ne!(n, e);
    }

    #[test]
    fn attributes_round_trip() {
        let mut b = GraphBuilder::new();
        let lat = b.add_node_column("latitude", ColumnRole::Latitude);
        let n = b.add_node(None, 1.0, Rgba::opaque(0, 0, 0));
        b.set_node_attr(n, lat, 33.94);

        let g = b.build();
        let node = g.node(n).unwrap();
        assert_eq!(node.attribute(lat).and_then(|v| v.as_f64()), Some(33.94));
    }

    #[test]
    fn missing_node_lookup() {
        let g = GraphBuilder::new().build();
        assert!(g.node(NodeId(0)).is_none());
    }

    #[test]
    fn unlabeled_node_renders_empty() {
        let mut b = GraphBuilder::new();
        let n = b.add_node(None, 1.0, Rgba::opaque(0, 0, 0));
        let g = b.build();
        assert_eq!(g.node(n).unwrap().label_or_empty(), "");
    }
}
