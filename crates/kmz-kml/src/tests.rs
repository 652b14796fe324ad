//! Serialization tests for kmz-kml.

#[cfg(test)]
mod serialize {
    use crate::document::{
        ColorMode, Coord, Folder, Geometry, IconStyle, Kml, LineStyle, Placemark, Style,
    };

    fn render(kml: &Kml) -> String {
        let mut out = Vec::new();
        kml.write_to(&mut out).expect("serialize");
        String::from_utf8(out).expect("utf-8")
    }

    fn point_placemark(name: &str, lon: f64, lat: f64) -> Placemark {
        Placemark {
            name:        Some(name.to_owned()),
            description: None,
            style_url:   Some("#style_0".to_owned()),
            geometry:    Some(Geometry::Point { coord: Coord::flat(lon, lat) }),
        }
    }

    #[test]
    fn declaration_and_namespace() {
        let text = render(&Kml::default());
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(text.contains("<kml xmlns=\"http://www.opengis.net/kml/2.2\">"));
        assert!(text.contains("<Folder>"));
    }

    #[test]
    fn point_has_no_altitude() {
        let mut folder = Folder::default();
        folder.push_placemark(point_placemark("LAX", -118.41, 33.94));
        let text = render(&Kml::new(folder));
        assert!(text.contains("<coordinates>-118.41,33.94</coordinates>"), "{text}");
    }

    #[test]
    fn line_string_coordinates_and_flags() {
        let mut folder = Folder::default();
        folder.push_placemark(Placemark {
            name:        None,
            description: None,
            style_url:   Some("#style_2".to_owned()),
            geometry:    Some(Geometry::LineString {
                coords:     vec![Coord::at_altitude(20.0, 10.0, 0.0), Coord::at_altitude(21.0, 11.0, 0.0)],
                extrude:    true,
                tessellate: true,
            }),
        });
        let text = render(&Kml::new(folder));
        assert!(text.contains("<extrude>1</extrude>"));
        assert!(text.contains("<tessellate>1</tessellate>"));
        assert!(text.contains("<coordinates>20,10,0 21,11,0</coordinates>"), "{text}");
    }

    #[test]
    fn style_id_attribute_and_icon() {
        let mut folder = Folder::default();
        folder.push_style(Style {
            id:   "style_0".to_owned(),
            icon: Some(IconStyle { scale: 2.0, href: "node_0.png".to_owned() }),
            line: None,
        });
        let text = render(&Kml::new(folder));
        assert!(text.contains("<Style id=\"style_0\">"));
        assert!(text.contains("<scale>2</scale>"));
        assert!(text.contains("<href>node_0.png</href>"));
    }

    #[test]
    fn line_style_block() {
        let mut folder = Folder::default();
        folder.push_style(Style {
            id:   "style_5".to_owned(),
            icon: None,
            line: Some(LineStyle {
                color:      "#33ffffff".to_owned(),
                color_mode: ColorMode::Normal,
                width:      10.0,
            }),
        });
        let text = render(&Kml::new(folder));
        assert!(text.contains("<color>#33ffffff</color>"));
        assert!(text.contains("<colorMode>normal</colorMode>"));
        assert!(text.contains("<width>10</width>"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut folder = Folder::default();
        folder.push_placemark(Placemark {
            name:        Some("A & B".to_owned()),
            description: Some("size: <10\n".to_owned()),
            style_url:   None,
            geometry:    None,
        });
        let text = render(&Kml::new(folder));
        assert!(text.contains("A &amp; B"));
        assert!(text.contains("size: &lt;10"));
    }

    #[test]
    fn entries_serialize_in_insertion_order() {
        let mut folder = Folder::default();
        folder.push_placemark(Placemark { name: Some("first".to_owned()), ..Placemark::default() });
        folder.push_style(Style { id: "style_0".to_owned(), ..Style::default() });
        folder.push_placemark(Placemark { name: Some("second".to_owned()), ..Placemark::default() });
        folder.push_style(Style { id: "style_1".to_owned(), ..Style::default() });

        let text = render(&Kml::new(folder));
        let first = text.find("first").unwrap();
        let style0 = text.find("style_0").unwrap();
        let second = text.find("second").unwrap();
        let style1 = text.find("style_1").unwrap();
        assert!(first < style0 && style0 < second && second < style1);
    }
}
