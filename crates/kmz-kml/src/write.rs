//! XML serialization of the document tree.
//!
//! Uses the `quick-xml` event writer; text content is escaped on write, so
//! labels and descriptions may contain `<`, `&`, quotes, and newlines.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::document::{Feature, Folder, Geometry, Kml, Placemark, Style};
use crate::error::KmlResult;

const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

impl Kml {
    /// Serialize the document to `out` as UTF-8 XML with a declaration.
    pub fn write_to<W: Write>(&self, out: W) -> KmlResult<()> {
        let mut w = Writer::new_with_indent(out, b' ', 2);
        w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut kml = BytesStart::new("kml");
        kml.push_attribute(("xmlns", KML_NAMESPACE));
        w.write_event(Event::Start(kml))?;
        write_folder(&mut w, &self.folder)?;
        w.write_event(Event::End(BytesEnd::new("kml")))?;
        Ok(())
    }
}

fn write_folder<W: Write>(w: &mut Writer<W>, folder: &Folder) -> KmlResult<()> {
    w.write_event(Event::Start(BytesStart::new("Folder")))?;
    for entry in &folder.entries {
        match entry {
            Feature::Placemark(p) => write_placemark(w, p)?,
            Feature::Style(s)     => write_style(w, s)?,
        }
    }
    w.write_event(Event::End(BytesEnd::new("Folder")))?;
    Ok(())
}

fn write_placemark<W: Write>(w: &mut Writer<W>, placemark: &Placemark) -> KmlResult<()> {
    w.write_event(Event::Start(BytesStart::new("Placemark")))?;

    if let Some(name) = &placemark.name {
        text_element(w, "name", name)?;
    }
    if let Some(description) = &placemark.description {
        text_element(w, "description", description)?;
    }
    if let Some(url) = &placemark.style_url {
        text_element(w, "styleUrl", url)?;
    }

    match &placemark.geometry {
        Some(Geometry::Point { coord }) => {
            w.write_event(Event::Start(BytesStart::new("Point")))?;
            text_element(w, "coordinates", &coord.to_kml())?;
            w.write_event(Event::End(BytesEnd::new("Point")))?;
        }
        Some(Geometry::LineString { coords, extrude, tessellate }) => {
            w.write_event(Event::Start(BytesStart::new("LineString")))?;
            text_element(w, "extrude", flag(*extrude))?;
            text_element(w, "tessellate", flag(*tessellate))?;
            let joined: Vec<String> = coords.iter().map(|c| c.to_kml()).collect();
            text_element(w, "coordinates", &joined.join(" "))?;
            w.write_event(Event::End(BytesEnd::new("LineString")))?;
        }
        None => {}
    }

    w.write_event(Event::End(BytesEnd::new("Placemark")))?;
    Ok(())
}

fn write_style<W: Write>(w: &mut Writer<W>, style: &Style) -> KmlResult<()> {
    let mut start = BytesStart::new("Style");
    start.push_attribute(("id", style.id.as_str()));
    w.write_event(Event::Start(start))?;

    if let Some(icon) = &style.icon {
        w.write_event(Event::Start(BytesStart::new("IconStyle")))?;
        text_element(w, "scale", &icon.scale.to_string())?;
        w.write_event(Event::Start(BytesStart::new("Icon")))?;
        text_element(w, "href", &icon.href)?;
        w.write_event(Event::End(BytesEnd::new("Icon")))?;
        w.write_event(Event::End(BytesEnd::new("IconStyle")))?;
    }

    if let Some(line) = &style.line {
        w.write_event(Event::Start(BytesStart::new("LineStyle")))?;
        text_element(w, "color", &line.color)?;
        text_element(w, "colorMode", line.color_mode.as_str())?;
        text_element(w, "width", &line.width.to_string())?;
        w.write_event(Event::End(BytesEnd::new("LineStyle")))?;
    }

    w.write_event(Event::End(BytesEnd::new("Style")))?;
    Ok(())
}

fn text_element<W: Write>(w: &mut Writer<W>, tag: &str, text: &str) -> KmlResult<()> {
    w.write_event(Event::Start(BytesStart::new(tag)))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    w.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}
