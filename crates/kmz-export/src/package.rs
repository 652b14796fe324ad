//! KMZ packaging: one zip archive holding `doc.kml` plus the icon images.

use std::io::{Seek, Write};

use kmz_kml::Kml;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{ExportError, ExportResult};
use crate::icon::{IconRegistry, IconRenderer};

/// Name of the document entry.  Geographic viewers expect it to be the
/// first entry of the archive.
pub const DOC_ENTRY: &str = "doc.kml";

/// Serialize `kml` and every registered icon into one zip archive on `out`.
///
/// Consumes the document and the output stream by value — an archive is
/// written at most once per export run, so concurrent writers can never
/// interleave on a shared stream.  On any error the stream contents are
/// invalid; there is no partial-success state.
pub(crate) fn write_kmz<W, R>(
    kml: Kml,
    renderer: &R,
    icons: &IconRegistry,
    out: W,
) -> ExportResult<()>
where
    W: Write + Seek,
    R: IconRenderer + ?Sized,
{
    let mut archive = ZipWriter::new(out);
    let options = SimpleFileOptions::default();

    archive.start_file(DOC_ENTRY, options)?;
    kml.write_to(&mut archive)?;

    for filename in icons.iter() {
        let bytes = renderer
            .icon_bytes(filename)
            .ok_or_else(|| ExportError::MissingIcon { filename: filename.to_owned() })?;
        archive.start_file(filename, options)?;
        archive.write_all(bytes)?;
    }

    archive.finish()?;
    Ok(())
}
