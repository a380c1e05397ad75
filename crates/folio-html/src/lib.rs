//! # Markup emission
//!
//! Renders a composed [`View`] tree into a static HTML document plus a
//! stylesheet derived from the active [`Theme`].
//!
//! The page carries no inline behavior: scroll-spy controls are emitted as
//! plain elements tagged with `data-jump`, and the wasm runtime attaches the
//! actual handlers after load. A page therefore degrades to ordinary anchor
//! navigation when scripting is unavailable.

pub mod render;
pub mod style;

pub use render::{Page, render_document};
pub use style::stylesheet;

use std::fs;
use std::io::Write as _;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while writing the site to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runtime loader referenced from the document head. The wasm build replaces
/// this stub next to the emitted page; until then it quietly does nothing.
const RUNTIME_LOADER: &str = "// folio runtime loader\n\
// The wasm-pack build drops folio_site.js / folio_site_bg.wasm next to this\n\
// file; without them the page falls back to plain anchor navigation.\n\
try {\n\
  const m = await import('./folio_site.js');\n\
  await m.default();\n\
} catch {\n\
  /* static fallback */\n\
}\n";

/// Write `index.html`, the stylesheet, and the runtime loader under `out`.
///
/// The stylesheet is generated from the theme that is current at call time,
/// so wrap the call in `with_theme` to publish a different palette.
pub fn write_site(page: &Page, out: &Path) -> Result<(), ExportError> {
    let assets = out.join("assets");
    fs::create_dir_all(&assets)?;

    let html = render_document(page);
    let css = stylesheet(&folio_core::theme());

    let mut f = fs::File::create(out.join("index.html"))?;
    f.write_all(html.as_bytes())?;

    let mut f = fs::File::create(assets.join("folio.css"))?;
    f.write_all(css.as_bytes())?;

    let mut f = fs::File::create(assets.join("folio.js"))?;
    f.write_all(RUNTIME_LOADER.as_bytes())?;

    log::info!("wrote site to {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_ui::{Modifier, Text, ViewExt as _};

    #[test]
    fn write_site_emits_page_and_assets() {
        let out = std::env::temp_dir().join(format!("folio-write-{}", std::process::id()));
        let page = Page {
            title: "t".into(),
            description: "d".into(),
            body: folio_ui::Column(Modifier::new()).child(Text("hello")),
        };

        write_site(&page, &out).unwrap();

        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("<p>hello</p>"));
        let css = fs::read_to_string(out.join("assets/folio.css")).unwrap();
        assert!(css.starts_with(":root {"));
        assert!(out.join("assets/folio.js").exists());

        fs::remove_dir_all(&out).unwrap();
    }
}
