use std::path::Path;

use folio_core::{Theme, with_theme};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let out = Path::new("dist");
    with_theme(Theme::default(), || {
        folio_html::write_site(&folio_site::app::page(), out)
    })?;

    println!("site written to {}", out.display());
    Ok(())
}
