//! Current year in the footer.

use chrono::Datelike;
use folio_core::FolioResult;
use tracing::debug;

use crate::context::Page;

pub fn install(page: &Page) -> FolioResult<()> {
    let Some(year) = page.by_id("year") else {
        debug!("No #year element");
        return Ok(());
    };
    year.set_text_content(Some(&chrono::Local::now().year().to_string()));
    Ok(())
}
