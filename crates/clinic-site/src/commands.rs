use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::markup;

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// Build `out` from `template` with the sections of a cleaned export.
/// Returns the number of sections inserted.
pub fn extract(export: &Path, template: &Path, out: &Path) -> Result<usize> {
    let html = markup::clean_export(&read(export)?);
    let sections = markup::sections(&html);

    let layout = read(template)?;
    if !layout.contains(markup::SECTIONS_PLACEHOLDER) {
        warn!("{} has no sections placeholder", template.display());
    }

    write(out, &markup::fill_sections(&layout, &sections))?;
    info!("Extracted {} sections into {}", sections.len(), out.display());
    Ok(sections.len())
}

pub fn footer(footer: &Path, page: &Path) -> Result<()> {
    let footer = markup::clean_footer(&read(footer)?);
    let html = markup::insert_footer(&read(page)?, &footer);
    write(page, &html)?;
    info!("Footer replaced in {}", page.display());
    Ok(())
}

pub fn clean(page: &Path) -> Result<()> {
    let html = markup::clean_page(&read(page)?);
    write(page, &html)?;
    info!("Cleaned {}", page.display());
    Ok(())
}
