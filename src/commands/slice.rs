use crate::page_ref::PageRequest;
use crate::pdf::DocumentSet;
use anyhow::Result;

/// Write the resolved pages of one reference. Resolution always yields
/// ascending page order, so `reversed` always produces strict descending
/// order no matter how the selection was written.
pub fn run(reference: &str, dest: Option<&str>, reversed: bool) -> Result<()> {
    let request = PageRequest::parse(reference)?;

    let mut set = DocumentSet::new();
    let mut pages = set.load(&request)?;
    if reversed {
        pages.reverse();
    }

    let dest = dest.unwrap_or(&request.path);
    set.write(dest, &pages)?;

    println!("Wrote {} page(s) to {}", pages.len(), dest);

    Ok(())
}
