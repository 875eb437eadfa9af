use crate::assemble;
use crate::page_ref::PageRequest;
use crate::pdf::DocumentSet;
use anyhow::Result;

pub fn run(a: &str, b: &str, position: usize, dest: Option<&str>) -> Result<()> {
    let request_a = PageRequest::parse(a)?;
    let request_b = PageRequest::parse(b)?;

    let mut set = DocumentSet::new();
    let pages_a = set.load(&request_a)?;
    let pages_b = set.load(&request_b)?;
    let inserted = pages_b.len();

    let combined = assemble::insert(pages_a, pages_b, position)?;

    let dest = dest.unwrap_or(&request_a.path);
    set.write(dest, &combined)?;

    println!(
        "Inserted {} page(s) at position {} and wrote {} page(s) to {}",
        inserted,
        position,
        combined.len(),
        dest
    );

    Ok(())
}
