use crate::assemble;
use crate::page_ref::PageRequest;
use crate::pdf::DocumentSet;
use anyhow::Result;

/// Round-robin interleave of the sources into `dest`: one page from each
/// source per pass, in argument order, until all are exhausted.
pub fn run(dest: &str, sources: &[String]) -> Result<()> {
    let mut set = DocumentSet::new();
    let mut loaded = Vec::with_capacity(sources.len());
    for source in sources {
        let request = PageRequest::parse(source)?;
        loaded.push(set.load(&request)?);
    }

    let woven = assemble::interleave(loaded)?;
    set.write(dest, &woven)?;

    println!(
        "Interleaved {} file(s) ({} pages) into {}",
        sources.len(),
        woven.len(),
        dest
    );

    Ok(())
}
