use crate::assemble;
use crate::page_ref::PageRequest;
use crate::pdf::DocumentSet;
use anyhow::Result;

/// Concatenate the sources in argument order into `dest`.
pub fn run_into(dest: &str, sources: &[String]) -> Result<()> {
    let mut set = DocumentSet::new();
    let mut loaded = Vec::with_capacity(sources.len());
    for source in sources {
        let request = PageRequest::parse(source)?;
        loaded.push(set.load(&request)?);
    }

    let combined = assemble::concat(loaded)?;
    set.write(dest, &combined)?;

    println!(
        "Appended {} file(s) ({} pages) into {}",
        sources.len(),
        combined.len(),
        dest
    );

    Ok(())
}

/// Append onto the first source: the destination is the first source's path
/// and the first source's own pages lead the output.
pub fn run_in_place(sources: &[String]) -> Result<()> {
    let dest = PageRequest::parse(&sources[0])?.path;
    run_into(&dest, sources)
}
