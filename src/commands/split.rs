use crate::page_ref::PageRequest;
use crate::pdf::DocumentSet;
use anyhow::Result;

/// Write every resolved page to its own file, `{prefix}{index}.pdf`, where
/// `index` counts positions within the resolved sequence.
pub fn run(reference: &str, prefix: Option<&str>) -> Result<()> {
    let request = PageRequest::parse(reference)?;

    let mut set = DocumentSet::new();
    let pages = set.load(&request)?;

    let prefix = match prefix {
        Some(p) => p.to_string(),
        None => default_prefix(&request.path),
    };

    for (index, page) in pages.iter().enumerate() {
        let path = format!("{prefix}{index}.pdf");
        set.write(&path, std::slice::from_ref(page))?;
    }

    println!("Split {} page(s) into {}N.pdf", pages.len(), prefix);

    Ok(())
}

/// Literal four-character strip, assuming the path ends in ".pdf". Not
/// extension-aware: any other suffix loses its last four characters too.
fn default_prefix(path: &str) -> String {
    let keep = path.chars().count().saturating_sub(4);
    path.chars().take(keep).collect()
}
