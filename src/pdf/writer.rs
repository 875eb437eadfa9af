//! Serializes an ordered page-handle sequence into a fresh PDF container.
//!
//! Each contributing source has its whole object graph copied once with
//! remapped ids, then a new `Pages` tree lists the kids in handle order and
//! every emitted page is re-parented under it. Copying the full graph keeps
//! shared resources (fonts, images) intact without walking per-page
//! dependencies.

use super::document::PageHandle;
use anyhow::{Context, Result};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::{HashMap, HashSet};
use std::path::Path;

pub fn write_document<P: AsRef<Path>>(
    docs: &[Document],
    pages: &[PageHandle],
    path: P,
) -> Result<()> {
    let mut out = Document::with_version("1.5");
    let mut id_map: HashMap<(usize, ObjectId), ObjectId> = HashMap::new();
    let mut copied: HashSet<usize> = HashSet::new();

    for handle in pages {
        if copied.insert(handle.source) {
            copy_source(&docs[handle.source], handle.source, &mut out, &mut id_map);
        }
    }

    let kids: Vec<Object> = pages
        .iter()
        .map(|handle| Object::Reference(id_map[&(handle.source, handle.id)]))
        .collect();

    let pages_id = out.new_object_id();
    for handle in pages {
        let new_id = id_map[&(handle.source, handle.id)];
        if let Ok(page_dict) = out.get_dictionary_mut(new_id) {
            page_dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Count", Object::Integer(pages.len() as i64));
    pages_dict.set("Kids", Object::Array(kids));
    out.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = out.add_object(catalog);

    out.trailer.set("Root", Object::Reference(catalog_id));
    out.trailer.set("Size", Object::Integer(out.max_id as i64 + 1));

    out.save(&path)
        .with_context(|| format!("Failed to save PDF: {}", path.as_ref().display()))?;
    Ok(())
}

/// Copy every object of `doc` into `out` under fresh ids, recording the
/// mapping under the given source index.
fn copy_source(
    doc: &Document,
    source: usize,
    out: &mut Document,
    id_map: &mut HashMap<(usize, ObjectId), ObjectId>,
) {
    let mut next = out.max_id + 1;
    for &old_id in doc.objects.keys() {
        id_map.insert((source, old_id), (next, 0));
        next += 1;
    }
    out.max_id = next - 1;

    for (&old_id, obj) in doc.objects.iter() {
        let new_id = id_map[&(source, old_id)];
        let mut cloned = obj.clone();
        remap_references(&mut cloned, source, id_map);
        out.objects.insert(new_id, cloned);
    }
}

fn remap_references(obj: &mut Object, source: usize, id_map: &HashMap<(usize, ObjectId), ObjectId>) {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = id_map.get(&(source, *id)) {
                *id = new_id;
            }
        }
        Object::Array(items) => {
            for item in items {
                remap_references(item, source, id_map);
            }
        }
        Object::Dictionary(dict) => {
            let keys: Vec<_> = dict.iter().map(|(k, _)| k.clone()).collect();
            for key in keys {
                if let Ok(value) = dict.get_mut(&key) {
                    remap_references(value, source, id_map);
                }
            }
        }
        Object::Stream(stream) => {
            let keys: Vec<_> = stream.dict.iter().map(|(k, _)| k.clone()).collect();
            for key in keys {
                if let Ok(value) = stream.dict.get_mut(&key) {
                    remap_references(value, source, id_map);
                }
            }
        }
        _ => {}
    }
}
