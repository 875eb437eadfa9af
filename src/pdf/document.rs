use crate::page_ref::PageRequest;
use anyhow::{Context, Result};
use lopdf::{Document, ObjectId};
use std::path::Path;

/// Opaque reference to one page of a loaded source document. The assembler
/// only reorders these; it never looks at what they point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHandle {
    pub(crate) source: usize,
    pub(crate) id: ObjectId,
}

/// The source documents one operation reads from. Pages are handed out as
/// `PageHandle`s that index back into this set, so the set stays alive until
/// the output is written.
pub struct DocumentSet {
    docs: Vec<Document>,
}

impl DocumentSet {
    pub fn new() -> Self {
        DocumentSet { docs: Vec::new() }
    }

    /// Open the request's file and resolve its selection against the live
    /// page count. Handles come back in resolved (ascending) order.
    pub fn load(&mut self, request: &PageRequest) -> Result<Vec<PageHandle>> {
        let doc = Document::load(&request.path)
            .with_context(|| format!("Failed to open PDF: {}", request.path))?;

        let page_ids = ordered_page_ids(&doc);
        let positions = request.resolve(page_ids.len())?;

        let source = self.docs.len();
        let handles = positions
            .into_iter()
            .map(|pos| PageHandle {
                source,
                id: page_ids[pos],
            })
            .collect();

        self.docs.push(doc);
        Ok(handles)
    }

    /// Write the handles, in the order given, as a new document at `path`.
    pub fn write<P: AsRef<Path>>(&self, path: P, pages: &[PageHandle]) -> Result<()> {
        super::writer::write_document(&self.docs, pages, path)
    }
}

/// Page object ids in document order.
fn ordered_page_ids(doc: &Document) -> Vec<ObjectId> {
    let mut pages: Vec<_> = doc.get_pages().into_iter().collect();
    pages.sort_by_key(|(num, _)| *num);
    pages.into_iter().map(|(_, id)| id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble;
    use lopdf::{Dictionary, Object};
    use std::path::PathBuf;

    /// Build a PDF whose pages are distinguishable by MediaBox width.
    fn sample_pdf(name: &str, widths: &[i64]) -> PathBuf {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let kids: Vec<Object> = widths
            .iter()
            .map(|&width| {
                let mut page = Dictionary::new();
                page.set("Type", Object::Name(b"Page".to_vec()));
                page.set("Parent", Object::Reference(pages_id));
                page.set(
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(width),
                        Object::Integer(792),
                    ]),
                );
                Object::Reference(doc.add_object(page))
            })
            .collect();

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Count", Object::Integer(kids.len() as i64));
        pages_dict.set("Kids", Object::Array(kids));
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let path = std::env::temp_dir().join(format!("pdfweave_{name}.pdf"));
        doc.save(&path).unwrap();
        path
    }

    fn page_widths(path: &Path) -> Vec<i64> {
        let doc = Document::load(path).unwrap();
        ordered_page_ids(&doc)
            .into_iter()
            .map(|id| {
                let dict = doc.get_dictionary(id).unwrap();
                match dict.get(b"MediaBox").unwrap() {
                    Object::Array(bounds) => match bounds[2] {
                        Object::Integer(width) => width,
                        _ => panic!("non-integer MediaBox width"),
                    },
                    _ => panic!("missing MediaBox"),
                }
            })
            .collect()
    }

    fn request(path: &Path, selection: &str) -> PageRequest {
        PageRequest::parse(&format!("{}{selection}", path.display())).unwrap()
    }

    #[test]
    fn test_load_resolves_selection() {
        let path = sample_pdf("load_sel", &[101, 102, 103, 104, 105]);
        let out = std::env::temp_dir().join("pdfweave_load_sel_out.pdf");

        let mut set = DocumentSet::new();
        let pages = set.load(&request(&path, "[2,4]")).unwrap();
        assert_eq!(pages.len(), 2);

        set.write(&out, &pages).unwrap();
        assert_eq!(page_widths(&out), vec![102, 104]);
    }

    #[test]
    fn test_write_preserves_handle_order() {
        let path = sample_pdf("order", &[201, 202, 203]);
        let out = std::env::temp_dir().join("pdfweave_order_out.pdf");

        let mut set = DocumentSet::new();
        let mut pages = set.load(&request(&path, "")).unwrap();
        pages.reverse();

        set.write(&out, &pages).unwrap();
        assert_eq!(page_widths(&out), vec![203, 202, 201]);
    }

    #[test]
    fn test_write_across_documents() {
        let path_a = sample_pdf("weave_a", &[301, 302, 303]);
        let path_b = sample_pdf("weave_b", &[401]);
        let out = std::env::temp_dir().join("pdfweave_weave_out.pdf");

        let mut set = DocumentSet::new();
        let a = set.load(&request(&path_a, "")).unwrap();
        let b = set.load(&request(&path_b, "")).unwrap();

        let woven = assemble::interleave(vec![a, b]).unwrap();
        set.write(&out, &woven).unwrap();
        assert_eq!(page_widths(&out), vec![301, 401, 302, 303]);
    }

    #[test]
    fn test_repeated_handles_repeat_pages() {
        let path = sample_pdf("repeat", &[501, 502]);
        let out = std::env::temp_dir().join("pdfweave_repeat_out.pdf");

        let mut set = DocumentSet::new();
        let pages = set.load(&request(&path, "[1]")).unwrap();
        let doubled = vec![pages[0], pages[0]];

        set.write(&out, &doubled).unwrap();
        assert_eq!(page_widths(&out), vec![501, 501]);
    }
}
