use crate::error::Error;
use std::collections::BTreeSet;

/// A parsed file reference like `doc.pdf[1,3,4:9,-1]`: a path plus an
/// optional page selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub path: String,
    pub selection: Option<Vec<SelectionTerm>>,
}

/// One comma-separated unit inside the brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTerm {
    /// A single 1-based page number; negative counts from the end.
    Index(i64),
    /// `b:e` with either bound optional.
    Range(Option<i64>, Option<i64>),
}

impl PageRequest {
    /// Parse a reference token like "doc.pdf", "doc.pdf[3]", "doc.pdf[1,4:9]".
    pub fn parse(token: &str) -> Result<Self, Error> {
        let Some((path, rest)) = token.split_once('[') else {
            return Ok(PageRequest {
                path: token.to_string(),
                selection: None,
            });
        };

        let Some(inner) = rest.strip_suffix(']') else {
            return Err(Error::parse(token, "missing closing bracket"));
        };

        let terms = inner
            .split(',')
            .map(|term| parse_term(token, term.trim()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageRequest {
            path: path.to_string(),
            selection: Some(terms),
        })
    }

    /// Resolve the selection against a page count into zero-based positions,
    /// deduplicated and sorted ascending. Term order in the selection is
    /// deliberately discarded: `[5,1]` yields the same pages as `[1,5]`.
    pub fn resolve(&self, page_count: usize) -> Result<Vec<usize>, Error> {
        let Some(terms) = &self.selection else {
            // No selection reads the same as a bare `:`.
            return Ok((0..page_count).collect());
        };

        let mut positions = BTreeSet::new();
        for term in terms {
            match *term {
                SelectionTerm::Index(i) => {
                    positions.insert(self.resolve_index(i, page_count)?);
                }
                SelectionTerm::Range(b, e) => {
                    let start = b.map_or(0, |v| end_relative(v, page_count));
                    let stop = e.map_or(page_count as i64, |v| end_relative(v, page_count));
                    for pos in start.max(0)..stop.min(page_count as i64) {
                        positions.insert(pos as usize);
                    }
                }
            }
        }

        Ok(positions.into_iter().collect())
    }

    fn resolve_index(&self, i: i64, page_count: usize) -> Result<usize, Error> {
        if i == 0 {
            return Err(Error::InvalidIndex);
        }

        // The magnitude test rejects -page_count even though the wrap would
        // land it on the first page. That boundary quirk is part of the
        // reference language as shipped; see DESIGN.md before "fixing" it.
        let magnitude = if i > 0 { i - 1 } else { -i };
        if magnitude > page_count as i64 - 1 {
            return Err(Error::out_of_range(i.to_string(), page_count));
        }

        let pos = if i > 0 { i - 1 } else { page_count as i64 + i };
        Ok(pos as usize)
    }
}

/// Map a range bound to a zero-based offset: positive bounds drop by one,
/// zero and negative bounds count back from the end. No bounds check here;
/// ranges clamp instead of failing.
fn end_relative(v: i64, page_count: usize) -> i64 {
    let v = if v > 0 { v - 1 } else { v };
    if v < 0 {
        page_count as i64 + v
    } else {
        v
    }
}

fn parse_term(token: &str, term: &str) -> Result<SelectionTerm, Error> {
    if term.contains(':') {
        let mut bounds = term.splitn(3, ':');
        let b = parse_bound(token, bounds.next().unwrap_or(""))?;
        let e = parse_bound(token, bounds.next().unwrap_or(""))?;
        if bounds.next().is_some() {
            return Err(Error::parse(token, format!("malformed range `{term}`")));
        }
        Ok(SelectionTerm::Range(b, e))
    } else {
        let i = term
            .parse::<i64>()
            .map_err(|_| Error::parse(token, format!("`{term}` is not a page number")))?;
        Ok(SelectionTerm::Index(i))
    }
}

fn parse_bound(token: &str, text: &str) -> Result<Option<i64>, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<i64>()
        .map(Some)
        .map_err(|_| Error::parse(token, format!("`{text}` is not a page number")))
}
