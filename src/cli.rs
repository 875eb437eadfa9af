use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pdfweave")]
#[command(about = "Rearrange PDF pages with a compact page selection language")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// File arguments accept an optional page selection in brackets, e.g.
/// "doc.pdf[1,4:9,-1]": 1-based indices, negative counts from the end,
/// `b:e` ranges with either bound open. Selected pages always come out
/// deduplicated in ascending page order.
#[derive(Subcommand)]
pub enum Commands {
    /// Insert one file's pages into another at a position
    #[command(visible_alias = "i")]
    Insert {
        /// File receiving the pages
        a: String,

        /// File whose pages are inserted
        b: String,

        /// Insertion position in A: 0 prepends, A's page count appends
        position: usize,

        /// Output file (default: overwrite A)
        dest: Option<String>,
    },

    /// Append files, in order, into a new file
    #[command(name = "append-into", visible_alias = "an")]
    AppendInto {
        /// Output file
        dest: String,

        /// Files to append (at least 2)
        #[arg(required = true)]
        sources: Vec<String>,
    },

    /// Append files onto the first one
    #[command(visible_alias = "a")]
    Append {
        /// Files to append (at least 2); the first is overwritten
        #[arg(required = true)]
        sources: Vec<String>,
    },

    /// Write the selected pages of a file, in ascending page order
    #[command(visible_alias = "s")]
    Slice {
        /// File with optional selection, e.g. "doc.pdf[1,4:9,-1]"
        file: String,

        /// Output file (default: the input path without its selection)
        dest: Option<String>,
    },

    /// Write the selected pages of a file in descending page order
    #[command(visible_alias = "r")]
    Reverse {
        /// File with optional selection
        file: String,

        /// Output file (default: the input path without its selection)
        dest: Option<String>,
    },

    /// Interleave pages from several files round-robin
    #[command(visible_alias = "m")]
    Merge {
        /// Output file
        dest: String,

        /// Files to interleave (at least 2)
        #[arg(required = true)]
        sources: Vec<String>,
    },

    /// Write every selected page to its own single-page file
    #[command(visible_alias = "p")]
    Split {
        /// File with optional selection
        file: String,

        /// Output prefix (default: the input path minus its ".pdf" suffix)
        prefix: Option<String>,
    },
}
