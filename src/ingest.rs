// Document ingestion: turn a file path into plain text for the analyzer.
//
// Plain text is read as UTF-8. A .docx file is a ZIP archive whose body sits
// in word/document.xml; its text runs are joined paragraph by paragraph.
// Legacy binary .doc files are recognised so the error message can say so,
// but their contents are not parsed.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex_lite::Regex;
use thiserror::Error;
use tracing::debug;

/// Extensions `read_document` accepts, lower-case, without the dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "docx"];

/// Archive member holding the main body of a .docx document.
const DOCX_BODY: &str = "word/document.xml";

// `<w:p>` or `<w:p attr=..>` up to its `</w:p>`, or an empty `<w:p/>`.
// `<w:pPr>` and friends never match because a space, `>` or `/` must follow.
static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:p(?:\s[^>/]*)?(?:/>|>(.*?)</w:p>)").expect("paragraph pattern is valid")
});

// A text run's content, or a tab.
static TEXT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:tab/>").expect("text run pattern is valid")
});

/// Why a document could not be turned into text.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("unsupported file format '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a readable Word document {path}: {source}")]
    Docx {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

/// Read the text content of the document at `path`.
pub fn read_document(path: &Path) -> Result<String, IngestError> {
    if !path.exists() {
        return Err(IngestError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(IngestError::NotAFile(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "txt" => {
            debug!(path = %path.display(), "Reading plain text document");
            fs::read_to_string(path).map_err(|source| io_error(path, source))
        }
        "docx" => {
            debug!(path = %path.display(), "Reading Word document");
            read_docx(path)
        }
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        }),
    }
}

fn read_docx(path: &Path) -> Result<String, IngestError> {
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    let docx_error = |source| IngestError::Docx {
        path: path.to_path_buf(),
        source,
    };

    let mut archive = zip::ZipArchive::new(file).map_err(docx_error)?;
    let mut body = archive.by_name(DOCX_BODY).map_err(docx_error)?;
    let mut xml = String::new();
    body.read_to_string(&mut xml)
        .map_err(|source| io_error(path, source))?;

    let text = docx_text(&xml);
    debug!(
        path = %path.display(),
        chars = text.chars().count(),
        "Extracted Word document text"
    );
    Ok(text)
}

/// Text of a WordprocessingML body: one line per paragraph, runs concatenated.
pub fn docx_text(xml: &str) -> String {
    let mut text = String::new();
    for paragraph in PARAGRAPH.captures_iter(xml) {
        if let Some(content) = paragraph.get(1) {
            for run in TEXT_RUN.captures_iter(content.as_str()) {
                match run.get(1) {
                    Some(t) => text.push_str(&unescape_xml(t.as_str())),
                    None => text.push('\t'),
                }
            }
        }
        text.push('\n');
    }
    text
}

fn unescape_xml(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn io_error(path: &Path, source: io::Error) -> IngestError {
    IngestError::Io {
        path: path.to_path_buf(),
        source,
    }
}
