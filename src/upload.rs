//! Upload ingestion: validation, one-time classification and the ordered collection.
//!
//! Only `.csv`/`.txt` files, or files declared as `text/csv`/`text/plain`, are
//! accepted. Anything else is rejected with
//! [`ReportError::UnsupportedFileType`] and never enters the collection.
//!
//! Each accepted file gets a [`FileId`] so removal does not depend on list
//! position. Report generation borrows [`UploadCollection::files`], so the
//! collection cannot be mutated while a report is being assembled from it.

use crate::error::{ReportError, Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use uuid::Uuid;

pub const CSV_MIME: &str = "text/csv";
pub const TEXT_MIME: &str = "text/plain";

/// How a file is analysed. Decided once, at ingestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    Csv,
    PlainText,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::PlainText => "TXT",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive suffix match, so a bare `.csv` name still counts.
fn has_extension(name: &str, ext: &str) -> bool {
    name.len()
        .checked_sub(ext.len())
        .and_then(|start| name.get(start..))
        .is_some_and(|suffix| suffix.eq_ignore_ascii_case(ext))
}

/// Classify a file by extension or declared MIME type.
///
/// # Errors
///
/// Returns [`ReportError::UnsupportedFileType`] unless the name ends in
/// `.csv`/`.txt` or the declared kind is `text/csv`/`text/plain`.
pub fn classify(name: &str, declared_kind: Option<&str>) -> Result<FileKind> {
    let declared = declared_kind.map(str::trim).filter(|k| !k.is_empty());
    let is_csv = has_extension(name, ".csv") || declared == Some(CSV_MIME);
    let is_text = has_extension(name, ".txt") || declared == Some(TEXT_MIME);

    if is_csv {
        Ok(FileKind::Csv)
    } else if is_text {
        Ok(FileKind::PlainText)
    } else {
        Err(ReportError::UnsupportedFileType {
            name: name.to_owned(),
            declared_kind: declared.map(str::to_owned),
        })
    }
}

/// Stable identity for an upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(Uuid);

impl FileId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A decoded, classified upload. Immutable once created.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadedFile {
    id: FileId,
    name: String,
    content: String,
    kind: FileKind,
}

impl UploadedFile {
    /// Validate and classify an upload.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::UnsupportedFileType`] for files outside the accepted set.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        declared_kind: Option<&str>,
    ) -> Result<Self> {
        let name = name.into();
        let kind = classify(&name, declared_kind)?;
        Ok(Self {
            id: FileId::new(),
            name,
            content: content.into(),
            kind,
        })
    }

    /// Read a file from disk, decoding invalid UTF-8 lossily.
    ///
    /// The kind is checked before the file is read, so unsupported files are
    /// never opened.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::UnsupportedFileType`] for unsupported files, or an
    /// error if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let kind = classify(&name, None)?;

        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes).into_owned();

        Ok(Self {
            id: FileId::new(),
            name,
            content,
            kind,
        })
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn is_csv(&self) -> bool {
        self.kind == FileKind::Csv
    }
}

/// Uploads in the order they were added. Mutated only by add and remove-by-id.
#[derive(Clone, Debug, Default)]
pub struct UploadCollection {
    files: Vec<UploadedFile>,
}

impl UploadCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append an upload.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::UnsupportedFileType`]; the collection is left unchanged.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
        declared_kind: Option<&str>,
    ) -> Result<FileId> {
        let file = UploadedFile::new(name, content, declared_kind)?;
        Ok(self.push(file))
    }

    /// Append an already-validated upload.
    pub fn push(&mut self, file: UploadedFile) -> FileId {
        let id = file.id();
        tracing::debug!(file = file.name(), kind = %file.kind(), %id, "Upload accepted");
        self.files.push(file);
        id
    }

    /// Add a batch of `(name, content, declared_kind)` uploads in order.
    ///
    /// Unsupported entries are rejected one by one and returned; the rest are
    /// accepted.
    pub fn add_many<'a, N, C>(
        &mut self,
        uploads: impl IntoIterator<Item = (N, C, Option<&'a str>)>,
    ) -> Vec<ReportError>
    where
        N: Into<String>,
        C: Into<String>,
    {
        self.push_each(
            uploads
                .into_iter()
                .map(|(name, content, declared_kind)| {
                    UploadedFile::new(name, content, declared_kind)
                }),
        )
    }

    /// Add each path in order, skipping (and returning) the ones that fail.
    pub fn add_paths<P: AsRef<Path>>(&mut self, paths: &[P]) -> Vec<ReportError> {
        self.push_each(paths.iter().map(|p| UploadedFile::from_path(p.as_ref())))
    }

    fn push_each(
        &mut self,
        uploads: impl IntoIterator<Item = Result<UploadedFile>>,
    ) -> Vec<ReportError> {
        let mut rejected = Vec::new();
        for upload in uploads {
            match upload {
                Ok(file) => {
                    self.push(file);
                }
                Err(err) => {
                    tracing::warn!("Upload rejected: {err}");
                    rejected.push(err);
                }
            }
        }
        rejected
    }

    pub fn remove(&mut self, id: FileId) -> Option<UploadedFile> {
        let pos = self.files.iter().position(|f| f.id() == id)?;
        Some(self.files.remove(pos))
    }

    pub fn get(&self, id: FileId) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.id() == id)
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    /// First CSV upload; the one that drives chart data.
    pub fn first_csv(&self) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.is_csv())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
