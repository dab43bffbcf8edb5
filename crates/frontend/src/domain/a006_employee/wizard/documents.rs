use std::collections::BTreeMap;
use thiserror::Error;

/// Largest accepted upload: 5 MiB
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    ProfilePhoto,
    AadhaarCard,
    PanCard,
    Passbook,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::ProfilePhoto,
        DocumentKind::AadhaarCard,
        DocumentKind::PanCard,
        DocumentKind::Passbook,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::ProfilePhoto => "Profile Photo",
            DocumentKind::AadhaarCard => "Aadhaar Card",
            DocumentKind::PanCard => "PAN Card",
            DocumentKind::Passbook => "Bank Passbook",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            DocumentKind::ProfilePhoto => "Recent passport-size photograph",
            DocumentKind::AadhaarCard => "Front side of the Aadhaar card",
            DocumentKind::PanCard => "PAN card copy",
            DocumentKind::Passbook => "First page of the bank passbook",
        }
    }

    pub fn is_required(self) -> bool {
        self != DocumentKind::Passbook
    }

    pub fn accepts_pdf(self) -> bool {
        self != DocumentKind::ProfilePhoto
    }

    /// Value for the file input's `accept` attribute
    pub fn accept_attr(self) -> &'static str {
        if self.accepts_pdf() {
            "image/*,application/pdf"
        } else {
            "image/*"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Please upload only image files for profile photo")]
    ImageOnly,
    #[error("Please upload only images or PDF files")]
    UnsupportedType,
    #[error("File size should be less than 5MB")]
    TooLarge,
}

pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

pub fn is_pdf(mime: &str) -> bool {
    mime == "application/pdf"
}

/// Check a file's type and size against what `kind` accepts
pub fn validate_upload(kind: DocumentKind, mime: &str, size: u64) -> Result<(), UploadRejection> {
    let type_ok = is_image(mime) || (kind.accepts_pdf() && is_pdf(mime));
    if !type_ok {
        return Err(if kind.accepts_pdf() {
            UploadRejection::UnsupportedType
        } else {
            UploadRejection::ImageOnly
        });
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge);
    }
    Ok(())
}

/// An accepted file; `H` is the browser handle (or a stand-in in tests)
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile<H> {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub handle: H,
}

impl<H> UploadedFile<H> {
    pub fn is_pdf(&self) -> bool {
        is_pdf(&self.mime)
    }

    /// Size for display, e.g. "1.5 MB"
    pub fn size_label(&self) -> String {
        let kb = self.size as f64 / 1024.0;
        if kb < 1024.0 {
            format!("{:.1} KB", kb)
        } else {
            format!("{:.1} MB", kb / 1024.0)
        }
    }
}

/// Files picked on the Documents step, one per kind. Never persisted.
#[derive(Debug, Clone)]
pub struct DocumentSet<H> {
    files: BTreeMap<DocumentKind, UploadedFile<H>>,
}

impl<H> Default for DocumentSet<H> {
    fn default() -> Self {
        Self {
            files: BTreeMap::new(),
        }
    }
}

impl<H> DocumentSet<H> {
    /// Validate and store `file`, replacing any previous one of that kind.
    /// A rejected file leaves the set unchanged.
    pub fn accept(&mut self, kind: DocumentKind, file: UploadedFile<H>) -> Result<Option<UploadedFile<H>>, UploadRejection> {
        validate_upload(kind, &file.mime, file.size)?;
        Ok(self.files.insert(kind, file))
    }

    pub fn remove(&mut self, kind: DocumentKind) -> Option<UploadedFile<H>> {
        self.files.remove(&kind)
    }

    pub fn get(&self, kind: DocumentKind) -> Option<&UploadedFile<H>> {
        self.files.get(&kind)
    }

    pub fn missing_required(&self) -> Vec<DocumentKind> {
        DocumentKind::ALL
            .into_iter()
            .filter(|k| k.is_required() && !self.files.contains_key(k))
            .collect()
    }

    pub fn required_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(mime: &str, size: u64) -> UploadedFile<()> {
        UploadedFile {
            name: "scan".into(),
            mime: mime.into(),
            size,
            handle: (),
        }
    }

    #[test]
    fn test_profile_photo_accepts_images_only() {
        assert!(validate_upload(DocumentKind::ProfilePhoto, "image/jpeg", 1000).is_ok());
        assert_eq!(
            validate_upload(DocumentKind::ProfilePhoto, "application/pdf", 1000),
            Err(UploadRejection::ImageOnly)
        );
    }

    #[test]
    fn test_other_kinds_accept_pdf() {
        assert!(validate_upload(DocumentKind::AadhaarCard, "application/pdf", 1000).is_ok());
        assert!(validate_upload(DocumentKind::Passbook, "image/png", 1000).is_ok());
        assert_eq!(
            validate_upload(DocumentKind::PanCard, "text/plain", 10),
            Err(UploadRejection::UnsupportedType)
        );
    }

    #[test]
    fn test_size_limit() {
        assert!(validate_upload(DocumentKind::PanCard, "image/png", MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(
            validate_upload(DocumentKind::PanCard, "image/png", MAX_UPLOAD_BYTES + 1),
            Err(UploadRejection::TooLarge)
        );
        assert_eq!(UploadRejection::TooLarge.to_string(), "File size should be less than 5MB");
    }

    #[test]
    fn test_rejection_leaves_set_unchanged() {
        let mut set = DocumentSet::default();
        set.accept(DocumentKind::PanCard, file("image/png", 10)).unwrap();
        let rejected = set.accept(DocumentKind::PanCard, file("image/png", MAX_UPLOAD_BYTES * 2));
        assert!(rejected.is_err());
        assert_eq!(set.get(DocumentKind::PanCard).map(|f| f.size), Some(10));
    }

    #[test]
    fn test_required_documents() {
        let mut set = DocumentSet::default();
        assert_eq!(set.missing_required().len(), 3);
        set.accept(DocumentKind::ProfilePhoto, file("image/jpeg", 10)).unwrap();
        set.accept(DocumentKind::AadhaarCard, file("application/pdf", 10)).unwrap();
        assert_eq!(set.missing_required(), vec![DocumentKind::PanCard]);
        set.accept(DocumentKind::PanCard, file("image/png", 10)).unwrap();
        assert!(set.required_complete());
        assert!(set.get(DocumentKind::Passbook).is_none());

        set.remove(DocumentKind::AadhaarCard);
        assert!(!set.required_complete());
    }

    #[test]
    fn test_size_label() {
        assert_eq!(file("image/png", 1536).size_label(), "1.5 KB");
        assert_eq!(file("image/png", 3 * 1024 * 1024).size_label(), "3.0 MB");
    }
}
