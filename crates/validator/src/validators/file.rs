//! Uploaded-file validator.
//!
//! Uploads are described by a [`FileHandle`]; the bytes themselves never
//! reach the rule.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationResult, Violation};

/// Name and size of a file picked by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileHandle {
    /// File name as reported by the browser, without directories.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

impl FileHandle {
    /// Creates a handle.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Text after the last `.` of the name, or the whole name when it has no
    /// dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or_default()
    }
}

/// Validates that a file was picked and, optionally, that it has the
/// expected extension (case-insensitive).
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::Validate;
/// use netpanel_validator::validators::{FileHandle, file};
///
/// let backup = FileHandle::new("backup.TAR", 2048);
/// assert!(file(Some("tar")).validate(&Some(backup.clone())).is_ok());
/// assert_eq!(file(Some("gz")).validate(&Some(backup)).unwrap_err().code(), "invalid_file_format");
/// assert_eq!(file(None).validate(&None).unwrap_err().code(), "required_file");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct File {
    format: Option<Cow<'static, str>>,
}

impl File {
    /// The identifier reported when no file was picked.
    pub const REQUIRED: &'static str = "required_file";
    /// The identifier reported for a wrong extension.
    pub const INVALID_FORMAT: &'static str = "invalid_file_format";

    /// Creates a validator; an empty `format` disables the extension check.
    #[must_use]
    pub fn new(format: Option<impl Into<Cow<'static, str>>>) -> Self {
        Self {
            format: format.map(Into::into).filter(|f| !f.is_empty()),
        }
    }

    /// The required extension, if any.
    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Checks a borrowed handle.
    pub fn check(&self, file: Option<&FileHandle>) -> ValidationResult {
        let Some(handle) = file else {
            return Err(Violation::new(Self::REQUIRED));
        };
        match self.format() {
            Some(format) if !handle.extension().eq_ignore_ascii_case(format) => {
                Err(Violation::new(Self::INVALID_FORMAT))
            }
            _ => Ok(()),
        }
    }
}

impl Validate for File {
    type Input = Option<FileHandle>;

    fn validate(&self, input: &Option<FileHandle>) -> ValidationResult {
        self.check(input.as_ref())
    }
}

/// Creates a [`File`] validator.
#[must_use]
pub fn file(format: Option<&'static str>) -> File {
    File::new(format)
}
