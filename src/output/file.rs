//! Optional copy of the console stream written to a file.

use crate::fmt::{FormatTemplate, Placeholder};
use crate::internal;
use crate::platform;

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// strftime pattern used for `{TIME}` in file names. No colons, so the name
/// stays valid on every filesystem.
pub const FILE_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Where the mirror goes: a folder plus a file name pattern understanding
/// `{EXE}` and `{TIME}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    pub folder: String,
    pub name_pattern: String,
    /// Overwrite when false.
    pub append: bool,
}

impl Default for FileTarget {
    fn default() -> Self {
        Self {
            folder: ".".to_string(),
            name_pattern: "{EXE}_{TIME}.log".to_string(),
            append: false,
        }
    }
}

impl FileTarget {
    /// Folder and name pattern, overwriting by default.
    #[must_use]
    pub fn new(folder: impl Into<String>, name_pattern: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            name_pattern: name_pattern.into(),
            append: false,
        }
    }

    /// A fixed path, split into folder and name.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let folder = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| ".".to_string(), |p| p.to_string_lossy().into_owned());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(folder, name)
    }

    /// Keep existing content instead of truncating.
    #[must_use]
    pub const fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// Expands `~` in the folder and fills the name tokens. Unknown tokens stay
    /// in the name verbatim.
    #[must_use]
    pub fn resolve(&self) -> PathBuf {
        let folder = shellexpand::tilde(&self.folder);
        let name = FormatTemplate::parse(&self.name_pattern).render_with(|ph| match ph {
            Placeholder::Exe => Some(platform::executable_name()),
            Placeholder::Time => Some(Local::now().format(FILE_TIME_FORMAT).to_string()),
            _ => None,
        });
        Path::new(folder.as_ref()).join(name)
    }
}

/// Open mirror file. Buffered; flushed with the console and on drop.
#[derive(Debug)]
pub struct FileMirror {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileMirror {
    /// Creates the folder if needed and opens the file.
    ///
    /// # Errors
    /// Directory creation or file open failures.
    pub fn open(target: &FileTarget) -> io::Result<Self> {
        let path = target.resolve();
        internal::trace("FILE", &format!("Opening output file {}", path.display()));

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
            internal::debug("FILE", &format!("Created directory {}", parent.display()));
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if target.append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options.open(&path)?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Errors
    /// Write failures on the file.
    pub fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)
    }

    /// # Errors
    /// Flush failures on the file.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Drop for FileMirror {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
