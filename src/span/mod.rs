use std::{
    fmt::{Display, Formatter},
    path::Path,
    sync::Arc,
};

/// Where a token came from: the source file and the 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    filename: Arc<str>,
    line: usize,
}

impl Origin {
    pub fn new(filename: impl Into<Arc<str>>, line: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }

    pub fn from_path(path: &Path, line: usize) -> Self {
        Self::new(&*path.to_string_lossy(), line)
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Same file, different line. Shares the filename allocation.
    pub fn at_line(&self, line: usize) -> Self {
        Self {
            filename: Arc::clone(&self.filename),
            line,
        }
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}
