use std::path::Path;

/// Abstract interface for file system operations.
pub trait FileSystem: Send + Sync {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Write UTF-8 content to a file, creating it if missing and
    /// replacing whatever is already there. Callers do not check for
    /// existence first.
    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()>;
}

/// Standard implementation of FileSystem using std::fs.
pub struct PhysicalFileSystem;

impl FileSystem for PhysicalFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        std::fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.md");

        let fs = PhysicalFileSystem;
        fs.write(&path, "# Hello\n").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "# Hello\n");
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.md");

        let fs = PhysicalFileSystem;
        fs.write(&path, "first").unwrap();
        fs.write(&path, "second").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "second");
    }
}
