use std::io::{Cursor, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::error::ShellError;
use crate::path::{self, ROOT};
use crate::vfs::{FileContent, VirtualFileSystem};

/// Load a VFS from a zip archive on disk.
///
/// The existence check happens before any bytes are read, so a missing
/// archive is reported as [`ShellError::ArchiveMissing`] rather than an IO error.
pub fn load_from_path(archive_path: &Path) -> Result<VirtualFileSystem, ShellError> {
    if !archive_path.is_file() {
        return Err(ShellError::ArchiveMissing(archive_path.to_path_buf()));
    }
    let data = std::fs::read(archive_path)?;
    tracing::debug!(path = %archive_path.display(), bytes = data.len(), "read archive");
    load_from_bytes(&data)
}

/// Build a fresh VFS from zip bytes. Nothing is returned unless every entry
/// was read, so a corrupt archive never yields a half-populated tree.
pub fn load_from_bytes(data: &[u8]) -> Result<VirtualFileSystem, ShellError> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let mut vfs = VirtualFileSystem::new();
    let mut files = 0usize;
    let mut dirs = 0usize;
    let mut binaries = 0usize;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        // some archivers write windows separators
        let name = entry.name().replace('\\', "/");
        let canonical = path::normalize(&name);

        if name.ends_with('/') {
            tracing::debug!(entry = %name, path = %canonical, "directory entry");
            vfs.ensure_dir_all(&canonical);
            dirs += 1;
            continue;
        }

        let mut raw = Vec::new();
        entry
            .read_to_end(&mut raw)
            .map_err(zip::result::ZipError::from)?;

        if canonical == ROOT {
            tracing::warn!(entry = %name, "skipping file entry that resolves to the root");
            continue;
        }

        let content = FileContent::from_bytes(raw);
        if content.is_binary() {
            tracing::warn!(path = %canonical, "non UTF-8 entry stored as binary");
            binaries += 1;
        } else {
            tracing::debug!(path = %canonical, "text entry");
        }
        if let Err(err) = vfs.insert_file(&canonical, content) {
            tracing::warn!(path = %canonical, error = %err, "file entry would replace a populated directory, skipped");
            continue;
        }
        files += 1;
    }

    tracing::info!(files, dirs, binaries, nodes = vfs.len(), "archive loaded");
    Ok(vfs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    enum Entry<'a> {
        Dir(&'a str),
        File(&'a str, &'a [u8]),
    }

    fn build_zip(entries: &[Entry]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for entry in entries {
            match entry {
                Entry::Dir(name) => writer.add_directory(*name, options).unwrap(),
                Entry::File(name, data) => {
                    writer.start_file(*name, options).unwrap();
                    writer.write_all(data).unwrap();
                }
            }
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn loads_dirs_and_text_files() {
        let data = build_zip(&[
            Entry::Dir("docs/"),
            Entry::File("docs/readme.txt", b"hello\nworld"),
        ]);
        let vfs = load_from_bytes(&data).unwrap();
        assert_eq!(vfs.list_dir("/docs").unwrap(), vec!["readme.txt"]);
        assert_eq!(vfs.read_file("/docs/readme.txt").unwrap(), "hello\nworld");
    }

    #[test]
    fn file_entries_create_missing_parents() {
        let data = build_zip(&[Entry::File("a/b/c.txt", b"deep")]);
        let vfs = load_from_bytes(&data).unwrap();
        assert!(vfs.is_dir("/a"));
        assert!(vfs.is_dir("/a/b"));
        assert_eq!(vfs.read_file("/a/b/c.txt").unwrap(), "deep");
    }

    #[test]
    fn nested_directory_entry_creates_ancestors() {
        let data = build_zip(&[Entry::Dir("x/y/z/")]);
        let vfs = load_from_bytes(&data).unwrap();
        assert_eq!(vfs.list_dir("/x").unwrap(), vec!["y"]);
        assert!(vfs.list_dir("/x/y/z").unwrap().is_empty());
    }

    #[test]
    fn binary_entries_are_hidden_from_reads() {
        let data = build_zip(&[Entry::File("img.bin", &[0xff, 0xd8, 0xff, 0x00])]);
        let vfs = load_from_bytes(&data).unwrap();
        assert_eq!(vfs.list_dir("/").unwrap(), vec!["img.bin"]);
        assert!(vfs.read_file("/img.bin").is_err());
        match vfs.node("/img.bin") {
            Some(crate::vfs::VfsNode::File { content }) => {
                assert!(content.is_binary());
                assert_eq!(content.to_bytes().unwrap(), vec![0xff, 0xd8, 0xff, 0x00]);
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[test]
    fn backslash_names_are_translated() {
        let data = build_zip(&[Entry::File("win\\dir\\file.txt", b"x")]);
        let vfs = load_from_bytes(&data).unwrap();
        assert!(vfs.is_dir("/win/dir"));
        assert_eq!(vfs.read_file("/win/dir/file.txt").unwrap(), "x");
    }

    #[test]
    fn duplicate_paths_last_write_wins() {
        let data = build_zip(&[
            Entry::File("notes.txt", b"first"),
            Entry::File("./notes.txt", b"second"),
        ]);
        let vfs = load_from_bytes(&data).unwrap();
        assert_eq!(vfs.read_file("/notes.txt").unwrap(), "second");
    }

    #[test]
    fn file_entry_naming_the_root_is_skipped() {
        let data = build_zip(&[
            Entry::File(".", b"dot"),
            Entry::File("x/..", b"dotdot"),
            Entry::File("kept.txt", b"ok"),
        ]);
        let vfs = load_from_bytes(&data).unwrap();
        assert!(vfs.is_dir("/"));
        assert_eq!(vfs.list_dir("/").unwrap(), vec!["kept.txt"]);
    }

    #[test]
    fn file_entry_replaces_empty_directory() {
        let data = build_zip(&[Entry::Dir("a/"), Entry::File("a", b"file over dir")]);
        let vfs = load_from_bytes(&data).unwrap();
        assert!(!vfs.is_dir("/a"));
        assert_eq!(vfs.read_file("/a").unwrap(), "file over dir");
        assert_eq!(vfs.list_dir("/").unwrap(), vec!["a"]);
    }

    #[test]
    fn file_entry_over_populated_directory_is_skipped() {
        let data = build_zip(&[
            Entry::File("a/inner.txt", b"inside"),
            Entry::File("a", b"would orphan inner.txt"),
            Entry::File("b.txt", b"after"),
        ]);
        let vfs = load_from_bytes(&data).unwrap();
        assert!(vfs.is_dir("/a"));
        assert_eq!(vfs.read_file("/a/inner.txt").unwrap(), "inside");
        assert_eq!(vfs.read_file("/b.txt").unwrap(), "after");
    }

    #[test]
    fn empty_archive_has_root() {
        let data = build_zip(&[]);
        let vfs = load_from_bytes(&data).unwrap();
        assert!(vfs.is_dir("/"));
        assert!(vfs.is_empty());
    }

    #[test]
    fn garbage_is_corrupt() {
        let err = load_from_bytes(b"definitely not a zip").unwrap_err();
        assert_eq!(err.code(), "ARCHIVE_CORRUPT");
    }

    #[test]
    fn missing_path_is_reported_before_reading() {
        let err = load_from_path(Path::new("/no/such/archive.zip")).unwrap_err();
        assert!(matches!(err, ShellError::ArchiveMissing(_)));
    }
}
