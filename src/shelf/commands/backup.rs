use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use chrono::Local;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Pack the store's documents into a `.tar.gz`. Entries keep their plain
/// filenames under a `shelf/` prefix so an unpack lands in one directory.
pub fn run<S: DataStore>(store: &S, dest: Option<PathBuf>) -> Result<CmdResult> {
    let data_path = store.data_path()?;
    let root = data_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut files = Vec::new();
    for name in ["library.json", "config.json"] {
        let path = root.join(name);
        if path.exists() {
            files.push((path, name));
        }
    }

    if files.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to back up."));
        return Ok(result);
    }

    let filename = dest.unwrap_or_else(|| {
        PathBuf::from(format!("shelf-{}.tar.gz", Local::now().format("%Y-%m-%d")))
    });
    let file = File::create(&filename)?;
    write_archive(file, &files)?;

    let mut result = CmdResult::default().with_archive_path(filename.clone());
    result.add_message(CmdMessage::success(format!(
        "Backed up to {}",
        filename.display()
    )));
    Ok(result)
}

fn write_archive<W: Write>(writer: W, files: &[(PathBuf, &str)]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for (path, name) in files {
        tar.append_path_with_name(path, format!("shelf/{}", name))?;
    }

    let enc = tar.into_inner()?;
    enc.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Library;
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;
    use crate::store::DataStore;

    #[test]
    fn test_write_archive_produces_gzip_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(&path, "{}").unwrap();

        let mut buf = Vec::new();
        write_archive(&mut buf, &[(path, "library.json")]).unwrap();

        assert!(!buf.is_empty());
        // Gzip magic bytes
        assert_eq!(buf[0], 0x1f);
        assert_eq!(buf[1], 0x8b);
    }

    #[test]
    fn test_run_creates_archive_at_destination() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save(&Library::default()).unwrap();

        let dest = dir.path().join("out.tar.gz");
        let result = run(&store, Some(dest.clone())).unwrap();

        assert_eq!(result.archive_path.as_deref(), Some(dest.as_path()));
        assert!(dest.exists());
    }

    #[test]
    fn test_run_with_no_documents_reports_nothing_to_do() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("empty"));

        let result = run(&store, None).unwrap();
        assert!(result.archive_path.is_none());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn test_run_needs_a_file_backed_store() {
        let store = InMemoryStore::new();
        assert!(run(&store, None).is_err());
    }
}
