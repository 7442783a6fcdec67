use async_stream::try_stream;
use futures::Stream;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum LoadingError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, Default)]
pub enum Filter {
    Yaml,
    #[default]
    Any,
}

impl Filter {
    pub fn apply<P: AsRef<Path>>(&self, path: P) -> bool {
        let extension = path.as_ref().extension().and_then(|ext| ext.to_str());
        let Some(extension) = extension else {
            return false;
        };
        match self {
            Filter::Yaml => ["yaml", "yml"].contains(&extension),
            Filter::Any => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct File {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct FileSystemLoader {
    base_path: PathBuf,
}

impl FileSystemLoader {
    #[must_use]
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn load_dir(&self, filter: Filter) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + '_>> {
        let base_path = self.base_path.clone();
        tracing::trace!(path = ?base_path, "Loading dir");
        let stream = try_stream! {
            let mut entries = fs::read_dir(&base_path).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if entry.file_type().await?.is_file() && filter.apply(&path) {
                    tracing::trace!(?path, "Loading file");
                    let content = fs::read(&path).await?;
                    yield File { path, content };
                }
            }
        };
        Box::pin(stream)
    }

    pub async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        let path = self.base_path.join(path);
        tracing::trace!(?path, "Loading file");
        let content = fs::read(&path).await?;
        Ok(File { path, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn test_filter() {
        assert!(Filter::Yaml.apply("tracks/explorers.yaml"));
        assert!(Filter::Yaml.apply("tracks/explorers.yml"));
        assert!(!Filter::Yaml.apply("tracks/notes.md"));
        assert!(!Filter::Yaml.apply("tracks/no-extension"));
        assert!(Filter::Any.apply("tracks/anything.bin"));
    }

    #[tokio::test]
    async fn test_load_dir_filters_and_reads() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("a.yaml"), b"a: 1").await.unwrap();
        tokio::fs::write(dir.path().join("b.txt"), b"ignored").await.unwrap();

        let loader = FileSystemLoader::new(dir.path().to_path_buf());
        let files: Vec<_> = loader.load_dir(Filter::Yaml).collect().await;
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].as_ref().unwrap().content, b"a: 1");
    }
}
