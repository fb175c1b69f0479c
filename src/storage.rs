//! アップロード画像の一時保存
//!
//! ファイル名はタイムスタンプ（ミリ秒）+ 元の拡張子。
//! `TempUpload` がスコープを抜けるとファイルを削除する。

use crate::error::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    /// アップロード内容を `dir` に保存
    ///
    /// ファイルは `create_new` で作成するので、同じミリ秒に保存された
    /// 別リクエストとファイルを共有することはない
    pub async fn save(dir: &Path, extension: &str, data: &[u8]) -> Result<Self> {
        tokio::fs::create_dir_all(dir).await?;

        let stamp = chrono::Utc::now().timestamp_millis();
        let mut n = 0;
        let (upload, mut file) = loop {
            let path = dir.join(file_name(stamp, n, extension));
            match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => break (Self { path }, file),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => n += 1,
                Err(e) => return Err(e.into()),
            }
        };

        // 書き込み失敗時は upload の Drop で削除される
        file.write_all(data).await?;
        file.flush().await?;
        debug!(path = %upload.path.display(), bytes = data.len(), "一時ファイル保存");

        Ok(upload)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "一時ファイル削除"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "一時ファイル削除失敗"),
        }
    }
}

/// `<unix-millis>.<ext>`、n > 0 なら `<unix-millis>-<n>.<ext>`
fn file_name(stamp: i64, n: u32, extension: &str) -> String {
    let suffix = if extension.is_empty() {
        String::new()
    } else {
        format!(".{}", extension.to_ascii_lowercase())
    };

    if n == 0 {
        format!("{}{}", stamp, suffix)
    } else {
        format!("{}-{}{}", stamp, n, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_drop_removes_file() {
        let dir = tempdir().expect("Failed to create temp dir");

        let upload = TempUpload::save(dir.path(), "PNG", b"dummy").await.unwrap();
        let path = upload.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "png");
        assert_eq!(std::fs::read(&path).unwrap(), b"dummy");

        drop(upload);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_save_creates_directory() {
        let dir = tempdir().expect("Failed to create temp dir");
        let nested = dir.path().join("uploads");

        let upload = TempUpload::save(&nested, "jpg", b"x").await.unwrap();
        assert!(upload.path().starts_with(&nested));
    }

    #[tokio::test]
    async fn test_names_do_not_collide() {
        let dir = tempdir().expect("Failed to create temp dir");

        let a = TempUpload::save(dir.path(), "png", b"a").await.unwrap();
        let b = TempUpload::save(dir.path(), "png", b"b").await.unwrap();
        assert_ne!(a.path(), b.path());
        assert_eq!(std::fs::read(a.path()).unwrap(), b"a");
        assert_eq!(std::fs::read(b.path()).unwrap(), b"b");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_keep_their_own_data() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mut tasks = tokio::task::JoinSet::new();

        for i in 0..64u32 {
            let dir = dir.path().to_path_buf();
            tasks.spawn(async move {
                let data = format!("upload-{}", i).into_bytes();
                let upload = TempUpload::save(&dir, "png", &data).await.unwrap();
                (upload, data)
            });
        }

        let mut uploads = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            uploads.push(joined.unwrap());
        }

        let paths: std::collections::HashSet<_> =
            uploads.iter().map(|(u, _)| u.path().to_path_buf()).collect();
        assert_eq!(paths.len(), 64);
        for (upload, data) in &uploads {
            assert_eq!(&std::fs::read(upload.path()).unwrap(), data);
        }

        drop(uploads);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(1700000000000, 0, "JPG"), "1700000000000.jpg");
        assert_eq!(file_name(1700000000000, 2, "png"), "1700000000000-2.png");
        assert_eq!(file_name(1700000000000, 0, ""), "1700000000000");
    }

    #[test]
    fn test_drop_after_external_removal() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("gone.png");
        std::fs::write(&path, b"x").unwrap();

        let upload = TempUpload { path: path.clone() };
        std::fs::remove_file(&path).unwrap();
        drop(upload);
    }
}
