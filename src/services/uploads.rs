//! Storage for report photos

use rand::Rng;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// URL prefix photos are served under
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Writes uploaded photos to a directory served under [`PUBLIC_PREFIX`]
#[derive(Clone, Debug)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store `bytes` under a fresh name derived from `original_name` and
    /// return the public path of the file.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> AppResult<String> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let file_name = unique_file_name(original_name);
        let dest = self.dir.join(&file_name);
        tokio::fs::write(&dest, bytes)
            .await
            .map_err(|e| AppError::Upload(format!("Failed to store {}: {}", file_name, e)))?;

        tracing::info!(file = %dest.display(), size = bytes.len(), "Stored report photo");
        Ok(format!("{}/{}", PUBLIC_PREFIX, file_name))
    }

}

/// Replace every character outside `[A-Za-z0-9_.-]` with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// `<unix millis>-<random>-<sanitized name>`
pub fn unique_file_name(original_name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!("{}-{}-{}", millis, random, sanitize_file_name(original_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_path_traversal_and_spaces() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_file_name("foto proyector.jpg"), "foto_proyector.jpg");
        assert_eq!(sanitize_file_name("dañado (1).png"), "da_ado__1_.png");
        assert_eq!(sanitize_file_name("C:\\fotos\\a.jpg"), "C__fotos_a.jpg");
    }

    #[test]
    fn unique_names_keep_the_original_suffix() {
        let name = unique_file_name("pizarra.jpg");
        let parts: Vec<&str> = name.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[0].parse::<i64>().is_ok());
        assert!(parts[1].parse::<u32>().unwrap() < 1_000_000_000);
        assert_eq!(parts[2], "pizarra.jpg");
        assert!(!name.contains('/'));
    }

    #[tokio::test]
    async fn saved_file_lands_in_the_upload_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let public = store.save("../proyector.png", b"\x89PNG data").await.unwrap();
        assert!(public.starts_with("/uploads/"));
        assert!(public.ends_with("-.._proyector.png"));

        let file_name = public.trim_start_matches("/uploads/");
        assert!(!file_name.contains('/'));
        let on_disk = dir.path().join(file_name);
        assert_eq!(tokio::fs::read(on_disk).await.unwrap(), b"\x89PNG data");
    }
}
