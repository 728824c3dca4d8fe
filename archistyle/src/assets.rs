//! Catalog photo list generation.
//!
//! Each sub-directory of the photo root is matched to a style through the
//! alias index (so `gothic/` fills the style aliased `gothic`). Image files
//! are sorted by name and written into that style's `photoUrls`.

use anyhow::{Context, Result};
use archistyle_core::{AliasIndex, Catalog, StyleRecord};
use std::path::Path;

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// What a scan changed.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Canonical style name and number of photos written.
    pub updated: Vec<(String, usize)>,
    /// Folders that matched no style.
    pub skipped: Vec<String>,
}

/// Rewrite `catalog_path` with photo URLs found under `photos_dir`.
pub fn scan_photos(photos_dir: &Path, catalog_path: &Path, url_prefix: &str) -> Result<ScanReport> {
    let content = std::fs::read_to_string(catalog_path)
        .with_context(|| format!("reading catalog {}", catalog_path.display()))?;
    let mut styles: Vec<StyleRecord> = serde_json::from_str(&content)
        .with_context(|| format!("parsing catalog {}", catalog_path.display()))?;

    let index = AliasIndex::build(&Catalog::from_styles(styles.clone())?);
    let mut report = ScanReport::default();

    let mut folders: Vec<_> = std::fs::read_dir(photos_dir)
        .with_context(|| format!("reading photo directory {}", photos_dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .collect();
    folders.sort_by_key(|entry| entry.file_name());

    for entry in folders {
        let folder = entry.file_name().to_string_lossy().to_string();

        let Some(owner) = index.lookup(&folder) else {
            tracing::warn!(folder = %folder, "no style matches photo folder");
            report.skipped.push(folder);
            continue;
        };
        let Some(style) = styles.iter_mut().find(|s| s.name == owner.name) else {
            continue;
        };

        let urls = photo_urls(&entry.path(), url_prefix, &folder)?;
        tracing::info!(style = %style.name, count = urls.len(), "photo list updated");
        report.updated.push((style.name.clone(), urls.len()));
        style.photo_urls = urls;
    }

    let json = serde_json::to_string_pretty(&styles)?;
    std::fs::write(catalog_path, json)
        .with_context(|| format!("writing catalog {}", catalog_path.display()))?;

    Ok(report)
}

/// Sorted `/{prefix}/{folder}/{file}` URLs for the images in `dir`.
fn photo_urls(dir: &Path, url_prefix: &str, folder: &str) -> Result<Vec<String>> {
    let mut files: Vec<String> = std::fs::read_dir(dir)
        .with_context(|| format!("reading {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_image(path))
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().to_string()))
        .collect();
    files.sort();

    let prefix = url_prefix.trim_matches('/');
    Ok(files
        .into_iter()
        .map(|file| format!("/{prefix}/{folder}/{file}"))
        .collect())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use archistyle_core::sample_catalog;
    use tempfile::TempDir;

    fn write_catalog(path: &Path) {
        let styles: Vec<StyleRecord> = sample_catalog()
            .iter()
            .map(|s| StyleRecord {
                photo_urls: Vec::new(),
                ..s.as_ref().clone()
            })
            .collect();
        std::fs::write(path, serde_json::to_string_pretty(&styles).unwrap()).unwrap();
    }

    #[test]
    fn test_scan_fills_matching_styles() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let photos = temp_dir.path().join("photos");
        let catalog_path = temp_dir.path().join("styles.json");
        write_catalog(&catalog_path);

        let gothic = photos.join("gothic");
        std::fs::create_dir_all(&gothic).unwrap();
        for file in ["02.jpg", "01.JPG", "03.png", "notes.txt"] {
            std::fs::write(gothic.join(file), b"").unwrap();
        }
        std::fs::create_dir_all(photos.join("brutalism")).unwrap();

        let report = scan_photos(&photos, &catalog_path, "/archistyle_photos/").unwrap();
        assert_eq!(
            report.updated,
            vec![("Готическая архитектура".to_string(), 3)]
        );
        assert_eq!(report.skipped, vec!["brutalism".to_string()]);

        let catalog = Catalog::load(&catalog_path).unwrap();
        let style = catalog.get("Готическая архитектура").unwrap();
        assert_eq!(
            style.photo_urls,
            vec![
                "/archistyle_photos/gothic/01.JPG",
                "/archistyle_photos/gothic/02.jpg",
                "/archistyle_photos/gothic/03.png",
            ]
        );
        assert!(catalog.get("Архитектура барокко").unwrap().photo_urls.is_empty());
    }

    #[test]
    fn test_missing_photo_dir_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalog_path = temp_dir.path().join("styles.json");
        write_catalog(&catalog_path);

        let result = scan_photos(&temp_dir.path().join("nope"), &catalog_path, "photos");
        assert!(result.is_err());
    }
}
