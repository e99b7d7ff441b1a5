//! Background image loading.
//!
//! Decoding and sampling happen on a worker thread. Results arrive on an
//! mpsc channel that the frame loop drains without blocking.

use anyhow::Context;
use morph_core::{sample_rgba, PhotoSet, PointCloud, SampleOptions};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "bmp"];

#[derive(Debug)]
pub enum LoaderEvent {
    /// A complete batch; replaces any earlier one.
    Photos(PhotoSet),
    /// Reference cloud for the firework shape.
    Firework(PointCloud),
    /// An image that could not be used. Loading continues with the rest.
    Failed { path: PathBuf, reason: String },
}

#[derive(Clone, Debug, Default)]
pub struct LoaderConfig {
    pub photo_dir: Option<PathBuf>,
    pub firework: Option<PathBuf>,
    pub options: Option<SampleOptions>,
}

pub fn sample_file(path: &Path, options: &SampleOptions) -> anyhow::Result<PointCloud> {
    let rgba = image::open(path)
        .with_context(|| format!("decoding {}", path.display()))?
        .to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    let cloud = sample_rgba(width, height, rgba.as_raw(), options)?;
    Ok(cloud)
}

/// Image files directly inside `dir`, sorted by name.
pub fn image_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("reading {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn load_photos(dir: &Path, options: &SampleOptions, tx: &Sender<LoaderEvent>) {
    let files = match image_files(dir) {
        Ok(files) => files,
        Err(err) => {
            let _ = tx.send(LoaderEvent::Failed {
                path: dir.to_path_buf(),
                reason: format!("{err:#}"),
            });
            return;
        }
    };
    let mut batch = PhotoSet::new();
    for path in files {
        match sample_file(&path, options) {
            Ok(photo) if photo.is_empty() => {
                let _ = tx.send(LoaderEvent::Failed {
                    path,
                    reason: "no opaque pixels".into(),
                });
            }
            Ok(photo) => {
                log::debug!("[loader] {} -> {} points", path.display(), photo.len());
                batch.push(photo);
            }
            Err(err) => {
                let _ = tx.send(LoaderEvent::Failed {
                    path,
                    reason: format!("{err:#}"),
                });
            }
        }
    }
    let _ = tx.send(LoaderEvent::Photos(batch));
}

/// Start the worker. The channel closes once everything requested is loaded.
pub fn spawn(config: LoaderConfig) -> anyhow::Result<Receiver<LoaderEvent>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("photo-loader".into())
        .spawn(move || {
            let options = config.options.unwrap_or_default();
            if let Some(path) = config.firework.as_deref() {
                match sample_file(path, &options) {
                    Ok(cloud) => {
                        let _ = tx.send(LoaderEvent::Firework(cloud));
                    }
                    Err(err) => {
                        let _ = tx.send(LoaderEvent::Failed {
                            path: path.to_path_buf(),
                            reason: format!("{err:#}"),
                        });
                    }
                }
            }
            if let Some(dir) = config.photo_dir.as_deref() {
                load_photos(dir, &options, &tx);
            }
        })
        .context("spawning loader thread")?;
    Ok(rx)
}
