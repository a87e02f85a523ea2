use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::foundation::error::{GaugeError, GaugeResult};
use crate::raster::canvas::Canvas;

/// Sink contract for persisting a finished canvas.
///
/// Implementations receive straight-alpha RGBA8, row-major, and decide the container format.
/// Errors are surfaced as-is; no retry is attempted by callers.
pub trait CanvasSink {
    /// Persist `canvas` under `target`.
    fn emit(&mut self, canvas: &Canvas, target: &Path) -> GaugeResult<()>;
}

/// Writes PNG files through the `image` encoder.
///
/// The image is first written to a hidden sibling file and then renamed over `target`, so a
/// failed write never leaves a truncated PNG at the destination. Missing parent directories are
/// created.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngFileSink;

impl PngFileSink {
    /// Create a PNG sink.
    pub fn new() -> Self {
        Self
    }
}

impl CanvasSink for PngFileSink {
    #[tracing::instrument(level = "debug", skip(self, canvas, target), fields(path = %target.display()))]
    fn emit(&mut self, canvas: &Canvas, target: &Path) -> GaugeResult<()> {
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| GaugeError::output_write(target, e))?;
        }

        let tmp = staging_path(target);
        let written = image::save_buffer_with_format(
            &tmp,
            canvas.as_rgba8(),
            canvas.width(),
            canvas.height(),
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| match e {
            image::ImageError::IoError(io) => io,
            other => io::Error::other(other),
        })
        .and_then(|()| fs::rename(&tmp, target));

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(GaugeError::output_write(target, e));
        }
        tracing::debug!(
            width = canvas.width(),
            height = canvas.height(),
            "wrote png"
        );
        Ok(())
    }
}

fn staging_path(target: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(target.file_name().unwrap_or(OsStr::new("out")));
    name.push(format!(".{}.tmp", std::process::id()));
    target.with_file_name(name)
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    /// Canvases by destination; a repeated destination keeps the latest.
    pub(crate) canvases: BTreeMap<PathBuf, Canvas>,
}

impl InMemorySink {
    /// Create an empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas last emitted to `target`.
    pub fn get(&self, target: impl AsRef<Path>) -> Option<&Canvas> {
        self.canvases.get(target.as_ref())
    }

    /// Number of distinct destinations written.
    pub fn len(&self) -> usize {
        self.canvases.len()
    }

    /// Return `true` when nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.canvases.is_empty()
    }
}

impl CanvasSink for InMemorySink {
    fn emit(&mut self, canvas: &Canvas, target: &Path) -> GaugeResult<()> {
        self.canvases.insert(target.to_path_buf(), canvas.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
