// File System Icon Source
//
// 基于本地文件系统的图标来源实现
// PNG 使用 image 解码，SVG 使用 resvg 栅格化

use std::fs;
use std::path::{Path, PathBuf};

use crate::modules::icon::domain::{IconFormat, IconImage, ProbeOutcome};
use crate::modules::icon::ports::{IconError, IconSource};

/// SVG 栅格化的最大边长
const MAX_SVG_RASTER: u32 = 512;

/// 文件系统图标来源
#[derive(Debug, Default)]
pub struct FsIconSource;

impl FsIconSource {
    pub fn new() -> Self {
        Self
    }

    fn format_of(path: &Path) -> Result<IconFormat, IconError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(IconFormat::from_extension)
            .ok_or_else(|| IconError::UnsupportedFormat(path.display().to_string()))
    }

    fn load_png(path: &Path) -> Result<IconImage, IconError> {
        let decoded = image::open(path).map_err(|e| IconError::DecodeFailed(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(IconImage::new(rgba.into_raw(), width, height))
    }

    fn parse_svg(path: &Path) -> Result<resvg::usvg::Tree, IconError> {
        let data = fs::read(path)?;
        let opts = resvg::usvg::Options::default();
        resvg::usvg::Tree::from_data(&data, &opts).map_err(|e| IconError::DecodeFailed(e.to_string()))
    }

    fn load_svg(path: &Path) -> Result<IconImage, IconError> {
        let tree = Self::parse_svg(path)?;
        let size = tree.size();
        let width = (size.width().ceil() as u32).clamp(1, MAX_SVG_RASTER);
        let height = (size.height().ceil() as u32).clamp(1, MAX_SVG_RASTER);

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| IconError::DecodeFailed(format!("invalid raster size {}x{}", width, height)))?;
        let transform = resvg::tiny_skia::Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        // tiny-skia 使用预乘 alpha，转换为普通 RGBA
        let rgba = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();

        Ok(IconImage::new(rgba, width, height))
    }
}

impl IconSource for FsIconSource {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn subdirectories(&self, path: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Cannot list icon directory {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|entry| entry.is_dir())
            .collect();
        // read_dir 顺序不稳定，排序后结果可复现
        dirs.sort();
        dirs
    }

    fn probe(&self, path: &Path) -> ProbeOutcome {
        if !path.is_file() {
            return ProbeOutcome::Missing;
        }

        let format = match Self::format_of(path) {
            Ok(format) => format,
            Err(_) => return ProbeOutcome::Undecodable,
        };

        let decoded = match format {
            IconFormat::Png => Self::load_png(path).map(|image| !image.is_empty()),
            IconFormat::Svg => Self::parse_svg(path).map(|tree| {
                let size = tree.size();
                size.width() > 0.0 && size.height() > 0.0
            }),
        };

        match decoded {
            Ok(true) => ProbeOutcome::Usable,
            Ok(false) => ProbeOutcome::Undecodable,
            Err(e) => {
                tracing::debug!("Icon candidate {} is not decodable: {}", path.display(), e);
                ProbeOutcome::Undecodable
            }
        }
    }

    fn load(&self, path: &Path) -> Result<IconImage, IconError> {
        if !path.is_file() {
            return Err(IconError::NotFound(path.display().to_string()));
        }

        let image = match Self::format_of(path)? {
            IconFormat::Png => Self::load_png(path)?,
            IconFormat::Svg => Self::load_svg(path)?,
        };

        if image.is_empty() {
            return Err(IconError::DecodeFailed(format!("{} is empty", path.display())));
        }
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48"><circle cx="24" cy="24" r="20" fill="#25d366"/></svg>"##;

    fn write_png(path: &Path, size: u32) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        image::RgbaImage::from_pixel(size, size, image::Rgba([37, 211, 102, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_probe_reports_missing_files() {
        let dir = TempDir::new().unwrap();
        let source = FsIconSource::new();
        assert_eq!(source.probe(&dir.path().join("nope.png")), ProbeOutcome::Missing);
        // 目录本身不是图标文件
        assert_eq!(source.probe(dir.path()), ProbeOutcome::Missing);
    }

    #[test]
    fn test_probe_accepts_valid_png_and_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.png");
        let bad = dir.path().join("bad.png");
        write_png(&good, 32);
        fs::write(&bad, b"definitely not a png").unwrap();

        let source = FsIconSource::new();
        assert_eq!(source.probe(&good), ProbeOutcome::Usable);
        assert_eq!(source.probe(&bad), ProbeOutcome::Undecodable);
    }

    #[test]
    fn test_svg_is_probed_and_rasterized() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("whatsapp.svg");
        fs::write(&path, SVG).unwrap();

        let source = FsIconSource::new();
        assert_eq!(source.probe(&path), ProbeOutcome::Usable);

        let image = source.load(&path).unwrap();
        assert_eq!((image.width, image.height), (48, 48));
        assert_eq!(image.rgba.len(), 48 * 48 * 4);
    }

    #[test]
    fn test_load_png_returns_rgba_pixels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.png");
        write_png(&path, 16);

        let image = FsIconSource::new().load(&path).unwrap();
        assert_eq!((image.width, image.height), (16, 16));
        assert_eq!(&image.rgba[..4], &[37, 211, 102, 255]);
    }

    #[test]
    fn test_subdirectories_lists_only_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("hicolor")).unwrap();
        fs::create_dir(dir.path().join("Adwaita")).unwrap();
        fs::write(dir.path().join("index.theme"), "").unwrap();

        let subdirs = FsIconSource::new().subdirectories(dir.path());
        assert_eq!(
            subdirs,
            vec![dir.path().join("Adwaita"), dir.path().join("hicolor")]
        );
    }
}
