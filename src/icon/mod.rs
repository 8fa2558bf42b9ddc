pub mod container;

use std::path::{Path, PathBuf};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, GenericImageView, RgbaImage};

pub use container::{read_directory, IconEntry};

/// ICO directory entries store dimensions in one byte, 0 meaning 256.
pub const MAX_ICON_SIZE: u32 = 256;

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("not found: {}", .0.display())]
    SourceMissing(PathBuf),
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("no requested icon size fits a {width}x{height} source")]
    NoUsableSizes { width: u32, height: u32 },
    #[error("cannot encode icon: {0}")]
    Encode(#[from] image::ImageError),
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed icon container: {0}")]
    Malformed(String),
}

/// Where to read the PNG, where to write the ICO, and which square sizes to embed
#[derive(Debug, Clone)]
pub struct IconSpec {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub sizes: Vec<u32>,
}

impl IconSpec {
    /// `<root>/img/icon.png` -> `<root>/img/icon.ico`
    pub fn for_project(root: &Path, sizes: &[u32]) -> Self {
        let img_dir = root.join("img");
        Self {
            source: img_dir.join("icon.png"),
            destination: img_dir.join("icon.ico"),
            sizes: sizes.to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IconReport {
    pub destination: PathBuf,
    pub entries: Vec<IconEntry>,
}

/// Sizes that can be produced from a `width`x`height` source, ascending.
/// Anything larger than the source or the format limit is dropped.
pub fn usable_sizes(requested: &[u32], width: u32, height: u32) -> Vec<u32> {
    let mut sizes: Vec<u32> = requested
        .iter()
        .copied()
        .filter(|&s| s > 0 && s <= width && s <= height && s <= MAX_ICON_SIZE)
        .collect();
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}

/// Load `spec.source`, resample it to each size and write a multi-frame ICO.
pub fn convert(spec: &IconSpec) -> Result<IconReport, IconError> {
    if !spec.source.exists() {
        return Err(IconError::SourceMissing(spec.source.clone()));
    }

    let source = image::open(&spec.source).map_err(|source| IconError::Decode {
        path: spec.source.clone(),
        source,
    })?;
    let source = DynamicImage::ImageRgba8(source.to_rgba8());
    let (width, height) = source.dimensions();

    let sizes = usable_sizes(&spec.sizes, width, height);
    if sizes.is_empty() {
        return Err(IconError::NoUsableSizes { width, height });
    }
    tracing::info!("Encoding {}x{} source at sizes {:?}", width, height, sizes);

    let rasters: Vec<RgbaImage> = sizes
        .iter()
        .map(|&size| source.resize(size, size, FilterType::Lanczos3).to_rgba8())
        .collect();

    let frames = rasters
        .iter()
        .map(|r| IcoFrame::as_png(r.as_raw(), r.width(), r.height(), ExtendedColorType::Rgba8))
        .collect::<Result<Vec<_>, _>>()?;

    let mut bytes = Vec::new();
    IcoEncoder::new(&mut bytes).encode_images(&frames)?;

    std::fs::write(&spec.destination, &bytes).map_err(|source| IconError::Write {
        path: spec.destination.clone(),
        source,
    })?;

    let entries = read_directory(&bytes)?;
    tracing::debug!("Wrote {} ({} bytes, {} frames)", spec.destination.display(), bytes.len(), entries.len());

    Ok(IconReport {
        destination: spec.destination.clone(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const SIZES: [u32; 4] = [16, 32, 48, 256];

    fn write_source(root: &Path, width: u32, height: u32) -> IconSpec {
        std::fs::create_dir_all(root.join("img")).unwrap();
        let pixels = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 0x80, if (x + y) % 3 == 0 { 0 } else { 0xff }])
        });
        let spec = IconSpec::for_project(root, &SIZES);
        pixels.save(&spec.source).unwrap();
        spec
    }

    #[test]
    fn square_source_embeds_all_four_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let spec = write_source(dir.path(), 512, 512);

        let report = convert(&spec).unwrap();

        let dims: Vec<(u32, u32)> = report.entries.iter().map(|e| (e.width, e.height)).collect();
        assert_eq!(dims, vec![(16, 16), (32, 32), (48, 48), (256, 256)]);
        assert!(report.entries.iter().all(|e| e.is_png && e.bits_per_pixel == 32));

        let on_disk = std::fs::read(&spec.destination).unwrap();
        assert_eq!(read_directory(&on_disk).unwrap().len(), 4);

        // The ICO decoder picks the largest frame
        let decoded = image::open(&spec.destination).unwrap();
        assert_eq!(decoded.dimensions(), (256, 256));
    }

    #[test]
    fn missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let spec = IconSpec::for_project(dir.path(), &SIZES);

        let err = convert(&spec).unwrap_err();

        assert!(matches!(err, IconError::SourceMissing(ref p) if p == &spec.source));
        assert!(err.to_string().starts_with("not found: "));
        assert!(!spec.destination.exists());
    }

    #[test]
    fn small_source_drops_larger_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let spec = write_source(dir.path(), 40, 40);

        let report = convert(&spec).unwrap();

        let widths: Vec<u32> = report.entries.iter().map(|e| e.width).collect();
        assert_eq!(widths, vec![16, 32]);
    }

    #[test]
    fn tiny_source_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let spec = write_source(dir.path(), 8, 8);

        assert!(matches!(
            convert(&spec),
            Err(IconError::NoUsableSizes { width: 8, height: 8 })
        ));
        assert!(!spec.destination.exists());
    }

    #[test]
    fn wide_source_keeps_aspect_ratio() {
        let dir = tempfile::tempdir().unwrap();
        let spec = write_source(dir.path(), 128, 64);

        let report = convert(&spec).unwrap();

        let dims: Vec<(u32, u32)> = report.entries.iter().map(|e| (e.width, e.height)).collect();
        assert_eq!(dims, vec![(16, 8), (32, 16), (48, 24)]);
    }

    #[test]
    fn conversion_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let spec = write_source(dir.path(), 300, 300);

        convert(&spec).unwrap();
        let first = std::fs::read(&spec.destination).unwrap();
        convert(&spec).unwrap();
        let second = std::fs::read(&spec.destination).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn usable_sizes_sorts_and_filters() {
        assert_eq!(usable_sizes(&[256, 16, 48, 16, 0, 512], 1024, 1024), vec![16, 48, 256]);
        assert_eq!(usable_sizes(&[16, 32, 48, 256], 48, 100), vec![16, 32, 48]);
    }
}
