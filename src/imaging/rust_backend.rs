//! Pure Rust codec backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG) | `image::ImageReader` with content sniffing |
//! | Convert to RGB8 | `DynamicImage::into_rgb8` (alpha dropped) |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |

use super::backend::{BackendError, ImageBackend};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat, ImageReader, RgbImage};
use std::path::Path;
use std::sync::LazyLock;

/// File extensions mapped to the decoder they need.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    PHOTO_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the lowercase extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<RgbImage, BackendError> {
        let decode_err = |message: String| BackendError::Decode {
            path: path.to_path_buf(),
            message,
        };

        // Sniff the content rather than trusting the extension; a .jpg that
        // is really a PNG still decodes.
        let img = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| decode_err(e.to_string()))?;

        Ok(img.into_rgb8())
    }

    fn encode_png(&self, image: &RgbImage, path: &Path) -> Result<(), BackendError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        PngEncoder::new(writer)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| BackendError::Encode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_jpeg, create_test_png, gradient};

    #[test]
    fn supported_extensions_match_decodable_formats() {
        let exts = supported_input_extensions();
        assert_eq!(exts, &["png", "jpg", "jpeg"]);
    }

    #[test]
    fn decode_png_exact_pixels() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("source.png");
        let original = gradient(20, 10);
        create_test_png(&path, &original);

        let decoded = RustBackend::new().decode(&path).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn decode_jpeg_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("source.jpg");
        create_test_jpeg(&path, 200, 150);

        let decoded = RustBackend::new().decode(&path).unwrap();
        assert_eq!(decoded.dimensions(), (200, 150));
    }

    #[test]
    fn decode_drops_alpha() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("rgba.png");
        image::RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 0]))
            .save(&path)
            .unwrap();

        let decoded = RustBackend::new().decode(&path).unwrap();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn decode_sniffs_mislabelled_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("actually-png.jpg");
        create_test_png(&path, &gradient(8, 8));

        let decoded = RustBackend::new().decode(&path).unwrap();
        assert_eq!(decoded.dimensions(), (8, 8));
    }

    #[test]
    fn decode_corrupt_file_is_decode_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really").unwrap();

        let err = RustBackend::new().decode(&path).unwrap_err();
        assert!(matches!(err, BackendError::Decode { .. }), "{err}");
    }

    #[test]
    fn decode_nonexistent_file_is_io_error() {
        let err = RustBackend::new()
            .decode(Path::new("/nonexistent/image.jpg"))
            .unwrap_err();
        assert!(matches!(err, BackendError::Io(_)));
    }

    #[test]
    fn encode_png_round_trips() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("thumbnail0.png");
        let img = gradient(13, 7);

        let backend = RustBackend::new();
        backend.encode_png(&img, &path).unwrap();

        assert_eq!(image::image_dimensions(&path).unwrap(), (13, 7));
        assert_eq!(backend.decode(&path).unwrap(), img);
    }

    #[test]
    fn encode_into_missing_directory_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("thumbnail0.png");

        let err = RustBackend::new()
            .encode_png(&gradient(2, 2), &path)
            .unwrap_err();
        assert!(matches!(err, BackendError::Io(_)));
    }
}
