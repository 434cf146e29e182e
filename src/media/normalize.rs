use base64::engine::general_purpose::STANDARD as Base64;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{DEFAULT_JPEG_QUALITY, DEFAULT_MAX_DIMENSION};
use crate::error::NormalizeError;

/// Every upload is re-encoded to this format
pub const CONTENT_TYPE: &str = "image/jpeg";

/// Limits applied to every selected image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeOptions {
    /// Bound on the larger side, in pixels
    pub max_dimension: u32,
    /// JPEG quality, 1-100
    pub quality: u8,
    /// How long the decode worker may take before we give up
    pub decode_timeout: Duration,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            quality: DEFAULT_JPEG_QUALITY,
            decode_timeout: Duration::from_secs(30),
        }
    }
}

/// A re-encoded image ready to be sent to the upload endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedImage {
    /// `data:image/jpeg;base64,...`
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
    pub content_type: &'static str,
}

/// Normalize an image file picked by the owner
///
/// Decoding is CPU-bound, so it runs on the blocking pool. The wait is
/// bounded by `options.decode_timeout`: the caller always gets an answer and
/// can release its upload flag.
pub async fn normalize_file(
    path: PathBuf,
    options: NormalizeOptions,
) -> Result<NormalizedImage, NormalizeError> {
    let timeout = options.decode_timeout;
    let work = tokio::task::spawn_blocking(move || normalize_path_blocking(&path, &options));

    match tokio::time::timeout(timeout, work).await {
        Ok(joined) => joined.map_err(|e| NormalizeError::Worker(e.to_string()))?,
        Err(_) => {
            tracing::warn!("Image decode timed out after {:?}", timeout);
            Err(NormalizeError::Timeout(timeout))
        }
    }
}

fn normalize_path_blocking(
    path: &Path,
    options: &NormalizeOptions,
) -> Result<NormalizedImage, NormalizeError> {
    let bytes = std::fs::read(path)?;
    tracing::debug!("Read {}KB from {}", bytes.len() / 1024, path.display());
    normalize_bytes(&bytes, options)
}

/// Decode, bound and re-encode an in-memory image
///
/// No format allow-list: anything the `image` crate can recognise is accepted.
pub fn normalize_bytes(
    bytes: &[u8],
    options: &NormalizeOptions,
) -> Result<NormalizedImage, NormalizeError> {
    let img = image::load_from_memory(bytes)?;
    let (width, height) = target_dimensions(img.width(), img.height(), options.max_dimension);

    let img = if (width, height) == (img.width(), img.height()) {
        img
    } else {
        tracing::debug!(
            "Downsizing {}x{} to {}x{}",
            img.width(),
            img.height(),
            width,
            height
        );
        img.resize_exact(width, height, FilterType::Lanczos3)
    };

    let jpeg = encode_jpeg(&img, options.quality)?;
    tracing::info!(
        "Normalized image to {}x{} JPEG ({}KB)",
        width,
        height,
        jpeg.len() / 1024
    );

    Ok(NormalizedImage {
        data_uri: to_data_uri(&jpeg),
        width,
        height,
        content_type: CONTENT_TYPE,
    })
}

/// Compute the upload dimensions for an image of `width` x `height`
///
/// Images that already fit inside `cap` keep their size. Otherwise the larger
/// side becomes exactly `cap` and the smaller one is scaled by the same
/// factor, rounded to the nearest pixel and never below 1.
pub fn target_dimensions(width: u32, height: u32, cap: u32) -> (u32, u32) {
    let larger = width.max(height);
    if larger <= cap {
        return (width, height);
    }

    let scale = |side: u32| -> u32 {
        // round(side * cap / larger) in integer math
        let scaled = (u64::from(side) * u64::from(cap) * 2 + u64::from(larger)) / (2 * u64::from(larger));
        (scaled as u32).max(1)
    };

    if width >= height {
        (cap, scale(height))
    } else {
        (scale(width), cap)
    }
}

/// Encode as baseline JPEG; alpha is dropped
fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, NormalizeError> {
    let rgb = img.to_rgb8();
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .encode_image(&rgb)
        .map_err(|e| NormalizeError::Encode(e.to_string()))?;
    Ok(buffer)
}

fn to_data_uri(jpeg: &[u8]) -> String {
    format!("data:{};base64,{}", CONTENT_TYPE, Base64.encode(jpeg))
}

/// Split a data URI back into its raw bytes
///
/// Accepts plain base64 as well, like the upload endpoint does.
pub fn decode_data_uri(data: &str) -> Option<Vec<u8>> {
    let payload = match data.strip_prefix("data:") {
        Some(rest) => rest.split_once(',')?.1,
        None => data,
    };
    Base64.decode(payload).ok()
}
