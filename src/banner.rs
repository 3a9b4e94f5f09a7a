//! Banner image resizing.

use anyhow::{Context, Result};
use image::imageops::FilterType;
use std::path::Path;
use tracing::info;

/// Link-banner target width in pixels.
pub const BANNER_WIDTH: u32 = 234;

/// Link-banner target height in pixels.
pub const BANNER_HEIGHT: u32 = 60;

/// Resizes the image at `input` to exactly `width` x `height` pixels with a
/// Lanczos3 filter and saves it to `output`. Aspect ratio is not preserved.
pub fn resize_banner(input: &str, output: &str, width: u32, height: u32) -> Result<()> {
    let img = image::open(input).with_context(|| format!("failed to open image {input}"))?;

    let resized = img.resize_exact(width, height, FilterType::Lanczos3);

    if let Some(parent) = Path::new(output).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    resized
        .save(output)
        .with_context(|| format!("failed to save image {output}"))?;

    info!(output, width, height, "Banner resized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_resize_to_banner_dimensions() {
        let input = temp_path("news_crawler_test_banner_in.png");
        let output = temp_path("news_crawler_test_banner_out.png");

        let src = image::RgbImage::from_pixel(320, 200, image::Rgb([10, 120, 240]));
        src.save(&input).unwrap();

        resize_banner(&input, &output, BANNER_WIDTH, BANNER_HEIGHT).unwrap();

        let result = image::open(&output).unwrap();
        assert_eq!(result.width(), BANNER_WIDTH);
        assert_eq!(result.height(), BANNER_HEIGHT);

        fs::remove_file(&input).unwrap();
        fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_resize_missing_input_fails() {
        let output = temp_path("news_crawler_test_banner_never.png");
        let result = resize_banner("/nonexistent/input.png", &output, 10, 10);
        assert!(result.is_err());
    }
}
