//! Write the rendered canvas as the three PWA icon files.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbImage;

/// Resized variants emitted alongside the base icon.
const RESIZED_ICONS: [(u32, &str); 2] = [(192, "icon-192.png"), (180, "apple-touch-icon.png")];

/// Base icon file name (written at the canvas's native resolution).
const BASE_ICON: &str = "icon-512.png";

/// Save the base icon and its resized variants into `dir`.
///
/// Resizing uses Lanczos3. Any write failure aborts the run; there is
/// nothing to retry in a one-shot batch job.
pub fn export_icons(img: &RgbImage, dir: &Path) -> Result<(), image::ImageError> {
    img.save(dir.join(BASE_ICON))?;

    for (size, name) in RESIZED_ICONS {
        let resized = imageops::resize(img, size, size, FilterType::Lanczos3);
        resized.save(dir.join(name))?;
    }

    Ok(())
}

/// File names written by `export_icons`, for reporting.
pub fn icon_file_names() -> [&'static str; 3] {
    [BASE_ICON, RESIZED_ICONS[0].1, RESIZED_ICONS[1].1]
}
