use crate::film::Film;

use anyhow::{Context, Result};
use tracing::debug;

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Plain text PPM ("P3"), one `R G B` line per pixel.
pub fn encode_ppm(film: &Film) -> String {
    let mut ppm_data = format!("P3\n{} {}\n255\n", film.width, film.height);
    // Each pixel line is at most "255 255 255\n"
    ppm_data.reserve(film.pixels.len() * 12);
    for color in &film.pixels {
        let [ir, ig, ib] = color.to_rgb8();
        // Writing into a String cannot fail
        let _ = writeln!(&mut ppm_data, "{} {} {}", ir, ig, ib);
    }
    ppm_data
}

/// Writes `film` to `path`. A `.png` extension selects PNG, anything else is written as PPM.
pub fn save_film(film: &Film, path: &Path) -> Result<()> {
    let is_png = path
        .extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case("png"));

    if is_png {
        debug!("encoding {}x{} png", film.width, film.height);
        let buffer = image::RgbImage::from_raw(
            film.width as u32,
            film.height as u32,
            film.to_rgb8(),
        )
        .context("film dimensions do not match its pixel count")?;
        buffer
            .save(path)
            .with_context(|| format!("failed to write output image {}", path.display()))?;
    } else {
        debug!("encoding {}x{} ppm", film.width, film.height);
        fs::write(path, encode_ppm(film))
            .with_context(|| format!("failed to write output image {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_encode_ppm() {
        let mut film = Film::new(2, 2);
        film.pixels[0] = Color::white();
        film.pixels[3] = Color::new(0.5, 0.25, 0.0);

        assert_eq!(
            encode_ppm(&film),
            "P3\n2 2\n255\n255 255 255\n0 0 0\n0 0 0\n128 64 0\n"
        );
    }

    #[test]
    fn test_save_to_unwritable_path_fails() {
        let film = Film::new(1, 1);
        let path = Path::new("/nonexistent-directory/image.ppm");
        let error = save_film(&film, path).unwrap_err();
        assert!(format!("{:#}", error).contains("/nonexistent-directory/image.ppm"));
    }

    #[test]
    fn test_save_png_and_ppm() {
        let mut film = Film::new(4, 3);
        film.pixels[5] = Color::new(1.0, 0.5, 0.0);
        let directory = std::env::temp_dir();

        let ppm_path = directory.join(format!("film_test_{}.ppm", std::process::id()));
        save_film(&film, &ppm_path).unwrap();
        assert_eq!(fs::read_to_string(&ppm_path).unwrap(), encode_ppm(&film));
        fs::remove_file(&ppm_path).unwrap();

        let png_path = directory.join(format!("film_test_{}.png", std::process::id()));
        save_film(&film, &png_path).unwrap();
        let decoded = image::open(&png_path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 128, 0]);
        fs::remove_file(&png_path).unwrap();
    }
}
