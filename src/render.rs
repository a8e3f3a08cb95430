use crate::config::Config;
use crate::film::Film;
use crate::shading::ray_hit_color;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use std::time::Instant;

/// Shades every pixel of the configured image.
///
/// Scanlines are independent and shaded in parallel, each one writing only its own slice
/// of the preallocated film, so the result does not depend on the thread count.
pub fn render(config: &Config) -> Result<Film> {
    config.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.render.threads)
        .build()
        .context("couldn't build render thread pool")?;

    let camera = config.camera();
    let sphere = config.sphere();
    let image_width = config.image.width;
    let image_height = config.image.height;

    // Single pixel wide or tall images sample the viewport's left or bottom edge
    let u_divisor = image_width.saturating_sub(1).max(1) as f32;
    let v_divisor = image_height.saturating_sub(1).max(1) as f32;

    info!(
        "rendering {}x{} with {} threads",
        image_width,
        image_height,
        pool.current_num_threads()
    );
    let start_time = Instant::now();

    let mut film = Film::new(image_width, image_height);
    pool.install(|| {
        film.pixels
            .par_chunks_mut(image_width)
            .enumerate()
            .for_each(|(row, scanline)| {
                // Rows are stored top to bottom while v grows upwards
                let y = image_height - 1 - row;
                let v = y as f32 / v_divisor;
                for (x, out_color) in scanline.iter_mut().enumerate() {
                    let u = x as f32 / u_divisor;
                    let ray = camera.get_ray(u, v);
                    *out_color = ray_hit_color(&ray, &sphere);
                }
            });
    });

    let elapsed = start_time.elapsed();
    info!("total time: {}ms", elapsed.as_millis());
    debug!("shaded {} pixels", film.pixels.len());

    Ok(film)
}

/// Reference single threaded pixel loop, used to check the parallel one.
#[cfg(test)]
fn render_sequential(config: &Config) -> Film {
    let camera = config.camera();
    let sphere = config.sphere();
    let (width, height) = (config.image.width, config.image.height);

    let mut pixels = Vec::with_capacity(width * height);
    for y in (0..height).rev() {
        for x in 0..width {
            let u = x as f32 / (width - 1) as f32;
            let v = y as f32 / (height - 1) as f32;
            pixels.push(ray_hit_color(&camera.get_ray(u, v), &sphere));
        }
    }
    Film {
        width,
        height,
        pixels,
    }
}
