use crate::color::Color;

/// Row-major pixel buffer, top row first.
#[derive(Debug, Clone)]
pub struct Film {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
}

impl Film {
    pub fn new(width: usize, height: usize) -> Film {
        Film {
            width,
            height,
            pixels: vec![Color::black(); width * height],
        }
    }

    /// `row` 0 is the top of the image
    pub fn pixel(&self, x: usize, row: usize) -> Color {
        self.pixels[x + row * self.width]
    }

    /// Interleaved 8 bit RGB in the same order as `pixels`
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color.to_rgb8())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_indexing_is_row_major() {
        let mut film = Film::new(3, 2);
        film.pixels[4] = Color::white();
        assert_eq!(film.pixel(1, 1), Color::white());
        assert_eq!(film.pixel(1, 0), Color::black());
    }

    #[test]
    fn test_to_rgb8_layout() {
        let mut film = Film::new(2, 1);
        film.pixels[1] = Color::new(1.0, 0.0, 0.5);
        assert_eq!(film.to_rgb8(), vec![0, 0, 0, 255, 0, 128]);
    }
}
