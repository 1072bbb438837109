// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Drafter demos.

use std::io::{self, Write};

use drafter_raster::Image;

/// Writes `image` as a binary PPM (`P6`), dropping the alpha channel.
pub fn write_ppm<W: Write>(image: &Image, mut out: W) -> io::Result<()> {
    write!(out, "P6\n{} {}\n255\n", image.width(), image.height())?;
    let mut bytes = Vec::with_capacity(image.pixels().len() * 3);
    for p in image.pixels() {
        bytes.extend_from_slice(&[p.r, p.g, p.b]);
    }
    out.write_all(&bytes)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use drafter_raster::{Image, Pixel};

    use super::write_ppm;

    #[test]
    fn header_and_payload() {
        let mut image = Image::new(2, 1);
        image.set_pixel(1, 0, Pixel::rgb(1, 2, 3));
        let mut buf = Vec::new();
        write_ppm(&image, &mut buf).unwrap();
        assert_eq!(&buf[..11], b"P6\n2 1\n255\n");
        assert_eq!(&buf[11..], &[0, 0, 0, 1, 2, 3]);
    }
}
