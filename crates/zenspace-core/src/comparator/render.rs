use image::RgbaImage;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{Result, ZenspaceError};

use super::Boundary;

/// First column (exclusive) showing the "before" image at `boundary`.
pub fn split_column(width: u32, boundary: Boundary) -> u32 {
    ((width as f32 * boundary.fraction()).round() as u32).min(width)
}

/// Rasterize the comparator: `after` everywhere, `before` in the columns left
/// of the boundary. Both images must share dimensions.
pub fn compose_split(before: &RgbaImage, after: &RgbaImage, boundary: Boundary) -> Result<RgbaImage> {
    let (w, h) = after.dimensions();
    if before.dimensions() != (w, h) {
        let (bw, bh) = before.dimensions();
        return Err(ZenspaceError::DimensionMismatch {
            left_width: bw,
            left_height: bh,
            right_width: w,
            right_height: h,
        });
    }
    if w == 0 || h == 0 {
        return Err(ZenspaceError::InvalidDimensions { width: w, height: h });
    }

    let mut out = after.clone();
    let cut = split_column(w, boundary) as usize * 4;
    if cut == 0 {
        return Ok(out);
    }

    let row_len = w as usize * 4;
    let src = before.as_raw();
    let copy_row = |(row, dst): (usize, &mut [u8])| {
        let start = row * row_len;
        dst[..cut].copy_from_slice(&src[start..start + cut]);
    };

    if (w as usize) * (h as usize) >= PARALLEL_PIXEL_THRESHOLD {
        out.par_chunks_mut(row_len).enumerate().for_each(copy_row);
    } else {
        out.chunks_mut(row_len).enumerate().for_each(copy_row);
    }

    Ok(out)
}
