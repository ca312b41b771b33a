use crate::core::data::pixel_region::PixelRegion;

/// Partitions the raster rows `[0, height)` into `bands` contiguous
/// full-width row-bands.
///
/// Band heights differ by at most one: the `height % bands` remainder rows
/// are handed out one per band to the leading bands in index order. The
/// bands exactly tile the raster for every `bands >= 1`; when there are more
/// bands than rows the trailing bands are empty.
#[must_use]
pub fn split_rows_into_bands(width: u32, height: u32, bands: usize) -> Vec<PixelRegion> {
    let bands = bands.max(1) as u32;
    let band_height = height / bands;
    let remainder = height % bands;

    let mut regions = Vec::with_capacity(bands as usize);
    let mut current_row = 0;

    for band in 0..bands {
        let extra = u32::from(band < remainder);
        let next_row = current_row + band_height + extra;

        regions.push(PixelRegion {
            start_row: current_row,
            end_row: next_row,
            start_col: 0,
            end_col: width,
        });

        current_row = next_row;
    }

    regions
}
