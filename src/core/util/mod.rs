pub mod pixel_to_complex;
pub mod split_rows_into_bands;
