pub mod colour;
pub mod complex;
pub mod pixel_region;
pub mod render_result;
pub mod render_settings;
pub mod viewport;
