pub mod header;
pub mod image_input;
pub mod info_display;
