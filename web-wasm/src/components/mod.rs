pub mod header;
pub mod upload_area;
pub mod preview_panel;
pub mod process_button;
pub mod error_banner;
pub mod results_list;
