pub mod charts;
pub mod count_banner;
pub mod footer;
pub mod header;
pub mod multi_select;
pub mod year_slider;
