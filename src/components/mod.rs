pub mod application_form;
pub mod enhanced_select;
pub mod faq;
pub mod gallery;
pub mod header;
pub mod modal;
pub mod video_carousel;
