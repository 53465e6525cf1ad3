pub mod video;

pub use video::validate_url;
