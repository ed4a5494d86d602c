pub mod relay;
pub mod viewport;
