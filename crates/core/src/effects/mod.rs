pub mod circle;
pub mod fade;
pub mod parallax;
pub mod spotlight;
pub mod sweep;
pub mod zoom;
