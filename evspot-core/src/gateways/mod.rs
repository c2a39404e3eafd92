pub mod content;
pub mod geocode;
pub mod routing;
