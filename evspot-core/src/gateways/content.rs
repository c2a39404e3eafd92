use anyhow::Result as Fallible;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarModel {
    pub brand: String,
    pub model: String,
    pub year: u16,
}

/// Data about a car produced by a text generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCarContent {
    pub battery_capacity_kwh: Option<f64>,
    pub description: String,
}

pub trait CarContentGateway {
    fn generate_car_content(&self, car: &CarModel) -> Fallible<GeneratedCarContent>;
}
