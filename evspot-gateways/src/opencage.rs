use evspot_core::gateways::geocode::GeoCodingGateway;
use geocoding::{Forward, Opencage, Point};

#[derive(Debug, Clone)]
pub struct OpenCage {
    api_key: Option<String>,
}

impl OpenCage {
    pub fn new(api_key: Option<String>) -> Self {
        if api_key.is_none() {
            log::warn!("No OpenCage API key configured: addresses will not be resolved");
        }
        Self { api_key }
    }
}

fn forward_query_string(addr: &str) -> Option<String> {
    let parts: Vec<_> = addr
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(","))
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<(f64, f64)> {
        let api_key = self.api_key.as_ref()?;
        let query = forward_query_string(addr)?;
        let oc_req = Opencage::new(api_key.clone());
        let res: Result<Vec<Point<f64>>, _> = oc_req.forward(&query);
        match res {
            Ok(points) => {
                let point = points.first()?;
                log::debug!("Resolved address location '{query}': {point:?}");
                Some((point.y(), point.x()))
            }
            Err(err) => {
                log::warn!("Failed to resolve address location '{query}': {err}");
                None
            }
        }
    }
}
