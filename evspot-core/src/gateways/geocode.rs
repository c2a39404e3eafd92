pub trait GeoCodingGateway {
    /// Resolve a free text address into `(lat, lng)` in degrees.
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<(f64, f64)>;
}
