//! Geographical positions and bounding boxes in degrees (WGS 84).

use std::fmt;

const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MAX: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let pos = Self { lat, lng };
        pos.is_valid().then_some(pos)
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-LAT_DEG_MAX..=LAT_DEG_MAX).contains(&self.lat)
            && (-LNG_DEG_MAX..=LNG_DEG_MAX).contains(&self.lng)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// An axis aligned box spanned by its south west and north east corner.
///
/// Boxes crossing the antimeridian have a south west longitude
/// that is greater than the north east longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat <= self.ne.lat
    }

    pub fn is_empty(&self) -> bool {
        self.sw.lat == self.ne.lat || self.sw.lng == self.ne.lng
    }

    pub fn contains_point(&self, pos: MapPoint) -> bool {
        if pos.lat < self.sw.lat || pos.lat > self.ne.lat {
            return false;
        }
        if self.sw.lng <= self.ne.lng {
            pos.lng >= self.sw.lng && pos.lng <= self.ne.lng
        } else {
            pos.lng >= self.sw.lng || pos.lng <= self.ne.lng
        }
    }
}
