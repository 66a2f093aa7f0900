use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Mean Earth radius (IUGG), in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance using the haversine formula.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_METERS * c
    }

    /// Point `meters` away along `bearing_degrees` (0 = north, 90 = east).
    pub fn offset(&self, meters: f64, bearing_degrees: f64) -> Coordinate {
        let angular = meters / EARTH_RADIUS_METERS;
        let bearing = bearing_degrees.to_radians();
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();

        let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
        let lon2 = lon1
            + (bearing.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat2.sin());

        Coordinate::new(lat2.to_degrees(), lon2.to_degrees())
    }
}

/// One fix from the location provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: SystemTime,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self::at(Coordinate::new(latitude, longitude), SystemTime::now())
    }

    pub fn at(coordinate: Coordinate, timestamp: SystemTime) -> Self {
        Self {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            timestamp,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        self.coordinate().distance_to(&other.coordinate())
    }
}
