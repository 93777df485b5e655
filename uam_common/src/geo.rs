/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! geographic positions for (regional scale) simulation.
//! The simulation works in planar degree space, i.e. we interpolate latitude and longitude independently
//! and derive bearings from degree deltas without any ellipsoid or hemisphere correction. This is
//! adequate for map rendering at regional scale but not for navigation.

use std::fmt;
use serde::{Serialize,Deserialize};
use geo::Coord;

use crate::{atan2, lerp, angle::Heading};

pub type GeoCoord = Coord<f64>;

/// a wrapper for geo::Coord in geodetic degrees (x = longitude, y = latitude).
/// Construction, display and serialization use the (lat,lon) order that is customary for waypoints
#[derive(Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(from="LatLonFields", into="LatLonFields")]
pub struct LatLon(GeoCoord);

impl LatLon {
    pub const fn new (lat: f64, lon: f64)->Self {
        LatLon( Coord { x: lon, y: lat })
    }

    pub fn from_coord (c: GeoCoord)->Self { LatLon(c) }

    #[inline] pub fn lat (&self)->f64 { self.0.y }
    #[inline] pub fn lon (&self)->f64 { self.0.x }
    #[inline] pub fn coord (&self)->GeoCoord { self.0 }

    pub fn is_finite (&self)->bool { self.0.x.is_finite() && self.0.y.is_finite() }

    /// (Δlat,Δlon) in degrees from self to `other`
    pub fn delta_to (&self, other: &LatLon)->(f64,f64) {
        (other.lat() - self.lat(), other.lon() - self.lon())
    }

    pub fn offset (&self, dlat: f64, dlon: f64)->LatLon {
        LatLon::new( self.lat() + dlat, self.lon() + dlon)
    }

    /// per-axis linear interpolation. Returns self exactly for t == 0.0
    pub fn lerp (&self, other: &LatLon, t: f64)->LatLon {
        LatLon::new( lerp( self.lat(), other.lat(), t), lerp( self.lon(), other.lon(), t))
    }

    /// map-relative bearing from self to `other` as atan2(Δlon,Δlat), i.e. clockwise from north
    /// in degree space. Returns None if both positions are coincident since the direction is undefined
    pub fn planar_bearing_to (&self, other: &LatLon)->Option<Heading> {
        let (dlat,dlon) = self.delta_to(other);
        if dlat == 0.0 && dlon == 0.0 {
            None
        } else {
            Some( Heading::from_radians( atan2( dlon, dlat)))
        }
    }
}

impl From<GeoCoord> for LatLon {
    fn from (c: GeoCoord)->Self { LatLon(c) }
}

impl From<(f64,f64)> for LatLon {
    fn from (p: (f64,f64))->Self { LatLon::new( p.0, p.1) }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5},{:.5})", self.lat(), self.lon())
    }
}

impl fmt::Debug for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatLon({},{})", self.lat(), self.lon())
    }
}

// the serialized form
#[derive(Serialize,Deserialize,Clone,Copy)]
struct LatLonFields {
    #[serde(alias="latitude")]
    lat: f64,
    #[serde(alias="longitude", alias="lng")]
    lon: f64
}

impl From<LatLonFields> for LatLon {
    fn from (f: LatLonFields)->Self { LatLon::new( f.lat, f.lon) }
}

impl From<LatLon> for LatLonFields {
    fn from (p: LatLon)->Self { LatLonFields { lat: p.lat(), lon: p.lon() } }
}
