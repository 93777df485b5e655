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

//! path synthesis - turn a sparse route into a dense, smooth polyline that can be traversed at a
//! constant progress rate.
//!
//! Each leg of the route is replaced by a quadratic Bézier curve whose control point is the leg
//! midpoint shifted diagonally by a fixed offset. The sign of the shift is chosen at random per axis
//! and leg, which gives each synthesized path a slightly different, natural looking curvature.
//! The randomness source is passed in so that paths are reproducible from a seed.

use std::{fmt, slice};
use rand::Rng;
use uam_common::geo::LatLon;

use crate::route::Route;
use crate::errors::{Result,UamSimError,invalid_input};

pub const DEFAULT_SEGMENTS_PER_LEG: usize = 15;

/// diagonal control point offset in degrees (~3km at the latitude of the default routes)
pub const DEFAULT_CONTROL_OFFSET: f64 = 0.03;

/// the dense point sequence an aircraft traverses. Immutable once constructed
#[derive(Clone,PartialEq)]
pub struct FlightPath {
    points: Vec<LatLon>,
}

impl FlightPath {
    /// synthesize a path for `route` with the default control point offset
    pub fn from_route<R: Rng> (route: &Route, segments_per_leg: usize, rng: &mut R)->Result<Self> {
        synthesize_with_offset( route, segments_per_leg, DEFAULT_CONTROL_OFFSET, rng)
    }

    /// use a given polyline as-is (e.g. a recorded track). Note this does not check the points,
    /// consumers such as the sampler validate before use
    pub fn from_points (points: Vec<LatLon>)->Self {
        FlightPath { points }
    }

    #[inline] pub fn points (&self)->&[LatLon] { self.points.as_slice() }
    #[inline] pub fn len (&self)->usize { self.points.len() }
    #[inline] pub fn is_empty (&self)->bool { self.points.is_empty() }
    #[inline] pub fn get (&self, idx: usize)->Option<&LatLon> { self.points.get(idx) }

    pub fn first (&self)->Option<&LatLon> { self.points.first() }
    pub fn last (&self)->Option<&LatLon> { self.points.last() }
    pub fn iter (&self)->slice::Iter<'_,LatLon> { self.points.iter() }

    /// a path we can sample has at least two finite points
    pub fn validate (&self)->Result<()> {
        if self.points.len() < 2 {
            return Err( UamSimError::MalformedPath( format!("path needs at least 2 points, has {}", self.points.len())))
        }
        if let Some(idx) = self.points.iter().position( |p| !p.is_finite()) {
            return Err( UamSimError::MalformedPath( format!("non-finite path point at index {idx}")))
        }
        Ok(())
    }
}

impl fmt::Debug for FlightPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "FlightPath( n_points: {}", self.points.len())?;
        if let (Some(first),Some(last)) = (self.points.first(), self.points.last()) {
            write!( f, ", {first} .. {last}")?;
        }
        write!( f, ")")
    }
}

/// synthesize a path for `route` with `segments_per_leg` segments per leg, using the default control point offset.
/// The result has `1 + n_legs * segments_per_leg` points and passes exactly through every waypoint of the route
pub fn synthesize<R: Rng> (route: &Route, segments_per_leg: usize, rng: &mut R)->Result<FlightPath> {
    synthesize_with_offset( route, segments_per_leg, DEFAULT_CONTROL_OFFSET, rng)
}

/// synthesize a path for `route` with an explicit control point offset (in degrees, 0.0 gives straight legs)
pub fn synthesize_with_offset<R: Rng> (route: &Route, segments_per_leg: usize, control_offset: f64, rng: &mut R)->Result<FlightPath> {
    route.validate()?;
    if segments_per_leg < 1 {
        return Err( invalid_input!("segments per leg must be >= 1, got {}", segments_per_leg))
    }
    if !control_offset.is_finite() {
        return Err( invalid_input!("control point offset must be finite, got {}", control_offset))
    }

    let k = segments_per_leg;
    let mut points: Vec<LatLon> = Vec::with_capacity( 1 + route.n_legs() * k);

    for (i,(a,b)) in route.legs().enumerate() {
        let c = control_point( a, b, control_offset, rng);

        // t=0 of each subsequent leg is the t=1 point of the previous one
        let i0 = if i == 0 { 0 } else { 1 };
        for s in i0..=k {
            let t = s as f64 / k as f64;
            points.push( quadratic_bezier( a, &c, b, t));
        }
    }

    Ok( FlightPath { points } )
}

/// leg midpoint shifted by ±offset on each axis, with independently chosen random signs
pub fn control_point<R: Rng> (a: &LatLon, b: &LatLon, offset: f64, rng: &mut R)->LatLon {
    let mid = LatLon::from_coord( (a.coord() + b.coord()) / 2.0);
    let dlat = if rng.random_bool(0.5) { offset } else { -offset };
    let dlon = if rng.random_bool(0.5) { offset } else { -offset };
    mid.offset( dlat, dlon)
}

/// P(t) = (1−t)²·A + 2(1−t)t·C + t²·B, evaluated independently per axis.
/// This returns A for t == 0.0 and B for t == 1.0 without rounding error
pub fn quadratic_bezier (a: &LatLon, c: &LatLon, b: &LatLon, t: f64)->LatLon {
    let u = 1.0 - t;
    let p = a.coord() * (u*u) + c.coord() * (2.0*u*t) + b.coord() * (t*t);
    LatLon::from_coord(p)
}
