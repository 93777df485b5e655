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

//! kinematic sampling of flight paths: map a fractional progress value in [0,1) onto a path
//! position by piecewise linear interpolation between the two enclosing path points, and
//! derive the heading from the same pair of points.
//! All functions are pure - the same path and progress always produce the same sample.

use uam_common::{geo::LatLon, angle::Heading};

use crate::path::FlightPath;
use crate::errors::{Result,UamSimError,invalid_input};

/// position and (if defined) heading for a given progress
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Sample {
    pub position: LatLon,

    /// None if the enclosing path points are coincident. Callers are supposed to keep their previous heading in this case
    pub heading: Option<Heading>,

    /// indices of the enclosing path points
    pub segment: (usize,usize),
}

/// the enclosing point indices (i,j) and the fraction between them for a given progress
pub fn segment_at (path: &FlightPath, progress: f64)->Result<(usize,usize,f64)> {
    check_progress( progress)?;
    let n = path.len();
    if n < 2 {
        return Err( invalid_input!("cannot sample path with {} points", n))
    }

    let u = progress * (n-1) as f64;
    let i = (u.floor() as usize).min(n-1); // progress < 1 but u can still round up to n-1
    let j = (i + 1).min(n-1);
    let frac = u - i as f64;

    Ok( (i,j,frac) )
}

pub fn position_at (path: &FlightPath, progress: f64)->Result<LatLon> {
    let (i,j,frac) = segment_at( path, progress)?;
    Ok( interpolate( path, i, j, frac) )
}

/// heading of the path segment that contains `progress`, or None if its end points are coincident
pub fn heading_at (path: &FlightPath, progress: f64)->Result<Option<Heading>> {
    let (i,j,_) = segment_at( path, progress)?;
    Ok( segment_heading( path, i, j) )
}

pub fn sample (path: &FlightPath, progress: f64)->Result<Sample> {
    let (i,j,frac) = segment_at( path, progress)?;
    Ok( Sample {
        position: interpolate( path, i, j, frac),
        heading: segment_heading( path, i, j),
        segment: (i,j)
    })
}

fn check_progress (progress: f64)->Result<()> {
    if progress >= 0.0 && progress < 1.0 { // also rejects NaN
        Ok(())
    } else {
        Err( invalid_input!("progress {} not in [0,1)", progress))
    }
}

#[inline]
fn interpolate (path: &FlightPath, i: usize, j: usize, frac: f64)->LatLon {
    let pts = path.points();
    pts[i].lerp( &pts[j], frac)
}

#[inline]
fn segment_heading (path: &FlightPath, i: usize, j: usize)->Option<Heading> {
    let pts = path.points();
    pts[i].planar_bearing_to( &pts[j])
}
