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

use std::fmt;
use serde::{Serialize,Deserialize};
use uam_common::geo::LatLon;

use crate::errors::{Result,UamSimError,invalid_input};

/// a named, ordered sequence of waypoints that defines the legs an aircraft has to fly.
/// Routes come from static configuration and are never mutated by the simulation
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Route {
    pub name: String,
    pub waypoints: Vec<LatLon>,
}

impl Route {
    pub fn new (name: impl ToString, waypoints: Vec<LatLon>)->Self {
        Route { name: name.to_string(), waypoints }
    }

    pub fn from_lat_lon (name: impl ToString, waypoints: &[(f64,f64)])->Self {
        Route::new( name, waypoints.iter().map( |p| LatLon::from(*p)).collect())
    }

    pub fn len (&self)->usize { self.waypoints.len() }
    pub fn n_legs (&self)->usize { self.waypoints.len().saturating_sub(1) }

    pub fn first (&self)->Option<&LatLon> { self.waypoints.first() }
    pub fn last (&self)->Option<&LatLon> { self.waypoints.last() }

    /// iterate over consecutive (start,end) waypoint pairs
    pub fn legs (&self)->impl Iterator<Item=(&LatLon,&LatLon)> {
        self.waypoints.windows(2).map( |w| (&w[0], &w[1]))
    }

    /// a closed route ends where it started (e.g. a circuit that returns to its origin vertiport)
    pub fn is_closed (&self)->bool {
        self.waypoints.len() > 1 && self.waypoints.first() == self.waypoints.last()
    }

    /// check the precondition for path synthesis: at least two finite waypoints
    pub fn validate (&self)->Result<()> {
        if self.waypoints.len() < 2 {
            return Err( invalid_input!("route '{}' needs at least 2 waypoints, has {}", self.name, self.waypoints.len()))
        }
        if let Some(idx) = self.waypoints.iter().position( |p| !p.is_finite()) {
            return Err( invalid_input!("route '{}' has non-finite waypoint at index {}", self.name, idx))
        }
        Ok(())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Route( {}: ", self.name)?;
        for (i,p) in self.waypoints.iter().enumerate() {
            if i > 0 { write!( f, " -> ")?; }
            write!( f, "{p}")?;
        }
        write!( f, ")")
    }
}
