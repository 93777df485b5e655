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

//! simulation configuration: tick parameters, the route catalog and the fleet definition.
//! Configs are RON files. If no file is given we use the built-in catalog of the regional network
//! (`configs/uam_sim.ron`), which is compiled into the crate.

use std::{collections::HashSet, fs, path::Path, time::Duration};
use serde::{Serialize,Deserialize};
use uom::si::{f64::Length, length::foot};

use crate::{route::Route, aircraft::{FlightStatus,TickParams}, path::DEFAULT_CONTROL_OFFSET};
use crate::errors::{Result,UamSimError,invalid_input};

pub const DEFAULT_CONFIG: &str = include_str!("../configs/uam_sim.ron");

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct SimConfig {
    pub tick_interval: Duration, // wallclock time between ticks
    pub progress_increment: f64, // path fraction per tick (a full traversal takes 1/progress_increment ticks)
    pub segments_per_leg: usize, // path resolution
    #[serde(default="default_control_offset")]
    pub control_offset: f64, // diagonal Bézier control point offset in degrees
    pub history_capacity: usize, // max number of trail positions per aircraft
    pub battery_drain: f64, // battery percentage points per tick
    pub altitude_jitter: f64, // feet (peak to peak) per tick
    #[serde(default)]
    pub seed: Option<u64>, // if set, path synthesis and jitter are reproducible

    pub routes: Vec<Route>,
    pub flights: Vec<FlightSpec>,
}

fn default_control_offset()->f64 { DEFAULT_CONTROL_OFFSET }

/// static definition of a flight
#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct FlightSpec {
    pub id: String,
    pub callsign: String,
    pub squawk: String,
    pub origin: String,
    pub destination: String,
    pub route: String, // name of the route in the catalog

    #[serde(default)]
    pub progress: f64, // initial offset so that aircraft on the same route are not collocated

    pub altitude: f64, // ft
    pub speed: f64, // kn
    pub battery: f64, // percent

    #[serde(default)]
    pub status: FlightStatus,
}

impl SimConfig {
    pub fn route (&self, name: &str)->Result<&Route> {
        self.routes.iter()
            .find( |r| r.name == name)
            .ok_or_else( || UamSimError::UnknownRoute( name.to_string()))
    }

    pub fn tick_params (&self)->TickParams {
        TickParams {
            progress_increment: self.progress_increment,
            battery_drain: self.battery_drain,
            altitude_jitter: Length::new::<foot>( self.altitude_jitter),
        }
    }

    /// check all values once at load time so that the simulation does not have to guard against them
    pub fn validate (&self)->Result<()> {
        if self.tick_interval.is_zero() {
            return Err( invalid_input!("tick interval must be > 0"))
        }
        if !(self.progress_increment > 0.0 && self.progress_increment < 1.0) {
            return Err( invalid_input!("progress increment not in (0,1): {}", self.progress_increment))
        }
        if self.segments_per_leg < 1 {
            return Err( invalid_input!("segments per leg must be >= 1, got {}", self.segments_per_leg))
        }
        if !self.control_offset.is_finite() {
            return Err( invalid_input!("control offset not finite: {}", self.control_offset))
        }
        if self.history_capacity < 1 {
            return Err( invalid_input!("history capacity must be >= 1"))
        }
        if !(self.battery_drain >= 0.0 && self.battery_drain.is_finite()) {
            return Err( invalid_input!("battery drain must be finite and >= 0, got {}", self.battery_drain))
        }
        if !(self.altitude_jitter >= 0.0 && self.altitude_jitter.is_finite()) {
            return Err( invalid_input!("altitude jitter must be finite and >= 0, got {}", self.altitude_jitter))
        }

        let mut names: HashSet<&str> = HashSet::new();
        for route in &self.routes {
            route.validate()?;
            if !names.insert( route.name.as_str()) {
                return Err( invalid_input!("duplicate route name '{}'", route.name))
            }
        }

        let mut ids: HashSet<&str> = HashSet::new();
        for flight in &self.flights {
            self.route( &flight.route)?;
            if !ids.insert( flight.id.as_str()) {
                return Err( invalid_input!("duplicate flight id '{}'", flight.id))
            }
            if !(flight.progress >= 0.0 && flight.progress < 1.0) {
                return Err( invalid_input!("initial progress of flight {} not in [0,1): {}", flight.id, flight.progress))
            }
            if !(flight.battery >= 0.0 && flight.battery <= 100.0) {
                return Err( invalid_input!("battery of flight {} not in [0,100]: {}", flight.id, flight.battery))
            }
            if !(flight.altitude.is_finite() && flight.speed.is_finite()) {
                return Err( invalid_input!("altitude and speed of flight {} have to be finite", flight.id))
            }
        }

        Ok(())
    }
}

/// parse and validate a config from a RON string
pub fn config_from_str (s: &str)->Result<SimConfig> {
    let config: SimConfig = ron::from_str(s)?;
    config.validate()?;
    Ok(config)
}

/// load and validate a config from a RON file
pub fn load_config<P: AsRef<Path>> (path: P)->Result<SimConfig> {
    let data = fs::read( path.as_ref())?;
    let config: SimConfig = ron::de::from_bytes( data.as_slice())?;
    config.validate()?;
    Ok(config)
}

/// the built-in route catalog and fleet
pub fn default_config ()->Result<SimConfig> {
    config_from_str( DEFAULT_CONFIG)
}
