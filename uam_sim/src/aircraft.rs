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

use std::{fmt, sync::Arc};
use serde::{Serialize,Deserialize,Serializer};
use rand::Rng;
use uom::si::{f64::{Length,Velocity}, length::foot, velocity::knot};
use uam_common::{geo::LatLon, angle::Heading, collections::RingBuffer};

use crate::{path::FlightPath, sampler, config::FlightSpec};
use crate::errors::{Result,UamSimError,invalid_input};

pub const DEFAULT_HISTORY_CAPACITY: usize = 30;

/// operational status of a flight. This is asserted from outside (operators, conflict detection),
/// the simulation only carries it along
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
#[serde(rename_all="SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    #[default]
    Normal,
    Delayed,
    Emergency,
    Landing,
    Conflict,
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlightStatus::Normal => "NORMAL",
            FlightStatus::Delayed => "DELAYED",
            FlightStatus::Emergency => "EMERGENCY",
            FlightStatus::Landing => "LANDING",
            FlightStatus::Conflict => "CONFLICT",
        };
        f.write_str(s)
    }
}

/// the per-tick state advancement parameters
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct TickParams {
    /// fraction of the path covered per tick
    pub progress_increment: f64,
    /// battery percentage points drained per tick
    pub battery_drain: f64,
    /// altitude changes by a uniform random amount in [-jitter/2, jitter/2) per tick
    pub altitude_jitter: Length,
}

/// the simulated state of a single flight.
/// AircraftStates are never changed in place once they are published - each tick produces a new
/// instance from its predecessor (see [`AircraftState::advance`]). Identity fields and the path are
/// kept in Arcs so that this does not require heap allocation
#[derive(Debug,Clone,Serialize)]
pub struct AircraftState {
    pub id: Arc<String>,
    pub callsign: Arc<String>,
    pub squawk: Arc<String>,
    pub origin: Arc<String>,
    pub destination: Arc<String>,
    pub route: Arc<String>,

    #[serde(skip)]
    pub path: Arc<FlightPath>,

    /// fractional position along the path in [0,1), wraps around at the end
    pub progress: f64,
    pub position: LatLon,

    /// the last defined heading (held across degenerate path segments)
    pub heading: Option<Heading>,

    /// the most recent positions, oldest first (used to render trails)
    pub history: RingBuffer<LatLon>,

    #[serde(serialize_with="ser_feet")]
    pub altitude: Length,

    #[serde(serialize_with="ser_knots")]
    pub speed: Velocity,

    /// percent, never negative
    pub battery: f64,

    pub status: FlightStatus,
}

impl AircraftState {
    /// create the initial state for a flight from its definition and the path it was assigned
    pub fn new (spec: &FlightSpec, path: Arc<FlightPath>, history_capacity: usize)->Result<Self> {
        path.validate()?;
        if !(spec.battery >= 0.0 && spec.battery <= 100.0) {
            return Err( invalid_input!("battery of flight {} not in [0,100]: {}", spec.id, spec.battery))
        }
        let s = sampler::sample( &path, spec.progress)?;

        Ok( AircraftState {
            id: Arc::new( spec.id.clone()),
            callsign: Arc::new( spec.callsign.clone()),
            squawk: Arc::new( spec.squawk.clone()),
            origin: Arc::new( spec.origin.clone()),
            destination: Arc::new( spec.destination.clone()),
            route: Arc::new( spec.route.clone()),
            path,
            progress: spec.progress,
            position: s.position,
            heading: s.heading,
            history: RingBuffer::new( history_capacity),
            altitude: Length::new::<foot>( spec.altitude),
            speed: Velocity::new::<knot>( spec.speed),
            battery: spec.battery,
            status: spec.status,
        })
    }

    /// compute the successor state for one tick.
    /// This fails if our path is not sampleable, in which case the caller should keep the current state
    pub fn advance<R: Rng> (&self, params: &TickParams, rng: &mut R)->Result<AircraftState> {
        self.path.validate()?;

        let progress = (self.progress + params.progress_increment) % 1.0;
        let s = sampler::sample( &self.path, progress)?;

        let mut next = self.clone();
        next.progress = progress;
        next.position = s.position;
        if s.heading.is_some() { // otherwise hold the last heading
            next.heading = s.heading;
        }
        next.history.push( s.position);
        next.battery = (self.battery - params.battery_drain).max(0.0);
        next.altitude = self.altitude + params.altitude_jitter * (rng.random::<f64>() - 0.5);

        Ok(next)
    }

    pub fn altitude_ft (&self)->f64 { self.altitude.get::<foot>() }
    pub fn speed_kn (&self)->f64 { self.speed.get::<knot>() }
}

impl fmt::Display for AircraftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Aircraft( id: {}, cs: \"{}\", sqk: {}", self.id, self.callsign, self.squawk)?;
        write!( f, ", {} -> {}", self.origin, self.destination)?;
        write!( f, ", pos: {}, progress: {:.4}", self.position, self.progress)?;
        if let Some(hdg) = self.heading { write!( f, ", hdg: {:.0}", hdg.degrees())?; }
        write!( f, ", alt: {:.0}, spd: {:.0}, bat: {:.2}%", self.altitude_ft(), self.speed_kn(), self.battery)?;
        write!( f, ", n_hist: {}, status: {})", self.history.len(), self.status)
    }
}

fn ser_feet<S: Serializer> (len: &Length, s: S)->std::result::Result<S::Ok,S::Error> {
    s.serialize_f64( len.get::<foot>())
}

fn ser_knots<S: Serializer> (v: &Velocity, s: S)->std::result::Result<S::Ok,S::Error> {
    s.serialize_f64( v.get::<knot>())
}
