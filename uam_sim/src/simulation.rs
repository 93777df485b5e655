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

use std::sync::Arc;
use chrono::{DateTime,Utc};
use serde::Serialize;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug,info,error};
use uam_common::geo::LatLon;

use crate::{
    aircraft::{AircraftState,FlightStatus,TickParams}, config::SimConfig, path::synthesize_with_offset,
    errors::{Result,UamSimError}
};

/// the immutable state of all aircraft after a given tick.
/// Each tick produces a new snapshot, i.e. readers holding an `Arc<FleetSnapshot>` always see a
/// consistent picture of the whole fleet
#[derive(Debug,Clone,Serialize)]
pub struct FleetSnapshot {
    pub tick: u64,
    pub timestamp: DateTime<Utc>,
    pub aircraft: Vec<AircraftState>,
}

impl FleetSnapshot {
    pub fn len (&self)->usize { self.aircraft.len() }
    pub fn is_empty (&self)->bool { self.aircraft.is_empty() }
    pub fn iter (&self)->impl Iterator<Item=&AircraftState> { self.aircraft.iter() }

    pub fn get (&self, id: &str)->Option<&AircraftState> {
        self.aircraft.iter().find( |ac| ac.id.as_str() == id)
    }

    /// where to point a camera at if the user selects aircraft `id`
    pub fn position_of (&self, id: &str)->Option<LatLon> {
        self.get(id).map( |ac| ac.position)
    }

    pub fn to_json (&self)->Result<String> {
        Ok( serde_json::to_string(self)? )
    }
}

/// an aircraft that could not be advanced in a tick (its previous state was carried over)
#[derive(Debug)]
pub struct TickFailure {
    pub id: Arc<String>,
    pub error: UamSimError,
}

#[derive(Debug)]
pub struct TickReport {
    pub tick: u64,
    pub n_updated: usize,
    pub failures: Vec<TickFailure>,
}

impl TickReport {
    pub fn is_ok (&self)->bool { self.failures.is_empty() }
}

/// the synchronous simulation core: owns the current fleet snapshot and the randomness source,
/// and advances all aircraft by one tick per [`Simulation::tick`] call.
/// Scheduling ticks is up to the caller (see [`crate::driver`])
pub struct Simulation {
    params: TickParams,
    rng: StdRng,
    snapshot: Arc<FleetSnapshot>,
}

impl Simulation {
    /// set up the fleet of `config`. If the config has a seed the simulation is reproducible
    pub fn new (config: &SimConfig)->Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng()
        };
        Self::with_rng( config, rng)
    }

    pub fn with_rng (config: &SimConfig, mut rng: StdRng)->Result<Self> {
        config.validate()?;

        let mut aircraft = Vec::with_capacity( config.flights.len());
        for spec in &config.flights {
            let route = config.route( &spec.route)?;
            let path = synthesize_with_offset( route, config.segments_per_leg, config.control_offset, &mut rng)?;
            debug!("flight {} on route {}: {:?}", spec.id, route.name, path);

            let ac = AircraftState::new( spec, Arc::new(path), config.history_capacity)?;
            info!("created {}", ac);
            aircraft.push( ac);
        }

        Ok( Self::from_aircraft( config.tick_params(), aircraft, rng) )
    }

    /// assemble a simulation from already initialized aircraft (e.g. with externally supplied paths)
    pub fn from_aircraft (params: TickParams, aircraft: Vec<AircraftState>, rng: StdRng)->Self {
        let snapshot = Arc::new( FleetSnapshot { tick: 0, timestamp: Utc::now(), aircraft });
        Simulation { params, rng, snapshot }
    }

    pub fn params (&self)->&TickParams { &self.params }

    pub fn snapshot (&self)->Arc<FleetSnapshot> { self.snapshot.clone() }

    pub fn tick_count (&self)->u64 { self.snapshot.tick }

    /// advance all aircraft by one tick and replace the current snapshot.
    /// Aircraft that fail to advance keep their previous state and are listed in the returned report,
    /// they do not affect the update of other aircraft
    pub fn tick (&mut self)->TickReport {
        let prev = self.snapshot.clone();
        let tick = prev.tick + 1;

        let mut aircraft = Vec::with_capacity( prev.aircraft.len());
        let mut failures = Vec::new();

        for ac in &prev.aircraft {
            match ac.advance( &self.params, &mut self.rng) {
                Ok(next) => aircraft.push( next),
                Err(e) => {
                    error!("tick {}: failed to advance aircraft {}: {}", tick, ac.id, e);
                    failures.push( TickFailure { id: ac.id.clone(), error: e });
                    aircraft.push( ac.clone());
                }
            }
        }

        let n_updated = aircraft.len() - failures.len();
        self.snapshot = Arc::new( FleetSnapshot { tick, timestamp: Utc::now(), aircraft });

        TickReport { tick, n_updated, failures }
    }

    /// externally assert the status of aircraft `id`. This replaces the current snapshot (without advancing the tick)
    pub fn set_status (&mut self, id: &str, status: FlightStatus)->Result<()> {
        let idx = self.snapshot.aircraft.iter()
            .position( |ac| ac.id.as_str() == id)
            .ok_or_else( || UamSimError::UnknownAircraft( id.to_string()))?;

        let mut snapshot = (*self.snapshot).clone();
        snapshot.aircraft[idx].status = status;
        self.snapshot = Arc::new( snapshot);

        info!("status of {} set to {}", id, status);
        Ok(())
    }
}
