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

//! flight kinematics for the simulated UAM traffic picture: synthesize smooth flight paths from
//! route waypoints, sample positions and headings along them, and advance a fleet of aircraft
//! on a fixed tick while keeping a bounded trail history per aircraft.
//!
//! The synchronous core is [`simulation::Simulation`], the async driver that runs it from a timer
//! and publishes [`simulation::FleetSnapshot`]s is in [`driver`].

pub mod errors;
pub mod route;
pub mod path;
pub mod sampler;
pub mod aircraft;
pub mod config;
pub mod simulation;
pub mod driver;

pub use errors::{Result,UamSimError};
pub use route::Route;
pub use path::{FlightPath,synthesize};
pub use sampler::{Sample,position_at,heading_at};
pub use aircraft::{AircraftState,FlightStatus,TickParams};
pub use config::{SimConfig,FlightSpec,load_config,default_config};
pub use simulation::{Simulation,FleetSnapshot,TickReport};
pub use driver::{SimulationHandle,SimCommand,spawn_simulation};
