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

//! the async simulation driver: a tokio task that owns a [`Simulation`], advances it from a repeat
//! timer and publishes the resulting snapshots through a watch channel. Commands for the simulation
//! (status assertions, stop) are sent through the [`SimulationHandle`] and processed between ticks.
//! Since a tick is a single synchronous pass it is never interrupted - stopping the driver just stops the timer

use std::{sync::Arc, time::Duration};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::{info,warn};

use crate::{
    aircraft::FlightStatus, simulation::{Simulation,FleetSnapshot},
    errors::{Result,UamSimError}
};

const CMD_QUEUE_LEN: usize = 16;

#[derive(Debug)]
pub enum SimCommand {
    SetStatus { id: String, status: FlightStatus },
    Stop,
}

/// the client side of a running simulation driver.
/// Dropping the handle stops the driver
pub struct SimulationHandle {
    cmd_tx: mpsc::Sender<SimCommand>,
    snapshot_rx: watch::Receiver<Arc<FleetSnapshot>>,
    task: JoinHandle<Simulation>,
}

impl SimulationHandle {
    /// the most recently published fleet snapshot
    pub fn snapshot (&self)->Arc<FleetSnapshot> {
        self.snapshot_rx.borrow().clone()
    }

    /// get a receiver that is notified for each new snapshot
    pub fn subscribe (&self)->watch::Receiver<Arc<FleetSnapshot>> {
        self.snapshot_rx.clone()
    }

    pub async fn set_status (&self, id: impl ToString, status: FlightStatus)->Result<()> {
        self.send( SimCommand::SetStatus { id: id.to_string(), status }).await
    }

    pub async fn stop (&self)->Result<()> {
        self.send( SimCommand::Stop).await
    }

    pub fn is_finished (&self)->bool { self.task.is_finished() }

    /// wait for the driver to terminate and get back the simulation in its final state
    pub async fn join (self)->Result<Simulation> {
        Ok( self.task.await? )
    }

    async fn send (&self, cmd: SimCommand)->Result<()> {
        self.cmd_tx.send( cmd).await.map_err( |_| UamSimError::DriverStopped)
    }
}

/// spawn the driver task for `sim`, ticking every `tick_interval`. If `max_ticks` is set the driver
/// terminates after that many ticks, otherwise it runs until stopped.
/// Needs to be called from within a tokio runtime
pub fn spawn_simulation (sim: Simulation, tick_interval: Duration, max_ticks: Option<u64>)->SimulationHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel( CMD_QUEUE_LEN);
    let (snapshot_tx, snapshot_rx) = watch::channel( sim.snapshot());

    let task = tokio::spawn( run_simulation( sim, tick_interval, max_ticks, cmd_rx, snapshot_tx));
    SimulationHandle { cmd_tx, snapshot_rx, task }
}

async fn run_simulation (
    mut sim: Simulation, 
    tick_interval: Duration, 
    max_ticks: Option<u64>,
    mut cmd_rx: mpsc::Receiver<SimCommand>, 
    snapshot_tx: watch::Sender<Arc<FleetSnapshot>>
) -> Simulation {
    let mut interval = time::interval( tick_interval);
    interval.set_missed_tick_behavior( MissedTickBehavior::Delay); // don't burst if we fell behind
    interval.tick().await; // the first tick completes immediately - the first advance happens after one period

    let mut n_ticks: u64 = 0;
    info!("simulation started with {} aircraft, tick interval {:?}", sim.snapshot().len(), tick_interval);

    while max_ticks.is_none_or( |max| n_ticks < max) {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(SimCommand::SetStatus{id,status}) => {
                        match sim.set_status( &id, status) {
                            Ok(()) => { snapshot_tx.send_replace( sim.snapshot()); }
                            Err(e) => warn!("ignoring status command: {}", e)
                        }
                    }
                    Some(SimCommand::Stop) | None => break // None means all handles are gone
                }
            }
            _ = interval.tick() => {
                let report = sim.tick();
                if !report.is_ok() {
                    warn!("tick {}: {} aircraft updated, {} failed", report.tick, report.n_updated, report.failures.len());
                }
                snapshot_tx.send_replace( sim.snapshot());
                n_ticks += 1;
            }
        }
    }

    info!("simulation stopped after {} ticks", n_ticks);
    sim
}
