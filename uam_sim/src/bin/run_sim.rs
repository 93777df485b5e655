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

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uam_common::define_cli;
use uam_sim::{Simulation, spawn_simulation, load_config, default_config};

define_cli! { ARGS [about="simulated UAM traffic - advances the configured fleet along its routes"] =
    config: Option<String> [help="RON config file with routes and flights (default: built-in catalog)", long],
    ticks: Option<u64> [help="stop after the given number of ticks", long],
    seed: Option<u64> [help="seed for path synthesis and telemetry jitter", long],
    json: bool [help="print each fleet snapshot as a JSON line to stdout", long],
    report_every: u64 [help="log fleet summary every N ticks (0: never)", long, default_value_t=50]
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer( std::io::stderr)
        .init();

    let mut config = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => default_config()?
    };
    if ARGS.seed.is_some() { config.seed = ARGS.seed }

    let sim = Simulation::new( &config)?;
    let handle = spawn_simulation( sim, config.tick_interval, ARGS.ticks);
    let mut rx = handle.subscribe();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            res = rx.changed() => {
                if res.is_err() { break } // driver terminated

                let snapshot = rx.borrow_and_update().clone();
                if ARGS.json {
                    println!("{}", snapshot.to_json()?);
                }
                if ARGS.report_every > 0 && snapshot.tick > 0 && snapshot.tick % ARGS.report_every == 0 {
                    info!("--- tick {}", snapshot.tick);
                    for ac in snapshot.iter() { info!("{}", ac) }
                }
            }
            _ = &mut ctrl_c => {
                info!("terminating simulation");
                handle.stop().await?;
                break
            }
        }
    }

    let sim = handle.join().await?;
    info!("simulation ended at tick {}", sim.tick_count());
    Ok(())
}
