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
#![allow(unused)]

use std::{sync::Arc, time::Duration};
use rand::{SeedableRng, rngs::StdRng};
use uom::si::{f64::Length, length::foot};
use uam_common::{approx_eq, geo::LatLon};
use uam_sim::*;

// run with "cargo test --test test_simulation -- --nocapture"

fn flight (id: &str, route: &str, progress: f64, battery: f64)->FlightSpec {
    FlightSpec {
        id: id.to_string(),
        callsign: format!("HL-{id}"),
        squawk: "1101".to_string(),
        origin: "Mokpo".to_string(),
        destination: "Jindo".to_string(),
        route: route.to_string(),
        progress,
        altitude: 1500.0,
        speed: 185.0,
        battery,
        status: FlightStatus::Normal,
    }
}

fn jindo_config (flights: Vec<FlightSpec>)->SimConfig {
    SimConfig {
        tick_interval: Duration::from_millis(100),
        progress_increment: 0.0004,
        segments_per_leg: 15,
        control_offset: 0.03,
        history_capacity: 30,
        battery_drain: 0.002,
        altitude_jitter: 1.0,
        seed: Some(42),
        routes: vec![ Route::from_lat_lon( "JINDO", &[(34.811,126.392), (34.482,126.262)]) ],
        flights,
    }
}

#[test]
fn test_initial_snapshot () {
    let config = jindo_config( vec![ flight("A", "JINDO", 0.0, 95.0), flight("B", "JINDO", 0.5, 80.0) ]);
    let sim = Simulation::new( &config).unwrap();
    let snap = sim.snapshot();

    assert_eq!( 0, snap.tick);
    assert_eq!( 2, snap.len());

    let a = snap.get("A").unwrap();
    assert_eq!( LatLon::new( 34.811, 126.392), a.position);
    assert_eq!( 16, a.path.len());
    assert!( a.history.is_empty());
    assert!( a.heading.is_some());

    // initial progress offset keeps aircraft on the same route apart
    let b = snap.get("B").unwrap();
    assert_ne!( a.position, b.position);
    assert_eq!( Some(b.position), snap.position_of("B"));
    assert!( snap.position_of("X").is_none());
}

#[test]
fn test_full_traversal () {
    let config = jindo_config( vec![ flight("A", "JINDO", 0.0, 95.0) ]);
    let mut sim = Simulation::new( &config).unwrap();
    let path = sim.snapshot().get("A").unwrap().path.clone();

    for _ in 0..2500 {
        assert!( sim.tick().is_ok());
    }

    // 2500 * 0.0004 == 1.0 up to accumulated rounding, i.e. we are back at the cyclic origin
    let ac = sim.snapshot().get("A").unwrap().clone();
    let cyclic_dist = ac.progress.min( 1.0 - ac.progress);
    println!("progress after 2500 ticks: {}", ac.progress);
    assert!( cyclic_dist < 1e-9);

    // rounding leaves us just short of the wrap, i.e. at the path end
    let last = path.last().unwrap();
    assert!( approx_eq( ac.position.lat(), last.lat(), 1e-6) && approx_eq( ac.position.lon(), last.lon(), 1e-6));

    // .. and the next tick continues from the path origin
    sim.tick();
    let ac = sim.snapshot().get("A").unwrap().clone();
    assert!( ac.progress < 0.001);
    let first = path.first().unwrap();
    assert!( approx_eq( ac.position.lat(), first.lat(), 0.01) && approx_eq( ac.position.lon(), first.lon(), 0.01));
}

#[test]
fn test_bounded_history () {
    let config = jindo_config( vec![ flight("A", "JINDO", 0.0, 95.0) ]);
    let mut sim = Simulation::new( &config).unwrap();

    let mut sampled: Vec<LatLon> = Vec::new();
    for n in 1..=100 {
        sim.tick();
        let snap = sim.snapshot();
        let ac = snap.get("A").unwrap();
        sampled.push( ac.position);

        assert_eq!( n.min(30), ac.history.len());
        assert_eq!( Some(&ac.position), ac.history.latest());
    }

    // the 30 most recent positions in chronological order
    let ac = sim.snapshot().get("A").unwrap().clone();
    assert_eq!( &sampled[70..], ac.history.to_vec().as_slice());
}

#[test]
fn test_battery_monotonic () {
    // low battery so that we hit the floor
    let config = jindo_config( vec![ flight("A", "JINDO", 0.0, 0.01) ]);
    let mut sim = Simulation::new( &config).unwrap();

    let mut last = sim.snapshot().get("A").unwrap().battery;
    for _ in 0..20 {
        sim.tick();
        let battery = sim.snapshot().get("A").unwrap().battery;
        assert!( battery <= last);
        assert!( battery >= 0.0);
        last = battery;
    }
    assert_eq!( 0.0, last);
}

#[test]
fn test_altitude_jitter_bounded () {
    let config = jindo_config( vec![ flight("A", "JINDO", 0.0, 95.0) ]);
    let mut sim = Simulation::new( &config).unwrap();

    let mut alt = sim.snapshot().get("A").unwrap().altitude_ft();
    let mut changed = false;
    for _ in 0..200 {
        sim.tick();
        let next = sim.snapshot().get("A").unwrap().altitude_ft();
        assert!( (next - alt).abs() <= 0.5 + 1e-9); // jitter 1.0ft peak to peak
        if next != alt { changed = true }
        alt = next;
    }
    assert!( changed);
}

#[test]
fn test_reproducible_with_seed () {
    let config = jindo_config( vec![ flight("A", "JINDO", 0.0, 95.0), flight("B", "JINDO", 0.3, 95.0) ]);
    let mut sim1 = Simulation::new( &config).unwrap();
    let mut sim2 = Simulation::new( &config).unwrap();

    for _ in 0..50 { sim1.tick(); sim2.tick(); }

    for (a1,a2) in sim1.snapshot().iter().zip( sim2.snapshot().iter()) {
        assert_eq!( a1.position, a2.position);
        assert_eq!( a1.altitude, a2.altitude);
        assert_eq!( a1.path, a2.path);
    }
}

#[test]
fn test_snapshot_isolation () {
    let config = jindo_config( vec![ flight("A", "JINDO", 0.0, 95.0) ]);
    let mut sim = Simulation::new( &config).unwrap();

    sim.tick();
    let before = sim.snapshot();
    let pos = before.get("A").unwrap().position;
    let n_hist = before.get("A").unwrap().history.len();

    sim.tick();
    sim.set_status( "A", FlightStatus::Emergency).unwrap();

    // the old snapshot is unchanged
    assert_eq!( 1, before.tick);
    assert_eq!( pos, before.get("A").unwrap().position);
    assert_eq!( n_hist, before.get("A").unwrap().history.len());
    assert_eq!( FlightStatus::Normal, before.get("A").unwrap().status);

    let after = sim.snapshot();
    assert_eq!( 2, after.tick);
    assert_eq!( FlightStatus::Emergency, after.get("A").unwrap().status);
}

#[test]
fn test_unknown_aircraft () {
    let config = jindo_config( vec![ flight("A", "JINDO", 0.0, 95.0) ]);
    let mut sim = Simulation::new( &config).unwrap();
    assert!( matches!( sim.set_status( "Z", FlightStatus::Conflict), Err(UamSimError::UnknownAircraft(_))));
}

#[test]
fn test_failure_isolation () {
    let config = jindo_config( vec![ flight("A", "JINDO", 0.0, 95.0) ]);
    let good = Simulation::new( &config).unwrap().snapshot().get("A").unwrap().clone();

    // an aircraft whose path got corrupted after construction
    let mut bad = good.clone();
    bad.id = Arc::new("BAD".to_string());
    bad.path = Arc::new( FlightPath::from_points( vec![ LatLon::new( 34.0, 126.0)]));

    let mut sim = Simulation::from_aircraft( config.tick_params(), vec![ bad.clone(), good.clone()], StdRng::seed_from_u64(0));
    let report = sim.tick();

    assert_eq!( 1, report.tick);
    assert_eq!( 1, report.n_updated);
    assert_eq!( 1, report.failures.len());
    assert_eq!( "BAD", report.failures[0].id.as_str());
    assert!( matches!( report.failures[0].error, UamSimError::MalformedPath(_)));

    let snap = sim.snapshot();
    let b = snap.get("BAD").unwrap();
    assert_eq!( bad.progress, b.progress); // carried over unchanged
    assert!( b.history.is_empty());

    let a = snap.get("A").unwrap();
    assert!( a.progress > good.progress);
    assert_eq!( 1, a.history.len());
}

#[test]
fn test_heading_hold () {
    // a path that ends in a hover segment (coincident points)
    let p = LatLon::new( 34.0, 126.0);
    let path = FlightPath::from_points( vec![ LatLon::new( 33.0, 126.0), p, p, p]);

    let config = jindo_config( vec![ flight("A", "JINDO", 0.0, 95.0) ]);
    let mut ac = Simulation::new( &config).unwrap().snapshot().get("A").unwrap().clone();
    ac.path = Arc::new( path);
    ac.progress = 0.0;
    ac.heading = None;

    let params = TickParams { progress_increment: 0.1, battery_drain: 0.0, altitude_jitter: Length::new::<foot>(0.0) };
    let mut rng = StdRng::seed_from_u64(0);

    let ac = ac.advance( &params, &mut rng).unwrap(); // 0.1 -> segment (0,1)
    let h = ac.heading.unwrap();
    assert!( approx_eq( h.degrees(), 0.0, 1e-9)); // north

    let ac = ac.advance( &params, &mut rng).unwrap(); // 0.2
    let ac = ac.advance( &params, &mut rng).unwrap(); // 0.3
    let ac = ac.advance( &params, &mut rng).unwrap(); // 0.4 -> segment (1,2), coincident
    println!("{ac}");
    assert_eq!( (1,2), uam_sim::sampler::sample( &ac.path, ac.progress).unwrap().segment);
    assert_eq!( p, ac.position);
    assert_eq!( Some(h), ac.heading);
}

#[test]
fn test_invalid_config () {
    let config = jindo_config( vec![ flight("A", "NOWHERE", 0.0, 95.0) ]);
    assert!( matches!( Simulation::new( &config), Err(UamSimError::UnknownRoute(_))));

    let config = jindo_config( vec![ flight("A", "JINDO", 1.0, 95.0) ]);
    assert!( matches!( Simulation::new( &config), Err(UamSimError::InvalidInput(_))));

    let mut config = jindo_config( vec![ flight("A", "JINDO", 0.0, 95.0) ]);
    config.routes.push( Route::from_lat_lon( "SHORT", &[(34.0,126.0)]));
    assert!( matches!( Simulation::new( &config), Err(UamSimError::InvalidInput(_))));
}
