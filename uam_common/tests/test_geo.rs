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

use uam_common::{approx_eq, angle::*, geo::*};

// run with "cargo test --test test_geo -- --nocapture"

#[test]
fn test_basic () {
    let p = LatLon::new( 34.811, 126.392);
    println!("display p = {}", p);
    println!("debug p = {:?}", p);
    assert_eq!( 34.811, p.lat());
    assert_eq!( 126.392, p.lon());

    // geo::Coord uses x for longitude
    let c = p.coord();
    assert_eq!( 126.392, c.x);
    assert_eq!( 34.811, c.y);
    assert_eq!( p, LatLon::from(c));
}

#[test]
fn test_serde () {
    let p = LatLon::new( 34.482, 126.262);

    let s = serde_json::to_string(&p).unwrap();
    println!("serialized LatLon: '{s}'");
    assert_eq!( r#"{"lat":34.482,"lon":126.262}"#, s);

    // alternative field names
    let input = r#"{ "latitude": 34.482, "lng": 126.262 }"#;
    let p1: LatLon = serde_json::from_str(input).unwrap();
    assert_eq!( p, p1);

    let p2: LatLon = ron::from_str("(lat: 34.482, lon: 126.262)").unwrap();
    println!("from RON: {p2}");
    assert_eq!( p, p2);
}

#[test]
fn test_lerp () {
    let a = LatLon::new( 34.0, 126.0);
    let b = LatLon::new( 35.0, 128.0);

    assert_eq!( a, a.lerp(&b, 0.0));

    let m = a.lerp(&b, 0.5);
    assert!( approx_eq( m.lat(), 34.5, 1e-12));
    assert!( approx_eq( m.lon(), 127.0, 1e-12));

    let e = a.lerp(&b, 1.0);
    assert!( approx_eq( e.lat(), b.lat(), 1e-12) && approx_eq( e.lon(), b.lon(), 1e-12));
}

#[test]
fn test_planar_bearing () {
    let p = LatLon::new( 34.0, 126.0);

    let north = p.planar_bearing_to( &p.offset( 1.0, 0.0)).unwrap();
    let east = p.planar_bearing_to( &p.offset( 0.0, 1.0)).unwrap();
    let south = p.planar_bearing_to( &p.offset( -1.0, 0.0)).unwrap();
    let west = p.planar_bearing_to( &p.offset( 0.0, -1.0)).unwrap();
    let ne = p.planar_bearing_to( &p.offset( 1.0, 1.0)).unwrap();
    println!("N: {north}, E: {east}, S: {south}, W: {west}, NE: {ne}");

    assert!( approx_eq( north.degrees(), 0.0, 1e-9));
    assert!( approx_eq( east.degrees(), 90.0, 1e-9));
    assert!( approx_eq( south.degrees(), 180.0, 1e-9));
    assert!( approx_eq( west.degrees(), 270.0, 1e-9)); // atan2 gives -90, normalized into [0,360)
    assert!( approx_eq( ne.degrees(), 45.0, 1e-9));

    // coincident points have no direction
    assert!( p.planar_bearing_to(&p).is_none());
}

#[test]
fn test_heading_normalization () {
    assert_eq!( 270.0, Heading::from_degrees(-90.0).degrees());
    assert_eq!( 10.0, Heading::from_degrees(370.0).degrees());
    assert_eq!( 0.0, Heading::from_degrees(360.0).degrees());

    let h: Heading = serde_json::from_str("45.5").unwrap();
    assert_eq!( 45.5, h.degrees());
    assert!( serde_json::from_str::<Heading>("-45.0").is_err());
}
