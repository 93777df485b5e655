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

//! shared building blocks for the UAM traffic simulation crates: geographic positions,
//! normalized angles (headings), bounded ring buffers and CLI definition macros

pub mod macros;
pub mod collections;
pub mod angle;
pub mod geo;

// syntactic sugar - this is just more readable in the geometry code
#[inline(always)] pub fn atan2(y:f64,x:f64) -> f64 { y.atan2(x) }

/// linear interpolation between `a` and `b` for fraction `t`.
/// Note this returns `a` exactly for t == 0.0
#[inline]
pub fn lerp (a: f64, b: f64, t: f64) -> f64 { a + (b - a) * t }

/// answer if `a` and `b` are within `eps` of each other
#[inline]
pub fn approx_eq (a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }
