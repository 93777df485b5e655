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

use std::{fmt,marker::PhantomData,cmp};
use serde::ser::{Serialize as SerializeTrait, Serializer};
use serde::de::{self, Deserialize as DeserializeTrait, Deserializer, Visitor};

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

pub trait AngleKind {
    fn normalize(v: f64)->f64;
    fn fmt_display(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:.1}deg", value) }
    fn fmt_debug(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// [0..360) degrees, clockwise from north
#[derive(Debug,Clone,Copy)]
pub struct FullCircleKind {}
impl AngleKind for FullCircleKind {
    fn normalize(v: f64) -> f64 { 
        let x = normalize_360(v);
        if x >= 360.0 { 0.0 } else { x } // -1e-17 % 360 + 360 rounds up to 360
    }
    fn fmt_debug(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Angle360({})", value) }
}

#[derive(Copy, Clone)]
pub struct NormalizedAngle<K> where K: AngleKind {
    value: f64,
    kind: PhantomData<K>,
}

impl<K> NormalizedAngle<K> where K: AngleKind {
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        NormalizedAngle { value: K::normalize(deg), kind: PhantomData }
    }

    pub fn from_radians(rad: f64) -> Self {
        NormalizedAngle { value: K::normalize(rad.to_degrees()), kind: PhantomData }
    }

    #[inline] pub fn radians(&self)->f64 { self.value.to_radians() }
    #[inline] pub fn degrees(&self)->f64 { self.value }
}

impl <K> From<NormalizedAngle<K>> for f64 where K: AngleKind {
    fn from(a: NormalizedAngle<K>) -> Self { a.value }
}

impl<K> fmt::Display for NormalizedAngle<K> where K: AngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { K::fmt_display( self.value, f) }
}

impl<K> fmt::Debug for NormalizedAngle<K> where K: AngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { K::fmt_debug( self.value, f) }
}

impl<K> cmp::PartialEq for NormalizedAngle<K> where K: AngleKind {
    fn eq(&self, other: &Self) -> bool { self.value == other.value }
}

impl<K> cmp::PartialOrd for NormalizedAngle<K> where K: AngleKind {
    fn partial_cmp(&self,other:&Self) -> Option<cmp::Ordering> { self.value.partial_cmp(&other.value) }
}

pub type Angle360 = NormalizedAngle<FullCircleKind>;

/// direction of travel, clockwise from north
pub type Heading = Angle360;

//--- serde support

impl<K> SerializeTrait for NormalizedAngle<K> where K: AngleKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_f64(self.value)
    }
}

impl<'de> DeserializeTrait<'de> for Angle360 {
    fn deserialize<D>(deserializer: D) -> Result<Angle360, D::Error> where D: Deserializer<'de> {
        struct AngleVisitor;

        impl<'de> Visitor<'de> for AngleVisitor {
            type Value = Angle360;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("floating point degrees between [0..360]")
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> where E: de::Error {
                if value >= 0.0 && value <= 360.0 {
                    Ok(Angle360::from_degrees(value))
                } else {
                    Err(E::custom(format!("degrees out of range: {}", value)))
                }
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> where E: de::Error { self.visit_f64( value as f64) }
            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> where E: de::Error { self.visit_f64( value as f64) }
        }

        deserializer.deserialize_f64( AngleVisitor)
    }
}
