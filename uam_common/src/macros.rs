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

/// syntactic sugar to define a lazily parsed global command line argument struct, e.g.
/// ```ignore
/// define_cli! { ARGS [about="UAM traffic simulator"] =
///     ticks: Option<u64> [help="number of ticks to run", long],
///     config: Option<String> [help="path of RON config file", long]
/// }
/// ```
/// Users need to have `clap` (with "derive" feature) and `lazy_static` in their dependencies.
/// Fields of the generated struct are accessed through the global, e.g. `ARGS.ticks`
#[macro_export]
macro_rules! define_cli {
    ($name:ident [ $( $sopt:ident $(= $sx:expr)? ),* ] = $( $( #[$meta:meta] )* $fname:ident : $ftype:ty [ $( $fopt:ident $(= $fx:expr)?),* ] ),* ) => {
        use clap::Parser;
        use lazy_static::lazy_static;

        #[derive(Parser,Debug)]
        #[command( $( $sopt $(=$sx)? ),* )]
        struct CliOpts {
            $(
                #[arg( $( $fopt $(=$fx)? ),* )]
                $(#[$meta])*
                $fname : $ftype,
            )*
        }
        lazy_static! { static ref $name: CliOpts = CliOpts::parse(); }
    }
}
