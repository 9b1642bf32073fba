//! Current-conditions XML conversion.
//!
//! This crate turns a vendor weather-service `currentconditions` XML
//! fragment into a typed [`Current`] record plus a [`ConditionsContext`]
//! carrying the values the record has no field for (the "more
//! information" link and the observation timestamp). The surrounding
//! concerns — fetching the feed, rendering, caching — belong to the
//! caller; this crate only maps tagged nodes onto fields.
//!
//! The fragment may be supplied as raw text
//! ([`parse_current_conditions`]) or as an already-located roxmltree
//! node ([`convert_current`]).

pub mod constants;
pub mod convert;
pub mod logging;
pub mod model;

pub use convert::current::{convert_current, parse_current_conditions, parse_observation_time};
pub use model::{ConditionsContext, ConvertError, Current};
