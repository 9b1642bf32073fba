//! Vendor feed conversion.
//!
//! Submodules:
//! - `current` — maps the `currentconditions` XML fragment onto a
//!   `Current` record plus its auxiliary context.

pub mod current;
