//! Theme-color slots in URLs.
//!
//! Reads and writes the `?b=..&f=..&m=..` query that carries the body,
//! fixed-bar and meta `theme-color` slots, fills missing slots from a
//! single seed color, and builds what the page shows from the result: the
//! HTML snippet, preset keyword lists, share links and the light/dark
//! theme. [`controller`] ties these together behind one state value.
//!
//! ```rust
//! use tint_params::{decode_query, encode_query, ControllerSettings};
//!
//! let slots = decode_query("?b=0044ff").resolve(&ControllerSettings::default().defaults);
//! assert_eq!(encode_query(&slots), "?b=0044ff&f=ffbb00&m=ffbb00");
//! ```

pub mod codec;
pub mod controller;
pub mod decode;
mod patterns;
pub mod presets;
pub mod query;
pub mod share;
pub mod snippet;

pub use codec::{decode_param, encode_query, encode_slot, slot_hex};
pub use controller::{ControllerSettings, ControllerState, Edit, Effect};
pub use decode::{
    decode_query, decode_query_with_rotation, initial_color, DecodedQuery, DecodedSlot,
    SlotSource, COMPLEMENT_DEGREES,
};
pub use presets::{body_complement, slot_presets, PresetKeyword, PresetKeywords, BOOTSTRAP_PALETTE};
pub use query::QueryParams;
pub use share::share_url;
pub use snippet::{generate_snippet, page_theme};
