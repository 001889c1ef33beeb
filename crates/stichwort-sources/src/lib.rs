//! Dictionary site adapters.
//!
//! One module per site. Every adapter implements
//! [`stichwort_core::source::DictionarySource`] and turns that site's
//! markup into the shared report shape; markup that does not look the
//! way the site usually renders it reads as "word not available", never
//! as a structural error.

pub mod dicio;
pub mod dictionary_com;
pub mod duden;
pub mod dwds;
pub mod format;
pub mod registry;
mod wiki;
pub mod wiktionary_de;
pub mod wiktionary_en;
pub mod wiktionary_fr;
pub mod wiktionary_la;

pub use dicio::Dicio;
pub use dictionary_com::DictionaryCom;
pub use duden::Duden;
pub use dwds::Dwds;
pub use registry::{SelectError, primary, secondary, select};
pub use wiktionary_de::WiktionaryDe;
pub use wiktionary_en::WiktionaryEn;
pub use wiktionary_fr::WiktionaryFr;
pub use wiktionary_la::WiktionaryLa;
