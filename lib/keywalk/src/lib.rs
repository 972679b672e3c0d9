mod assoc_map;
mod record;
mod reflect;
mod sequence;

pub use assoc_map::{AssociativeMap, Entries, Keys, Values};
pub use record::Record;
pub use reflect::Reflect;
pub use sequence::Sequence;
