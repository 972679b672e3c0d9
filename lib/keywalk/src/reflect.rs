/// Reflective enumeration over a container's own enumerable string keys.
///
/// Only keys materialized as own properties of the container are visible
/// through this trait. Entries a collection keeps as internal storage
/// (see [`AssociativeMap`](crate::AssociativeMap)) are not own properties
/// and never show up here.
pub trait Reflect {
    /// Returns a fresh iterator over the container's own enumerable keys,
    /// in enumeration order. Each call restarts from the first key.
    fn own_keys(&self) -> Box<dyn Iterator<Item = String> + '_>;
}
