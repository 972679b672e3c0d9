use std::io::Write;

use anyhow::Result;
use derive_more::Display;
use itertools::Itertools;
use keywalk::{AssociativeMap, Record, Reflect, Sequence};

/// Traversal mechanism used for a single walk.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Mechanism {
    #[display(fmt = "own-key enumeration")]
    OwnKeys,
    #[display(fmt = "iterator traversal")]
    IteratorKeys,
}

/// Receives each visited key in traversal order.
pub trait KeySink {
    fn visit(&mut self, key: &str) -> Result<()>;
}

/// Writes visited keys to any `io::Write`, one per line.
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> KeySink for WriteSink<W> {
    fn visit(&mut self, key: &str) -> Result<()> {
        writeln!(self.writer, "{}", key)?;
        Ok(())
    }
}

/// The language-shortcut record from the reference scenario.
pub fn shortcut_record() -> Record {
    let mut record = Record::new();
    record.insert("js", "javascript");
    record.insert("cpp", "C++");
    record.insert("rb", "ruby");
    record.insert("swift", "swift by apple");
    record
}

/// The language-name sequence from the reference scenario.
pub fn language_sequence() -> Sequence {
    ["js", "rb", "py", "java", "cpp"].into_iter().collect()
}

/// The country map from the reference scenario. "IN" is set twice; the
/// second insertion collapses into the original slot.
pub fn country_map() -> AssociativeMap {
    let mut map = AssociativeMap::new();
    map.insert("IN", "India");
    map.insert("USA", "United States of America");
    map.insert("Fr", "France");
    map.insert("IN", "India");
    map
}

/// Walks `container`'s own enumerable keys into `sink` and returns the
/// number of keys visited.
pub fn walk_own_keys(container: &dyn Reflect, sink: &mut dyn KeySink) -> Result<usize> {
    let mut visited = 0;
    for key in container.own_keys() {
        sink.visit(&key)?;
        visited += 1;
    }
    Ok(visited)
}

/// Walks the map's self-declared key iterator into `sink` and returns
/// the number of keys visited.
pub fn walk_map_keys(map: &AssociativeMap, sink: &mut dyn KeySink) -> Result<usize> {
    let mut visited = 0;
    for key in map.keys() {
        sink.visit(key)?;
        visited += 1;
    }
    Ok(visited)
}

/// Runs the full demonstration: own-key enumeration over the record, the
/// sequence, and the map, then iterator traversal over the map.
pub fn run_demo(sink: &mut dyn KeySink) -> Result<()> {
    let record = shortcut_record();
    let visited = walk_own_keys(&record, sink)?;
    log::debug!(
        "{} over record visited {} keys: {}",
        Mechanism::OwnKeys,
        visited,
        record.own_keys().join(", ")
    );

    let sequence = language_sequence();
    let visited = walk_own_keys(&sequence, sink)?;
    log::debug!(
        "{} over sequence visited {} keys: {}",
        Mechanism::OwnKeys,
        visited,
        sequence.own_keys().join(", ")
    );

    // The map stores its entries internally, so this walk visits nothing.
    let map = country_map();
    let visited = walk_own_keys(&map, sink)?;
    log::debug!(
        "{} over map visited {} keys",
        Mechanism::OwnKeys,
        visited
    );

    let visited = walk_map_keys(&map, sink)?;
    log::debug!(
        "{} over map visited {} keys: {}",
        Mechanism::IteratorKeys,
        visited,
        map.keys().join(", ")
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CollectSink {
        keys: Vec<String>,
    }

    impl KeySink for CollectSink {
        fn visit(&mut self, key: &str) -> Result<()> {
            self.keys.push(key.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_walk_record_own_keys() -> anyhow::Result<()> {
        let mut sink = CollectSink::default();
        let visited = walk_own_keys(&shortcut_record(), &mut sink)?;
        assert_eq!(visited, 4);
        assert_eq!(sink.keys, ["js", "cpp", "rb", "swift"]);
        Ok(())
    }

    #[test]
    fn test_walk_sequence_own_keys() -> anyhow::Result<()> {
        let mut sink = CollectSink::default();
        let visited = walk_own_keys(&language_sequence(), &mut sink)?;
        assert_eq!(visited, 5);
        assert_eq!(sink.keys, ["0", "1", "2", "3", "4"]);
        Ok(())
    }

    #[test]
    fn test_walk_map_own_keys_visits_nothing() -> anyhow::Result<()> {
        let mut sink = CollectSink::default();
        let visited = walk_own_keys(&country_map(), &mut sink)?;
        assert_eq!(visited, 0);
        assert!(sink.keys.is_empty());
        Ok(())
    }

    #[test]
    fn test_walk_map_iterator_keys() -> anyhow::Result<()> {
        let mut sink = CollectSink::default();
        let visited = walk_map_keys(&country_map(), &mut sink)?;
        assert_eq!(visited, 3);
        assert_eq!(sink.keys, ["IN", "USA", "Fr"]);
        Ok(())
    }

    #[test]
    fn test_run_demo_full_order() -> anyhow::Result<()> {
        let mut sink = CollectSink::default();
        run_demo(&mut sink)?;
        assert_eq!(
            sink.keys,
            ["js", "cpp", "rb", "swift", "0", "1", "2", "3", "4", "IN", "USA", "Fr"]
        );
        Ok(())
    }

    #[test]
    fn test_write_sink_one_key_per_line() -> anyhow::Result<()> {
        let mut sink = WriteSink::new(Vec::new());
        run_demo(&mut sink)?;
        let output = String::from_utf8(sink.writer)?;
        assert_eq!(
            output,
            "js\ncpp\nrb\nswift\n0\n1\n2\n3\n4\nIN\nUSA\nFr\n"
        );
        Ok(())
    }
}
