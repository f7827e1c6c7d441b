use crate::Tick;

/// Records of one category heard during the most recent tick.
///
/// Records heard during the same tick accumulate. The first record of a new tick discards all
/// older ones.
#[derive(Clone, Debug)]
pub struct Channel<R> {
    records: Vec<R>,
    tick: Option<Tick>,
}

impl<R> Channel<R> {
    /// Create an empty [Channel].
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            tick: None,
        }
    }

    /// Appends `record`, heard at `tick`.
    pub fn push(&mut self, tick: Tick, record: R) {
        if self.tick != Some(tick) {
            self.records.clear();
            self.tick = Some(tick);
        }
        self.records.push(record);
    }

    /// Returns the records of the most recent tick.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns the tick of the most recent record, if any.
    pub fn tick(&self) -> Option<Tick> {
        self.tick
    }
}

impl<R> Default for Channel<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_tick_accumulates() {
        let mut channel = Channel::new();
        assert_eq!(channel.tick(), None);
        assert!(channel.records().is_empty());

        channel.push(5, 'a');
        channel.push(5, 'b');
        assert_eq!(channel.records(), &['a', 'b']);
        assert_eq!(channel.tick(), Some(5));
    }

    #[test]
    fn test_new_tick_replaces() {
        let mut channel = Channel::new();
        channel.push(5, 'a');
        channel.push(5, 'b');
        channel.push(6, 'c');
        assert_eq!(channel.records(), &['c']);
        assert_eq!(channel.tick(), Some(6));

        // Older ticks also replace
        channel.push(2, 'd');
        assert_eq!(channel.records(), &['d']);
        assert_eq!(channel.tick(), Some(2));
    }
}
