//! Append-only log of calculations.

use serde::Serialize;

use super::calculation::Calculation;

/// Ordered log of every calculation run through a
/// [`Calculator`](super::Calculator).
///
/// Entries are only ever appended. The whole log can be reset with
/// [`History::clear`], but individual entries cannot be edited or removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<Calculation>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a calculation to the end of the log.
    pub fn push(&mut self, calculation: Calculation) {
        self.entries.push(calculation);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<&Calculation> {
        self.entries.get(index)
    }

    /// The most recently appended calculation.
    pub fn last(&self) -> Option<&Calculation> {
        self.entries.last()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Calculation> {
        self.entries.iter()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Calculation;
    type IntoIter = std::slice::Iter<'a, Calculation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;
    use rust_decimal::Decimal;

    fn calc(a: i64, b: i64, op: Operation) -> Calculation {
        Calculation::create(Decimal::from(a), Decimal::from(b), op)
    }

    #[test]
    fn test_insertion_order() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert!(history.last().is_none());

        history.push(calc(1, 2, Operation::Add));
        history.push(calc(3, 4, Operation::Multiply));
        history.push(calc(5, 0, Operation::Divide));

        assert_eq!(history.len(), 3);
        assert_eq!(history.get(0), Some(&calc(1, 2, Operation::Add)));
        assert_eq!(history.last(), Some(&calc(5, 0, Operation::Divide)));

        let ops: Vec<Operation> = history.iter().map(|c| c.operation()).collect();
        assert_eq!(
            ops,
            vec![Operation::Add, Operation::Multiply, Operation::Divide]
        );
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push(calc(1, 1, Operation::Subtract));
        history.clear();
        assert!(history.is_empty());
        assert!(history.get(0).is_none());
    }

    #[test]
    fn test_serialize_as_list() {
        let mut history = History::new();
        history.push(calc(2, 2, Operation::Add));
        let json = serde_json::to_value(&history).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["operation"], "add");
    }
}
