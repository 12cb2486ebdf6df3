//! Ordered, multi-valued parameter store shared by every message type.
//!
//! Names are case-sensitive and may repeat. Iteration always follows
//! insertion order, and single-value lookups return the first match.

/// One `(name, value)` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

/// Insertion-ordered bag of parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterBag {
    entries: Vec<Parameter>,
}

impl ParameterBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `(name, value)`. Existing entries with the same name are kept.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Parameter {
            name: name.into(),
            value: value.into(),
        });
    }

    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Every value stored under `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// All `(name, value)` pairs in insertion order.
    ///
    /// Borrowing iterator; calling it again starts over.
    pub fn all(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|p| (p.name.as_str(), p.value.as_str()))
    }

    /// Make `name` hold exactly one value.
    ///
    /// The first existing entry keeps its position and takes the new
    /// value; later duplicates are dropped. Appends when absent.
    pub fn replace(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter().position(|p| p.name == name) {
            Some(first) => {
                self.entries[first].value = value;
                let mut index = 0;
                self.entries.retain(|p| {
                    let keep = index <= first || p.name != name;
                    index += 1;
                    keep
                });
            }
            None => self.set(name, value),
        }
    }

    /// Drop every entry named `name`. Returns whether any existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p.name != name);
        self.entries.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.entries.iter()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for ParameterBag {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut bag = ParameterBag::new();
        for (name, value) in iter {
            bag.set(name, value);
        }
        bag
    }
}

impl<'a> IntoIterator for &'a ParameterBag {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ParameterBag {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
