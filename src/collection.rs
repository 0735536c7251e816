//! Editable ordered collections backing the array-valued form fields.
//!
//! One generic list replaces the per-field add/change/remove handlers: every row type
//! says what a blank row looks like and when a row is complete enough to submit.

use crate::domain::{Solution, TestCase};
use crate::util::is_blank;

/// A row type that can live in an `EditableList`.
pub trait Entry: Clone {
  /// New row appended by the form: every string member empty.
  fn blank() -> Self;

  /// Whether the row survives submission filtering.
  fn is_complete(&self) -> bool;
}

impl Entry for String {
  fn blank() -> Self {
    String::new()
  }

  fn is_complete(&self) -> bool {
    !is_blank(self)
  }
}

/// Complete only when both input and output are filled in.
impl Entry for TestCase {
  fn blank() -> Self {
    TestCase { input: String::new(), output: String::new(), explanation: Some(String::new()) }
  }

  fn is_complete(&self) -> bool {
    !is_blank(&self.input) && !is_blank(&self.output)
  }
}

/// Complete only when it has a name and code.
impl Entry for Solution {
  fn blank() -> Self {
    Solution::default()
  }

  fn is_complete(&self) -> bool {
    !is_blank(&self.name) && !is_blank(&self.code)
  }
}

/// Ordered rows with a minimum-length floor. Removal never takes the list below
/// `min_len`; out-of-range indices are rejected without touching the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditableList<T> {
  items: Vec<T>,
  min_len: usize,
}

impl<T: Entry> EditableList<T> {
  /// `min_len` blank rows.
  pub fn new(min_len: usize) -> Self {
    Self { items: (0..min_len).map(|_| T::blank()).collect(), min_len }
  }

  /// Existing rows, padded with blanks up to `min_len`.
  pub fn from_items(mut items: Vec<T>, min_len: usize) -> Self {
    while items.len() < min_len {
      items.push(T::blank());
    }
    Self { items, min_len }
  }

  pub fn append(&mut self) {
    self.items.push(T::blank());
  }

  /// Replace the row at `index`. Returns false when out of range.
  pub fn set(&mut self, index: usize, value: T) -> bool {
    self.update_at(index, |row| *row = value)
  }

  /// Edit the row at `index` in place. Returns false when out of range.
  pub fn update_at(&mut self, index: usize, edit: impl FnOnce(&mut T)) -> bool {
    match self.items.get_mut(index) {
      Some(row) => {
        edit(row);
        true
      }
      None => false,
    }
  }

  /// Remove the row at `index`, shifting later rows left. Returns false (and does
  /// nothing) when out of range or when the list is already at its floor.
  pub fn remove_at(&mut self, index: usize) -> bool {
    if index >= self.items.len() || self.items.len() <= self.min_len {
      return false;
    }
    self.items.remove(index);
    true
  }

  /// Rows that pass the submission predicate, in order.
  pub fn completed(&self) -> Vec<T> {
    self.items.iter().filter(|row| row.is_complete()).cloned().collect()
  }

  pub fn get(&self, index: usize) -> Option<&T> {
    self.items.get(index)
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn min_len(&self) -> usize {
    self.min_len
  }

  pub fn as_slice(&self) -> &[T] {
    &self.items
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.items.iter()
  }
}
