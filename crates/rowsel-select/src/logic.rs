//! Logical combinators.
//!
//! Each node exclusively owns its children; dropping a node drops the whole
//! subtree. `And`/`Or` evaluate `first` before `second` and skip `second`
//! when `first` already decides the result. Callers may rely on that: a
//! `second` that would fail is never reached in those cases.

use std::fmt;

use rowsel_core::{ColumnAccessor, Result, RowIndex};

use crate::predicate::Predicate;
use crate::trace;

pub struct And {
    first: Box<dyn Predicate>,
    second: Box<dyn Predicate>,
}

impl And {
    pub fn new(first: impl Predicate + 'static, second: impl Predicate + 'static) -> Self {
        Self {
            first: first.boxed(),
            second: second.boxed(),
        }
    }

    pub fn first(&self) -> &dyn Predicate {
        self.first.as_ref()
    }

    pub fn second(&self) -> &dyn Predicate {
        self.second.as_ref()
    }

    /// Give the children back, first then second.
    pub fn into_parts(self) -> (Box<dyn Predicate>, Box<dyn Predicate>) {
        (self.first, self.second)
    }
}

impl Predicate for And {
    fn matches(&self, table: &dyn ColumnAccessor, row: RowIndex) -> Result<bool> {
        if !self.first.matches(table, row)? {
            trace::short_circuit("and", row, false);
            return Ok(false);
        }
        self.second.matches(table, row)
    }

    fn describe(&self) -> String {
        format!("({} AND {})", self.first.describe(), self.second.describe())
    }
}

pub struct Or {
    first: Box<dyn Predicate>,
    second: Box<dyn Predicate>,
}

impl Or {
    pub fn new(first: impl Predicate + 'static, second: impl Predicate + 'static) -> Self {
        Self {
            first: first.boxed(),
            second: second.boxed(),
        }
    }

    pub fn first(&self) -> &dyn Predicate {
        self.first.as_ref()
    }

    pub fn second(&self) -> &dyn Predicate {
        self.second.as_ref()
    }

    pub fn into_parts(self) -> (Box<dyn Predicate>, Box<dyn Predicate>) {
        (self.first, self.second)
    }
}

impl Predicate for Or {
    fn matches(&self, table: &dyn ColumnAccessor, row: RowIndex) -> Result<bool> {
        if self.first.matches(table, row)? {
            trace::short_circuit("or", row, true);
            return Ok(true);
        }
        self.second.matches(table, row)
    }

    fn describe(&self) -> String {
        format!("({} OR {})", self.first.describe(), self.second.describe())
    }
}

pub struct Not {
    argument: Box<dyn Predicate>,
}

impl Not {
    pub fn new(argument: impl Predicate + 'static) -> Self {
        Self {
            argument: argument.boxed(),
        }
    }

    pub fn argument(&self) -> &dyn Predicate {
        self.argument.as_ref()
    }

    pub fn into_inner(self) -> Box<dyn Predicate> {
        self.argument
    }
}

impl Predicate for Not {
    fn matches(&self, table: &dyn ColumnAccessor, row: RowIndex) -> Result<bool> {
        Ok(!self.argument.matches(table, row)?)
    }

    fn describe(&self) -> String {
        format!("NOT {}", self.argument.describe())
    }
}

impl fmt::Debug for And {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for Not {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
