//! Collection of named test cases


use crate::report::Outcome;


/// A test case that can be run against a test stand of type `S`
///
/// `run` returns `Ok` with the outcome, if the test ran to completion, or an
/// error, if it was aborted.
pub struct TestCase<S, E> {
    pub name: &'static str,
    pub run:  fn(&mut S) -> Result<Outcome, E>,
}

impl<S, E> Clone for TestCase<S, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            run:  self.run,
        }
    }
}


/// All test cases that a test suite knows about, in registration order
pub struct Registry<S, E> {
    cases: Vec<TestCase<S, E>>,
}

impl<S, E> Registry<S, E> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            cases: Vec::new(),
        }
    }

    /// Add a test case
    ///
    /// Fails, if a test case with the same name has already been registered.
    pub fn register(&mut self, case: TestCase<S, E>)
        -> Result<(), DuplicateTestError>
    {
        if self.find(case.name).is_some() {
            return Err(DuplicateTestError(case.name));
        }

        self.cases.push(case);
        Ok(())
    }

    /// Returns the test case with the given name
    pub fn find(&self, name: &str) -> Option<&TestCase<S, E>> {
        self.cases.iter().find(|case| case.name == name)
    }

    /// Returns the names of all test cases
    pub fn names(&self) -> impl Iterator<Item=&'static str> + '_ {
        self.cases.iter().map(|case| case.name)
    }

    /// Iterate over all test cases
    pub fn iter(&self) -> impl Iterator<Item=&TestCase<S, E>> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<S, E> Default for Registry<S, E> {
    fn default() -> Self {
        Self::new()
    }
}


/// A test case of that name is already registered
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DuplicateTestError(pub &'static str);
