// Python lists and tuples as host arrays.  Entries are numeric when
// float() accepts them, except for bool.  Strings and None are not
// numeric.

use crate::host::HostValue;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyList, PyTuple};
use std::borrow::Cow;

impl<'py> HostValue for Bound<'py, PyAny> {
    fn as_array(&self) -> Option<Cow<'_, [Self]>> {
        if let Ok(list) = self.downcast::<PyList>() {
            Some(Cow::Owned(list.iter().collect()))
        } else if let Ok(tuple) = self.downcast::<PyTuple>() {
            Some(Cow::Owned(tuple.iter().collect()))
        } else {
            None
        }
    }

    fn is_bool(&self) -> bool {
        self.is_instance_of::<PyBool>()
    }

    // anything implementing __float__, e.g. numpy scalars,
    // Fraction or Decimal
    fn to_f64(&self) -> Option<f64> {
        self.extract::<f64>().ok()
    }
}
