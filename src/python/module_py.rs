use super::*;
use pyo3::prelude::*;

// Python module and registry, which includes registration of the
// data types defined in the other files in this rust module
#[pymodule]
fn dualqp(py: Python, m: &Bound<PyModule>) -> PyResult<()> {
    //module version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_function(wrap_pyfunction!(solve_py, m)?)?;

    //API data types
    m.add_class::<PySolverStatus>()?;
    m.add_class::<PyQpSolution>()?;
    m.add_class::<PyDefaultSettings>()?;

    //raised on routine failure
    m.add("QpNumericalError", py.get_type::<QpNumericalError>())?;

    Ok(())
}
