// Provides a Writer to allow for redirection of stdout
// to the one configured for Python

use pyo3::ffi::{PyObject_CallMethod, PySys_GetObject, PySys_WriteStdout, Py_XDECREF};
use std::ffi::CString;
use std::os::raw::c_char;

macro_rules! make_python_stdio {
    ($name:ident, $pyfunc:ident, $modname:literal) => {
        pub(crate) struct $name {}
        impl std::io::Write for $name {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                let cstr = CString::new(buf)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
                // pass the text as an argument so that '%' is not
                // interpreted as a format directive
                unsafe {
                    $pyfunc(b"%s\0".as_ptr() as *const c_char, cstr.as_ptr());
                }
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                // call the python sys.stdout.flush()
                unsafe {
                    let stream_obj = PySys_GetObject($modname.as_ptr() as *const c_char);
                    if !stream_obj.is_null() {
                        let ret = PyObject_CallMethod(
                            stream_obj,
                            b"flush\0".as_ptr() as *const c_char,
                            std::ptr::null(),
                        );
                        Py_XDECREF(ret);
                    }
                }
                Ok(())
            }
        }
    };
}
make_python_stdio!(PythonStdout, PySys_WriteStdout, b"stdout\0");

pub(crate) type Stdout = PythonStdout;

pub(crate) fn stdout() -> Stdout {
    PythonStdout {}
}
