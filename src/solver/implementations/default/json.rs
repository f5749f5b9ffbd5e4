use crate::{
    algebra::*,
    solver::{DefaultSettings, DefaultSolver, GoldfarbIdnani},
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

// The problem exactly as the user would supply it, with the two
// constraint blocks kept apart so that a loaded problem goes through
// the same assembly and validation as a freshly constructed one.

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: FloatT + Serialize + DeserializeOwned")]
struct JsonProblemData<T: FloatT> {
    pub D: Matrix<T>,
    pub d: Vec<T>,
    pub A1: Matrix<T>,
    pub b1: Vec<T>,
    pub A2: Matrix<T>,
    pub b2: Vec<T>,
    pub settings: DefaultSettings<T>,
}

impl<T, R> DefaultSolver<T, R>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    /// Write the problem data and settings to a file as JSON
    pub fn save_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let data = &self.data;
        let (q, meq) = (data.q, data.meq);
        let rows = |range: std::ops::Range<usize>| {
            let rows: Vec<&[T]> = range.map(|i| data.A.row_slice(i)).collect();
            Matrix::from_rows(&rows)
        };

        let json_data = JsonProblemData {
            D: data.D.clone(),
            d: data.d.to_vec(),
            A1: rows(0..meq),
            b1: data.b[..meq].to_vec(),
            A2: rows(meq..q),
            b2: data.b[meq..].to_vec(),
            settings: self.settings.clone(),
        };

        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}

impl<T> DefaultSolver<T, GoldfarbIdnani>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    /// Read a problem written by [`save_to_file`](DefaultSolver::save_to_file).
    /// Stored settings are replaced by `settings` when given.
    pub fn load_from_file(
        file: &mut File,
        settings: Option<DefaultSettings<T>>,
    ) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let json_data: JsonProblemData<T> = serde_json::from_str(&buffer)?;

        let JsonProblemData {
            D,
            d,
            A1,
            b1,
            A2,
            b2,
            settings: stored,
        } = json_data;
        let settings = settings.unwrap_or(stored);

        Self::new(&D, &d, &A1, &b1, &A2, &b2, settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    let D = Matrix::from(&[
        [2., 1.], //
        [1., 2.], //
    ]);
    let d = [1., 1.];
    let A1 = Matrix::from(&[[1., 1.]]);
    let b1 = [1.];
    let A2 = Matrix::from(&[[1., 0.]]);
    let b2 = [0.75];

    let settings = crate::solver::DefaultSettingsBuilder::default()
        .check_symmetry(true)
        .build()
        .unwrap();

    let mut solver = DefaultSolver::<f64>::new(&D, &d, &A1, &b1, &A2, &b2, settings).unwrap();
    solver.solve();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    solver.save_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut solver2 = DefaultSolver::<f64>::load_from_file(&mut file, None).unwrap();
    assert_eq!(solver.data, solver2.data);
    assert_eq!(solver.settings, solver2.settings);

    solver2.solve();
    assert_eq!(solver.solution.x, solver2.solution.x);
    assert_eq!(solver.solution.lagr, solver2.solution.lagr);
}
