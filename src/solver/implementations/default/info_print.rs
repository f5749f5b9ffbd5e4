use super::*;
use crate::algebra::*;
use crate::io::ConfigurablePrintTarget;
use crate::solver::core::SolverStatus;
use std::io::Write;
use std::time::Duration;

impl<T, R> ConfigurablePrintTarget for DefaultSolver<T, R>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

impl<T, R> DefaultSolver<T, R>
where
    T: FloatT,
{
    pub(crate) fn print_configuration(&mut self) -> std::io::Result<()> {
        if !self.settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;
        let data = &self.data;
        let set = &self.settings;

        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(
            out,
            "           dualqp v{}  -  dense dual active-set QP        ",
            crate::VERSION
        )?;
        writeln!(out, "-------------------------------------------------------------")?;

        writeln!(out, "\nproblem:")?;
        writeln!(out, "  variables     = {}", data.n)?;
        writeln!(out, "  constraints   = {}", data.q)?;
        writeln!(out, "  equalities    = {}", data.meq)?;
        writeln!(out, "  inequalities  = {}", data.q - data.meq)?;

        writeln!(out, "\nsettings:")?;
        writeln!(
            out,
            "  precision: {} bit, factorized D: {}",
            _get_precision_string::<T>(),
            _bool_on_off(set.factorized)
        )?;
        writeln!(
            out,
            "  symmetry check: {}, tol = {:.1e}",
            _bool_on_off(set.check_symmetry),
            set.symmetry_tolerance
        )?;
        writeln!(out)?;
        out.flush()?;

        std::io::Result::Ok(())
    }

    pub(crate) fn print_footer(&mut self) -> std::io::Result<()> {
        if !self.settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;
        let sol = &self.solution;

        writeln!(
            out,
            "constraints added = {}, dropped = {}, active = {}",
            sol.iterations[0], sol.iterations[1], sol.nact
        )?;
        if sol.status == SolverStatus::Solved {
            writeln!(out, "objective = {:+.8e}", sol.obj_val)?;
        }
        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(
            out,
            "Terminated with status = {} (code {})",
            sol.status, sol.error_code
        )?;
        writeln!(
            out,
            "solve time = {:?}",
            Duration::from_secs_f64(sol.solve_time)
        )?;
        out.flush()?;

        std::io::Result::Ok(())
    }
}

fn _bool_on_off(v: bool) -> &'static str {
    match v {
        true => "on",
        false => "off",
    }
}

fn _get_precision_string<T: FloatT>() -> String {
    (::std::mem::size_of::<T>() * 8).to_string()
}
