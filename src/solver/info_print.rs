use super::*;
use crate::algebra::*;
use crate::io::PrintTarget;
use std::io::Write;
use std::time::Duration;

macro_rules! expformat {
    ($fmt:expr,$val:expr) => {
        if $val.is_finite() {
            exp_str_reformat(format!($fmt, $val))
        } else {
            format!($fmt, $val)
        }
    };
}

pub(crate) fn print_banner(out: &mut PrintTarget, is_verbose: bool) -> std::io::Result<()> {
    if !is_verbose {
        return Ok(());
    }

    writeln!(out, "-------------------------------------------------------------")?;
    writeln!(
        out,
        "        logbarrier v{}  -  log-barrier interior point        ",
        crate::VERSION
    )?;
    writeln!(out, "-------------------------------------------------------------")?;
    Ok(())
}

impl<T> BarrierInfo<T>
where
    T: FloatT,
{
    pub(crate) fn print_configuration(
        &self,
        out: &mut PrintTarget,
        settings: &BarrierSettings<T>,
        problem: &BarrierProblem<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        writeln!(out, "\nproblem:")?;
        writeln!(out, "  variables     = {}", problem.n)?;
        writeln!(out, "  inequalities  = {}", problem.num_inequalities())?;
        writeln!(out, "  equalities    = {}", problem.num_equalities())?;
        writeln!(out)?;

        let time_lim_str = {
            if settings.time_limit.is_infinite() {
                "Inf".to_string()
            } else {
                format!("{:?}", settings.time_limit)
            }
        };

        writeln!(out, "settings:")?;
        writeln!(
            out,
            "  precision: {} bit, time limit = {}",
            get_precision_string::<T>(),
            time_lim_str
        )?;
        writeln!(
            out,
            "  t_init = {:.1e}, μ = {:.1e}, ϵ = {:.1e}",
            settings.t_init, settings.mu, settings.epsilon
        )?;
        writeln!(
            out,
            "  newton max iter = {}, pivot tol = {:.1e}",
            settings.max_iter, settings.pivot_tol
        )?;
        writeln!(
            out,
            "  line search: α = {:.2}, β = {:.2}, max iter = {}",
            settings.linesearch_alpha, settings.linesearch_beta, settings.linesearch_max_iter
        )?;
        writeln!(out)?;
        Ok(())
    }

    pub(crate) fn print_status_header(
        &self,
        out: &mut PrintTarget,
        settings: &BarrierSettings<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        write!(out, "iter    ")?;
        write!(out, "t         ")?;
        write!(out, "cost         ")?;
        write!(out, "m/t       ")?;
        write!(out, "newton  ")?;
        write!(out, "λ²/2      ")?;
        write!(out, "step      ")?;
        writeln!(out)?;
        writeln!(
            out,
            "---------------------------------------------------------------------"
        )?;
        out.flush()?;
        Ok(())
    }

    pub(crate) fn print_status(
        &self,
        out: &mut PrintTarget,
        settings: &BarrierSettings<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        write!(out, "{:>3}  ", self.outer_iterations)?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.t))?;
        write!(out, "{}  ", expformat!("{:+8.4e}", self.cost))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.gap_bound))?;
        write!(out, "{:>6}  ", self.newton_steps)?;

        write!(out, "{}  ", expformat!("{:6.2e}", self.newton_decrement))?;
        write!(out, "{}  ", expformat!("{:>.2e}", self.step_length))?;

        writeln!(out)?;
        Ok(())
    }

    pub(crate) fn print_footer(
        &self,
        out: &mut PrintTarget,
        settings: &BarrierSettings<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }

        writeln!(
            out,
            "---------------------------------------------------------------------"
        )?;
        writeln!(out, "Terminated with status = {}", self.status)?;

        if self.warnings() > 0 {
            writeln!(out, "warnings:")?;
            writeln!(out, "  newton iteration limit = {}", self.inner_cap_hits)?;
            writeln!(out, "  line search failures   = {}", self.linesearch_failures)?;
            writeln!(out, "  infeasible path points = {}", self.infeasible_path_points)?;
        }

        writeln!(
            out,
            "solve time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        out.flush()?;
        Ok(())
    }
}

fn get_precision_string<T: FloatT>() -> String {
    (::std::mem::size_of::<T>() * 8).to_string()
}

// convert a string in LowerExp display format into one that
// always has a sign and at least two digits in the exponent,
// e.g. "1.00e-1" -> "1.00e-01", "1.00e5" -> "1.00e+05"

fn exp_str_reformat(thestr: String) -> String {
    let Some(eidx) = thestr.find('e') else {
        return thestr;
    };
    let (mantissa, exp) = thestr.split_at(eidx + 1);
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("+", exp),
    };
    let pad = if digits.len() < 2 { "0" } else { "" };
    format!("{mantissa}{sign}{pad}{digits}")
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(exp_str_reformat(format!("{:.2e}", 0.1)), "1.00e-01");
    assert_eq!(exp_str_reformat(format!("{:.2e}", 1e5)), "1.00e+05");
    assert_eq!(exp_str_reformat(format!("{:+8.4e}", -1.5)), "-1.5000e+00");
    assert_eq!(exp_str_reformat(format!("{:.1e}", 1e-12)), "1.0e-12");
    assert_eq!(exp_str_reformat("inf".to_string()), "inf");
}
