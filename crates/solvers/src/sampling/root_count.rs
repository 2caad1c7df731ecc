use falsi_core::{Function, Interval, Observer};

use super::{Action, Config, Error, Event, Grid, Sign, evaluate};

/// Outcome of a root-count scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootCountReport {
    /// Roots detected at scan resolution.
    pub roots: usize,
    /// Number of grid points visited.
    pub points_scanned: usize,
    /// Whether `f(lower)` is exactly zero, which counts as a root.
    pub zero_at_lower: bool,
}

/// Counts sign flips of `f` along the grid.
///
/// The running sign starts at the sign of `f(lower)` and flips each time a
/// grid value has the other sign, counting one root per flip. Roots closer
/// together than one step are missed, and noise around zero can add flips.
///
/// An exact zero at `lower` is counted as a root. The running sign is then
/// taken from the first non-zero value after it, so the zero does not also
/// register as a flip.
pub(super) fn scan<F, Obs>(
    f: &F,
    interval: &Interval,
    config: &Config,
    observer: &mut Obs,
) -> Result<RootCountReport, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let lower_value = evaluate(f, interval.lower())?;

    #[allow(clippy::float_cmp)]
    let zero_at_lower = lower_value == 0.0;

    let mut roots = usize::from(zero_at_lower);
    let mut running = (!zero_at_lower).then(|| Sign::of(lower_value));
    let mut points_scanned = 0;

    for x in Grid::new(interval, config.step_size()) {
        points_scanned += 1;

        let value = evaluate(f, x)?;
        let sign = Sign::of(value);

        match running {
            #[allow(clippy::float_cmp)]
            None if value != 0.0 => running = Some(sign),
            Some(current) if current != sign => {
                roots += 1;
                running = Some(current.flipped());
            }
            _ => {}
        }

        let event = Event::RootScan {
            x,
            value,
            sign,
            roots,
        };
        if let Some(Action::Abort) = observer.observe(&event) {
            return Err(Error::Aborted { x });
        }
    }

    Ok(RootCountReport {
        roots,
        points_scanned,
        zero_at_lower,
    })
}
