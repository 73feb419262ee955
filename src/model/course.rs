use crate::error::AppError;

pub const HOLES: usize = 18;
pub const NINE: usize = 9;

/// Par for every hole of an 18-hole course. The totals are always derived
/// from the par list so they cannot drift from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pars: [i32; HOLES],
}

const DEFAULT_PARS: [i32; HOLES] = [4, 4, 5, 4, 3, 4, 3, 5, 4, 4, 4, 5, 4, 4, 3, 4, 3, 5];

impl Course {
    /// # Errors
    ///
    /// Will return `Err` if the list does not hold exactly 18 pars, or a par is below 1
    pub fn new(pars: &[i32]) -> Result<Self, AppError> {
        let pars = <[i32; HOLES]>::try_from(pars).map_err(|_| {
            AppError::Config(format!(
                "a course needs exactly {HOLES} pars, got {}",
                pars.len()
            ))
        })?;
        if let Some(idx) = pars.iter().position(|&par| par < 1) {
            return Err(AppError::Config(format!(
                "hole {} has par {}, par must be at least 1",
                idx + 1,
                pars[idx]
            )));
        }
        Ok(Self { pars })
    }

    #[must_use]
    pub fn pars(&self) -> &[i32; HOLES] {
        &self.pars
    }

    /// Par for a zero-based hole index.
    #[must_use]
    pub fn par(&self, hole_index: usize) -> Option<i32> {
        self.pars.get(hole_index).copied()
    }

    #[must_use]
    pub fn front_nine(&self) -> &[i32] {
        &self.pars[..NINE]
    }

    #[must_use]
    pub fn back_nine(&self) -> &[i32] {
        &self.pars[NINE..]
    }

    #[must_use]
    pub fn total_par(&self) -> i32 {
        saturating_sum(&self.pars)
    }

    #[must_use]
    pub fn front_nine_par(&self) -> i32 {
        saturating_sum(self.front_nine())
    }

    #[must_use]
    pub fn back_nine_par(&self) -> i32 {
        saturating_sum(self.back_nine())
    }
}

fn saturating_sum(pars: &[i32]) -> i32 {
    pars.iter().fold(0, |acc, &par| acc.saturating_add(par))
}

impl Default for Course {
    fn default() -> Self {
        Self {
            pars: DEFAULT_PARS,
        }
    }
}
