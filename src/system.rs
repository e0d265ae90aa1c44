use chrono::{Local, NaiveDate};

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub struct DefaultClock;
impl Clock for DefaultClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date, used by `--as-of` and tests.
pub struct FixedClock(pub NaiveDate);
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
