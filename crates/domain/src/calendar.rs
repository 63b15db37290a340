// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Week-to-date resolution.
//!
//! Roster lookups tied to a game's week need an "as of" date. The
//! [`WeekCalendar`] seam supplies it; [`LeagueCalendar`] is the plain
//! one-week-per-seven-days implementation a league uses.

use crate::error::DomainError;
use crate::types::{LeagueId, Season, Week};
use crate::validation::{validate_season, validate_week};
use time::Date;

/// Resolves the last calendar day of a match week.
pub trait WeekCalendar {
    /// Returns the date the given week of the season ends on.
    ///
    /// # Errors
    ///
    /// Returns an error if the week or season is outside the calendar's
    /// range, or if the date computation overflows.
    fn end_date_of_week(&self, week: Week, season: Season) -> Result<Date, DomainError>;
}

/// A league's week calendar: week one ends on a fixed date, and every
/// later week ends seven days after the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueCalendar {
    /// The league this calendar belongs to.
    pub league_id: LeagueId,
    /// The season the calendar covers.
    pub season: Season,
    /// The last day of week one.
    pub week_one_end: Date,
}

impl LeagueCalendar {
    /// Creates a new `LeagueCalendar`.
    #[must_use]
    pub const fn new(league_id: LeagueId, season: Season, week_one_end: Date) -> Self {
        Self {
            league_id,
            season,
            week_one_end,
        }
    }
}

impl WeekCalendar for LeagueCalendar {
    fn end_date_of_week(&self, week: Week, season: Season) -> Result<Date, DomainError> {
        validate_week(week)?;
        validate_season(season)?;
        if season != self.season {
            return Err(DomainError::UnknownSeason { season });
        }

        let offset_weeks: i64 = i64::from(week.value()) - 1;
        self.week_one_end
            .checked_add(time::Duration::weeks(offset_weeks))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("resolving the end date of week {week} of season {season}"),
            })
    }
}
