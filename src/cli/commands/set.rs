use super::{parse_period, resolve_worker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::{DayField, set_day_field};
use crate::errors::{AppError, AppResult};
use crate::store::kv::KvStore;
use crate::store::records;
use crate::ui::messages::success;
use crate::utils::date::weekday_name;
use crate::utils::time::parse_optional_time;
use chrono::NaiveDate;

/// Record or update one day of a monthly timesheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        period,
        day,
        worker,
        entry,
        exit,
        notes,
        clear_in,
        clear_out,
    } = cmd
    {
        //
        // 1. Resolve the target date
        //
        let (year, month) = parse_period(period)?;
        let date = NaiveDate::from_ymd_opt(year, month, *day)
            .ok_or_else(|| AppError::InvalidDate(format!("{period}-{day:02}")))?;

        //
        // 2. Resolve the worker and parse the time flags
        //
        let worker = resolve_worker(worker, cfg)?;
        let entry_time = parse_optional_time(entry.as_ref())?;
        let exit_time = parse_optional_time(exit.as_ref())?;

        //
        // 3. Load the month's record (or start a fresh one) and mutate it
        //
        let store = KvStore::open(&cfg.database)?;
        let mut record = records::load_or_new(&store, &worker, month, year)?;

        if *clear_in {
            set_day_field(&mut record, date, DayField::Entry(None));
        }
        if let Some(t) = entry_time {
            set_day_field(&mut record, date, DayField::Entry(Some(t)));
        }
        if *clear_out {
            set_day_field(&mut record, date, DayField::Exit(None));
        }
        if let Some(t) = exit_time {
            set_day_field(&mut record, date, DayField::Exit(Some(t)));
        }
        if let Some(n) = notes {
            set_day_field(&mut record, date, DayField::Notes(n.clone()));
        }

        //
        // 4. Persist
        //
        let key = records::save(&store, &record)?;

        let day_entry = record.days.get(&date).cloned().unwrap_or_default();
        match day_entry.worked {
            Some(w) => success(format!(
                "{} {}: worked hours {} (saved as '{}')",
                weekday_name(date),
                date,
                w,
                key
            )),
            None => success(format!(
                "{} {}: updated (saved as '{}')",
                weekday_name(date),
                date,
                key
            )),
        }
    }

    Ok(())
}
