//! [`Resolver`] of a doctor's [`Day`]s.

use std::{
    collections::{hash_map::Entry, HashMap},
    fmt,
    hash::Hash,
};

use common::{Date, Month, Weekday};
use tracing as log;

use crate::domain::{
    branch, doctor, schedule::OverrideKind, Assignment, Branch, DefaultWeekly,
    Override,
};

use super::{Day, Schedule, Snapshot, Source, Status, Summary, Working};

/// Resolver of a single doctor's [`Day`]s out of a [`Snapshot`].
///
/// A date-specific [`Override`] takes precedence over the [`DefaultWeekly`]
/// entry of the date's weekday, and a date matching neither is off. Duplicated
/// entries never fail the resolution: the first one wins and the rest are
/// reported as a data-quality warning.
#[derive(Debug)]
pub struct Resolver<'s> {
    /// [`Override`]s of the doctor by their [`Date`].
    overrides: HashMap<Date, &'s Override>,

    /// [`DefaultWeekly`] entries of the doctor by their [`Weekday`].
    defaults: HashMap<Weekday, &'s DefaultWeekly>,

    /// [`Assignment`]s of the doctor by their [`Date`].
    assignments: HashMap<Date, &'s Assignment>,

    /// Known [`Branch`]es by their IDs.
    branches: HashMap<branch::Id, &'s Branch>,
}

impl<'s> Resolver<'s> {
    /// Creates a new [`Resolver`] of the [`Day`]s of the doctor with the
    /// provided ID.
    ///
    /// Entries of other doctors in the [`Snapshot`] are ignored.
    #[must_use]
    pub fn new(doctor_id: doctor::Id, snapshot: &'s Snapshot) -> Self {
        let Snapshot {
            defaults,
            overrides,
            assignments,
            branches,
        } = snapshot;

        Self {
            overrides: index(
                overrides.iter().filter(|o| o.doctor_id == doctor_id),
                |o| o.date,
                "`Override`",
            ),
            defaults: index(
                defaults.iter().filter(|d| d.doctor_id == doctor_id),
                |d| d.weekday,
                "`DefaultWeekly` entry",
            ),
            assignments: index(
                assignments.iter().filter(|a| a.doctor_id == doctor_id),
                |a| a.date,
                "`Assignment`",
            ),
            branches: index(branches, |b| b.id, "`Branch`"),
        }
    }

    /// Resolves the [`Day`] of the provided [`Date`].
    #[must_use]
    pub fn resolve(&self, date: Date) -> Day {
        if let Some(o) = self.overrides.get(&date) {
            return match o.kind {
                OverrideKind::Off => Day::off(date, Source::Override),
                OverrideKind::Working(branch_id) => {
                    self.working(date, Some(branch_id), Source::Override)
                }
            };
        }

        if let Some(d) = self.defaults.get(&date.weekday()) {
            return self.working(date, d.branch_id, Source::Default);
        }

        Day::off(date, Source::None)
    }

    /// Resolves all the [`Day`]s of the provided [`Month`] into a
    /// [`Schedule`].
    #[must_use]
    pub fn month(&self, month: Month) -> Schedule {
        let days = month.days().map(|d| self.resolve(d)).collect::<Vec<_>>();
        let summary = Summary::of(&days);
        Schedule {
            month,
            days,
            summary,
        }
    }

    /// Builds a working [`Day`] at the [`Branch`] with the provided ID,
    /// enriched with the expected revenue of its [`Assignment`].
    fn working(
        &self,
        date: Date,
        branch_id: Option<branch::Id>,
        source: Source,
    ) -> Day {
        let branch = branch_id.and_then(|id| {
            let branch = self.branches.get(&id).map(|b| (*b).clone());
            if branch.is_none() {
                log::debug!("unknown `Branch({id})` is scheduled on {date}");
            }
            branch
        });

        Day {
            date,
            source,
            status: Status::Working(Working {
                branch_id,
                branch,
                expected_revenue: self
                    .assignments
                    .get(&date)
                    .and_then(|a| a.expected_revenue),
            }),
        }
    }
}

/// Indexes the provided `entries` by the `key`, keeping the first entry of
/// every duplicated key.
fn index<'s, K, V>(
    entries: impl IntoIterator<Item = &'s V>,
    key: impl Fn(&V) -> K,
    what: &str,
) -> HashMap<K, &'s V>
where
    K: Eq + Hash + fmt::Display,
    V: 's,
{
    let mut map = HashMap::new();
    for entry in entries {
        match map.entry(key(entry)) {
            Entry::Occupied(e) => {
                log::warn!(
                    "duplicated {what} for `{}` is ignored in favor of the \
                     first one",
                    e.key(),
                );
            }
            Entry::Vacant(e) => {
                _ = e.insert(entry);
            }
        }
    }
    map
}

#[cfg(test)]
mod spec {
    use common::{Amount, Date, Month, Weekday};
    use uuid::Uuid;

    use crate::{
        domain::{
            branch, doctor, schedule::OverrideKind, Assignment, Branch,
            DefaultWeekly, Override,
        },
        read::schedule::{Snapshot, Source},
    };

    use super::Resolver;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn june() -> Month {
        Month::new(2024, 6).unwrap()
    }

    fn doctor() -> doctor::Id {
        doctor::Id::from(Uuid::from_u128(1))
    }

    fn branch(n: u128, name: &str) -> Branch {
        Branch {
            id: branch::Id::from(Uuid::from_u128(100 + n)),
            name: branch::Name::new(name).unwrap(),
        }
    }

    fn default(weekday: Weekday, branch: &Branch) -> DefaultWeekly {
        DefaultWeekly {
            doctor_id: doctor(),
            weekday,
            branch_id: Some(branch.id),
        }
    }

    fn off(on: &str) -> Override {
        Override {
            doctor_id: doctor(),
            date: date(on),
            kind: OverrideKind::Off,
        }
    }

    fn working(on: &str, branch: &Branch) -> Override {
        Override {
            doctor_id: doctor(),
            date: date(on),
            kind: OverrideKind::Working(branch.id),
        }
    }

    fn assignment(on: &str, branch: &Branch, revenue: &str) -> Assignment {
        Assignment {
            doctor_id: doctor(),
            date: date(on),
            branch_id: branch.id,
            expected_revenue: Some(revenue.parse::<Amount>().unwrap()),
        }
    }

    #[test]
    fn no_rule_means_off() {
        let a = branch(1, "A");
        let snapshot = Snapshot {
            defaults: vec![default(Weekday::Monday, &a)],
            branches: vec![a],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(doctor(), &snapshot);

        // 2024-06-11 is a Tuesday.
        let day = resolver.resolve(date("2024-06-11"));
        assert!(day.is_off());
        assert_eq!(day.source, Source::None);
        assert_eq!(day.branch(), None);
        assert_eq!(day.expected_revenue(), None);
    }

    #[test]
    fn off_override_beats_default() {
        let a = branch(1, "A");
        let snapshot = Snapshot {
            defaults: vec![default(Weekday::Monday, &a)],
            overrides: vec![off("2024-06-10")],
            assignments: vec![assignment("2024-06-10", &a, "5000")],
            branches: vec![a],
        };
        let day = Resolver::new(doctor(), &snapshot).resolve(date("2024-06-10"));

        assert!(day.is_off());
        assert_eq!(day.source, Source::Override);
        assert_eq!(day.branch_id(), None);
        assert_eq!(day.expected_revenue(), None);
    }

    #[test]
    fn working_override_beats_default() {
        let (a, b) = (branch(1, "A"), branch(2, "B"));
        let snapshot = Snapshot {
            defaults: vec![default(Weekday::Monday, &a)],
            overrides: vec![working("2024-06-10", &b)],
            branches: vec![a, b.clone()],
            ..Snapshot::default()
        };
        let day = Resolver::new(doctor(), &snapshot).resolve(date("2024-06-10"));

        assert!(!day.is_off());
        assert_eq!(day.source, Source::Override);
        assert_eq!(day.branch(), Some(&b));
    }

    #[test]
    fn working_override_applies_without_default() {
        let b = branch(2, "B");
        let snapshot = Snapshot {
            overrides: vec![working("2024-06-11", &b)],
            assignments: vec![assignment("2024-06-11", &b, "1200.50")],
            branches: vec![b.clone()],
            ..Snapshot::default()
        };
        let day = Resolver::new(doctor(), &snapshot).resolve(date("2024-06-11"));

        assert_eq!(day.source, Source::Override);
        assert_eq!(day.branch(), Some(&b));
        assert_eq!(day.expected_revenue(), Some("1200.50".parse().unwrap()));
    }

    #[test]
    fn default_applies_to_its_weekday() {
        let a = branch(1, "A");
        let snapshot = Snapshot {
            defaults: vec![default(Weekday::Friday, &a)],
            branches: vec![a.clone()],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(doctor(), &snapshot);

        for day in june().days().map(|d| resolver.resolve(d)) {
            if day.date.weekday() == Weekday::Friday {
                assert_eq!(day.source, Source::Default);
                assert_eq!(day.branch(), Some(&a));
            } else {
                assert_eq!(day.source, Source::None);
                assert!(day.is_off());
            }
        }
    }

    #[test]
    fn default_without_branch_is_still_working() {
        let snapshot = Snapshot {
            defaults: vec![DefaultWeekly {
                doctor_id: doctor(),
                weekday: Weekday::Monday,
                branch_id: None,
            }],
            ..Snapshot::default()
        };
        let day = Resolver::new(doctor(), &snapshot).resolve(date("2024-06-10"));

        assert!(!day.is_off());
        assert_eq!(day.source, Source::Default);
        assert_eq!(day.branch_id(), None);
    }

    #[test]
    fn third_monday_off() {
        let a = branch(1, "A");
        let snapshot = Snapshot {
            defaults: vec![default(Weekday::Monday, &a)],
            // Mondays of June 2024: 3rd, 10th, 17th and 24th.
            overrides: vec![off("2024-06-17")],
            branches: vec![a.clone()],
            ..Snapshot::default()
        };
        let schedule = Resolver::new(doctor(), &snapshot).month(june());

        let mondays = schedule
            .days
            .iter()
            .filter(|d| d.date.weekday() == Weekday::Monday)
            .collect::<Vec<_>>();
        assert_eq!(mondays.len(), 4);
        for (n, day) in mondays.into_iter().enumerate() {
            if n == 2 {
                assert!(day.is_off());
                assert_eq!(day.source, Source::Override);
            } else {
                assert!(!day.is_off());
                assert_eq!(day.source, Source::Default);
                assert_eq!(day.branch(), Some(&a));
            }
        }
    }

    #[test]
    fn revenue_enriches_only_its_exact_date() {
        let b = branch(2, "B");
        let snapshot = Snapshot {
            defaults: vec![default(Weekday::Monday, &b)],
            assignments: vec![assignment("2024-06-10", &b, "5000")],
            branches: vec![b.clone()],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(doctor(), &snapshot);

        let day = resolver.resolve(date("2024-06-10"));
        assert_eq!(day.source, Source::Default);
        assert_eq!(day.branch(), Some(&b));
        assert_eq!(day.expected_revenue(), Some("5000".parse().unwrap()));

        let next_monday = resolver.resolve(date("2024-06-17"));
        assert_eq!(next_monday.branch(), Some(&b));
        assert_eq!(next_monday.expected_revenue(), None);
    }

    #[test]
    fn revenue_never_appears_on_off_days() {
        let a = branch(1, "A");
        let snapshot = Snapshot {
            // Assignment on a Tuesday with no rule for it.
            assignments: vec![assignment("2024-06-11", &a, "700")],
            branches: vec![a],
            ..Snapshot::default()
        };
        let day = Resolver::new(doctor(), &snapshot).resolve(date("2024-06-11"));

        assert!(day.is_off());
        assert_eq!(day.source, Source::None);
        assert_eq!(day.expected_revenue(), None);
    }

    #[test]
    fn dangling_branch_keeps_raw_id() {
        let a = branch(1, "A");
        let deleted = branch(9, "Deleted");
        let snapshot = Snapshot {
            defaults: vec![default(Weekday::Monday, &a)],
            overrides: vec![working("2024-06-10", &deleted)],
            branches: vec![a],
            ..Snapshot::default()
        };
        let day = Resolver::new(doctor(), &snapshot).resolve(date("2024-06-10"));

        assert!(!day.is_off());
        assert_eq!(day.source, Source::Override);
        assert_eq!(day.branch(), None);
        assert_eq!(day.branch_id(), Some(deleted.id));
    }

    #[test]
    fn duplicates_resolve_to_first_match() {
        let (a, b) = (branch(1, "A"), branch(2, "B"));
        let snapshot = Snapshot {
            defaults: vec![
                default(Weekday::Monday, &a),
                default(Weekday::Monday, &b),
            ],
            overrides: vec![
                working("2024-06-11", &b),
                off("2024-06-11"),
            ],
            branches: vec![a.clone(), b.clone()],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(doctor(), &snapshot);

        assert_eq!(resolver.resolve(date("2024-06-10")).branch(), Some(&a));

        let day = resolver.resolve(date("2024-06-11"));
        assert!(!day.is_off());
        assert_eq!(day.branch(), Some(&b));
    }

    #[test]
    fn other_doctors_are_ignored() {
        let a = branch(1, "A");
        let other = doctor::Id::from(Uuid::from_u128(2));
        let snapshot = Snapshot {
            defaults: vec![DefaultWeekly {
                doctor_id: other,
                weekday: Weekday::Monday,
                branch_id: Some(a.id),
            }],
            overrides: vec![Override {
                doctor_id: other,
                date: date("2024-06-11"),
                kind: OverrideKind::Working(a.id),
            }],
            branches: vec![a],
            ..Snapshot::default()
        };
        let resolver = Resolver::new(doctor(), &snapshot);

        assert_eq!(resolver.resolve(date("2024-06-10")).source, Source::None);
        assert_eq!(resolver.resolve(date("2024-06-11")).source, Source::None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let (a, b) = (branch(1, "A"), branch(2, "B"));
        let snapshot = Snapshot {
            defaults: vec![
                default(Weekday::Monday, &a),
                default(Weekday::Wednesday, &b),
            ],
            overrides: vec![off("2024-06-05"), working("2024-06-08", &a)],
            assignments: vec![assignment("2024-06-03", &a, "300")],
            branches: vec![a, b],
        };

        let first = Resolver::new(doctor(), &snapshot).month(june());
        let second = Resolver::new(doctor(), &snapshot).month(june());
        assert_eq!(first, second);
        assert_eq!(first.days.len(), 30);
    }
}
