//! [`DoctorSchedule`] definition.

use common::{
    operations::{By, Select},
    Month,
};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Doctor;
use crate::{
    domain::{
        doctor, schedule::Period, Assignment, Branch, DefaultWeekly, Override,
    },
    infra::Backend,
    read::schedule::{Resolver, Schedule, Snapshot},
    Query, Service,
};

/// [`Query`] resolving a [`Doctor`]'s [`Schedule`] for a [`Month`].
///
/// All the entries the [`Schedule`] depends on are fetched concurrently, and
/// a failure of any fetch fails the whole [`Query`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DoctorSchedule {
    /// ID of the [`Doctor`] to resolve the [`Schedule`] of.
    pub doctor_id: doctor::Id,

    /// [`Month`] to resolve the [`Schedule`] for.
    pub month: Month,
}

impl<B, E> Query<DoctorSchedule> for Service<B>
where
    B: Backend<
            Select<By<Vec<DefaultWeekly>, doctor::Id>>,
            Ok = Vec<DefaultWeekly>,
            Err = Traced<E>,
        > + Backend<
            Select<By<Vec<Override>, Period>>,
            Ok = Vec<Override>,
            Err = Traced<E>,
        > + Backend<
            Select<By<Vec<Assignment>, Period>>,
            Ok = Vec<Assignment>,
            Err = Traced<E>,
        > + Backend<
            Select<By<Vec<Branch>, ()>>,
            Ok = Vec<Branch>,
            Err = Traced<E>,
        >,
{
    type Ok = Schedule;
    type Err = Traced<E>;

    async fn execute(
        &self,
        DoctorSchedule { doctor_id, month }: DoctorSchedule,
    ) -> Result<Self::Ok, Self::Err> {
        log::debug!("resolving schedule of `Doctor({doctor_id})` for {month}");

        let period = Period { doctor_id, month };
        let backend = self.backend();
        let (defaults, overrides, assignments, branches) = futures::try_join!(
            backend.execute(Select(By::<Vec<DefaultWeekly>, _>::new(doctor_id))),
            backend.execute(Select(By::<Vec<Override>, _>::new(period))),
            backend.execute(Select(By::<Vec<Assignment>, _>::new(period))),
            backend.execute(Select(By::<Vec<Branch>, _>::new(()))),
        )
        .map_err(tracerr::wrap!(=> E))?;

        let snapshot = Snapshot {
            defaults,
            overrides,
            assignments,
            branches,
        };
        Ok(Resolver::new(doctor_id, &snapshot).month(month))
    }
}

#[cfg(test)]
mod spec {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    use common::{
        operations::{By, Select},
        Date, Month, Weekday,
    };
    use derive_more::{Display, Error as StdError};
    use tracerr::Traced;
    use uuid::Uuid;

    use crate::{
        domain::{
            branch, doctor,
            schedule::{OverrideKind, Period},
            Assignment, Branch, DefaultWeekly, Override,
        },
        infra::Backend,
        read::schedule::{Snapshot, Source},
        Service,
    };

    use super::DoctorSchedule;

    /// Failure of the [`Fake`] backend.
    #[derive(Clone, Copy, Debug, Display, StdError)]
    #[display("backend is unavailable")]
    struct Unavailable;

    /// In-memory [`Backend`] serving a fixed [`Snapshot`] as is.
    #[derive(Clone, Debug, Default)]
    struct Fake {
        snapshot: Arc<Snapshot>,
        fail_overrides: bool,
        branches_fetched: Arc<AtomicBool>,
    }

    impl Backend<Select<By<Vec<DefaultWeekly>, doctor::Id>>> for Fake {
        type Ok = Vec<DefaultWeekly>;
        type Err = Traced<Unavailable>;

        async fn execute(
            &self,
            _: Select<By<Vec<DefaultWeekly>, doctor::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(self.snapshot.defaults.clone())
        }
    }

    impl Backend<Select<By<Vec<Override>, Period>>> for Fake {
        type Ok = Vec<Override>;
        type Err = Traced<Unavailable>;

        async fn execute(
            &self,
            _: Select<By<Vec<Override>, Period>>,
        ) -> Result<Self::Ok, Self::Err> {
            if self.fail_overrides {
                return Err(tracerr::new!(Unavailable));
            }
            Ok(self.snapshot.overrides.clone())
        }
    }

    impl Backend<Select<By<Vec<Assignment>, Period>>> for Fake {
        type Ok = Vec<Assignment>;
        type Err = Traced<Unavailable>;

        async fn execute(
            &self,
            _: Select<By<Vec<Assignment>, Period>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(self.snapshot.assignments.clone())
        }
    }

    impl Backend<Select<By<Vec<Branch>, ()>>> for Fake {
        type Ok = Vec<Branch>;
        type Err = Traced<Unavailable>;

        async fn execute(
            &self,
            _: Select<By<Vec<Branch>, ()>>,
        ) -> Result<Self::Ok, Self::Err> {
            self.branches_fetched.store(true, Ordering::SeqCst);
            Ok(self.snapshot.branches.clone())
        }
    }

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn doctor() -> doctor::Id {
        doctor::Id::from(Uuid::from_u128(1))
    }

    fn snapshot() -> (Snapshot, Branch, Branch) {
        let a = Branch {
            id: branch::Id::from(Uuid::from_u128(101)),
            name: branch::Name::new("Downtown").unwrap(),
        };
        let b = Branch {
            id: branch::Id::from(Uuid::from_u128(102)),
            name: branch::Name::new("Riverside").unwrap(),
        };
        let weekdays = [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ];
        let snapshot = Snapshot {
            defaults: weekdays
                .into_iter()
                .map(|weekday| DefaultWeekly {
                    doctor_id: doctor(),
                    weekday,
                    branch_id: Some(a.id),
                })
                .collect(),
            overrides: vec![
                Override {
                    doctor_id: doctor(),
                    date: date("2024-06-08"),
                    kind: OverrideKind::Working(b.id),
                },
                Override {
                    doctor_id: doctor(),
                    date: date("2024-06-15"),
                    kind: OverrideKind::Working(b.id),
                },
                Override {
                    doctor_id: doctor(),
                    date: date("2024-07-01"),
                    kind: OverrideKind::Off,
                },
            ],
            assignments: vec![Assignment {
                doctor_id: doctor(),
                date: date("2024-06-10"),
                branch_id: a.id,
                expected_revenue: Some("5000".parse().unwrap()),
            }],
            branches: vec![a.clone(), b.clone()],
        };
        (snapshot, a, b)
    }

    #[tokio::test]
    async fn resolves_whole_month() {
        let (snapshot, a, b) = snapshot();
        let backend = Fake {
            snapshot: Arc::new(snapshot),
            ..Fake::default()
        };
        let service = Service::new(backend.clone());

        let schedule = service
            .execute(DoctorSchedule {
                doctor_id: doctor(),
                month: Month::new(2024, 6).unwrap(),
            })
            .await
            .unwrap();

        assert!(backend.branches_fetched.load(Ordering::SeqCst));
        assert_eq!(schedule.days.len(), 30);
        // June 2024: 20 weekdays, 2 working Saturdays, 8 weekend days off.
        assert_eq!(schedule.summary.total_days, 30);
        assert_eq!(schedule.summary.default_days, 20);
        assert_eq!(schedule.summary.override_days, 2);
        assert_eq!(schedule.summary.working_days, 22);
        assert_eq!(schedule.summary.off_days, 8);

        let tenth = &schedule.days[9];
        assert_eq!(tenth.date, date("2024-06-10"));
        assert_eq!(tenth.source, Source::Default);
        assert_eq!(tenth.branch(), Some(&a));
        assert_eq!(tenth.expected_revenue(), Some("5000".parse().unwrap()));

        let saturday = &schedule.days[7];
        assert_eq!(saturday.date, date("2024-06-08"));
        assert_eq!(saturday.source, Source::Override);
        assert_eq!(saturday.branch(), Some(&b));
    }

    #[tokio::test]
    async fn ignores_other_months_overrides() {
        let (snapshot, a, _) = snapshot();
        let service = Service::new(Fake {
            snapshot: Arc::new(snapshot),
            ..Fake::default()
        });

        let schedule = service
            .execute(DoctorSchedule {
                doctor_id: doctor(),
                month: Month::new(2024, 7).unwrap(),
            })
            .await
            .unwrap();

        let first = &schedule.days[0];
        assert_eq!(first.date, date("2024-07-01"));
        assert!(first.is_off());
        assert_eq!(first.source, Source::Override);

        let second = &schedule.days[1];
        assert_eq!(second.source, Source::Default);
        assert_eq!(second.branch(), Some(&a));
        assert_eq!(second.expected_revenue(), None);

        // July 2024: 23 weekdays, the 1st of them is off by override.
        assert_eq!(schedule.summary.default_days, 22);
        assert_eq!(schedule.summary.override_days, 0);
        assert_eq!(schedule.summary.off_days, 9);
        assert_eq!(schedule.summary.total_days, 31);
    }

    #[tokio::test]
    async fn fails_whole_month_on_any_fetch_failure() {
        let (snapshot, _, _) = snapshot();
        let service = Service::new(Fake {
            snapshot: Arc::new(snapshot),
            fail_overrides: true,
            ..Fake::default()
        });

        let res = service
            .execute(DoctorSchedule {
                doctor_id: doctor(),
                month: Month::new(2024, 6).unwrap(),
            })
            .await;

        assert!(res.is_err());
    }
}
