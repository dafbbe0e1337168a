use tracing::{error, info};

use crate::modules::seed::application::ports::SeedTask;
use crate::modules::seed::domain::SeedReport;

//
// ──────────────────────────────────────────────────────────
// Startup seeding
// ──────────────────────────────────────────────────────────
// Collections are seeded one after another. A failing collection is
// logged and recorded; the rest still run.
//

pub struct SeedReconciler {
    tasks: Vec<Box<dyn SeedTask>>,
}

impl SeedReconciler {
    pub fn new(tasks: Vec<Box<dyn SeedTask>>) -> Self {
        Self { tasks }
    }

    pub fn collections(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|task| task.collection()).collect()
    }

    pub async fn run(&self) -> SeedReport {
        info!("Checking whether {} collection(s) need seeding", self.tasks.len());

        let mut report = SeedReport::default();
        for task in &self.tasks {
            let outcome = task.seed().await;

            if let Err(e) = &outcome {
                error!(
                    "Seeding {} ({}) failed, continuing: {}",
                    task.collection(),
                    task.policy(),
                    e
                );
            }

            report.entries.push((task.collection(), outcome));
        }

        info!(
            "Seeding finished: {} collection(s), {} failure(s)",
            report.entries.len(),
            report.failures()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::ports::outgoing::RepositoryError;
    use crate::modules::seed::application::ports::MockSeedTask;
    use crate::modules::seed::domain::{SeedError, SeedOutcome, SeedPolicy};
    use mockall::Sequence;

    fn task(
        collection: &'static str,
        outcome: Result<SeedOutcome, SeedError>,
        seq: &mut Sequence,
    ) -> Box<dyn SeedTask> {
        let mut task = MockSeedTask::new();
        task.expect_collection().return_const(collection);
        task.expect_policy().return_const(SeedPolicy::FillIfEmpty);
        task.expect_seed()
            .times(1)
            .in_sequence(seq)
            .return_once(move || outcome);
        Box::new(task)
    }

    #[tokio::test]
    async fn failure_in_one_collection_does_not_stop_the_others() {
        let mut seq = Sequence::new();
        let reconciler = SeedReconciler::new(vec![
            task(
                "projects",
                Ok(SeedOutcome::Applied { inserted: 2, updated: 0 }),
                &mut seq,
            ),
            task(
                "skills",
                Err(SeedError::Repository(RepositoryError::DuplicateKey(
                    "E11000".to_string(),
                ))),
                &mut seq,
            ),
            task("blog_posts", Ok(SeedOutcome::Skipped { existing: 3 }), &mut seq),
        ]);

        let report = reconciler.run().await;

        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.failures(), 1);
        assert!(matches!(report.outcome("skills"), Some(Err(_))));
        assert_eq!(
            report.outcome("blog_posts"),
            Some(&Ok(SeedOutcome::Skipped { existing: 3 }))
        );
    }

    #[tokio::test]
    async fn empty_reconciler_reports_nothing() {
        let report = SeedReconciler::new(vec![]).run().await;

        assert!(report.entries.is_empty());
        assert_eq!(report.failures(), 0);
    }

    #[test]
    fn collections_are_listed_in_run_order() {
        let mut first = MockSeedTask::new();
        first.expect_collection().return_const("personal_info");
        let mut second = MockSeedTask::new();
        second.expect_collection().return_const("settings");

        let reconciler = SeedReconciler::new(vec![Box::new(first), Box::new(second)]);

        assert_eq!(reconciler.collections(), vec!["personal_info", "settings"]);
    }
}
