mod seed_task;

pub use seed_task::SeedTask;

#[cfg(test)]
pub use seed_task::MockSeedTask;
