mod collection_seeder;
mod seed_reconciler;

pub use collection_seeder::CollectionSeeder;
pub use seed_reconciler::SeedReconciler;
