pub mod content_repository_mongo;

pub use content_repository_mongo::MongoContentRepository;
