// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod movie_repository;

// Re-exports
pub use config::{DynamoDbConfig, DynamoDbConfigError};
pub use logging::init_logging;
pub use movie_repository::{DynamoMovieRepository, MovieRepository, MovieRepositoryError};
