//! Text processing in front of a repository

use crate::consts::PROCESSED_SUFFIX;
use crate::repository::DataRepository;

/// Marks data as processed and saves it through a borrowed repository
pub struct DataProcessor<'a> {
    repository: &'a mut dyn DataRepository,
}

impl<'a> DataProcessor<'a> {
    pub fn new(repository: &'a mut dyn DataRepository) -> Self {
        Self { repository }
    }

    /// Append `" (processed)"` to `data` and save the result
    pub fn process_and_save(&mut self, data: &str) {
        let processed = format!("{}{}", data, PROCESSED_SUFFIX);
        self.repository.save(&processed);
    }
}
