use inv_extract::Extractor;
use inv_model::CleaningOptions;

use crate::prompts::Prompts;

/// Everything a field processor needs besides the record itself.
#[derive(Clone, Copy)]
pub struct CleaningContext<'a> {
    pub options: CleaningOptions,
    pub extractor: &'a dyn Extractor,
    pub prompts: &'a Prompts,
    /// Allow raw cell values in `trace` events.
    pub log_data: bool,
}

impl<'a> CleaningContext<'a> {
    pub fn new(extractor: &'a dyn Extractor, prompts: &'a Prompts) -> Self {
        Self {
            options: CleaningOptions::default(),
            extractor,
            prompts,
            log_data: false,
        }
    }

    pub fn with_options(mut self, options: CleaningOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_log_data(mut self, log_data: bool) -> Self {
        self.log_data = log_data;
        self
    }
}
