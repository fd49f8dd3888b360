use std::path::PathBuf;
use std::time::Duration;

use tokenizers::Tokenizer;

use crate::error::{PipelineError, Result};

/// Fetches a single file from a Hugging Face Hub repository, using the
/// local hub cache when the file is already present.
#[derive(Debug, Clone)]
pub struct HfLoader {
    pub repo: String,
    pub filename: String,
}

impl HfLoader {
    pub fn new(repo: &str, filename: &str) -> Self {
        Self {
            repo: repo.into(),
            filename: filename.into(),
        }
    }

    pub fn load(&self) -> Result<PathBuf> {
        let hf_api = hf_hub::api::sync::Api::new().map_err(|e| {
            PipelineError::Download(format!("Failed to initialize HuggingFace API: {e}"))
        })?;
        let hf_repo = hf_api.model(self.repo.clone());

        let max_retries = 3;

        for attempt in 0..max_retries {
            match hf_repo.get(self.filename.as_str()) {
                Ok(path) => return Ok(path),
                Err(e) => {
                    let error_msg = e.to_string();
                    // Concurrent first-use can contend on the hub cache lock.
                    if error_msg.contains("Lock acquisition failed") && attempt < max_retries - 1 {
                        std::thread::sleep(Duration::from_millis(100 * (1 << attempt)));
                        continue;
                    }
                    return Err(PipelineError::Download(format!(
                        "Failed to download '{}' from '{}': {}",
                        self.filename, self.repo, error_msg
                    )));
                }
            }
        }

        Err(PipelineError::Download(format!(
            "Download timed out for '{}' from '{}' after {} attempt(s)",
            self.filename, self.repo, max_retries
        )))
    }
}

/// Loads a repository's `tokenizer.json` into a ready [`Tokenizer`].
#[derive(Clone)]
pub struct TokenizerLoader {
    tokenizer_file_loader: HfLoader,
}

impl TokenizerLoader {
    pub fn new(repo: &str) -> Self {
        Self {
            tokenizer_file_loader: HfLoader::new(repo, "tokenizer.json"),
        }
    }

    pub fn load(&self) -> Result<Tokenizer> {
        let tokenizer_file_path = self.tokenizer_file_loader.load()?;
        let path_str = tokenizer_file_path.display().to_string();

        Tokenizer::from_file(&tokenizer_file_path).map_err(|e| {
            PipelineError::Tokenization(format!(
                "Failed to load tokenizer from '{}': {}",
                path_str, e
            ))
        })
    }
}
