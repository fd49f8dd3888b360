use std::time::{Duration, Instant};

/// Wall-time statistics for a single pipeline invocation.
#[derive(Debug, Clone)]
pub struct PipelineStats {
    /// Total execution time.
    pub total_time: Duration,
}

impl PipelineStats {
    /// Create a new stats tracker (call at start of operation).
    pub(crate) fn start() -> PipelineStatsBuilder {
        PipelineStatsBuilder {
            start_time: Instant::now(),
        }
    }
}

/// Builder for PipelineStats - tracks timing from creation to finalize.
pub(crate) struct PipelineStatsBuilder {
    start_time: Instant,
}

impl PipelineStatsBuilder {
    pub fn finish(self) -> PipelineStats {
        PipelineStats {
            total_time: self.start_time.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PipelineStats;
    use std::time::Duration;

    #[test]
    fn measures_elapsed_time() {
        let builder = PipelineStats::start();
        std::thread::sleep(Duration::from_millis(5));
        let stats = builder.finish();
        assert!(stats.total_time >= Duration::from_millis(5));
    }
}
