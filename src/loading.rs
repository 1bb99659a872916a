/// Stages of the full-screen loading gate.
///
/// The two gate halves close, the progress bar runs, the result is held
/// briefly, then the gate opens again and the run ends back at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingStage {
    #[default]
    Idle,
    Closing,
    Progress,
    Hold,
    Opening,
}

impl LoadingStage {
    pub fn duration_ms(self) -> u64 {
        match self {
            LoadingStage::Idle => 0,
            LoadingStage::Closing => 1000,
            LoadingStage::Progress => 2500,
            LoadingStage::Hold => 500,
            LoadingStage::Opening => 1200,
        }
    }

    pub fn next(self) -> Self {
        match self {
            LoadingStage::Idle => LoadingStage::Idle,
            LoadingStage::Closing => LoadingStage::Progress,
            LoadingStage::Progress => LoadingStage::Hold,
            LoadingStage::Hold => LoadingStage::Opening,
            LoadingStage::Opening => LoadingStage::Idle,
        }
    }

    /// Starts a run. A run already in progress is left alone.
    pub fn start(self) -> Option<Self> {
        match self {
            LoadingStage::Idle => Some(LoadingStage::Closing),
            _ => None,
        }
    }

    pub fn is_running(self) -> bool {
        self != LoadingStage::Idle
    }

    pub fn is_gate_closed(self) -> bool {
        matches!(
            self,
            LoadingStage::Closing | LoadingStage::Progress | LoadingStage::Hold
        )
    }

    pub fn is_content_active(self) -> bool {
        matches!(self, LoadingStage::Progress | LoadingStage::Hold)
    }
}

/// Length of one complete run, from `Closing` back to `Idle`.
pub fn total_duration_ms() -> u64 {
    let mut stage = LoadingStage::Closing;
    let mut total = 0;
    while stage.is_running() {
        total += stage.duration_ms();
        stage = stage.next();
    }
    total
}

/// Quadratic ease-in-out on `[0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Rounded percentage shown while the progress stage has run for `elapsed_ms`.
pub fn progress_percent(elapsed_ms: f64) -> u8 {
    let t = elapsed_ms / LoadingStage::Progress.duration_ms() as f64;
    (ease_in_out(t) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_sequence() {
        let mut stage = LoadingStage::Idle.start().expect("idle gate should start");
        let mut seen = vec![stage];
        while stage.is_running() {
            stage = stage.next();
            seen.push(stage);
        }
        assert_eq!(
            seen,
            vec![
                LoadingStage::Closing,
                LoadingStage::Progress,
                LoadingStage::Hold,
                LoadingStage::Opening,
                LoadingStage::Idle,
            ]
        );
    }

    #[test]
    fn test_start_only_when_idle() {
        assert_eq!(LoadingStage::Progress.start(), None);
        assert_eq!(LoadingStage::Opening.start(), None);
        assert_eq!(LoadingStage::Idle.next(), LoadingStage::Idle);
    }

    #[test]
    fn test_gate_flags() {
        assert!(LoadingStage::Closing.is_gate_closed());
        assert!(!LoadingStage::Closing.is_content_active());
        assert!(LoadingStage::Hold.is_content_active());
        assert!(!LoadingStage::Opening.is_gate_closed());
        assert!(LoadingStage::Opening.is_running());
    }

    #[test]
    fn test_total_duration() {
        assert_eq!(total_duration_ms(), 5200);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0.0), 0);
        assert_eq!(progress_percent(1250.0), 50);
        assert_eq!(progress_percent(2500.0), 100);
        assert_eq!(progress_percent(9000.0), 100);
        assert!(progress_percent(600.0) < progress_percent(1900.0));
    }
}
