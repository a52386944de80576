//! Transient "added" acknowledgment on the control that triggered an add.
//!
//! The control switches to [`ADDED_LABEL`] in its success tone and reverts
//! after a delay. The revert runs on a Tokio task that nobody awaits or
//! cancels. When a control is acknowledged again before its revert fires,
//! only the latest timer reverts, and it restores the label the control had
//! before the first acknowledgment.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Label shown while a control is acknowledging.
pub const ADDED_LABEL: &str = "¡Añadido!";

/// How long the acknowledgment stays up.
pub const DEFAULT_ACK_DELAY: Duration = Duration::from_millis(1500);

/// Visual tone of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Primary,
    Success,
}

/// A UI control that can show an acknowledgment.
pub trait AckTarget: Send + Sync + 'static {
    /// Current label.
    fn label(&self) -> String;

    /// Replace the label.
    fn set_label(&self, label: &str);

    /// Switch tone.
    fn set_tone(&self, tone: Tone);
}

/// A control plus its acknowledgment bookkeeping.
pub struct AckControl<T> {
    target: T,
    resting_label: Mutex<Option<String>>,
    generation: AtomicU64,
}

impl<T: AckTarget> AckControl<T> {
    pub fn new(target: T) -> Arc<Self> {
        Arc::new(Self {
            target,
            resting_label: Mutex::new(None),
            generation: AtomicU64::new(0),
        })
    }

    /// The wrapped control.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Check if an acknowledgment is showing.
    pub fn is_acknowledging(&self) -> bool {
        self.resting().is_some()
    }

    /// Show the acknowledgment and schedule its revert after `delay`.
    ///
    /// Must be called from within a Tokio runtime. The returned handle may be
    /// dropped; the revert still runs.
    pub fn acknowledge(self: &Arc<Self>, delay: Duration) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut resting = self.resting();
            if resting.is_none() {
                *resting = Some(self.target.label());
            }
        }
        self.target.set_label(ADDED_LABEL);
        self.target.set_tone(Tone::Success);

        let control = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            control.revert(generation);
        })
    }

    fn revert(&self, generation: u64) {
        if self.generation.load(Ordering::SeqCst) != generation {
            return;
        }
        if let Some(label) = self.resting().take() {
            self.target.set_label(&label);
        }
        self.target.set_tone(Tone::Primary);
    }

    fn resting(&self) -> MutexGuard<'_, Option<String>> {
        self.resting_label
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
