// Startup bookkeeping for independent page subsystems.

/// Brings subsystems up one at a time. A subsystem whose setup fails is
/// logged and recorded as disabled; the next one is still attempted.
#[derive(Debug, Default)]
pub struct Launch {
    started: Vec<&'static str>,
    disabled: Vec<&'static str>,
}

impl Launch {
    /// Run `setup` for `label`, returning its value on success.
    pub fn attempt<T>(
        &mut self,
        label: &'static str,
        setup: impl FnOnce() -> anyhow::Result<T>,
    ) -> Option<T> {
        match setup() {
            Ok(value) => {
                self.started.push(label);
                Some(value)
            }
            Err(e) => {
                log::warn!("[{}] disabled: {:?}", label, e);
                self.disabled.push(label);
                None
            }
        }
    }

    pub fn started(&self) -> &[&'static str] {
        &self.started
    }

    pub fn disabled(&self) -> &[&'static str] {
        &self.disabled
    }

    pub fn log_summary(&self) {
        log::info!(
            "started [{}], disabled [{}]",
            self.started().join(", "),
            self.disabled().join(", ")
        );
    }
}
