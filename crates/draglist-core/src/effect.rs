/// Effect slot that runs at most once per mount.
///
/// Models an effect with an empty dependency list: the first `run` after a
/// mount executes the effect, later calls are skipped until [`remount`]
/// resets the slot.
///
/// [`remount`]: MountEffect::remount
#[derive(Debug, Default)]
pub struct MountEffect {
    ran_this_mount: bool,
}

impl MountEffect {
    pub fn new() -> Self {
        Self::default()
    }

    fn should_run(&self) -> bool {
        !self.ran_this_mount
    }

    /// Run `effect` if it has not run yet for the current mount.
    pub fn run<R>(&mut self, effect: impl FnOnce() -> R) -> Option<R> {
        if !self.should_run() {
            return None;
        }
        self.ran_this_mount = true;
        Some(effect())
    }

    pub fn has_run(&self) -> bool {
        self.ran_this_mount
    }

    /// Start a new mount; the next `run` executes again.
    pub fn remount(&mut self) {
        self.ran_this_mount = false;
    }
}

#[cfg(test)]
#[path = "tests/effect_tests.rs"]
mod tests;
