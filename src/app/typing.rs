use leptos::prelude::*;

use crate::typing::{TypingEffect, TypingError};

pub struct UseTypingEffectReturn<StopFn>
where
    StopFn: Fn() + Clone + Send + Sync,
{
    pub text: ReadSignal<String>,
    pub stop: StopFn,
}

/// Runs a [`TypingEffect`] for the lifetime of the current reactive owner.
pub fn use_typing_effect<I, S>(
    phrases: I,
    type_interval_ms: u64,
    hold_ms: u64,
) -> Result<UseTypingEffectReturn<impl Fn() + Clone + Send + Sync>, TypingError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let effect = TypingEffect::create(phrases, type_interval_ms, hold_ms)?;
    let (text, driver) = TypingDriver::attach(effect);

    // effects only run in the browser, so nothing is scheduled during SSR
    Effect::new(move |started: Option<()>| {
        if started.is_none() {
            driver.schedule();
        }
    });

    Ok(UseTypingEffectReturn {
        text,
        stop: move || driver.stop(),
    })
}

#[derive(Clone, Copy)]
struct TypingDriver {
    effect: StoredValue<TypingEffect>,
    pending: StoredValue<Option<TimeoutHandle>>,
    set_text: WriteSignal<String>,
}

impl TypingDriver {
    fn attach(effect: TypingEffect) -> (ReadSignal<String>, Self) {
        let (text, set_text) = signal(effect.display_text().to_string());
        let driver = Self {
            effect: StoredValue::new(effect),
            pending: StoredValue::new(None),
            set_text,
        };
        on_cleanup(move || driver.stop());
        (text, driver)
    }

    fn stop(&self) {
        self.effect.try_update_value(TypingEffect::stop);
        if let Some(handle) = self.pending.try_get_value().flatten() {
            handle.clear();
        }
        self.pending.try_set_value(None);
    }

    fn step(self) {
        self.pending.try_set_value(None);
        // disposed or stopped effects yield nothing and schedule nothing
        if let Some(text) = self.effect.try_update_value(TypingEffect::tick).flatten() {
            self.set_text.try_set(text);
        }
        self.schedule();
    }

    fn schedule(self) {
        let Some(delay) = self.effect.try_with_value(TypingEffect::next_delay).flatten() else {
            return;
        };
        match set_timeout_with_handle(move || self.step(), delay) {
            Ok(handle) => {
                self.pending.try_set_value(Some(handle));
            }
            Err(e) => log::error!("couldn't schedule typing step: {e:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(phrases: &[&str]) -> TypingEffect {
        TypingEffect::create(phrases.iter().copied(), 100, 200).unwrap()
    }

    #[test]
    fn test_stop_leaves_text_and_schedules_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let (text, driver) = TypingDriver::attach(effect(&["ab"]));
            driver.stop();
            driver.stop();
            driver.step();
            assert_eq!(text.get_untracked(), "");
            assert!(driver.effect.with_value(TypingEffect::is_stopped));
            assert!(driver.pending.get_value().is_none());
        });
    }

    #[test]
    fn test_cleanup_disposes_driver() {
        let owner = Owner::new();
        let (text, driver) = owner.with(|| TypingDriver::attach(effect(&["Go", "Rust"])));
        assert_eq!(text.get_untracked(), "");
        owner.cleanup();
        assert!(driver.effect.try_with_value(TypingEffect::is_stopped).is_none());
        assert!(text.try_get_untracked().is_none());
        // a timer firing after disposal finds nothing to do
        driver.step();
        driver.stop();
    }
}
