//! Account settings submission

use leptos::logging::warn;

use crate::core::auth::{
    AccountApi, BusyFlag, BusyGuard, Navigator, Notifier, SettingsRequest, SubmitOutcome,
};
use crate::core::form::{FieldId, FormState};
use crate::core::messages::{Locale, Messages};

impl SettingsRequest {
    /// Snapshot the settings fields of a form. A blank image is sent as null.
    pub fn from_form(form: &FormState) -> Self {
        let image = form.value(FieldId::Image);
        Self {
            name: form.value(FieldId::Name).to_string(),
            image: (!image.is_empty()).then(|| image.to_string()),
        }
    }
}

/// Sends the settings form to the backend and closes the modal on success
#[derive(Clone)]
pub struct SettingsSubmission<A, N, V, B> {
    accounts: A,
    notifier: N,
    navigator: V,
    busy: B,
    messages: &'static Messages,
}

impl<A, N, V, B> SettingsSubmission<A, N, V, B>
where
    A: AccountApi,
    N: Notifier,
    V: Navigator,
    B: BusyFlag,
{
    pub fn new(accounts: A, notifier: N, navigator: V, busy: B) -> Self {
        Self {
            accounts,
            notifier,
            navigator,
            busy,
            messages: Locale::default().messages(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.messages = locale.messages();
        self
    }

    /// Submit the snapshot; `on_close` runs only after a successful update
    pub async fn submit(
        &self,
        request: SettingsRequest,
        on_close: impl FnOnce(),
    ) -> SubmitOutcome {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            return SubmitOutcome::Ignored;
        };

        match self.accounts.update_settings(&request).await {
            Ok(()) => {
                self.navigator.refresh();
                on_close();
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                warn!("Settings update failed: {}", err);
                self.notifier.error(self.messages.unknown_error);
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;
    use crate::core::auth::ClientError;
    use crate::core::auth::fakes::{Event, FakeAccounts, Recorder};
    use crate::core::messages::VI;

    fn submission(
        result: Result<(), ClientError>,
    ) -> (
        SettingsSubmission<FakeAccounts, Recorder, Recorder, std::rc::Rc<Cell<bool>>>,
        Recorder,
    ) {
        let rec = Recorder::default();
        let accounts = FakeAccounts {
            recorder: rec.clone(),
            result,
        };
        (
            SettingsSubmission::new(accounts, rec.clone(), rec.clone(), rec.busy.clone()),
            rec,
        )
    }

    fn request() -> SettingsRequest {
        SettingsRequest {
            name: "Thu".to_string(),
            image: Some("https://cdn/t.png".to_string()),
        }
    }

    #[test]
    fn test_success_refreshes_then_closes() {
        let (sub, rec) = submission(Ok(()));
        let closed = Cell::new(false);

        let outcome = block_on(sub.submit(request(), || closed.set(true)));

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        assert!(closed.get());
        assert_eq!(rec.events(), vec![Event::Settings(request()), Event::Refresh]);
        assert!(!rec.busy.get());
    }

    #[test]
    fn test_failure_shows_generic_error_and_stays_open() {
        let (sub, rec) = submission(Err(ClientError::Status(500)));
        let closed = Cell::new(false);

        let outcome = block_on(sub.submit(request(), || closed.set(true)));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(!closed.get());
        assert_eq!(
            rec.events(),
            vec![
                Event::Settings(request()),
                Event::Error(VI.unknown_error.to_string())
            ]
        );
        assert!(!rec.busy.get());
    }

    #[test]
    fn test_busy_held_during_call() {
        let (sub, rec) = submission(Ok(()));
        block_on(sub.submit(request(), || {}));
        assert_eq!(*rec.busy_during_calls.borrow(), vec![true]);
    }

    #[test]
    fn test_request_from_form() {
        let mut form = FormState::with_defaults([(FieldId::Name, "Thu")]);
        assert_eq!(SettingsRequest::from_form(&form).image, None);

        form.set_value(FieldId::Image, "https://cdn/t.png");
        assert_eq!(SettingsRequest::from_form(&form), request());
    }
}
